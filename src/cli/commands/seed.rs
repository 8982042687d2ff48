//! Seed command handler

use std::path::Path;

use crate::catalog;
use crate::config::Config;
use crate::db::Store;

pub async fn cmd_seed(config: &Config, dry_run: bool) -> anyhow::Result<()> {
    let extra = match &config.catalog.extra_path {
        Some(path) => catalog::load_extra_catalog(Path::new(path))?,
        None => Vec::new(),
    };
    let extra_count = extra.len();

    // Malformed catalog data is a configuration error; fail before any write.
    let entries = catalog::build_catalog(extra)?;

    match &config.catalog.extra_path {
        Some(path) => println!(
            "Catalog: {} entries ({} embedded, {} from {path})",
            entries.len(),
            entries.len() - extra_count,
            extra_count,
        ),
        None => println!("Catalog: {} entries", entries.len()),
    }

    if dry_run {
        println!("Dry run, nothing written.");
        print_expected_breakdown();
        return Ok(());
    }

    let store = Store::with_pool_options(
        &config.general.database_path,
        config.general.max_db_connections,
        config.general.min_db_connections,
    )
    .await?;

    let report = store.seed_catalog(&entries).await?;

    println!(
        "Seeded: {} inserted, {} skipped (already present)",
        report.inserted, report.skipped
    );
    println!();

    // Post-seed sanity check: read-only diagnostics, not part of the
    // write contract.
    let counts = store.product_counts_by_category().await?;
    let total = store.product_count().await?;

    println!("Rows per category:");
    for (category, n) in &counts {
        println!("  {category:<12} {n}");
    }
    println!("{:-<20}", "");
    println!("  {:<12} {}", "total", total);

    Ok(())
}

fn print_expected_breakdown() {
    println!();
    println!("Expected rows per category:");
    let mut total = 0;
    for (category, n) in catalog::expected_counts() {
        println!("  {:<12} {}", category.as_str(), n);
        total += n;
    }
    println!("{:-<20}", "");
    println!("  {:<12} {}", "total", total);
}
