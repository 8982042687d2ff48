//! Verify command handler

use std::collections::HashMap;

use crate::catalog;
use crate::config::Config;
use crate::db::Store;

pub async fn cmd_verify(config: &Config) -> anyhow::Result<()> {
    let store = Store::new(&config.general.database_path).await?;
    store.ping().await?;

    let counts: HashMap<String, u64> = store
        .product_counts_by_category()
        .await?
        .into_iter()
        .collect();
    let total = store.product_count().await?;

    println!("{:<14}{:>8}{:>10}", "category", "rows", "expected");
    println!("{:-<32}", "");

    let mut expected_total = 0;
    let mut missing = 0u64;
    for (category, expected) in catalog::expected_counts() {
        let actual = counts.get(category.as_str()).copied().unwrap_or(0);
        let marker = if actual < expected as u64 { " <" } else { "" };
        println!(
            "{:<14}{actual:>8}{expected:>10}{marker}",
            category.as_str()
        );
        expected_total += expected;
        missing += (expected as u64).saturating_sub(actual);
    }

    println!("{:-<32}", "");
    println!("{:<14}{total:>8}{expected_total:>10}", "total");

    if missing > 0 {
        println!();
        println!("{missing} embedded rows missing; run 'pricedex seed' to fill them in.");
    }

    Ok(())
}
