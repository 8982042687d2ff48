//! List products command handler

use crate::catalog::Category;
use crate::config::Config;
use crate::db::Store;

pub async fn cmd_list(config: &Config, category: Option<&str>) -> anyhow::Result<()> {
    // Reject typos before hitting the database.
    let category = match category {
        Some(raw) => Some(raw.parse::<Category>()?),
        None => None,
    };

    let store = Store::new(&config.general.database_path).await?;
    let rows = store
        .list_products(category.map(|c| c.as_str()))
        .await?;

    if rows.is_empty() {
        println!("No products found. Run 'pricedex seed' first.");
        return Ok(());
    }

    println!("Products ({} total)", rows.len());
    println!("{:-<70}", "");

    for row in rows {
        println!("[{:>4}] {:<12} {}", row.id, row.category, row.name);
    }

    Ok(())
}
