//! Search products command handler

use crate::catalog::{Category, ProductAttrs};
use crate::config::Config;
use crate::db::Store;

pub async fn cmd_search(
    config: &Config,
    query: &str,
    category: Option<&str>,
) -> anyhow::Result<()> {
    let category = match category {
        Some(raw) => Some(raw.parse::<Category>()?),
        None => None,
    };

    let store = Store::new(&config.general.database_path).await?;
    let rows = store
        .search_products(query, category.map(|c| c.as_str()), 25)
        .await?;

    if rows.is_empty() {
        println!("No products matching '{query}'");
        return Ok(());
    }

    println!("Products matching '{query}' ({})", rows.len());
    println!("{:-<70}", "");

    for row in rows {
        println!("[{:>4}] {:<12} {}", row.id, row.category, row.name);

        if let Some(json) = &row.attrs_json {
            match serde_json::from_str::<ProductAttrs>(json) {
                Ok(attrs) => println!(
                    "       query: \"{}\" | trust floor: {:.2}",
                    attrs.query, attrs.trust_floor
                ),
                Err(_) => println!("       (unreadable attrs_json)"),
            }
        }
    }

    Ok(())
}
