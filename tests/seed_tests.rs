//! Integration tests for the catalog seeder against a real SQLite store.

use std::collections::HashSet;

use pricedex::catalog::{self, Category, ProductAttrs};
use pricedex::db::Store;

struct TestDb {
    store: Store,
    path: std::path::PathBuf,
}

impl Drop for TestDb {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.path);
    }
}

async fn test_store() -> TestDb {
    let path = std::env::temp_dir().join(format!("pricedex-test-{}.db", uuid::Uuid::new_v4()));
    let store = Store::new(&format!("sqlite:{}", path.display()))
        .await
        .expect("failed to create test store");
    TestDb { store, path }
}

#[tokio::test]
async fn test_seed_empty_store() {
    let db = test_store().await;
    let entries = catalog::build_catalog(Vec::new()).unwrap();

    let report = db.store.seed_catalog(&entries).await.unwrap();

    assert_eq!(report.inserted as usize, entries.len());
    assert_eq!(report.skipped, 0);
    assert_eq!(db.store.product_count().await.unwrap() as usize, entries.len());
}

#[tokio::test]
async fn test_reseeding_is_idempotent() {
    let db = test_store().await;
    let entries = catalog::build_catalog(Vec::new()).unwrap();

    db.store.seed_catalog(&entries).await.unwrap();
    let first_total = db.store.product_count().await.unwrap();
    let first_counts = db.store.product_counts_by_category().await.unwrap();

    let second = db.store.seed_catalog(&entries).await.unwrap();

    assert_eq!(second.inserted, 0);
    assert_eq!(second.skipped as usize, entries.len());
    assert_eq!(db.store.product_count().await.unwrap(), first_total);
    assert_eq!(
        db.store.product_counts_by_category().await.unwrap(),
        first_counts
    );
}

#[tokio::test]
async fn test_seed_sees_constraint_on_every_pooled_connection() {
    // Connections opened at pool startup, before the migration runs, must
    // still resolve ON CONFLICT (category, name) against the table schema.
    let path = std::env::temp_dir().join(format!("pricedex-test-{}.db", uuid::Uuid::new_v4()));
    let store = Store::with_pool_options(&format!("sqlite:{}", path.display()), 5, 5)
        .await
        .expect("failed to create test store");
    let db = TestDb { store, path };

    let entries = catalog::build_catalog(Vec::new()).unwrap();
    let report = db.store.seed_catalog(&entries).await.unwrap();
    assert_eq!(report.inserted as usize, entries.len());

    // Re-seed from several tasks at once so more than one pool connection
    // has to handle the conflict path.
    let tasks: Vec<_> = (0..4)
        .map(|_| {
            let store = db.store.clone();
            let entries = entries.clone();
            tokio::spawn(async move { store.seed_catalog(&entries).await })
        })
        .collect();
    for task in tasks {
        let report = task.await.unwrap().unwrap();
        assert_eq!(report.inserted, 0);
        assert_eq!(report.skipped as usize, entries.len());
    }

    assert_eq!(db.store.product_count().await.unwrap() as usize, entries.len());
}

#[tokio::test]
async fn test_partial_run_is_resumable() {
    let db = test_store().await;
    let entries = catalog::build_catalog(Vec::new()).unwrap();

    // Simulate a run killed partway through.
    let half = entries.len() / 2;
    db.store.seed_catalog(&entries[..half]).await.unwrap();

    let report = db.store.seed_catalog(&entries).await.unwrap();

    assert_eq!(report.skipped as usize, half);
    assert_eq!(report.inserted as usize, entries.len() - half);
    assert_eq!(db.store.product_count().await.unwrap() as usize, entries.len());
}

#[tokio::test]
async fn test_category_name_pairs_are_unique() {
    let db = test_store().await;
    let entries = catalog::build_catalog(Vec::new()).unwrap();
    db.store.seed_catalog(&entries).await.unwrap();
    db.store.seed_catalog(&entries).await.unwrap();

    let rows = db.store.list_products(None).await.unwrap();
    let pairs: HashSet<(String, String)> = rows
        .iter()
        .map(|r| (r.category.clone(), r.name.clone()))
        .collect();

    assert_eq!(pairs.len(), rows.len());
}

#[tokio::test]
async fn test_per_category_counts_match_expansion() {
    let db = test_store().await;
    let entries = catalog::build_catalog(Vec::new()).unwrap();
    db.store.seed_catalog(&entries).await.unwrap();

    let counts = db.store.product_counts_by_category().await.unwrap();
    let get = |cat: &str| {
        counts
            .iter()
            .find(|(c, _)| c == cat)
            .map(|(_, n)| *n)
            .unwrap_or(0)
    };

    assert_eq!(get("cpu"), 38);
    assert_eq!(get("gpu"), 102);
    assert_eq!(get("case"), 29);

    for (category, expected) in catalog::expected_counts() {
        assert_eq!(
            get(category.as_str()),
            expected as u64,
            "count mismatch for {category}"
        );
    }
}

#[tokio::test]
async fn test_every_row_has_a_query() {
    let db = test_store().await;
    let entries = catalog::build_catalog(Vec::new()).unwrap();
    db.store.seed_catalog(&entries).await.unwrap();

    let rows = db.store.list_products(None).await.unwrap();
    assert!(!rows.is_empty());

    for row in rows {
        let json = row.attrs_json.expect("attrs_json must be set");
        let attrs: ProductAttrs =
            serde_json::from_str(&json).expect("attrs_json must deserialize");
        assert!(!attrs.query.trim().is_empty(), "empty query on {}", row.name);
        assert!(attrs.trust_floor > 0.0 && attrs.trust_floor <= 1.0);
    }
}

#[tokio::test]
async fn test_gpu_variants_survive_as_distinct_rows() {
    let db = test_store().await;
    let entries = catalog::build_catalog(Vec::new()).unwrap();
    db.store.seed_catalog(&entries).await.unwrap();

    let rows = db.store.search_products("RTX 4090", None, 25).await.unwrap();
    let names: Vec<&str> = rows.iter().map(|r| r.name.as_str()).collect();

    assert!(names.contains(&"NVIDIA RTX 4090 24GB (any AIB)"));
    assert!(names.contains(&"NVIDIA RTX 4090 24GB (reputable seller)"));
    assert!(names.contains(&"NVIDIA RTX 4090 24GB (Founders/Reference)"));
}

#[tokio::test]
async fn test_seeder_keeps_foreign_rows() {
    let db = test_store().await;

    // A row the bot added on its own, outside the embedded set.
    let mut foreign = catalog::build_catalog(Vec::new())
        .unwrap()
        .into_iter()
        .next()
        .unwrap();
    foreign.name = "Custom Tracked Product".to_string();
    foreign.attrs.query = foreign.name.clone();
    db.store.seed_catalog(&[foreign]).await.unwrap();

    let entries = catalog::build_catalog(Vec::new()).unwrap();
    db.store.seed_catalog(&entries).await.unwrap();

    let rows = db.store.search_products("Custom Tracked", None, 5).await.unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(
        db.store.product_count().await.unwrap() as usize,
        entries.len() + 1
    );
}

#[tokio::test]
async fn test_search_filters_by_category() {
    let db = test_store().await;
    let entries = catalog::build_catalog(Vec::new()).unwrap();
    db.store.seed_catalog(&entries).await.unwrap();

    // "Corsair" exists in ram, psu, cooler, and case rows.
    let all = db.store.search_products("Corsair", None, 100).await.unwrap();
    let psus = db
        .store
        .search_products("Corsair", Some(Category::Psu.as_str()), 100)
        .await
        .unwrap();

    assert!(all.len() > psus.len());
    assert!(!psus.is_empty());
    assert!(psus.iter().all(|r| r.category == "psu"));
}

#[tokio::test]
async fn test_extra_catalog_file_merges_and_seeds() {
    let db = test_store().await;

    let extra_path =
        std::env::temp_dir().join(format!("pricedex-extra-{}.toml", uuid::Uuid::new_v4()));
    std::fs::write(
        &extra_path,
        r#"
            [[products]]
            category = "gpu"
            brand = "NVIDIA"
            model = "RTX 4090"
            name = "NVIDIA RTX 4090 24GB (open box)"
            query = "NVIDIA RTX 4090 24GB"
            must_not = ["for parts"]
            trust_floor = 0.9
            seller_trust_required = true
        "#,
    )
    .unwrap();

    let extra = catalog::load_extra_catalog(&extra_path).unwrap();
    let entries = catalog::build_catalog(extra).unwrap();
    db.store.seed_catalog(&entries).await.unwrap();

    let rows = db.store.search_products("open box", None, 5).await.unwrap();
    assert_eq!(rows.len(), 1);

    let attrs: ProductAttrs =
        serde_json::from_str(rows[0].attrs_json.as_ref().unwrap()).unwrap();
    assert!(attrs.seller_trust_required);

    std::fs::remove_file(&extra_path).ok();
}

#[tokio::test]
async fn test_extra_entry_clashing_with_embedded_is_fatal() {
    // Same (category, name) as an embedded GPU row: configuration error,
    // caught before anything touches the database.
    let clash = catalog::build_catalog(Vec::new())
        .unwrap()
        .into_iter()
        .find(|e| e.category == Category::Gpu)
        .unwrap();

    assert!(catalog::build_catalog(vec![clash]).is_err());
}
