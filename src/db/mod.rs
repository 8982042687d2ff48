use anyhow::Result;
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, Statement};
use std::path::Path;
use std::time::Duration;
use tracing::info;

use crate::catalog::CatalogEntry;
use crate::entities::products;

pub mod migrator;
pub mod repositories;

pub use repositories::product::SeedReport;

#[derive(Clone)]
pub struct Store {
    pub conn: DatabaseConnection,
}

impl Store {
    pub async fn new(db_url: &str) -> Result<Self> {
        Self::with_pool_options(db_url, 5, 1).await
    }

    pub async fn with_pool_options(
        db_url: &str,
        max_connections: u32,
        min_connections: u32,
    ) -> Result<Self> {
        use sea_orm_migration::MigratorTrait;

        if !db_url.contains(":memory:") {
            let path_str = db_url.trim_start_matches("sqlite:");
            if let Some(parent) = Path::new(path_str).parent() {
                tokio::fs::create_dir_all(parent).await.ok();
            }
            if !Path::new(path_str).exists() {
                std::fs::File::create(path_str)?;
            }
        }

        let mut opt = ConnectOptions::new(db_url.to_string());
        opt.max_connections(max_connections)
            .min_connections(min_connections)
            .connect_timeout(Duration::from_secs(10))
            .acquire_timeout(Duration::from_secs(10))
            .idle_timeout(Duration::from_secs(300))
            .max_lifetime(Duration::from_secs(600))
            .sqlx_logging(false);

        let conn = Database::connect(opt).await?;

        migrator::Migrator::up(&conn, None).await?;

        info!(
            "Database connected & migrations applied (pool: {}-{})",
            min_connections, max_connections
        );

        Ok(Self { conn })
    }

    pub async fn ping(&self) -> Result<()> {
        let backend = self.conn.get_database_backend();
        self.conn
            .query_one(Statement::from_string(backend, "SELECT 1".to_string()))
            .await?;
        Ok(())
    }

    fn product_repo(&self) -> repositories::product::ProductRepository {
        repositories::product::ProductRepository::new(self.conn.clone())
    }

    pub async fn seed_catalog(&self, entries: &[CatalogEntry]) -> Result<SeedReport> {
        self.product_repo().seed(entries).await
    }

    pub async fn product_count(&self) -> Result<u64> {
        self.product_repo().count_total().await
    }

    pub async fn product_counts_by_category(&self) -> Result<Vec<(String, u64)>> {
        self.product_repo().counts_by_category().await
    }

    pub async fn get_product(&self, id: i32) -> Result<Option<products::Model>> {
        self.product_repo().get(id).await
    }

    pub async fn list_products(
        &self,
        category: Option<&str>,
    ) -> Result<Vec<products::Model>> {
        self.product_repo().list(category).await
    }

    pub async fn search_products(
        &self,
        query: &str,
        category: Option<&str>,
        limit: u64,
    ) -> Result<Vec<products::Model>> {
        self.product_repo().search(query, category, limit).await
    }
}
