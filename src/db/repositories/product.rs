use anyhow::Result;
use sea_orm::sea_query::OnConflict;
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect, Set,
};
use tracing::{debug, info};

use crate::catalog::CatalogEntry;
use crate::entities::{prelude::*, products};

/// Repository for the seeded product catalog.
pub struct ProductRepository {
    conn: DatabaseConnection,
}

impl ProductRepository {
    pub fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    // ========================================================================
    // Seeding
    // ========================================================================

    /// Insert every catalog entry, skipping rows whose (category, name)
    /// pair already exists. Conflicts are the expected "already seeded"
    /// signal and are counted, not raised; anything else aborts the run.
    pub async fn seed(&self, entries: &[CatalogEntry]) -> Result<SeedReport> {
        let mut report = SeedReport::default();

        for entry in entries {
            let active = products::ActiveModel {
                category: Set(entry.category.as_str().to_string()),
                brand: Set(Some(entry.brand.clone())),
                model: Set(Some(entry.model.clone())),
                name: Set(entry.name.clone()),
                attrs_json: Set(Some(entry.attrs_json()?)),
                ..Default::default()
            };

            let affected = Products::insert(active)
                .on_conflict(
                    OnConflict::columns([
                        products::Column::Category,
                        products::Column::Name,
                    ])
                    .do_nothing()
                    .to_owned(),
                )
                .exec_without_returning(&self.conn)
                .await?;

            if affected > 0 {
                report.inserted += 1;
            } else {
                debug!("already seeded: {} / {}", entry.category, entry.name);
                report.skipped += 1;
            }
        }

        info!(
            "Catalog seeded: {} inserted, {} skipped ({} total)",
            report.inserted,
            report.skipped,
            entries.len()
        );
        Ok(report)
    }

    // ========================================================================
    // Verification diagnostics (read-only)
    // ========================================================================

    pub async fn count_total(&self) -> Result<u64> {
        Ok(Products::find().count(&self.conn).await?)
    }

    pub async fn counts_by_category(&self) -> Result<Vec<(String, u64)>> {
        let counts: Vec<(String, i64)> = Products::find()
            .select_only()
            .column(products::Column::Category)
            .column_as(products::Column::Id.count(), "count")
            .group_by(products::Column::Category)
            .order_by_asc(products::Column::Category)
            .into_tuple()
            .all(&self.conn)
            .await?;

        Ok(counts
            .into_iter()
            .map(|(category, n)| (category, u64::try_from(n).unwrap_or_default()))
            .collect())
    }

    // ========================================================================
    // Lookups
    // ========================================================================

    pub async fn get(&self, id: i32) -> Result<Option<products::Model>> {
        Ok(Products::find_by_id(id).one(&self.conn).await?)
    }

    pub async fn list(&self, category: Option<&str>) -> Result<Vec<products::Model>> {
        let mut query = Products::find();
        if let Some(cat) = category {
            query = query.filter(products::Column::Category.eq(cat));
        }
        Ok(query
            .order_by_asc(products::Column::Category)
            .order_by_asc(products::Column::Name)
            .all(&self.conn)
            .await?)
    }

    pub async fn search(
        &self,
        query: &str,
        category: Option<&str>,
        limit: u64,
    ) -> Result<Vec<products::Model>> {
        let mut find = Products::find()
            .filter(products::Column::Name.contains(query));
        if let Some(cat) = category {
            find = find.filter(products::Column::Category.eq(cat));
        }
        Ok(find
            .order_by_asc(products::Column::Name)
            .limit(limit)
            .all(&self.conn)
            .await?)
    }
}

// ============================================================================
// Data Types
// ============================================================================

/// Outcome of one seed pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub inserted: u64,
    pub skipped: u64,
}

impl SeedReport {
    pub fn total(&self) -> u64 {
        self.inserted + self.skipped
    }
}
