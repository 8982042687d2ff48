use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Products::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Products::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Products::Category).string().not_null())
                    .col(ColumnDef::new(Products::Brand).string())
                    .col(ColumnDef::new(Products::Model).string())
                    .col(ColumnDef::new(Products::Name).string().not_null())
                    .col(ColumnDef::new(Products::Upc).string())
                    .col(ColumnDef::new(Products::Mpn).string())
                    .col(ColumnDef::new(Products::Asin).string())
                    .col(ColumnDef::new(Products::AttrsJson).text())
                    .col(
                        ColumnDef::new(Products::CreatedAt)
                            .timestamp()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Products::UpdatedAt)
                            .timestamp()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    // Re-running the seeder relies on this constraint: a
                    // conflicting insert is a skip, not an error. It lives in
                    // the CREATE TABLE itself so every connection in the pool
                    // sees it, not just the one that ran the migration.
                    .index(
                        Index::create()
                            .name("idx_products_category_name")
                            .col(Products::Category)
                            .col(Products::Name)
                            .unique(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_products_category")
                    .table(Products::Table)
                    .col(Products::Category)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Products::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Products {
    Table,
    Id,
    Category,
    Brand,
    Model,
    Name,
    Upc,
    Mpn,
    Asin,
    AttrsJson,
    CreatedAt,
    UpdatedAt,
}
