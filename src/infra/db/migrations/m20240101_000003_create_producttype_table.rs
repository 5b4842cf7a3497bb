//! Migration: Create producttype table.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ProductType::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ProductType::ProdtypeCode)
                            .integer()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(ProductType::ProdtypeName)
                            .string_len(40)
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ProductType::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum ProductType {
    #[iden = "producttype"]
    Table,
    ProdtypeCode,
    ProdtypeName,
}
