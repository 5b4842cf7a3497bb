//! Migration: Create roles table and seed the built-in roles.

use sea_orm_migration::prelude::*;

use crate::config::{AUTHORIZED_ROLE_TITLE, STAFF_ROLE_TITLE};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Roles::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Roles::RoleId)
                            .integer()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Roles::RoleTitle).string_len(40).not_null())
                    .to_owned(),
            )
            .await?;

        let seed = Query::insert()
            .into_table(Roles::Table)
            .columns([Roles::RoleId, Roles::RoleTitle])
            .values_panic([1.into(), AUTHORIZED_ROLE_TITLE.into()])
            .values_panic([2.into(), STAFF_ROLE_TITLE.into()])
            .to_owned();

        manager.exec_stmt(seed).await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Roles::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum Roles {
    Table,
    RoleId,
    RoleTitle,
}
