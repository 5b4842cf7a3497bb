//! Migration: Create oauth session table.

use sea_orm_migration::prelude::*;

use super::m20240101_000002_create_users_table::Users;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Oauth::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Oauth::OauthId)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Oauth::OauthUserId).integer().not_null())
                    .col(ColumnDef::new(Oauth::AccessToken).text().not_null())
                    .col(ColumnDef::new(Oauth::RefreshToken).text().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_oauth_user")
                            .from(Oauth::Table, Oauth::OauthUserId)
                            .to(Users::Table, Users::UserId)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_oauth_refresh_token")
                    .table(Oauth::Table)
                    .col(Oauth::RefreshToken)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Oauth::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Oauth {
    Table,
    OauthId,
    OauthUserId,
    AccessToken,
    RefreshToken,
}
