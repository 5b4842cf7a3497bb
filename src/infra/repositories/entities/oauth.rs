//! Oauth session database entity for SeaORM.

use sea_orm::entity::prelude::*;

use crate::domain::OauthSession;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "oauth")]
pub struct Model {
    #[sea_orm(primary_key, column_name = "oauth_id")]
    pub id: i32,
    #[sea_orm(column_name = "oauth_user_id")]
    pub user_id: i32,
    #[sea_orm(column_type = "Text")]
    pub access_token: String,
    #[sea_orm(column_type = "Text")]
    pub refresh_token: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id"
    )]
    User,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for OauthSession {
    fn from(model: Model) -> Self {
        OauthSession {
            id: model.id,
            user_id: model.user_id,
            access_token: model.access_token,
            refresh_token: model.refresh_token,
        }
    }
}
