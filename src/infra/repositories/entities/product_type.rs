//! ProductType database entity for SeaORM.

use sea_orm::entity::prelude::*;

use crate::domain::ProductType;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "producttype")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_name = "prodtype_code")]
    pub id: i32,
    #[sea_orm(column_name = "prodtype_name")]
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Convert database model to domain entity
impl From<Model> for ProductType {
    fn from(model: Model) -> Self {
        ProductType {
            id: model.id,
            name: model.name,
        }
    }
}
