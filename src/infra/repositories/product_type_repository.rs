//! ProductType repository implementation.

use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Unchanged, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryOrder, Set,
};

use super::entities::product_type::{self, ActiveModel, Entity as ProductTypeEntity};
use super::map_insert_error;
use crate::domain::ProductType;
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// ProductType repository trait for dependency injection.
///
/// Lookups by id fail with `NotFound` instead of returning `Option`.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait ProductTypeRepository: Send + Sync {
    /// Insert a new row, a duplicate id maps to `Conflict`
    async fn save(&self, product_type: ProductType) -> AppResult<()>;

    /// All rows ordered by id
    async fn find_all(&self) -> AppResult<Vec<ProductType>>;

    async fn find_by_id(&self, id: i32) -> AppResult<ProductType>;

    /// Overwrite the name of an existing row
    async fn update(&self, product_type: ProductType) -> AppResult<()>;

    async fn delete(&self, id: i32) -> AppResult<()>;

    async fn count(&self) -> AppResult<u64>;
}

/// SeaORM-backed ProductType repository
pub struct ProductTypeStore {
    db: Arc<DatabaseConnection>,
}

impl ProductTypeStore {
    /// Create new repository instance
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn not_found(id: i32) -> AppError {
    AppError::not_found(format!("ProductType with ID {} not found", id))
}

#[async_trait]
impl ProductTypeRepository for ProductTypeStore {
    async fn save(&self, product_type: ProductType) -> AppResult<()> {
        let active_model = ActiveModel {
            id: Set(product_type.id),
            name: Set(product_type.name),
        };

        active_model
            .insert(self.db.as_ref())
            .await
            .map_err(|e| map_insert_error(e, "ProductType with this ID already exists"))?;
        Ok(())
    }

    async fn find_all(&self) -> AppResult<Vec<ProductType>> {
        let models = ProductTypeEntity::find()
            .order_by_asc(product_type::Column::Id)
            .all(self.db.as_ref())
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(ProductType::from).collect())
    }

    async fn find_by_id(&self, id: i32) -> AppResult<ProductType> {
        ProductTypeEntity::find_by_id(id)
            .one(self.db.as_ref())
            .await?
            .map(ProductType::from)
            .ok_or_else(|| not_found(id))
    }

    async fn update(&self, product_type: ProductType) -> AppResult<()> {
        let id = product_type.id;
        let active_model = ActiveModel {
            id: Unchanged(id),
            name: Set(product_type.name),
        };

        match active_model.update(self.db.as_ref()).await {
            Ok(_) => Ok(()),
            Err(DbErr::RecordNotUpdated) => Err(not_found(id)),
            Err(e) => Err(e.into()),
        }
    }

    async fn delete(&self, id: i32) -> AppResult<()> {
        let result = ProductTypeEntity::delete_by_id(id)
            .exec(self.db.as_ref())
            .await
            .map_err(AppError::from)?;

        if result.rows_affected == 0 {
            return Err(not_found(id));
        }

        Ok(())
    }

    async fn count(&self) -> AppResult<u64> {
        ProductTypeEntity::find()
            .count(self.db.as_ref())
            .await
            .map_err(Into::into)
    }
}
