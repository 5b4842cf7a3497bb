//! ProductType service - CRUD use cases.

use async_trait::async_trait;
use std::sync::Arc;

use super::validation::{validate_product_type_create, validate_product_type_update};
use crate::domain::{ProductType, ProductTypeCreate, ProductTypeUpdate};
use crate::errors::{AppError, AppResult};
use crate::infra::ProductTypeRepository;

/// ProductType service trait for dependency injection.
#[async_trait]
pub trait ProductTypeService: Send + Sync {
    /// Validate and insert, an existing id is a conflict
    async fn create(&self, request: ProductTypeCreate) -> AppResult<()>;

    async fn find_all(&self) -> AppResult<Vec<ProductType>>;

    async fn find_by_id(&self, id: i32) -> AppResult<ProductType>;

    /// Validate and rename an existing product type
    async fn update(&self, id: i32, request: ProductTypeUpdate) -> AppResult<()>;

    async fn delete(&self, id: i32) -> AppResult<()>;

    async fn count(&self) -> AppResult<u64>;
}

/// Concrete implementation of ProductTypeService using repository.
pub struct ProductTypeManager {
    repo: Arc<dyn ProductTypeRepository>,
}

impl ProductTypeManager {
    pub fn new(repo: Arc<dyn ProductTypeRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl ProductTypeService for ProductTypeManager {
    async fn create(&self, request: ProductTypeCreate) -> AppResult<()> {
        let errors = validate_product_type_create(&request);
        if !errors.is_empty() {
            tracing::warn!("ProductType data is not valid");
            return Err(AppError::Validation(errors));
        }

        match self.repo.find_by_id(request.id).await {
            Ok(_) => {
                tracing::warn!(id = request.id, "ProductType already exists");
                return Err(AppError::conflict("ProductType with this ID already exists"));
            }
            Err(e) if e.is_not_found() => {}
            Err(e) => return Err(e),
        }

        self.repo.save(ProductType::from(request)).await?;
        tracing::info!("Create ProductType Successfully");
        Ok(())
    }

    async fn find_all(&self) -> AppResult<Vec<ProductType>> {
        let product_types = self.repo.find_all().await?;
        tracing::debug!(count = product_types.len(), "Get ProductTypes Successfully");
        Ok(product_types)
    }

    async fn find_by_id(&self, id: i32) -> AppResult<ProductType> {
        let product_type = self.repo.find_by_id(id).await?;
        tracing::debug!(id, "Get ProductType Successfully");
        Ok(product_type)
    }

    async fn update(&self, id: i32, request: ProductTypeUpdate) -> AppResult<()> {
        let errors = validate_product_type_update(&request);
        if !errors.is_empty() {
            tracing::warn!("ProductType data is not valid");
            return Err(AppError::Validation(errors));
        }

        self.repo.find_by_id(id).await?;

        self.repo
            .update(ProductType {
                id,
                name: request.name,
            })
            .await?;
        tracing::info!(id, "Update ProductType Successfully");
        Ok(())
    }

    async fn delete(&self, id: i32) -> AppResult<()> {
        self.repo.find_by_id(id).await?;

        self.repo.delete(id).await?;
        tracing::info!(id, "Delete ProductType Successfully");
        Ok(())
    }

    async fn count(&self) -> AppResult<u64> {
        self.repo.count().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::MockProductTypeRepository;
    use mockall::predicate::eq;

    fn service(repo: MockProductTypeRepository) -> ProductTypeManager {
        ProductTypeManager::new(Arc::new(repo))
    }

    fn create_request(id: i32, name: &str) -> ProductTypeCreate {
        ProductTypeCreate {
            id,
            name: name.to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_success() {
        let mut repo = MockProductTypeRepository::new();
        repo.expect_find_by_id()
            .with(eq(1))
            .returning(|_| Err(AppError::not_found("missing")));
        repo.expect_save()
            .withf(|p| p.id == 1 && p.name == "A")
            .times(1)
            .returning(|_| Ok(()));

        assert!(service(repo).create(create_request(1, "A")).await.is_ok());
    }

    #[tokio::test]
    async fn test_create_existing_id_is_conflict_without_insert() {
        let mut repo = MockProductTypeRepository::new();
        repo.expect_find_by_id().returning(|id| {
            Ok(ProductType {
                id,
                name: "A".into(),
            })
        });
        repo.expect_save().never();

        let result = service(repo).create(create_request(1, "A")).await;

        assert!(
            matches!(result, Err(AppError::Conflict(ref m)) if m == "ProductType with this ID already exists")
        );
    }

    #[tokio::test]
    async fn test_create_propagates_precheck_failure() {
        let mut repo = MockProductTypeRepository::new();
        repo.expect_find_by_id()
            .returning(|_| Err(AppError::internal("connection lost")));
        repo.expect_save().never();

        let result = service(repo).create(create_request(1, "A")).await;

        assert!(matches!(result, Err(AppError::Internal(_))));
    }

    #[tokio::test]
    async fn test_create_invalid_request_touches_nothing() {
        let mut repo = MockProductTypeRepository::new();
        repo.expect_find_by_id().never();
        repo.expect_save().never();

        let result = service(repo).create(create_request(0, "")).await;

        match result {
            Err(AppError::Validation(errors)) => assert_eq!(errors.len(), 2),
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_update_missing_is_not_found_before_write() {
        let mut repo = MockProductTypeRepository::new();
        repo.expect_find_by_id()
            .returning(|_| Err(AppError::not_found("missing")));
        repo.expect_update().never();

        let result = service(repo)
            .update(
                5,
                ProductTypeUpdate {
                    name: "B".into(),
                },
            )
            .await;

        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_update_success() {
        let mut repo = MockProductTypeRepository::new();
        repo.expect_find_by_id().returning(|id| {
            Ok(ProductType {
                id,
                name: "A".into(),
            })
        });
        repo.expect_update()
            .withf(|p| p.id == 5 && p.name == "B")
            .times(1)
            .returning(|_| Ok(()));

        let result = service(repo)
            .update(
                5,
                ProductTypeUpdate {
                    name: "B".into(),
                },
            )
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_delete_missing_is_not_found_before_write() {
        let mut repo = MockProductTypeRepository::new();
        repo.expect_find_by_id()
            .returning(|_| Err(AppError::not_found("missing")));
        repo.expect_delete().never();

        assert!(matches!(
            service(repo).delete(3).await,
            Err(AppError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_count() {
        let mut repo = MockProductTypeRepository::new();
        repo.expect_count().returning(|| Ok(4));

        assert_eq!(service(repo).count().await.unwrap(), 4);
    }
}
