//! Oauth session repository implementation.

use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Unchanged, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    NotSet, QueryFilter, Set,
};

use super::entities::oauth::{self, ActiveModel, Entity as OauthEntity};
use crate::domain::OauthSession;
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Oauth repository trait for dependency injection.
///
/// Token lookups fail with `Unauthorized` since a miss means the presented
/// token is no longer valid.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait OauthRepository: Send + Sync {
    /// Persist a new session and return it with its generated id
    async fn create(
        &self,
        user_id: i32,
        access_token: String,
        refresh_token: String,
    ) -> AppResult<OauthSession>;

    async fn find_by_id(&self, id: i32) -> AppResult<OauthSession>;

    /// Session of `user_id` currently holding `access_token`
    async fn find_by_access_token(&self, user_id: i32, access_token: &str)
        -> AppResult<OauthSession>;

    async fn find_by_refresh_token(&self, refresh_token: &str) -> AppResult<OauthSession>;

    /// Replace both tokens of an existing session
    async fn update(&self, session: OauthSession) -> AppResult<()>;

    async fn delete(&self, id: i32) -> AppResult<()>;
}

/// SeaORM-backed oauth repository
pub struct OauthStore {
    db: Arc<DatabaseConnection>,
}

impl OauthStore {
    /// Create new repository instance
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn not_found(id: i32) -> AppError {
    AppError::not_found(format!("Oauth session with ID {} not found", id))
}

#[async_trait]
impl OauthRepository for OauthStore {
    async fn create(
        &self,
        user_id: i32,
        access_token: String,
        refresh_token: String,
    ) -> AppResult<OauthSession> {
        let active_model = ActiveModel {
            id: NotSet,
            user_id: Set(user_id),
            access_token: Set(access_token),
            refresh_token: Set(refresh_token),
        };

        let model = active_model.insert(self.db.as_ref()).await.map_err(AppError::from)?;
        Ok(OauthSession::from(model))
    }

    async fn find_by_id(&self, id: i32) -> AppResult<OauthSession> {
        OauthEntity::find_by_id(id)
            .one(self.db.as_ref())
            .await?
            .map(OauthSession::from)
            .ok_or_else(|| not_found(id))
    }

    async fn find_by_access_token(
        &self,
        user_id: i32,
        access_token: &str,
    ) -> AppResult<OauthSession> {
        OauthEntity::find()
            .filter(oauth::Column::UserId.eq(user_id))
            .filter(oauth::Column::AccessToken.eq(access_token))
            .one(self.db.as_ref())
            .await?
            .map(OauthSession::from)
            .ok_or_else(|| AppError::unauthorized("Access Token is incorrect"))
    }

    async fn find_by_refresh_token(&self, refresh_token: &str) -> AppResult<OauthSession> {
        OauthEntity::find()
            .filter(oauth::Column::RefreshToken.eq(refresh_token))
            .one(self.db.as_ref())
            .await?
            .map(OauthSession::from)
            .ok_or_else(|| AppError::unauthorized("Refresh Token is incorrect"))
    }

    async fn update(&self, session: OauthSession) -> AppResult<()> {
        let id = session.id;
        let active_model = ActiveModel {
            id: Unchanged(id),
            user_id: Set(session.user_id),
            access_token: Set(session.access_token),
            refresh_token: Set(session.refresh_token),
        };

        match active_model.update(self.db.as_ref()).await {
            Ok(_) => Ok(()),
            Err(DbErr::RecordNotUpdated) => Err(not_found(id)),
            Err(e) => Err(e.into()),
        }
    }

    async fn delete(&self, id: i32) -> AppResult<()> {
        let result = OauthEntity::delete_by_id(id)
            .exec(self.db.as_ref())
            .await
            .map_err(AppError::from)?;

        if result.rows_affected == 0 {
            return Err(not_found(id));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, MockDatabase};

    fn row() -> oauth::Model {
        oauth::Model {
            id: 7,
            user_id: 1,
            access_token: "access".into(),
            refresh_token: "refresh".into(),
        }
    }

    #[tokio::test]
    async fn test_create_returns_generated_id() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![row()]])
            .into_connection();
        let store = OauthStore::new(Arc::new(db));

        let session = store
            .create(1, "access".into(), "refresh".into())
            .await
            .unwrap();

        assert_eq!(session.id, 7);
        assert_eq!(session.user_id, 1);
    }

    #[tokio::test]
    async fn test_unknown_refresh_token_is_unauthorized() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<oauth::Model>::new()])
            .into_connection();
        let store = OauthStore::new(Arc::new(db));

        let result = store.find_by_refresh_token("stale").await;

        assert!(
            matches!(result, Err(AppError::Unauthorized(ref m)) if m == "Refresh Token is incorrect")
        );
    }

    #[tokio::test]
    async fn test_unknown_access_token_is_unauthorized() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<oauth::Model>::new()])
            .into_connection();
        let store = OauthStore::new(Arc::new(db));

        let result = store.find_by_access_token(1, "stale").await;

        assert!(matches!(result, Err(AppError::Unauthorized(_))));
    }

    #[tokio::test]
    async fn test_find_by_id_missing_is_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<oauth::Model>::new()])
            .into_connection();
        let store = OauthStore::new(Arc::new(db));

        assert!(matches!(store.find_by_id(7).await, Err(AppError::NotFound(_))));
    }
}
