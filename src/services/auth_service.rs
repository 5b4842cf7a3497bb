//! Authentication service - Registration, login and token sessions.
//!
//! A login persists an oauth row holding the issued token pair. Refresh
//! rotates both tokens in place, logout deletes the row, and the JWT gate
//! only accepts access tokens that still match a stored row.

use async_trait::async_trait;
use std::sync::Arc;

use super::token::TokenManager;
use super::validation::{validate_login, validate_user_create};
use crate::domain::{
    LoginRequest, Password, RefreshTokenRequest, User, UserClaims, UserCreate, UserDto,
    UserPassport, UserToken,
};
use crate::errors::{AppError, AppResult};
use crate::infra::{OauthRepository, RoleRepository, UserRepository};

const INVALID_CREDENTIALS: &str = "Email or Password is incorrect";

/// Authentication service trait for dependency injection.
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Register a new user
    async fn register(&self, request: UserCreate) -> AppResult<()>;

    /// Verify credentials and open a new session
    async fn login(&self, request: LoginRequest) -> AppResult<UserPassport>;

    /// Rotate the token pair of the session holding `refresh_token`
    async fn refresh_passport(&self, request: RefreshTokenRequest) -> AppResult<UserPassport>;

    /// Close the session with the given oauth id
    async fn logout(&self, oauth_id: i32) -> AppResult<()>;

    /// Check an access token against its session and role
    async fn authorize(&self, access_token: &str) -> AppResult<UserClaims>;
}

/// Concrete implementation of AuthService using repositories.
pub struct Authenticator {
    users: Arc<dyn UserRepository>,
    roles: Arc<dyn RoleRepository>,
    sessions: Arc<dyn OauthRepository>,
    tokens: TokenManager,
}

impl Authenticator {
    pub fn new(
        users: Arc<dyn UserRepository>,
        roles: Arc<dyn RoleRepository>,
        sessions: Arc<dyn OauthRepository>,
        tokens: TokenManager,
    ) -> Self {
        Self {
            users,
            roles,
            sessions,
            tokens,
        }
    }

    /// Resolve a `NotFound` pre-check into "free", anything else is returned.
    async fn ensure_absent<T>(
        lookup: impl std::future::Future<Output = AppResult<T>>,
        conflict: &str,
    ) -> AppResult<()> {
        match lookup.await {
            Ok(_) => Err(AppError::conflict(conflict)),
            Err(e) if e.is_not_found() => Ok(()),
            Err(e) => Err(e),
        }
    }
}

#[async_trait]
impl AuthService for Authenticator {
    async fn register(&self, request: UserCreate) -> AppResult<()> {
        let errors = validate_user_create(&request);
        if !errors.is_empty() {
            tracing::warn!("User data is not valid");
            return Err(AppError::Validation(errors));
        }

        Self::ensure_absent(
            self.users.find_by_id(request.id),
            "User with this ID already exists",
        )
        .await?;
        Self::ensure_absent(
            self.users.find_by_email(&request.email),
            "User with this email already exists",
        )
        .await?;

        self.roles.find_by_id(request.role_id).await?;

        let password_hash = Password::new(&request.password)?.into_string();
        self.users
            .create(User {
                id: request.id,
                role_id: request.role_id,
                name: request.name,
                email: request.email,
                password_hash,
            })
            .await?;

        tracing::info!(user_id = request.id, "Register User Successfully");
        Ok(())
    }

    async fn login(&self, request: LoginRequest) -> AppResult<UserPassport> {
        let errors = validate_login(&request);
        if !errors.is_empty() {
            tracing::warn!("Login data is not valid");
            return Err(AppError::Validation(errors));
        }

        let user = match self.users.find_by_email(&request.email).await {
            Ok(user) => Some(user),
            Err(e) if e.is_not_found() => None,
            Err(e) => return Err(e),
        };

        // Verify against a dummy hash for unknown emails so timing stays uniform.
        let stored = user
            .as_ref()
            .map(|u| Password::from_hash(u.password_hash.clone()))
            .unwrap_or_else(Password::dummy);
        let password_valid = stored.verify(&request.password);

        let user = match user {
            Some(user) if password_valid => user,
            _ => {
                tracing::warn!("Login rejected for invalid credentials");
                return Err(AppError::unauthorized(INVALID_CREDENTIALS));
            }
        };

        let role = self.roles.find_by_id(user.role_id).await?;
        let claims = UserClaims {
            user_id: user.id,
            role_id: user.role_id,
        };
        let pair = self.tokens.issue_pair(claims, &role.title)?;

        let session = self
            .sessions
            .create(user.id, pair.access_token, pair.refresh_token)
            .await?;

        tracing::info!(user_id = user.id, oauth_id = session.id, "Login User Successfully");
        Ok(UserPassport {
            user: UserDto::from(user),
            token: UserToken::from(session),
        })
    }

    async fn refresh_passport(&self, request: RefreshTokenRequest) -> AppResult<UserPassport> {
        let old = self.tokens.parse(&request.refresh_token)?;
        let mut session = self
            .sessions
            .find_by_refresh_token(&request.refresh_token)
            .await?;

        let user = self.users.find_by_id(session.user_id).await?;
        let role = self.roles.find_by_id(user.role_id).await?;
        let claims = UserClaims {
            user_id: user.id,
            role_id: user.role_id,
        };

        session.access_token = self.tokens.issue_access(claims, &role.title)?;
        session.refresh_token = self.tokens.reissue_refresh(claims, &role.title, old.exp)?;
        self.sessions.update(session.clone()).await?;

        tracing::info!(user_id = user.id, oauth_id = session.id, "Refresh Token Successfully");
        Ok(UserPassport {
            user: UserDto::from(user),
            token: UserToken::from(session),
        })
    }

    async fn logout(&self, oauth_id: i32) -> AppResult<()> {
        self.sessions.find_by_id(oauth_id).await?;
        self.sessions.delete(oauth_id).await?;

        tracing::info!(oauth_id, "Logout User Successfully");
        Ok(())
    }

    async fn authorize(&self, access_token: &str) -> AppResult<UserClaims> {
        let token = self.tokens.parse(access_token)?;
        let claims = token.claims;

        self.sessions
            .find_by_access_token(claims.user_id, access_token)
            .await?;

        let role = match self.roles.find_by_id(claims.role_id).await {
            Ok(role) => role,
            Err(e) if e.is_not_found() => return Err(AppError::unauthorized("Unauthorized")),
            Err(e) => return Err(e),
        };

        if !role.is_authorized() {
            tracing::warn!(user_id = claims.user_id, role = %role.title, "Role is not allowed");
            return Err(AppError::unauthorized("Unauthorized"));
        }

        Ok(claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TokenSettings;
    use crate::domain::{OauthSession, Role};
    use crate::infra::{MockOauthRepository, MockRoleRepository, MockUserRepository};
    use mockall::predicate::eq;

    fn tokens() -> TokenManager {
        TokenManager::new(TokenSettings {
            secret: "test-secret-key-for-testing-only-32chars".into(),
            issuer: "producttype-api".into(),
            access_expires: 900,
            refresh_expires: 3600,
        })
    }

    fn service(
        users: MockUserRepository,
        roles: MockRoleRepository,
        sessions: MockOauthRepository,
    ) -> Authenticator {
        Authenticator::new(Arc::new(users), Arc::new(roles), Arc::new(sessions), tokens())
    }

    fn stored_user(password: &str) -> User {
        User {
            id: 1,
            role_id: 1,
            name: "Jane".into(),
            email: "jane@example.com".into(),
            password_hash: Password::new(password).unwrap().into_string(),
        }
    }

    fn role(id: i32, title: &str) -> Role {
        Role {
            id,
            title: title.into(),
        }
    }

    fn register_request() -> UserCreate {
        UserCreate {
            id: 1,
            role_id: 1,
            name: "Jane".into(),
            email: "jane@example.com".into(),
            password: "secret".into(),
        }
    }

    fn login_request(password: &str) -> LoginRequest {
        LoginRequest {
            email: "jane@example.com".into(),
            password: password.into(),
        }
    }

    #[tokio::test]
    async fn test_register_hashes_password() {
        let mut users = MockUserRepository::new();
        users
            .expect_find_by_id()
            .returning(|_| Err(AppError::not_found("missing")));
        users
            .expect_find_by_email()
            .returning(|_| Err(AppError::not_found("missing")));
        users
            .expect_create()
            .withf(|u| u.id == 1 && u.password_hash != "secret" && Password::from_hash(u.password_hash.clone()).verify("secret"))
            .times(1)
            .returning(|_| Ok(()));
        let mut roles = MockRoleRepository::new();
        roles
            .expect_find_by_id()
            .with(eq(1))
            .returning(|id| Ok(role(id, "Manager")));

        let result = service(users, roles, MockOauthRepository::new())
            .register(register_request())
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_register_existing_id_is_conflict() {
        let mut users = MockUserRepository::new();
        users
            .expect_find_by_id()
            .returning(|_| Ok(stored_user("secret")));
        users.expect_create().never();

        let result = service(users, MockRoleRepository::new(), MockOauthRepository::new())
            .register(register_request())
            .await;

        assert!(
            matches!(result, Err(AppError::Conflict(ref m)) if m == "User with this ID already exists")
        );
    }

    #[tokio::test]
    async fn test_register_unknown_role_is_not_found() {
        let mut users = MockUserRepository::new();
        users
            .expect_find_by_id()
            .returning(|_| Err(AppError::not_found("missing")));
        users
            .expect_find_by_email()
            .returning(|_| Err(AppError::not_found("missing")));
        users.expect_create().never();
        let mut roles = MockRoleRepository::new();
        roles
            .expect_find_by_id()
            .returning(|_| Err(AppError::not_found("Role with ID 1 not found")));

        let result = service(users, roles, MockOauthRepository::new())
            .register(register_request())
            .await;

        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_login_issues_and_persists_pair() {
        let mut users = MockUserRepository::new();
        users
            .expect_find_by_email()
            .returning(|_| Ok(stored_user("secret")));
        let mut roles = MockRoleRepository::new();
        roles
            .expect_find_by_id()
            .returning(|id| Ok(role(id, "Manager")));
        let mut sessions = MockOauthRepository::new();
        sessions
            .expect_create()
            .times(1)
            .returning(|user_id, access_token, refresh_token| {
                Ok(OauthSession {
                    id: 11,
                    user_id,
                    access_token,
                    refresh_token,
                })
            });

        let passport = service(users, roles, sessions)
            .login(login_request("secret"))
            .await
            .unwrap();

        assert_eq!(passport.user.id, 1);
        assert_eq!(passport.token.oauth_id, 11);
        assert_ne!(passport.token.access_token, passport.token.refresh_token);
        let parsed = tokens().parse(&passport.token.access_token).unwrap();
        assert_eq!(parsed.claims, UserClaims { user_id: 1, role_id: 1 });
    }

    #[tokio::test]
    async fn test_login_wrong_password_is_unauthorized() {
        let mut users = MockUserRepository::new();
        users
            .expect_find_by_email()
            .returning(|_| Ok(stored_user("secret")));
        let mut sessions = MockOauthRepository::new();
        sessions.expect_create().never();

        let result = service(users, MockRoleRepository::new(), sessions)
            .login(login_request("wrong"))
            .await;

        assert!(
            matches!(result, Err(AppError::Unauthorized(ref m)) if m == "Email or Password is incorrect")
        );
    }

    #[tokio::test]
    async fn test_login_unknown_email_is_unauthorized() {
        let mut users = MockUserRepository::new();
        users
            .expect_find_by_email()
            .returning(|_| Err(AppError::not_found("missing")));

        let result = service(users, MockRoleRepository::new(), MockOauthRepository::new())
            .login(login_request("secret"))
            .await;

        assert!(matches!(result, Err(AppError::Unauthorized(_))));
    }

    #[tokio::test]
    async fn test_refresh_rotates_tokens_and_keeps_expiry() {
        let manager = tokens();
        let claims = UserClaims {
            user_id: 1,
            role_id: 1,
        };
        let pair = manager.issue_pair(claims, "Manager").unwrap();
        let old_exp = manager.parse(&pair.refresh_token).unwrap().exp;

        let stored = OauthSession {
            id: 11,
            user_id: 1,
            access_token: pair.access_token.clone(),
            refresh_token: pair.refresh_token.clone(),
        };
        let mut sessions = MockOauthRepository::new();
        let lookup = stored.clone();
        sessions
            .expect_find_by_refresh_token()
            .returning(move |_| Ok(lookup.clone()));
        let old_access = pair.access_token.clone();
        let old_refresh = pair.refresh_token.clone();
        sessions
            .expect_update()
            .withf(move |s| {
                s.id == 11 && s.access_token != old_access && s.refresh_token != old_refresh
            })
            .times(1)
            .returning(|_| Ok(()));
        let mut users = MockUserRepository::new();
        users
            .expect_find_by_id()
            .returning(|_| Ok(stored_user("secret")));
        let mut roles = MockRoleRepository::new();
        roles
            .expect_find_by_id()
            .returning(|id| Ok(role(id, "Manager")));

        let passport = service(users, roles, sessions)
            .refresh_passport(RefreshTokenRequest {
                refresh_token: pair.refresh_token.clone(),
            })
            .await
            .unwrap();

        assert_eq!(passport.token.oauth_id, 11);
        assert_ne!(passport.token.refresh_token, pair.refresh_token);
        let new_exp = manager.parse(&passport.token.refresh_token).unwrap().exp;
        assert_eq!(new_exp, old_exp);
    }

    #[tokio::test]
    async fn test_refresh_unknown_token_is_unauthorized() {
        let pair = tokens()
            .issue_pair(UserClaims { user_id: 1, role_id: 1 }, "Manager")
            .unwrap();
        let mut sessions = MockOauthRepository::new();
        sessions
            .expect_find_by_refresh_token()
            .returning(|_| Err(AppError::unauthorized("Refresh Token is incorrect")));
        sessions.expect_update().never();

        let result = service(MockUserRepository::new(), MockRoleRepository::new(), sessions)
            .refresh_passport(RefreshTokenRequest {
                refresh_token: pair.refresh_token,
            })
            .await;

        assert!(matches!(result, Err(AppError::Unauthorized(_))));
    }

    #[tokio::test]
    async fn test_logout_missing_session_is_not_found() {
        let mut sessions = MockOauthRepository::new();
        sessions
            .expect_find_by_id()
            .returning(|_| Err(AppError::not_found("missing")));
        sessions.expect_delete().never();

        let result = service(MockUserRepository::new(), MockRoleRepository::new(), sessions)
            .logout(4)
            .await;

        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_authorize_accepts_manager_with_live_session() {
        let access = tokens()
            .issue_access(UserClaims { user_id: 1, role_id: 1 }, "Manager")
            .unwrap();
        let mut sessions = MockOauthRepository::new();
        sessions
            .expect_find_by_access_token()
            .withf(|user_id, _| *user_id == 1)
            .returning(|user_id, token| {
                Ok(OauthSession {
                    id: 3,
                    user_id,
                    access_token: token.to_string(),
                    refresh_token: "refresh".into(),
                })
            });
        let mut roles = MockRoleRepository::new();
        roles
            .expect_find_by_id()
            .returning(|id| Ok(role(id, "Manager")));

        let claims = service(MockUserRepository::new(), roles, sessions)
            .authorize(&access)
            .await
            .unwrap();

        assert_eq!(claims.user_id, 1);
    }

    #[tokio::test]
    async fn test_authorize_rejects_non_manager() {
        let access = tokens()
            .issue_access(UserClaims { user_id: 2, role_id: 2 }, "Staff")
            .unwrap();
        let mut sessions = MockOauthRepository::new();
        sessions.expect_find_by_access_token().returning(|user_id, token| {
            Ok(OauthSession {
                id: 3,
                user_id,
                access_token: token.to_string(),
                refresh_token: "refresh".into(),
            })
        });
        let mut roles = MockRoleRepository::new();
        roles.expect_find_by_id().returning(|id| Ok(role(id, "Staff")));

        let result = service(MockUserRepository::new(), roles, sessions)
            .authorize(&access)
            .await;

        assert!(matches!(result, Err(AppError::Unauthorized(ref m)) if m == "Unauthorized"));
    }

    #[tokio::test]
    async fn test_authorize_rejects_revoked_session() {
        let access = tokens()
            .issue_access(UserClaims { user_id: 1, role_id: 1 }, "Manager")
            .unwrap();
        let mut sessions = MockOauthRepository::new();
        sessions
            .expect_find_by_access_token()
            .returning(|_, _| Err(AppError::unauthorized("Access Token is incorrect")));
        let mut roles = MockRoleRepository::new();
        roles.expect_find_by_id().never();

        let result = service(MockUserRepository::new(), roles, sessions)
            .authorize(&access)
            .await;

        assert!(matches!(result, Err(AppError::Unauthorized(_))));
    }
}
