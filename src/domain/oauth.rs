//! Session and token types.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::UserDto;

/// Persisted login session holding the current token pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OauthSession {
    pub id: i32,
    pub user_id: i32,
    pub access_token: String,
    pub refresh_token: String,
}

/// Token pair as returned to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct UserToken {
    /// Session identifier, used for logout
    #[schema(example = 1)]
    pub oauth_id: i32,
    #[schema(example = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...")]
    pub access_token: String,
    #[schema(example = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...")]
    pub refresh_token: String,
}

impl From<OauthSession> for UserToken {
    fn from(session: OauthSession) -> Self {
        Self {
            oauth_id: session.id,
            access_token: session.access_token,
            refresh_token: session.refresh_token,
        }
    }
}

/// Login and refresh response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct UserPassport {
    pub user: UserDto,
    pub token: UserToken,
}

/// Refresh request body.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(default)]
pub struct RefreshTokenRequest {
    #[schema(example = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...")]
    pub refresh_token: String,
}

/// Application claims embedded in every token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserClaims {
    pub user_id: i32,
    pub role_id: i32,
}
