//! JWT access/refresh token issuing and verification.

use chrono::Utc;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::{TokenSettings, ACCESS_TOKEN_SUBJECT, REFRESH_TOKEN_SUBJECT};
use crate::domain::UserClaims;
use crate::errors::{AppError, AppResult};

/// Signed token payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenClaims {
    pub claims: UserClaims,
    pub iss: String,
    pub sub: String,
    /// Role title of the holder
    pub aud: Vec<String>,
    pub exp: i64,
    pub nbf: i64,
    pub iat: i64,
    /// Unique per token so re-issued tokens never collide
    pub jti: String,
}

/// Freshly minted access/refresh pair
#[derive(Debug, Clone)]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
}

/// Issues and verifies HS256 tokens with the configured secret.
#[derive(Clone)]
pub struct TokenManager {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    issuer: String,
    access_expires: i64,
    refresh_expires: i64,
}

impl TokenManager {
    pub fn new(settings: TokenSettings) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        validation.validate_nbf = true;
        // The audience carries the role title, authorization checks it against the role table.
        validation.validate_aud = false;

        Self {
            encoding_key: EncodingKey::from_secret(settings.secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(settings.secret.as_bytes()),
            validation,
            issuer: settings.issuer,
            access_expires: settings.access_expires,
            refresh_expires: settings.refresh_expires,
        }
    }

    /// Mint an access token and a refresh token for a login.
    pub fn issue_pair(&self, claims: UserClaims, role_title: &str) -> AppResult<TokenPair> {
        let now = Utc::now().timestamp();

        Ok(TokenPair {
            access_token: self.sign(
                claims,
                role_title,
                ACCESS_TOKEN_SUBJECT,
                now + self.access_expires,
            )?,
            refresh_token: self.sign(
                claims,
                role_title,
                REFRESH_TOKEN_SUBJECT,
                now + self.refresh_expires,
            )?,
        })
    }

    /// Mint an access token with a fresh expiry.
    pub fn issue_access(&self, claims: UserClaims, role_title: &str) -> AppResult<String> {
        let expires_at = Utc::now().timestamp() + self.access_expires;
        self.sign(claims, role_title, ACCESS_TOKEN_SUBJECT, expires_at)
    }

    /// Mint a refresh token that keeps an existing absolute expiry.
    pub fn reissue_refresh(
        &self,
        claims: UserClaims,
        role_title: &str,
        expires_at: i64,
    ) -> AppResult<String> {
        self.sign(claims, role_title, REFRESH_TOKEN_SUBJECT, expires_at)
    }

    /// Verify signature, expiry and not-before, then return the claims.
    pub fn parse(&self, token: &str) -> AppResult<TokenClaims> {
        let data = decode::<TokenClaims>(token, &self.decoding_key, &self.validation)?;
        Ok(data.claims)
    }

    fn sign(
        &self,
        claims: UserClaims,
        role_title: &str,
        subject: &str,
        expires_at: i64,
    ) -> AppResult<String> {
        let now = Utc::now().timestamp();
        let payload = TokenClaims {
            claims,
            iss: self.issuer.clone(),
            sub: subject.to_string(),
            aud: vec![role_title.to_string()],
            exp: expires_at,
            nbf: now,
            iat: now,
            jti: Uuid::new_v4().to_string(),
        };

        encode(&Header::new(Algorithm::HS256), &payload, &self.encoding_key)
            .map_err(|e| AppError::internal(format!("Token signing failed: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "test-secret-key-for-testing-only-32chars";

    fn manager_with(secret: &str, access_expires: i64) -> TokenManager {
        TokenManager::new(TokenSettings {
            secret: secret.to_string(),
            issuer: "producttype-api".to_string(),
            access_expires,
            refresh_expires: 3600,
        })
    }

    fn claims() -> UserClaims {
        UserClaims {
            user_id: 1,
            role_id: 1,
        }
    }

    #[test]
    fn test_issue_pair_and_parse() {
        let manager = manager_with(SECRET, 900);
        let pair = manager.issue_pair(claims(), "Manager").unwrap();

        let access = manager.parse(&pair.access_token).unwrap();
        let refresh = manager.parse(&pair.refresh_token).unwrap();

        assert_eq!(access.claims, claims());
        assert_eq!(access.sub, "access-token");
        assert_eq!(access.aud, vec!["Manager".to_string()]);
        assert_eq!(access.iss, "producttype-api");
        assert_eq!(refresh.sub, "refresh-token");
        assert!(refresh.exp > access.exp);
    }

    #[test]
    fn test_wrong_secret_is_unauthorized() {
        let token = manager_with(SECRET, 900)
            .issue_access(claims(), "Manager")
            .unwrap();

        let result = manager_with("another-secret-key-that-is-32-chars!", 900).parse(&token);

        assert!(
            matches!(result, Err(AppError::Unauthorized(ref m)) if m.starts_with("Parse token failed"))
        );
    }

    #[test]
    fn test_malformed_token_is_bad_request() {
        let result = manager_with(SECRET, 900).parse("not-a-jwt");

        assert!(matches!(result, Err(AppError::BadRequest(ref m)) if m == "Token format is invalid"));
    }

    #[test]
    fn test_expired_token_is_distinct_from_malformed() {
        let manager = manager_with(SECRET, -10);
        let token = manager.issue_access(claims(), "Manager").unwrap();

        let result = manager.parse(&token);

        assert!(matches!(result, Err(AppError::Unauthorized(ref m)) if m == "Token had expired"));
    }

    #[test]
    fn test_reissued_refresh_keeps_expiry_and_changes_string() {
        let manager = manager_with(SECRET, 900);
        let pair = manager.issue_pair(claims(), "Manager").unwrap();
        let old = manager.parse(&pair.refresh_token).unwrap();

        let rotated = manager
            .reissue_refresh(old.claims, "Manager", old.exp)
            .unwrap();
        let new = manager.parse(&rotated).unwrap();

        assert_ne!(rotated, pair.refresh_token);
        assert_eq!(new.exp, old.exp);
        assert_eq!(new.sub, "refresh-token");
    }
}
