//! Password value object.
//!
//! Encapsulates Argon2 hashing so the raw password never leaves the
//! service that received it.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

use crate::errors::{AppError, AppResult};

/// Hash used when no stored hash exists, so a failed lookup costs the
/// same as a failed comparison.
const DUMMY_HASH: &str =
    "$argon2id$v=19$m=19456,t=2,p=1$ZHVtbXlzYWx0MTIzNDU2$h4z1xkYqQ1mR9yQwJ3u7cS9qVq2t3sR9aK0m1bV8n5Q";

/// Hashed password.
#[derive(Clone, PartialEq, Eq)]
pub struct Password {
    hash: String,
}

impl std::fmt::Debug for Password {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Password")
            .field("hash", &"[REDACTED]")
            .finish()
    }
}

impl Password {
    /// Hash a plain-text password with a fresh salt.
    ///
    /// Length rules are enforced by request validation before this is called.
    pub fn new(plain_text: &str) -> AppResult<Self> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = Argon2::default()
            .hash_password(plain_text.as_bytes(), &salt)
            .map_err(|e| AppError::internal(format!("Password hash failed: {}", e)))?;

        Ok(Self {
            hash: hash.to_string(),
        })
    }

    /// Wrap a hash loaded from storage.
    pub fn from_hash(hash: String) -> Self {
        Self { hash }
    }

    /// Placeholder used to keep login timing uniform for unknown emails.
    pub fn dummy() -> Self {
        Self::from_hash(DUMMY_HASH.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.hash
    }

    pub fn into_string(self) -> String {
        self.hash
    }

    /// Verify a plain text password against this hash.
    ///
    /// An unparseable hash never verifies.
    pub fn verify(&self, plain_text: &str) -> bool {
        match PasswordHash::new(&self.hash) {
            Ok(parsed) => Argon2::default()
                .verify_password(plain_text.as_bytes(), &parsed)
                .is_ok(),
            Err(e) => {
                tracing::warn!("Stored password hash is malformed: {}", e);
                false
            }
        }
    }
}

impl From<Password> for String {
    fn from(password: Password) -> Self {
        password.hash
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_hash_and_verify() {
        let password = Password::new("secret").unwrap();

        assert!(password.verify("secret"));
        assert!(!password.verify("Secret"));
    }

    #[test]
    fn test_hash_round_trips_through_storage() {
        let stored = Password::new("manager-pass").unwrap().into_string();

        assert!(stored.starts_with("$argon2"));
        assert!(Password::from_hash(stored).verify("manager-pass"));
    }

    #[test]
    fn test_same_password_different_salts() {
        let first = Password::new("same").unwrap();
        let second = Password::new("same").unwrap();

        assert_ne!(first.as_str(), second.as_str());
        assert!(first.verify("same"));
        assert!(second.verify("same"));
    }

    #[test]
    fn test_dummy_never_verifies() {
        assert!(!Password::dummy().verify(""));
        assert!(!Password::dummy().verify("secret"));
    }

    #[test]
    fn test_malformed_hash_never_verifies() {
        assert!(!Password::from_hash("plain-text".into()).verify("plain-text"));
    }

    #[test]
    fn test_debug_redacts_hash() {
        let password = Password::new("secret").unwrap();
        let rendered = format!("{:?}", password);

        assert!(rendered.contains("[REDACTED]"));
        assert!(!rendered.contains(password.as_str()));
    }
}
