//! Domain layer - Core business entities and request/response DTOs.
//!
//! Contains no infrastructure concerns; rows are mapped into these types
//! at the repository boundary.

pub mod oauth;
pub mod password;
pub mod product_type;
pub mod role;
pub(crate) mod rules;
pub mod user;

pub use oauth::{OauthSession, RefreshTokenRequest, UserClaims, UserPassport, UserToken};
pub use password::Password;
pub use product_type::{ProductType, ProductTypeCreate, ProductTypeUpdate};
pub use role::Role;
pub use user::{LoginRequest, User, UserCreate, UserDto};
