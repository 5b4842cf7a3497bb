//! SeaORM entity definitions
//!
//! These are database-specific entities separate from domain models.

pub mod oauth;
pub mod product_type;
pub mod role;
pub mod user;
