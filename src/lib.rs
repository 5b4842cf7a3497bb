//! ProductType API - CRUD REST service with JWT access/refresh sessions
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **domain**: Entities, request/response DTOs and field rules
//! - **services**: Use cases, token handling and validation reports
//! - **infra**: Database, migrations, repositories and rate limiter
//! - **api**: HTTP handlers, middleware, and routes
//! - **types**: `{code, message}` response envelope
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Start the server
//! cargo run -- serve
//!
//! # Run migrations
//! cargo run -- migrate up
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod services;
pub mod types;

// Re-export commonly used types at crate root
pub use api::AppState;
pub use config::Config;
pub use domain::{Password, ProductType};
pub use errors::{AppError, AppResult};
