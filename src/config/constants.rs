//! Application-wide constants
//!
//! Centralized location for magic values to improve maintainability.

// =============================================================================
// Authentication & Security
// =============================================================================

/// Default access token lifetime in seconds (15 minutes)
pub const DEFAULT_JWT_ACCESS_EXPIRES_SECONDS: i64 = 900;

/// Default refresh token lifetime in seconds (1 day)
pub const DEFAULT_JWT_REFRESH_EXPIRES_SECONDS: i64 = 86_400;

/// Minimum JWT secret length (security requirement)
pub const MIN_JWT_SECRET_LENGTH: usize = 32;

/// Authorization header prefix for Bearer tokens
pub const BEARER_TOKEN_PREFIX: &str = "Bearer ";

/// Subject claim of access tokens
pub const ACCESS_TOKEN_SUBJECT: &str = "access-token";

/// Subject claim of refresh tokens
pub const REFRESH_TOKEN_SUBJECT: &str = "refresh-token";

// =============================================================================
// Roles
// =============================================================================

/// Role title allowed through the JWT gate
pub const AUTHORIZED_ROLE_TITLE: &str = "Manager";

/// Role seeded for regular staff accounts
pub const STAFF_ROLE_TITLE: &str = "Staff";

// =============================================================================
// Server Configuration
// =============================================================================

/// Default application name (used as JWT issuer)
pub const DEFAULT_APP_NAME: &str = "producttype-api";

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 8081;

/// Default CORS origins (comma separated)
pub const DEFAULT_CORS_ALLOW_ORIGINS: &str = "http://localhost:8081,https://localhost:8081";

// =============================================================================
// Database
// =============================================================================

/// Default PostgreSQL connection parts (for development)
pub const DEFAULT_POSTGRES_HOST: &str = "localhost";
pub const DEFAULT_POSTGRES_PORT: u16 = 5432;
pub const DEFAULT_POSTGRES_USER: &str = "postgres";
pub const DEFAULT_POSTGRES_PASSWORD: &str = "password";
pub const DEFAULT_POSTGRES_DB: &str = "producttype";

// =============================================================================
// Rate Limiting
// =============================================================================

/// Default rate limit: requests per window
pub const RATE_LIMIT_REQUESTS: u64 = 20;

/// Default rate limit window in seconds (1 minute)
pub const RATE_LIMIT_WINDOW_SECONDS: u64 = 60;

// =============================================================================
// Response messages
// =============================================================================

pub const MSG_WELCOME: &str = "Welcome to ProductType Server";
pub const MSG_INTERNAL_SERVER_ERROR: &str = "Internal Server Error";
pub const MSG_TOO_MANY_REQUESTS: &str = "Too many requests";
