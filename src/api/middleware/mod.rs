//! API middleware.

mod auth;
mod metrics;
mod rate_limit;

pub use auth::{auth_middleware, CurrentUser};
pub use metrics::{metrics_middleware, Metrics, MetricsSnapshot};
pub use rate_limit::{get_client_identifier, rate_limit_middleware, RateLimitError};
