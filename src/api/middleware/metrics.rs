//! Request counters exposed at `/metrics`.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::api::AppState;

/// Process-wide HTTP counters
#[derive(Debug)]
pub struct Metrics {
    started_at: Instant,
    requests_total: AtomicU64,
    in_flight: AtomicU64,
    responses_2xx: AtomicU64,
    responses_3xx: AtomicU64,
    responses_4xx: AtomicU64,
    responses_5xx: AtomicU64,
}

/// Point-in-time view of the counters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct MetricsSnapshot {
    pub uptime_seconds: u64,
    pub requests_total: u64,
    pub in_flight: u64,
    pub responses_2xx: u64,
    pub responses_3xx: u64,
    pub responses_4xx: u64,
    pub responses_5xx: u64,
    /// Clients currently tracked by the rate limiter
    pub rate_limited_clients: u64,
}

impl Default for Metrics {
    fn default() -> Self {
        Self {
            started_at: Instant::now(),
            requests_total: AtomicU64::new(0),
            in_flight: AtomicU64::new(0),
            responses_2xx: AtomicU64::new(0),
            responses_3xx: AtomicU64::new(0),
            responses_4xx: AtomicU64::new(0),
            responses_5xx: AtomicU64::new(0),
        }
    }
}

impl Metrics {
    pub fn new() -> Self {
        Self::default()
    }

    fn begin(&self) {
        self.requests_total.fetch_add(1, Ordering::Relaxed);
        self.in_flight.fetch_add(1, Ordering::Relaxed);
    }

    fn finish(&self, status: u16) {
        self.in_flight.fetch_sub(1, Ordering::Relaxed);
        let bucket = match status {
            200..=299 => &self.responses_2xx,
            300..=399 => &self.responses_3xx,
            400..=499 => &self.responses_4xx,
            _ => &self.responses_5xx,
        };
        bucket.fetch_add(1, Ordering::Relaxed);
    }

    pub fn snapshot(&self, rate_limited_clients: usize) -> MetricsSnapshot {
        MetricsSnapshot {
            uptime_seconds: self.started_at.elapsed().as_secs(),
            requests_total: self.requests_total.load(Ordering::Relaxed),
            in_flight: self.in_flight.load(Ordering::Relaxed),
            responses_2xx: self.responses_2xx.load(Ordering::Relaxed),
            responses_3xx: self.responses_3xx.load(Ordering::Relaxed),
            responses_4xx: self.responses_4xx.load(Ordering::Relaxed),
            responses_5xx: self.responses_5xx.load(Ordering::Relaxed),
            rate_limited_clients: rate_limited_clients as u64,
        }
    }
}

/// Count every request and bucket its response status.
pub async fn metrics_middleware(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    state.metrics.begin();
    let response = next.run(request).await;
    state.metrics.finish(response.status().as_u16());
    response
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_statuses_land_in_their_bucket() {
        let metrics = Metrics::new();
        for status in [200, 201, 404, 500] {
            metrics.begin();
            metrics.finish(status);
        }

        let snapshot = metrics.snapshot(3);

        assert_eq!(snapshot.requests_total, 4);
        assert_eq!(snapshot.in_flight, 0);
        assert_eq!(snapshot.responses_2xx, 2);
        assert_eq!(snapshot.responses_4xx, 1);
        assert_eq!(snapshot.responses_5xx, 1);
        assert_eq!(snapshot.rate_limited_clients, 3);
    }
}
