//! In-process sliding-window rate limiter.
//!
//! Each client key keeps the instants of its accepted requests inside the
//! current window. Counters live for the lifetime of the process.

use std::collections::{HashMap, VecDeque};
use std::sync::{Mutex, PoisonError};
use std::time::{Duration, Instant};

/// Keys are swept once the map grows past this many entries.
const SWEEP_THRESHOLD: usize = 10_000;

/// Outcome of a rate limit check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimitDecision {
    /// Requests counted in the window, including this one when allowed
    pub count: u64,
    pub allowed: bool,
    /// Seconds until the oldest counted request leaves the window
    pub retry_after: u64,
}

/// Sliding-window request counter keyed by client identifier
#[derive(Default)]
pub struct RateLimiter {
    windows: Mutex<HashMap<String, VecDeque<Instant>>>,
}

impl RateLimiter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check and record a request for `identifier`.
    pub fn check_rate_limit(
        &self,
        identifier: &str,
        max_requests: u64,
        window_seconds: u64,
    ) -> RateLimitDecision {
        self.check_at(identifier, max_requests, window_seconds, Instant::now())
    }

    fn check_at(
        &self,
        identifier: &str,
        max_requests: u64,
        window_seconds: u64,
        now: Instant,
    ) -> RateLimitDecision {
        let window = Duration::from_secs(window_seconds);
        let mut windows = self.windows.lock().unwrap_or_else(PoisonError::into_inner);

        if windows.len() > SWEEP_THRESHOLD {
            windows.retain(|_, hits| {
                hits.back()
                    .is_some_and(|last| now.saturating_duration_since(*last) < window)
            });
        }

        let hits = windows.entry(identifier.to_string()).or_default();
        while hits
            .front()
            .is_some_and(|first| now.saturating_duration_since(*first) >= window)
        {
            hits.pop_front();
        }

        let current = hits.len() as u64;
        if current >= max_requests {
            let retry_after = hits
                .front()
                .map(|first| window.saturating_sub(now.saturating_duration_since(*first)))
                .unwrap_or(window)
                .as_secs()
                .max(1);

            return RateLimitDecision {
                count: current,
                allowed: false,
                retry_after,
            };
        }

        hits.push_back(now);
        RateLimitDecision {
            count: current + 1,
            allowed: true,
            retry_after: 0,
        }
    }

    /// Number of tracked client keys.
    pub fn tracked_clients(&self) -> usize {
        self.windows
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allows_up_to_limit_then_rejects() {
        let limiter = RateLimiter::new();
        let now = Instant::now();

        for expected in 1..=3 {
            let decision = limiter.check_at("10.0.0.1", 3, 60, now);
            assert!(decision.allowed);
            assert_eq!(decision.count, expected);
        }

        let rejected = limiter.check_at("10.0.0.1", 3, 60, now);
        assert!(!rejected.allowed);
        assert_eq!(rejected.retry_after, 60);
    }

    #[test]
    fn test_window_slides() {
        let limiter = RateLimiter::new();
        let start = Instant::now();

        assert!(limiter.check_at("client", 2, 60, start).allowed);
        assert!(limiter
            .check_at("client", 2, 60, start + Duration::from_secs(30))
            .allowed);
        let blocked = limiter.check_at("client", 2, 60, start + Duration::from_secs(45));
        assert!(!blocked.allowed);
        assert_eq!(blocked.retry_after, 15);

        // The first hit has left the window
        let later = limiter.check_at("client", 2, 60, start + Duration::from_secs(61));
        assert!(later.allowed);
        assert_eq!(later.count, 2);
    }

    #[test]
    fn test_clients_are_independent() {
        let limiter = RateLimiter::new();
        let now = Instant::now();

        assert!(limiter.check_at("a", 1, 60, now).allowed);
        assert!(!limiter.check_at("a", 1, 60, now).allowed);
        assert!(limiter.check_at("b", 1, 60, now).allowed);
        assert_eq!(limiter.tracked_clients(), 2);
    }
}
