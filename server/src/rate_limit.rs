//! In-memory rate limiting for contact-form submissions.
//!
//! DESIGN
//! ======
//! Sliding-window counters backed by `HashMap<IpAddr, VecDeque<Instant>>`,
//! one window per client address. Idle entries are dropped as they are
//! pruned so the map does not grow with one-off visitors.

use std::collections::{HashMap, VecDeque};
use std::net::IpAddr;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use crate::config::ContactLimits;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum RateLimitError {
    #[error("rate limit exceeded (max {limit} requests/{window_secs}s)")]
    Exceeded { limit: usize, window_secs: u64 },
}

#[derive(Clone)]
pub struct RateLimiter {
    inner: Arc<Mutex<HashMap<IpAddr, VecDeque<Instant>>>>,
    limits: ContactLimits,
}

impl RateLimiter {
    #[must_use]
    pub fn new(limits: ContactLimits) -> Self {
        Self { inner: Arc::new(Mutex::new(HashMap::new())), limits }
    }

    /// Check the client's window, then record the request.
    pub fn check_and_record(&self, client: IpAddr) -> Result<(), RateLimitError> {
        self.check_and_record_at(client, Instant::now())
    }

    /// Internal: check + record with explicit timestamp (for testing).
    fn check_and_record_at(&self, client: IpAddr, now: Instant) -> Result<(), RateLimitError> {
        let mut inner = self
            .inner
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        let window = self.limits.window;

        inner.retain(|_, deque| {
            prune_window(deque, now, window);
            !deque.is_empty()
        });

        let deque = inner.entry(client).or_default();
        if deque.len() >= self.limits.max_requests {
            return Err(RateLimitError::Exceeded {
                limit: self.limits.max_requests,
                window_secs: window.as_secs(),
            });
        }
        deque.push_back(now);
        Ok(())
    }

    #[cfg(test)]
    fn tracked_clients(&self) -> usize {
        self.inner
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .len()
    }
}

// =============================================================================
// HELPERS
// =============================================================================

fn prune_window(deque: &mut VecDeque<Instant>, now: Instant, window: Duration) {
    while let Some(&front) = deque.front() {
        if now.duration_since(front) > window {
            deque.pop_front();
        } else {
            break;
        }
    }
}

#[cfg(test)]
#[path = "rate_limit_test.rs"]
mod tests;
