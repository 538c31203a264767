//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor.
//! It holds the parsed configuration and the contact-form rate limiter.

use std::sync::Arc;

use crate::config::ServerConfig;
use crate::rate_limit::RateLimiter;

/// Clone is required by Axum; inner fields are Arc-wrapped.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ServerConfig>,
    pub contact_limiter: RateLimiter,
}

impl AppState {
    #[must_use]
    pub fn new(config: ServerConfig) -> Self {
        let contact_limiter = RateLimiter::new(config.contact_limits.clone());
        Self { config: Arc::new(config), contact_limiter }
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================

#[cfg(test)]
pub mod test_helpers {
    use std::path::PathBuf;
    use std::time::Duration;

    use super::*;
    use crate::config::ContactLimits;

    /// State with no mailer, a temp assets dir, and a small rate limit.
    #[must_use]
    pub fn test_app_state(assets_dir: PathBuf, max_requests: usize) -> AppState {
        AppState::new(ServerConfig {
            port: 0,
            assets_dir,
            mailer: None,
            contact_limits: ContactLimits { max_requests, window: Duration::from_secs(60) },
        })
    }
}
