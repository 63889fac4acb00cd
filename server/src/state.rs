//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds the project catalog, the contact delivery collaborator, and the
//! contact rate limiter. Nothing here is persisted.

use std::sync::Arc;

use catalog::ProjectRecord;

use crate::config::RateLimitConfig;
use crate::rate_limit::RateLimiter;
use crate::services::delivery::ContactDelivery;

/// Shared application state. Clone is required by Axum; every field is
/// either `Copy` or Arc-backed.
#[derive(Clone)]
pub struct AppState {
    pub projects: &'static [ProjectRecord],
    pub delivery: Arc<dyn ContactDelivery>,
    pub rate_limiter: RateLimiter,
}

impl AppState {
    #[must_use]
    pub fn new(delivery: Arc<dyn ContactDelivery>, rate_limit: RateLimitConfig) -> Self {
        Self { projects: catalog::CATALOG, delivery, rate_limiter: RateLimiter::new(rate_limit) }
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================

#[cfg(test)]
pub mod test_helpers {
    use super::*;
    use std::sync::Mutex;

    use contact::ValidContact;
    use uuid::Uuid;

    use crate::services::delivery::DeliveryError;

    /// Records every delivered message; optionally fails instead.
    #[derive(Default)]
    pub struct MockDelivery {
        pub delivered: Mutex<Vec<(Uuid, ValidContact)>>,
        pub fail: bool,
    }

    #[async_trait::async_trait]
    impl ContactDelivery for MockDelivery {
        fn name(&self) -> &'static str {
            "mock"
        }

        async fn deliver(&self, id: Uuid, message: &ValidContact) -> Result<(), DeliveryError> {
            if self.fail {
                return Err(DeliveryError::Email("mock outage".into()));
            }
            self.delivered.lock().unwrap().push((id, message.clone()));
            Ok(())
        }
    }

    /// Create a test `AppState` with a recording delivery and default limits.
    #[must_use]
    pub fn test_app_state() -> (AppState, Arc<MockDelivery>) {
        test_app_state_with(MockDelivery::default(), RateLimitConfig::default())
    }

    #[must_use]
    pub fn test_app_state_with(delivery: MockDelivery, rate_limit: RateLimitConfig) -> (AppState, Arc<MockDelivery>) {
        let delivery = Arc::new(delivery);
        (AppState::new(delivery.clone(), rate_limit), delivery)
    }
}

#[cfg(test)]
#[path = "state_test.rs"]
mod tests;
