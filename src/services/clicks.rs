// src/services/clicks.rs - Click accounting
use std::sync::Arc;

use log::{debug, warn};

use crate::repositories::LinkStore;

/// Records one click per successful resolution.
///
/// Availability of the redirect is prioritized over exactness of the
/// counter: a failed increment is logged and dropped, never surfaced to
/// the end user.
pub struct ClickAccounting {
    store: Arc<dyn LinkStore>,
}

impl ClickAccounting {
    pub fn new(store: Arc<dyn LinkStore>) -> Self {
        Self { store }
    }

    pub async fn record(&self, code: &str) {
        match self.store.increment_clicks(code).await {
            Ok(true) => debug!("Recorded click for code '{}'", code),
            Ok(false) => debug!("Click on '{}' arrived after deletion, dropped", code),
            Err(e) => warn!("Click accounting failed for code '{}': {}", code, e),
        }
    }
}
