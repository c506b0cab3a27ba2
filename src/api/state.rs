//! Application State
//!
//! Shared state accessible by all API handlers.
//! Wrapped in Arc for thread-safe sharing across async tasks.

use crate::config::Config;
use crate::websocket::ConnectionHub;
use std::sync::Arc;
use std::time::Instant;

/// Shared application state for all handlers
#[derive(Clone)]
pub struct AppState {
    /// Effective configuration
    pub config: Arc<Config>,
    /// Server start time for uptime tracking
    pub start_time: Instant,
    /// Mounted dashboard views
    pub ws_hub: Arc<ConnectionHub>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let ws_hub = Arc::new(ConnectionHub::new(config.hub.clone()));
        Self {
            config: Arc::new(config),
            start_time: Instant::now(),
            ws_hub,
        }
    }

    /// Get server uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }

    /// Number of currently mounted views
    pub async fn active_views(&self) -> usize {
        self.ws_hub.connection_count().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_new_state_has_no_views() {
        let mut config = Config::default();
        config.hub.max_connections = 3;

        let state = AppState::new(config);
        assert_eq!(state.active_views().await, 0);
        assert_eq!(state.ws_hub.max_connections(), 3);
        assert!(state.uptime_seconds() < 5);
    }
}
