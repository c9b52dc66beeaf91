//! Shared application state for request handlers.

use std::sync::Arc;
use std::time::Instant;

use crate::config::AppConfig;
use crate::shutdown::ShutdownHandle;

/// Shared application state, cloneable across handlers via Arc-wrapped fields.
///
/// Contains the application configuration (including the injected admin
/// secret), the process start instant for uptime reporting, and the handle
/// used to request termination.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub started_at: Instant,
    pub shutdown: ShutdownHandle,
}

impl AppState {
    /// Creates a new application state from the given configuration and
    /// terminate handle. Uptime is measured from this call.
    pub fn new(config: AppConfig, shutdown: ShutdownHandle) -> Self {
        Self {
            config: Arc::new(config),
            started_at: Instant::now(),
            shutdown,
        }
    }
}
