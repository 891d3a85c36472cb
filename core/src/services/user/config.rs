//! Configuration for the user service

use std::time::Duration;

use ga_shared::AuthConfig;

/// Configuration for the user service
#[derive(Debug, Clone)]
pub struct UserServiceConfig {
    /// Deadline applied to each storage call
    pub storage_timeout: Duration,
}

impl Default for UserServiceConfig {
    fn default() -> Self {
        Self {
            storage_timeout: Duration::from_secs(5),
        }
    }
}

impl From<&AuthConfig> for UserServiceConfig {
    fn from(auth: &AuthConfig) -> Self {
        Self {
            storage_timeout: Duration::from_millis(auth.storage_timeout_ms),
        }
    }
}
