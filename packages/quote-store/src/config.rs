//! Service configuration.

/// Runtime configuration for the quotes service.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// Request body read timeout in milliseconds
    pub request_timeout_ms: u64,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            request_timeout_ms: 5000, // 5 seconds default
        }
    }
}
