/// Base URL of the REST service when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8081/api";

/// Settings needed to reach the reservation API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatewayConfig {
    pub base_url: String,
}

impl GatewayConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}
