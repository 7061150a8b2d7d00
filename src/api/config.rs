use std::{fmt, sync::Arc, time::Duration};

use super::transport::Transport;

pub const DEFAULT_BASE_URL: &str = "https://developer.easyslip.com/api/v1";
pub const DEFAULT_USER_AGENT: &str = concat!("easyslip-rs/", env!("CARGO_PKG_VERSION"));
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Settings applied once when an [`ApiClient`](super::ApiClient) is built.
#[derive(Clone)]
pub struct ClientConfig {
    /// API root; endpoint paths are appended to it.
    pub base_url: String,
    /// Sent as the `User-Agent` header on every request.
    pub user_agent: String,
    /// Overall timeout of the default transport. Ignored when
    /// `transport` is set.
    pub timeout: Duration,
    /// Replaces the default `reqwest` transport.
    pub transport: Option<Arc<dyn Transport>>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
            user_agent: DEFAULT_USER_AGENT.to_owned(),
            timeout: DEFAULT_TIMEOUT,
            transport: None,
        }
    }
}

impl ClientConfig {
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    #[must_use]
    pub fn with_transport(mut self, transport: impl Transport + 'static) -> Self {
        self.transport = Some(Arc::new(transport));
        self
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("base_url", &self.base_url)
            .field("user_agent", &self.user_agent)
            .field("timeout", &self.timeout)
            .field("transport", &self.transport.as_ref().map(|_| "custom"))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, "https://developer.easyslip.com/api/v1");
        assert!(config.user_agent.starts_with("easyslip-rs/"));
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert!(config.transport.is_none());
    }

    #[test]
    fn test_overrides() {
        let config = ClientConfig::default()
            .with_base_url("http://localhost:8080/api/v1")
            .with_user_agent("my-shop/2.0")
            .with_timeout(Duration::from_secs(5));
        assert_eq!(config.base_url, "http://localhost:8080/api/v1");
        assert_eq!(config.user_agent, "my-shop/2.0");
        assert_eq!(config.timeout, Duration::from_secs(5));
    }
}
