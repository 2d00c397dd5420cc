use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_BASE_URL: &str = "https://ai-product-recommendation-api.onrender.com";
pub const DEFAULT_SESSION_ID: &str = "default";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 60;
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_NOTICE_SECS: u64 = 3;

/// Settings for talking to the recommendation service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
    pub session_id: String,
    pub request_timeout: Duration,
    pub connect_timeout: Duration,
    /// How long transient notices stay on screen
    pub notice_duration: Duration,
}

/// Errors produced while validating a [`ClientConfig`]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("invalid base URL '{0}' (expected http:// or https://)")]
    InvalidBaseUrl(String),

    #[error("session id must not be empty")]
    EmptySessionId,

    #[error("{0} timeout must be greater than zero")]
    ZeroTimeout(&'static str),

    #[error("failed to build HTTP client: {0}")]
    HttpClient(String),
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            session_id: DEFAULT_SESSION_ID.to_string(),
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
            connect_timeout: Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS),
            notice_duration: Duration::from_secs(DEFAULT_NOTICE_SECS),
        }
    }
}

impl ClientConfig {
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_session_id(mut self, session_id: impl Into<String>) -> Self {
        self.session_id = session_id.into();
        self
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    pub fn with_notice_duration(mut self, duration: Duration) -> Self {
        self.notice_duration = duration;
        self
    }

    /// Check the settings before building a client from them.
    ///
    /// # Errors
    ///
    /// Returns an error for a non-HTTP base URL, a blank session id or a zero timeout.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let scheme_ok = self.base_url.starts_with("http://") || self.base_url.starts_with("https://");
        if !scheme_ok {
            return Err(ConfigError::InvalidBaseUrl(self.base_url.clone()));
        }
        if self.session_id.trim().is_empty() {
            return Err(ConfigError::EmptySessionId);
        }
        if self.request_timeout.is_zero() {
            return Err(ConfigError::ZeroTimeout("request"));
        }
        if self.connect_timeout.is_zero() {
            return Err(ConfigError::ZeroTimeout("connect"));
        }
        Ok(())
    }

    /// Full URL of the recommendation endpoint
    pub fn recommend_url(&self) -> String {
        format!("{}/recommend", self.base_url)
    }

    /// Full URL of the service root, used as a health check
    pub fn health_url(&self) -> String {
        format!("{}/", self.base_url)
    }
}
