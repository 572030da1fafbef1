use std::time::Duration;

use serde::{Deserialize, Serialize};

fn default_timeout_ms() -> u64 {
    30_000
}

/// Connection settings for a management service.
///
/// Deserializable so it can sit inside an application's own configuration
/// file:
///
/// ```
/// use pubsub_facades::HttpClientConfig;
///
/// let config: HttpClientConfig = serde_json::from_str(
///     r#"{ "base_url": "http://localhost:8080/sm/api/1.0", "username": "swim" }"#,
/// )
/// .unwrap();
/// assert_eq!(config.timeout_ms, 30_000);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpClientConfig {
    /// Root URL of the service API; paths are appended to it.
    pub base_url: String,
    /// Whole-request timeout in milliseconds. Never zero.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self::new("http://localhost:8080")
    }
}

impl HttpClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout_ms: default_timeout_ms(),
            username: None,
            password: None,
        }
    }

    /// Send HTTP basic auth with every request.
    pub fn with_credentials(
        mut self,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        self.username = Some(username.into());
        self.password = Some(password.into());
        self
    }

    /// Set the request timeout, rounded up to whole milliseconds.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        let millis = timeout.as_nanos().div_ceil(1_000_000);
        self.timeout_ms = u64::try_from(millis).unwrap_or(u64::MAX).max(1);
        self
    }

    /// A zero timeout (only reachable through deserialization) counts as
    /// one millisecond.
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms.max(1))
    }

    /// Join the base URL and a path with exactly one slash.
    pub fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}
