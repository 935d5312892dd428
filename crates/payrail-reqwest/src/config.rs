//! Client configuration.
//!
//! Everything the transport needs is carried in an explicit [`Config`]
//! value handed to [`Client::new`](crate::Client::new): base URL,
//! credentials, and the request timeout. There is no process-wide state;
//! two clients with different configurations coexist happily.

use std::fmt;
use std::time::Duration;
use url::Url;

/// Default gateway endpoint.
pub const DEFAULT_BASE_URL: &str = "https://api.payrail.io/v1";

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Configuration for a [`Client`](crate::Client).
///
/// [`Config::default`] points at the production gateway with no
/// credentials; use [`Config::new`] for the common case of supplying a
/// key pair, and the `with_` methods to override the rest.
#[derive(Clone, PartialEq, Eq)]
pub struct Config {
    /// Gateway endpoint. A trailing slash is tolerated and trimmed.
    pub base_url: Url,
    /// API key, sent as the `X-Api-Key` header when non-empty.
    pub api_key: String,
    /// API secret, sent as the `X-Api-Secret` header when non-empty.
    pub secret_key: String,
    /// Timeout applied to every request.
    pub timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: Url::parse(DEFAULT_BASE_URL).expect("valid default base url"),
            api_key: String::new(),
            secret_key: String::new(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl Config {
    /// Configuration for the default gateway with the given credentials.
    pub fn new(api_key: impl Into<String>, secret_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            secret_key: secret_key.into(),
            ..Self::default()
        }
    }

    /// Points the client at a different gateway, e.g. a sandbox.
    pub fn with_base_url(mut self, base_url: Url) -> Self {
        self.base_url = base_url;
        self
    }

    /// Overrides the per-request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

// Credentials stay out of logs.
impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("base_url", &self.base_url.as_str())
            .field("api_key", &redact(&self.api_key))
            .field("secret_key", &redact(&self.secret_key))
            .field("timeout", &self.timeout)
            .finish()
    }
}

fn redact(value: &str) -> &'static str {
    if value.is_empty() { "" } else { "***" }
}
