//! HTTP transport for the Payrail gateway.
//!
//! [`Client`] owns a configured [`reqwest::Client`] and exposes the four
//! verbs the service modules need. It injects the credential headers,
//! speaks JSON in both directions, and turns every non-2xx response into
//! a structured [`ApiError`]. It performs exactly one network call per
//! invocation: no retries, no backoff. Dropping a returned future cancels
//! the in-flight request, and the configured timeout bounds every call.

use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fmt;

use payrail::ValidationError;
use payrail::query::QueryPairs;

use crate::config::Config;

/// Version of this crate, reported in the `User-Agent` header.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// An error response from the Payrail gateway.
///
/// Decoded from the JSON error body when there is one; a non-JSON body
/// degrades to its raw text as the message. `code` and `details` are
/// machine-readable extras the gateway includes for some failures.
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize)]
pub struct ApiError {
    /// HTTP status code of the response.
    #[serde(default)]
    pub status_code: u16,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub details: Option<String>,
}

impl ApiError {
    /// Builds an [`ApiError`] from a non-2xx response body. The status
    /// from the response line wins unless the body carries its own.
    fn from_response(status_code: u16, body: &[u8]) -> Self {
        let mut error = serde_json::from_slice::<ApiError>(body).unwrap_or_else(|_| ApiError {
            status_code: 0,
            message: String::from_utf8_lossy(body).into_owned(),
            code: None,
            details: None,
        });
        if error.status_code == 0 {
            error.status_code = status_code;
        }
        error
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "payrail api error: {} - {}", self.status_code, self.message)?;
        if let Some(code) = &self.code {
            write!(f, " ({code})")?;
        }
        Ok(())
    }
}

impl std::error::Error for ApiError {}

/// Errors returned by the client.
///
/// The two tiers the caller cares about are statically distinguishable:
/// [`Error::Validation`] is produced before any network activity, while
/// the remaining variants describe what the wire or the gateway did.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The request failed pre-flight validation. Nothing was sent.
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),
    /// The gateway answered with a non-2xx status.
    #[error(transparent)]
    Api(#[from] ApiError),
    /// The request could not be performed: connection failure, timeout,
    /// or cancellation.
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    /// The response body was not the JSON the operation expects.
    #[error("failed to decode response body: {0}")]
    Decode(#[from] serde_json::Error),
}

/// A configured Payrail API client.
///
/// Cheap to clone; clones share the underlying connection pool. The
/// per-resource services hang off it:
///
/// ```rust,no_run
/// use payrail_reqwest::{Client, Config};
///
/// # async fn run() -> Result<(), payrail_reqwest::Error> {
/// let client = Client::new(Config::new("api_key", "api_secret"))?;
/// let merchant = client.merchants().info("merchant_123").await?;
/// println!("merchant {} is {}", merchant.id, merchant.status);
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct Client {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
    secret_key: String,
}

// Credentials stay out of logs, same as for [`Config`].
impl fmt::Debug for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl Client {
    /// Builds a client from the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Http`] if the underlying HTTP client cannot be
    /// constructed.
    pub fn new(config: Config) -> Result<Self, Error> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(format!("payrail-rs/{VERSION}"))
            .default_headers(headers)
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.as_str().trim_end_matches('/').to_string(),
            api_key: config.api_key,
            secret_key: config.secret_key,
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn authorize(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        let mut builder = builder;
        if !self.api_key.is_empty() {
            builder = builder.header("X-Api-Key", &self.api_key);
        }
        if !self.secret_key.is_empty() {
            builder = builder.header("X-Api-Secret", &self.secret_key);
        }
        builder
    }

    async fn send(&self, builder: reqwest::RequestBuilder) -> Result<Vec<u8>, Error> {
        let response = self.authorize(builder).send().await?;
        let status = response.status();
        let body = response.bytes().await?;

        if status.is_client_error() || status.is_server_error() {
            let error = ApiError::from_response(status.as_u16(), &body);
            tracing::debug!(status = status.as_u16(), code = ?error.code, "gateway returned an error");
            return Err(Error::Api(error));
        }

        tracing::trace!(status = status.as_u16(), "gateway response received");
        Ok(body.to_vec())
    }

    pub(crate) async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &QueryPairs,
    ) -> Result<T, Error> {
        tracing::debug!(path, params = query.len(), "GET");
        let mut builder = self.http.get(self.endpoint(path));
        if !query.is_empty() {
            builder = builder.query(query.as_slice());
        }
        let body = self.send(builder).await?;
        Ok(serde_json::from_slice(&body)?)
    }

    pub(crate) async fn post<B, T>(&self, path: &str, body: &B) -> Result<T, Error>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        tracing::debug!(path, "POST");
        let builder = self.http.post(self.endpoint(path)).json(body);
        let body = self.send(builder).await?;
        Ok(serde_json::from_slice(&body)?)
    }

    pub(crate) async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> Result<T, Error> {
        tracing::debug!(path, "POST");
        let builder = self.http.post(self.endpoint(path));
        let body = self.send(builder).await?;
        Ok(serde_json::from_slice(&body)?)
    }

    pub(crate) async fn delete(&self, path: &str) -> Result<(), Error> {
        tracing::debug!(path, "DELETE");
        let builder = self.http.delete(self.endpoint(path));
        self.send(builder).await?;
        Ok(())
    }
}
