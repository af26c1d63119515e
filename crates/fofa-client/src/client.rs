//! Main FOFA API client implementation.

use crate::api::SearchApi;
use crate::config::Credentials;
use fofa_core::{parse_reply, FieldMapping, FofaError, Record, Result, SearchResults};
use reqwest::Client as HttpClient;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, instrument, warn};

/// The FOFA API base URL
const DEFAULT_BASE_URL: &str = "https://fofa.info";

/// Default request timeout
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Main FOFA API client
///
/// Cloning is cheap; clones share the same connection pool.
#[derive(Clone)]
pub struct FofaClient {
    inner: Arc<ClientInner>,
}

struct ClientInner {
    http: HttpClient,
    credentials: Credentials,
    base_url: String,
}

impl FofaClient {
    /// Create a new client for the given account using default settings
    pub fn new(email: impl Into<String>, key: impl Into<String>) -> Result<Self> {
        FofaClientBuilder::new(email, key).build()
    }

    /// Create a new client from a [`Credentials`] pair
    pub fn from_credentials(credentials: Credentials) -> Result<Self> {
        FofaClientBuilder::from_credentials(credentials).build()
    }

    /// Create a builder for custom configuration
    #[must_use]
    pub fn builder(email: impl Into<String>, key: impl Into<String>) -> FofaClientBuilder {
        FofaClientBuilder::new(email, key)
    }

    /// Access search endpoints
    #[must_use]
    pub fn search(&self) -> SearchApi<'_> {
        SearchApi::new(self)
    }

    /// Account email this client signs requests with
    #[must_use]
    pub fn email(&self) -> &str {
        &self.inner.credentials.email
    }

    /// Base URL requests are sent to
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.inner.base_url
    }

    /// Run a search and return the reply body untouched, whatever the status.
    ///
    /// `fields` of `None` requests the default seven columns.
    pub async fn fetch_raw(
        &self,
        page: u32,
        query: &str,
        fields: Option<&FieldMapping>,
    ) -> Result<Vec<u8>> {
        self.search()
            .query(query)
            .page(page)
            .fields(fields.cloned().unwrap_or_default())
            .raw()
            .await
    }

    /// Run a search and parse the reply into records
    pub async fn fetch_records(
        &self,
        page: u32,
        query: &str,
        fields: Option<&FieldMapping>,
    ) -> Result<Vec<Record>> {
        self.search()
            .query(query)
            .page(page)
            .fields(fields.cloned().unwrap_or_default())
            .records()
            .await
    }

    /// Perform a GET request and return the status and body
    #[instrument(skip(self, params), fields(provider = "fofa"))]
    pub(crate) async fn get(&self, path: &str, params: &[(&str, &str)]) -> Result<Reply> {
        let url = self.build_url(path, params);
        debug!(base_url = %self.inner.base_url, params = ?params, "GET request");

        let response = self
            .inner
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| FofaError::Http(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .bytes()
            .await
            .map_err(|e| FofaError::Http(e.to_string()))?;

        debug!(status, bytes = body.len(), "reply received");
        Ok(Reply {
            status,
            body: body.to_vec(),
        })
    }

    /// Build a URL with the credentials and other query parameters.
    ///
    /// Email and key go in verbatim; the remaining values are form-encoded.
    pub(crate) fn build_url(&self, path: &str, params: &[(&str, &str)]) -> String {
        let credentials = &self.inner.credentials;
        let mut url = format!("{}{}", self.inner.base_url, path);

        url.push_str("?email=");
        url.push_str(&credentials.email);
        url.push_str("&key=");
        url.push_str(&credentials.key);

        for (key, value) in params {
            url.push('&');
            url.push_str(key);
            url.push('=');
            url.push_str(&urlencoding::encode(value));
        }

        url
    }

    /// Convert a non-success reply to a [`FofaError`]
    fn handle_error(status: u16, body: &[u8]) -> FofaError {
        let text = String::from_utf8_lossy(body).into_owned();

        // FOFA puts its message in `errmsg`; fall back to the raw body
        let message = serde_json::from_str::<serde_json::Value>(&text)
            .ok()
            .and_then(|v| v.get("errmsg").and_then(|e| e.as_str()).map(String::from))
            .unwrap_or(text);

        warn!(status, message = %message, "FOFA request failed");

        match status {
            401 | 403 => FofaError::Unauthorized,
            _ => FofaError::Api {
                code: status,
                message,
            },
        }
    }
}

/// Status and body of one HTTP exchange
#[derive(Debug)]
pub(crate) struct Reply {
    status: u16,
    body: Vec<u8>,
}

impl Reply {
    const fn is_success(&self) -> bool {
        matches!(self.status, 200..=299)
    }

    /// The body as delivered, whatever the status.
    ///
    /// A failed status with an empty body has nothing to hand back and
    /// becomes a status error instead.
    pub(crate) fn into_body(self) -> Result<Vec<u8>> {
        if self.is_success() || !self.body.is_empty() {
            Ok(self.body)
        } else {
            Err(FofaClient::handle_error(self.status, &self.body))
        }
    }

    /// Parse the envelope, letting a service-reported error win over the status
    pub(crate) fn parse(&self, mapping: &FieldMapping) -> Result<SearchResults> {
        let parsed = parse_reply(&self.body, mapping);
        if self.is_success() {
            return parsed;
        }

        match parsed {
            Err(FofaError::Remote(message)) => {
                warn!(status = self.status, message = %message, "FOFA request failed");
                Err(FofaError::Remote(message))
            }
            _ => Err(FofaClient::handle_error(self.status, &self.body)),
        }
    }
}

impl std::fmt::Debug for FofaClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FofaClient")
            .field("credentials", &self.inner.credentials)
            .field("base_url", &self.inner.base_url)
            .finish_non_exhaustive()
    }
}

/// Builder for configuring a [`FofaClient`]
pub struct FofaClientBuilder {
    credentials: Credentials,
    base_url: String,
    timeout: Duration,
    user_agent: String,
    accept_invalid_certs: bool,
}

impl FofaClientBuilder {
    /// Create a new builder for the given account
    #[must_use]
    pub fn new(email: impl Into<String>, key: impl Into<String>) -> Self {
        Self::from_credentials(Credentials::new(email, key))
    }

    /// Create a new builder from a [`Credentials`] pair
    #[must_use]
    pub fn from_credentials(credentials: Credentials) -> Self {
        Self {
            credentials,
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: format!("fofa-rust/{}", env!("CARGO_PKG_VERSION")),
            accept_invalid_certs: false,
        }
    }

    /// Set the base URL (useful for testing or self-hosted mirrors)
    #[must_use]
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the request timeout
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the User-Agent header
    #[must_use]
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = agent.into();
        self
    }

    /// Skip TLS certificate verification.
    ///
    /// Only for endpoints with self-signed or mismatched certificates; any
    /// host on the path can read the key when this is on.
    #[must_use]
    pub const fn danger_accept_invalid_certs(mut self, accept: bool) -> Self {
        self.accept_invalid_certs = accept;
        self
    }

    /// Build the client
    pub fn build(self) -> Result<FofaClient> {
        let base_url = self.base_url.trim_end_matches('/').to_string();
        url::Url::parse(&base_url).map_err(|e| FofaError::InvalidUrl(format!("{base_url}: {e}")))?;

        if self.accept_invalid_certs {
            warn!("TLS certificate verification is disabled");
        }

        let http = HttpClient::builder()
            .timeout(self.timeout)
            .user_agent(&self.user_agent)
            .gzip(true)
            .danger_accept_invalid_certs(self.accept_invalid_certs)
            .build()
            .map_err(|e| FofaError::Config(format!("failed to build HTTP client: {e}")))?;

        Ok(FofaClient {
            inner: Arc::new(ClientInner {
                http,
                credentials: self.credentials,
                base_url,
            }),
        })
    }
}

// URL encoding helper
mod urlencoding {
    pub fn encode(s: &str) -> String {
        url::form_urlencoded::byte_serialize(s.as_bytes()).collect()
    }
}
