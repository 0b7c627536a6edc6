//! HTTP fetching for the scraper.
//!
//! Provides the blocking GET used to obtain markup from a URL. The parser
//! crates never touch the network; they are handed whatever text this
//! returns.
use std::time::Duration;

use thiserror::Error;

/// User-Agent header sent when the caller does not supply one.
pub const DEFAULT_USER_AGENT: &str = concat!("wombat/", env!("CARGO_PKG_VERSION"));

/// Default request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Content types accepted as HTML. Matched as prefixes so that parameters
/// such as `; charset=utf-8` are allowed.
const HTML_CONTENT_TYPES: [&str; 2] = ["text/html", "application/xhtml+xml"];

/// Errors surfaced by [`fetch_html`].
#[derive(Debug, Error)]
pub enum FetchError {
    /// The HTTP client could not be constructed.
    #[error("failed to create HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// The request could not be sent or no response arrived.
    #[error("request failed: {0}")]
    Request(#[source] reqwest::Error),

    /// The server answered with a non-success status code.
    #[error("non-success response: {0}")]
    Status(u16),

    /// The response is not an HTML document.
    #[error("unexpected content type: {0:?}")]
    ContentType(String),

    /// The response body could not be read as text.
    #[error("failed to read response body: {0}")]
    Body(#[source] reqwest::Error),
}

/// Request settings for [`fetch_html`].
///
/// Headers are sent in insertion order. A caller-supplied `User-Agent`
/// header replaces [`DEFAULT_USER_AGENT`].
#[derive(Debug, Clone)]
pub struct FetchOptions {
    headers: Vec<(String, String)>,
    timeout: Duration,
    user_agent: String,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            headers: Vec::new(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl FetchOptions {
    /// Options with the default user agent, timeout and no extra headers.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a request header.
    #[must_use]
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Add every header from an iterator of `(name, value)` pairs.
    #[must_use]
    pub fn headers<I, K, V>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.headers
            .extend(headers.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    /// Set the request timeout.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the user agent sent when no explicit `User-Agent` header is given.
    #[must_use]
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Extra request headers, in insertion order.
    #[must_use]
    pub fn header_list(&self) -> &[(String, String)] {
        &self.headers
    }

    /// The configured timeout.
    #[must_use]
    pub const fn timeout_duration(&self) -> Duration {
        self.timeout
    }

    fn has_user_agent_header(&self) -> bool {
        self.headers
            .iter()
            .any(|(name, _)| name.eq_ignore_ascii_case("user-agent"))
    }
}

/// Returns true if `content_type` names an HTML document.
#[must_use]
pub fn is_html_content_type(content_type: &str) -> bool {
    let content_type = content_type.trim_start().to_ascii_lowercase();
    HTML_CONTENT_TYPES
        .iter()
        .any(|accepted| content_type.starts_with(accepted))
}

/// Fetch a URL and return its body as text.
///
/// # Errors
///
/// Returns [`FetchError`] if the HTTP client cannot be created, the request
/// fails, the response has a non-success status, the `Content-Type` header is
/// missing or not HTML, or the body cannot be decoded.
pub fn fetch_html(url: &str, options: &FetchOptions) -> Result<String, FetchError> {
    tracing::debug!(url, "fetching document");

    let client = reqwest::blocking::Client::builder()
        .timeout(options.timeout)
        .build()
        .map_err(FetchError::Client)?;

    let mut request = client.get(url);
    if !options.has_user_agent_header() {
        request = request.header(reqwest::header::USER_AGENT, options.user_agent.as_str());
    }
    for (name, value) in &options.headers {
        request = request.header(name.as_str(), value.as_str());
    }

    let response = request.send().map_err(FetchError::Request)?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status(status.as_u16()));
    }

    let content_type = response
        .headers()
        .get(reqwest::header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
        .to_string();
    if !is_html_content_type(&content_type) {
        return Err(FetchError::ContentType(content_type));
    }

    let body = response.text().map_err(FetchError::Body)?;
    tracing::debug!(url, bytes = body.len(), "fetched document");
    Ok(body)
}
