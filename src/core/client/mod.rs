//! Public client surface + builder.

mod constants;

use std::fmt;
use std::time::Duration;

use constants::{DEFAULT_BASE_QUERY, USER_AGENT};
use reqwest::Client;
use url::Url;

use crate::core::AvError;

/// An HTTP client bound to one Alpha Vantage API key.
///
/// The key is injected here and nowhere else; the library never reads it from
/// the environment or any other ambient state.
#[derive(Clone)]
pub struct AvClient {
    http: Client,
    base_query: Url,
    api_key: String,
}

impl fmt::Debug for AvClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // The API key is a secret; keep it out of logs and panic messages.
        f.debug_struct("AvClient")
            .field("base_query", &self.base_query.as_str())
            .field("api_key", &"<redacted>")
            .finish_non_exhaustive()
    }
}

impl AvClient {
    /// Create a new builder.
    pub fn builder() -> AvClientBuilder {
        AvClientBuilder::default()
    }

    /// Build a client from an API key with default endpoints.
    pub fn new(api_key: impl Into<String>) -> Result<Self, AvError> {
        Self::builder().api_key(api_key).build()
    }

    /* -------- internal getters used by other modules -------- */

    pub(crate) fn http(&self) -> &Client {
        &self.http
    }

    /// Endpoint URL for one logical call, keyed by `function` and `symbol`,
    /// with the API key appended.
    pub(crate) fn query_url(&self, function: &str, symbol: &str) -> Url {
        let mut url = self.base_query.clone();
        url.query_pairs_mut()
            .append_pair("function", function)
            .append_pair("symbol", symbol)
            .append_pair("apikey", &self.api_key);
        url
    }
}

/* ----------------------- Builder ----------------------- */

#[derive(Default)]
pub struct AvClientBuilder {
    api_key: Option<String>,
    user_agent: Option<String>,
    base_query: Option<Url>,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
}

impl AvClientBuilder {
    /// Set the API key sent with every request. Required.
    #[must_use]
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Override the User-Agent.
    #[must_use]
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Override the query endpoint (e.g. a mock server in tests).
    #[must_use]
    pub fn base_query(mut self, url: Url) -> Self {
        self.base_query = Some(url);
        self
    }

    /// Set a global request timeout (overall). Default: reqwest's.
    #[must_use]
    pub fn timeout(mut self, dur: Duration) -> Self {
        self.timeout = Some(dur);
        self
    }

    /// Set a connect timeout. Default: reqwest's.
    #[must_use]
    pub fn connect_timeout(mut self, dur: Duration) -> Self {
        self.connect_timeout = Some(dur);
        self
    }

    pub fn build(self) -> Result<AvClient, AvError> {
        let api_key = self.api_key.ok_or(AvError::MissingApiKey)?;
        let base_query = match self.base_query {
            Some(url) => url,
            None => Url::parse(DEFAULT_BASE_QUERY)?,
        };

        let mut httpb =
            reqwest::Client::builder().user_agent(self.user_agent.as_deref().unwrap_or(USER_AGENT));

        if let Some(t) = self.timeout {
            httpb = httpb.timeout(t);
        }
        if let Some(ct) = self.connect_timeout {
            httpb = httpb.connect_timeout(ct);
        }

        Ok(AvClient {
            http: httpb.build()?,
            base_query,
            api_key,
        })
    }
}
