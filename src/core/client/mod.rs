//! Public client surface + builder.
//! Defaults (UA, endpoint, header names) live in `constants`.

mod constants;

use crate::core::ApiError;
use constants::{ACCESS_TOKEN_HEADER, DEFAULT_BASE_GRAPHQL, USER_AGENT, USER_ID_HEADER};
use reqwest::Client;
use reqwest::header::{HeaderMap, HeaderValue};
use std::time::Duration;
use url::Url;

/// HTTP client for the live auction GraphQL endpoint.
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct LsClient {
    http: Client,
    base_graphql: Url,
}

impl Default for LsClient {
    fn default() -> Self {
        Self::builder().build().expect("default client")
    }
}

impl LsClient {
    /// Create a new builder.
    pub fn builder() -> LsClientBuilder {
        LsClientBuilder::default()
    }

    /* -------- internal getters used by other modules -------- */

    pub(crate) fn http(&self) -> &Client {
        &self.http
    }
    pub(crate) fn base_graphql(&self) -> &Url {
        &self.base_graphql
    }
}

/* ----------------------- Builder ----------------------- */

#[derive(Default)]
pub struct LsClientBuilder {
    user_agent: Option<String>,
    base_url: Option<Url>,
    access_token: Option<String>,
    user_id: Option<String>,

    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
}

impl LsClientBuilder {
    /// Override the User-Agent.
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Override the GraphQL endpoint (e.g., `https://metaphysics-production.artsy.net/`).
    pub fn base_url(mut self, url: Url) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Authenticate requests with a user access token.
    ///
    /// Without one the endpoint answers anonymously and `me` comes back `null`,
    /// which the fetcher reports as a malformed payload.
    pub fn access_token(mut self, token: impl Into<String>) -> Self {
        self.access_token = Some(token.into());
        self
    }

    /// The id of the user the access token belongs to.
    pub fn user_id(mut self, id: impl Into<String>) -> Self {
        self.user_id = Some(id.into());
        self
    }

    /// Set a global request timeout (overall). Default: none.
    pub fn timeout(mut self, dur: Duration) -> Self {
        self.timeout = Some(dur);
        self
    }

    /// Set a connect timeout. Default: none.
    pub fn connect_timeout(mut self, dur: Duration) -> Self {
        self.connect_timeout = Some(dur);
        self
    }

    pub fn build(self) -> Result<LsClient, ApiError> {
        let base_graphql = match self.base_url {
            Some(url) => url,
            None => Url::parse(DEFAULT_BASE_GRAPHQL)?,
        };

        let mut headers = HeaderMap::new();
        if let Some(token) = self.access_token.as_deref() {
            headers.insert(ACCESS_TOKEN_HEADER, header_value(ACCESS_TOKEN_HEADER, token)?);
        }
        if let Some(id) = self.user_id.as_deref() {
            headers.insert(USER_ID_HEADER, header_value(USER_ID_HEADER, id)?);
        }

        let mut httpb = reqwest::Client::builder()
            .user_agent(self.user_agent.as_deref().unwrap_or(USER_AGENT))
            .default_headers(headers);

        if let Some(t) = self.timeout {
            httpb = httpb.timeout(t);
        }
        if let Some(ct) = self.connect_timeout {
            httpb = httpb.connect_timeout(ct);
        }

        let http = httpb.build()?;

        Ok(LsClient { http, base_graphql })
    }
}

fn header_value(name: &str, raw: &str) -> Result<HeaderValue, ApiError> {
    let mut value = HeaderValue::from_str(raw)
        .map_err(|_| ApiError::Other(format!("{name}: value is not visible ASCII")))?;
    value.set_sensitive(true);
    Ok(value)
}
