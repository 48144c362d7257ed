//! Per-connection credential resolution.
//!
//! Every connection gets a [`Session`] carrying the API key its tool calls
//! are authorized with. The key comes from the startup configuration unless
//! the connection URL carries a `clayApiKey` query parameter.

use crate::config::Config;
use url::Url;

/// Query parameter that overrides the default API key.
pub const API_KEY_QUERY_PARAM: &str = "clayApiKey";

/// Authorization scheme expected by the Clay tools API.
const AUTHORIZATION_SCHEME: &str = "ApiKey";

/// Resolved credential for one client connection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    api_key: String,
}

impl Session {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
        }
    }

    /// The resolved key. May be empty when neither source provided one.
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Value for the `Authorization` header of outbound calls.
    pub fn authorization(&self) -> String {
        format!("{} {}", AUTHORIZATION_SCHEME, self.api_key)
    }
}

/// Builds sessions from the default key and optional connection URLs.
#[derive(Debug, Clone)]
pub struct Authenticator {
    default_api_key: String,
}

impl Authenticator {
    pub fn new(config: &Config) -> Self {
        Self {
            default_api_key: config.clay_api_key.clone(),
        }
    }

    /// Resolve the session for a connection.
    ///
    /// `request_url` is the URL of the request that opened the connection, if the
    /// transport has one. It may be relative (`/mcp?clayApiKey=...`). A URL that
    /// fails to parse is logged and ignored; this never fails.
    pub fn authenticate(&self, request_url: Option<&str>) -> Session {
        let override_key = request_url.and_then(|raw| match Self::api_key_from_url(raw) {
            Ok(key) => key,
            Err(e) => {
                tracing::warn!("Error getting api key from connection URL: {}", e);
                None
            }
        });

        match override_key {
            Some(key) => {
                tracing::debug!("Using API key from connection URL");
                Session::new(key)
            }
            None => Session::new(self.default_api_key.clone()),
        }
    }

    fn api_key_from_url(raw: &str) -> Result<Option<String>, url::ParseError> {
        let base = Url::parse("http://localhost")?;
        let url = Url::options().base_url(Some(&base)).parse(raw)?;

        Ok(url
            .query_pairs()
            .find(|(name, _)| name == API_KEY_QUERY_PARAM)
            .map(|(_, value)| value.into_owned())
            .filter(|value| !value.is_empty()))
    }
}
