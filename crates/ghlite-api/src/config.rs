//! Client configuration, loadable from a TOML file.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Default GitHub REST API URL.
pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// Default OAuth authorization-code exchange endpoint.
pub const DEFAULT_OAUTH_URL: &str = "https://github.com/login/oauth/access_token";

/// Versioned JSON media type sent on every data request.
pub const DEFAULT_ACCEPT: &str = "application/vnd.github.v3+json";

/// Default product/version user agent.
pub const DEFAULT_USER_AGENT: &str = concat!("ghlite/", env!("CARGO_PKG_VERSION"));

/// What to do when a data call is made before the token exchange.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnauthenticatedPolicy {
    /// Log a warning and send the request with blank credentials.
    #[default]
    Warn,
    /// Fail with [`Error::NotAuthenticated`](crate::Error::NotAuthenticated)
    /// without sending anything.
    Reject,
}

/// Configuration for a [`GitHubClient`](crate::GitHubClient).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Base URL for data endpoints (GitHub Enterprise uses `<host>/api/v3`).
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// OAuth code exchange endpoint.
    #[serde(default = "default_oauth_url")]
    pub oauth_url: String,

    /// `User-Agent` header value.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// `Accept` header value for data requests.
    #[serde(default = "default_accept")]
    pub accept: String,

    /// Append `client_id` and `client_secret` to every query string.
    ///
    /// On by default. Note this exposes the client secret in every URL.
    #[serde(default = "default_inject_credentials")]
    pub inject_credentials: bool,

    /// Behaviour for data calls made before authentication.
    #[serde(default)]
    pub unauthenticated: UnauthenticatedPolicy,
}

impl ClientConfig {
    /// Load config from a TOML file.
    ///
    /// A missing file yields the default config.
    ///
    /// # Errors
    /// Returns error if file can't be read or parsed.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }

    /// Save config to a TOML file.
    ///
    /// # Errors
    /// Returns error if serialization or write fails.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Use a different API base URL.
    #[must_use]
    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into();
        self
    }

    /// Use a different OAuth exchange endpoint.
    #[must_use]
    pub fn with_oauth_url(mut self, oauth_url: impl Into<String>) -> Self {
        self.oauth_url = oauth_url.into();
        self
    }

    /// Set the unauthenticated-call policy.
    #[must_use]
    pub const fn with_unauthenticated(mut self, policy: UnauthenticatedPolicy) -> Self {
        self.unauthenticated = policy;
        self
    }

    /// Enable or disable credential injection into query strings.
    #[must_use]
    pub const fn with_inject_credentials(mut self, inject: bool) -> Self {
        self.inject_credentials = inject;
        self
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            oauth_url: default_oauth_url(),
            user_agent: default_user_agent(),
            accept: default_accept(),
            inject_credentials: default_inject_credentials(),
            unauthenticated: UnauthenticatedPolicy::default(),
        }
    }
}

fn default_api_url() -> String {
    DEFAULT_API_URL.into()
}

fn default_oauth_url() -> String {
    DEFAULT_OAUTH_URL.into()
}

fn default_user_agent() -> String {
    DEFAULT_USER_AGENT.into()
}

fn default_accept() -> String {
    DEFAULT_ACCEPT.into()
}

const fn default_inject_credentials() -> bool {
    true
}
