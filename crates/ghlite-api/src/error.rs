//! Error types for ghlite-api.

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during GitHub API operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A data call was made before the token exchange while the client
    /// rejects unauthenticated calls.
    #[error("client is not authenticated - exchange an OAuth code for a token first")]
    NotAuthenticated,

    /// The token exchange was attempted on an already authenticated client.
    #[error("client is already authenticated")]
    AlreadyAuthenticated,

    /// The OAuth endpoint answered, but not with a usable token.
    #[error("OAuth token exchange failed: {0}")]
    TokenExchange(String),

    /// The API rejected the credentials (HTTP 401).
    #[error("GitHub authentication failed - check the OAuth token and client credentials")]
    AuthenticationFailed,

    /// The requested resource does not exist or is not visible (HTTP 404).
    #[error("not found: {0}")]
    NotFound(String),

    /// API error with status code.
    #[error("GitHub API error ({status}): {message}")]
    ApiError { status: u16, message: String },

    /// A repository identifier that is not of the form `owner/name`.
    #[error("invalid repository name '{0}' - expected owner/name")]
    InvalidFullName(String),

    /// Network error.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// JSON parsing error.
    #[error("failed to parse GitHub response: {0}")]
    Parse(#[from] serde_json::Error),

    /// IO error (reading or writing the config file).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Config file parsing error.
    #[error("toml error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Config file serialization error.
    #[error("toml error: {0}")]
    TomlSer(#[from] toml::ser::Error),
}
