//! OAuth credentials and the client's authentication state.

use secrecy::SecretString;
use url::form_urlencoded;

use crate::error::{Error, Result};

/// OAuth application credentials.
///
/// The secret is stored as a `SecretString`, so `Debug` output never shows it.
#[derive(Debug)]
pub struct Credentials {
    /// OAuth application client id.
    pub client_id: String,

    /// OAuth application client secret.
    pub client_secret: SecretString,
}

impl Credentials {
    /// Create credentials from a client id and secret.
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: SecretString::from(client_secret.into()),
        }
    }
}

/// Authentication state of a client.
///
/// A client starts `Unauthenticated` and moves to `Authenticated` once, after
/// a successful token exchange. There is no way back.
#[derive(Debug, Default)]
pub enum AuthState {
    /// No token exchange has happened yet.
    #[default]
    Unauthenticated,

    /// Token exchange succeeded.
    Authenticated {
        /// Credentials used for the exchange, injected into query strings.
        credentials: Credentials,
        /// Bearer token sent on every data request.
        token: SecretString,
    },
}

impl AuthState {
    /// Whether a token is held.
    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated { .. })
    }

    /// Stored credentials, if authenticated.
    #[must_use]
    pub const fn credentials(&self) -> Option<&Credentials> {
        match self {
            Self::Unauthenticated => None,
            Self::Authenticated { credentials, .. } => Some(credentials),
        }
    }

    /// Stored bearer token, if authenticated.
    #[must_use]
    pub const fn token(&self) -> Option<&SecretString> {
        match self {
            Self::Unauthenticated => None,
            Self::Authenticated { token, .. } => Some(token),
        }
    }
}

/// Extract the bearer token from an OAuth exchange response body.
///
/// The body is `&`-delimited `key=value` pairs, e.g.
/// `access_token=abc123&scope=&token_type=bearer`. The first pair's value is
/// the token, taken verbatim. An `error=...` first pair is reported with its
/// decoded description.
pub(crate) fn parse_token_response(body: &str) -> Result<SecretString> {
    let body = body.trim();
    let first = body.split('&').next().unwrap_or_default();
    let Some((key, value)) = first.split_once('=') else {
        return Err(Error::TokenExchange(
            "response body is not a list of key=value pairs".into(),
        ));
    };

    if key == "error" {
        let pairs: Vec<(String, String)> = form_urlencoded::parse(body.as_bytes())
            .into_owned()
            .collect();
        let field = |name: &str| {
            pairs
                .iter()
                .find(|(k, _)| k == name)
                .map(|(_, v)| v.clone())
        };
        let error = field("error").unwrap_or_default();
        let description = field("error_description").unwrap_or_else(|| "no description".into());
        return Err(Error::TokenExchange(format!("{error}: {description}")));
    }

    if value.is_empty() {
        return Err(Error::TokenExchange(format!(
            "response field '{key}' is empty"
        )));
    }

    Ok(SecretString::from(value.to_string()))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use secrecy::ExposeSecret;

    use super::*;

    #[test]
    fn test_parse_token_first_pair() {
        let token = parse_token_response("token=abc123&scope=&").unwrap();
        assert_eq!(token.expose_secret(), "abc123");
    }

    #[test]
    fn test_parse_token_github_shape() {
        let body = "access_token=gho_16C7e42F292c&scope=repo%2Cgist&token_type=bearer";
        let token = parse_token_response(body).unwrap();
        assert_eq!(token.expose_secret(), "gho_16C7e42F292c");
    }

    #[test]
    fn test_parse_token_value_is_verbatim() {
        let token = parse_token_response("token=ab+c%2F&scope=&").unwrap();
        assert_eq!(token.expose_secret(), "ab+c%2F");
    }

    #[test]
    fn test_parse_token_trims_newline() {
        let token = parse_token_response("access_token=xyz\n").unwrap();
        assert_eq!(token.expose_secret(), "xyz");
    }

    #[test]
    fn test_parse_token_oauth_error() {
        let err = parse_token_response(
            "error=bad_verification_code&error_description=The+code+passed+is+incorrect+or+expired.",
        )
        .unwrap_err();

        let msg = err.to_string();
        assert!(msg.contains("bad_verification_code"));
        assert!(msg.contains("The code passed is incorrect or expired."));
    }

    #[test]
    fn test_parse_token_not_pairs() {
        assert!(matches!(
            parse_token_response("{\"access_token\":\"abc\"}"),
            Err(Error::TokenExchange(_))
        ));
        assert!(matches!(
            parse_token_response(""),
            Err(Error::TokenExchange(_))
        ));
    }

    #[test]
    fn test_parse_token_empty_value() {
        assert!(matches!(
            parse_token_response("access_token=&scope="),
            Err(Error::TokenExchange(_))
        ));
    }

    #[test]
    fn test_auth_state_default_is_unauthenticated() {
        let state = AuthState::default();
        assert!(!state.is_authenticated());
        assert!(state.credentials().is_none());
        assert!(state.token().is_none());
    }

    #[test]
    fn test_credentials_debug_redacts_secret() {
        let creds = Credentials::new("my-client", "very-secret");
        let debug_output = format!("{creds:?}");

        assert!(debug_output.contains("my-client"));
        assert!(!debug_output.contains("very-secret"));
    }
}
