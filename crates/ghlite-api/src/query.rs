//! Query-string construction.
//!
//! Pairs are rendered in insertion order as `?key=value&key=value&`. The
//! trailing `&` is kept; GitHub ignores it.

use std::fmt;

use secrecy::ExposeSecret;
use url::form_urlencoded;

use crate::auth::Credentials;

/// Keys whose values are masked by [`QueryString::redacted`].
const SECRET_KEYS: &[&str] = &["client_secret", "code"];

/// An ordered list of query parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryString {
    pairs: Vec<(String, String)>,
}

impl QueryString {
    /// Create an empty query string.
    #[must_use]
    pub const fn new() -> Self {
        Self { pairs: Vec::new() }
    }

    /// Append a pair, builder style.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.push(key, value);
        self
    }

    /// Append a pair.
    pub fn push(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.pairs.push((key.into(), value.into()));
    }

    /// Append `client_id` and `client_secret`.
    ///
    /// Without credentials both values are blank, which is what an
    /// unauthenticated client sends.
    pub fn push_credentials(&mut self, credentials: Option<&Credentials>) {
        let (id, secret) = credentials.map_or_else(
            || (String::new(), String::new()),
            |c| {
                (
                    c.client_id.clone(),
                    c.client_secret.expose_secret().to_owned(),
                )
            },
        );
        self.push("client_id", id);
        self.push("client_secret", secret);
    }

    /// Whether no pairs have been added.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Render with secret values replaced by `***`, for logging.
    #[must_use]
    pub fn redacted(&self) -> String {
        self.render(|key, value| {
            if SECRET_KEYS.contains(&key) && !value.is_empty() {
                "***".into()
            } else {
                encode(value)
            }
        })
    }

    fn render(&self, value_fmt: impl Fn(&str, &str) -> String) -> String {
        if self.pairs.is_empty() {
            return String::new();
        }

        let mut out = String::from("?");
        for (key, value) in &self.pairs {
            out.push_str(&encode(key));
            out.push('=');
            out.push_str(&value_fmt(key, value));
            out.push('&');
        }
        out
    }
}

impl fmt::Display for QueryString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(|_, value| encode(value)))
    }
}

fn encode(s: &str) -> String {
    form_urlencoded::byte_serialize(s.as_bytes()).collect()
}
