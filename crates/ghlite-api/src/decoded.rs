//! Outcome of decoding a successful response body.

use serde::de::DeserializeOwned;

use crate::error::{Error, Result};

/// A response body that was either decoded into `T` or could not be.
///
/// HTTP-level failures never reach this type; they are returned as
/// [`Error`]s. Callers that only care whether usable data arrived call
/// [`Decoded::ok`], which treats a malformed body the same as no data.
#[derive(Debug)]
#[must_use]
pub enum Decoded<T> {
    /// The body matched the expected shape.
    Value(T),
    /// The body was not valid JSON or did not match the expected shape.
    Malformed(serde_json::Error),
}

impl<T: DeserializeOwned> Decoded<T> {
    /// Decode a JSON body.
    pub fn from_json(body: &str) -> Self {
        match serde_json::from_str(body) {
            Ok(value) => Self::Value(value),
            Err(e) => Self::Malformed(e),
        }
    }
}

impl<T> Decoded<T> {
    /// The value, or `None` if the body was malformed.
    pub fn ok(self) -> Option<T> {
        match self {
            Self::Value(value) => Some(value),
            Self::Malformed(_) => None,
        }
    }

    /// The value, or [`Error::Parse`] if the body was malformed.
    ///
    /// # Errors
    /// Returns the decode error for a malformed body.
    pub fn into_result(self) -> Result<T> {
        match self {
            Self::Value(value) => Ok(value),
            Self::Malformed(e) => Err(Error::Parse(e)),
        }
    }

    /// Whether the body was decoded.
    #[must_use]
    pub const fn is_value(&self) -> bool {
        matches!(self, Self::Value(_))
    }

    /// Transform the decoded value.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Decoded<U> {
        match self {
            Self::Value(value) => Decoded::Value(f(value)),
            Self::Malformed(e) => Decoded::Malformed(e),
        }
    }
}
