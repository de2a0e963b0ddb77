//! # ghlite-api
//!
//! A small GitHub REST client: OAuth code exchange, the authenticated user,
//! repository search and lookup, issues, and issue comments.
//!
//! Every operation issues one HTTP request. Non-success statuses are errors;
//! response bodies that can't be decoded come back as [`Decoded::Malformed`],
//! which [`Decoded::ok`] turns into `None`.
//!
//! # Security
//!
//! The client secret and bearer token are stored as `SecretString`, which
//! zeroizes memory on drop and keeps them out of `Debug` output. By default the
//! client id and secret are also appended to every query string; disable this
//! with [`ClientConfig::inject_credentials`].

mod auth;
mod client;
pub mod config;
mod decoded;
mod error;
mod query;
mod traits;
mod types;

pub use auth::{AuthState, Credentials};
pub use client::GitHubClient;
pub use config::{ClientConfig, UnauthenticatedPolicy};
pub use decoded::Decoded;
pub use error::{Error, Result};
pub use query::QueryString;
// Re-export SecretString for constructing credentials and tokens
pub use secrecy::{ExposeSecret, SecretString};
pub use traits::HostApi;
pub use types::{
    Comment, CreateIssueRequest, CreateIssueResponse, FullName, Issue, IssueState,
    IssuesCollection, Label, Milestone, NewComment, Repository, SearchRepositoriesResult, User,
};
