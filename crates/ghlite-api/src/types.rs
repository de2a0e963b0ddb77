//! GitHub API types.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::Error;

/// A repository identifier of the form `owner/name`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FullName {
    owner: String,
    name: String,
}

impl FullName {
    /// Create from separate owner and repository name.
    ///
    /// # Errors
    /// Returns error if either half is empty or contains `/`.
    pub fn new(owner: impl Into<String>, name: impl Into<String>) -> Result<Self, Error> {
        let owner = owner.into();
        let name = name.into();
        if owner.is_empty() || name.is_empty() || owner.contains('/') || name.contains('/') {
            return Err(Error::InvalidFullName(format!("{owner}/{name}")));
        }
        Ok(Self { owner, name })
    }

    /// Repository owner (user or organization).
    #[must_use]
    pub fn owner(&self) -> &str {
        &self.owner
    }

    /// Repository name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl FromStr for FullName {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (owner, name) = s
            .split_once('/')
            .ok_or_else(|| Error::InvalidFullName(s.to_string()))?;
        Self::new(owner, name).map_err(|_| Error::InvalidFullName(s.to_string()))
    }
}

impl fmt::Display for FullName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

/// A GitHub account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Login name.
    pub login: String,

    /// Numeric account id.
    pub id: u64,

    pub node_id: Option<String>,

    pub avatar_url: Option<String>,

    /// Profile URL.
    pub html_url: Option<String>,

    /// `User`, `Organization` or `Bot`.
    #[serde(rename = "type", default)]
    pub account_type: Option<String>,

    #[serde(default)]
    pub site_admin: bool,

    /// Display name.
    pub name: Option<String>,

    pub company: Option<String>,

    pub blog: Option<String>,

    pub location: Option<String>,

    /// Public email, if the user exposes one.
    pub email: Option<String>,

    pub bio: Option<String>,

    pub public_repos: Option<u64>,

    pub followers: Option<u64>,

    pub following: Option<u64>,

    pub created_at: Option<DateTime<Utc>>,
}

/// A GitHub repository.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Repository {
    pub id: u64,

    /// Short name.
    pub name: String,

    /// `owner/name`.
    pub full_name: String,

    pub owner: User,

    pub private: bool,

    pub html_url: String,

    pub description: Option<String>,

    #[serde(default)]
    pub fork: bool,

    /// Primary language as detected by GitHub.
    pub language: Option<String>,

    #[serde(default)]
    pub stargazers_count: u64,

    #[serde(default)]
    pub watchers_count: u64,

    #[serde(default)]
    pub forks_count: u64,

    #[serde(default)]
    pub open_issues_count: u64,

    pub default_branch: Option<String>,

    pub created_at: Option<DateTime<Utc>>,

    pub updated_at: Option<DateTime<Utc>>,

    pub pushed_at: Option<DateTime<Utc>>,
}

/// Result of a repository search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchRepositoriesResult {
    /// Total number of matches on the server, not just this page.
    pub total_count: u64,

    /// Whether the search timed out before finishing.
    #[serde(default)]
    pub incomplete_results: bool,

    /// Matching repositories.
    pub items: Vec<Repository>,
}

/// State of an issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueState {
    /// Issue is open.
    Open,
    /// Issue is closed.
    Closed,
}

impl fmt::Display for IssueState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Open => f.write_str("open"),
            Self::Closed => f.write_str("closed"),
        }
    }
}

/// A label attached to an issue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Label {
    pub id: u64,
    pub name: String,
    /// Hex color without `#`.
    pub color: Option<String>,
    pub description: Option<String>,
}

/// A milestone an issue belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Milestone {
    pub id: u64,
    pub number: u64,
    pub title: String,
    pub state: Option<String>,
    pub description: Option<String>,
}

/// A GitHub issue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    pub id: u64,

    /// Issue number within the repository.
    pub number: u64,

    pub title: String,

    pub state: IssueState,

    /// Author.
    pub user: User,

    pub html_url: String,

    pub body: Option<String>,

    #[serde(default)]
    pub labels: Vec<Label>,

    pub assignee: Option<User>,

    #[serde(default)]
    pub assignees: Vec<User>,

    pub milestone: Option<Milestone>,

    /// Number of comments.
    #[serde(default)]
    pub comments: u64,

    pub created_at: Option<DateTime<Utc>>,

    pub updated_at: Option<DateTime<Utc>>,

    pub closed_at: Option<DateTime<Utc>>,
}

/// The issues of a repository, open and closed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssuesCollection {
    pub issues: Vec<Issue>,
}

/// A comment on an issue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub id: u64,
    /// API URL of the comment.
    pub url: String,
    pub html_url: String,
    pub body: String,
    /// Author.
    pub user: User,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Request body for creating a comment.
#[derive(Debug, Clone, Serialize)]
pub struct NewComment {
    /// Comment text.
    pub body: String,
}

/// Request to create an issue.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateIssueRequest {
    /// Issue title.
    pub title: String,

    /// Issue body.
    pub body: String,

    /// Login to assign the issue to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignee: Option<String>,

    /// Milestone number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub milestone: Option<u64>,

    /// Label names.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub labels: Vec<String>,
}

/// The issue GitHub created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateIssueResponse {
    pub id: u64,
    pub number: u64,
    pub title: String,
    pub state: IssueState,
    /// API URL of the issue.
    pub url: String,
    pub html_url: String,
    pub created_at: Option<DateTime<Utc>>,
}
