//! Mock implementation of `HostApi` for testing commands.
//!
//! Each operation answers with a canned JSON body (decoded the same way the
//! real client decodes) or a canned error status.

use std::collections::HashMap;
use std::sync::Mutex;

use ghlite_api::{
    Comment, CreateIssueRequest, CreateIssueResponse, Decoded, Error, FullName, HostApi,
    Issue, IssuesCollection, Repository, Result, SearchRepositoriesResult, User,
};

/// Mock implementation of `HostApi`.
#[derive(Default)]
pub struct MockHostApi {
    /// Response body per operation name.
    bodies: HashMap<&'static str, String>,
    /// Error status per operation name.
    statuses: HashMap<&'static str, u16>,
    /// Operation calls, with their main argument.
    pub calls: Mutex<Vec<String>>,
}

impl MockHostApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer `op` with `body`.
    pub fn with_body(mut self, op: &'static str, body: impl Into<String>) -> Self {
        self.bodies.insert(op, body.into());
        self
    }

    /// Answer `op` with an HTTP error.
    pub fn with_status(mut self, op: &'static str, status: u16) -> Self {
        self.statuses.insert(op, status);
        self
    }

    fn record(&self, call: String) {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(call);
        }
    }

    fn respond(&self, op: &'static str) -> Result<String> {
        if let Some(&status) = self.statuses.get(op) {
            return Err(match status {
                401 => Error::AuthenticationFailed,
                404 => Error::NotFound(op.to_string()),
                _ => Error::ApiError {
                    status,
                    message: String::new(),
                },
            });
        }
        Ok(self.bodies.get(op).cloned().unwrap_or_default())
    }

    fn decoded<T: serde::de::DeserializeOwned>(&self, op: &'static str) -> Result<Decoded<T>> {
        self.respond(op).map(|body| Decoded::from_json(&body))
    }
}

impl HostApi for MockHostApi {
    async fn get_authenticated_user(&self) -> Result<Decoded<User>> {
        self.record("user".into());
        self.decoded("user")
    }

    async fn search_repositories(&self, query: &str) -> Result<Decoded<SearchRepositoriesResult>> {
        self.record(format!("search {query}"));
        self.decoded("search")
    }

    async fn get_repository(&self, repo: &FullName) -> Result<Decoded<Repository>> {
        self.record(format!("repo {repo}"));
        self.decoded("repo")
    }

    async fn list_repository_issues(&self, repo: &FullName) -> Result<Decoded<IssuesCollection>> {
        self.record(format!("issues {repo}"));
        let issues: Decoded<Vec<Issue>> = self.decoded("issues")?;
        Ok(issues.map(|issues| IssuesCollection { issues }))
    }

    async fn list_issue_comments(
        &self,
        repo: &FullName,
        issue_number: u64,
    ) -> Result<Decoded<Vec<Comment>>> {
        self.record(format!("comments {repo}#{issue_number}"));
        self.decoded("comments")
    }

    async fn create_issue(
        &self,
        repo: &FullName,
        issue: &CreateIssueRequest,
    ) -> Result<Decoded<CreateIssueResponse>> {
        self.record(format!("create_issue {repo} {}", issue.title));
        self.decoded("create_issue")
    }

    async fn create_issue_comment(
        &self,
        repo: &FullName,
        issue_number: u64,
        body: &str,
    ) -> Result<Decoded<Comment>> {
        self.record(format!("comment {repo}#{issue_number} {body}"));
        self.decoded("comment")
    }

    async fn list_grants(&self) -> Result<String> {
        self.record("grants".into());
        self.respond("grants")
    }
}

/// JSON for a minimal user.
pub fn user_json(login: &str) -> String {
    format!(r#"{{"login": "{login}", "id": 1, "name": "The Octocat"}}"#)
}

/// JSON for a minimal issue.
pub fn issue_json(number: u64, state: &str) -> String {
    format!(
        r#"{{"id": {number}, "number": {number}, "title": "Issue {number}", "state": "{state}",
            "user": {user}, "html_url": "https://github.com/octocat/Hello-World/issues/{number}",
            "created_at": "2011-04-22T13:33:48Z"}}"#,
        user = user_json("octocat")
    )
}

/// JSON for a minimal comment.
pub fn comment_json(id: u64, body: &str) -> String {
    format!(
        r#"{{"id": {id}, "url": "https://api.github.com/repos/octocat/Hello-World/issues/comments/{id}",
            "html_url": "https://github.com/octocat/Hello-World/issues/1#issuecomment-{id}",
            "body": "{body}", "user": {user},
            "created_at": "2011-04-14T16:00:49Z", "updated_at": "2011-04-14T16:00:49Z"}}"#,
        user = user_json("octocat")
    )
}
