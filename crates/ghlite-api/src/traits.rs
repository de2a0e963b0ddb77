//! Trait abstraction for the data operations of the GitHub API.
//!
//! `HostApi` lets callers depend on the operations rather than on
//! [`GitHubClient`](crate::GitHubClient), so they can be tested against a mock.

use crate::{
    Comment, CreateIssueRequest, CreateIssueResponse, Decoded, FullName, IssuesCollection,
    Repository, Result, SearchRepositoriesResult, User,
};

/// Data operations against a GitHub-compatible host.
///
/// Every method issues exactly one HTTP request. Non-2xx statuses are
/// returned as errors; bodies that don't match the expected shape come back
/// as [`Decoded::Malformed`].
///
/// The OAuth token exchange is not part of this trait since it mutates the
/// client's authentication state.
pub trait HostApi: Send + Sync {
    /// Get the authenticated user.
    fn get_authenticated_user(
        &self,
    ) -> impl std::future::Future<Output = Result<Decoded<User>>> + Send;

    /// Search repositories with a free-text query.
    fn search_repositories(
        &self,
        query: &str,
    ) -> impl std::future::Future<Output = Result<Decoded<SearchRepositoriesResult>>> + Send;

    /// Get a repository.
    fn get_repository(
        &self,
        repo: &FullName,
    ) -> impl std::future::Future<Output = Result<Decoded<Repository>>> + Send;

    /// List all issues of a repository, open and closed.
    fn list_repository_issues(
        &self,
        repo: &FullName,
    ) -> impl std::future::Future<Output = Result<Decoded<IssuesCollection>>> + Send;

    /// List the comments on an issue.
    fn list_issue_comments(
        &self,
        repo: &FullName,
        issue_number: u64,
    ) -> impl std::future::Future<Output = Result<Decoded<Vec<Comment>>>> + Send;

    /// Create an issue.
    fn create_issue(
        &self,
        repo: &FullName,
        issue: &CreateIssueRequest,
    ) -> impl std::future::Future<Output = Result<Decoded<CreateIssueResponse>>> + Send;

    /// Comment on an issue.
    fn create_issue_comment(
        &self,
        repo: &FullName,
        issue_number: u64,
        body: &str,
    ) -> impl std::future::Future<Output = Result<Decoded<Comment>>> + Send;

    /// List OAuth grants, returned verbatim.
    fn list_grants(&self) -> impl std::future::Future<Output = Result<String>> + Send;
}
