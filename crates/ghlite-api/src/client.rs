//! GitHub API client.

use reqwest::header::ACCEPT;
use reqwest::{Client, Method, RequestBuilder, Response};
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, info, instrument, warn};

use crate::auth::{AuthState, Credentials, parse_token_response};
use crate::config::{ClientConfig, UnauthenticatedPolicy};
use crate::decoded::Decoded;
use crate::error::{Error, Result};
use crate::query::QueryString;
use crate::traits::HostApi;
use crate::types::{
    Comment, CreateIssueRequest, CreateIssueResponse, FullName, Issue, IssuesCollection,
    NewComment, Repository, SearchRepositoriesResult, User,
};

/// GitHub API client.
///
/// Holds one HTTP connection pool and the authentication state. Data
/// operations take `&self` and can run concurrently; the token exchange takes
/// `&mut self`.
pub struct GitHubClient {
    client: Client,
    config: ClientConfig,
    state: AuthState,
}

impl GitHubClient {
    /// Create an unauthenticated client with the default configuration.
    ///
    /// # Errors
    /// Returns error if the HTTP client cannot be built.
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create an unauthenticated client with a custom configuration.
    ///
    /// # Errors
    /// Returns error if the HTTP client cannot be built (e.g. the user agent
    /// is not a valid header value).
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .build()?;

        Ok(Self {
            client,
            config,
            state: AuthState::Unauthenticated,
        })
    }

    /// Create a client that already holds a token.
    ///
    /// # Errors
    /// Returns error if the HTTP client cannot be built.
    pub fn with_token(
        config: ClientConfig,
        credentials: Credentials,
        token: SecretString,
    ) -> Result<Self> {
        let mut client = Self::with_config(config)?;
        client.state = AuthState::Authenticated { credentials, token };
        Ok(client)
    }

    /// The client configuration.
    #[must_use]
    pub const fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Whether the token exchange has happened.
    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        self.state.is_authenticated()
    }

    /// Credentials stored by the token exchange.
    #[must_use]
    pub const fn credentials(&self) -> Option<&Credentials> {
        self.state.credentials()
    }

    /// Bearer token obtained by the token exchange.
    #[must_use]
    pub const fn token(&self) -> Option<&SecretString> {
        self.state.token()
    }

    /// Exchange a one-time OAuth code for a bearer token.
    ///
    /// On success the credentials and token are stored and used for every
    /// later request.
    ///
    /// # Errors
    /// Returns error if the client is already authenticated, the endpoint
    /// answers with a non-success status, or the body holds no token.
    #[instrument(skip_all, fields(client_id = %client_id), level = "debug")]
    pub async fn exchange_code_for_token(
        &mut self,
        client_id: &str,
        client_secret: &str,
        code: &str,
    ) -> Result<()> {
        if self.state.is_authenticated() {
            return Err(Error::AlreadyAuthenticated);
        }

        let query = QueryString::new()
            .with("client_id", client_id)
            .with("client_secret", client_secret)
            .with("code", code);
        debug!(url = %format!("{}{}", self.config.oauth_url, query.redacted()), "POST");

        let response = self
            .client
            .post(format!("{}{query}", self.config.oauth_url))
            .body("")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(error_for_status(response, &self.config.oauth_url).await);
        }

        let body = response.text().await?;
        let token = parse_token_response(&body)?;

        self.state = AuthState::Authenticated {
            credentials: Credentials::new(client_id, client_secret),
            token,
        };
        info!("OAuth token exchange succeeded");
        Ok(())
    }

    /// Build a request against the API base URL.
    ///
    /// Applies the unauthenticated policy, appends credentials to the query
    /// string and attaches the bearer token if one is held.
    fn request(
        &self,
        method: Method,
        path: &str,
        mut query: QueryString,
    ) -> Result<RequestBuilder> {
        if !self.state.is_authenticated() {
            match self.config.unauthenticated {
                UnauthenticatedPolicy::Reject => return Err(Error::NotAuthenticated),
                UnauthenticatedPolicy::Warn => {
                    warn!(path, "request sent before OAuth token exchange");
                }
            }
        }

        if self.config.inject_credentials {
            query.push_credentials(self.state.credentials());
        }

        let base = self.config.api_url.trim_end_matches('/');
        debug!(url = %format!("{base}/{path}{}", query.redacted()), "{method}");

        let mut request = self
            .client
            .request(method, format!("{base}/{path}{query}"))
            .header(ACCEPT, self.config.accept.as_str());
        if let Some(token) = self.state.token() {
            request = request.bearer_auth(token.expose_secret());
        }

        Ok(request)
    }

    /// Send a request and return the body of a successful response.
    async fn send(request: RequestBuilder, path: &str) -> Result<String> {
        let response = request.send().await?;
        let status = response.status();
        debug!(%status, path, "response");

        if !status.is_success() {
            return Err(error_for_status(response, path).await);
        }

        Ok(response.text().await?)
    }

    /// Make a GET request.
    async fn get<T: DeserializeOwned>(&self, path: &str, query: QueryString) -> Result<Decoded<T>> {
        let request = self.request(Method::GET, path, query)?;
        let body = Self::send(request, path).await?;
        Ok(decode(path, &body))
    }

    /// Make a POST request with a JSON body.
    async fn post<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<Decoded<T>> {
        let request = self
            .request(Method::POST, path, QueryString::new())?
            .json(body);
        let body = Self::send(request, path).await?;
        Ok(decode(path, &body))
    }

    // === Users ===

    /// Get the authenticated user.
    ///
    /// # Errors
    /// Returns error on transport failure or a non-success status.
    #[instrument(skip(self), level = "debug")]
    pub async fn get_authenticated_user(&self) -> Result<Decoded<User>> {
        self.get("user", QueryString::new()).await
    }

    // === Repositories ===

    /// Search repositories.
    ///
    /// # Errors
    /// Returns error on transport failure or a non-success status.
    #[instrument(skip(self), level = "debug")]
    pub async fn search_repositories(
        &self,
        query: &str,
    ) -> Result<Decoded<SearchRepositoriesResult>> {
        self.get("search/repositories", QueryString::new().with("q", query))
            .await
    }

    /// Get a repository by its full name.
    ///
    /// # Errors
    /// Returns error on transport failure or a non-success status.
    #[instrument(skip(self, repo), fields(repo = %repo), level = "debug")]
    pub async fn get_repository(&self, repo: &FullName) -> Result<Decoded<Repository>> {
        self.get(&format!("repos/{repo}"), QueryString::new()).await
    }

    // === Issues ===

    /// List every issue of a repository regardless of state.
    ///
    /// # Errors
    /// Returns error on transport failure or a non-success status.
    #[instrument(skip(self, repo), fields(repo = %repo), level = "debug")]
    pub async fn list_repository_issues(
        &self,
        repo: &FullName,
    ) -> Result<Decoded<IssuesCollection>> {
        let issues: Decoded<Vec<Issue>> = self
            .get(
                &format!("repos/{repo}/issues"),
                QueryString::new().with("state", "all"),
            )
            .await?;

        Ok(issues.map(|issues| IssuesCollection { issues }))
    }

    /// Create an issue.
    ///
    /// # Errors
    /// Returns error on transport failure or a non-success status.
    #[instrument(
        skip(self, repo, issue),
        fields(repo = %repo, title = %issue.title),
        level = "debug"
    )]
    pub async fn create_issue(
        &self,
        repo: &FullName,
        issue: &CreateIssueRequest,
    ) -> Result<Decoded<CreateIssueResponse>> {
        self.post(&format!("repos/{repo}/issues"), issue).await
    }

    // === Comments ===

    /// List the comments on an issue.
    ///
    /// # Errors
    /// Returns error on transport failure or a non-success status.
    #[instrument(skip(self, repo), fields(repo = %repo), level = "debug")]
    pub async fn list_issue_comments(
        &self,
        repo: &FullName,
        issue_number: u64,
    ) -> Result<Decoded<Vec<Comment>>> {
        self.get(
            &format!("repos/{repo}/issues/{issue_number}/comments"),
            QueryString::new(),
        )
        .await
    }

    /// Comment on an issue.
    ///
    /// # Errors
    /// Returns error on transport failure or a non-success status.
    #[instrument(skip(self, repo, body), fields(repo = %repo), level = "debug")]
    pub async fn create_issue_comment(
        &self,
        repo: &FullName,
        issue_number: u64,
        body: &str,
    ) -> Result<Decoded<Comment>> {
        let comment = NewComment {
            body: body.to_string(),
        };
        self.post(
            &format!("repos/{repo}/issues/{issue_number}/comments"),
            &comment,
        )
        .await
    }

    // === Grants ===

    /// List the OAuth grants of the authenticated user, unparsed.
    ///
    /// # Errors
    /// Returns error on transport failure or a non-success status.
    #[instrument(skip(self), level = "debug")]
    pub async fn list_grants(&self) -> Result<String> {
        let path = "applications/grants";
        let request = self.request(Method::GET, path, QueryString::new())?;
        Self::send(request, path).await
    }
}

impl std::fmt::Debug for GitHubClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GitHubClient")
            .field("api_url", &self.config.api_url)
            .field("authenticated", &self.state.is_authenticated())
            .field("token", &"[redacted]")
            .finish_non_exhaustive()
    }
}

/// Map a non-success response to an error.
async fn error_for_status(response: Response, path: &str) -> Error {
    let status_code = response.status().as_u16();

    match status_code {
        401 => Error::AuthenticationFailed,
        404 => Error::NotFound(path.to_string()),
        _ => {
            let text = response.text().await.unwrap_or_default();
            Error::ApiError {
                status: status_code,
                message: text,
            }
        }
    }
}

/// Decode a success body, logging bodies that don't match the expected shape.
fn decode<T: DeserializeOwned>(path: &str, body: &str) -> Decoded<T> {
    let decoded = Decoded::from_json(body);
    if let Decoded::Malformed(e) = &decoded {
        warn!(path, error = %e, "unexpected response body");
    }
    decoded
}

// === Trait Implementation ===

impl HostApi for GitHubClient {
    async fn get_authenticated_user(&self) -> Result<Decoded<User>> {
        self.get_authenticated_user().await
    }

    async fn search_repositories(&self, query: &str) -> Result<Decoded<SearchRepositoriesResult>> {
        self.search_repositories(query).await
    }

    async fn get_repository(&self, repo: &FullName) -> Result<Decoded<Repository>> {
        self.get_repository(repo).await
    }

    async fn list_repository_issues(&self, repo: &FullName) -> Result<Decoded<IssuesCollection>> {
        self.list_repository_issues(repo).await
    }

    async fn list_issue_comments(
        &self,
        repo: &FullName,
        issue_number: u64,
    ) -> Result<Decoded<Vec<Comment>>> {
        self.list_issue_comments(repo, issue_number).await
    }

    async fn create_issue(
        &self,
        repo: &FullName,
        issue: &CreateIssueRequest,
    ) -> Result<Decoded<CreateIssueResponse>> {
        self.create_issue(repo, issue).await
    }

    async fn create_issue_comment(
        &self,
        repo: &FullName,
        issue_number: u64,
        body: &str,
    ) -> Result<Decoded<Comment>> {
        self.create_issue_comment(repo, issue_number, body).await
    }

    async fn list_grants(&self) -> Result<String> {
        self.list_grants().await
    }
}
