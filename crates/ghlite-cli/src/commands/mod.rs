//! CLI definition and shared command context.

use std::path::PathBuf;

use anyhow::{Context as _, Result};
use clap::{ArgAction, Parser, Subcommand};
use clap_complete::Shell;
use ghlite_api::{ClientConfig, Credentials, Decoded, FullName, GitHubClient, SecretString};

pub mod comment;
pub mod comments;
pub mod completions;
pub mod create_issue;
pub mod grants;
pub mod issues;
pub mod login;
pub mod repo;
pub mod search;
pub mod user;
pub mod utils;

#[cfg(test)]
pub mod test_mocks;

/// ghlite - a minimal GitHub client for OAuth login, repositories, issues and comments.
#[derive(Debug, Parser)]
#[command(name = "ghlite", version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Client config file (TOML).
    #[arg(long, global = true, env = "GHLITE_CONFIG")]
    pub config: Option<PathBuf>,

    /// OAuth application client id.
    #[arg(long, global = true, env = "GHLITE_CLIENT_ID", default_value = "")]
    pub client_id: String,

    /// OAuth application client secret.
    #[arg(
        long,
        global = true,
        env = "GHLITE_CLIENT_SECRET",
        hide_env_values = true,
        default_value = ""
    )]
    pub client_secret: String,

    /// Bearer token from a previous `ghlite login`.
    #[arg(long, global = true, env = "GHLITE_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Print results as JSON.
    #[arg(long, global = true)]
    pub json: bool,

    /// Fail on response bodies that don't match the expected shape instead of
    /// reporting no data.
    #[arg(long, global = true)]
    pub strict: bool,

    /// Increase log verbosity (-v, -vv, -vvv).
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Suppress informational output.
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Exchange a one-time OAuth code for a token.
    Login {
        /// Code from the OAuth authorization redirect.
        code: String,
    },

    /// Show the authenticated user.
    User,

    /// Search repositories.
    Search {
        /// Search query, e.g. "tetris language:rust".
        query: String,
    },

    /// Show a repository.
    Repo {
        /// Repository as owner/name.
        repo: FullName,
    },

    /// List all issues of a repository, open and closed.
    Issues {
        /// Repository as owner/name.
        repo: FullName,
    },

    /// List the comments on an issue.
    Comments {
        /// Repository as owner/name.
        repo: FullName,
        /// Issue number.
        number: u64,
    },

    /// Open a new issue.
    CreateIssue {
        /// Repository as owner/name.
        repo: FullName,

        /// Issue title.
        #[arg(long)]
        title: String,

        /// Issue body.
        #[arg(long, default_value = "")]
        body: String,

        /// Login to assign.
        #[arg(long)]
        assignee: Option<String>,

        /// Milestone number.
        #[arg(long)]
        milestone: Option<u64>,

        /// Label to apply (repeatable).
        #[arg(long = "label")]
        labels: Vec<String>,
    },

    /// Comment on an issue.
    Comment {
        /// Repository as owner/name.
        repo: FullName,
        /// Issue number.
        number: u64,
        /// Comment text.
        text: String,
    },

    /// List OAuth grants (raw response).
    Grants,

    /// Generate shell completions.
    Completions {
        /// Shell to generate completions for.
        shell: Shell,
    },
}

/// Settings shared by every command.
pub struct Context {
    pub config: ClientConfig,
    pub client_id: String,
    pub client_secret: String,
    pub token: Option<String>,
    pub json: bool,
    pub strict: bool,
}

impl Context {
    /// Build the context from parsed arguments, loading the config file.
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let config = match &cli.config {
            Some(path) => ClientConfig::load(path)
                .with_context(|| format!("Failed to load config from {}", path.display()))?,
            None => ClientConfig::default(),
        };

        Ok(Self {
            config,
            client_id: cli.client_id.clone(),
            client_secret: cli.client_secret.clone(),
            token: cli.token.clone(),
            json: cli.json,
            strict: cli.strict,
        })
    }

    /// Create a client, authenticated if a token was given.
    pub fn client(&self) -> Result<GitHubClient> {
        let client = match &self.token {
            Some(token) => GitHubClient::with_token(
                self.config.clone(),
                Credentials::new(&self.client_id, &self.client_secret),
                SecretString::from(token.clone()),
            ),
            None => GitHubClient::with_config(self.config.clone()),
        };
        client.context("Failed to create GitHub client")
    }

    /// Apply the decode policy: `None` for a malformed body, or an error in
    /// strict mode.
    pub fn settle<T>(&self, decoded: Decoded<T>) -> Result<Option<T>> {
        if self.strict {
            let value = decoded
                .into_result()
                .context("Response did not match the expected shape")?;
            Ok(Some(value))
        } else {
            Ok(decoded.ok())
        }
    }
}

#[cfg(test)]
impl Context {
    /// Context with default config, for command tests.
    pub fn for_tests(strict: bool) -> Self {
        Self {
            config: ClientConfig::default(),
            client_id: "test-id".into(),
            client_secret: "test-secret".into(),
            token: Some("test-token".into()),
            json: false,
            strict,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_create_issue() {
        let cli = Cli::try_parse_from([
            "ghlite",
            "create-issue",
            "octocat/Hello-World",
            "--title",
            "Bug",
            "--label",
            "bug",
            "--label",
            "p1",
            "--milestone",
            "2",
        ])
        .unwrap();

        match cli.command {
            Commands::CreateIssue {
                repo,
                title,
                body,
                labels,
                milestone,
                assignee,
            } => {
                assert_eq!(repo.to_string(), "octocat/Hello-World");
                assert_eq!(title, "Bug");
                assert!(body.is_empty());
                assert_eq!(labels, vec!["bug", "p1"]);
                assert_eq!(milestone, Some(2));
                assert!(assignee.is_none());
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_rejects_bad_repo() {
        let result = Cli::try_parse_from(["ghlite", "repo", "not-a-repo"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_settle_lenient_and_strict() {
        let lenient = Context::for_tests(false);
        let strict = Context::for_tests(true);

        let value = lenient
            .settle(Decoded::<u32>::from_json("7"))
            .unwrap();
        assert_eq!(value, Some(7));

        let absent = lenient
            .settle(Decoded::<u32>::from_json("\"seven\""))
            .unwrap();
        assert_eq!(absent, None);

        assert!(strict.settle(Decoded::<u32>::from_json("\"seven\"")).is_err());
    }

    #[test]
    fn test_client_is_authenticated_with_token() {
        let ctx = Context::for_tests(false);
        assert!(ctx.client().unwrap().is_authenticated());

        let ctx = Context {
            token: None,
            ..Context::for_tests(false)
        };
        assert!(!ctx.client().unwrap().is_authenticated());
    }
}
