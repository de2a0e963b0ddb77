//! `ghlite create-issue` command - Open a new issue.

use anyhow::{Context as _, Result};
use ghlite_api::{CreateIssueRequest, FullName, HostApi};

use crate::commands::{Context, utils};
use crate::output;

/// Run the create-issue command.
pub fn run(ctx: &Context, repo: &FullName, issue: &CreateIssueRequest) -> Result<()> {
    let client = ctx.client()?;
    utils::block_on(execute(&client, ctx, repo, issue))?
}

async fn execute(
    api: &impl HostApi,
    ctx: &Context,
    repo: &FullName,
    issue: &CreateIssueRequest,
) -> Result<()> {
    let decoded = api
        .create_issue(repo, issue)
        .await
        .with_context(|| format!("Failed to create issue in {repo}"))?;

    let Some(created) = ctx.settle(decoded)? else {
        output::no_data("created issue");
        return Ok(());
    };

    if ctx.json {
        return utils::print_json(&created);
    }

    output::success(&format!("Created issue #{}: {}", created.number, created.title));
    output::essential(&created.html_url);
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::commands::test_mocks::MockHostApi;

    const CREATED: &str = r#"{
        "id": 1, "number": 1348, "title": "Found a bug", "state": "open",
        "url": "https://api.github.com/repos/octocat/Hello-World/issues/1348",
        "html_url": "https://github.com/octocat/Hello-World/issues/1348"
    }"#;

    fn request() -> CreateIssueRequest {
        CreateIssueRequest {
            title: "Found a bug".into(),
            body: "It crashes".into(),
            ..CreateIssueRequest::default()
        }
    }

    #[test]
    fn test_create_issue_success() {
        let api = MockHostApi::new().with_body("create_issue", CREATED);
        let ctx = Context::for_tests(true);
        let repo: FullName = "octocat/Hello-World".parse().unwrap();

        utils::block_on(execute(&api, &ctx, &repo, &request()))
            .unwrap()
            .unwrap();
        assert_eq!(
            *api.calls.lock().unwrap(),
            vec!["create_issue octocat/Hello-World Found a bug"]
        );
    }

    #[test]
    fn test_create_issue_validation_error() {
        let api = MockHostApi::new().with_status("create_issue", 422);
        let ctx = Context::for_tests(false);
        let repo: FullName = "octocat/Hello-World".parse().unwrap();

        let err = utils::block_on(execute(&api, &ctx, &repo, &request()))
            .unwrap()
            .unwrap_err();
        assert!(format!("{err:#}").contains("422"));
    }
}
