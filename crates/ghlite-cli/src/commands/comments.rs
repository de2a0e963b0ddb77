//! `ghlite comments` command - List the comments on an issue.

use anyhow::{Context as _, Result};
use colored::Colorize;
use ghlite_api::{Comment, FullName, HostApi};

use crate::commands::{Context, utils};
use crate::output;

/// Run the comments command.
pub fn run(ctx: &Context, repo: &FullName, number: u64) -> Result<()> {
    let client = ctx.client()?;
    utils::block_on(execute(&client, ctx, repo, number))?
}

async fn execute(api: &impl HostApi, ctx: &Context, repo: &FullName, number: u64) -> Result<()> {
    let decoded = api
        .list_issue_comments(repo, number)
        .await
        .with_context(|| format!("Failed to list comments on {repo}#{number}"))?;

    let Some(comments) = ctx.settle(decoded)? else {
        output::no_data("comments");
        return Ok(());
    };

    if ctx.json {
        return utils::print_json(&comments);
    }

    if comments.is_empty() {
        output::info(&format!("No comments on {repo}#{number}"));
        return Ok(());
    }

    for (i, comment) in comments.iter().enumerate() {
        if i > 0 {
            output::hr();
        }
        output::essential(&header(comment));
        output::essential(&comment.body);
    }
    Ok(())
}

fn header(comment: &Comment) -> String {
    format!(
        "{} on {}",
        comment.user.login.bold(),
        output::date(Some(&comment.created_at))
    )
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serial_test::serial;
    use crate::commands::test_mocks::{MockHostApi, comment_json};

    #[test]
    #[serial]
    fn test_header() {
        colored::control::set_override(false);
        let comment: Comment = serde_json::from_str(&comment_json(1, "Me too")).unwrap();
        assert_eq!(header(&comment), "octocat on 2011-04-14");
    }

    #[test]
    fn test_comments_records_issue_number() {
        let body = format!("[{}, {}]", comment_json(1, "first"), comment_json(2, "second"));
        let api = MockHostApi::new().with_body("comments", body);
        let ctx = Context::for_tests(true);
        let repo: FullName = "octocat/Hello-World".parse().unwrap();

        utils::block_on(execute(&api, &ctx, &repo, 1347)).unwrap().unwrap();
        assert_eq!(*api.calls.lock().unwrap(), vec!["comments octocat/Hello-World#1347"]);
    }

    #[test]
    fn test_comments_not_found() {
        let api = MockHostApi::new().with_status("comments", 404);
        let ctx = Context::for_tests(false);
        let repo: FullName = "octocat/Hello-World".parse().unwrap();

        let err = utils::block_on(execute(&api, &ctx, &repo, 9)).unwrap().unwrap_err();
        assert!(format!("{err:#}").contains("not found"));
    }
}
