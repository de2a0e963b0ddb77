//! `ghlite comment` command - Comment on an issue.

use anyhow::{Context as _, Result};
use ghlite_api::{FullName, HostApi};

use crate::commands::{Context, utils};
use crate::output;

/// Run the comment command.
pub fn run(ctx: &Context, repo: &FullName, number: u64, text: &str) -> Result<()> {
    let client = ctx.client()?;
    utils::block_on(execute(&client, ctx, repo, number, text))?
}

async fn execute(
    api: &impl HostApi,
    ctx: &Context,
    repo: &FullName,
    number: u64,
    text: &str,
) -> Result<()> {
    let decoded = api
        .create_issue_comment(repo, number, text)
        .await
        .with_context(|| format!("Failed to comment on {repo}#{number}"))?;

    let Some(comment) = ctx.settle(decoded)? else {
        output::no_data("comment");
        return Ok(());
    };

    if ctx.json {
        return utils::print_json(&comment);
    }

    output::success(&format!("Commented on {repo}#{number}"));
    output::essential(&comment.html_url);
    Ok(())
}
