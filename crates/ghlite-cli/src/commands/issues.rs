//! `ghlite issues` command - List all issues of a repository.

use anyhow::{Context as _, Result};
use ghlite_api::{FullName, HostApi, Issue};

use crate::commands::{Context, utils};
use crate::output;

/// Run the issues command.
pub fn run(ctx: &Context, repo: &FullName) -> Result<()> {
    let client = ctx.client()?;
    utils::block_on(execute(&client, ctx, repo))?
}

async fn execute(api: &impl HostApi, ctx: &Context, repo: &FullName) -> Result<()> {
    let decoded = api
        .list_repository_issues(repo)
        .await
        .with_context(|| format!("Failed to list issues of {repo}"))?;

    let Some(collection) = ctx.settle(decoded)? else {
        output::no_data("issues");
        return Ok(());
    };

    if ctx.json {
        return utils::print_json(&collection.issues);
    }

    if collection.issues.is_empty() {
        output::info(&format!("{repo} has no issues"));
        return Ok(());
    }

    for issue in &collection.issues {
        output::essential(&issue_line(issue));
    }
    Ok(())
}

fn issue_line(issue: &Issue) -> String {
    let mut line = format!(
        "{} {} {}",
        output::issue_ref(issue.number, issue.state),
        output::date(issue.created_at.as_ref()),
        utils::summary(&issue.title, 72)
    );
    if !issue.labels.is_empty() {
        let labels: Vec<&str> = issue.labels.iter().map(|l| l.name.as_str()).collect();
        line.push_str(&format!(" [{}]", labels.join(", ")));
    }
    if issue.comments > 0 {
        line.push_str(&format!(" ({} comments)", issue.comments));
    }
    line
}
