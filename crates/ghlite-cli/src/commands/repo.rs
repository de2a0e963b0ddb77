//! `ghlite repo` command - Show a repository.

use anyhow::{Context as _, Result};
use ghlite_api::{FullName, HostApi};

use crate::commands::{Context, search, utils};
use crate::output;

/// Run the repo command.
pub fn run(ctx: &Context, repo: &FullName) -> Result<()> {
    let client = ctx.client()?;
    utils::block_on(execute(&client, ctx, repo))?
}

async fn execute(api: &impl HostApi, ctx: &Context, repo: &FullName) -> Result<()> {
    let decoded = api
        .get_repository(repo)
        .await
        .with_context(|| format!("Failed to fetch repository {repo}"))?;

    let Some(repository) = ctx.settle(decoded)? else {
        output::no_data("repository");
        return Ok(());
    };

    if ctx.json {
        return utils::print_json(&repository);
    }

    output::essential(&search::repo_line(&repository));
    output::detail(&format!("  {}", repository.html_url));
    output::detail(&format!(
        "  {} · forks {} · open issues {} · default branch {}",
        if repository.private { "private" } else { "public" },
        repository.forks_count,
        repository.open_issues_count,
        repository.default_branch.as_deref().unwrap_or("-"),
    ));
    output::detail(&format!(
        "  created {} · last push {}",
        output::date(repository.created_at.as_ref()),
        output::date(repository.pushed_at.as_ref()),
    ));
    Ok(())
}
