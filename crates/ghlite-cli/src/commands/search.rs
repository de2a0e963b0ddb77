//! `ghlite search` command - Search repositories.

use anyhow::{Context as _, Result};
use colored::Colorize;
use ghlite_api::{HostApi, Repository};

use crate::commands::{Context, utils};
use crate::output;

/// Run the search command.
pub fn run(ctx: &Context, query: &str) -> Result<()> {
    let client = ctx.client()?;
    utils::block_on(execute(&client, ctx, query))?
}

async fn execute(api: &impl HostApi, ctx: &Context, query: &str) -> Result<()> {
    let decoded = api
        .search_repositories(query)
        .await
        .with_context(|| format!("Failed to search repositories for '{query}'"))?;

    let Some(result) = ctx.settle(decoded)? else {
        output::no_data("search results");
        return Ok(());
    };

    if ctx.json {
        return utils::print_json(&result);
    }

    output::info(&format!(
        "{} repositories match '{query}'{}",
        result.total_count,
        if result.incomplete_results {
            " (incomplete)"
        } else {
            ""
        }
    ));
    for repo in &result.items {
        output::essential(&repo_line(repo));
    }
    Ok(())
}

/// One line per repository: name, stars, language, description.
pub fn repo_line(repo: &Repository) -> String {
    let mut line = format!("{} ★{}", repo.full_name.bold(), repo.stargazers_count);
    if let Some(language) = &repo.language {
        line.push_str(&format!(" [{language}]"));
    }
    if let Some(description) = repo.description.as_deref().filter(|d| !d.is_empty()) {
        line.push_str(&format!(" - {}", utils::summary(description, 60)));
    }
    line
}
