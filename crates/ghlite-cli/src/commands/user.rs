//! `ghlite user` command - Show the authenticated user.

use anyhow::{Context as _, Result};
use ghlite_api::{HostApi, User};

use crate::commands::{Context, utils};
use crate::output;

/// Run the user command.
pub fn run(ctx: &Context) -> Result<()> {
    let client = ctx.client()?;
    utils::block_on(execute(&client, ctx))?
}

async fn execute(api: &impl HostApi, ctx: &Context) -> Result<()> {
    let decoded = api
        .get_authenticated_user()
        .await
        .context("Failed to fetch the authenticated user")?;

    let Some(user) = ctx.settle(decoded)? else {
        output::no_data("user");
        return Ok(());
    };

    if ctx.json {
        return utils::print_json(&user);
    }

    output::essential(&headline(&user));
    if let Some(url) = &user.html_url {
        output::detail(&format!("  {url}"));
    }
    for (label, value) in [
        ("email", &user.email),
        ("company", &user.company),
        ("location", &user.location),
    ] {
        if let Some(value) = value {
            output::detail(&format!("  {label}: {value}"));
        }
    }
    if let Some(repos) = user.public_repos {
        output::detail(&format!("  public repos: {repos}"));
    }
    Ok(())
}

/// `login (Name)` or just `login`.
fn headline(user: &User) -> String {
    match &user.name {
        Some(name) if !name.is_empty() => format!("{} ({name})", user.login),
        _ => user.login.clone(),
    }
}
