//! `ghlite grants` command - Print the raw OAuth grants response.

use anyhow::{Context as _, Result};
use ghlite_api::HostApi;

use crate::commands::{Context, utils};
use crate::output;

/// Run the grants command.
pub fn run(ctx: &Context) -> Result<()> {
    let client = ctx.client()?;
    utils::block_on(execute(&client))?
}

async fn execute(api: &impl HostApi) -> Result<()> {
    let body = api
        .list_grants()
        .await
        .context("Failed to list OAuth grants")?;

    if body.is_empty() {
        output::no_data("grants");
    } else {
        output::essential(&body);
    }
    Ok(())
}
