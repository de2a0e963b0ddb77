use std::future::Future;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::output;

/// Run a future to completion on a fresh runtime.
pub fn block_on<F: Future>(future: F) -> Result<F::Output> {
    let rt = tokio::runtime::Runtime::new().context("Failed to create async runtime")?;
    Ok(rt.block_on(future))
}

/// Print a value as pretty JSON.
pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    output::essential(&serde_json::to_string_pretty(value)?);
    Ok(())
}

/// First line of a possibly multi-line text, shortened to `max` characters.
pub fn summary(text: &str, max: usize) -> String {
    let line = text.lines().next().unwrap_or_default().trim();
    if line.chars().count() <= max {
        return line.to_string();
    }
    let cut: String = line.chars().take(max.saturating_sub(1)).collect();
    format!("{cut}…")
}
