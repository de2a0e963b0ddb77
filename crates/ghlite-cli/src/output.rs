//! Terminal output formatting utilities.

use std::sync::atomic::{AtomicBool, Ordering};

use chrono::{DateTime, Utc};
use colored::Colorize;
use ghlite_api::IssueState;

static QUIET_MODE: AtomicBool = AtomicBool::new(false);

/// Set quiet mode globally. Call once at startup.
pub fn set_quiet(quiet: bool) {
    QUIET_MODE.store(quiet, Ordering::Relaxed);
}

fn is_quiet() -> bool {
    QUIET_MODE.load(Ordering::Relaxed)
}

/// Print a success message (suppressed in quiet mode).
pub fn success(msg: &str) {
    if !is_quiet() {
        println!("{} {}", "✓".green(), msg);
    }
}

/// Print an error message (always prints to stderr).
pub fn error(msg: &str) {
    eprintln!("{} {}", "✗".red(), msg);
}

/// Print a warning message (always prints to stderr).
pub fn warn(msg: &str) {
    eprintln!("{} {}", "!".yellow(), msg);
}

/// Print an info message (suppressed in quiet mode).
pub fn info(msg: &str) {
    if !is_quiet() {
        println!("{} {}", "→".blue(), msg);
    }
}

/// Print a detail line without prefix (suppressed in quiet mode).
pub fn detail(msg: &str) {
    if !is_quiet() {
        println!("{msg}");
    }
}

/// Print essential machine-readable output (always prints).
///
/// Use for results that should be available for piping, like URLs or JSON.
pub fn essential(msg: &str) {
    println!("{msg}");
}

/// Warn that a response held no usable data.
pub fn no_data(what: &str) {
    warn(&format!("No {what} in the response"));
}

/// Colored `#number` for an issue.
#[must_use]
pub fn issue_ref(number: u64, state: IssueState) -> String {
    let text = format!("#{number}");
    match state {
        IssueState::Open => text.green().to_string(),
        IssueState::Closed => text.red().to_string(),
    }
}

/// Short date for listings.
#[must_use]
pub fn date(at: Option<&DateTime<Utc>>) -> String {
    at.map_or_else(|| "-".dimmed().to_string(), |at| at.format("%Y-%m-%d").to_string())
}

/// Print a horizontal line (suppressed in quiet mode).
pub fn hr() {
    if !is_quiet() {
        println!("{}", "─".repeat(50).dimmed());
    }
}
