//! ghlite CLI - a minimal GitHub client.

use clap::Parser;
use ghlite_api::CreateIssueRequest;
use tracing::Level;
use tracing_subscriber::EnvFilter;

mod commands;
mod output;

use commands::{Cli, Commands, Context};

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    output::set_quiet(cli.quiet);

    if let Err(e) = run(cli) {
        output::error(&format!("{e:#}"));
        std::process::exit(1);
    }
}

/// Log to stderr at a level picked by `-v`, unless `RUST_LOG` says otherwise.
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::default().add_directive(level.into()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init()
        .ok();
}

fn run(cli: Cli) -> anyhow::Result<()> {
    if let Commands::Completions { shell } = cli.command {
        commands::completions::run(shell);
        return Ok(());
    }

    let ctx = Context::from_cli(&cli)?;

    match cli.command {
        Commands::Login { code } => commands::login::run(&ctx, &code),
        Commands::User => commands::user::run(&ctx),
        Commands::Search { query } => commands::search::run(&ctx, &query),
        Commands::Repo { repo } => commands::repo::run(&ctx, &repo),
        Commands::Issues { repo } => commands::issues::run(&ctx, &repo),
        Commands::Comments { repo, number } => commands::comments::run(&ctx, &repo, number),
        Commands::CreateIssue {
            repo,
            title,
            body,
            assignee,
            milestone,
            labels,
        } => {
            let issue = CreateIssueRequest {
                title,
                body,
                assignee,
                milestone,
                labels,
            };
            commands::create_issue::run(&ctx, &repo, &issue)
        }
        Commands::Comment { repo, number, text } => {
            commands::comment::run(&ctx, &repo, number, &text)
        }
        Commands::Grants => commands::grants::run(&ctx),
        Commands::Completions { .. } => Ok(()),
    }
}
