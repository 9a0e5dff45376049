use clap::Parser;
use tracing_subscriber::EnvFilter;

use food_tracker_rs::cli::{Cli, Command, OutputFormat};
use food_tracker_rs::error::Result;
use food_tracker_rs::interface::{display_session, load_script, replay, run_interactive};
use food_tracker_rs::state::TrackerSession;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Logs go to stderr so rendered output on stdout stays clean.
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let mut session = TrackerSession::new();

    match cli.command.unwrap_or_default() {
        Command::Interactive => run_interactive(&mut session, cli.format),
        Command::Replay { script, keep_going } => {
            cmd_replay(&mut session, &script, keep_going, cli.format)
        }
    }
}

/// Apply a script of intents, then print the resulting ledger.
fn cmd_replay(
    session: &mut TrackerSession,
    script: &std::path::Path,
    keep_going: bool,
    format: OutputFormat,
) -> Result<()> {
    let intents = load_script(script)?;
    tracing::info!(steps = intents.len(), script = %script.display(), "replaying script");

    let report = replay(session, intents, keep_going)?;

    for (step, message) in &report.failures {
        eprintln!("Step {} skipped: {}", step, message);
    }
    if !report.failures.is_empty() {
        eprintln!(
            "Applied {} steps, skipped {}.",
            report.applied,
            report.failures.len()
        );
    }

    display_session(session, format)
}
