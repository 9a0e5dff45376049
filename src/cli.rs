use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Food Tracker: record foods and keep running nutrition totals.
#[derive(Parser, Debug)]
#[command(name = "food_tracker")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// How to render the ledger.
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table, global = true)]
    pub format: OutputFormat,

    /// Log ledger mutations to stderr (overridden by RUST_LOG).
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug, Default)]
pub enum Command {
    /// Add, edit and delete foods from prompts.
    #[default]
    Interactive,

    /// Apply a JSON script of intents and print the resulting ledger.
    Replay {
        /// Path to the intent script.
        script: PathBuf,

        /// Report failing steps and continue instead of stopping.
        #[arg(long)]
        keep_going: bool,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Csv,
}
