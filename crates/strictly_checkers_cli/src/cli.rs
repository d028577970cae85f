//! Command-line interface for strictly_checkers.

use clap::{Parser, Subcommand};
use strictly_checkers::Operator;

/// Strictly Checkers - checkers where every move is a logic quiz
#[derive(Parser, Debug)]
#[command(name = "strictly_checkers")]
#[command(about = "Checkers gated by truth-table challenges", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Log filter used when RUST_LOG is unset
    #[arg(long, default_value = "warn", global = true)]
    pub log_level: String,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play against the AI in the terminal
    Play {
        /// Path to a TOML game config (defaults are used if it doesn't exist)
        #[arg(short, long, default_value = "strictly_checkers.toml")]
        config: std::path::PathBuf,

        /// Seed for a reproducible game (overrides the config file)
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Print the full truth table for an operator
    Table {
        /// Operator name (and, or, not, implies, biconditional, complex, tautology)
        operator: Operator,

        /// Pool index for implies, complex and tautology (0-based)
        #[arg(short, long)]
        variant: Option<usize>,
    },

    /// Print the hint text for an operator
    Hint {
        /// Operator name (and, or, not, implies, biconditional, complex, tautology)
        operator: Operator,

        /// Implication variant index (0-based)
        #[arg(short, long)]
        variant: Option<usize>,
    },

    /// Print the opening board snapshot as JSON
    Snapshot {
        /// Seed for the random operator deal
        #[arg(long)]
        seed: Option<u64>,
    },
}
