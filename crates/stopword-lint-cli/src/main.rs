//! stopword-lint CLI tool.
//!
//! Usage:
//! ```bash
//! stopword-lint check [OPTIONS] [PATHS]...
//! stopword-lint fix [--dry-run] [PATHS]...
//! stopword-lint list-words
//! stopword-lint init
//! ```

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use stopword_lint_core::Severity;
use tracing_subscriber::EnvFilter;

mod commands;
mod config_resolver;
mod document;
mod lint;

use commands::RuleArgs;

/// Finds discouraged words and phrases in Markdown and plain-text documents
#[derive(Parser)]
#[command(name = "stopword-lint")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "STOPWORD_LINT_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Report discouraged words
    Check {
        /// Files or directories to lint (default: current directory)
        #[arg(default_value = ".")]
        paths: Vec<PathBuf>,

        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,

        /// Lowest severity that fails the run (default: from config, else "error")
        #[arg(long, value_parser = parse_severity)]
        fail_on: Option<Severity>,

        #[command(flatten)]
        rules: RuleArgs,
    },

    /// Replace discouraged words that have a replacement
    Fix {
        /// Files or directories to fix (default: current directory)
        #[arg(default_value = ".")]
        paths: Vec<PathBuf>,

        /// Print fixed contents instead of writing files
        #[arg(long)]
        dry_run: bool,

        #[command(flatten)]
        rules: RuleArgs,
    },

    /// List the effective rules
    ListWords {
        #[command(flatten)]
        rules: RuleArgs,
    },

    /// Initialize configuration file
    Init {
        /// Overwrite existing config
        #[arg(long)]
        force: bool,
    },
}

/// Output format for lint results.
#[derive(Clone, Copy, Debug, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text output.
    #[default]
    Text,
    /// JSON output.
    Json,
    /// One-line-per-violation compact format.
    Compact,
    /// Source excerpts with the offending term underlined.
    Pretty,
}

fn parse_severity(s: &str) -> Result<Severity, String> {
    s.parse()
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let config = cli.config.as_deref();
    match cli.command {
        Commands::Check {
            paths,
            format,
            fail_on,
            rules,
        } => {
            let failed = commands::check::run(&paths, format, fail_on, &rules, config)?;
            Ok(if failed {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            })
        }
        Commands::Fix {
            paths,
            dry_run,
            rules,
        } => {
            commands::fix::run(&paths, dry_run, &rules, config)?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::ListWords { rules } => {
            commands::list_words::run(&rules, config)?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::Init { force } => {
            commands::init::run(force)?;
            Ok(ExitCode::SUCCESS)
        }
    }
}
