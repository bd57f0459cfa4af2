//! CLI for the urlclean URL cleaner.

mod commands;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::io;
use std::path::PathBuf;
use urlclean_core::{config, UrlCleaner};

use commands::{run_clean, run_compare, run_completions, run_config, run_intercept, run_man};

/// Top-level CLI for urlclean.
#[derive(Debug, Parser)]
#[command(name = "urlclean")]
#[command(about = "Strip locale path segments and tracking parameters from URLs", long_about = None)]
pub struct Cli {
    /// Read configuration from this file instead of ~/.config/urlclean/config.toml.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Clean one or more URLs and print the results.
    Clean {
        /// Text to clean (usually a URL).
        #[arg(required = true)]
        inputs: Vec<String>,

        /// Print one JSON object per input instead of the bare URL.
        #[arg(long)]
        json: bool,
    },

    /// Filter a copy buffer from stdin: print the cleaned URL if cleaning changed it,
    /// otherwise the input unchanged.
    Intercept,

    /// Show a URL next to its cleaned form.
    Compare {
        /// URL to compare.
        url: String,
    },

    /// Show the config file path and effective configuration.
    Config,

    /// Generate shell completions.
    Completions {
        /// Target shell.
        shell: Shell,
    },

    /// Print the man page (roff) to stdout.
    Man,
}

impl CliCommand {
    /// Parses arguments, runs the command and returns the process exit code.
    pub fn run_from_args() -> Result<i32> {
        let cli = Cli::parse();

        // Commands that do not need the engine.
        match &cli.command {
            CliCommand::Completions { shell } => return run_completions(*shell).map(|()| 0),
            CliCommand::Man => return run_man().map(|()| 0),
            _ => {}
        }

        let (cfg_path, cfg) = match &cli.config {
            Some(path) => (path.clone(), config::load_from(path)?),
            None => (config::config_path()?, config::load_or_init()?),
        };
        tracing::debug!("loaded config from {}: {:?}", cfg_path.display(), cfg);
        let cleaner = UrlCleaner::new(&cfg)
            .with_context(|| format!("invalid config {}", cfg_path.display()))?;

        let code = match cli.command {
            CliCommand::Clean { inputs, json } => {
                run_clean(&cleaner, &inputs, json, io::stdout().lock(), io::stderr().lock())?
            }
            CliCommand::Intercept => run_intercept(&cleaner, io::stdin().lock(), io::stdout().lock())?,
            CliCommand::Compare { url } => run_compare(&cleaner, &url)?,
            CliCommand::Config => run_config(&cfg_path, &cfg)?,
            CliCommand::Completions { .. } | CliCommand::Man => 0,
        };

        Ok(code)
    }
}

#[cfg(test)]
mod tests;
