use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use termfolio::model::PortfolioConfig;

use crate::Commands;

#[derive(Parser)]
#[command(name = "termfolio")]
#[command(about = "Terminal-style portfolio", long_about = None)]
pub(crate) struct Cli {
    /// Append a JSON-lines session trace to PATH
    #[arg(long = "trace", value_name = "PATH")]
    trace: Option<PathBuf>,

    /// Load display settings from a JSON config file
    #[arg(long = "config", value_name = "PATH")]
    config: Option<PathBuf>,

    /// Always use the compact banner
    #[arg(long)]
    compact: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

pub(crate) fn run() -> Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => PortfolioConfig::load(path)?,
        None => PortfolioConfig::default(),
    };
    if cli.compact {
        config.force_compact = true;
    }

    match cli.command {
        None => {
            termfolio::tui::run_with_options(termfolio::tui::TuiRunOptions {
                trace: cli.trace,
                config,
            })?;
        }
        Some(command) => {
            if cli.trace.is_some() {
                anyhow::bail!("`--trace` is only supported when running the TUI (no subcommand)");
            }
            crate::cli_exec::handle_command(command, &config)?
        }
    }

    Ok(())
}
