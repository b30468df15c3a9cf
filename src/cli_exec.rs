use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};

use termfolio::model::{PortfolioConfig, TranscriptEntry};
use termfolio::session::{Effect, PROMPT, Session, help_table};

use crate::{Commands, RunArgs};

pub(super) fn handle_command(command: Commands, config: &PortfolioConfig) -> Result<()> {
    match command {
        Commands::Run(args) => handle_run_command(args, config),
        Commands::Commands => {
            println!("{}", help_table().plain_text());
            Ok(())
        }
    }
}

fn handle_run_command(args: RunArgs, config: &PortfolioConfig) -> Result<()> {
    // Without a terminal there is no width to measure; only an explicit
    // setting selects the compact banner.
    let mut session = Session::new(config.force_compact);
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if args.lines.is_empty() {
        for line in io::stdin().lock().lines() {
            let line = line.context("read stdin")?;
            run_line(&mut session, &line, &mut out)?;
        }
    } else {
        for line in &args.lines {
            run_line(&mut session, line, &mut out)?;
        }
    }

    out.flush().context("flush stdout")
}

fn run_line(session: &mut Session, line: &str, out: &mut impl Write) -> Result<()> {
    match session.execute(line) {
        None => Ok(()),
        Some(Effect::Append(entry)) => write_entry(out, &entry),
        Some(Effect::Reset) => {
            for entry in session.transcript().entries() {
                write_entry(out, entry)?;
            }
            Ok(())
        }
    }
}

fn write_entry(out: &mut impl Write, entry: &TranscriptEntry) -> Result<()> {
    if !entry.is_init() {
        writeln!(out, "{} {}", PROMPT, entry.command).context("write stdout")?;
    }
    if !entry.output.is_empty() {
        writeln!(out, "{}", entry.output.plain_text()).context("write stdout")?;
    }
    Ok(())
}
