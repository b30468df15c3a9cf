use time::OffsetDateTime;

use super::commands::Command;
use super::content;
use crate::model::Output;

/// What a submitted line does to the transcript.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Resolution {
    Output(Output),
    Reset,
}

/// Everything a command may read besides its own arguments.
#[derive(Clone, Copy, Debug)]
pub struct DispatchCtx<'a> {
    pub now: OffsetDateTime,
    pub started_at: OffsetDateTime,
    pub history: &'a [String],
}

/// Splits a trimmed line into the command token and its arguments.
/// Runs of whitespace separate tokens.
pub fn split_line(line: &str) -> Option<(&str, Vec<&str>)> {
    let mut tokens = line.split_whitespace();
    let command = tokens.next()?;
    Some((command, tokens.collect()))
}

pub fn resolve(token: &str, args: &[&str], ctx: &DispatchCtx<'_>) -> Resolution {
    let Some(command) = Command::parse(token) else {
        return Resolution::Output(content::not_found(token));
    };

    let output = match command {
        Command::Help => content::help_table(),
        Command::About => content::about(),
        Command::Projects => content::projects(),
        Command::Contact => content::contact(),
        Command::Clear => return Resolution::Reset,
        Command::Whoami => content::whoami(),
        Command::Date => content::date(ctx.now),
        Command::Echo => content::echo(args),
        Command::Ls => content::ls(),
        Command::History => content::history(ctx.history),
        Command::Neofetch => {
            let minutes = (ctx.now - ctx.started_at).whole_minutes().max(0);
            content::neofetch(minutes)
        }
    };
    Resolution::Output(output)
}

#[cfg(test)]
#[path = "../tests/session/dispatch_tests.rs"]
mod tests;
