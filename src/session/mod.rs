//! The portfolio session: transcript, line editor and command dispatch.
//!
//! A [`Session`] is the only writer of its transcript and input state. Views
//! borrow it to render and hand it keystrokes; nothing here is global.

mod commands;
mod content;
mod dispatch;
mod input;

use time::OffsetDateTime;

use crate::model::{INIT_COMMAND, Transcript, TranscriptEntry};

pub use self::commands::{Command, CommandDef, command_defs, complete_prefix};
pub use self::content::{PROMPT, WINDOW_TITLE, banner, help_table};
pub use self::dispatch::{DispatchCtx, Resolution, resolve, split_line};
pub use self::input::InputState;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Effect {
    Append(TranscriptEntry),
    Reset,
}

/// The welcome banner followed by the help table.
pub fn seed_entries(compact: bool, now: OffsetDateTime) -> Vec<TranscriptEntry> {
    vec![
        TranscriptEntry::new(INIT_COMMAND, content::welcome(compact), now),
        TranscriptEntry::new(Command::Help.name(), content::help_table(), now),
    ]
}

#[derive(Debug)]
pub struct Session {
    transcript: Transcript,
    input: InputState,
    compact: bool,
    started_at: OffsetDateTime,
}

impl Session {
    pub fn new(compact: bool) -> Self {
        Self::with_clock(compact, OffsetDateTime::now_utc())
    }

    pub fn with_clock(compact: bool, started_at: OffsetDateTime) -> Self {
        Self {
            transcript: Transcript::with_entries(seed_entries(compact, started_at)),
            input: InputState::default(),
            compact,
            started_at,
        }
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub fn input(&self) -> &InputState {
        &self.input
    }

    pub fn input_mut(&mut self) -> &mut InputState {
        &mut self.input
    }

    pub fn history(&self) -> &[String] {
        self.input.history()
    }

    pub fn started_at(&self) -> OffsetDateTime {
        self.started_at
    }

    pub fn is_compact(&self) -> bool {
        self.compact
    }

    /// Returns true when the mode changed. The transcript is left alone; the
    /// new mode applies to the next `clear`.
    pub fn set_compact(&mut self, compact: bool) -> bool {
        let changed = self.compact != compact;
        self.compact = compact;
        changed
    }

    pub fn execute(&mut self, raw: &str) -> Option<Effect> {
        self.execute_at(raw, OffsetDateTime::now_utc())
    }

    /// Runs one submitted line. Blank lines change nothing except the input,
    /// which is reset on every path.
    pub fn execute_at(&mut self, raw: &str, now: OffsetDateTime) -> Option<Effect> {
        let line = raw.trim();
        self.input.record(line);

        let Some((token, args)) = split_line(line) else {
            self.input.reset();
            return None;
        };

        let ctx = DispatchCtx {
            now,
            started_at: self.started_at,
            history: self.input.history(),
        };
        let effect = match resolve(token, &args, &ctx) {
            Resolution::Output(output) => {
                let entry = TranscriptEntry::new(line, output, now);
                self.transcript.push(entry.clone());
                Effect::Append(entry)
            }
            Resolution::Reset => {
                self.transcript.reset(seed_entries(self.compact, now));
                Effect::Reset
            }
        };

        self.input.reset();
        Some(effect)
    }

    /// Enter.
    pub fn submit(&mut self) -> Option<Effect> {
        let line = self.input.text().to_string();
        self.execute(&line)
    }

    /// Activating a rendered command name is the same as typing it.
    pub fn invoke(&mut self, command: Command) -> Option<Effect> {
        self.execute(command.name())
    }

    pub fn history_up(&mut self) {
        self.input.history_up();
    }

    pub fn history_down(&mut self) {
        self.input.history_down();
    }

    pub fn complete(&mut self) {
        self.input.complete();
    }
}

#[cfg(test)]
#[path = "../tests/session/session_tests.rs"]
mod tests;
