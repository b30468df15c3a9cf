use time::OffsetDateTime;

use super::Output;

pub const INIT_COMMAND: &str = "init";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TranscriptEntry {
    pub command: String,
    pub output: Output,
    pub timestamp: OffsetDateTime,
}

impl TranscriptEntry {
    pub fn new(command: impl Into<String>, output: Output, timestamp: OffsetDateTime) -> Self {
        Self {
            command: command.into(),
            output,
            timestamp,
        }
    }

    /// The synthetic welcome entry; it has no prompt line and is never re-run.
    pub fn is_init(&self) -> bool {
        self.command == INIT_COMMAND
    }
}

/// Append-only log of executed commands. The only way to drop entries is
/// [`Transcript::reset`], which replaces everything with a fresh seed.
#[derive(Clone, Debug, Default)]
pub struct Transcript {
    entries: Vec<TranscriptEntry>,
    revision: u64,
}

impl Transcript {
    pub fn with_entries(entries: Vec<TranscriptEntry>) -> Self {
        Self {
            entries,
            revision: 0,
        }
    }

    pub fn entries(&self) -> &[TranscriptEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn last(&self) -> Option<&TranscriptEntry> {
        self.entries.last()
    }

    /// Bumped on every append and reset. Views compare it with the revision
    /// they last laid out to know when to follow the newest entry.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn push(&mut self, entry: TranscriptEntry) {
        self.entries.push(entry);
        self.revision += 1;
    }

    pub fn reset(&mut self, seed: Vec<TranscriptEntry>) {
        self.entries = seed;
        self.revision += 1;
    }
}
