use unicode_width::UnicodeWidthChar;

use crate::model::{Fragment, Transcript};
use crate::session::{Command, PROMPT};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) enum SpanKind {
    Prompt,
    Command,
    Text,
    Link,
    Invocable,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub(super) struct RowSpan {
    pub(super) text: String,
    pub(super) kind: SpanKind,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(super) struct Row {
    pub(super) spans: Vec<RowSpan>,
}

#[cfg(test)]
impl Row {
    pub(super) fn text(&self) -> String {
        self.spans.iter().map(|s| s.text.as_str()).collect()
    }
}

/// Screen columns `[start, end)` of a clickable command name on one row.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) struct HitRegion {
    pub(super) row: usize,
    pub(super) start: u16,
    pub(super) end: u16,
    pub(super) command: Command,
}

#[derive(Clone, Debug, Default)]
pub(super) struct TranscriptLayout {
    pub(super) rows: Vec<Row>,
    pub(super) hits: Vec<HitRegion>,
}

impl TranscriptLayout {
    pub(super) fn hit(&self, row: usize, col: u16) -> Option<Command> {
        self.hits
            .iter()
            .find(|h| h.row == row && col >= h.start && col < h.end)
            .map(|h| h.command)
    }
}

struct Piece<'a> {
    text: &'a str,
    kind: SpanKind,
    command: Option<Command>,
}

/// Lays the transcript out as display rows of at most `width` columns.
pub(super) fn layout_transcript(transcript: &Transcript, width: u16) -> TranscriptLayout {
    let width = width.max(1);
    let mut out = TranscriptLayout::default();
    let prompt = format!("{} ", PROMPT);

    for entry in transcript.entries() {
        if !entry.is_init() {
            let pieces = [
                Piece {
                    text: &prompt,
                    kind: SpanKind::Prompt,
                    command: None,
                },
                Piece {
                    text: &entry.command,
                    kind: SpanKind::Command,
                    command: None,
                },
            ];
            wrap_line(&mut out, &pieces, width);
        }

        if entry.output.is_empty() {
            continue;
        }
        for line in entry.output.lines() {
            let pieces = line
                .iter()
                .map(|frag| match frag {
                    Fragment::Text { text } => Piece {
                        text,
                        kind: SpanKind::Text,
                        command: None,
                    },
                    Fragment::Link { label, .. } => Piece {
                        text: label,
                        kind: SpanKind::Link,
                        command: None,
                    },
                    Fragment::InvocableCommand { name } => Piece {
                        text: name,
                        kind: SpanKind::Invocable,
                        command: Command::parse(name),
                    },
                })
                .collect::<Vec<_>>();
            wrap_line(&mut out, &pieces, width);
        }
    }
    out
}

fn wrap_line(out: &mut TranscriptLayout, pieces: &[Piece<'_>], width: u16) {
    let mut row = Row::default();
    let mut col: u16 = 0;

    for piece in pieces {
        let mut chunk = String::new();
        let mut chunk_start = col;
        for c in piece.text.chars() {
            let w = c.width().unwrap_or(0) as u16;
            if col > 0 && col + w > width {
                flush_chunk(out, &mut row, piece, &mut chunk, chunk_start, col);
                out.rows.push(std::mem::take(&mut row));
                col = 0;
                chunk_start = 0;
            }
            chunk.push(c);
            col += w;
        }
        flush_chunk(out, &mut row, piece, &mut chunk, chunk_start, col);
    }
    out.rows.push(row);
}

fn flush_chunk(
    out: &mut TranscriptLayout,
    row: &mut Row,
    piece: &Piece<'_>,
    chunk: &mut String,
    start: u16,
    end: u16,
) {
    if chunk.is_empty() {
        return;
    }
    if let Some(command) = piece.command {
        out.hits.push(HitRegion {
            row: out.rows.len(),
            start,
            end,
            command,
        });
    }
    row.spans.push(RowSpan {
        text: std::mem::take(chunk),
        kind: piece.kind,
    });
}

/// Scroll position of the transcript viewport. While `follow` is set the
/// viewport stays pinned to the newest row.
#[derive(Clone, Copy, Debug)]
pub(super) struct TranscriptScroll {
    pub(super) offset: usize,
    pub(super) follow: bool,
    max: usize,
    seen_revision: Option<u64>,
}

impl Default for TranscriptScroll {
    fn default() -> Self {
        Self {
            offset: 0,
            follow: true,
            max: 0,
            seen_revision: None,
        }
    }
}

impl TranscriptScroll {
    /// Called once the transcript has been laid out for the current frame.
    pub(super) fn sync(&mut self, revision: u64, total_rows: usize, height: usize) {
        if self.seen_revision != Some(revision) {
            self.seen_revision = Some(revision);
            self.follow = true;
        }
        self.max = total_rows.saturating_sub(height);
        if self.follow {
            self.offset = self.max;
        }
        self.offset = self.offset.min(self.max);
    }

    pub(super) fn scroll_by(&mut self, delta: isize) {
        self.offset = self.offset.saturating_add_signed(delta).min(self.max);
        self.follow = self.offset >= self.max;
    }
}

#[cfg(test)]
#[path = "../tests/tui_shell/transcript_view_tests.rs"]
mod tests;
