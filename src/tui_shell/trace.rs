use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::json;
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

use crate::session::{Command, Effect};

#[derive(Debug, Default)]
struct TraceStats {
    commands: u64,
    unrecognized: u64,
    resets: u64,
    invocations: u64,
    viewport_changes: u64,
}

/// JSON-lines session trace: one `{seq, ts, event, payload}` object per line.
#[derive(Debug)]
pub(in crate::tui_shell) struct TraceWriter {
    out: BufWriter<File>,
    path: PathBuf,
    seq: u64,
    stats: TraceStats,
}

fn now_ts() -> String {
    OffsetDateTime::now_utc()
        .format(&Rfc3339)
        .unwrap_or_else(|_| "<time>".to_string())
}

impl TraceWriter {
    pub(in crate::tui_shell) fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).with_context(|| {
                format!(
                    "create parent directories for trace path {}",
                    path.display()
                )
            })?;
        }

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("open trace file {}", path.display()))?;
        Ok(Self {
            out: BufWriter::new(file),
            path: path.to_path_buf(),
            seq: 0,
            stats: TraceStats::default(),
        })
    }

    pub(in crate::tui_shell) fn path(&self) -> &Path {
        &self.path
    }

    pub(in crate::tui_shell) fn write_event<T: Serialize>(
        &mut self,
        event: &str,
        payload: T,
    ) -> Result<()> {
        self.seq += 1;
        let line = json!({
            "seq": self.seq,
            "ts": now_ts(),
            "event": event,
            "payload": payload
        });
        serde_json::to_writer(&mut self.out, &line).context("serialize trace event")?;
        self.out.write_all(b"\n").context("write trace newline")?;
        self.out.flush().context("flush trace event")?;
        Ok(())
    }

    pub(in crate::tui_shell) fn session_start(&mut self, compact: bool) -> Result<()> {
        self.write_event(
            "session_start",
            json!({
                "cwd": std::env::current_dir().ok().map(|p| p.display().to_string()),
                "compact": compact,
            }),
        )
    }

    pub(in crate::tui_shell) fn command_submitted(
        &mut self,
        raw_input: &str,
        effect: Option<&Effect>,
    ) -> Result<()> {
        let token = raw_input.split_whitespace().next().unwrap_or("");
        let command = Command::parse(token);
        self.stats.commands += 1;
        if command.is_none() {
            self.stats.unrecognized += 1;
        }

        let (effect_label, output) = match effect {
            Some(Effect::Append(entry)) => ("append", Some(&entry.output)),
            Some(Effect::Reset) => ("reset", None),
            None => ("none", None),
        };
        self.write_event(
            "command_submitted",
            json!({
                "raw_input": raw_input,
                "command": command.map(Command::name),
                "recognized": command.is_some(),
                "effect": effect_label,
                "output": output,
            }),
        )?;

        if matches!(effect, Some(Effect::Reset)) {
            self.stats.resets += 1;
            self.write_event("transcript_reset", json!({ "trigger": raw_input }))?;
        }
        Ok(())
    }

    pub(in crate::tui_shell) fn invocation(&mut self, command: Command) -> Result<()> {
        self.stats.invocations += 1;
        self.write_event(
            "invocation",
            json!({
                "source": "mouse",
                "command": command.name(),
            }),
        )
    }

    pub(in crate::tui_shell) fn viewport_change(
        &mut self,
        width: u16,
        from_compact: bool,
        to_compact: bool,
    ) -> Result<()> {
        self.stats.viewport_changes += 1;
        self.write_event(
            "viewport_change",
            json!({
                "width": width,
                "from": viewport_label(from_compact),
                "to": viewport_label(to_compact),
            }),
        )
    }

    pub(in crate::tui_shell) fn session_end(&mut self, reason: &str) -> Result<()> {
        let stats = json!({
            "commands": self.stats.commands,
            "unrecognized": self.stats.unrecognized,
            "resets": self.stats.resets,
            "invocations": self.stats.invocations,
            "viewport_changes": self.stats.viewport_changes,
        });
        let path = self.path.display().to_string();
        self.write_event(
            "session_end",
            json!({
                "reason": reason,
                "stats": stats,
                "trace_path": path,
            }),
        )
    }
}

fn viewport_label(compact: bool) -> &'static str {
    if compact { "compact" } else { "full" }
}

#[cfg(test)]
#[path = "../tests/tui_shell/trace_tests.rs"]
mod tests;
