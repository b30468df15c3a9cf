use time::OffsetDateTime;

use super::*;
use crate::model::{Output, TranscriptEntry};

fn transcript(entries: Vec<(&str, Output)>) -> Transcript {
    let now = OffsetDateTime::UNIX_EPOCH;
    Transcript::with_entries(
        entries
            .into_iter()
            .map(|(cmd, out)| TranscriptEntry::new(cmd, out, now))
            .collect(),
    )
}

#[test]
fn init_entry_has_no_prompt_row() {
    let t = transcript(vec![("init", Output::from("hello\nworld"))]);
    let layout = layout_transcript(&t, 80);
    let rows = layout.rows.iter().map(Row::text).collect::<Vec<_>>();
    assert_eq!(rows, vec!["hello", "world"]);
}

#[test]
fn command_entries_get_a_prompt_row() {
    let t = transcript(vec![("echo hi", Output::from("hi")), ("echo", Output::empty())]);
    let layout = layout_transcript(&t, 80);
    let rows = layout.rows.iter().map(Row::text).collect::<Vec<_>>();
    assert_eq!(
        rows,
        vec![
            "guest@terry-djony-portfolio:~$ echo hi",
            "hi",
            "guest@terry-djony-portfolio:~$ echo",
        ]
    );
    assert_eq!(layout.rows[0].spans[0].kind, SpanKind::Prompt);
    assert_eq!(layout.rows[0].spans[1].kind, SpanKind::Command);
}

#[test]
fn long_lines_wrap_by_display_width() {
    let t = transcript(vec![("init", Output::from("abcdefgh"))]);
    let layout = layout_transcript(&t, 3);
    let rows = layout.rows.iter().map(Row::text).collect::<Vec<_>>();
    assert_eq!(rows, vec!["abc", "def", "gh"]);

    let t = transcript(vec![("init", Output::from("a👋b"))]);
    let layout = layout_transcript(&t, 2);
    let rows = layout.rows.iter().map(Row::text).collect::<Vec<_>>();
    assert_eq!(rows, vec!["a", "👋", "b"]);
}

#[test]
fn invocable_names_become_hit_regions() {
    let out = Output::Structured(vec![
        Fragment::text("  "),
        Fragment::invocable("about"),
        Fragment::text("\n  "),
        Fragment::invocable("ls"),
    ]);
    let t = transcript(vec![("init", out)]);
    let layout = layout_transcript(&t, 80);

    assert_eq!(layout.hit(0, 2), Some(Command::About));
    assert_eq!(layout.hit(0, 6), Some(Command::About));
    assert_eq!(layout.hit(0, 7), None);
    assert_eq!(layout.hit(0, 1), None);
    assert_eq!(layout.hit(1, 3), Some(Command::Ls));
    assert_eq!(layout.hit(2, 0), None);
}

#[test]
fn wrapped_invocable_is_clickable_on_both_rows() {
    let out = Output::Structured(vec![Fragment::text("xx"), Fragment::invocable("projects")]);
    let t = transcript(vec![("init", out)]);
    let layout = layout_transcript(&t, 5);
    assert_eq!(layout.hit(0, 3), Some(Command::Projects));
    assert_eq!(layout.hit(1, 0), Some(Command::Projects));
    assert_eq!(layout.hit(1, 4), Some(Command::Projects));
    assert_eq!(layout.hit(0, 0), None);
}

#[test]
fn links_keep_their_kind() {
    let out = Output::Structured(vec![Fragment::link("https://x.com/a", "x")]);
    let t = transcript(vec![("init", out)]);
    let layout = layout_transcript(&t, 80);
    assert_eq!(layout.rows[0].spans[0].kind, SpanKind::Link);
    assert!(layout.hits.is_empty());
}

#[test]
fn scroll_follows_new_revisions() {
    let mut s = TranscriptScroll::default();
    s.sync(0, 50, 10);
    assert_eq!(s.offset, 40);

    s.scroll_by(-15);
    assert_eq!(s.offset, 25);
    assert!(!s.follow);

    s.sync(0, 50, 10);
    assert_eq!(s.offset, 25);

    s.sync(1, 52, 10);
    assert_eq!(s.offset, 42);
    assert!(s.follow);
}

#[test]
fn scrolling_back_to_bottom_resumes_follow() {
    let mut s = TranscriptScroll::default();
    s.sync(0, 30, 10);
    s.scroll_by(-5);
    s.scroll_by(100);
    assert_eq!(s.offset, 20);
    assert!(s.follow);

    s.scroll_by(-100);
    assert_eq!(s.offset, 0);
}

#[test]
fn short_transcripts_do_not_scroll() {
    let mut s = TranscriptScroll::default();
    s.sync(0, 3, 10);
    assert_eq!(s.offset, 0);
    s.scroll_by(5);
    assert_eq!(s.offset, 0);
}
