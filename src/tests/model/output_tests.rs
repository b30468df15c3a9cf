use super::*;

#[test]
fn plain_text_flattens_links_and_invocables() {
    let out = Output::Structured(vec![
        Fragment::text("see "),
        Fragment::link("https://example.com", "example"),
        Fragment::text(" or run "),
        Fragment::invocable("help"),
    ]);
    assert_eq!(out.plain_text(), "see example or run help");
}

#[test]
fn lines_split_text_on_newlines_but_keep_links_whole() {
    let out = Output::Structured(vec![
        Fragment::text("a\nb "),
        Fragment::link("https://x.com/y", "https://x.com/y"),
        Fragment::text("\n\nc"),
    ]);
    let lines = out.lines();
    assert_eq!(lines.len(), 4);
    assert_eq!(lines[0], vec![Fragment::text("a")]);
    assert_eq!(
        lines[1],
        vec![
            Fragment::text("b "),
            Fragment::link("https://x.com/y", "https://x.com/y")
        ]
    );
    assert!(lines[2].is_empty());
    assert_eq!(lines[3], vec![Fragment::text("c")]);
}

#[test]
fn empty_outputs() {
    assert!(Output::empty().is_empty());
    assert!(Output::Structured(vec![Fragment::text("")]).is_empty());
    assert!(!Output::from("x").is_empty());
}

#[test]
fn serializes_with_type_tags() {
    let out = Output::Structured(vec![Fragment::invocable("ls")]);
    let v = serde_json::to_value(&out).expect("serialize output");
    assert_eq!(v["type"], "structured");
    assert_eq!(v["value"][0]["type"], "invocable_command");
    assert_eq!(v["value"][0]["name"], "ls");
}
