use super::*;

fn ctx(history: &[String]) -> DispatchCtx<'_> {
    let now = OffsetDateTime::from_unix_timestamp(1_792_332_185).expect("valid timestamp");
    DispatchCtx {
        now,
        started_at: now - time::Duration::minutes(7),
        history,
    }
}

fn text(r: Resolution) -> String {
    match r {
        Resolution::Output(o) => o.plain_text(),
        Resolution::Reset => panic!("unexpected reset"),
    }
}

#[test]
fn split_line_collapses_whitespace() {
    let (cmd, args) = split_line("echo a   b\tc").expect("non-empty line");
    assert_eq!(cmd, "echo");
    assert_eq!(args, vec!["a", "b", "c"]);
    assert!(split_line("").is_none());
}

#[test]
fn echo_rejoins_args_with_single_spaces() {
    assert_eq!(text(resolve("echo", &["a", "b"], &ctx(&[]))), "a b");
    assert_eq!(text(resolve("echo", &[], &ctx(&[]))), "");
}

#[test]
fn args_keep_their_case() {
    assert_eq!(text(resolve("ECHO", &["MiXeD"], &ctx(&[]))), "MiXeD");
}

#[test]
fn clear_resolves_to_reset() {
    assert_eq!(resolve("Clear", &[], &ctx(&[])), Resolution::Reset);
}

#[test]
fn unknown_command_reports_first_token() {
    assert_eq!(
        text(resolve("sudo", &["rm"], &ctx(&[]))),
        "Command not found: sudo\nType 'help' for available commands."
    );
}

#[test]
fn neofetch_uptime_counts_from_session_start() {
    assert!(text(resolve("neofetch", &[], &ctx(&[]))).contains("Uptime: 7 minutes"));
}

#[test]
fn history_reads_from_context() {
    let h = vec!["nope".to_string(), "history".to_string()];
    assert_eq!(text(resolve("history", &[], &ctx(&h))), "  1 nope\n  2 history");
}

#[test]
fn static_commands() {
    assert_eq!(
        text(resolve("whoami", &[], &ctx(&[]))),
        "guest@terry-djony-portfolio:~$"
    );
    assert_eq!(text(resolve("ls", &[], &ctx(&[]))), "about  projects  contact");
    assert!(text(resolve("about", &[], &ctx(&[]))).starts_with("Hey there! 👋 I'm Terry Djony\n"));
    assert_eq!(
        text(resolve("date", &[], &ctx(&[]))),
        "Sun Oct 18 2026 14:03:05 GMT+0000 (UTC)"
    );
}
