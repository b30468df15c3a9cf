use super::*;

#[test]
fn parse_is_case_insensitive() {
    assert_eq!(Command::parse("HELP"), Some(Command::Help));
    assert_eq!(Command::parse("NeoFetch"), Some(Command::Neofetch));
    assert_eq!(Command::parse("cat"), None);
    assert_eq!(Command::parse(""), None);
}

#[test]
fn every_command_round_trips_through_its_name() {
    for c in Command::ALL {
        assert_eq!(Command::parse(c.name()), Some(c));
    }
}

#[test]
fn defs_follow_help_order() {
    let names = command_defs().iter().map(|d| d.name).collect::<Vec<_>>();
    assert_eq!(
        names,
        vec![
            "help", "about", "projects", "contact", "clear", "whoami", "date", "echo", "ls",
            "history", "neofetch"
        ]
    );
}

#[test]
fn complete_prefix_matches() {
    assert_eq!(complete_prefix("pro"), vec!["projects"]);
    assert_eq!(complete_prefix("H"), vec!["help", "history"]);
    assert!(complete_prefix("zz").is_empty());
    assert_eq!(complete_prefix("").len(), Command::ALL.len());
}
