use std::io::Write;

use super::*;

fn write_config(body: &str) -> tempfile::NamedTempFile {
    let mut f = tempfile::NamedTempFile::new().expect("create temp config");
    f.write_all(body.as_bytes()).expect("write temp config");
    f
}

#[test]
fn defaults_apply_to_missing_fields() {
    let f = write_config("{}");
    let cfg = PortfolioConfig::load(f.path()).expect("load config");
    assert_eq!(cfg, PortfolioConfig::default());
    assert_eq!(cfg.compact_max_width, 96);
}

#[test]
fn compact_breakpoint_is_inclusive() {
    let cfg = PortfolioConfig {
        compact_max_width: 80,
        ..PortfolioConfig::default()
    };
    assert!(cfg.is_compact(80));
    assert!(!cfg.is_compact(81));

    let forced = PortfolioConfig {
        force_compact: true,
        ..cfg
    };
    assert!(forced.is_compact(300));
}

#[test]
fn unknown_fields_are_rejected() {
    let f = write_config(r#"{"compact_width": 10}"#);
    let err = PortfolioConfig::load(f.path()).unwrap_err();
    assert!(format!("{:#}", err).contains("parse config"));
}

#[test]
fn unsupported_version_is_rejected() {
    let f = write_config(r#"{"version": 2}"#);
    let err = PortfolioConfig::load(f.path()).unwrap_err();
    assert!(err.to_string().contains("unsupported config version 2"));
}
