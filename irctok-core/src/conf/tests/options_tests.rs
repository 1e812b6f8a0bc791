use crate::conf::{RunConfig, TokenizeOptions};
use crate::users::UserScan;
use std::path::{Path, PathBuf};

#[test]
fn defaults_are_all_off() {
    let options = TokenizeOptions::default();

    assert!(!options.cut_timestamp);
    assert!(!options.cut_username);
    assert!(!options.replace_usernames);
    assert!(!options.add_line_boundaries);
    assert!(!options.edit_messages_only);
    assert!(!options.is_ascii);
    assert!(!options.users_from_future);
}

#[test]
fn users_from_future_selects_prepass() {
    let streaming = TokenizeOptions::default();
    let prepass = TokenizeOptions {
        users_from_future: true,
        ..TokenizeOptions::default()
    };

    assert_eq!(streaming.user_scan(), UserScan::Streaming);
    assert_eq!(prepass.user_scan(), UserScan::Prepass);
}

#[test]
fn union_turns_on_either_side() {
    let a = TokenizeOptions {
        cut_timestamp: true,
        ..TokenizeOptions::default()
    };
    let b = TokenizeOptions {
        is_ascii: true,
        ..TokenizeOptions::default()
    };

    let merged = a.union(b);

    assert!(merged.cut_timestamp);
    assert!(merged.is_ascii);
    assert!(!merged.cut_username);
}

#[test]
fn output_path_appends_suffix() {
    let mut config = RunConfig::new(vec![PathBuf::from("logs/2004-01-01.txt")]);
    assert_eq!(config.output_path(Path::new("logs/2004-01-01.txt")), None);

    config.output_suffix = Some(".tok".to_string());

    assert_eq!(
        config.output_path(Path::new("logs/2004-01-01.txt")),
        Some(PathBuf::from("logs/2004-01-01.txt.tok"))
    );
}
