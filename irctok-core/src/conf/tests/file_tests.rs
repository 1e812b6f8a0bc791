use crate::conf::FileConfig;
use crate::error::TokenizeError;
use std::fs;
use std::path::PathBuf;

#[test]
fn parses_options_block_and_attributes() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("irctok.hcl");
    fs::write(
        &path,
        r#"
use_vocab     = "vocab.txt"
output_suffix = ".tok"

options {
  cut_timestamp     = true
  users_from_future = true
}
"#,
    )
    .unwrap();

    let cfg = FileConfig::from_file(&path).unwrap();

    assert!(cfg.options.cut_timestamp);
    assert!(cfg.options.users_from_future);
    assert!(!cfg.options.cut_username);
    assert_eq!(cfg.use_vocab, Some(PathBuf::from("vocab.txt")));
    assert_eq!(cfg.output_suffix.as_deref(), Some(".tok"));
    assert_eq!(cfg.progress_log, None);
}

#[test]
fn empty_file_is_all_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("irctok.hcl");
    fs::write(&path, "").unwrap();

    let cfg = FileConfig::from_file(&path).unwrap();

    assert_eq!(cfg.options, Default::default());
    assert!(cfg.use_vocab.is_none());
}

#[test]
fn unknown_option_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("irctok.hcl");
    fs::write(&path, "options {\n  cut_everything = true\n}\n").unwrap();

    let err = FileConfig::from_file(&path).unwrap_err();

    assert!(matches!(err, TokenizeError::ParseConfig { .. }));
}

#[test]
fn missing_file_is_a_read_error() {
    let dir = tempfile::tempdir().unwrap();

    let err = FileConfig::from_file(&dir.path().join("nope.hcl")).unwrap_err();

    assert!(matches!(err, TokenizeError::ReadConfig { .. }));
}
