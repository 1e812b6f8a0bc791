use crate::cli::TokenizeArgs;
use crate::conf::DEFAULT_PROGRESS_LOG;
use clap::Parser;
use std::fs;
use std::path::PathBuf;

#[derive(Parser, Debug)]
struct TestCli {
    #[command(flatten)]
    args: TokenizeArgs,
}

fn parse(argv: &[&str]) -> TokenizeArgs {
    let mut full = vec!["irctok"];
    full.extend_from_slice(argv);
    TestCli::try_parse_from(full).unwrap().args
}

#[test]
fn underscore_flags_are_recognised() {
    let args = parse(&[
        "--cut_timestamp",
        "--cut_username",
        "--replace_usernames",
        "--add_line_boundaries",
        "--edit_messages_only",
        "--is_ascii",
        "--users_from_future",
        "a.log",
    ]);

    let config = args.resolve().unwrap();

    assert!(config.options.cut_timestamp);
    assert!(config.options.cut_username);
    assert!(config.options.replace_usernames);
    assert!(config.options.add_line_boundaries);
    assert!(config.options.edit_messages_only);
    assert!(config.options.is_ascii);
    assert!(config.options.users_from_future);
}

#[test]
fn kebab_aliases_are_accepted() {
    let args = parse(&["--cut-timestamp", "--output-suffix", ".tok", "a.log"]);

    assert!(args.cut_timestamp);
    assert_eq!(args.output_suffix.as_deref(), Some(".tok"));
}

#[test]
fn several_inputs_keep_their_order() {
    let args = parse(&["b.log", "a.log", "c.log"]);

    let config = args.resolve().unwrap();

    assert_eq!(
        config.inputs,
        vec![
            PathBuf::from("b.log"),
            PathBuf::from("a.log"),
            PathBuf::from("c.log")
        ]
    );
    assert_eq!(config.progress_log, PathBuf::from(DEFAULT_PROGRESS_LOG));
    assert!(config.vocab.is_none());
}

#[test]
fn at_least_one_input_is_required() {
    assert!(TestCli::try_parse_from(["irctok", "--cut_timestamp"]).is_err());
}

#[test]
fn command_line_overrides_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = dir.path().join("irctok.hcl");
    fs::write(
        &cfg,
        r#"
use_vocab     = "from-file.txt"
output_suffix = ".file"
progress_log  = "file-progress.txt"

options {
  is_ascii = true
}
"#,
    )
    .unwrap();
    let cfg = cfg.to_string_lossy().into_owned();

    let args = parse(&["--config", &cfg, "--output_suffix", ".cli", "--cut_username", "a.log"]);
    let config = args.resolve().unwrap();

    assert!(config.options.is_ascii);
    assert!(config.options.cut_username);
    assert_eq!(config.vocab, Some(PathBuf::from("from-file.txt")));
    assert_eq!(config.output_suffix.as_deref(), Some(".cli"));
    assert_eq!(config.progress_log, PathBuf::from("file-progress.txt"));
}
