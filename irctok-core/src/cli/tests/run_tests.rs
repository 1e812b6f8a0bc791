use crate::cli::{RunSummary, run};
use crate::conf::RunConfig;
use crate::error::TokenizeError;
use pretty_assertions::assert_eq;
use std::fs;

#[test]
fn writes_output_next_to_each_input() {
    let dir = tempfile::tempdir().unwrap();
    let log = dir.path().join("a.log");
    fs::write(&log, "[10:00] <alice> Hello!\n[10:01] <bob> alice: hi\n").unwrap();

    let mut config = RunConfig::new(vec![log.clone()]);
    config.output_suffix = Some(".tok".to_string());
    config.options.replace_usernames = true;

    let summary = run(&config).unwrap();

    assert_eq!(
        summary,
        RunSummary {
            processed: 1,
            failed: 0,
            lines: 2
        }
    );
    assert_eq!(
        fs::read_to_string(dir.path().join("a.log.tok")).unwrap(),
        "[10:00] <alice> hello !\n[10:01] <bob> <user> : hi\n"
    );
}

#[test]
fn failed_file_does_not_stop_the_run() {
    let dir = tempfile::tempdir().unwrap();
    let good = dir.path().join("good.log");
    fs::write(&good, "[10:00] <alice> ok\n").unwrap();
    let missing = dir.path().join("missing.log");

    let mut config = RunConfig::new(vec![missing.clone(), good.clone()]);
    config.output_suffix = Some(".tok".to_string());

    let summary = run(&config).unwrap();

    assert_eq!(summary.processed, 1);
    assert_eq!(summary.failed, 1);
    assert!(dir.path().join("good.log.tok").exists());
    assert!(!dir.path().join("missing.log.tok").exists());
}

#[test]
fn vocabulary_is_applied() {
    let dir = tempfile::tempdir().unwrap();
    let log = dir.path().join("a.log");
    fs::write(&log, "[10:00] <alice> hello zyzzyva 2\n").unwrap();
    let vocab = dir.path().join("vocab.txt");
    fs::write(&vocab, "10 hello\n").unwrap();

    let mut config = RunConfig::new(vec![log]);
    config.output_suffix = Some(".tok".to_string());
    config.vocab = Some(vocab);

    run(&config).unwrap();

    assert_eq!(
        fs::read_to_string(dir.path().join("a.log.tok")).unwrap(),
        "[10:00] <alice> hello <unka> <unk#>\n"
    );
}

#[test]
fn missing_vocabulary_aborts() {
    let dir = tempfile::tempdir().unwrap();
    let log = dir.path().join("a.log");
    fs::write(&log, "[10:00] <alice> hi\n").unwrap();

    let mut config = RunConfig::new(vec![log]);
    config.vocab = Some(dir.path().join("nope.txt"));

    let err = run(&config).unwrap_err();

    assert!(matches!(err, TokenizeError::ReadVocab { .. }));
    assert!(!err.is_per_file());
}

#[test]
fn prepass_resolves_forward_mentions() {
    let dir = tempfile::tempdir().unwrap();
    let log = dir.path().join("a.log");
    fs::write(&log, "[10:00] <alice> carol?\n[10:05] <carol> yes\n").unwrap();

    let mut config = RunConfig::new(vec![log]);
    config.output_suffix = Some(".tok".to_string());
    config.options.replace_usernames = true;
    config.options.users_from_future = true;

    run(&config).unwrap();

    assert_eq!(
        fs::read_to_string(dir.path().join("a.log.tok")).unwrap(),
        "[10:00] <alice> <user> ?\n[10:05] <carol> yes\n"
    );
}
