use integration_tests::harness::LogDir;
use irctok_core::cli::{RunSummary, TokenizeArgs, run};
use pretty_assertions::assert_eq;

const CHANNEL_LOG: &str = "channel.log";

/// Default options keep the header and real names, and split URLs and paths
#[test]
fn tokenizes_fixture_log_with_defaults() {
    // Arrange
    let logs = LogDir::new();
    let input = logs.copy_fixture(CHANNEL_LOG);
    let config = logs.run_config(vec![input.clone()]);

    // Act
    let summary = run(&config).expect("run failed");

    // Assert
    assert_eq!(
        summary,
        RunSummary {
            processed: 1,
            failed: 0,
            lines: 4
        }
    );
    assert_eq!(
        logs.output_for(&input),
        "=== alice is now known as alicia\n\
         [10:00] <alicia> hey bob , check URL/http:/ URL/example.com/ URL/docs/install.html/\n\
         [10:01] <bobby> alicia : thanks !\n\
         [10:02] <bobby> it 's in DIR/~/ DIR/src/ DIR/app/\n"
    );
}

/// Settings from an HCL file apply when the command line leaves them unset
#[test]
fn config_file_supplies_options_and_suffix() {
    // Arrange
    let logs = LogDir::new();
    let input = logs.copy_fixture(CHANNEL_LOG);
    let config_path = logs.copy_fixture("irctok.hcl");

    let args = TokenizeArgs {
        config: Some(config_path),
        progress_log: Some(logs.path().join("progress.txt")),
        raw_data: vec![input.clone()],
        ..Default::default()
    };

    // Act
    let config = args.resolve().expect("config should resolve");
    run(&config).expect("run failed");

    // Assert
    assert!(config.options.cut_timestamp);
    assert!(config.options.replace_usernames);
    assert_eq!(
        logs.output_for(&input),
        "alice is now known as <user>\n\
         <alicia> hey bob , check URL/http:/ URL/example.com/ URL/docs/install.html/\n\
         <bobby> <user> : thanks !\n\
         <bobby> it 's in DIR/~/ DIR/src/ DIR/app/\n"
    );
}

/// Tokens outside the vocabulary collapse to their shape class; headers and
/// known users are left alone
#[test]
fn vocabulary_replaces_unknown_tokens() {
    // Arrange
    let logs = LogDir::new();
    let input = logs.copy_fixture(CHANNEL_LOG);
    let mut config = logs.run_config(vec![input.clone()]);
    config.vocab = Some(logs.copy_fixture("vocab.txt"));

    // Act
    run(&config).expect("run failed");

    // Assert
    assert_eq!(
        logs.output_for(&input),
        "=== <unka> <unka> <unka> <unka> <unka> alicia\n\
         [10:00] <alicia> hey <unka> <unk,> check <unka/:> <unka./> <unka./>\n\
         [10:01] <bobby> alicia <unk:> thanks !\n\
         [10:02] <bobby> <unka> <unka'> in <unka/~> <unka/> <unka/>\n"
    );
}

/// Lines without a timestamp header pass through untouched
#[test]
fn edit_messages_only_keeps_server_notices() {
    // Arrange
    let logs = LogDir::new();
    let input = logs.copy_fixture(CHANNEL_LOG);
    let mut config = logs.run_config(vec![input.clone()]);
    config.options.edit_messages_only = true;
    config.options.cut_username = true;
    config.options.add_line_boundaries = true;

    // Act
    run(&config).expect("run failed");

    // Assert
    let output = logs.output_for(&input);
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines[0], "=== alice is now known as alicia");
    assert_eq!(lines[2], "<s> [10:01] alicia : thanks ! </s>");
}

/// Each input gets its own output and one bad input does not stop the others
#[test]
fn every_input_gets_its_own_output() {
    // Arrange
    let logs = LogDir::new();
    let first = logs.write("first.log", "[09:00] <carol> Morning all\n");
    let missing = logs.path().join("missing.log");
    let second = logs.write("second.log", "[09:05] <dave> carol: coffee?\n");
    let config = logs.run_config(vec![first.clone(), missing.clone(), second.clone()]);

    // Act
    let summary = run(&config).expect("run failed");

    // Assert
    assert_eq!(summary.processed, 2);
    assert_eq!(summary.failed, 1);
    assert_eq!(logs.output_for(&first), "[09:00] <carol> morning all\n");
    // carol spoke in another file, so is not a known user here
    assert_eq!(logs.output_for(&second), "[09:05] <dave> carol : coffee ?\n");
    assert!(!logs.path().join("missing.log.tok").exists());
}

/// A nick mentioned before its owner first speaks is only resolved when the
/// whole log is scanned up front
#[test]
fn users_from_future_resolves_forward_mentions() {
    // Arrange
    let logs = LogDir::new();
    let contents = "[09:00] <erin> ping frank\n[09:01] <frank> pong\n";
    let streaming = logs.write("streaming.log", contents);
    let prepass = logs.write("prepass.log", contents);

    let mut streaming_config = logs.run_config(vec![streaming.clone()]);
    streaming_config.options.replace_usernames = true;
    let mut prepass_config = logs.run_config(vec![prepass.clone()]);
    prepass_config.options.replace_usernames = true;
    prepass_config.options.users_from_future = true;

    // Act
    run(&streaming_config).expect("run failed");
    run(&prepass_config).expect("run failed");

    // Assert
    assert_eq!(
        logs.output_for(&streaming),
        "[09:00] <erin> ping frank\n[09:01] <frank> pong\n"
    );
    assert_eq!(
        logs.output_for(&prepass),
        "[09:00] <erin> ping <user>\n[09:01] <frank> pong\n"
    );
}
