use integration_tests::harness::LogDir;
use irctok_core::cli::run;
use irctok_core::logging::init_logging;
use std::fs;

/// The progress log is appended to as JSON lines, one per progress event
#[test]
fn progress_log_appends_json_lines() {
    // Arrange
    let logs = LogDir::new();
    let good = logs.write("good.log", "[10:00] <alicia> hi\n");
    let missing = logs.path().join("missing.log");
    let config = logs.run_config(vec![missing, good]);
    fs::write(&config.progress_log, "earlier run\n").unwrap();

    init_logging(&config.progress_log).expect("logging init failed");

    // Act
    run(&config).expect("run failed");

    // Assert
    let contents = fs::read_to_string(&config.progress_log).unwrap();
    let lines: Vec<&str> = contents.lines().collect();

    assert_eq!(lines[0], "earlier run");
    // running, processing, failed, processing, finished
    assert_eq!(lines.len(), 6, "unexpected progress log:\n{contents}");
    assert!(lines[1].contains("\"message\":\"running\""));
    assert!(lines[3].contains("\"message\":\"failed\""));
    assert!(lines[3].contains("\"level\":\"ERROR\""));
    assert!(lines[5].contains("\"message\":\"finished\""));
    assert!(lines[1..].iter().all(|line| line.starts_with('{')));
}
