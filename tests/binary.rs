use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_binary_is_silent_on_stdout() {
    Command::cargo_bin("reference-count-sample")
        .unwrap()
        .env_remove("RUST_LOG")
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_binary_logs_results_when_enabled() {
    Command::cargo_bin("reference-count-sample")
        .unwrap()
        .env("RUST_LOG", "info")
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("result5: 42"));
}
