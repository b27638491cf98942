use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

/// Clears the GitHub Actions environment so tests behave the same in CI.
fn clean_cmd() -> assert_cmd::Command {
    let mut cmd = cargo_bin_cmd!("fwdport");
    cmd.env_remove("GITHUB_REPOSITORY")
        .env_remove("GITHUB_EVENT_PATH")
        .env_remove("GITHUB_TOKEN");
    cmd
}

#[test]
fn test_version() {
    clean_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("fwdport"));
}

#[test]
fn test_help_names_all_arguments() {
    clean_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--repository"))
        .stdout(predicate::str::contains("--event-path"))
        .stdout(predicate::str::contains("--token"));
}

#[test]
fn test_missing_arguments_fail_with_usage() {
    clean_cmd()
        .assert()
        .failure()
        .code(predicate::eq(2))
        .stderr(predicate::str::contains("--repository"));
}

#[test]
fn test_unknown_flag_rejected() {
    clean_cmd()
        .arg("--frobnicate")
        .assert()
        .failure()
        .code(predicate::eq(2));
}

#[test]
fn test_missing_event_file_fails() {
    clean_cmd()
        .arg("--repository")
        .arg("octo-org/widgets")
        .arg("--event-path")
        .arg("/nonexistent/event.json")
        .arg("--token")
        .arg("test-token")
        .assert()
        .failure()
        .stderr(predicate::str::contains("event payload"));
}
