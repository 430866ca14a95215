use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

#[test]
fn test_help_shows_exec() {
    cargo_bin_cmd!("signin")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("exec"))
        .stdout(predicate::str::contains("--log-file"));
}

#[test]
fn test_exec_help_shows_flags() {
    cargo_bin_cmd!("signin")
        .args(["exec", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--email"))
        .stdout(predicate::str::contains("--password"))
        .stdout(predicate::str::contains("--json"))
        .stdout(predicate::str::contains("--virtual-clock"))
        .stdout(predicate::str::contains("--log-file"));
}

#[test]
fn test_version_flag() {
    cargo_bin_cmd!("signin")
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("0.1.0"));
}

#[test]
fn test_exec_requires_credentials() {
    cargo_bin_cmd!("signin")
        .args(["exec", "--email", "kumar@combine.com"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--password"));
}
