use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

fn exec(email: &str, password: &str) -> assert_cmd::Command {
    let mut cmd = cargo_bin_cmd!("signin");
    cmd.args([
        "exec",
        "--email",
        email,
        "--password",
        password,
        "--virtual-clock",
    ])
    .env_remove("SIGNIN_LOG");
    cmd
}

#[test]
fn test_accepted_credentials_succeed() {
    exec("kumar@combine.com", "12345")
        .assert()
        .success()
        .stdout(predicate::str::contains("login_enabled: true"))
        .stdout(predicate::str::contains("-> loading"))
        .stdout(predicate::str::contains("status: succeeded"));
}

#[test]
fn test_wrong_password_fails_with_exit_code_1() {
    exec("kumar@combine.com", "wrong")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("status: failed"))
        .stderr(predicate::str::contains("invalid email or password"));
}

#[test]
fn test_invalid_email_is_not_submitted() {
    exec("not-an-email", "12345")
        .assert()
        .success()
        .stdout(predicate::str::contains("email_valid: false"))
        .stdout(predicate::str::contains("login_enabled: false"))
        .stdout(predicate::str::contains("not submitted"))
        .stdout(predicate::str::contains("status: idle"))
        .stdout(predicate::str::contains("->").not());
}

#[test]
fn test_short_password_is_not_submitted() {
    exec("kumar@combine.com", "1234")
        .assert()
        .success()
        .stdout(predicate::str::contains("password_valid: false"))
        .stdout(predicate::str::contains("status: idle"));
}

#[test]
fn test_json_report() {
    let output = exec("kumar@combine.com", "12345")
        .arg("--json")
        .output()
        .unwrap();
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["email"], "kumar@combine.com");
    assert_eq!(report["validation"]["login_enabled"], true);
    assert_eq!(report["submitted"], true);
    assert_eq!(
        report["transitions"],
        serde_json::json!(["loading", "succeeded"])
    );
    assert_eq!(report["status"], "succeeded");
    assert!(report.get("password").is_none());
}

#[test]
fn test_json_report_on_failure() {
    let output = exec("kumar@combine.com", "wrong")
        .arg("--json")
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["status"], "failed");
}

#[test]
fn test_debug_logs_go_to_stderr_without_password() {
    exec("kumar@combine.com", "s3cr3t-pw")
        .env("SIGNIN_LOG", "debug")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("login submitted"))
        .stderr(predicate::str::contains("s3cr3t-pw").not())
        .stdout(predicate::str::contains("s3cr3t-pw").not());
}

#[test]
fn test_invalid_log_filter_is_reported() {
    exec("kumar@combine.com", "12345")
        .env("SIGNIN_LOG", "signin=notalevel")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("SIGNIN_LOG"));
}

#[test]
fn test_real_clock_waits_for_login_delay() {
    let started = std::time::Instant::now();
    cargo_bin_cmd!("signin")
        .args(["exec", "--email", "kumar@combine.com", "--password", "12345"])
        .env_remove("SIGNIN_LOG")
        .assert()
        .success()
        .stdout(predicate::str::contains("status: succeeded"));
    assert!(started.elapsed() >= std::time::Duration::from_secs(3));
}

#[test]
fn test_default_logs_leave_out_email() {
    exec("kumar@combine.com", "12345")
        .assert()
        .success()
        .stderr(predicate::str::contains("login submitted"))
        .stderr(predicate::str::contains("kumar@combine.com").not());
}

#[test]
fn test_log_file_redirects_exec_logs() {
    let dir = tempfile::tempdir().unwrap();
    let log = dir.path().join("exec.log");

    exec("kumar@combine.com", "12345")
        .arg("--log-file")
        .arg(&log)
        .assert()
        .success()
        .stdout(predicate::str::contains("status: succeeded"))
        .stderr(predicate::str::contains("login submitted").not());

    let contents = std::fs::read_to_string(&log).unwrap();
    assert!(contents.contains("login submitted"));
    assert!(contents.contains("login attempt resolved"));
}

#[test]
fn test_log_file_accepted_before_subcommand() {
    let dir = tempfile::tempdir().unwrap();
    let log = dir.path().join("exec.log");

    cargo_bin_cmd!("signin")
        .arg("--log-file")
        .arg(&log)
        .args([
            "exec",
            "--email",
            "kumar@combine.com",
            "--password",
            "12345",
            "--virtual-clock",
        ])
        .env_remove("SIGNIN_LOG")
        .assert()
        .success()
        .stderr(predicate::str::contains("login submitted").not());

    let contents = std::fs::read_to_string(&log).unwrap();
    assert!(contents.contains("login submitted"));
}
