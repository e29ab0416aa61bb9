//! Integration tests for top-level CLI behavior.

use std::process::Command;

fn run_forgeid(args: &[&str]) -> std::process::Output {
    let bin = env!("CARGO_BIN_EXE_forgeid");
    Command::new(bin)
        .args(args)
        .env_remove("FORGEID_RECORD")
        .env_remove("FORGEID_REPLAY")
        .env("FORGEID_SECRET", "unit-test-secret")
        .output()
        .expect("failed to run forgeid binary")
}

fn stdout_lines(output: &std::process::Output) -> Vec<String> {
    String::from_utf8_lossy(&output.stdout).lines().map(str::to_string).collect()
}

#[test]
fn generate_then_verify_round_trips() {
    let output = run_forgeid(&["generate", "--prefix", "TRX", "--style", "dash", "--count", "3"]);
    assert!(output.status.success());
    let ids = stdout_lines(&output);
    assert_eq!(ids.len(), 3);
    assert!(ids.iter().all(|id| id.starts_with("TRX-")));

    let mut args = vec!["verify"];
    args.extend(ids.iter().map(String::as_str));
    let output = run_forgeid(&args);
    assert!(output.status.success());
    assert!(stdout_lines(&output).iter().all(|line| line.starts_with("valid\t")));
}

#[test]
fn verify_with_wrong_secret_fails() {
    let output = run_forgeid(&["generate"]);
    let id = stdout_lines(&output).remove(0);

    let output = run_forgeid(&["--secret", "other", "verify", &id]);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!output.status.success());
    assert!(stderr.contains("1 of 1 identifiers failed verification"));
}

#[test]
fn format_regroups_body() {
    let output = run_forgeid(&["format", "TRX-abcdefghijklmn", "--style", "space"]);
    assert!(output.status.success());
    assert_eq!(stdout_lines(&output), vec!["TRX-abcdef ghijkl mn"]);
}

#[test]
fn zero_growth_interval_is_rejected() {
    let output = run_forgeid(&["--growth-interval", "0", "generate"]);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!output.status.success());
    assert!(stderr.contains("growth interval must be at least 1 year"));
}

#[test]
fn stress_json_reports_clean_run() {
    let output = run_forgeid(&["stress", "--total", "500", "--step", "250", "--json"]);
    assert!(output.status.success());
    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["total"], 500);
    assert_eq!(report["duplicates"], 0);
    assert_eq!(report["invalid"], 0);
    assert_eq!(report["checkpoints"].as_array().unwrap().len(), 2);
}

#[test]
fn help_succeeds() {
    let output = run_forgeid(&["--help"]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success());
    assert!(stdout.contains("generate"));
    assert!(stdout.contains("--secret"));
}

#[test]
fn invalid_subcommand_exits_with_error() {
    let output = run_forgeid(&["nonsense"]);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!output.status.success());
    assert!(stderr.contains("unrecognized subcommand"));
}
