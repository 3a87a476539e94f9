//! Basic CLI E2E tests.
//!
//! Tests invoke the built binary against a throwaway data directory.

use std::io::Write;
use std::path::Path;
use std::process::{Command, Stdio};

fn command(data_dir: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_brainflow"));
    cmd.env("BRAINFLOW_DATA_DIR", data_dir).env("BRAINFLOW_LOG", "off");
    cmd
}

/// Run a CLI command and return (stdout, stderr, exit code).
fn run_cli(data_dir: &Path, args: &[&str]) -> (String, String, i32) {
    let output = command(data_dir)
        .args(args)
        .output()
        .expect("Failed to execute CLI command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (stdout, stderr, code)
}

fn run_cli_with_stdin(data_dir: &Path, args: &[&str], input: &str) -> (String, i32) {
    let mut child = command(data_dir)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to spawn CLI command");
    child
        .stdin
        .take()
        .unwrap()
        .write_all(input.as_bytes())
        .unwrap();
    let output = child.wait_with_output().unwrap();
    (
        String::from_utf8_lossy(&output.stdout).to_string(),
        output.status.code().unwrap_or(-1),
    )
}

fn parse_json(json: &str) -> serde_json::Value {
    serde_json::from_str(json).expect("Failed to parse JSON output")
}

#[test]
fn test_extract_json() {
    let dir = tempfile::tempdir().unwrap();
    let (stdout, _, code) = run_cli(dir.path(), &["extract", "fix bug; update docs", "--json"]);
    assert_eq!(code, 0);
    assert_eq!(parse_json(&stdout), serde_json::json!(["fix bug", "update docs"]));
}

#[test]
fn test_extract_and_classify_leave_data_dir_untouched() {
    let dir = tempfile::tempdir().unwrap();
    run_cli(dir.path(), &["extract", "call mom"]);
    run_cli(dir.path(), &["classify", "check email"]);
    assert!(!dir.path().join("config.toml").exists());
    assert!(!dir.path().join("inbox.json").exists());
}

#[test]
fn test_extract_from_stdin() {
    let dir = tempfile::tempdir().unwrap();
    let (stdout, code) = run_cli_with_stdin(dir.path(), &["extract"], "- buy milk\n1. walk dog\n");
    assert_eq!(code, 0);
    assert_eq!(stdout, "1. buy milk\n2. walk dog\n");
}

#[test]
fn test_extract_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("dump.txt");
    std::fs::write(&file, "call mom\npay rent\n").unwrap();
    let (stdout, _, code) = run_cli(
        dir.path(),
        &["extract", "--file", file.to_str().unwrap(), "--json"],
    );
    assert_eq!(code, 0);
    assert_eq!(parse_json(&stdout), serde_json::json!(["call mom", "pay rent"]));
}

#[test]
fn test_classify_text_and_json() {
    let dir = tempfile::tempdir().unwrap();
    let (stdout, _, code) = run_cli(dir.path(), &["classify", "check", "email"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("Category:    LOW"));

    let (stdout, _, code) = run_cli(
        dir.path(),
        &["classify", "design a new caching architecture", "--json"],
    );
    assert_eq!(code, 0);
    let json = parse_json(&stdout);
    assert_eq!(json["category"], "DEEP");
    assert_eq!(json["confidence"], "high");
}

#[test]
fn test_classify_explain_includes_scores() {
    let dir = tempfile::tempdir().unwrap();
    let (stdout, _, code) = run_cli(
        dir.path(),
        &["classify", "file the documents", "--json", "--explain"],
    );
    assert_eq!(code, 0);
    let json = parse_json(&stdout);
    assert_eq!(json["category"], "NONE");
    assert_eq!(json["scores"]["none"], 1);
    assert_eq!(json["complexity"], "medium");
}

#[test]
fn test_classify_too_short_fails() {
    let dir = tempfile::tempdir().unwrap();
    let (stdout, stderr, code) = run_cli(dir.path(), &["classify", "hi", "--json"]);
    assert_eq!(code, 1);
    assert!(parse_json(&stdout)["error"].as_str().unwrap().contains("too short"));
    assert!(stderr.contains("error:"));
}

#[test]
fn test_dump_save_and_inbox_lifecycle() {
    let dir = tempfile::tempdir().unwrap();
    let (_, _, code) = run_cli(dir.path(), &["dump", "check email\nfile the documents", "--save"]);
    assert_eq!(code, 0);

    let (stdout, _, code) = run_cli(dir.path(), &["inbox", "list", "--json"]);
    assert_eq!(code, 0);
    let items = parse_json(&stdout);
    let items = items.as_array().unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["text"], "check email");
    assert_eq!(items[0]["category"], "LOW");

    let id = items[1]["id"].as_str().unwrap().to_string();
    let (_, _, code) = run_cli(dir.path(), &["inbox", "override", &id[..8], "deep"]);
    assert_eq!(code, 0);

    let (stdout, _, _) = run_cli(dir.path(), &["inbox", "list", "--json", "--category", "DEEP"]);
    let deep = parse_json(&stdout);
    assert_eq!(deep.as_array().unwrap().len(), 1);
    assert_eq!(deep[0]["overridden"], true);
    assert_eq!(deep[0]["confidence"], serde_json::Value::Null);
    assert_eq!(deep[0]["explanation"], "Set manually to DEEP (Deep Focus).");

    let (_, _, code) = run_cli(dir.path(), &["inbox", "remove", &id]);
    assert_eq!(code, 0);
    let (stdout, _, code) = run_cli(dir.path(), &["inbox", "clear"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("Removed 1 item(s)"));
}

#[test]
fn test_inbox_override_unknown_id_fails() {
    let dir = tempfile::tempdir().unwrap();
    let (_, stderr, code) = run_cli(dir.path(), &["inbox", "override", "nope", "LOW"]);
    assert_eq!(code, 1);
    assert!(stderr.contains("No inbox item matches 'nope'"));
}

#[test]
fn test_config_get_set_reset() {
    let dir = tempfile::tempdir().unwrap();
    let (stdout, _, code) = run_cli(dir.path(), &["config", "get", "extractor.dedupe"]);
    assert_eq!(code, 0);
    assert_eq!(stdout.trim(), "true");

    let (_, _, code) = run_cli(dir.path(), &["config", "set", "extractor.dedupe", "false"]);
    assert_eq!(code, 0);
    let (stdout, _, code) = run_cli(
        dir.path(),
        &["extract", "call mom\ncall mom please", "--json"],
    );
    assert_eq!(code, 0);
    assert_eq!(parse_json(&stdout), serde_json::json!(["call mom", "call mom please"]));

    let (_, _, code) = run_cli(dir.path(), &["config", "set", "extractor.dedupe", "maybe"]);
    assert_eq!(code, 1);
    let (_, _, code) = run_cli(dir.path(), &["config", "get", "nope.key"]);
    assert_eq!(code, 1);

    let (stdout, _, code) = run_cli(dir.path(), &["config", "list"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("extractor.aggressive_fallback = true"));
    assert!(stdout.contains("extractor.dedupe = false"));
    assert!(stdout.contains("logging.level = warn"));

    let (_, _, code) = run_cli(dir.path(), &["config", "reset"]);
    assert_eq!(code, 0);
    let (stdout, _, _) = run_cli(dir.path(), &["config", "get", "extractor.dedupe"]);
    assert_eq!(stdout.trim(), "true");
}

#[test]
fn test_completions() {
    let dir = tempfile::tempdir().unwrap();
    let (stdout, _, code) = run_cli(dir.path(), &["completions", "bash"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("brainflow"));
}
