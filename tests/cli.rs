use std::process::{Command, Output};

const TOKEN: &str = "eyJhbGciOiJIUzI1NiJ9.eyJzdWIiOiIxMjM0NTY3ODkwIn0.dGVzdA";

fn jwt_debug(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_jwt-debug"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run jwt-debug")
}

#[test]
fn test_missing_token_prints_usage() {
    let output = jwt_debug(&[]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Usage:"));
    assert!(stderr.contains("<token>"));
}

#[test]
fn test_valid_token_report() {
    let output = jwt_debug(&[TOKEN]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("🔍 JWT Token Analysis"));
    assert!(stdout.contains("\"alg\": \"HS256\""));
    assert!(stdout.contains("\"sub\": \"1234567890\""));
    assert!(stdout.contains("First 40 chars: dGVzdA\n"));
    assert!(stdout.contains("Length: 6 characters"));
}

#[test]
fn test_trailing_arguments_are_ignored() {
    let output = jwt_debug(&[TOKEN, "extra"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("\"sub\": \"1234567890\""));
    assert!(stdout.contains("Length: 6 characters"));
}

#[test]
fn test_invalid_format_still_exits_zero() {
    let output = jwt_debug(&["abc.def"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout, "❌ Invalid JWT format: expected 3 parts, got 2\n");
}

#[test]
fn test_bad_payload_exits_zero() {
    let output = jwt_debug(&["eyJhbGciOiJIUzI1NiJ9.*.sig"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("❌ Failed to decode payload: "));
    assert!(!stdout.contains("Signature:"));
}

#[test]
fn test_json_mode() {
    let output = jwt_debug(&["--json", TOKEN]);

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["header"]["alg"], "HS256");
    assert_eq!(value["signature"]["prefix"], "dGVzdA");
    assert_eq!(value["signature"]["truncated"], false);
}

#[test]
fn test_json_mode_error() {
    let output = jwt_debug(&["--json", "abc.def"]);

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["kind"], "format");
    assert_eq!(value["error"], "Invalid JWT format: expected 3 parts, got 2");
}
