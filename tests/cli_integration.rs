//! CLI Integration Tests
//!
//! These tests verify that the CLI commands work correctly end-to-end.
//! They test the actual binary behavior, not just the library.
//!
//! Run with:
//! ```bash
//! cargo test --test cli_integration
//! ```

use std::path::PathBuf;
use std::process::Command;
use tempfile::tempdir;

/// Get the path to the built binary
fn bloburl_binary() -> PathBuf {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("target");
    path.push("debug");
    path.push("bloburl");
    path
}

/// Run bloburl command and return (stdout, stderr, success)
fn run_bloburl(args: &[&str]) -> (String, String, bool) {
    let output = Command::new(bloburl_binary())
        .args(["-f", "json"])
        .args(args)
        .output()
        .expect("Failed to execute bloburl");

    (
        String::from_utf8_lossy(&output.stdout).to_string(),
        String::from_utf8_lossy(&output.stderr).to_string(),
        output.status.success(),
    )
}

// ============================================================================
// Encode Tests
// ============================================================================

#[test]
fn test_cli_encode_text_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("hello.txt");
    std::fs::write(&path, "hello world").unwrap();

    let (stdout, _stderr, success) = run_bloburl(&["encode", path.to_str().unwrap()]);

    assert!(success, "encode should succeed");
    let value: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(value["status"], "ok");
    assert_eq!(value["name"], "hello.txt");
    assert_eq!(value["size"], 11);
    assert_eq!(value["type"], "text/plain");
    assert_eq!(value["locator"], "data:text/plain;base64,aGVsbG8gd29ybGQ=");
}

#[test]
fn test_cli_encode_explicit_content_type() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("hello.txt");
    std::fs::write(&path, "hello world").unwrap();

    let (stdout, _stderr, success) = run_bloburl(&[
        "encode",
        path.to_str().unwrap(),
        "--content-type",
        "application/plain-text",
    ]);

    assert!(success);
    let value: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(
        value["locator"],
        "data:application/plain-text;base64,aGVsbG8gd29ybGQ="
    );
}

#[test]
fn test_cli_encode_unknown_extension_falls_back() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("blob.xyz");
    std::fs::write(&path, [1u8, 2, 3]).unwrap();

    let (stdout, _stderr, success) = run_bloburl(&["encode", path.to_str().unwrap()]);

    assert!(success);
    let value: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(value["type"], "application/octet-stream");
    assert_eq!(value["size"], 3);
}

#[test]
fn test_cli_encode_missing_file_fails() {
    let (_stdout, _stderr, success) = run_bloburl(&["encode", "/nonexistent/file.txt"]);
    assert!(!success, "encode of a missing file should fail");
}

// ============================================================================
// Decode Tests
// ============================================================================

#[test]
fn test_cli_decode_to_file() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("out.bin");

    let (stdout, _stderr, success) = run_bloburl(&[
        "decode",
        "data:application/plain-text;base64,aGVsbG8gd29ybGQ=",
        "-o",
        out.to_str().unwrap(),
    ]);

    assert!(success, "decode should succeed");
    let value: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(value["status"], "ok");
    assert_eq!(value["size"], 11);
    assert_eq!(value["type"], "application/plain-text");

    assert_eq!(std::fs::read(&out).unwrap(), b"hello world");
}

#[test]
fn test_cli_decode_metadata_only() {
    let (stdout, _stderr, success) = run_bloburl(&["decode", "data:;base64,aGk="]);

    assert!(success);
    let value: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(value["size"], 2);
    assert_eq!(value["type"], "");
    assert!(value["written"].is_null());
}

#[test]
fn test_cli_decode_invalid_locator_fails() {
    let (_stdout, stderr, success) = run_bloburl(&["decode", "blob:not-a-data-uri"]);
    assert!(!success, "decode of a token locator should fail");
    assert!(stderr.contains("Invalid locator"), "stderr was: {}", stderr);
}

// ============================================================================
// Inspect Tests
// ============================================================================

#[test]
fn test_cli_inspect() {
    let (stdout, _stderr, success) =
        run_bloburl(&["inspect", "data:text/plain;base64,aGVsbG8gd29ybGQ="]);

    assert!(success);
    let value: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(value["type"], "text/plain");
    assert_eq!(value["size"], 11);
}

// ============================================================================
// Round-trip Tests
// ============================================================================

#[test]
fn test_cli_encode_decode_roundtrip() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("data.bin");
    let output = dir.path().join("restored.bin");
    let payload: Vec<u8> = (0u8..=255).collect();
    std::fs::write(&input, &payload).unwrap();

    let (stdout, _stderr, success) = run_bloburl(&["encode", input.to_str().unwrap()]);
    assert!(success);
    let value: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    let locator = value["locator"].as_str().unwrap();

    let (_stdout, _stderr, success) =
        run_bloburl(&["decode", locator, "-o", output.to_str().unwrap()]);
    assert!(success);

    assert_eq!(std::fs::read(&output).unwrap(), payload);
}
