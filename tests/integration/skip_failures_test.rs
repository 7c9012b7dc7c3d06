//! Integration tests for per-file failure containment

use std::fs;
use std::process::Command;

use tempfile::tempdir;

fn run_jsonsubst(args: &[&str]) -> (String, String, bool) {
    let output = Command::new(env!("CARGO_BIN_EXE_jsonsubst"))
        .args(args)
        .output()
        .expect("Failed to run jsonsubst");

    let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
    let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
    (stdout, stderr, output.status.success())
}

#[test]
fn test_failing_file_is_skipped_and_run_completes() {
    let root = tempdir().unwrap();

    // Invalid UTF-8 makes the read fail for this file only
    fs::write(root.path().join("bad.json"), [0xffu8, 0xfe, 0x7b, 0x7d]).unwrap();
    fs::write(root.path().join("good.json"), "{\"k\": \"old\"}").unwrap();

    let (stdout, stderr, success) =
        run_jsonsubst(&[root.path().to_str().unwrap(), "old", "new"]);

    // Per-file errors never escalate; the run still exits successfully
    assert!(success);
    assert!(stderr.contains("bad.json"), "stderr: {}", stderr);
    assert!(stdout.contains("good.json"), "stdout: {}", stdout);
    assert_eq!(
        fs::read_to_string(root.path().join("good.json")).unwrap(),
        "{\"k\": \"new\"}"
    );
}

#[test]
fn test_oversized_file_is_skipped_with_limit() {
    let root = tempdir().unwrap();

    fs::write(root.path().join("big.json"), "x".repeat(8192)).unwrap();
    fs::write(root.path().join("small.json"), "{\"k\": \"old\"}").unwrap();

    let (_stdout, stderr, success) = run_jsonsubst(&[
        root.path().to_str().unwrap(),
        "old",
        "new",
        "--memory-limit",
        "4KB",
    ]);

    assert!(success);
    assert!(stderr.contains("File too large"), "stderr: {}", stderr);
    assert_eq!(
        fs::read_to_string(root.path().join("small.json")).unwrap(),
        "{\"k\": \"new\"}"
    );
    // The oversized file was refused before any read or write
    assert_eq!(
        fs::metadata(root.path().join("big.json")).unwrap().len(),
        8192
    );
}
