//! Integration tests for the binary's tree replacement surface

use std::fs::{self, File};
use std::io::Write;
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
fn test_tree_replacement_reports_modified_files() {
    let root = tempdir().unwrap();
    let nested = root.path().join("sub");
    fs::create_dir_all(&nested).unwrap();

    let hit = root.path().join("hit.json");
    let mut f1 = File::create(&hit).unwrap();
    write!(f1, "{{\"name\": \"Alice\"}}").unwrap();

    let miss = nested.join("miss.json");
    let mut f2 = File::create(&miss).unwrap();
    write!(f2, "{{\"name\": \"Bob\"}}").unwrap();

    let other = nested.join("ignored.txt");
    let mut f3 = File::create(&other).unwrap();
    write!(f3, "Alice").unwrap();

    let (stdout, _stderr, success) =
        run_jsonsubst(&[root.path().to_str().unwrap(), "Alice", "Carol"]);

    assert!(success);
    assert!(stdout.contains("Found 2 JSON files"), "stdout: {}", stdout);
    assert!(
        stdout.contains(&format!("replaced: {}", hit.display())),
        "stdout: {}",
        stdout
    );
    assert!(
        !stdout.contains(&format!("replaced: {}", miss.display())),
        "stdout: {}",
        stdout
    );

    assert_eq!(
        fs::read_to_string(&hit).unwrap(),
        "{\"name\": \"Carol\"}"
    );
    assert_eq!(fs::read_to_string(&miss).unwrap(), "{\"name\": \"Bob\"}");
    // Non-JSON files are never touched
    assert_eq!(fs::read_to_string(&other).unwrap(), "Alice");
}

#[test]
fn test_quiet_mode_suppresses_report_lines() {
    let root = tempdir().unwrap();
    fs::write(root.path().join("a.json"), "{\"k\": \"old\"}").unwrap();

    let (stdout, _stderr, success) =
        run_jsonsubst(&[root.path().to_str().unwrap(), "old", "new", "--quiet"]);

    assert!(success);
    assert!(stdout.is_empty(), "stdout: {}", stdout);
    assert_eq!(
        fs::read_to_string(root.path().join("a.json")).unwrap(),
        "{\"k\": \"new\"}"
    );
}

#[test]
fn test_stats_block_is_printed_on_request() {
    let root = tempdir().unwrap();
    fs::write(root.path().join("a.json"), "{\"k\": \"old\"}").unwrap();

    let (stdout, _stderr, success) =
        run_jsonsubst(&[root.path().to_str().unwrap(), "old", "new", "--stats"]);

    assert!(success);
    assert!(stdout.contains("Run Statistics:"), "stdout: {}", stdout);
    assert!(stdout.contains("Files replaced: 1"), "stdout: {}", stdout);
}

#[test]
fn test_missing_root_is_a_fatal_error() {
    let (_stdout, stderr, success) = run_jsonsubst(&["/no/such/root", "a", "b"]);

    assert!(!success);
    assert!(
        stderr.contains("not a traversable directory"),
        "stderr: {}",
        stderr
    );
}

#[test]
fn test_empty_search_text_is_a_fatal_error() {
    let root = tempdir().unwrap();
    let (_stdout, stderr, success) = run_jsonsubst(&[root.path().to_str().unwrap(), "", "b"]);

    assert!(!success);
    assert!(
        stderr.contains("Search text must not be empty"),
        "stderr: {}",
        stderr
    );
}
