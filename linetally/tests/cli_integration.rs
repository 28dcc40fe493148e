//! Integration tests for linetally CLI

use std::fs;
use std::path::Path;
use std::process::Command;

fn run_linetally(args: &[&str]) -> (String, String, bool) {
    let mut cmd_args = vec!["run", "-p", "linetally", "--"];
    cmd_args.extend(args);

    let output = Command::new("cargo")
        .args(&cmd_args)
        .current_dir(env!("CARGO_MANIFEST_DIR").to_string() + "/..")
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let success = output.status.success();

    (stdout, stderr, success)
}

/// The reference tree: a.txt (3 newlines), b.txt (0), sub/c.log (5).
fn create_scenario_tree(dir: &Path) {
    fs::create_dir_all(dir.join("sub")).unwrap();
    fs::write(dir.join("a.txt"), "one\ntwo\nthree\n").unwrap();
    fs::write(dir.join("b.txt"), "no newline at all").unwrap();
    fs::write(dir.join("sub/c.log"), "1\n2\n3\n4\n5\n").unwrap();
}

#[test]
fn test_cli_help() {
    let (stdout, _, success) = run_linetally(&["--help"]);

    assert!(success);
    assert!(stdout.contains("linetally"));
    assert!(stdout.contains("--pattern"));
    assert!(stdout.contains("--exclude"));
    assert!(stdout.contains("--group-by"));
    assert!(stdout.contains("--buffer-length"));
    assert!(stdout.contains("--threads"));
    assert!(stdout.contains("--output"));
}

#[test]
fn test_cli_version() {
    let (stdout, _, success) = run_linetally(&["--version"]);

    assert!(success);
    assert!(stdout.contains("linetally"));
}

#[test]
fn test_table_output() {
    let temp = tempfile::tempdir().unwrap();
    create_scenario_tree(temp.path());

    let (stdout, _, success) = run_linetally(&[temp.path().to_str().unwrap()]);

    assert!(success);
    // Preliminary echo lines
    assert!(stdout.contains("Scanning: "));
    assert!(stdout.contains("Pattern: **"));
    assert!(stdout.contains("Files found: 3"));
    // Table headers and footer
    assert!(stdout.contains("Extension"));
    assert!(stdout.contains("Files"));
    assert!(stdout.contains("Lines"));
    assert!(stdout.contains("Total (3 files)"));
    // 5 lines in .log beat 3 lines in .txt
    let log_pos = stdout.find(".log").unwrap();
    let txt_pos = stdout.find(".txt").unwrap();
    assert!(log_pos < txt_pos);
}

#[test]
fn test_exclude_pattern_removes_group() {
    let temp = tempfile::tempdir().unwrap();
    create_scenario_tree(temp.path());

    let (stdout, _, success) = run_linetally(&[
        temp.path().to_str().unwrap(),
        "--exclude",
        "**/*.log",
    ]);

    assert!(success);
    assert!(stdout.contains("Files found: 2"));
    assert!(!stdout.contains(".log"));
    assert!(stdout.contains(".txt"));
}

#[test]
fn test_group_by_directory() {
    let temp = tempfile::tempdir().unwrap();
    create_scenario_tree(temp.path());

    let (stdout, _, success) = run_linetally(&[
        temp.path().to_str().unwrap(),
        "--group-by",
        "directory",
    ]);

    assert!(success);
    assert!(stdout.contains("Directory"));
    assert!(stdout.contains("sub"));
    assert!(stdout.contains("Total (3 files)"));
}

#[test]
fn test_json_output() {
    let temp = tempfile::tempdir().unwrap();
    create_scenario_tree(temp.path());

    let (stdout, _, success) = run_linetally(&[
        temp.path().to_str().unwrap(),
        "--output",
        "json",
    ]);

    assert!(success);

    // The echo lines precede the JSON document
    let json_start = stdout.find('[').expect("no JSON array in output");
    let rows: serde_json::Value =
        serde_json::from_str(&stdout[json_start..]).expect("Invalid JSON output");

    let rows = rows.as_array().unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["group"], ".log");
    assert_eq!(rows[0]["files"], 1);
    assert_eq!(rows[0]["lines"], 5);
    assert_eq!(rows[1]["group"], ".txt");
    assert_eq!(rows[1]["files"], 2);
    assert_eq!(rows[1]["lines"], 3);
}

#[test]
fn test_threads_flag_keeps_results() {
    let temp = tempfile::tempdir().unwrap();
    create_scenario_tree(temp.path());

    let (single, _, _) = run_linetally(&[temp.path().to_str().unwrap(), "--output", "json"]);
    let (pooled, _, success) = run_linetally(&[
        temp.path().to_str().unwrap(),
        "--threads",
        "8",
        "--output",
        "json",
    ]);

    assert!(success);
    let start = single.find('[').unwrap();
    let pooled_start = pooled.find('[').unwrap();
    assert_eq!(&single[start..], &pooled[pooled_start..]);
}

#[test]
fn test_invalid_path() {
    let (_, stderr, success) = run_linetally(&["/nonexistent/path"]);

    assert!(!success);
    assert!(stderr.contains("Error:"));
}

#[test]
fn test_invalid_pattern() {
    let (_, stderr, success) = run_linetally(&[".", "--pattern", "[invalid"]);

    assert!(!success);
    assert!(stderr.contains("Error:"));
}

#[test]
fn test_invalid_grouping_rejected() {
    let (_, _, success) = run_linetally(&[".", "--group-by", "size"]);

    assert!(!success);
}

#[test]
fn test_zero_buffer_rejected() {
    let (_, _, success) = run_linetally(&[".", "--buffer-length", "0"]);

    assert!(!success);
}
