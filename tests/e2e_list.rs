mod common;
use common::cli::{CacheWorkspace, SAMPLE_ISSUES, icache, run_icache};
use predicates::prelude::*;

#[test]
fn test_list_shows_only_open_issues() {
    let workspace = CacheWorkspace::new();
    workspace.write("issues.json", SAMPLE_ISSUES);

    let output = run_icache(&workspace, ["list", "--file", "issues.json"], "list");
    assert!(output.status.success(), "list failed: {}", output.stderr);
    assert!(output.stdout.contains("○ #2 [open] Add /health endpoint"));
    assert!(output.stdout.contains("◐ #3 [in_progress] Persist game state"));
    assert!(output.stdout.contains("#4 [open] Add achievements"));
    assert!(!output.stdout.contains("Bootstrap project"));
    assert!(output.stdout.contains("3 open issue(s)"));
}

#[test]
fn test_list_json_from_stdin() {
    let workspace = CacheWorkspace::new();

    let assert = icache(&workspace)
        .args(["list", "--json"])
        .write_stdin(SAMPLE_ISSUES)
        .assert()
        .success();
    let stdout = String::from_utf8_lossy(&assert.get_output().stdout).into_owned();
    let open: serde_json::Value = serde_json::from_str(&stdout).unwrap();

    let numbers: Vec<i64> = open
        .as_array()
        .unwrap()
        .iter()
        .map(|issue| issue["number"].as_i64().unwrap())
        .collect();
    assert_eq!(numbers, vec![2, 3, 4]);
    // Canonical number is added next to the existing alias.
    assert_eq!(open[2]["id"], 4);
}

#[test]
fn test_list_reads_jsonl() {
    let workspace = CacheWorkspace::new();
    workspace.write(
        "issues.jsonl",
        "{\"number\": 1, \"state\": \"closed\"}\n\n{\"issue_id\": 7, \"status\": \"Open\"}\n",
    );

    let output = run_icache(&workspace, ["list", "-f", "issues.jsonl"], "list_jsonl");
    assert!(output.status.success(), "list failed: {}", output.stderr);
    assert!(output.stdout.contains("#7 [open] (untitled)"));
    assert!(output.stdout.contains("1 open issue(s)"));
}

#[test]
fn test_list_empty_dump() {
    let workspace = CacheWorkspace::new();
    icache(&workspace)
        .arg("list")
        .write_stdin("[]")
        .assert()
        .success()
        .stdout(predicate::str::contains("No open issues."));
}

#[test]
fn test_list_reports_parse_error_line() {
    let workspace = CacheWorkspace::new();
    icache(&workspace)
        .arg("list")
        .write_stdin("{\"number\": 1}\nnot json\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Dump parse error at line 2"));
}

#[test]
fn test_missing_dump_file() {
    let workspace = CacheWorkspace::new();
    let output = run_icache(&workspace, ["list", "--file", "nope.json"], "missing");
    assert!(!output.status.success());
    assert!(output.stderr.contains("File not found"));
}
