use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn write_edges(dir: &TempDir, name: &str, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn test_sort_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_edges(&temp_dir, "graph1.txt", "a -> b c d\nc -> d\n");

    let mut cmd = Command::cargo_bin("topo").unwrap();
    cmd.arg("sort").arg(&path);
    cmd.assert().success().stdout("a c d b\n");
}

#[test]
fn test_sort_two_components_from_stdin() {
    let mut cmd = Command::cargo_bin("topo").unwrap();
    cmd.arg("sort");
    cmd.write_stdin("a -> b c d\nc -> d\ne -> g f q\n");
    cmd.assert().success().stdout("e q f g a c d b\n");
}

#[test]
fn test_sort_dash_reads_stdin() {
    let mut cmd = Command::cargo_bin("topo").unwrap();
    cmd.args(["sort", "-", "--separator", ","]);
    cmd.write_stdin("a -> b\nb -> c\n");
    cmd.assert().success().stdout("a,b,c\n");
}

#[test]
fn test_sort_json() {
    let mut cmd = Command::cargo_bin("topo").unwrap();
    cmd.args(["sort", "--json"]);
    cmd.write_stdin("a -> b c\nb -> d\nc -> d\n");

    let output = cmd.assert().success().get_output().stdout.clone();
    let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(value["nodes"], 4);
    assert_eq!(value["order"][0], "a");
    assert_eq!(value["order"][3], "d");
}

#[test]
fn test_sort_cycle_fails() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_edges(
        &temp_dir,
        "graph3.txt",
        "a -> b c d\nc -> d e\ne -> g f q\ng -> c\n",
    );

    let mut cmd = Command::cargo_bin("topo").unwrap();
    cmd.arg("sort").arg(&path);
    cmd.assert()
        .failure()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("cycle detected"));
}

#[test]
fn test_sort_empty_input() {
    let mut cmd = Command::cargo_bin("topo").unwrap();
    cmd.arg("sort");
    cmd.write_stdin("");
    cmd.assert().success().stdout("\n");
}

#[test]
fn test_check() {
    let mut cmd = Command::cargo_bin("topo").unwrap();
    cmd.arg("check");
    cmd.write_stdin("a -> b\n");
    cmd.assert().success().stdout(predicate::str::contains("acyclic"));

    let mut cmd = Command::cargo_bin("topo").unwrap();
    cmd.arg("check");
    cmd.write_stdin("x -> x\n");
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("cycle detected"));
}

#[test]
fn test_parse_error_reports_line() {
    let mut cmd = Command::cargo_bin("topo").unwrap();
    cmd.arg("sort");
    cmd.write_stdin("a -> b\n-> c\n");
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("line 2"));
}

#[test]
fn test_missing_file() {
    let temp_dir = TempDir::new().unwrap();

    let mut cmd = Command::cargo_bin("topo").unwrap();
    cmd.arg("sort").arg(temp_dir.path().join("missing.txt"));
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("IO error"));
}
