//! Text read/write integration tests for bcp CLI.

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_write_then_read() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("testfile.txt");

    let mut cmd = cargo_bin_cmd!("bcp");
    cmd.arg("write")
        .arg(&path)
        .arg("Hello from Rust!")
        .assert()
        .success();

    assert_eq!(fs::read_to_string(&path).unwrap(), "Hello from Rust!");

    let mut cmd = cargo_bin_cmd!("bcp");
    cmd.arg("read")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Hello from Rust"));
}

#[test]
fn test_write_replaces_content() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("message.txt");

    fs::write(&path, "something much longer than the new text").unwrap();

    let mut cmd = cargo_bin_cmd!("bcp");
    cmd.arg("write").arg(&path).arg("short").assert().success();

    assert_eq!(fs::read_to_string(&path).unwrap(), "short");
}

#[test]
fn test_read_missing_file() {
    let dir = TempDir::new().unwrap();

    let mut cmd = cargo_bin_cmd!("bcp");
    cmd.arg("read")
        .arg(dir.path().join("missing.txt"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("error[not_found]"));
}

#[test]
fn test_read_binary_file_fails() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("binary.bin");

    fs::write(&path, [0xFFu8, 0xFE, 0x80]).unwrap();

    let mut cmd = cargo_bin_cmd!("bcp");
    cmd.arg("read")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("error[io_failure]"));
}
