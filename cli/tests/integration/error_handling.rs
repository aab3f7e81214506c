//! Error handling integration tests for bcp CLI.
//!
//! These tests verify:
//! - A missing source fails without creating or touching the destination
//! - Copying a file onto itself is refused without touching it
//! - Error codes and exit statuses
//! - Permission errors

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_source_not_found() {
    let dir = TempDir::new().unwrap();

    let mut cmd = cargo_bin_cmd!("bcp");
    cmd.arg("copy")
        .arg(dir.path().join("does-not-exist.bin"))
        .arg(dir.path().join("out.bin"))
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("error[not_found]"))
        .stderr(predicate::str::contains("does-not-exist.bin"));

    assert!(!dir.path().join("out.bin").exists());
}

#[test]
fn test_source_not_found_keeps_existing_destination() {
    let dir = TempDir::new().unwrap();

    fs::write(dir.path().join("out.bin"), "previous").unwrap();

    let mut cmd = cargo_bin_cmd!("bcp");
    cmd.arg("copy")
        .arg(dir.path().join("does-not-exist.bin"))
        .arg(dir.path().join("out.bin"))
        .assert()
        .failure();

    assert_eq!(
        fs::read_to_string(dir.path().join("out.bin")).unwrap(),
        "previous"
    );
}

#[test]
fn test_destination_directory_missing() {
    let dir = TempDir::new().unwrap();

    fs::write(dir.path().join("in.bin"), "data").unwrap();

    let mut cmd = cargo_bin_cmd!("bcp");
    cmd.arg("copy")
        .arg(dir.path().join("in.bin"))
        .arg(dir.path().join("missing/out.bin"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("error[not_found]"));
}

#[test]
fn test_copy_onto_itself_keeps_content() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("a.bin");

    fs::write(&path, vec![9u8; 3000]).unwrap();

    let mut cmd = cargo_bin_cmd!("bcp");
    cmd.arg("copy")
        .arg(&path)
        .arg(&path)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("error[same_file]"));

    assert_eq!(fs::read(&path).unwrap(), vec![9u8; 3000]);
}

#[cfg(unix)]
#[test]
fn test_source_is_directory() {
    let dir = TempDir::new().unwrap();

    fs::create_dir(dir.path().join("subdir")).unwrap();

    let mut cmd = cargo_bin_cmd!("bcp");
    cmd.arg("copy")
        .arg(dir.path().join("subdir"))
        .arg(dir.path().join("out.bin"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("error[is_a_directory]"));

    assert!(!dir.path().join("out.bin").exists());
}

#[cfg(unix)]
#[test]
fn test_destination_permission_denied() {
    use std::os::unix::fs::PermissionsExt;

    let dir = TempDir::new().unwrap();
    let locked = dir.path().join("locked");

    fs::write(dir.path().join("in.bin"), "data").unwrap();
    fs::create_dir(&locked).unwrap();
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o555)).unwrap();
    let _restore = scopeguard::guard(locked.clone(), |p| {
        let _ = fs::set_permissions(p, fs::Permissions::from_mode(0o755));
    });

    // root ignores directory permission bits
    if fs::write(locked.join("probe"), "").is_ok() {
        return;
    }

    let mut cmd = cargo_bin_cmd!("bcp");
    cmd.arg("copy")
        .arg(dir.path().join("in.bin"))
        .arg(locked.join("out.bin"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("error[permission_denied]"));
}

#[test]
fn test_demo_directory_missing_is_invalid_input() {
    let dir = TempDir::new().unwrap();

    let mut cmd = cargo_bin_cmd!("bcp");
    cmd.arg("demo")
        .arg("--dir")
        .arg(dir.path().join("nope"))
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("error[invalid_input]"));
}

#[test]
fn test_missing_operand() {
    let mut cmd = cargo_bin_cmd!("bcp");
    cmd.arg("copy")
        .arg("only-one.bin")
        .assert()
        .failure()
        .code(2);
}
