//! Repeated copy integration tests for bcp CLI.

use assert_cmd::cargo::cargo_bin_cmd;
use std::fs;
use tempfile::TempDir;

/// Copying twice gives the same destination as copying once.
#[test]
fn test_copy_twice_is_idempotent() {
    let dir = TempDir::new().unwrap();
    let src = dir.path().join("source.bin");
    let dst = dir.path().join("dest.bin");

    fs::write(&src, vec![42u8; 3000]).unwrap();

    for _ in 0..2 {
        let mut cmd = cargo_bin_cmd!("bcp");
        cmd.arg("copy").arg("-q").arg(&src).arg(&dst).assert().success();
    }

    assert_eq!(fs::read(&dst).unwrap(), vec![42u8; 3000]);
}

/// A shorter source fully replaces a longer destination.
#[test]
fn test_copy_shrinks_destination() {
    let dir = TempDir::new().unwrap();
    let src = dir.path().join("source.bin");
    let dst = dir.path().join("dest.bin");

    fs::write(&dst, vec![1u8; 5000]).unwrap();
    fs::write(&src, vec![2u8; 10]).unwrap();

    let mut cmd = cargo_bin_cmd!("bcp");
    cmd.arg("copy").arg("-q").arg(&src).arg(&dst).assert().success();

    assert_eq!(fs::read(&dst).unwrap(), vec![2u8; 10]);
}

/// Copies of copies keep the original content.
#[test]
fn test_copy_chain() {
    let dir = TempDir::new().unwrap();
    let data: Vec<u8> = (0..=255u8).cycle().take(1500).collect();
    fs::write(dir.path().join("a.bin"), &data).unwrap();

    for (from, to) in [("a.bin", "b.bin"), ("b.bin", "c.bin")] {
        let mut cmd = cargo_bin_cmd!("bcp");
        cmd.arg("copy")
            .arg("-q")
            .arg(dir.path().join(from))
            .arg(dir.path().join(to))
            .assert()
            .success();
    }

    assert_eq!(fs::read(dir.path().join("c.bin")).unwrap(), data);
}
