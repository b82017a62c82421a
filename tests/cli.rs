use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn fileops(workdir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("fileops").unwrap();
    cmd.current_dir(workdir)
        .env("NO_COLOR", "1")
        .env_remove("FILEOPS_CONFIG");
    cmd
}

fn write_config(workdir: &Path) -> std::path::PathBuf {
    let config = workdir.join("fileops.json");
    fs::write(
        &config,
        r#"{"base_dir": "data", "out_dir": "out", "default_file": "data/notes.txt"}"#,
    )
    .unwrap();
    config
}

fn seed_data(workdir: &Path) {
    let data = workdir.join("data");
    fs::create_dir_all(data.join("sub")).unwrap();
    fs::write(data.join("notes.txt"), "hello 42 world -7 test\nsecond line\n").unwrap();
    fs::write(data.join("sub/more.txt"), "X").unwrap();
    fs::write(data.join("skip.log"), "ignored").unwrap();
}

#[test]
fn batch_writes_all_documents() {
    let dir = TempDir::new().unwrap();
    seed_data(dir.path());
    let config = write_config(dir.path());

    fileops(dir.path())
        .arg("--config")
        .arg(&config)
        .arg("batch")
        .assert()
        .success()
        .stdout(predicate::str::contains("report.txt"));

    let report = fs::read_to_string(dir.path().join("out/report.txt")).unwrap();
    assert!(report.starts_with("=== Batch FileOps Report ===\n\n"));
    assert!(report.contains("Fichier: notes.txt\nMots: 5\n"));
    assert!(!report.contains("skip.log"));

    let index = fs::read_to_string(dir.path().join("out/index.txt")).unwrap();
    assert_eq!(index.lines().count(), 4);

    let merged = fs::read_to_string(dir.path().join("out/merged.txt")).unwrap();
    assert!(merged.ends_with("--- FICHIER: more.txt ---\nX\n\n"));
}

#[test]
fn batch_missing_directory_fails() {
    let dir = TempDir::new().unwrap();
    let config = write_config(dir.path());

    fileops(dir.path())
        .arg("--config")
        .arg(&config)
        .args(["batch", "nowhere"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Directory not found"));

    assert!(!dir.path().join("out/report.txt").exists());
    assert!(!dir.path().join("out/index.txt").exists());
    assert!(!dir.path().join("out/merged.txt").exists());
}

#[test]
fn file_stats_uses_default_file() {
    let dir = TempDir::new().unwrap();
    seed_data(dir.path());
    let config = write_config(dir.path());

    fileops(dir.path())
        .arg("--config")
        .arg(&config)
        .args(["file", "stats"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Words"))
        .stdout(predicate::str::contains("4.80"));
}

#[test]
fn file_head_writes_to_out_dir() {
    let dir = TempDir::new().unwrap();
    seed_data(dir.path());
    let config = write_config(dir.path());

    fileops(dir.path())
        .arg("--config")
        .arg(&config)
        .args(["file", "head", "data/notes.txt", "-n", "1"])
        .assert()
        .success();

    let head = fs::read_to_string(dir.path().join("out/head.txt")).unwrap();
    assert_eq!(head, "hello 42 world -7 test\n");
}

#[test]
fn file_info_rejects_directory() {
    let dir = TempDir::new().unwrap();
    seed_data(dir.path());

    fileops(dir.path())
        .args(["file", "info", "data"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Not a regular file"));
}

#[test]
fn explicit_missing_config_fails() {
    let dir = TempDir::new().unwrap();

    fileops(dir.path())
        .args(["--config", "absent.json", "batch"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Invalid configuration"));
}

#[test]
fn batch_out_dir_inside_root_terminates() {
    let dir = TempDir::new().unwrap();
    seed_data(dir.path());
    let config = write_config(dir.path());
    let big = "word ".repeat(4_000);
    fs::write(dir.path().join("data/big.txt"), &big).unwrap();

    fileops(dir.path())
        .arg("--config")
        .arg(&config)
        .args(["batch", "."])
        .assert()
        .success();

    fileops(dir.path())
        .arg("--config")
        .arg(&config)
        .args(["batch", "."])
        .assert()
        .success();

    let merged = fs::read_to_string(dir.path().join("out/merged.txt")).unwrap();
    assert_eq!(merged.matches("--- FICHIER: big.txt ---").count(), 1);
    assert!(!merged.contains("--- FICHIER: merged.txt ---"));
}
