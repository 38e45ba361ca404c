//! CLI surface tests: flags, exit codes and diagnostics


use assert_cmd::Command;
use harness::TestDir;
use predicates::prelude::*;

fn treedoc() -> Command {
    let mut cmd = Command::cargo_bin("treedoc").expect("binary built");
    cmd.env("NO_COLOR", "1");
    cmd
}

#[test]
fn test_help_lists_flags() {
    treedoc()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--ignore"))
        .stdout(predicate::str::contains("--output"))
        .stdout(predicate::str::contains("--skip-content"))
        .stdout(predicate::str::contains("--log-level"));
}

#[test]
fn test_missing_root_exit_code() {
    let dir = TestDir::new();
    treedoc()
        .current_dir(dir.path())
        .arg("missing")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("path not found: missing"));
}

#[cfg(unix)]
#[test]
fn test_walk_failure_exit_code() {
    let dir = TestDir::new();
    std::os::unix::fs::symlink("nowhere", dir.path().join("dangling")).unwrap();

    treedoc()
        .current_dir(dir.path())
        .assert()
        .code(2)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("walk error"));
}

#[test]
fn test_uncreatable_output_exit_code() {
    let dir = TestDir::new();
    dir.add_file("a.txt", "a");

    treedoc()
        .current_dir(dir.path())
        .args(["-o", "no/such/dir/tree.md"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("cannot write output"));
}

#[test]
fn test_debug_logging_goes_to_stderr() {
    let dir = TestDir::new();
    dir.add_file("keep.rs", "");
    dir.add_file("drop.log", "");
    dir.add_file(".ignore", "*.log\n");

    treedoc()
        .current_dir(dir.path())
        .args(["--log-level", "debug"])
        .assert()
        .success()
        .stdout(predicate::str::contains("keep.rs"))
        .stdout(predicate::str::contains("drop.log").not())
        .stderr(predicate::str::contains("ignoring drop.log"));
}

#[test]
fn test_silent_logging() {
    let dir = TestDir::new();
    dir.add_file("keep.rs", "");

    treedoc()
        .current_dir(dir.path())
        .args(["-l", "silent"])
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_color_always_marks_directories() {
    let dir = TestDir::new();
    dir.add_file("src/main.rs", "");

    treedoc()
        .current_dir(dir.path())
        .args(["--color", "always", "-l", "silent"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\u{1b}["))
        .stdout(predicate::str::contains("└── main.rs\n"));
}

#[test]
fn test_invalid_color_value_rejected() {
    treedoc().args(["--color", "sometimes"]).assert().failure();
}
