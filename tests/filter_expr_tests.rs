//! Sprint 5: Filter expression tests for -e only= / drop= and regex forms
#![allow(deprecated)] // suppress assert_cmd::Command::cargo_bin deprecation in tests

use predicates::prelude::*;

#[test]
fn test_only_literals_restrict_tally() {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("moda");
    cmd.arg("-e")
        .arg("only=a,b")
        .write_stdin("a b c c c a a")
        .assert()
        .success()
        .stdout(predicate::str::contains("most frequent: a (3 of 4)"));
}

#[test]
fn test_drop_literals_exclude_values() {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("moda");
    cmd.arg("-e")
        .arg("drop=na")
        .write_stdin("na na na x y x")
        .assert()
        .success()
        .stdout(predicate::str::contains("most frequent: x (2 of 3)"));
}

#[test]
fn test_only_regex_pattern() {
    // Keep numeric tokens only
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("moda");
    cmd.arg("-e")
        .arg("only=/^[0-9]+$/")
        .write_stdin("7 x 7 y y y 9")
        .assert()
        .success()
        .stdout(predicate::str::contains("most frequent: 7 (2 of 3)"));
}

#[test]
fn test_drop_regex_pattern() {
    // Discard comment-like tokens
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("moda");
    cmd.arg("-e")
        .arg("drop=/^#/")
        .write_stdin("#a #a #a v w v")
        .assert()
        .success()
        .stdout(predicate::str::contains("most frequent: v (2 of 3)"));
}

#[test]
fn test_invalid_expression_fails() {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("moda");
    cmd.arg("-e")
        .arg("keep=a")
        .write_stdin("a b")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid filter expression"));
}

#[test]
fn test_invalid_regex_fails() {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("moda");
    cmd.arg("-e")
        .arg("only=/[unclosed/")
        .write_stdin("a b")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid regex pattern"));
}

#[test]
fn test_filter_removing_everything_fails_like_empty_input() {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("moda");
    cmd.arg("-e")
        .arg("only=z")
        .write_stdin("a b c")
        .assert()
        .failure()
        .stderr(predicate::str::contains("empty input"));
}

#[test]
fn test_filter_with_summary_table() {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("moda");
    let output = cmd
        .arg("-c")
        .arg("-e")
        .arg("drop=skip")
        .write_stdin("skip a a b skip")
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("total (2 distinct)"));
    assert!(!stdout.contains("skip"));
}
