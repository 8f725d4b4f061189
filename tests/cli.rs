use assert_cmd::prelude::*;
use predicates::str::contains;
use std::process::Command;

// These exercise only the argument layer, which runs before any window
// or GPU resource is touched, so they are safe on headless CI.

#[test]
fn help_prints_usage_and_controls() {
    let mut cmd = Command::cargo_bin("teapot-demo").expect("binary exists");
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(contains("Usage: teapot-demo"))
        .stdout(contains("right click   context menu"));
}

#[test]
fn unknown_arguments_fail_with_usage() {
    let mut cmd = Command::cargo_bin("teapot-demo").expect("binary exists");
    cmd.arg("--frobnicate");
    cmd.assert()
        .failure()
        .stderr(contains("Unknown argument: --frobnicate"))
        .stderr(contains("Usage: teapot-demo"));
}

#[test]
fn width_requires_a_number() {
    let mut cmd = Command::cargo_bin("teapot-demo").expect("binary exists");
    cmd.args(["--width", "wide"]);
    cmd.assert()
        .failure()
        .stderr(contains("--width expects a positive integer"));
}

#[test]
fn zero_height_is_rejected() {
    let mut cmd = Command::cargo_bin("teapot-demo").expect("binary exists");
    cmd.args(["--height", "0"]);
    cmd.assert()
        .failure()
        .stderr(contains("--height must be nonzero"));
}
