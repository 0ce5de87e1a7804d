use assert_cmd::prelude::*;
use predicates::str::contains;
use std::process::Command;

#[test]
fn summary_mode_reports_rig_and_pose() {
    let mut cmd = Command::cargo_bin("armlab").expect("binary exists");
    cmd.arg("--summary-only");
    cmd.assert()
        .success()
        .stdout(contains("Robotic arm: 18 parts (8 joints, 10 links and plates)"))
        .stdout(contains("View: eye=(7.00, 5.00, 7.00)"))
        .stdout(contains("grip=0.00"))
        .stdout(contains(" - finger 0: base=-60.0 joint=60.0 tip=-35.0"));
}

#[test]
fn unknown_arguments_are_rejected() {
    let mut cmd = Command::cargo_bin("armlab").expect("binary exists");
    cmd.arg("--frobnicate");
    cmd.assert()
        .failure()
        .stderr(contains("Unknown argument: --frobnicate"));
}
