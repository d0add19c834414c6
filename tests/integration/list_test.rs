//! End-to-end tests for the list command.

use super::helpers::{isolated_cmd, isolation_root};
use predicates::prelude::*;

#[test]
fn list_names_every_section() {
    let root = isolation_root();
    let output = isolated_cmd(root.path()).arg("list").output().unwrap();
    assert!(output.status.success());

    let text = String::from_utf8(output.stdout).unwrap();
    for name in [
        "standard", "palette", "rgb", "fonts", "charset", "reset", "frames", "compare", "inverse",
    ] {
        assert!(text.contains(name), "missing section: {}", name);
    }
}

#[test]
fn list_does_not_emit_demo_sequences() {
    let root = isolation_root();
    isolated_cmd(root.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("\x1b[38;5;").not());
}

#[test]
fn version_flag_reports_the_package_version() {
    let root = isolation_root();
    isolated_cmd(root.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("ansiprobe"));
}
