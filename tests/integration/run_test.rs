//! End-to-end tests for the run command and the bare invocation.

use super::helpers::{isolated_cmd, isolation_root};
use predicates::prelude::*;

#[test]
fn bare_invocation_runs_every_section() {
    let root = isolation_root();
    let output = isolated_cmd(root.path()).output().unwrap();

    assert!(output.status.success());
    assert!(!output.stdout.is_empty());

    let text = String::from_utf8(output.stdout).unwrap();
    for heading in [
        "Standard Colors",
        "Palette Colors",
        "Rgb Colors",
        "Switching fonts",
        "Switching charset",
        "Reset single attributes",
        "Framing",
        "Comparing standard colors",
        "Some combinations with esc[7m",
    ] {
        assert!(text.contains(heading), "missing section heading: {}", heading);
    }
}

#[test]
fn standard_section_appears_before_palette_section() {
    let root = isolation_root();
    let output = isolated_cmd(root.path()).output().unwrap();
    let text = String::from_utf8(output.stdout).unwrap();

    let standard = text.find("Standard Colors").unwrap();
    let palette = text.find("Palette Colors").unwrap();
    assert!(standard < palette);
}

#[test]
fn repeated_runs_are_byte_identical() {
    let root = isolation_root();
    let first = isolated_cmd(root.path()).output().unwrap();
    let second = isolated_cmd(root.path()).output().unwrap();

    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn font_section_emits_eleven_labeled_lines() {
    let root = isolation_root();
    let output = isolated_cmd(root.path())
        .args(["run", "--only", "fonts"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let text = String::from_utf8(output.stdout).unwrap();
    let samples = text.lines().filter(|l| l.contains("example in")).count();
    assert_eq!(samples, 11);
}

#[test]
fn only_selection_excludes_other_sections() {
    let root = isolation_root();
    let output = isolated_cmd(root.path())
        .args(["run", "--only", "frames"])
        .output()
        .unwrap();

    let text = String::from_utf8(output.stdout).unwrap();
    assert!(text.contains("Framing"));
    assert!(!text.contains("Palette Colors"));
}

#[test]
fn selection_order_follows_the_catalog_not_the_flags() {
    let root = isolation_root();
    let output = isolated_cmd(root.path())
        .args(["run", "--only", "palette", "--only", "standard"])
        .output()
        .unwrap();

    let text = String::from_utf8(output.stdout).unwrap();
    let standard = text.find("Standard Colors").unwrap();
    let palette = text.find("Palette Colors").unwrap();
    assert!(standard < palette);
}

#[test]
fn unknown_section_fails_with_a_usage_error() {
    let root = isolation_root();
    isolated_cmd(root.path())
        .args(["run", "--only", "bogus"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("bogus"));
}

#[test]
fn completions_are_generated_for_bash() {
    let root = isolation_root();
    isolated_cmd(root.path())
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ansiprobe"));
}
