//! End-to-end tests for the config subcommands and config-driven runs.

use std::path::PathBuf;

use super::helpers::{isolated_cmd, isolation_root, write_config};
use predicates::prelude::*;

/// Resolve the config path as the child process sees it.
fn child_config_path(root: &std::path::Path) -> PathBuf {
    let output = isolated_cmd(root)
        .args(["config", "path"])
        .output()
        .unwrap();
    assert!(output.status.success());
    PathBuf::from(String::from_utf8(output.stdout).unwrap().trim())
}

#[test]
fn config_path_names_the_config_file() {
    let root = isolation_root();
    let path = child_config_path(root.path());
    assert!(path.ends_with("ansiprobe/config.toml"));
}

#[test]
fn config_init_writes_a_default_file() {
    let root = isolation_root();
    let path = child_config_path(root.path());
    assert!(!path.exists());

    isolated_cmd(root.path())
        .args(["config", "init"])
        .assert()
        .success();
    assert!(path.exists());

    let contents = std::fs::read_to_string(&path).unwrap();
    assert!(contents.contains("[run]"));
    assert!(contents.contains("[output]"));
}

#[test]
fn config_init_refuses_to_overwrite_without_force() {
    let root = isolation_root();
    isolated_cmd(root.path())
        .args(["config", "init"])
        .assert()
        .success();

    isolated_cmd(root.path())
        .args(["config", "init"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--force"));

    isolated_cmd(root.path())
        .args(["config", "init", "--force"])
        .assert()
        .success();
}

#[test]
fn config_show_prints_toml() {
    let root = isolation_root();
    isolated_cmd(root.path())
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("default_sections"));
}

#[cfg(unix)]
#[test]
fn configured_default_sections_limit_the_bare_run() {
    let root = isolation_root();
    write_config(root.path(), "[run]\ndefault_sections = [\"fonts\"]\n");

    let output = isolated_cmd(root.path()).output().unwrap();
    assert!(output.status.success());

    let text = String::from_utf8(output.stdout).unwrap();
    assert!(text.contains("example in font 10"));
    assert!(!text.contains("Palette Colors"));
}

#[cfg(unix)]
#[test]
fn explicit_only_overrides_configured_defaults() {
    let root = isolation_root();
    write_config(root.path(), "[run]\ndefault_sections = [\"fonts\"]\n");

    let output = isolated_cmd(root.path())
        .args(["run", "--only", "frames"])
        .output()
        .unwrap();

    let text = String::from_utf8(output.stdout).unwrap();
    assert!(text.contains("Framing"));
    assert!(!text.contains("example in font"));
}

#[cfg(unix)]
#[test]
fn configured_bullets_change_the_rgb_strips() {
    let root = isolation_root();
    write_config(
        root.path(),
        "[output]\nforeground_bullet = \"#\"\nbackground_bullet = \"=\"\n",
    );

    let output = isolated_cmd(root.path())
        .args(["run", "--only", "rgb"])
        .output()
        .unwrap();

    let text = String::from_utf8(output.stdout).unwrap();
    assert!(text.contains("\x1b[38;2;254;0;0m#"));
    assert!(text.contains("\x1b[48;2;254;0;0m="));
    assert!(!text.contains('⚫'));
}

#[cfg(unix)]
#[test]
fn invalid_config_fails_with_a_named_section() {
    let root = isolation_root();
    write_config(root.path(), "[run]\ndefault_sections = [\"bogus\"]\n");

    isolated_cmd(root.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("bogus"));
}
