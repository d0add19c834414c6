//! Shared helpers for integration tests.

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use tempfile::TempDir;

/// Build an ansiprobe command whose config lookup is confined to `root`.
///
/// Both the XDG and the home-relative config locations are pointed into
/// the temp directory so the invoking user's real config cannot leak in.
pub fn isolated_cmd(root: &Path) -> Command {
    let mut cmd = Command::cargo_bin("ansiprobe").unwrap();
    cmd.env("XDG_CONFIG_HOME", root.join("xdg"));
    cmd.env("HOME", root.join("home"));
    cmd
}

/// Fresh isolation root for one test.
pub fn isolation_root() -> TempDir {
    tempfile::tempdir().unwrap()
}

/// Write a config file at every location the platform config lookup may
/// resolve to under the isolation root.
pub fn write_config(root: &Path, contents: &str) {
    let candidates = [
        root.join("xdg/ansiprobe"),
        root.join("home/.config/ansiprobe"),
        root.join("home/Library/Application Support/ansiprobe"),
    ];
    for dir in candidates {
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("config.toml"), contents).unwrap();
    }
}
