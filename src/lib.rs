//! ansiprobe - terminal capability probe
//!
//! Emits labeled ANSI/VT100 control sequences so a human can visually
//! check which text styles, color palettes, charset switches and framing
//! attributes a terminal emulator or log viewer actually honors. There is
//! deliberately no capability detection and no parsing of terminal
//! responses: the terminal's rendering is the result.
//!
//! The library side holds the demonstration catalog so tests (and other
//! tools) can capture the byte stream instead of printing it:
//!
//! ```
//! use ansiprobe::demos::{run_all, Glyphs};
//!
//! let mut buf: Vec<u8> = Vec::new();
//! run_all(&mut buf, &Glyphs::default()).unwrap();
//! assert!(!buf.is_empty());
//! ```

pub mod catalog;
pub mod cli;
pub mod config;
pub mod demos;
pub mod render;
pub mod theme;

pub use config::Config;
pub use demos::Section;

/// Full version string including metadata embedded by build.rs.
///
/// Dev builds carry the git SHA; builds with the `release` feature show
/// only version and build date.
pub fn version_string() -> String {
    let version = env!("CARGO_PKG_VERSION");
    let date = env!("ANSIPROBE_BUILD_DATE");
    match option_env!("VERGEN_GIT_SHA") {
        Some(sha) => format!("{} ({} {})", version, sha, date),
        None => format!("{} ({})", version, date),
    }
}
