//! Command line interface definitions.
//!
//! Kept in the library so xtask can generate the man page from the same
//! definitions the binary parses.

use clap::{Parser, Subcommand};
use clap_complete::Shell;

use crate::demos::Section;

#[derive(Debug, Parser)]
#[command(
    name = "ansiprobe",
    about = "Print ANSI control sequences so you can see which ones your terminal honors",
    long_about = "Prints labeled ANSI/VT100 control sequences to stdout so a human can \
                  visually check which text styles, color palettes, charsets and framing \
                  attributes a terminal or log viewer actually renders. With no arguments \
                  every demonstration section runs in a fixed order.",
    version = crate::version_string()
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run demonstration sections (the default when no subcommand is given)
    Run {
        /// Limit the run to the named sections; repeatable, runs in catalog order
        #[arg(long = "only", value_enum, value_name = "SECTION")]
        only: Vec<Section>,
    },
    /// List the available sections
    List,
    /// Inspect or create the configuration file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Print the effective configuration as TOML
    Show,
    /// Print the configuration file path
    Path,
    /// Write a default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}
