//! Developer tasks for the ansiprobe workspace.
//!
//! Currently only man page generation. Run with `cargo run -p xtask -- man`.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "xtask", about = "Developer tasks for ansiprobe")]
struct Xtask {
    #[command(subcommand)]
    command: Task,
}

#[derive(Debug, Subcommand)]
enum Task {
    /// Generate the ansiprobe man page
    Man {
        /// Output directory for the generated page
        #[arg(long, default_value = "target/man")]
        out_dir: PathBuf,
    },
}

fn main() -> Result<()> {
    match Xtask::parse().command {
        Task::Man { out_dir } => generate_man(&out_dir),
    }
}

/// Render ansiprobe.1 from the CLI definitions in the main crate.
fn generate_man(out_dir: &Path) -> Result<()> {
    let cmd = ansiprobe::cli::Cli::command();
    let man = clap_mangen::Man::new(cmd);

    let mut buf: Vec<u8> = Vec::new();
    man.render(&mut buf).context("Failed to render man page")?;

    fs::create_dir_all(out_dir)
        .with_context(|| format!("Failed to create {}", out_dir.display()))?;
    let path = out_dir.join("ansiprobe.1");
    fs::write(&path, buf).with_context(|| format!("Failed to write {}", path.display()))?;

    println!("Wrote {}", path.display());
    Ok(())
}
