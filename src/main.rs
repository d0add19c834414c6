//! ansiprobe binary entry point.

mod commands;

use ansiprobe::cli::{Cli, Command};
use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        // bare invocation runs the full catalog
        None => commands::run::handle(&[]),
        Some(Command::Run { only }) => commands::run::handle(&only),
        Some(Command::List) => commands::list::handle(),
        Some(Command::Config { action }) => commands::config::handle(action),
        Some(Command::Completions { shell }) => commands::completions::handle(shell),
    }
}
