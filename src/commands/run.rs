//! Run handler - writes the demonstration sections to stdout.

use std::io::{self, Write};

use anyhow::{Context, Result};
use terminal_size::{terminal_size, Width};

use ansiprobe::demos::{Glyphs, Section, select};
use ansiprobe::Config;

/// Widest demonstration row: a 36-entry palette cube row at 4 columns per
/// swatch. Narrower terminals wrap the rows, which makes the swatch grid
/// hard to read.
const MIN_COMFORTABLE_COLUMNS: u16 = 144;

/// Run the selected sections (all of them when `only` is empty and the
/// config names no defaults).
pub fn handle(only: &[Section]) -> Result<()> {
    let config = Config::load().context("Failed to load configuration")?;
    let sections = select(only, &config.run.default_sections);

    print_environment_hints();

    let glyphs = Glyphs {
        foreground_bullet: config.output.foreground_bullet.clone(),
        background_bullet: config.output.background_bullet.clone(),
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for section in sections {
        section
            .run(&mut out, &glyphs)
            .with_context(|| format!("Failed to write section '{}'", section.name()))?;
    }
    out.flush().context("Failed to flush stdout")?;
    Ok(())
}

/// Hints go to stderr so the demonstration bytes on stdout stay pristine.
#[cfg(not(tarpaulin_include))]
fn print_environment_hints() {
    if !atty::is(atty::Stream::Stdout) {
        eprintln!("note: stdout is not a terminal; escape sequences are written verbatim");
        return;
    }
    if let Some((Width(columns), _)) = terminal_size() {
        if columns < MIN_COMFORTABLE_COLUMNS {
            eprintln!(
                "note: terminal is {} columns wide; rows up to {} columns will wrap",
                columns, MIN_COMFORTABLE_COLUMNS
            );
        }
    }
}
