//! The capability demonstration catalog.
//!
//! Each section writes labels plus raw control sequences to a
//! caller-provided sink and is independent of the others; [`Section::ALL`]
//! defines the display order. Output is deterministic: the same selection
//! produces the same bytes on every run.

mod charset;
mod compare;
mod fonts;
mod frames;
mod inverse;
mod palette;
mod reset;
mod rgb;
mod standard;

use std::io::{self, Write};

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Glyphs used for the RGB gradient strips.
///
/// Kept separate from the application config so the demonstration catalog
/// stays usable as a library without pulling in the config layer.
#[derive(Debug, Clone)]
pub struct Glyphs {
    /// Printed once per sample in the foreground sweeps.
    pub foreground_bullet: String,
    /// Printed once per sample in the background sweeps.
    pub background_bullet: String,
}

impl Default for Glyphs {
    fn default() -> Self {
        Self {
            foreground_bullet: "⚫".to_string(),
            background_bullet: "•".to_string(),
        }
    }
}

/// A demonstration section, addressable from the command line and the
/// config file by its lowercase name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    Standard,
    Palette,
    Rgb,
    Fonts,
    Charset,
    Reset,
    Frames,
    Compare,
    Inverse,
}

impl Section {
    /// Every section, in display order.
    pub const ALL: [Section; 9] = [
        Section::Standard,
        Section::Palette,
        Section::Rgb,
        Section::Fonts,
        Section::Charset,
        Section::Reset,
        Section::Frames,
        Section::Compare,
        Section::Inverse,
    ];

    /// The name used on the command line and in the config file.
    pub fn name(self) -> &'static str {
        match self {
            Section::Standard => "standard",
            Section::Palette => "palette",
            Section::Rgb => "rgb",
            Section::Fonts => "fonts",
            Section::Charset => "charset",
            Section::Reset => "reset",
            Section::Frames => "frames",
            Section::Compare => "compare",
            Section::Inverse => "inverse",
        }
    }

    /// One-line description for `ansiprobe list`.
    pub fn summary(self) -> &'static str {
        match self {
            Section::Standard => "every style attribute against the 32 standard color codes",
            Section::Palette => "all 256 palette entries, foreground and background",
            Section::Rgb => "true-color gradient strips from direct RGB sequences",
            Section::Fonts => "font select codes 10-19 plus the fraktur alternate",
            Section::Charset => "G0/G1 line drawing charset switching",
            Section::Reset => "selector-specific resets and enable/disable pairs",
            Section::Frames => "framed, encircled and overlined attributes",
            Section::Compare => "standard background colors next to their palette twins",
            Section::Inverse => "order dependence of the inverse attribute",
        }
    }

    /// Write this section's demonstration to the sink.
    pub fn run(self, out: &mut dyn Write, glyphs: &Glyphs) -> io::Result<()> {
        tracing::debug!(section = self.name(), "running demonstration section");
        match self {
            Section::Standard => standard::demo(out),
            Section::Palette => palette::demo(out),
            Section::Rgb => rgb::demo(out, glyphs),
            Section::Fonts => fonts::demo(out),
            Section::Charset => charset::demo(out),
            Section::Reset => reset::demo(out),
            Section::Frames => frames::demo(out),
            Section::Compare => compare::demo(out),
            Section::Inverse => inverse::demo(out),
        }
    }
}

/// Run every section in display order.
pub fn run_all(out: &mut dyn Write, glyphs: &Glyphs) -> io::Result<()> {
    for section in Section::ALL {
        section.run(out, glyphs)?;
    }
    Ok(())
}

/// Resolve which sections to run.
///
/// An explicit selection wins over configured defaults; an empty result
/// set means the full catalog. Whatever was asked for, sections run in
/// display order and at most once.
pub fn select(only: &[Section], defaults: &[Section]) -> Vec<Section> {
    let wanted = if only.is_empty() { defaults } else { only };
    if wanted.is_empty() {
        return Section::ALL.to_vec();
    }
    Section::ALL
        .iter()
        .copied()
        .filter(|section| wanted.contains(section))
        .collect()
}
