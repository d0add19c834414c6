//! Palette colors: all 256 indexed entries for both selectors.

use std::io::{self, Write};

use crate::render::banner;
use crate::render::sequences::{palette, BG, FG, RESET};

pub(crate) fn demo(out: &mut dyn Write) -> io::Result<()> {
    banner(out, "Palette Colors like esc[38;5;123m")?;

    for selector in [FG, BG] {
        // 16 standard colors
        for index in 0..16 {
            write!(out, "{}   {:3}   {}", palette(selector, index), index, RESET)?;
        }
        writeln!(out)?;
        // 216 rgb colors, six rows of 36
        for row_start in (16u8..232).step_by(36) {
            for index in row_start..row_start + 36 {
                write!(out, "{} {:3}{}", palette(selector, index), index, RESET)?;
            }
            writeln!(out)?;
        }
        // 24 shades of gray (232 is not quite black and 255 not quite white)
        for index in 232..=255u8 {
            write!(out, "{}  {:3} {}", palette(selector, index), index, RESET)?;
        }
        writeln!(out)?;
    }
    Ok(())
}
