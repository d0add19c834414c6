//! True-color gradients: direct RGB sequences swept over a brightness ramp.

use std::io::{self, Write};

use crate::catalog::COLOR_SAMPLES;
use crate::demos::Glyphs;
use crate::render::banner;
use crate::render::sequences::{rgb, BG, FG, RESET};

pub(crate) fn demo(out: &mut dyn Write, glyphs: &Glyphs) -> io::Result<()> {
    banner(out, "Rgb Colors like esc[38;2;10;20;30m")?;

    for selector in [FG, BG] {
        let bullet = if selector == FG {
            &glyphs.foreground_bullet
        } else {
            &glyphs.background_bullet
        };
        for sample in COLOR_SAMPLES {
            write!(out, "{:5}: ", sample.name)?;
            // brightness 0, 2, 4, ... 254: 128 samples per strip
            for brightness in (0u8..=254).step_by(2) {
                write!(
                    out,
                    "{}{}{}",
                    rgb(
                        selector,
                        sample.r * brightness,
                        sample.g * brightness,
                        sample.b * brightness,
                    ),
                    bullet,
                    RESET,
                )?;
            }
            writeln!(out)?;
        }
    }
    Ok(())
}
