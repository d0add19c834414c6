//! Standard background colors next to the first 16 palette entries.
//!
//! Terminals are free to render the standard colors differently from
//! palette entries 0-15; the two rows make the difference visible.

use std::io::{self, Write};

use crate::render::banner;
use crate::render::sequences::{palette, BG, RESET};

pub(crate) fn demo(out: &mut dyn Write) -> io::Result<()> {
    banner(
        out,
        "Comparing standard colors esc[40m, esc[100m, ... versus first 16 palette colors esc[48;5;0m ... esc[48;5;15m",
    )?;

    write!(out, "Standard: ")?;
    for code in (40u8..48).chain(100..108) {
        write!(out, "\x1b[{}m {:3} \x1b[m", code, code)?;
    }
    writeln!(out)?;

    write!(out, "Palette:  ")?;
    for index in 0..16 {
        write!(out, "{} {:3} {}", palette(BG, index), index, RESET)?;
    }
    writeln!(out)
}
