//! Standard colors: every style attribute against codes 30-37, 90-97,
//! 40-47 and 100-107.

use std::io::{self, Write};

use crate::catalog::{standard_sgr_codes, STYLES};
use crate::render::banner;

pub(crate) fn demo(out: &mut dyn Write) -> io::Result<()> {
    banner(
        out,
        "Standard Colors like esc[31m, esc[41m, esc[91m and even things like bold esc[1m",
    )?;

    for style in STYLES {
        write!(out, "{:9}: ", style.name)?;
        // "def" shows the style against the default colors first
        write!(out, "\x1b[{}mdef\x1b[m", style.on)?;
        for code in standard_sgr_codes() {
            write!(out, "\x1b[{};{}m{:3}\x1b[m", style.on, code, code)?;
        }
        writeln!(out)?;
    }
    Ok(())
}
