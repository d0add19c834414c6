//! Selector-specific resets: esc[39m, esc[49m and per-style disable codes.
//!
//! Each style is shown in three contexts - alone, color first, style
//! first - because some renderers apply the disable code differently
//! depending on what was set before it.

use std::io::{self, Write};

use crate::catalog::STYLES;
use crate::render::banner;

pub(crate) fn demo(out: &mut dyn Write) -> io::Result<()> {
    banner(out, "Reset single attributes, like esc[39m and esc[22m")?;

    writeln!(
        out,
        "foreground: \x1b[33;1;41myellow bold on red\x1b[39m just bold on red\x1b[m"
    )?;
    writeln!(
        out,
        "background: \x1b[33;1;41myellow bold on red\x1b[49m just yellow bold\x1b[m"
    )?;

    // skip "normal": toggling it demonstrates nothing
    for style in &STYLES[1..] {
        write!(out, "{:10}: ", style.name)?;
        write!(out, "\x1b[{}mon\x1b[{}moff\x1b[m  ", style.on, style.off)?;
        write!(out, "\x1b[33;41;{}mon\x1b[{}moff\x1b[m  ", style.on, style.off)?;
        write!(out, "\x1b[{};33;41mon\x1b[{}moff\x1b[m  ", style.on, style.off)?;
        writeln!(out)?;
    }
    Ok(())
}
