//! Font selection: SGR codes 10-19 plus the fraktur alternate (20).

use std::io::{self, Write};

use crate::render::banner;

pub(crate) fn demo(out: &mut dyn Write) -> io::Result<()> {
    banner(out, "Switching fonts, like esc[10m, esc[11m, ... esc[20m")?;

    for code in 10..20 {
        writeln!(out, "font {}: \x1b[{}mexample in font {}\x1b[m", code, code, code)?;
    }
    writeln!(out, "fractur: \x1b[20mexample in fractur\x1b[m")
}
