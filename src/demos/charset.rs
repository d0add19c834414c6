//! Charset switching: the G0/G1 slots designated to DEC special graphics.
//!
//! Only bytes 0x60-0x7f are replaced by line drawing glyphs, so the box
//! below is written in that range: l q w q k renders as ┌ ─ ┬ ─ ┐, x as │,
//! t n u as ├ ┼ ┤ and m v j as └ ┴ ┘.

use std::io::{self, Write};

use crate::render::banner;
use crate::render::sequences::{
    G0_ASCII, G0_LINE_DRAWING, G1_ASCII, G1_LINE_DRAWING, SHIFT_IN, SHIFT_OUT,
};

/// Five-line box diagram in the DEC special graphics byte range.
const LINE_DRAWING_BOX: &str = "  lqwqk\n  x x x\n  tqnqu\n  x x x\n  mqvqj";

pub(crate) fn demo(out: &mut dyn Write) -> io::Result<()> {
    banner(out, "Switching charset, like esc(0, esc)B, ctrl+N, ctrl+O")?;

    writeln!(out, "esc(0, line drawing using G0")?;
    writeln!(out, "{}{}{} back to normal", G0_LINE_DRAWING, LINE_DRAWING_BOX, G0_ASCII)?;

    writeln!(out, "esc)0 ctrl+N, line drawing using G1")?;
    writeln!(
        out,
        "{}{}{}{} back to normal",
        G1_LINE_DRAWING, SHIFT_OUT, LINE_DRAWING_BOX, SHIFT_IN,
    )?;

    // also restore G1 back to ascii
    write!(out, "{}", G1_ASCII)?;
    writeln!(out, "Back to normal")
}
