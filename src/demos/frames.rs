//! Framing attributes: framed, encircled and overlined.

use std::io::{self, Write};

use crate::render::banner;

pub(crate) fn demo(out: &mut dyn Write) -> io::Result<()> {
    banner(out, "Framing, like esc[51m")?;

    writeln!(out, "framed: \x1b[51minside\x1b[54moutside")?;
    writeln!(out, "encircled: \x1b[52minside\x1b[54moutside")?;
    writeln!(out, "overlined: \x1b[53minside\x1b[55moutside")
}
