//! Combinations with the inverse attribute.
//!
//! A fixed set of demonstration strings probing how esc[7m interacts with
//! color codes and the default-color resets, in both orders. Several
//! renderers (the Jenkins ansicolor plugin among them) get the order
//! dependence wrong, so the lines state the expected rendering in their
//! text. These are deliberately literal, not computed.

use std::io::{self, Write};

use crate::render::banner;

pub(crate) fn demo(out: &mut dyn Write) -> io::Result<()> {
    banner(out, "Some combinations with esc[7m")?;

    writeln!(
        out,
        "\x1b[31mred text, \x1b[7mnow inverse, \x1b[27mturned back to non inverse\x1b[m"
    )?;
    writeln!(
        out,
        "\x1b[41mred background, \x1b[7mnow inverse, \x1b[27mturned back to non inverse\x1b[m"
    )?;
    writeln!(
        out,
        "\x1b[33;41myellow on red, \x1b[7mnow inverse, \x1b[7mone more [7m should change nothing, \x1b[27mturned back to non inverse\x1b[m"
    )?;
    writeln!(
        out,
        "\x1b[33;41myellow on red, \x1b[7mnow inverse, \x1b[30m[30m → red on black, \x1b[103m[103m  → yellow on black, \x1b[27m[27m → black on yellow\x1b[m"
    )?;

    writeln!(out, "\x1b[31;7minv=redbg\x1b[27mnorm=redfg\x1b[m")?;
    writeln!(out, "\x1b[7;31minv=redbg\x1b[27mnorm=redfg\x1b[m")?;
    writeln!(out, "\x1b[41;7minv=redfg\x1b[27mnorm=redbg\x1b[m")?;
    writeln!(out, "\x1b[7;41minv=redfg\x1b[27mnorm=redbg\x1b[m")?;

    writeln!(out, "\x1b[31;7minv=redbg\x1b[39mdefault-inverse\x1b[m")?;
    writeln!(out, "\x1b[7;31minv=redbg\x1b[39mdefault-inverse\x1b[m")?;
    writeln!(out, "\x1b[41;7minv=redfg\x1b[49mdefault-inverse\x1b[m")?;
    writeln!(out, "\x1b[7;41minv=redfg\x1b[49mdefault-inverse\x1b[m")?;
    writeln!(
        out,
        "\x1b[33;41;7minv=red-on-yellow\x1b[39mdefaultfg-inv=redfg\x1b[m"
    )?;
    writeln!(
        out,
        "\x1b[7;33;41minv=red-on-yellow\x1b[39mdefaultfg-inv=redfg\x1b[m"
    )?;
    writeln!(
        out,
        "\x1b[33;41;7minv=red-on-yellow\x1b[49mdefaultbg-inv=yellowbg\x1b[m"
    )?;
    writeln!(
        out,
        "\x1b[7;33;41minv=red-on-yellow\x1b[49mdefaultbg-inv=yellowbg\x1b[m"
    )
}
