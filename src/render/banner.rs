//! Box-drawing banners for section headings.

use std::io::{self, Write};

use unicode_width::UnicodeWidthStr;

/// Draw a three-line box around a section title.
///
/// The box is sized to the title's terminal display width, so titles
/// containing wide glyphs still line up.
pub fn banner(out: &mut dyn Write, title: &str) -> io::Result<()> {
    let inner = title.width() + 2;
    writeln!(out, "┌{}┐", "─".repeat(inner))?;
    writeln!(out, "│ {} │", title)?;
    writeln!(out, "└{}┘", "─".repeat(inner))
}
