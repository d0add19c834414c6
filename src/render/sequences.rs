//! Escape sequence composition.
//!
//! Sequences are built as raw byte strings on purpose: the point of the
//! tool is that exactly these bytes reach the terminal, so there is no
//! abstraction layer that could reorder or normalize parameters.

/// Parameter code selecting an extended (palette or RGB) foreground color.
pub const FG: u8 = 38;

/// Parameter code selecting an extended (palette or RGB) background color.
pub const BG: u8 = 48;

/// Reset all attributes, short form without the explicit 0.
pub const RESET: &str = "\x1b[m";

/// Designate the primary G0 charset as DEC special graphics.
pub const G0_LINE_DRAWING: &str = "\x1b(0";

/// Designate the primary G0 charset as US-ASCII.
pub const G0_ASCII: &str = "\x1b(B";

/// Designate the secondary G1 charset as DEC special graphics.
pub const G1_LINE_DRAWING: &str = "\x1b)0";

/// Designate the secondary G1 charset as US-ASCII.
pub const G1_ASCII: &str = "\x1b)B";

/// SO (0x0E, Ctrl+N): shift output to the G1 slot.
pub const SHIFT_OUT: &str = "\x0e";

/// SI (0x0F, Ctrl+O): shift output back to the G0 slot.
pub const SHIFT_IN: &str = "\x0f";

/// Select a 256-color palette entry for the given selector (FG or BG).
pub fn palette(selector: u8, index: u8) -> String {
    format!("\x1b[{};5;{}m", selector, index)
}

/// Select a direct RGB color for the given selector (FG or BG).
pub fn rgb(selector: u8, r: u8, g: u8, b: u8) -> String {
    format!("\x1b[{};2;{};{};{}m", selector, r, g, b)
}
