//! The text style attribute catalog.

/// A single SGR text style with its enable and disable parameter codes.
///
/// The disable code is the documented counterpart for the style, which is
/// not always `on + 20`: bold is turned off by 22, not 21 (21 means double
/// underline on the renderers that know it at all).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyleAttribute {
    pub name: &'static str,
    pub on: u8,
    pub off: u8,
}

/// Every style attribute exercised by the demonstration sections, in
/// display order. Names are unique; the first entry is the no-op "normal"
/// style (its on and off codes are both the full reset).
pub const STYLES: &[StyleAttribute] = &[
    StyleAttribute { name: "normal", on: 0, off: 0 },
    // 21 would be "bold off" per ECMA-48 but is double underline in practice; 22 is the portable reset
    StyleAttribute { name: "bold", on: 1, off: 22 },
    // 22 = normal intensity, neither bold nor faint
    StyleAttribute { name: "faint", on: 2, off: 22 },
    // 23 = not italic, not fraktur
    StyleAttribute { name: "italic", on: 3, off: 23 },
    StyleAttribute { name: "underline", on: 4, off: 24 },
    // 25 = blink off; 26 is reserved
    StyleAttribute { name: "blinkslow", on: 5, off: 25 },
    StyleAttribute { name: "blinkfast", on: 6, off: 25 },
    StyleAttribute { name: "inverse", on: 7, off: 27 },
    StyleAttribute { name: "conceal", on: 8, off: 28 },
    StyleAttribute { name: "strikeout", on: 9, off: 29 },
    // 21 = double underline in Eclipse Ansi Console and on Jenkins
    StyleAttribute { name: "dblunderl", on: 21, off: 24 },
    StyleAttribute { name: "framed", on: 51, off: 54 },
    StyleAttribute { name: "encircled", on: 52, off: 54 },
    StyleAttribute { name: "overlined", on: 53, off: 55 },
];
