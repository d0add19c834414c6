//! Color sample definitions and the standard SGR color code list.

/// A direction vector for an RGB gradient strip.
///
/// Each channel is 0 or 1 - a multiplier applied to a swept brightness
/// value, not an intensity of its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorSample {
    pub name: &'static str,
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// Gradient strips rendered by the RGB demonstration, in display order.
/// Names are padded to five characters in the output, hence "magnt".
pub const COLOR_SAMPLES: &[ColorSample] = &[
    ColorSample { name: "red", r: 1, g: 0, b: 0 },
    ColorSample { name: "green", r: 0, g: 1, b: 0 },
    ColorSample { name: "blue", r: 0, g: 0, b: 1 },
    ColorSample { name: "cyan", r: 0, g: 1, b: 1 },
    ColorSample { name: "magnt", r: 1, g: 0, b: 1 },
    ColorSample { name: "yello", r: 1, g: 1, b: 0 },
    ColorSample { name: "gray", r: 1, g: 1, b: 1 },
];

/// The standard SGR color codes, in display order: normal foreground
/// (30-37), bright foreground (90-97), normal background (40-47), bright
/// background (100-107). 32 codes in total.
pub fn standard_sgr_codes() -> impl Iterator<Item = u8> {
    (30..38).chain(90..98).chain(40..48).chain(100..108)
}
