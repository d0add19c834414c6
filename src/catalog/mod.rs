//! Fixed tables driving the demonstration sections.
//!
//! Everything here is a process-lifetime constant: the ordered style
//! attribute catalog and the color sample list. Order defines display
//! order only.

mod colors;
mod styles;

pub use colors::{standard_sgr_codes, ColorSample, COLOR_SAMPLES};
pub use styles::{StyleAttribute, STYLES};
