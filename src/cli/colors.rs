//! To maintain a theme of colors, I will add colors here as constants so
//! the UI does not look bad at any point.
//!
//! - DISC_GOLD: Main Color
//! - WARNING_ORANGE: Anything that may lose data

use colored::Color;

pub(crate) const DISC_GOLD: Color = Color::TrueColor {
    r: 230,
    g: 180,
    b: 60,
};

pub(crate) const WARNING_ORANGE: Color = Color::TrueColor {
    r: 255,
    g: 120,
    b: 40,
};
