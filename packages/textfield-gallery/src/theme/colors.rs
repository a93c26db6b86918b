//! Color utilities for theme definitions

use gpui::{rgb, Hsla};

/// Opaque color from a 0xRRGGBB literal
pub fn color(hex: u32) -> Hsla {
    rgb(hex).into()
}

/// Set the alpha of a color
pub fn with_alpha(color: Hsla, alpha: f32) -> Hsla {
    Hsla { a: alpha, ..color }
}
