//! Theme system for the text field gallery
//!
//! Two built-in themes, light and dark, selected by the page theme flag.

mod colors;
mod themes;

pub use colors::*;
pub use themes::*;

use gpui::*;
use textfield_core::ColorTheme;

// ============================================================================
// Theme Structure
// ============================================================================

/// Complete theme with all color definitions
#[derive(Debug, Clone)]
pub struct Theme {
    pub id: &'static str,
    pub name: &'static str,
    pub is_dark: bool,

    // Core colors
    pub primary: Hsla,

    // Status colors
    pub error: Hsla,
    pub success: Hsla,

    // Text colors
    pub text: Hsla,
    pub text_muted: Hsla,
    pub text_disabled: Hsla,

    // Background colors
    pub background: Hsla,
    pub background_panel: Hsla,
    pub background_element: Hsla,

    // Border colors
    pub border: Hsla,
    pub border_subtle: Hsla,
}

impl Theme {
    /// Theme for a color mode
    pub fn for_mode(mode: ColorTheme) -> Self {
        match mode {
            ColorTheme::Light => themes::light(),
            ColorTheme::Dark => themes::dark(),
        }
    }

    pub fn mode(&self) -> ColorTheme {
        if self.is_dark {
            ColorTheme::Dark
        } else {
            ColorTheme::Light
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        themes::light()
    }
}

impl Global for Theme {}

// ============================================================================
// Theme Initialization
// ============================================================================

/// Initialize the theme system
pub fn init(mode: ColorTheme, cx: &mut App) {
    cx.set_global(Theme::for_mode(mode));
    tracing::debug!("Theme system initialized in {} mode", mode);
}

/// Set the page theme
pub fn set_mode(mode: ColorTheme, cx: &mut App) {
    let theme = Theme::for_mode(mode);
    tracing::info!("Theme changed to: {}", theme.name);
    cx.set_global(theme);
}

/// Get the current theme
pub fn current_theme(cx: &App) -> &Theme {
    cx.global::<Theme>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::prelude::v1::test;

    #[test]
    fn test_for_mode_round_trips() {
        assert_eq!(Theme::for_mode(ColorTheme::Dark).mode(), ColorTheme::Dark);
        assert_eq!(Theme::for_mode(ColorTheme::Light).mode(), ColorTheme::Light);
    }

    #[test]
    fn test_dark_background_darker_than_text() {
        let dark = Theme::for_mode(ColorTheme::Dark);
        assert!(dark.background.l < dark.text.l);
        let light = Theme::default();
        assert!(light.background.l > light.text.l);
    }
}
