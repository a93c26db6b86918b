//! Gallery state shared across the window
//!
//! Wraps the harness state so field handlers can reach it through the app
//! context.

use gpui::*;
use textfield_core::{ColorTheme, GalleryState, Scenario};

use crate::config::GalleryConfig;

/// Application state
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub gallery: GalleryState,
}

impl Global for AppState {}

impl AppState {
    pub fn from_config(config: &GalleryConfig) -> Self {
        Self {
            gallery: GalleryState::new(config.theme).with_values(config.scenario_values()),
        }
    }
}

/// Initialize application state
pub fn init(config: &GalleryConfig, cx: &mut App) {
    cx.set_global(AppState::from_config(config));
    tracing::debug!("Application state initialized");
}

/// Update the app state, notifying observers
pub fn with_state<R>(cx: &mut App, f: impl FnOnce(&mut AppState) -> R) -> R {
    cx.update_global::<AppState, _>(|state, _cx| f(state))
}

/// Store new text for a scenario
pub fn set_value(scenario: Scenario, text: &str, cx: &mut App) {
    with_state(cx, |state| state.gallery.apply_change(scenario, text));
}

/// Reset a scenario's text
pub fn clear_value(scenario: Scenario, cx: &mut App) {
    with_state(cx, |state| state.gallery.clear(scenario));
}

/// Flip the page theme and apply it
pub fn toggle_theme(cx: &mut App) -> ColorTheme {
    let mode = with_state(cx, |state| state.gallery.toggle_theme());
    crate::theme::set_mode(mode, cx);
    mode
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::prelude::v1::test;

    #[test]
    fn test_from_config_seeds_values() {
        let mut config = GalleryConfig::default();
        config.theme = ColorTheme::Dark;
        config
            .initial_values
            .insert("basic".to_string(), "seeded".to_string());

        let state = AppState::from_config(&config);
        assert_eq!(state.gallery.theme(), ColorTheme::Dark);
        assert_eq!(state.gallery.value(Scenario::Basic), "seeded");
        assert_eq!(state.gallery.value(Scenario::Error), "admin");
    }

    #[test]
    fn test_global_updates() {
        let mut state = AppState::from_config(&GalleryConfig::default());

        state.gallery.apply_change(Scenario::Email, "me@example.com");
        assert_eq!(state.gallery.value(Scenario::Email), "me@example.com");

        state.gallery.clear(Scenario::Email);
        assert_eq!(state.gallery.value(Scenario::Email), "");

        assert_eq!(state.gallery.toggle_theme(), ColorTheme::Dark);
        assert_eq!(state.gallery.toggle_theme(), ColorTheme::Light);
    }
}
