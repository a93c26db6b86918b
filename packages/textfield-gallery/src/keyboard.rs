//! Keyboard bindings for the gallery

use gpui::*;

use crate::state;

// Register action types
actions!(textfield_gallery, [ToggleTheme, Quit]);

/// Initialize keyboard bindings
pub fn init(cx: &mut App) {
    cx.bind_keys([
        KeyBinding::new("ctrl-shift-t", ToggleTheme, None),
        KeyBinding::new("ctrl-q", Quit, None),
    ]);

    cx.on_action(|_: &ToggleTheme, cx| {
        state::toggle_theme(cx);
    });
    cx.on_action(|_: &Quit, cx| cx.quit());

    tracing::debug!("Keyboard bindings initialized");
}
