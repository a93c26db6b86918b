//! Reports printed by the `textfield` inspection CLI.
//!
//! Each report is wrapped in an [`ApiResponse`] so failures show up as
//! `{"ok": false, "error": ...}` instead of a process error.

use serde_json::{json, Value};
use std::path::Path;

use crate::field::{FieldConfig, FieldState};
use crate::gallery::{GalleryState, CHECKLIST};
use crate::render::FieldRender;
use crate::style::select_style;
use crate::types::{ApiResponse, Variant};

/// Render a configuration read from a JSON file.
pub fn render_report(path: &Path, revealed: bool, focused: bool) -> ApiResponse<FieldRender> {
    let config = match FieldConfig::from_json_file(path) {
        Ok(config) => config,
        Err(e) => return ApiResponse::err(format!("{}: {}", path.display(), e)),
    };

    let mut state = FieldState::new();
    if revealed && !state.toggle_reveal(&config) {
        return ApiResponse::err(format!("Field {} has no reveal toggle", config.id));
    }
    if focused {
        state.focus();
    }

    ApiResponse::ok(FieldRender::build(&config, &state))
}

/// Style chosen for a flag combination. Unknown variants fall back to outlined.
pub fn style_report(variant: &str, disabled: bool, invalid: bool) -> ApiResponse<Value> {
    let variant = Variant::from_name(variant);
    let style = select_style(disabled, invalid, variant);
    ApiResponse::ok(json!({
        "variant": variant,
        "style": style,
        "classes": style.classes(),
    }))
}

/// Gallery entries with their initial values, plus the checklist.
pub fn gallery_report() -> ApiResponse<Value> {
    let state = GalleryState::default();
    ApiResponse::ok(json!({
        "entries": state.entries(),
        "checklist": CHECKLIST,
    }))
}
