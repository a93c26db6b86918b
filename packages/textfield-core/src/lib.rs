//! Text Field Core - Configuration and render model for a themed text field.
//!
//! This crate provides everything about the text field control that does not
//! depend on a particular GUI toolkit:
//!
//! - **Configuration**: caller-supplied options and change/clear handlers
//! - **Style table**: total mapping from (disabled, error, variant) to a style
//! - **Render description**: label, input, trailing affordances and footer
//! - **Transient state**: password reveal and focus flags
//! - **Edit model**: keystroke classification into text replacements
//! - **Gallery**: state for the demonstration harness
//! - **Inspection**: JSON reports behind the `textfield` CLI
//!
//! # Example
//!
//! ```rust
//! use textfield_core::{FieldConfig, FieldState, InputKind, TextField};
//!
//! let field: TextField<()> = TextField::new(
//!     FieldConfig::new("password")
//!         .kind(InputKind::Password)
//!         .value("secret"),
//! );
//! let mut state = FieldState::new();
//!
//! assert_eq!(field.render(&state).input.effective_kind, InputKind::Password);
//! state.toggle_reveal(field.config());
//! assert_eq!(field.render(&state).input.effective_kind, InputKind::Text);
//! ```

pub mod edit;
pub mod field;
pub mod gallery;
pub mod inspect;
pub mod render;
pub mod style;
pub mod types;

// Re-export commonly used types
pub use edit::{Edit, KeyModifiers};
pub use field::{ChangeHandler, ClearHandler, FieldConfig, FieldState, Handlers, TextField};
pub use gallery::{GalleryEntry, GalleryState, GallerySection, Scenario, CHECKLIST};
pub use render::{Affordance, FieldRender, Footer, InputPart, LabelPart};
pub use style::{select_style, InputStyle};
pub use types::{ApiResponse, ColorTheme, InputKind, Size, Variant};

/// Error types for textfield-core operations.
///
/// The control itself never fails; these cover parsing of external input
/// such as CLI arguments and JSON configuration files.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unknown {field}: {value}")]
    UnknownOption { field: &'static str, value: String },
}

/// Result type for textfield-core operations.
pub type Result<T> = std::result::Result<T, Error>;
