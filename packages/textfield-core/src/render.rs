//! Render description of a text field.
//!
//! A `FieldRender` is what a toolkit needs to draw one frame of the control:
//! which parts exist, in which order, with which accessibility wiring.

use serde::{Deserialize, Serialize};

use crate::field::{FieldConfig, FieldState};
use crate::style::{select_style, InputStyle};
use crate::types::{ColorTheme, InputKind, Size};

/// Character used to mask password values.
pub const MASK_CHAR: char = '\u{2022}';

/// Full render of one field.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldRender {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<LabelPart>,
    pub input: InputPart,
    /// Trailing affordances in display order.
    pub trailing: Vec<Affordance>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub footer: Option<Footer>,
    pub style: InputStyle,
    pub size: Size,
    pub theme: ColorTheme,
    pub focused: bool,
    /// Style and size classes, in that order.
    pub classes: Vec<&'static str>,
}

/// Label bound to the input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelPart {
    pub text: String,
    /// Id of the input this label describes.
    pub html_for: String,
}

/// The input element itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputPart {
    pub id: String,
    pub effective_kind: InputKind,
    /// The caller's value, never altered by the control.
    pub value: String,
    /// What is drawn inside the box: the value, masked while it is a password.
    pub display: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    pub disabled: bool,
    pub aria_invalid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aria_describedby: Option<String>,
}

/// Trailing decoration after the input text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Affordance {
    Loading,
    Clear,
    RevealToggle { revealed: bool },
}

/// Message region under the input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Footer {
    Error { id: String, text: String },
    Helper { id: String, text: String },
}

impl Footer {
    pub fn id(&self) -> &str {
        match self {
            Footer::Error { id, .. } | Footer::Helper { id, .. } => id,
        }
    }

    pub fn text(&self) -> &str {
        match self {
            Footer::Error { text, .. } | Footer::Helper { text, .. } => text,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Footer::Error { .. })
    }
}

impl FieldRender {
    /// Build the render for a configuration and its transient state.
    pub fn build(config: &FieldConfig, state: &FieldState) -> Self {
        let has_error = config.has_error();
        let effective_kind = config.effective_kind(state.is_revealed());

        let footer = if has_error {
            Some(Footer::Error {
                id: config.error_id(),
                text: config.error_message.clone().unwrap_or_default(),
            })
        } else {
            config.helper().map(|text| Footer::Helper {
                id: config.helper_id(),
                text: text.to_string(),
            })
        };

        let display = if effective_kind == InputKind::Password {
            config.value.chars().map(|_| MASK_CHAR).collect()
        } else {
            config.value.clone()
        };

        let mut trailing = Vec::new();
        if config.loading {
            trailing.push(Affordance::Loading);
        }
        if config.shows_clear_button() {
            trailing.push(Affordance::Clear);
        }
        if config.shows_reveal_toggle() {
            trailing.push(Affordance::RevealToggle {
                revealed: state.is_revealed(),
            });
        }

        let style = select_style(config.disabled, has_error, config.variant);
        let classes = style
            .classes()
            .iter()
            .chain(config.size.classes())
            .copied()
            .collect();

        Self {
            label: config.label.as_ref().map(|text| LabelPart {
                text: text.clone(),
                html_for: config.id.clone(),
            }),
            input: InputPart {
                id: config.id.clone(),
                effective_kind,
                value: config.value.clone(),
                display,
                placeholder: config.placeholder.clone(),
                disabled: config.disabled,
                aria_invalid: has_error,
                aria_describedby: footer.as_ref().map(|f| f.id().to_string()),
            },
            trailing,
            footer,
            style,
            size: config.size,
            theme: config.theme,
            focused: state.is_focused(),
            classes,
        }
    }

    pub fn has_affordance(&self, affordance: Affordance) -> bool {
        self.trailing.contains(&affordance)
    }

    pub fn shows_clear(&self) -> bool {
        self.has_affordance(Affordance::Clear)
    }

    pub fn shows_loading(&self) -> bool {
        self.has_affordance(Affordance::Loading)
    }

    pub fn reveal_toggle(&self) -> Option<bool> {
        self.trailing.iter().find_map(|a| match a {
            Affordance::RevealToggle { revealed } => Some(*revealed),
            _ => None,
        })
    }
}
