//! The text field control: configuration, handlers and transient state.
//!
//! The field never owns its text. The caller passes the current value in
//! `FieldConfig::value` and receives replacement text through the change
//! handler.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;
use std::rc::Rc;

use crate::render::FieldRender;
use crate::types::{ColorTheme, InputKind, Size, Variant};
use crate::Result;

/// Called with the replacement text whenever the field wants its value changed.
pub type ChangeHandler<Cx> = Rc<dyn Fn(&str, &mut Cx)>;

/// Called when the clear action is pressed.
pub type ClearHandler<Cx> = Rc<dyn Fn(&mut Cx)>;

/// Caller-supplied configuration for one render of the field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldConfig {
    /// Id of the input element. Footer ids are derived from it.
    pub id: String,
    pub value: String,
    pub label: Option<String>,
    pub placeholder: Option<String>,
    pub helper_text: Option<String>,
    pub error_message: Option<String>,
    pub disabled: bool,
    pub invalid: bool,
    pub loading: bool,
    pub variant: Variant,
    pub size: Size,
    pub kind: InputKind,
    pub show_clear_button: bool,
    pub theme: ColorTheme,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self::new("field")
    }
}

impl FieldConfig {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            value: String::new(),
            label: None,
            placeholder: None,
            helper_text: None,
            error_message: None,
            disabled: false,
            invalid: false,
            loading: false,
            variant: Variant::Outlined,
            size: Size::Medium,
            kind: InputKind::Text,
            show_clear_button: false,
            theme: ColorTheme::Light,
        }
    }

    /// Load a configuration from a JSON file. Missing keys take their defaults.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    pub fn helper_text(mut self, text: impl Into<String>) -> Self {
        self.helper_text = Some(text.into());
        self
    }

    pub fn error_message(mut self, message: impl Into<String>) -> Self {
        self.error_message = Some(message.into());
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn invalid(mut self, invalid: bool) -> Self {
        self.invalid = invalid;
        self
    }

    pub fn loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    pub fn variant(mut self, variant: Variant) -> Self {
        self.variant = variant;
        self
    }

    pub fn size(mut self, size: Size) -> Self {
        self.size = size;
        self
    }

    pub fn kind(mut self, kind: InputKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn show_clear_button(mut self, show: bool) -> Self {
        self.show_clear_button = show;
        self
    }

    pub fn theme(mut self, theme: ColorTheme) -> Self {
        self.theme = theme;
        self
    }

    /// `invalid` is set or the error message is non-empty.
    pub fn has_error(&self) -> bool {
        self.invalid || self.error_message.as_deref().is_some_and(|m| !m.is_empty())
    }

    /// Helper text, if present and non-empty.
    pub fn helper(&self) -> Option<&str> {
        self.helper_text.as_deref().filter(|t| !t.is_empty())
    }

    pub fn shows_clear_button(&self) -> bool {
        self.show_clear_button && !self.value.is_empty() && !self.loading && !self.disabled
    }

    pub fn shows_reveal_toggle(&self) -> bool {
        self.kind == InputKind::Password && !self.loading
    }

    /// The type the input is drawn as.
    pub fn effective_kind(&self, revealed: bool) -> InputKind {
        match (self.kind, revealed) {
            (InputKind::Password, true) => InputKind::Text,
            (kind, _) => kind,
        }
    }

    pub fn error_id(&self) -> String {
        format!("{}-error", self.id)
    }

    pub fn helper_id(&self) -> String {
        format!("{}-helper", self.id)
    }
}

/// Optional change and clear handlers.
///
/// `Cx` is whatever context the host toolkit threads through its callbacks.
pub struct Handlers<Cx> {
    pub on_change: Option<ChangeHandler<Cx>>,
    pub on_clear: Option<ClearHandler<Cx>>,
}

impl<Cx> Default for Handlers<Cx> {
    fn default() -> Self {
        Self {
            on_change: None,
            on_clear: None,
        }
    }
}

impl<Cx> Clone for Handlers<Cx> {
    fn clone(&self) -> Self {
        Self {
            on_change: self.on_change.clone(),
            on_clear: self.on_clear.clone(),
        }
    }
}

impl<Cx> fmt::Debug for Handlers<Cx> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Handlers")
            .field("on_change", &self.on_change.is_some())
            .field("on_clear", &self.on_clear.is_some())
            .finish()
    }
}

impl<Cx> Handlers<Cx> {
    fn change(&self, text: &str, cx: &mut Cx) {
        match &self.on_change {
            Some(on_change) => on_change(text, cx),
            None => tracing::trace!("Change to {:?} dropped, no handler", text),
        }
    }
}

/// A configured text field: options plus handlers.
pub struct TextField<Cx> {
    config: FieldConfig,
    handlers: Handlers<Cx>,
}

impl<Cx> Clone for TextField<Cx> {
    fn clone(&self) -> Self {
        Self {
            config: self.config.clone(),
            handlers: self.handlers.clone(),
        }
    }
}

impl<Cx> fmt::Debug for TextField<Cx> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TextField")
            .field("config", &self.config)
            .field("handlers", &self.handlers)
            .finish()
    }
}

impl<Cx> TextField<Cx> {
    pub fn new(config: FieldConfig) -> Self {
        Self {
            config,
            handlers: Handlers::default(),
        }
    }

    pub fn with_handlers(config: FieldConfig, handlers: Handlers<Cx>) -> Self {
        Self { config, handlers }
    }

    pub fn on_change(mut self, handler: impl Fn(&str, &mut Cx) + 'static) -> Self {
        self.handlers.on_change = Some(Rc::new(handler));
        self
    }

    pub fn on_clear(mut self, handler: impl Fn(&mut Cx) + 'static) -> Self {
        self.handlers.on_clear = Some(Rc::new(handler));
        self
    }

    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut FieldConfig {
        &mut self.config
    }

    pub fn handlers(&self) -> &Handlers<Cx> {
        &self.handlers
    }

    pub fn render(&self, state: &FieldState) -> FieldRender {
        FieldRender::build(&self.config, state)
    }

    /// The user produced new text. Returns whether a change was emitted.
    pub fn input(&self, text: &str, cx: &mut Cx) -> bool {
        if self.config.disabled {
            tracing::trace!("Input on disabled field {} ignored", self.config.id);
            return false;
        }
        self.handlers.change(text, cx);
        true
    }

    /// The user pressed the clear action. Returns whether it was handled.
    ///
    /// Uses the clear handler when there is one, otherwise emits a change to
    /// the empty string.
    pub fn clear(&self, cx: &mut Cx) -> bool {
        if !self.config.shows_clear_button() {
            tracing::trace!("Clear on field {} ignored, action hidden", self.config.id);
            return false;
        }
        match &self.handlers.on_clear {
            Some(on_clear) => on_clear(cx),
            None => self.handlers.change("", cx),
        }
        true
    }
}

/// Transient, instance-local UI state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FieldState {
    revealed: bool,
    focused: bool,
}

impl FieldState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// Flip password visibility. Returns whether the flag changed.
    pub fn toggle_reveal(&mut self, config: &FieldConfig) -> bool {
        if !config.shows_reveal_toggle() {
            return false;
        }
        self.revealed = !self.revealed;
        tracing::debug!("Field {} revealed: {}", config.id, self.revealed);
        true
    }

    pub fn focus(&mut self) {
        self.focused = true;
    }

    pub fn blur(&mut self) {
        self.focused = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type Log = Vec<String>;

    fn recording(config: FieldConfig) -> TextField<Log> {
        TextField::new(config).on_change(|text, log: &mut Log| log.push(text.to_string()))
    }

    #[test]
    fn test_defaults() {
        let config = FieldConfig::default();
        assert!(!config.disabled);
        assert!(!config.invalid);
        assert!(!config.loading);
        assert!(!config.show_clear_button);
        assert_eq!(config.variant, Variant::Outlined);
        assert_eq!(config.size, Size::Medium);
        assert_eq!(config.kind, InputKind::Text);
        assert_eq!(config.theme, ColorTheme::Light);
    }

    #[test]
    fn test_error_condition() {
        assert!(!FieldConfig::new("x").has_error());
        assert!(FieldConfig::new("x").invalid(true).has_error());
        assert!(FieldConfig::new("x").error_message("bad").has_error());
        assert!(!FieldConfig::new("x").error_message("").has_error());
    }

    #[test]
    fn test_input_emits_change() {
        let field = recording(FieldConfig::new("x").value("ab"));
        let mut log = Log::new();
        assert!(field.input("abc", &mut log));
        assert_eq!(log, vec!["abc"]);
        assert_eq!(field.config().value, "ab");
    }

    #[test]
    fn test_input_ignored_when_disabled() {
        let field = recording(FieldConfig::new("x").disabled(true));
        let mut log = Log::new();
        assert!(!field.input("a", &mut log));
        assert!(log.is_empty());
    }

    #[test]
    fn test_clear_prefers_clear_handler() {
        let field = recording(FieldConfig::new("x").value("abc").show_clear_button(true))
            .on_clear(|log: &mut Log| log.push("<cleared>".to_string()));
        let mut log = Log::new();
        assert!(field.clear(&mut log));
        assert_eq!(log, vec!["<cleared>"]);
    }

    #[test]
    fn test_clear_hidden_is_noop() {
        let field = recording(FieldConfig::new("x").value("abc"));
        let mut log = Log::new();
        assert!(!field.clear(&mut log));
        assert!(log.is_empty());
    }

    #[test]
    fn test_focus_blur() {
        let mut state = FieldState::new();
        state.focus();
        assert!(state.is_focused());
        state.blur();
        assert!(!state.is_focused());
        assert!(!state.is_revealed());
    }

    #[test]
    fn test_reveal_only_for_password() {
        let mut state = FieldState::new();
        assert!(!state.toggle_reveal(&FieldConfig::new("x")));
        assert!(!state.is_revealed());

        let loading = FieldConfig::new("x").kind(InputKind::Password).loading(true);
        assert!(!state.toggle_reveal(&loading));
    }

    #[test]
    fn test_config_from_json() {
        let config: FieldConfig =
            serde_json::from_str(r#"{"id":"pw","kind":"password","variant":"weird"}"#).unwrap();
        assert_eq!(config.kind, InputKind::Password);
        assert_eq!(config.variant, Variant::Outlined);
        assert_eq!(config.value, "");
    }
}
