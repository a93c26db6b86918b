//! State and layout of the demonstration gallery.
//!
//! The gallery keeps one text value per named scenario and a page-level
//! theme flag, and lays out the field configurations it shows.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::field::FieldConfig;
use crate::types::{ColorTheme, InputKind, Size, Variant};
use crate::Error;

/// Behaviours the gallery demonstrates.
pub const CHECKLIST: &[&str] = &[
    "Three variants: filled, outlined and ghost",
    "Three sizes: small, medium and large",
    "Label bound to its input",
    "Helper text under the input",
    "Error message replaces helper text and marks the input invalid",
    "Password visibility toggle",
    "Clear button when the field has text",
    "Loading indicator hides clear and reveal actions",
    "Disabled state ignores input",
    "Light and dark themes",
];

/// A named demo scenario with its own stored text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scenario {
    Basic,
    Email,
    Password,
    Disabled,
    Error,
    Loading,
}

impl Scenario {
    pub const ALL: [Scenario; 6] = [
        Scenario::Basic,
        Scenario::Email,
        Scenario::Password,
        Scenario::Disabled,
        Scenario::Error,
        Scenario::Loading,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Scenario::Basic => "basic",
            Scenario::Email => "email",
            Scenario::Password => "password",
            Scenario::Disabled => "disabled",
            Scenario::Error => "error",
            Scenario::Loading => "loading",
        }
    }

    /// Text the scenario starts with.
    pub fn initial_value(&self) -> &'static str {
        match self {
            Scenario::Disabled => "Locked value",
            Scenario::Error => "admin",
            Scenario::Loading => "checking",
            Scenario::Basic | Scenario::Email | Scenario::Password => "",
        }
    }

    /// Field configuration for this scenario without its value.
    fn config(&self) -> FieldConfig {
        let config = FieldConfig::new(format!("state-{}", self.as_str()));
        match self {
            Scenario::Basic => config
                .label("Full name")
                .placeholder("Jane Doe")
                .helper_text("As it appears on your ID")
                .show_clear_button(true),
            Scenario::Email => config
                .kind(InputKind::Email)
                .label("Email")
                .placeholder("you@example.com")
                .helper_text("We never share your email")
                .show_clear_button(true),
            Scenario::Password => config
                .kind(InputKind::Password)
                .label("Password")
                .placeholder("At least 8 characters")
                .helper_text("Use letters, numbers and symbols"),
            Scenario::Disabled => config
                .label("Account id")
                .helper_text("Managed by your administrator")
                .disabled(true)
                .show_clear_button(true),
            Scenario::Error => config
                .label("Username")
                .helper_text("Pick something unique")
                .error_message("That username is already taken")
                .show_clear_button(true),
            Scenario::Loading => config
                .label("Search")
                .placeholder("Type to search")
                .loading(true)
                .show_clear_button(true),
        }
    }
}

impl FromStr for Scenario {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Scenario::ALL
            .into_iter()
            .find(|scenario| scenario.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::UnknownOption {
                field: "scenario",
                value: s.to_string(),
            })
    }
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Group a gallery entry is shown in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GallerySection {
    Variants,
    Sizes,
    States,
}

impl GallerySection {
    pub const ALL: [GallerySection; 3] = [
        GallerySection::Variants,
        GallerySection::Sizes,
        GallerySection::States,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            GallerySection::Variants => "Variants",
            GallerySection::Sizes => "Sizes",
            GallerySection::States => "States",
        }
    }
}

/// One field shown in the gallery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GalleryEntry {
    pub section: GallerySection,
    /// Scenario whose stored text this field shows and edits.
    pub scenario: Scenario,
    pub config: FieldConfig,
}

/// The gallery's local state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GalleryState {
    values: BTreeMap<Scenario, String>,
    theme: ColorTheme,
}

impl Default for GalleryState {
    fn default() -> Self {
        Self::new(ColorTheme::Light)
    }
}

impl GalleryState {
    pub fn new(theme: ColorTheme) -> Self {
        let values = Scenario::ALL
            .into_iter()
            .map(|s| (s, s.initial_value().to_string()))
            .collect();
        Self { values, theme }
    }

    /// Override starting values for some scenarios.
    pub fn with_values<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = (Scenario, S)>,
        S: Into<String>,
    {
        for (scenario, value) in values {
            self.values.insert(scenario, value.into());
        }
        self
    }

    pub fn value(&self, scenario: Scenario) -> &str {
        self.values.get(&scenario).map(String::as_str).unwrap_or_default()
    }

    pub fn theme(&self) -> ColorTheme {
        self.theme
    }

    /// A field of `scenario` asked for new text.
    pub fn apply_change(&mut self, scenario: Scenario, text: &str) {
        tracing::trace!("Scenario {} changed to {:?}", scenario, text);
        self.values.insert(scenario, text.to_string());
    }

    /// A field of `scenario` pressed its clear action.
    pub fn clear(&mut self, scenario: Scenario) {
        tracing::debug!("Scenario {} cleared", scenario);
        self.values.insert(scenario, String::new());
    }

    pub fn toggle_theme(&mut self) -> ColorTheme {
        self.theme = self.theme.toggled();
        self.theme
    }

    pub fn set_theme(&mut self, theme: ColorTheme) {
        self.theme = theme;
    }

    /// Every field the gallery shows, in display order, reflecting current state.
    pub fn entries(&self) -> Vec<GalleryEntry> {
        let mut entries = Vec::new();

        let basic = self.value(Scenario::Basic);

        for variant in Variant::ALL {
            entries.push(GalleryEntry {
                section: GallerySection::Variants,
                scenario: Scenario::Basic,
                config: FieldConfig::new(format!("variant-{}", variant))
                    .label(format!("{} variant", capitalize(variant.as_str())))
                    .placeholder("Type something")
                    .variant(variant)
                    .show_clear_button(true)
                    .value(basic),
            });
        }

        for size in Size::ALL {
            entries.push(GalleryEntry {
                section: GallerySection::Sizes,
                scenario: Scenario::Basic,
                config: FieldConfig::new(format!("size-{}", size))
                    .label(format!("{} size", capitalize(size.as_str())))
                    .placeholder("Type something")
                    .size(size)
                    .value(basic),
            });
        }

        for scenario in Scenario::ALL {
            entries.push(GalleryEntry {
                section: GallerySection::States,
                scenario,
                config: scenario.config().value(self.value(scenario)),
            });
        }

        for entry in &mut entries {
            entry.config.theme = self.theme;
        }
        entries
    }

    /// Entries of one section.
    pub fn section(&self, section: GallerySection) -> Vec<GalleryEntry> {
        self.entries()
            .into_iter()
            .filter(|e| e.section == section)
            .collect()
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::TextField;

    #[test]
    fn test_initial_values() {
        let state = GalleryState::default();
        assert_eq!(state.value(Scenario::Basic), "");
        assert_eq!(state.value(Scenario::Error), "admin");
        assert_eq!(state.theme(), ColorTheme::Light);
    }

    #[test]
    fn test_change_and_clear() {
        let mut state = GalleryState::default();
        state.apply_change(Scenario::Email, "a@b.c");
        assert_eq!(state.value(Scenario::Email), "a@b.c");
        assert_eq!(state.value(Scenario::Basic), "");

        state.clear(Scenario::Email);
        assert_eq!(state.value(Scenario::Email), "");
    }

    #[test]
    fn test_toggle_theme_applies_to_entries() {
        let mut state = GalleryState::default();
        assert_eq!(state.toggle_theme(), ColorTheme::Dark);
        assert!(state
            .entries()
            .iter()
            .all(|e| e.config.theme == ColorTheme::Dark));
    }

    #[test]
    fn test_entries_layout() {
        let state = GalleryState::default();
        assert_eq!(state.section(GallerySection::Variants).len(), 3);
        assert_eq!(state.section(GallerySection::Sizes).len(), 3);
        assert_eq!(state.section(GallerySection::States).len(), 6);

        let ids: Vec<_> = state.entries().into_iter().map(|e| e.config.id).collect();
        let mut unique = ids.clone();
        unique.sort();
        unique.dedup();
        assert_eq!(ids.len(), unique.len());
    }

    #[test]
    fn test_entries_reflect_values() {
        let state = GalleryState::default().with_values([(Scenario::Basic, "hi")]);
        for entry in state.section(GallerySection::Variants) {
            assert_eq!(entry.config.value, "hi");
        }
        let error = state
            .section(GallerySection::States)
            .into_iter()
            .find(|e| e.scenario == Scenario::Error)
            .unwrap();
        assert!(error.config.has_error());
        assert_eq!(error.config.value, "admin");
    }

    #[test]
    fn test_variant_clear_falls_back_to_change() {
        let mut state = GalleryState::default().with_values([(Scenario::Basic, "hi")]);
        let entry = state
            .section(GallerySection::Variants)
            .into_iter()
            .next()
            .unwrap();
        assert!(entry.config.shows_clear_button());

        let scenario = entry.scenario;
        let field: TextField<GalleryState> = TextField::new(entry.config)
            .on_change(move |text, state: &mut GalleryState| state.apply_change(scenario, text));
        assert!(field.clear(&mut state));
        assert_eq!(state.value(Scenario::Basic), "");
    }

    #[test]
    fn test_scenario_parse() {
        assert_eq!("Password".parse::<Scenario>().unwrap(), Scenario::Password);
        assert!("nope".parse::<Scenario>().is_err());
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("ghost"), "Ghost");
        assert_eq!(capitalize(""), "");
    }
}
