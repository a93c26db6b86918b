//! Enumerated configuration options for the text field.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::Error;

/// Visual variant of the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    Filled,
    Ghost,
    /// Also the fallback for unrecognized variant names.
    #[default]
    #[serde(other)]
    Outlined,
}

impl Variant {
    pub const ALL: [Variant; 3] = [Variant::Filled, Variant::Outlined, Variant::Ghost];

    pub fn as_str(&self) -> &'static str {
        match self {
            Variant::Filled => "filled",
            Variant::Outlined => "outlined",
            Variant::Ghost => "ghost",
        }
    }

    /// Parse a variant name, falling back to `Outlined` for anything unknown.
    pub fn from_name(name: &str) -> Self {
        name.parse().unwrap_or_else(|_| {
            tracing::debug!("Unknown variant {:?}, using outlined", name);
            Variant::Outlined
        })
    }
}

impl FromStr for Variant {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "filled" => Ok(Variant::Filled),
            "outlined" => Ok(Variant::Outlined),
            "ghost" => Ok(Variant::Ghost),
            _ => Err(Error::UnknownOption {
                field: "variant",
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Field size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Size {
    /// 32px high, 12px text.
    Small,
    /// 40px high, 14px text.
    #[default]
    Medium,
    /// 48px high, 16px text.
    Large,
}

impl Size {
    pub const ALL: [Size; 3] = [Size::Small, Size::Medium, Size::Large];

    pub fn as_str(&self) -> &'static str {
        match self {
            Size::Small => "small",
            Size::Medium => "medium",
            Size::Large => "large",
        }
    }

    /// Control height in pixels.
    pub fn height(&self) -> f32 {
        match self {
            Size::Small => 32.0,
            Size::Medium => 40.0,
            Size::Large => 48.0,
        }
    }

    /// Horizontal padding in pixels.
    pub fn padding_x(&self) -> f32 {
        match self {
            Size::Small => 10.0,
            Size::Medium => 12.0,
            Size::Large => 16.0,
        }
    }

    /// Text size in pixels.
    pub fn text_size(&self) -> f32 {
        match self {
            Size::Small => 12.0,
            Size::Medium => 14.0,
            Size::Large => 16.0,
        }
    }

    /// Sizing class tokens.
    pub fn classes(&self) -> &'static [&'static str] {
        match self {
            Size::Small => &["h-8", "px-2.5", "text-xs"],
            Size::Medium => &["h-10", "px-3", "text-sm"],
            Size::Large => &["h-12", "px-4", "text-base"],
        }
    }
}

impl FromStr for Size {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "small" | "sm" => Ok(Size::Small),
            "medium" | "md" => Ok(Size::Medium),
            "large" | "lg" => Ok(Size::Large),
            _ => Err(Error::UnknownOption {
                field: "size",
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Declared kind of the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputKind {
    #[default]
    Text,
    Email,
    Password,
}

impl InputKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            InputKind::Text => "text",
            InputKind::Email => "email",
            InputKind::Password => "password",
        }
    }
}

impl FromStr for InputKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "text" => Ok(InputKind::Text),
            "email" => Ok(InputKind::Email),
            "password" => Ok(InputKind::Password),
            _ => Err(Error::UnknownOption {
                field: "kind",
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for InputKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Color theme the field is drawn in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorTheme {
    #[default]
    Light,
    Dark,
}

impl ColorTheme {
    pub fn as_str(&self) -> &'static str {
        match self {
            ColorTheme::Light => "light",
            ColorTheme::Dark => "dark",
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, ColorTheme::Dark)
    }

    /// The opposite theme.
    pub fn toggled(&self) -> Self {
        match self {
            ColorTheme::Light => ColorTheme::Dark,
            ColorTheme::Dark => ColorTheme::Light,
        }
    }
}

impl FromStr for ColorTheme {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "light" => Ok(ColorTheme::Light),
            "dark" => Ok(ColorTheme::Dark),
            _ => Err(Error::UnknownOption {
                field: "theme",
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for ColorTheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// API response wrapper for JSON output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    /// Create a successful response.
    pub fn ok(data: T) -> Self {
        Self {
            ok: true,
            data: Some(data),
            error: None,
        }
    }

    /// Create an error response.
    pub fn err(error: impl Into<String>) -> Self {
        Self {
            ok: false,
            data: None,
            error: Some(error.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        assert_eq!(Variant::default(), Variant::Outlined);
        assert_eq!(Size::default(), Size::Medium);
        assert_eq!(InputKind::default(), InputKind::Text);
        assert_eq!(ColorTheme::default(), ColorTheme::Light);
    }

    #[test]
    fn test_variant_strict_parse() {
        assert_eq!("Ghost".parse::<Variant>().unwrap(), Variant::Ghost);
        let err = "neon".parse::<Variant>().unwrap_err();
        assert!(matches!(err, Error::UnknownOption { field: "variant", .. }));
    }

    #[test]
    fn test_variant_lenient_fallback() {
        assert_eq!(Variant::from_name("filled"), Variant::Filled);
        assert_eq!(Variant::from_name("neon"), Variant::Outlined);
        assert_eq!(Variant::from_name(""), Variant::Outlined);
    }

    #[test]
    fn test_variant_deserialize_unknown() {
        let variant: Variant = serde_json::from_str("\"sparkly\"").unwrap();
        assert_eq!(variant, Variant::Outlined);
        let variant: Variant = serde_json::from_str("\"ghost\"").unwrap();
        assert_eq!(variant, Variant::Ghost);
    }

    #[test]
    fn test_variant_names_serialize() {
        for variant in Variant::ALL {
            let json = serde_json::to_string(&variant).unwrap();
            assert_eq!(json, format!("\"{}\"", variant.as_str()));
        }
        assert_eq!(Variant::ALL[1], Variant::Outlined);
    }

    #[test]
    fn test_size_metrics() {
        assert_eq!(Size::Small.height(), 32.0);
        assert_eq!(Size::Medium.height(), 40.0);
        assert_eq!(Size::Large.height(), 48.0);
        assert!(Size::Small.text_size() < Size::Large.text_size());
        assert_eq!("lg".parse::<Size>().unwrap(), Size::Large);
    }

    #[test]
    fn test_theme_toggle() {
        assert_eq!(ColorTheme::Light.toggled(), ColorTheme::Dark);
        assert_eq!(ColorTheme::Dark.toggled().toggled(), ColorTheme::Dark);
        assert!(ColorTheme::Dark.is_dark());
    }

    #[test]
    fn test_api_response() {
        let response: ApiResponse<String> = ApiResponse::ok("test".to_string());
        assert!(response.ok);
        assert_eq!(response.data, Some("test".to_string()));

        let err_response: ApiResponse<String> = ApiResponse::err("error");
        assert!(!err_response.ok);
        assert_eq!(err_response.error, Some("error".to_string()));
    }
}
