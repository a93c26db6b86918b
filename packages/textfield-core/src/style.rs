//! Style selection for the input box.
//!
//! The style depends only on `(disabled, error, variant)`. Disabled wins over
//! error, and error wins over the variant.

use serde::{Deserialize, Serialize};

use crate::types::Variant;

/// One of the fixed class combinations an input box can be drawn with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputStyle {
    Disabled,
    Error,
    Filled,
    Outlined,
    Ghost,
}

/// Select the input style.
pub fn select_style(disabled: bool, error: bool, variant: Variant) -> InputStyle {
    match (disabled, error, variant) {
        (true, _, _) => InputStyle::Disabled,
        (false, true, _) => InputStyle::Error,
        (false, false, Variant::Filled) => InputStyle::Filled,
        (false, false, Variant::Outlined) => InputStyle::Outlined,
        (false, false, Variant::Ghost) => InputStyle::Ghost,
    }
}

impl InputStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            InputStyle::Disabled => "disabled",
            InputStyle::Error => "error",
            InputStyle::Filled => "filled",
            InputStyle::Outlined => "outlined",
            InputStyle::Ghost => "ghost",
        }
    }

    /// Class tokens for this style.
    pub fn classes(&self) -> &'static [&'static str] {
        match self {
            InputStyle::Disabled => &[
                "bg-gray-100",
                "border",
                "border-gray-200",
                "text-gray-400",
                "cursor-not-allowed",
            ],
            InputStyle::Error => &[
                "bg-white",
                "border",
                "border-red-500",
                "focus:ring-2",
                "focus:ring-red-500/30",
            ],
            InputStyle::Filled => &[
                "bg-gray-100",
                "border",
                "border-transparent",
                "focus:bg-white",
                "focus:border-blue-500",
            ],
            InputStyle::Outlined => &[
                "bg-white",
                "border",
                "border-gray-300",
                "focus:border-blue-500",
                "focus:ring-2",
                "focus:ring-blue-500/30",
            ],
            InputStyle::Ghost => &[
                "bg-transparent",
                "border",
                "border-transparent",
                "hover:bg-gray-50",
                "focus:border-blue-500",
            ],
        }
    }

    /// Whether the box draws a visible border when idle.
    pub fn has_idle_border(&self) -> bool {
        matches!(
            self,
            InputStyle::Disabled | InputStyle::Error | InputStyle::Outlined
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_wins() {
        for variant in Variant::ALL {
            for error in [false, true] {
                assert_eq!(select_style(true, error, variant), InputStyle::Disabled);
            }
        }
    }

    #[test]
    fn test_error_wins_over_variant() {
        for variant in Variant::ALL {
            assert_eq!(select_style(false, true, variant), InputStyle::Error);
        }
    }

    #[test]
    fn test_variant_styles() {
        assert_eq!(select_style(false, false, Variant::Filled), InputStyle::Filled);
        assert_eq!(select_style(false, false, Variant::Outlined), InputStyle::Outlined);
        assert_eq!(select_style(false, false, Variant::Ghost), InputStyle::Ghost);
    }

    #[test]
    fn test_unknown_variant_name_uses_outlined_style() {
        let variant = Variant::from_name("chrome");
        assert_eq!(select_style(false, false, variant), InputStyle::Outlined);
    }

    #[test]
    fn test_classes_distinct() {
        let styles = [
            InputStyle::Disabled,
            InputStyle::Error,
            InputStyle::Filled,
            InputStyle::Outlined,
            InputStyle::Ghost,
        ];
        for (i, a) in styles.iter().enumerate() {
            for b in &styles[i + 1..] {
                assert_ne!(a.classes(), b.classes());
            }
        }
    }
}
