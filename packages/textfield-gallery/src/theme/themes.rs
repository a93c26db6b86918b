//! Built-in light and dark themes

use super::colors::color;
use super::Theme;

pub fn light() -> Theme {
    Theme {
        id: "light",
        name: "Light",
        is_dark: false,

        primary: color(0x2563eb),
        error: color(0xdc2626),
        success: color(0x16a34a),

        text: color(0x111827),
        text_muted: color(0x6b7280),
        text_disabled: color(0x9ca3af),

        background: color(0xffffff),
        background_panel: color(0xf9fafb),
        background_element: color(0xf3f4f6),

        border: color(0xd1d5db),
        border_subtle: color(0xe5e7eb),
    }
}

pub fn dark() -> Theme {
    Theme {
        id: "dark",
        name: "Dark",
        is_dark: true,

        primary: color(0x60a5fa),
        error: color(0xf87171),
        success: color(0x4ade80),

        text: color(0xf3f4f6),
        text_muted: color(0x9ca3af),
        text_disabled: color(0x6b7280),

        background: color(0x111827),
        background_panel: color(0x0b1120),
        background_element: color(0x1f2937),

        border: color(0x4b5563),
        border_subtle: color(0x374151),
    }
}
