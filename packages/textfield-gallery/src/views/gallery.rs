//! Gallery view
//!
//! Lays out one text field per gallery entry, grouped by section, followed by
//! the checklist of demonstrated behaviours. Renders inline within the
//! parent AppRoot context.

use gpui::prelude::*;
use gpui::*;
use textfield_core::{GalleryEntry, GallerySection, GalleryState, CHECKLIST};

use crate::components::text_field::TextInput;
use crate::state;
use crate::theme::Theme;

/// Gallery rendering functions
pub struct GalleryView;

impl GalleryView {
    /// Render every section and the checklist
    pub fn render_inline(gallery: &GalleryState, theme: &Theme) -> impl IntoElement {
        div()
            .flex()
            .flex_col()
            .gap(px(24.0))
            .children(
                GallerySection::ALL
                    .into_iter()
                    .map(|section| Self::render_section(section, gallery.section(section), theme)),
            )
            .child(Self::render_checklist(theme))
    }

    fn render_section(
        section: GallerySection,
        entries: Vec<GalleryEntry>,
        theme: &Theme,
    ) -> impl IntoElement {
        div()
            .flex()
            .flex_col()
            .gap(px(16.0))
            .p(px(20.0))
            .rounded(px(12.0))
            .bg(theme.background_element)
            .border_1()
            .border_color(theme.border_subtle)
            .child(
                div()
                    .text_lg()
                    .font_weight(FontWeight::SEMIBOLD)
                    .text_color(theme.text)
                    .child(section.title()),
            )
            .child(
                div()
                    .flex()
                    .flex_wrap()
                    .gap(px(16.0))
                    .children(entries.into_iter().map(|entry| {
                        div()
                            .w(px(280.0))
                            .child(Self::render_field(section, entry))
                    })),
            )
    }

    fn render_field(section: GallerySection, entry: GalleryEntry) -> TextInput {
        let scenario = entry.scenario;
        let input = TextInput::new(entry.config)
            .on_change(move |text, cx| state::set_value(scenario, text, cx));

        // Variant entries clear through the empty-change fallback
        match section {
            GallerySection::States => input.on_clear(move |cx| state::clear_value(scenario, cx)),
            GallerySection::Variants | GallerySection::Sizes => input,
        }
    }

    fn render_checklist(theme: &Theme) -> impl IntoElement {
        div()
            .flex()
            .flex_col()
            .gap(px(8.0))
            .p(px(20.0))
            .rounded(px(12.0))
            .bg(theme.background_element)
            .border_1()
            .border_color(theme.border_subtle)
            .child(
                div()
                    .text_lg()
                    .font_weight(FontWeight::SEMIBOLD)
                    .text_color(theme.text)
                    .child("Checklist"),
            )
            .children(CHECKLIST.iter().map(|item| {
                div()
                    .flex()
                    .gap(px(8.0))
                    .text_sm()
                    .child(div().text_color(theme.success).child("\u{2713}"))
                    .child(div().text_color(theme.text_muted).child(*item))
            }))
    }
}
