//! Root view
//!
//! AppRoot draws the page header with the theme toggle and the gallery, and
//! re-renders whenever the shared state changes.

use gpui::prelude::*;
use gpui::*;

use crate::state::{self, AppState};
use crate::theme;
use crate::views::gallery::GalleryView;

/// Root view of the application
pub struct AppRoot {
    _state_subscription: Subscription,
}

impl AppRoot {
    pub fn new(cx: &mut Context<Self>) -> Self {
        let subscription = cx.observe_global::<AppState>(|_this, cx| cx.notify());

        Self {
            _state_subscription: subscription,
        }
    }

    fn render_header(&self, cx: &Context<Self>) -> impl IntoElement {
        let theme = theme::current_theme(cx);
        let toggle_label = if theme.is_dark {
            "Light mode"
        } else {
            "Dark mode"
        };

        div()
            .h(px(56.0))
            .px(px(24.0))
            .flex()
            .items_center()
            .justify_between()
            .border_b_1()
            .border_color(theme.border)
            .bg(theme.background_panel)
            .child(
                div()
                    .flex()
                    .flex_col()
                    .child(
                        div()
                            .text_lg()
                            .font_weight(FontWeight::BOLD)
                            .text_color(theme.text)
                            .child("Text Field"),
                    )
                    .child(
                        div()
                            .text_xs()
                            .text_color(theme.text_muted)
                            .child("Variants, sizes and states"),
                    ),
            )
            .child(
                div()
                    .id("theme-toggle")
                    .px(px(16.0))
                    .py(px(8.0))
                    .rounded(px(6.0))
                    .bg(theme.background_element)
                    .text_sm()
                    .text_color(theme.text)
                    .cursor_pointer()
                    .hover(|s| s.opacity(0.9))
                    .on_click(cx.listener(|_this, _event, _window, cx| {
                        state::toggle_theme(cx);
                        cx.notify();
                    }))
                    .child(toggle_label),
            )
    }
}

impl Render for AppRoot {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let theme = theme::current_theme(cx).clone();
        let gallery = cx.global::<AppState>().gallery.clone();

        div()
            .flex()
            .flex_col()
            .size_full()
            .bg(theme.background)
            .text_color(theme.text)
            .child(self.render_header(cx))
            .child(
                div()
                    .id("gallery-scroll")
                    .flex_1()
                    .overflow_y_scroll()
                    .p(px(24.0))
                    .child(GalleryView::render_inline(&gallery, &theme)),
            )
    }
}
