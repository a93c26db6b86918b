//! Text field component
//!
//! Draws a `textfield_core::TextField` with GPUI. The value is owned by the
//! caller; reveal and focus flags live in a keyed entity so they survive
//! parent re-renders and are dropped with the element.

use gpui::prelude::*;
use gpui::*;
use std::rc::Rc;
use textfield_core::{
    Affordance, Edit, FieldConfig, FieldRender, FieldState, Footer, InputStyle, KeyModifiers,
    LabelPart, TextField,
};

use crate::theme::{with_alpha, Theme};

/// Per-instance state kept between frames
pub struct TextFieldState {
    field: FieldState,
    focus_handle: FocusHandle,
    _subscriptions: Vec<Subscription>,
}

impl TextFieldState {
    fn new(window: &mut Window, cx: &mut Context<Self>) -> Self {
        let focus_handle = cx.focus_handle();
        let subscriptions = vec![
            cx.on_focus(&focus_handle, window, |this, _window, cx| {
                this.field.focus();
                cx.notify();
            }),
            cx.on_blur(&focus_handle, window, |this, _window, cx| {
                this.field.blur();
                cx.notify();
            }),
        ];

        Self {
            field: FieldState::new(),
            focus_handle,
            _subscriptions: subscriptions,
        }
    }
}

/// Resolved colors for the input box
#[derive(Debug, Clone, Copy, PartialEq)]
struct FieldColors {
    background: Hsla,
    border: Hsla,
    text: Hsla,
    opacity: f32,
}

fn field_colors(style: InputStyle, focused: bool, theme: &Theme) -> FieldColors {
    let idle_or_focus = |idle: Hsla| if focused { theme.primary } else { idle };

    match style {
        InputStyle::Disabled => FieldColors {
            background: theme.background_element,
            border: theme.border_subtle,
            text: theme.text_disabled,
            opacity: 0.6,
        },
        InputStyle::Error => FieldColors {
            background: theme.background,
            border: theme.error,
            text: theme.text,
            opacity: 1.0,
        },
        InputStyle::Filled => FieldColors {
            background: if focused { theme.background } else { theme.background_element },
            border: idle_or_focus(Hsla::transparent_black()),
            text: theme.text,
            opacity: 1.0,
        },
        InputStyle::Outlined => FieldColors {
            background: theme.background,
            border: idle_or_focus(theme.border),
            text: theme.text,
            opacity: 1.0,
        },
        InputStyle::Ghost => FieldColors {
            background: if focused {
                with_alpha(theme.primary, 0.06)
            } else {
                Hsla::transparent_black()
            },
            border: idle_or_focus(Hsla::transparent_black()),
            text: theme.text,
            opacity: 1.0,
        },
    }
}

/// Text input element
#[derive(IntoElement)]
pub struct TextInput {
    field: TextField<App>,
}

impl TextInput {
    pub fn new(config: FieldConfig) -> Self {
        Self {
            field: TextField::new(config),
        }
    }

    /// Called with replacement text on every edit
    pub fn on_change(mut self, handler: impl Fn(&str, &mut App) + 'static) -> Self {
        self.field = self.field.on_change(handler);
        self
    }

    /// Called when the clear action is pressed; without it a change to "" is sent
    pub fn on_clear(mut self, handler: impl Fn(&mut App) + 'static) -> Self {
        self.field = self.field.on_clear(handler);
        self
    }
}

impl RenderOnce for TextInput {
    fn render(self, window: &mut Window, cx: &mut App) -> impl IntoElement {
        let id = self.field.config().id.clone();
        let state = window.use_keyed_state(
            SharedString::from(format!("{id}-state")),
            cx,
            TextFieldState::new,
        );
        let (field_state, focus_handle) = {
            let state = state.read(cx);
            (state.field, state.focus_handle.clone())
        };

        let render = self.field.render(&field_state);
        let theme = Theme::for_mode(render.theme);
        let field = Rc::new(self.field);

        div()
            .flex()
            .flex_col()
            .gap(px(6.0))
            .w_full()
            .when_some(render.label.clone(), |el, label| {
                el.child(render_label(&label, &render, focus_handle.clone(), &theme))
            })
            .child(render_box(&render, field, state, focus_handle, &theme))
            .when_some(render.footer.clone(), |el, footer| {
                el.child(render_footer(&footer, &theme))
            })
    }
}

fn render_label(
    label: &LabelPart,
    render: &FieldRender,
    focus_handle: FocusHandle,
    theme: &Theme,
) -> impl IntoElement {
    let disabled = render.input.disabled;

    div()
        .id(SharedString::from(format!("{}-label", label.html_for)))
        .text_sm()
        .font_weight(FontWeight::MEDIUM)
        .text_color(if disabled { theme.text_muted } else { theme.text })
        .when(!disabled, |el| {
            el.on_click(move |_event, window, cx| focus_handle.focus(window))
        })
        .child(label.text.clone())
}

fn render_box(
    render: &FieldRender,
    field: Rc<TextField<App>>,
    state: Entity<TextFieldState>,
    focus_handle: FocusHandle,
    theme: &Theme,
) -> impl IntoElement {
    let colors = field_colors(render.style, render.focused, theme);
    let disabled = render.input.disabled;
    let size = render.size;
    let id = render.input.id.clone();

    div()
        .id(SharedString::from(id.clone()))
        .h(px(size.height()))
        .w_full()
        .px(px(size.padding_x()))
        .flex()
        .items_center()
        .gap(px(8.0))
        .rounded(px(6.0))
        .border_1()
        .border_color(colors.border)
        .bg(colors.background)
        .text_size(px(size.text_size()))
        .opacity(colors.opacity)
        .when(disabled, |el| el.cursor(CursorStyle::OperationNotAllowed))
        .when(!disabled, |el| {
            let key_field = field.clone();
            let focus = focus_handle.clone();
            el.track_focus(&focus_handle)
                .cursor_text()
                .on_mouse_down(MouseButton::Left, move |_event, window, cx| {
                    focus.focus(window);
                })
                .on_key_down(move |event: &KeyDownEvent, _window, cx| {
                    handle_key_down(&key_field, event, cx);
                })
        })
        .child(render_text(render, colors.text, theme))
        .children(render.trailing.iter().map(|affordance| {
            render_affordance(*affordance, &id, field.clone(), state.clone(), theme)
        }))
}

fn render_text(render: &FieldRender, text_color: Hsla, theme: &Theme) -> impl IntoElement {
    let is_empty = render.input.display.is_empty();
    let content: SharedString = if is_empty {
        render.input.placeholder.clone().unwrap_or_default().into()
    } else {
        render.input.display.clone().into()
    };
    let caret = || {
        div()
            .w(px(1.5))
            .h(px(render.size.text_size() + 4.0))
            .bg(theme.primary)
    };

    div()
        .flex_1()
        .flex()
        .items_center()
        .overflow_hidden()
        .when(render.focused && is_empty, |el| el.child(caret()))
        .child(
            div()
                .text_color(if is_empty { theme.text_muted } else { text_color })
                .child(content),
        )
        .when(render.focused && !is_empty, |el| el.child(caret()))
}

fn render_affordance(
    affordance: Affordance,
    id: &str,
    field: Rc<TextField<App>>,
    state: Entity<TextFieldState>,
    theme: &Theme,
) -> AnyElement {
    match affordance {
        Affordance::Loading => div()
            .id(SharedString::from(format!("{id}-loading")))
            .w(px(14.0))
            .h(px(14.0))
            .rounded_full()
            .border_2()
            .border_color(with_alpha(theme.primary, 0.5))
            .into_any_element(),
        Affordance::Clear => {
            let hover_color = theme.text;
            div()
                .id(SharedString::from(format!("{id}-clear")))
                .px(px(4.0))
                .rounded(px(4.0))
                .text_color(theme.text_muted)
                .cursor_pointer()
                .hover(move |s| s.text_color(hover_color))
                .on_click(move |_event, _window, cx| {
                    field.clear(cx);
                })
                .child("\u{00d7}")
                .into_any_element()
        }
        Affordance::RevealToggle { revealed } => {
            let config = field.config().clone();
            div()
                .id(SharedString::from(format!("{id}-reveal")))
                .px(px(4.0))
                .text_xs()
                .font_weight(FontWeight::MEDIUM)
                .text_color(theme.primary)
                .cursor_pointer()
                .on_click(move |_event, _window, cx| {
                    state.update(cx, |state, cx| {
                        if state.field.toggle_reveal(&config) {
                            cx.notify();
                        }
                    });
                })
                .child(if revealed { "Hide" } else { "Show" })
                .into_any_element()
        }
    }
}

fn render_footer(footer: &Footer, theme: &Theme) -> impl IntoElement {
    let color = if footer.is_error() {
        theme.error
    } else {
        theme.text_muted
    };

    div()
        .id(SharedString::from(footer.id().to_string()))
        .text_xs()
        .text_color(color)
        .child(footer.text().to_string())
}

fn handle_key_down(field: &TextField<App>, event: &KeyDownEvent, cx: &mut App) {
    let keystroke = &event.keystroke;
    let modifiers = KeyModifiers {
        control: keystroke.modifiers.control,
        alt: keystroke.modifiers.alt,
        shift: keystroke.modifiers.shift,
        platform: keystroke.modifiers.platform,
    };

    let Some(edit) = Edit::from_keystroke(&keystroke.key, keystroke.key_char.as_deref(), modifiers)
    else {
        return;
    };

    let current = &field.config().value;
    let next = edit.apply(current);
    if next != *current {
        field.input(&next, cx);
    }
    cx.stop_propagation();
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::prelude::v1::test;
    use textfield_core::ColorTheme;

    #[test]
    fn test_error_border() {
        let theme = Theme::for_mode(ColorTheme::Light);
        let colors = field_colors(InputStyle::Error, true, &theme);
        assert_eq!(colors.border, theme.error);
    }

    #[test]
    fn test_focus_border_for_variants() {
        let theme = Theme::for_mode(ColorTheme::Dark);
        for style in [InputStyle::Filled, InputStyle::Outlined, InputStyle::Ghost] {
            assert_eq!(field_colors(style, true, &theme).border, theme.primary);
        }
        assert_eq!(
            field_colors(InputStyle::Outlined, false, &theme).border,
            theme.border
        );
    }

    #[test]
    fn test_disabled_dimmed() {
        let theme = Theme::default();
        let colors = field_colors(InputStyle::Disabled, true, &theme);
        assert!(colors.opacity < 1.0);
        assert_eq!(colors.border, theme.border_subtle);
    }

    #[test]
    fn test_idle_border_matches_style_table() {
        let theme = Theme::default();
        for style in [
            InputStyle::Disabled,
            InputStyle::Error,
            InputStyle::Filled,
            InputStyle::Outlined,
            InputStyle::Ghost,
        ] {
            let border = field_colors(style, false, &theme).border;
            assert_eq!(border.a > 0.0, style.has_idle_border());
        }
    }
}
