//! Checkbox Component
//!
//! Settings toggle: a check box, its label, and an optional muted note shown under
//! the label. A disabled toggle keeps its state visible but ignores clicks.

use gpui::{
    App, ElementId, InteractiveElement, IntoElement, ParentElement, RenderOnce, Rgba,
    SharedString, StatefulInteractiveElement, Styled, Window, div, prelude::*, px,
};

use crate::theme::colors::SettingsColors;
use crate::theme::typography::Typography;

const BOX_SIZE: f32 = 16.0;
const CHECK_MARK: &str = "✓";

type ChangeHandler = Box<dyn Fn(bool, &mut Window, &mut App) + 'static>;

/// Colors of the box and label for one checked/enabled combination
#[derive(Debug, Clone, Copy, PartialEq)]
struct Look {
    fill: Rgba,
    border: Rgba,
    label: Rgba,
}

impl Look {
    fn of(checked: bool, enabled: bool) -> Self {
        let (fill, border) = match (checked, enabled) {
            (true, true) => (SettingsColors::accent(), SettingsColors::accent()),
            (true, false) => (SettingsColors::text_muted(), SettingsColors::text_muted()),
            (false, _) => (SettingsColors::checkbox_bg(), SettingsColors::checkbox_border()),
        };
        let label = if enabled {
            SettingsColors::text_primary()
        } else {
            SettingsColors::text_muted()
        };
        Self {
            fill,
            border,
            label,
        }
    }
}

#[derive(IntoElement)]
pub struct Checkbox {
    id: ElementId,
    checked: bool,
    enabled: bool,
    label: Option<SharedString>,
    note: Option<SharedString>,
    on_change: Option<ChangeHandler>,
}

impl Checkbox {
    pub fn new(id: impl Into<ElementId>) -> Self {
        Self {
            id: id.into(),
            checked: false,
            enabled: true,
            label: None,
            note: None,
            on_change: None,
        }
    }

    pub fn checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self
    }

    pub fn label(mut self, label: impl Into<SharedString>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Ignore clicks and draw the toggle muted
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.enabled = !disabled;
        self
    }

    /// Secondary line under the label
    pub fn note(mut self, note: impl Into<SharedString>) -> Self {
        self.note = Some(note.into());
        self
    }

    /// Called with the state the user asked for, never with the current one
    pub fn on_change(mut self, handler: impl Fn(bool, &mut Window, &mut App) + 'static) -> Self {
        self.on_change = Some(Box::new(handler));
        self
    }

    /// Handler that should receive clicks, if any
    fn active_handler(&mut self) -> Option<ChangeHandler> {
        if self.enabled { self.on_change.take() } else { None }
    }
}

impl RenderOnce for Checkbox {
    fn render(mut self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let look = Look::of(self.checked, self.enabled);
        let requested = !self.checked;
        let handler = self.active_handler();

        let indicator = div()
            .flex_none()
            .size(px(BOX_SIZE))
            .mt(px(1.0))
            .rounded_sm()
            .border_1()
            .border_color(look.border)
            .bg(look.fill)
            .flex()
            .items_center()
            .justify_center()
            .text_color(SettingsColors::check_mark())
            .text_size(px(Typography::TEXT_XS))
            .when(self.checked, |this| this.child(CHECK_MARK));

        let text = div()
            .flex()
            .flex_col()
            .when_some(self.label, |this, label| {
                this.child(
                    div()
                        .text_size(px(Typography::TEXT_SM))
                        .text_color(look.label)
                        .child(label),
                )
            })
            .when_some(self.note, |this, note| {
                this.child(
                    div()
                        .text_size(px(Typography::TEXT_XS))
                        .text_color(SettingsColors::text_muted())
                        .child(note),
                )
            });

        div()
            .id(self.id)
            .flex()
            .items_start()
            .gap_2()
            .py(px(2.0))
            .child(indicator)
            .child(text)
            .when_some(handler, |this, handler| {
                this.cursor_pointer()
                    .on_click(move |_, window, cx| handler(requested, window, cx))
            })
    }
}
