//! Segmented Control
//!
//! A row of mutually exclusive options; the selected one is bold and accented.

use gpui::{
    App, FontWeight, InteractiveElement, IntoElement, ParentElement, RenderOnce, SharedString,
    StatefulInteractiveElement, Styled, Window, div, prelude::*, px,
};

use crate::theme::colors::SettingsColors;
use crate::theme::typography::Typography;

#[derive(IntoElement)]
pub struct SegmentedControl {
    id: SharedString,
    options: Vec<SharedString>,
    selected: usize,
    on_select: Option<std::rc::Rc<dyn Fn(usize, &mut Window, &mut App) + 'static>>,
}

impl SegmentedControl {
    pub fn new(id: impl Into<SharedString>) -> Self {
        Self {
            id: id.into(),
            options: Vec::new(),
            selected: 0,
            on_select: None,
        }
    }

    /// Append an option
    pub fn option(mut self, label: impl Into<SharedString>) -> Self {
        self.options.push(label.into());
        self
    }

    /// Index of the selected option
    pub fn selected(mut self, index: usize) -> Self {
        self.selected = index;
        self
    }

    /// Called with the clicked option's index, including the already selected one
    pub fn on_select(mut self, handler: impl Fn(usize, &mut Window, &mut App) + 'static) -> Self {
        self.on_select = Some(std::rc::Rc::new(handler));
        self
    }
}

impl RenderOnce for SegmentedControl {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let id = self.id;
        let selected = self.selected;
        let on_select = self.on_select;

        div()
            .flex()
            .flex_row()
            .w_full()
            .p(px(2.0))
            .gap(px(2.0))
            .rounded_md()
            .bg(SettingsColors::control_bg())
            .children(self.options.into_iter().enumerate().map(|(ix, label)| {
                let is_selected = ix == selected;
                let mut segment = div()
                    .id(SharedString::from(format!("{id}-{ix}")))
                    .flex_1()
                    .flex()
                    .justify_center()
                    .py(px(4.0))
                    .min_w(px(36.0))
                    .rounded_sm()
                    .cursor_pointer()
                    .text_size(px(Typography::TEXT_SM))
                    .when(is_selected, |s| {
                        s.bg(SettingsColors::segment_selected())
                            .text_color(SettingsColors::accent())
                            .font_weight(FontWeight::BOLD)
                    })
                    .when(!is_selected, |s| {
                        s.text_color(SettingsColors::text_primary())
                            .hover(|s| s.bg(SettingsColors::segment_hover()))
                    })
                    .child(label);

                if let Some(handler) = on_select.clone() {
                    segment = segment.on_click(move |_, window, cx| handler(ix, window, cx));
                }
                segment
            }))
    }
}
