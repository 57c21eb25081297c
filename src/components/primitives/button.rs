//! Button Component

use gpui::{
    App, ClickEvent, ElementId, InteractiveElement, IntoElement, MouseButton, ParentElement,
    RenderOnce, SharedString, StatefulInteractiveElement, Styled, Window, div, prelude::*, px,
};

use crate::theme::colors::OverlayColors;

/// Small overlay button
///
/// Presses never reach the parent, so a button inside a draggable surface does not
/// start a drag.
#[derive(IntoElement)]
pub struct Button {
    id: ElementId,
    label: SharedString,
    font_size: f32,
    on_click: Option<Box<dyn Fn(&ClickEvent, &mut Window, &mut App) + 'static>>,
}

impl Button {
    /// Create a new button
    pub fn new(id: impl Into<ElementId>, label: impl Into<SharedString>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            font_size: 12.0,
            on_click: None,
        }
    }

    /// Set the label font size in pixels
    pub fn font_size(mut self, font_size: f32) -> Self {
        self.font_size = font_size;
        self
    }

    /// Set the click handler
    pub fn on_click(
        mut self,
        handler: impl Fn(&ClickEvent, &mut Window, &mut App) + 'static,
    ) -> Self {
        self.on_click = Some(Box::new(handler));
        self
    }
}

impl RenderOnce for Button {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let mut element = div()
            .id(self.id)
            .px(px(3.0))
            .mx(px(1.0))
            .bg(OverlayColors::button_bg())
            .text_color(OverlayColors::button_text())
            .text_size(px(self.font_size))
            .rounded_sm()
            .cursor_pointer()
            .hover(|s| s.bg(OverlayColors::button_hover()))
            .on_mouse_down(MouseButton::Left, |_, _, cx| cx.stop_propagation())
            .child(self.label);

        if let Some(handler) = self.on_click {
            element = element.on_click(handler);
        }

        element
    }
}
