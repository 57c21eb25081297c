//! Overlay Page
//!
//! Borderless rate display. Pressing anywhere outside the rate buttons drags the
//! window; the new position is committed on release or once the window stops moving.

use std::time::Instant;

use gpui::{
    ClickEvent, Context, FontWeight, InteractiveElement, IntoElement, MouseButton,
    MouseDownEvent, MouseUpEvent, ParentElement, Render, Styled, Subscription, Window, div,
    prelude::*, px,
};

use crate::app::entities::AppEntities;
use crate::components::primitives::button::Button;
use crate::constants::RATE_STEP;
use crate::domain::config::Position;
use crate::domain::rate::NO_RATE_TEXT;
use crate::theme::colors::OverlayColors;
use crate::theme::typography::Typography;

pub struct OverlayPage {
    entities: AppEntities,
    _subscriptions: Vec<Subscription>,
}

impl OverlayPage {
    pub fn new(entities: AppEntities, window: &mut Window, cx: &mut Context<Self>) -> Self {
        let subscriptions = vec![
            cx.observe(&entities.overlay, |_this, _, cx| cx.notify()),
            cx.observe_window_bounds(window, |this, window, cx| {
                this.window_moved(window, cx);
            }),
        ];

        Self {
            entities,
            _subscriptions: subscriptions,
        }
    }

    fn window_moved(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        let origin = window.bounds().origin;
        let position = Position::new(
            f32::from(origin.x).round() as i32,
            f32::from(origin.y).round() as i32,
        );
        self.entities.overlay.update(cx, |overlay, cx| {
            if overlay.window_moved(position, Instant::now()) {
                cx.notify();
            }
        });
    }

    fn start_drag(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        let started = self.entities.overlay.update(cx, |overlay, cx| {
            let started = overlay.begin_drag(Instant::now());
            if started {
                cx.notify();
            }
            started
        });
        if started {
            window.start_window_move();
        }
    }

    fn finish_drag(&mut self, cx: &mut Context<Self>) {
        self.entities.overlay.update(cx, |overlay, cx| {
            if overlay.end_drag() {
                cx.notify();
            }
        });
    }

    fn adjust_rate(&mut self, delta: i8, cx: &mut Context<Self>) {
        let telemetry = self.entities.telemetry.clone();
        self.entities.overlay.update(cx, |overlay, cx| {
            telemetry.update(cx, |handle, _| overlay.adjust_rate(delta, handle));
        });
    }

    fn render_buttons(&self, font_size: f32, cx: &Context<Self>) -> impl IntoElement {
        let button_font = Typography::button_font_size(font_size);

        div()
            .flex()
            .flex_row()
            .items_center()
            .ml(px(4.0))
            .child(
                Button::new("rate-decr", "<")
                    .font_size(button_font)
                    .on_click(cx.listener(|this, _: &ClickEvent, _, cx| {
                        this.adjust_rate(-RATE_STEP, cx);
                    })),
            )
            .child(
                Button::new("rate-incr", ">")
                    .font_size(button_font)
                    .on_click(cx.listener(|this, _: &ClickEvent, _, cx| {
                        this.adjust_rate(RATE_STEP, cx);
                    })),
            )
    }
}

impl Render for OverlayPage {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let view = self.entities.overlay.read(cx).view();
        let Some(metrics) = view.size.metrics() else {
            return div().into_any_element();
        };

        let color = view
            .tier
            .map_or(OverlayColors::rate_normal(), OverlayColors::rate);
        let text = view.text.unwrap_or_else(|| NO_RATE_TEXT.to_string());

        div()
            .id("overlay")
            .size_full()
            .flex()
            .flex_row()
            .items_center()
            .px(px(6.0))
            .bg(OverlayColors::background())
            .border_2()
            .border_color(OverlayColors::border())
            .on_mouse_down(
                MouseButton::Left,
                cx.listener(|this, _: &MouseDownEvent, window, cx| this.start_drag(window, cx)),
            )
            .on_mouse_up(
                MouseButton::Left,
                cx.listener(|this, _: &MouseUpEvent, _, cx| this.finish_drag(cx)),
            )
            .child(
                div()
                    .flex_1()
                    .flex()
                    .justify_center()
                    .font_family(Typography::OVERLAY_FONT)
                    .font_weight(FontWeight::BOLD)
                    .text_size(px(metrics.font_size))
                    .text_color(color)
                    .child(text),
            )
            .when(metrics.show_buttons, |this| {
                this.child(self.render_buttons(metrics.font_size, cx))
            })
            .into_any_element()
    }
}
