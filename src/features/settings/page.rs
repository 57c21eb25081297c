//! Settings Page
//!
//! Large rate readout, overlay size selector, auto-hide and start-with-OS options, and
//! the simulator connection line.

use gpui::{
    Context, FontWeight, IntoElement, ParentElement, Render, Styled, Window, div, px,
};

use crate::app::entities::AppEntities;
use crate::components::primitives::checkbox::Checkbox;
use crate::components::primitives::segmented::SegmentedControl;
use crate::domain::config::SizeTier;
use crate::features::settings::controller::{self, SettingsController, tier_index};
use crate::theme::colors::SettingsColors;
use crate::theme::typography::Typography;

#[cfg(target_os = "windows")]
const START_WITH_OS_LABEL: &str = "Start with Windows (Startup Folder)";
#[cfg(not(target_os = "windows"))]
const START_WITH_OS_LABEL: &str = "Start at login";

pub struct SettingsPage {
    entities: AppEntities,
}

impl SettingsPage {
    pub fn new(entities: AppEntities, cx: &mut Context<Self>) -> Self {
        cx.observe(&entities.overlay, |_this, _, cx| cx.notify())
            .detach();

        Self { entities }
    }

    fn render_size_card(&self, current: SizeTier) -> impl IntoElement {
        let size_controller = SettingsController::new(self.entities.clone());

        let selector = SizeTier::ALL
            .iter()
            .fold(SegmentedControl::new("overlay-size"), |control, tier| {
                control.option(tier.label())
            })
            .selected(tier_index(current))
            .on_select(move |index, _window, cx| size_controller.select_size(index, cx));

        div()
            .w_full()
            .flex()
            .flex_col()
            .gap_2()
            .px(px(12.0))
            .py(px(10.0))
            .rounded_md()
            .bg(SettingsColors::control_bg())
            .child(
                div()
                    .text_size(px(Typography::TEXT_SM))
                    .text_color(SettingsColors::text_primary())
                    .child("Overlay Size"),
            )
            .child(selector)
    }

    fn render_options(&self, auto_hide: bool, start_with_os: bool) -> impl IntoElement {
        let auto_hide_controller = SettingsController::new(self.entities.clone());
        let startup_controller = SettingsController::new(self.entities.clone());
        let startup_unsupported = self.entities.startup.is_none();

        let mut startup_toggle = Checkbox::new("start-with-os")
            .checked(start_with_os)
            .label(START_WITH_OS_LABEL)
            .disabled(startup_unsupported)
            .on_change(move |checked, _window, cx| {
                startup_controller.set_start_with_os(checked, cx)
            });
        if startup_unsupported {
            startup_toggle = startup_toggle.note("Not supported on this platform");
        }

        div()
            .flex()
            .flex_col()
            .gap_1()
            .mt(px(14.0))
            .child(
                Checkbox::new("auto-hide")
                    .checked(auto_hide)
                    .label("Auto-hide when MSFS not in focus")
                    .on_change(move |checked, _window, cx| {
                        auto_hide_controller.set_auto_hide(checked, cx)
                    }),
            )
            .child(startup_toggle)
    }

    fn render_status(&self, connected: bool) -> impl IntoElement {
        let dot = if connected {
            SettingsColors::connected()
        } else {
            SettingsColors::disconnected()
        };

        div()
            .flex()
            .items_center()
            .gap_2()
            .mt_auto()
            .child(div().size(px(8.0)).rounded_full().bg(dot))
            .child(
                div()
                    .text_size(px(Typography::TEXT_XS))
                    .text_color(SettingsColors::text_muted())
                    .child(controller::connection_label(connected)),
            )
    }
}

impl Render for SettingsPage {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let overlay = self.entities.overlay.read(cx);
        let rate_text = overlay.rate_text();
        let connected = overlay.is_connected();
        let config = overlay.config().clone();

        div()
            .size_full()
            .flex()
            .flex_col()
            .p(px(16.0))
            .bg(SettingsColors::background())
            .child(
                div()
                    .flex()
                    .justify_center()
                    .pt(px(6.0))
                    .pb(px(10.0))
                    .text_size(px(Typography::TEXT_DISPLAY))
                    .font_weight(FontWeight::BOLD)
                    .text_color(SettingsColors::accent())
                    .child(rate_text),
            )
            .child(
                div()
                    .h(px(1.0))
                    .w_full()
                    .mb(px(10.0))
                    .bg(SettingsColors::divider()),
            )
            .child(self.render_size_card(config.size_tier))
            .child(self.render_options(config.auto_hide, config.start_with_windows))
            .child(self.render_status(connected))
    }
}
