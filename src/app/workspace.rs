//! Workspace - Settings Window Shell and Tick Pump
//!
//! Root view of the settings window. It runs the UI tick that feeds telemetry and
//! focus into the overlay controller, reconciles the overlay window, and owns the
//! shutdown sequence.

use std::time::Instant;

use gpui::{
    App, Context, Entity, IntoElement, ParentElement, Render, Styled, Subscription, Window, div,
    prelude::*,
};

use crate::app::entities::AppEntities;
use crate::app::host::OverlayHost;
use crate::constants::UI_TICK;
use crate::features::settings::page::SettingsPage;

pub struct Workspace {
    entities: AppEntities,
    settings_page: Entity<SettingsPage>,
    overlay_host: OverlayHost,
    /// Last focus answer from the telemetry worker
    simulator_focused: bool,
    _subscriptions: Vec<Subscription>,
}

impl Workspace {
    pub fn new(entities: AppEntities, window: &mut Window, cx: &mut Context<Self>) -> Self {
        let settings_page = cx.new(|cx| SettingsPage::new(entities.clone(), cx));

        // Closing the settings window quits the app
        window.on_window_should_close(cx, |_window, cx| {
            cx.quit();
            true
        });

        let subscriptions = vec![
            cx.observe(&entities.overlay, |this, _, cx| this.reconcile_overlay(cx)),
            cx.on_app_quit(|this, cx| {
                this.shutdown(cx);
                async {}
            }),
        ];

        Self::start_tick_pump(cx);

        Self {
            entities,
            settings_page,
            overlay_host: OverlayHost::default(),
            simulator_focused: true,
            _subscriptions: subscriptions,
        }
    }

    /// Drive [`Workspace::tick`] every [`UI_TICK`] until the window goes away
    fn start_tick_pump(cx: &mut Context<Self>) {
        cx.spawn(async move |this, cx| {
            loop {
                cx.background_executor().timer(UI_TICK).await;
                if this.update(cx, |this, cx| this.tick(cx)).is_err() {
                    break;
                }
            }
        })
        .detach();
    }

    fn tick(&mut self, cx: &mut Context<Self>) {
        let now = Instant::now();
        if let Some(update) = self.entities.telemetry.update(cx, |handle, _| handle.latest()) {
            self.simulator_focused = update.simulator_focused;
            self.entities.overlay.update(cx, |overlay, cx| {
                overlay.on_sample(update.sample);
                cx.notify();
            });
        }

        // our own windows count as the simulator for auto-hide
        let focused = self.simulator_focused || cx.active_window().is_some();
        self.entities.overlay.update(cx, |overlay, cx| {
            let before = overlay.view();
            overlay.observe_focus(focused, now);
            overlay.settle_drag(now);
            if overlay.view() != before {
                cx.notify();
            }
        });
    }

    fn reconcile_overlay(&mut self, cx: &mut App) {
        self.overlay_host.reconcile(&self.entities, cx);
    }

    /// Stop the worker, then write the final config
    fn shutdown(&mut self, cx: &mut App) {
        tracing::info!("Shutting down");
        self.entities
            .telemetry
            .update(cx, |handle, _| handle.shutdown());
        self.entities
            .overlay
            .update(cx, |overlay, _| overlay.shutdown());
        self.overlay_host.close(cx);
    }
}

impl Render for Workspace {
    fn render(&mut self, _window: &mut Window, _cx: &mut Context<Self>) -> impl IntoElement {
        div().size_full().child(self.settings_page.clone())
    }
}
