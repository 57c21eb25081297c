//! Overlay Host
//!
//! Keeps the overlay window in line with the controller's render model. The window
//! exists only while the overlay is visible and is recreated when the size changes.

use anyhow::Result;
use gpui::{
    App, AppContext, Bounds, WindowBackgroundAppearance, WindowBounds, WindowHandle, WindowKind,
    WindowOptions, point, px, size,
};

use crate::app::entities::AppEntities;
use crate::domain::config::SizeTier;
use crate::features::overlay::controller::OverlayView;
use crate::features::overlay::page::OverlayPage;

#[derive(Default)]
pub struct OverlayHost {
    window: Option<WindowHandle<OverlayPage>>,
    size: Option<SizeTier>,
}

impl OverlayHost {
    /// Open, close or recreate the overlay window to match the current view
    pub fn reconcile(&mut self, entities: &AppEntities, cx: &mut App) {
        let view = entities.overlay.read(cx).view();
        let wanted = view.visible.then_some(view.size);

        if self.window.is_some() && self.size != wanted {
            self.close(cx);
        }
        if self.window.is_none() && wanted.is_some() {
            if let Err(e) = self.open(&view, entities, cx) {
                tracing::error!(error = %e, "Failed to open overlay window");
            }
        }
    }

    pub fn close(&mut self, cx: &mut App) {
        self.size = None;
        let Some(handle) = self.window.take() else {
            return;
        };
        if let Err(e) = handle.update(cx, |_, window, _| window.remove_window()) {
            tracing::debug!(error = %e, "Overlay window already closed");
        }
    }

    fn open(&mut self, view: &OverlayView, entities: &AppEntities, cx: &mut App) -> Result<()> {
        let Some(metrics) = view.size.metrics() else {
            return Ok(());
        };

        let bounds = Bounds {
            origin: point(px(view.position.x as f32), px(view.position.y as f32)),
            size: size(px(metrics.width), px(metrics.height)),
        };
        let options = WindowOptions {
            window_bounds: Some(WindowBounds::Windowed(bounds)),
            titlebar: None,
            focus: false,
            show: true,
            kind: WindowKind::PopUp,
            is_movable: true,
            is_resizable: false,
            is_minimizable: false,
            window_background: WindowBackgroundAppearance::Transparent,
            ..Default::default()
        };

        let page_entities = entities.clone();
        let handle = cx.open_window(options, |window, cx| {
            cx.new(|cx| OverlayPage::new(page_entities, window, cx))
        })?;

        tracing::debug!(size = ?view.size, position = ?view.position, "Overlay window opened");
        self.window = Some(handle);
        self.size = Some(view.size);
        Ok(())
    }
}
