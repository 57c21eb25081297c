//! Application - App Initialization and Window Management
//!
//! Loads the overlay config, starts the telemetry worker and opens the settings
//! window. The overlay window is managed by [`crate::app::host::OverlayHost`].

use std::rc::Rc;

use gpui::{
    App, AppContext, Application, Bounds, SharedString, TitlebarOptions, WindowBounds,
    WindowOptions, px, size,
};

use crate::app::entities::AppEntities;
use crate::app::workspace::Workspace;
use crate::constants::{
    APP_TITLE, CONFIG_FILE_NAME, POLL_INTERVAL, SETTINGS_WINDOW_HEIGHT, SETTINGS_WINDOW_WIDTH,
    TELEMETRY_ENV,
};
use crate::domain::config::ScreenRect;
use crate::features::overlay::controller::OverlayController;
use crate::features::settings::controller::reconcile_startup;
use crate::services::focus;
use crate::services::{DemoSource, OfflineSource, TelemetryHandle, TelemetrySource};
use crate::utils::config_store::JsonFileStore;
use crate::utils::startup::{StartupEntry, StartupRegistrar};

/// Run the overlay application
pub fn run_app() {
    Application::new().run(|cx: &mut App| {
        let displays = display_rects(cx);
        let overlay = OverlayController::load(Box::new(config_store()), &displays);

        let startup = startup_registrar();
        if let Some(registrar) = &startup {
            reconcile_startup(registrar.as_ref(), overlay.config().start_with_windows);
        }

        let source_name = std::env::var(TELEMETRY_ENV).ok();
        let source = select_source(source_name.as_deref());
        let telemetry =
            match TelemetryHandle::spawn(source, focus::native_probe(), POLL_INTERVAL) {
                Ok(handle) => handle,
                Err(e) => {
                    tracing::error!(error = %e, "Failed to start telemetry worker");
                    cx.quit();
                    return;
                }
            };

        let entities = AppEntities::init(overlay, telemetry, startup, cx);
        cx.set_global(entities.clone());

        let bounds = Bounds::centered(
            None,
            size(px(SETTINGS_WINDOW_WIDTH), px(SETTINGS_WINDOW_HEIGHT)),
            cx,
        );
        let window_options = WindowOptions {
            window_bounds: Some(WindowBounds::Windowed(bounds)),
            titlebar: Some(TitlebarOptions {
                title: Some(SharedString::from(APP_TITLE)),
                ..Default::default()
            }),
            is_resizable: false,
            ..Default::default()
        };

        if let Err(e) = cx.open_window(window_options, |window, cx| {
            cx.new(|cx| Workspace::new(entities.clone(), window, cx))
        }) {
            tracing::error!(error = %e, "Failed to open settings window");
            cx.quit();
            return;
        }

        cx.activate(true);
    });
}

fn config_store() -> JsonFileStore {
    JsonFileStore::in_app_data_dir().unwrap_or_else(|e| {
        tracing::warn!(error = %e, "App data directory unavailable, using working directory");
        JsonFileStore::new(CONFIG_FILE_NAME)
    })
}

fn startup_registrar() -> Option<Rc<dyn StartupRegistrar>> {
    match StartupEntry::for_current_exe() {
        Ok(entry) => Some(Rc::new(entry)),
        Err(e) => {
            tracing::warn!(error = %e, "Startup registration unavailable");
            None
        }
    }
}

/// Attached displays, primary first
fn display_rects(cx: &App) -> Vec<ScreenRect> {
    let primary = cx.primary_display();
    let primary_id = primary.as_ref().map(|display| display.id());

    primary
        .into_iter()
        .chain(
            cx.displays()
                .into_iter()
                .filter(|display| Some(display.id()) != primary_id),
        )
        .map(|display| {
            let bounds = display.bounds();
            ScreenRect::new(
                f32::from(bounds.origin.x),
                f32::from(bounds.origin.y),
                f32::from(bounds.size.width),
                f32::from(bounds.size.height),
            )
        })
        .collect()
}

/// Telemetry source for a `SIMRATE_TELEMETRY` value
pub fn select_source(name: Option<&str>) -> Box<dyn TelemetrySource> {
    match name {
        Some("demo") => Box::new(DemoSource::new()),
        Some(other) => {
            tracing::warn!(source = other, "Unknown telemetry source, running offline");
            Box::new(OfflineSource)
        }
        None => Box::new(OfflineSource),
    }
}
