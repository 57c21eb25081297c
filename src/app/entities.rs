//! AppEntities - Global Entity Handles
//!
//! Shared handles for the overlay state, the telemetry worker and the startup
//! registrar. Every window reads through these.

use std::rc::Rc;

use gpui::{App, AppContext, Entity, Global};

use crate::features::overlay::controller::OverlayController;
use crate::services::worker::TelemetryHandle;
use crate::utils::startup::StartupRegistrar;

/// Collection of all global Entity handles
#[derive(Clone)]
pub struct AppEntities {
    /// Overlay state machine and persisted config
    pub overlay: Entity<OverlayController>,
    /// Telemetry worker thread
    pub telemetry: Entity<TelemetryHandle>,
    /// OS startup entry, `None` when the executable path is unknown
    pub startup: Option<Rc<dyn StartupRegistrar>>,
}

impl Global for AppEntities {}

impl AppEntities {
    pub fn init(
        overlay: OverlayController,
        telemetry: TelemetryHandle,
        startup: Option<Rc<dyn StartupRegistrar>>,
        cx: &mut App,
    ) -> Self {
        Self {
            overlay: cx.new(|_| overlay),
            telemetry: cx.new(|_| telemetry),
            startup,
        }
    }
}
