//! Settings Controller
//!
//! Applies settings-window input to the overlay controller and the OS startup entry.

use gpui::App;

use crate::app::entities::AppEntities;
use crate::domain::config::SizeTier;
use crate::features::overlay::controller::OverlayController;
use crate::utils::startup::StartupRegistrar;

/// Settings window controller
pub struct SettingsController {
    entities: AppEntities,
}

impl SettingsController {
    pub fn new(entities: AppEntities) -> Self {
        Self { entities }
    }

    /// Select the overlay size by segment index
    pub fn select_size(&self, index: usize, cx: &mut App) {
        let Some(tier) = tier_at(index) else {
            return;
        };
        self.entities.overlay.update(cx, |overlay, cx| {
            if overlay.set_size_tier(tier) {
                cx.notify();
            }
        });
    }

    pub fn set_auto_hide(&self, enabled: bool, cx: &mut App) {
        self.entities.overlay.update(cx, |overlay, cx| {
            if overlay.set_auto_hide(enabled) {
                cx.notify();
            }
        });
    }

    pub fn set_start_with_os(&self, enabled: bool, cx: &mut App) {
        let registrar = self.entities.startup.clone();
        self.entities.overlay.update(cx, |overlay, cx| {
            if apply_start_with_os(overlay, registrar.as_deref(), enabled) {
                cx.notify();
            }
        });
    }
}

/// Segment order of the size selector
pub fn tier_index(tier: SizeTier) -> usize {
    SizeTier::ALL.iter().position(|t| *t == tier).unwrap_or(0)
}

pub fn tier_at(index: usize) -> Option<SizeTier> {
    SizeTier::ALL.get(index).copied()
}

/// Update the startup entry, then record the choice.
///
/// The config only changes when the OS entry was applied, so the checkbox never shows a
/// state the OS does not have.
pub fn apply_start_with_os(
    overlay: &mut OverlayController,
    registrar: Option<&dyn StartupRegistrar>,
    enabled: bool,
) -> bool {
    if overlay.config().start_with_windows == enabled {
        return false;
    }
    let Some(registrar) = registrar else {
        tracing::warn!("Startup registration unavailable on this system");
        return false;
    };

    match registrar.apply(enabled) {
        Ok(()) => overlay.set_start_with_windows(enabled),
        Err(e) => {
            tracing::warn!(enabled, error = %e, "Failed to update startup entry");
            false
        }
    }
}

/// Bring the OS startup entry in line with the loaded config
pub fn reconcile_startup(registrar: &dyn StartupRegistrar, enabled: bool) {
    if registrar.is_registered() == enabled {
        return;
    }
    if let Err(e) = registrar.apply(enabled) {
        tracing::warn!(enabled, error = %e, "Failed to reconcile startup entry");
    }
}

/// Connection line shown at the bottom of the settings window
pub fn connection_label(connected: bool) -> &'static str {
    if connected {
        "Connected to MSFS"
    } else {
        "Waiting for MSFS..."
    }
}
