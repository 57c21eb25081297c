//! Overlay Controller
//!
//! Owns the overlay configuration and the display state machine. Everything here is
//! GPUI-free so it can be driven directly by tests; the UI layer feeds it telemetry
//! updates, focus observations and user input, then renders [`OverlayView`].
//!
//! ```text
//!              sample.connected            press on overlay
//!  Disconnected ───────────────► ConnectedIdle ─────────────► Dragging
//!       ▲        !connected          │  ▲        release / settle  │
//!       └────────────────────────────┘  └──────────────────────────┘
//!
//!  any ──── size = HIDDEN ───► Hidden ──── visible size ───► ConnectedIdle | Disconnected
//! ```
//!
//! Focus-driven auto-hide is a separate flag (`hidden_by_focus`) combined with the
//! phase at render time, so polling and state keep running while hidden.

use std::time::Instant;

use crate::constants::{DRAG_SETTLE, FOCUS_HIDE_DEBOUNCE};
use crate::domain::config::{OverlayConfig, Position, ScreenRect, SizeTier};
use crate::domain::rate::{NO_RATE_TEXT, DisplayTier, classify, format_rate};
use crate::services::telemetry::{RateControl, SimRateSample};
use crate::utils::config_store::ConfigStore;

/// Overlay display phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayPhase {
    Disconnected,
    ConnectedIdle,
    Dragging,
    Hidden,
}

/// What the overlay window should show right now
#[derive(Debug, Clone, PartialEq)]
pub struct OverlayView {
    pub visible: bool,
    pub text: Option<String>,
    pub tier: Option<DisplayTier>,
    pub size: SizeTier,
    pub position: Position,
}

#[derive(Debug, Clone, Copy)]
struct DragSession {
    current: Position,
    last_motion: Instant,
}

pub struct OverlayController {
    config: OverlayConfig,
    store: Box<dyn ConfigStore>,
    phase: OverlayPhase,
    connected: bool,
    last_value: Option<f64>,
    hidden_by_focus: bool,
    focus_lost_since: Option<Instant>,
    drag: Option<DragSession>,
    /// Last write failed; the next mutation or shutdown writes again
    dirty: bool,
}

impl OverlayController {
    /// Load the config once and apply it. A missing or unreadable config falls back to
    /// defaults; an off-screen position is re-centered on the primary display.
    pub fn load(store: Box<dyn ConfigStore>, displays: &[ScreenRect]) -> Self {
        let mut config = match store.load() {
            Ok(config) => {
                tracing::info!(?config, "Overlay settings loaded");
                config
            }
            Err(e) => {
                tracing::warn!(error = %e, "Using default overlay settings");
                OverlayConfig::default()
            }
        };

        let previous = config.position;
        if config.ensure_visible(displays) {
            tracing::info!(
                from = ?previous,
                to = ?config.position,
                "Overlay position was off-screen, re-centered"
            );
        }

        let phase = if config.size_tier.is_hidden() {
            OverlayPhase::Hidden
        } else {
            OverlayPhase::Disconnected
        };

        Self {
            config,
            store,
            phase,
            connected: false,
            last_value: None,
            hidden_by_focus: false,
            focus_lost_since: None,
            drag: None,
            dirty: false,
        }
    }

    // ==================== Getters ====================

    pub fn config(&self) -> &OverlayConfig {
        &self.config
    }

    pub fn phase(&self) -> OverlayPhase {
        self.phase
    }

    pub fn is_connected(&self) -> bool {
        self.connected
    }

    pub fn hidden_by_focus(&self) -> bool {
        self.hidden_by_focus
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Rate text for the settings window; a placeholder while disconnected
    pub fn rate_text(&self) -> String {
        match self.current_value() {
            Some(value) => format_rate(value),
            None => NO_RATE_TEXT.to_string(),
        }
    }

    /// Render model for the overlay window
    pub fn view(&self) -> OverlayView {
        let value = self.current_value();
        // the window under an active OS move stays up until release
        let visible = match self.phase {
            OverlayPhase::Dragging => true,
            OverlayPhase::ConnectedIdle => value.is_some() && !self.hidden_by_focus,
            OverlayPhase::Disconnected | OverlayPhase::Hidden => false,
        };

        OverlayView {
            visible,
            text: value.map(format_rate),
            tier: value.map(classify),
            size: self.config.size_tier,
            position: self.drag.map_or(self.config.position, |d| d.current),
        }
    }

    fn current_value(&self) -> Option<f64> {
        if self.connected { self.last_value } else { None }
    }

    // ==================== Telemetry ====================

    /// Apply one polled sample. Returns `true` when the phase changed.
    pub fn on_sample(&mut self, sample: SimRateSample) -> bool {
        self.connected = sample.connected;
        if sample.connected {
            self.last_value = Some(sample.value);
        }

        let next = match (self.phase, sample.connected) {
            (OverlayPhase::Disconnected, true) => OverlayPhase::ConnectedIdle,
            (OverlayPhase::ConnectedIdle, false) => OverlayPhase::Disconnected,
            // a drag resolves on release, Hidden only leaves through the size selector
            (phase, _) => phase,
        };
        self.transition(next)
    }

    /// Record whether the simulator (or one of our windows) has focus.
    ///
    /// With auto-hide on, focus must stay lost for [`FOCUS_HIDE_DEBOUNCE`] before the
    /// overlay hides; regaining focus shows it again immediately.
    pub fn observe_focus(&mut self, focused: bool, now: Instant) {
        if focused || !self.config.auto_hide {
            self.focus_lost_since = None;
            if self.hidden_by_focus {
                tracing::debug!("Simulator focused, overlay shown");
                self.hidden_by_focus = false;
            }
            return;
        }

        let since = *self.focus_lost_since.get_or_insert(now);
        if !self.hidden_by_focus && now.duration_since(since) >= FOCUS_HIDE_DEBOUNCE {
            tracing::debug!("Simulator lost focus, overlay hidden");
            self.hidden_by_focus = true;
        }
    }

    /// Ask the simulator to step the rate. A failure leaves the display untouched.
    pub fn adjust_rate(&mut self, delta: i8, control: &mut dyn RateControl) -> bool {
        if !self.connected {
            tracing::debug!(delta, "Rate change skipped, simulator not connected");
            return false;
        }

        match control.set_rate(delta) {
            Ok(()) => true,
            Err(e) => {
                tracing::debug!(delta, error = %e, "Rate change failed");
                false
            }
        }
    }

    // ==================== Dragging ====================

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Start a drag; only a visible, connected overlay can be dragged
    pub fn begin_drag(&mut self, now: Instant) -> bool {
        if self.phase != OverlayPhase::ConnectedIdle {
            return false;
        }
        self.drag = Some(DragSession {
            current: self.config.position,
            last_motion: now,
        });
        self.transition(OverlayPhase::Dragging)
    }

    pub fn drag_to(&mut self, position: Position, now: Instant) -> bool {
        let Some(drag) = self.drag.as_mut() else {
            return false;
        };
        drag.current = position;
        drag.last_motion = now;
        true
    }

    /// The overlay window moved. An OS-driven move outside an explicit drag starts one.
    pub fn window_moved(&mut self, position: Position, now: Instant) -> bool {
        if self.drag.is_none() {
            if position == self.config.position || !self.begin_drag(now) {
                return false;
            }
        }
        self.drag_to(position, now)
    }

    /// Release: commit and persist the new position
    pub fn end_drag(&mut self) -> bool {
        let Some(drag) = self.drag.take() else {
            return false;
        };

        if self.phase == OverlayPhase::Dragging {
            let next = if self.connected {
                OverlayPhase::ConnectedIdle
            } else {
                OverlayPhase::Disconnected
            };
            self.transition(next);
        }

        if drag.current != self.config.position {
            tracing::info!(position = ?drag.current, "Overlay moved");
            self.config.position = drag.current;
            self.persist();
        }
        true
    }

    /// Commit a drag whose window stopped moving without a release event
    pub fn settle_drag(&mut self, now: Instant) -> bool {
        match self.drag {
            Some(drag) if now.duration_since(drag.last_motion) >= DRAG_SETTLE => self.end_drag(),
            _ => false,
        }
    }

    // ==================== Settings ====================

    /// Select an overlay size. Reselecting the current size is a no-op.
    pub fn set_size_tier(&mut self, tier: SizeTier) -> bool {
        if self.config.size_tier == tier {
            return false;
        }
        if self.drag.is_some() {
            self.end_drag();
        }

        self.config.size_tier = tier;
        let next = if tier.is_hidden() {
            OverlayPhase::Hidden
        } else if self.connected {
            OverlayPhase::ConnectedIdle
        } else {
            OverlayPhase::Disconnected
        };
        self.transition(next);
        self.persist();
        true
    }

    pub fn set_auto_hide(&mut self, enabled: bool) -> bool {
        if self.config.auto_hide == enabled {
            return false;
        }
        self.config.auto_hide = enabled;
        if !enabled {
            self.hidden_by_focus = false;
            self.focus_lost_since = None;
        }
        self.persist();
        true
    }

    /// Record the start-with-OS choice. The caller applies the startup entry first.
    pub fn set_start_with_windows(&mut self, enabled: bool) -> bool {
        if self.config.start_with_windows == enabled {
            return false;
        }
        self.config.start_with_windows = enabled;
        self.persist();
        true
    }

    /// Final write on clean shutdown. The telemetry worker must already be stopped.
    pub fn shutdown(&mut self) {
        self.end_drag();
        self.persist();
    }

    // ==================== Internals ====================

    fn transition(&mut self, next: OverlayPhase) -> bool {
        if self.phase == next {
            return false;
        }
        tracing::debug!(from = ?self.phase, to = ?next, "Overlay phase changed");
        self.phase = next;
        true
    }

    fn persist(&mut self) {
        if self.dirty {
            tracing::debug!("Retrying overlay settings write");
        }
        match self.store.save(&self.config) {
            Ok(()) => self.dirty = false,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to save overlay settings");
                self.dirty = true;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Error, Result};
    use crate::utils::config_store::JsonFileStore;
    use std::cell::RefCell;
    use std::rc::Rc;
    use std::time::Duration;

    #[derive(Default)]
    struct MemoryState {
        stored: Option<OverlayConfig>,
        saves: usize,
        fail_saves: bool,
    }

    /// In-memory store shared with the test body
    #[derive(Clone, Default)]
    struct MemoryStore(Rc<RefCell<MemoryState>>);

    impl MemoryStore {
        fn with(config: OverlayConfig) -> Self {
            let store = Self::default();
            store.0.borrow_mut().stored = Some(config);
            store
        }

        fn saves(&self) -> usize {
            self.0.borrow().saves
        }

        fn stored(&self) -> Option<OverlayConfig> {
            self.0.borrow().stored.clone()
        }
    }

    impl ConfigStore for MemoryStore {
        fn load(&self) -> Result<OverlayConfig> {
            Ok(self.stored().unwrap_or_default())
        }

        fn save(&self, config: &OverlayConfig) -> Result<()> {
            let mut state = self.0.borrow_mut();
            if state.fail_saves {
                return Err(Error::Invalid {
                    message: "disk full".to_string(),
                });
            }
            state.saves += 1;
            state.stored = Some(config.clone());
            Ok(())
        }
    }

    #[derive(Default)]
    struct RecordingControl {
        deltas: Vec<i8>,
        fail: bool,
    }

    impl RateControl for RecordingControl {
        fn set_rate(&mut self, delta: i8) -> Result<()> {
            if self.fail {
                return Err(Error::TelemetryUnavailable {
                    message: "event not found".to_string(),
                });
            }
            self.deltas.push(delta);
            Ok(())
        }
    }

    fn displays() -> Vec<ScreenRect> {
        vec![ScreenRect::new(0.0, 0.0, 1920.0, 1080.0)]
    }

    fn controller(store: &MemoryStore) -> OverlayController {
        OverlayController::load(Box::new(store.clone()), &displays())
    }

    fn connected(value: f64) -> SimRateSample {
        SimRateSample::connected(value)
    }

    #[test]
    fn test_starts_disconnected_with_loaded_config() {
        let config = OverlayConfig {
            position: Position::new(640, 480),
            size_tier: SizeTier::M,
            auto_hide: false,
            start_with_windows: true,
        };
        let store = MemoryStore::with(config.clone());
        let overlay = controller(&store);

        assert_eq!(overlay.phase(), OverlayPhase::Disconnected);
        assert_eq!(overlay.config(), &config);
        assert_eq!(store.saves(), 0);
    }

    #[test]
    fn test_hidden_config_starts_hidden() {
        let store = MemoryStore::with(OverlayConfig {
            size_tier: SizeTier::Hidden,
            ..Default::default()
        });
        assert_eq!(controller(&store).phase(), OverlayPhase::Hidden);
    }

    #[test]
    fn test_disconnected_sample_shows_no_rate() {
        let store = MemoryStore::default();
        let mut overlay = controller(&store);

        overlay.on_sample(SimRateSample::disconnected());

        assert_eq!(overlay.phase(), OverlayPhase::Disconnected);
        let view = overlay.view();
        assert!(!view.visible);
        assert!(view.text.is_none());
        assert_eq!(overlay.rate_text(), NO_RATE_TEXT);
    }

    #[test]
    fn test_fast_sample_shows_fast_rate() {
        let store = MemoryStore::default();
        let mut overlay = controller(&store);

        assert!(overlay.on_sample(connected(2.0)));

        assert_eq!(overlay.phase(), OverlayPhase::ConnectedIdle);
        let view = overlay.view();
        assert!(view.visible);
        assert_eq!(view.text.as_deref(), Some("2.0x"));
        assert_eq!(view.tier, Some(DisplayTier::Fast));
    }

    #[test]
    fn test_connection_loss_returns_to_disconnected() {
        let store = MemoryStore::default();
        let mut overlay = controller(&store);

        overlay.on_sample(connected(1.0));
        assert!(overlay.on_sample(SimRateSample::disconnected()));
        assert_eq!(overlay.phase(), OverlayPhase::Disconnected);
        assert!(!overlay.view().visible);

        overlay.on_sample(connected(0.5));
        assert_eq!(overlay.view().tier, Some(DisplayTier::Slow));
    }

    #[test]
    fn test_drag_commits_and_persists_position() {
        let store = MemoryStore::with(OverlayConfig {
            position: Position::new(100, 100),
            ..Default::default()
        });
        let mut overlay = controller(&store);
        overlay.on_sample(connected(1.0));

        let t0 = Instant::now();
        assert!(overlay.begin_drag(t0));
        assert_eq!(overlay.phase(), OverlayPhase::Dragging);
        overlay.drag_to(Position::new(200, 180), t0);
        overlay.drag_to(Position::new(300, 250), t0);
        assert_eq!(overlay.view().position, Position::new(300, 250));
        assert_eq!(store.saves(), 0);

        assert!(overlay.end_drag());

        assert_eq!(overlay.phase(), OverlayPhase::ConnectedIdle);
        assert_eq!(overlay.config().position, Position::new(300, 250));
        assert_eq!(store.saves(), 1);
        assert_eq!(
            store.stored().map(|c| c.position),
            Some(Position::new(300, 250))
        );
    }

    #[test]
    fn test_drag_requires_connected_overlay() {
        let store = MemoryStore::default();
        let mut overlay = controller(&store);
        assert!(!overlay.begin_drag(Instant::now()));
        assert!(!overlay.end_drag());
        assert_eq!(overlay.phase(), OverlayPhase::Disconnected);
    }

    #[test]
    fn test_drag_without_movement_does_not_write() {
        let store = MemoryStore::default();
        let mut overlay = controller(&store);
        overlay.on_sample(connected(1.0));

        overlay.begin_drag(Instant::now());
        overlay.end_drag();
        assert_eq!(store.saves(), 0);
    }

    #[test]
    fn test_disconnect_during_drag() {
        let store = MemoryStore::default();
        let mut overlay = controller(&store);
        overlay.on_sample(connected(1.0));

        let now = Instant::now();
        overlay.begin_drag(now);
        overlay.drag_to(Position::new(400, 300), now);
        overlay.on_sample(SimRateSample::disconnected());
        assert_eq!(overlay.phase(), OverlayPhase::Dragging);

        // the window being moved is kept, showing the placeholder
        let view = overlay.view();
        assert!(view.visible);
        assert_eq!(view.text, None);
        assert_eq!(view.position, Position::new(400, 300));

        overlay.end_drag();
        assert_eq!(overlay.phase(), OverlayPhase::Disconnected);
        assert_eq!(overlay.config().position, Position::new(400, 300));
        assert!(!overlay.view().visible);
    }

    #[test]
    fn test_focus_loss_during_drag_keeps_window() {
        let store = MemoryStore::default();
        let mut overlay = controller(&store);
        overlay.on_sample(connected(2.0));

        let start = Instant::now();
        overlay.begin_drag(start);
        overlay.observe_focus(false, start);
        overlay.observe_focus(false, start + FOCUS_HIDE_DEBOUNCE);
        assert!(overlay.hidden_by_focus());
        assert!(overlay.view().visible);

        overlay.end_drag();
        assert!(!overlay.view().visible);
    }

    #[test]
    fn test_os_move_starts_and_settles_drag() {
        let store = MemoryStore::default();
        let mut overlay = controller(&store);
        overlay.on_sample(connected(1.0));

        let t0 = Instant::now();
        assert!(!overlay.window_moved(overlay.config().position, t0));
        assert!(overlay.window_moved(Position::new(500, 500), t0));
        assert!(overlay.is_dragging());

        assert!(!overlay.settle_drag(t0 + Duration::from_millis(100)));
        assert!(overlay.settle_drag(t0 + DRAG_SETTLE));
        assert!(!overlay.is_dragging());
        assert_eq!(overlay.config().position, Position::new(500, 500));
        assert_eq!(store.saves(), 1);
    }

    #[test]
    fn test_auto_hide_focus_cycle() {
        let store = MemoryStore::default();
        let mut overlay = controller(&store);
        overlay.on_sample(connected(4.0));

        let t0 = Instant::now();
        overlay.observe_focus(false, t0);
        assert!(!overlay.hidden_by_focus(), "hide is debounced");
        assert!(overlay.view().visible);

        overlay.observe_focus(false, t0 + FOCUS_HIDE_DEBOUNCE);
        assert!(overlay.hidden_by_focus());
        assert!(!overlay.view().visible);
        // still connected and polling
        assert_eq!(overlay.phase(), OverlayPhase::ConnectedIdle);
        overlay.on_sample(connected(8.0));

        overlay.observe_focus(true, t0 + Duration::from_secs(2));
        assert!(!overlay.hidden_by_focus());
        let view = overlay.view();
        assert!(view.visible);
        assert_eq!(view.text.as_deref(), Some("8.0x"));
        assert_eq!(view.tier, Some(DisplayTier::Fast));
    }

    #[test]
    fn test_brief_focus_loss_does_not_hide() {
        let store = MemoryStore::default();
        let mut overlay = controller(&store);
        overlay.on_sample(connected(1.0));

        let t0 = Instant::now();
        overlay.observe_focus(false, t0);
        overlay.observe_focus(true, t0 + Duration::from_millis(100));
        overlay.observe_focus(false, t0 + Duration::from_millis(350));
        assert!(!overlay.hidden_by_focus());
    }

    #[test]
    fn test_focus_ignored_without_auto_hide() {
        let store = MemoryStore::with(OverlayConfig {
            auto_hide: false,
            ..Default::default()
        });
        let mut overlay = controller(&store);
        overlay.on_sample(connected(1.0));

        let t0 = Instant::now();
        overlay.observe_focus(false, t0);
        overlay.observe_focus(false, t0 + Duration::from_secs(5));
        assert!(!overlay.hidden_by_focus());
        assert!(overlay.view().visible);
    }

    #[test]
    fn test_disabling_auto_hide_clears_flag() {
        let store = MemoryStore::default();
        let mut overlay = controller(&store);
        overlay.on_sample(connected(1.0));

        let t0 = Instant::now();
        overlay.observe_focus(false, t0);
        overlay.observe_focus(false, t0 + FOCUS_HIDE_DEBOUNCE);
        assert!(overlay.hidden_by_focus());

        assert!(overlay.set_auto_hide(false));
        assert!(!overlay.hidden_by_focus());
        assert!(!store.stored().expect("saved").auto_hide);
    }

    #[test]
    fn test_hidden_tier_keeps_polling() {
        let store = MemoryStore::default();
        let mut overlay = controller(&store);
        overlay.on_sample(connected(1.0));

        assert!(overlay.set_size_tier(SizeTier::Hidden));
        assert_eq!(overlay.phase(), OverlayPhase::Hidden);
        assert!(!overlay.view().visible);

        overlay.on_sample(connected(16.0));
        assert_eq!(overlay.phase(), OverlayPhase::Hidden);
        assert_eq!(overlay.rate_text(), "16.0x");

        assert!(overlay.set_size_tier(SizeTier::XL));
        assert_eq!(overlay.phase(), OverlayPhase::ConnectedIdle);
        let view = overlay.view();
        assert!(view.visible);
        assert_eq!(view.size, SizeTier::XL);
        assert_eq!(store.saves(), 2);
    }

    #[test]
    fn test_unhide_while_disconnected() {
        let store = MemoryStore::default();
        let mut overlay = controller(&store);

        overlay.set_size_tier(SizeTier::Hidden);
        overlay.set_size_tier(SizeTier::S);
        assert_eq!(overlay.phase(), OverlayPhase::Disconnected);
    }

    #[test]
    fn test_same_size_tier_is_a_noop() {
        let store = MemoryStore::default();
        let mut overlay = controller(&store);
        overlay.on_sample(connected(1.0));
        let current = overlay.config().size_tier;

        assert!(!overlay.set_size_tier(current));
        assert_eq!(overlay.phase(), OverlayPhase::ConnectedIdle);
        assert_eq!(store.saves(), 0);

        assert!(!overlay.set_auto_hide(overlay.config().auto_hide));
        assert!(!overlay.set_start_with_windows(overlay.config().start_with_windows));
        assert_eq!(store.saves(), 0);
    }

    #[test]
    fn test_size_change_commits_active_drag() {
        let store = MemoryStore::default();
        let mut overlay = controller(&store);
        overlay.on_sample(connected(1.0));

        let now = Instant::now();
        overlay.begin_drag(now);
        overlay.drag_to(Position::new(640, 360), now);
        overlay.set_size_tier(SizeTier::Hidden);

        assert!(!overlay.is_dragging());
        assert_eq!(overlay.phase(), OverlayPhase::Hidden);
        assert_eq!(
            store.stored().map(|c| (c.position, c.size_tier)),
            Some((Position::new(640, 360), SizeTier::Hidden))
        );
    }

    #[test]
    fn test_adjust_rate_forwards_delta() {
        let store = MemoryStore::default();
        let mut overlay = controller(&store);
        let mut control = RecordingControl::default();

        assert!(!overlay.adjust_rate(1, &mut control), "not connected yet");

        overlay.on_sample(connected(1.0));
        assert!(overlay.adjust_rate(1, &mut control));
        assert!(overlay.adjust_rate(-1, &mut control));
        assert_eq!(control.deltas, vec![1, -1]);
    }

    #[test]
    fn test_failed_rate_change_keeps_display() {
        let store = MemoryStore::default();
        let mut overlay = controller(&store);
        overlay.on_sample(connected(2.0));

        let mut control = RecordingControl {
            fail: true,
            ..Default::default()
        };
        assert!(!overlay.adjust_rate(1, &mut control));
        assert_eq!(overlay.view().text.as_deref(), Some("2.0x"));
        assert_eq!(overlay.phase(), OverlayPhase::ConnectedIdle);
    }

    #[test]
    fn test_persist_failure_is_retried_on_next_mutation() {
        let store = MemoryStore::default();
        let mut overlay = controller(&store);

        store.0.borrow_mut().fail_saves = true;
        assert!(overlay.set_start_with_windows(true));
        assert!(overlay.is_dirty());
        assert!(overlay.config().start_with_windows);

        store.0.borrow_mut().fail_saves = false;
        overlay.set_auto_hide(false);
        assert!(!overlay.is_dirty());
        let stored = store.stored().expect("saved");
        assert!(stored.start_with_windows);
        assert!(!stored.auto_hide);
    }

    #[test]
    fn test_shutdown_persists() {
        let store = MemoryStore::default();
        let mut overlay = controller(&store);
        overlay.shutdown();
        assert_eq!(store.saves(), 1);
        assert_eq!(store.stored(), Some(OverlayConfig::default()));
    }

    #[test]
    fn test_offscreen_position_is_recentered_on_load() {
        let store = MemoryStore::with(OverlayConfig {
            position: Position::new(-4000, 9000),
            size_tier: SizeTier::S,
            auto_hide: false,
            start_with_windows: true,
        });
        let overlay = controller(&store);

        let m = SizeTier::S.metrics().expect("metrics");
        let config = overlay.config();
        assert_eq!(config.position, displays()[0].centered(m.width, m.height));
        assert_eq!(config.size_tier, SizeTier::S);
        assert!(!config.auto_hide);
        assert!(config.start_with_windows);
    }

    #[test]
    fn test_config_round_trip_through_controller() {
        let store = MemoryStore::default();
        let mut overlay = controller(&store);
        overlay.on_sample(connected(1.0));
        overlay.set_size_tier(SizeTier::M);
        overlay.set_auto_hide(false);
        overlay.set_start_with_windows(true);
        let now = Instant::now();
        overlay.begin_drag(now);
        overlay.drag_to(Position::new(10, 20), now);
        overlay.end_drag();

        let reloaded = controller(&store);
        assert_eq!(reloaded.config(), overlay.config());
    }

    #[test]
    fn test_malformed_config_file_starts_with_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{\"position\": [1, ").expect("write");

        let overlay = OverlayController::load(Box::new(JsonFileStore::new(&path)), &displays());

        assert_eq!(overlay.config(), &OverlayConfig::default());
        assert_eq!(overlay.phase(), OverlayPhase::Disconnected);
    }
}
