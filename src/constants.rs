//! Overlay Constants
//!
//! Centralized timing and layout constants.

use std::time::Duration;

/// Product folder under the per-user config directory
pub const APP_DIR_NAME: &str = "MSFS-SimRateMonitor";

/// Persisted settings file name
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Log file prefix inside the app data directory
pub const LOG_FILE_PREFIX: &str = "simrate-overlay";

/// Startup entry name (file stem of the launcher/desktop entry)
pub const STARTUP_ENTRY_NAME: &str = "MSFS-SimRateMonitor";

/// Telemetry poll and UI refresh cadence
pub const POLL_INTERVAL: Duration = Duration::from_millis(500);

/// UI pump period; finer than the poll so debounce and drag settle stay accurate
pub const UI_TICK: Duration = Duration::from_millis(100);

/// Focus must stay lost this long before auto-hide kicks in
pub const FOCUS_HIDE_DEBOUNCE: Duration = Duration::from_millis(300);

/// A drag with no window movement for this long is committed
pub const DRAG_SETTLE: Duration = Duration::from_millis(750);

/// Rate steps sent per increase/decrease press
pub const RATE_STEP: i8 = 1;

/// Demo source bounds
pub const DEMO_MIN_RATE: f64 = 0.25;
pub const DEMO_MAX_RATE: f64 = 128.0;

/// Default overlay origin on first run
pub const DEFAULT_OVERLAY_X: i32 = 100;
pub const DEFAULT_OVERLAY_Y: i32 = 100;

/// Extra overlay width taken by the rate buttons
pub const RATE_BUTTONS_WIDTH: f32 = 45.0;

/// Settings window dimensions
pub const SETTINGS_WINDOW_WIDTH: f32 = 340.0;
pub const SETTINGS_WINDOW_HEIGHT: f32 = 330.0;

/// Foreground window titles that count as the simulator
pub const SIMULATOR_TITLE_MARKERS: &[&str] = &["Microsoft Flight Simulator", "FlightSimulator"];

/// Environment variable selecting the telemetry source
pub const TELEMETRY_ENV: &str = "SIMRATE_TELEMETRY";

/// Settings window title
pub const APP_TITLE: &str = "MSFS Sim Rate Monitor";

/// Log directory under the app data directory
pub const LOG_DIR_NAME: &str = "logs";
