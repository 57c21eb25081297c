//! Service Layer
//!
//! Simulator telemetry and foreground-focus detection, polled off the UI thread.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    TelemetryHandle                           │
//! │  ┌──────────────────┐  ┌──────────────┐                      │
//! │  │ TelemetrySource  │  │  FocusProbe  │   telemetry thread   │
//! │  │ (demo / offline) │  │  (title)     │                      │
//! │  └──────────────────┘  └──────────────┘                      │
//! └─────────────────────────────────────────────────────────────┘
//!                            │
//!                            ▼ TelemetryUpdate (latest only)
//! ┌─────────────────────────────────────────────────────────────┐
//! │                   OverlayController                          │
//! └─────────────────────────────────────────────────────────────┘
//! ```

pub mod demo;
pub mod focus;
pub mod telemetry;
pub mod worker;

pub use demo::DemoSource;
pub use focus::{AlwaysFocused, FocusProbe, TitleFocusProbe};
pub use telemetry::{OfflineSource, RateControl, SimRateSample, TelemetrySource, TelemetryUpdate};
pub use worker::TelemetryHandle;
