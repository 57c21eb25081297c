//! Telemetry Source Contract
//!
//! The simulator binding is an external collaborator: anything that can report the
//! current sim rate and nudge it up or down implements [`TelemetrySource`].

use std::time::Instant;

use crate::error::{Error, Result};

/// One polled sim-rate reading
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimRateSample {
    /// Time-acceleration factor, 1.0 = real-time
    pub value: f64,
    /// When the sample was taken
    pub timestamp: Instant,
    /// Whether the simulator answered
    pub connected: bool,
}

impl SimRateSample {
    pub fn connected(value: f64) -> Self {
        Self {
            value,
            timestamp: Instant::now(),
            connected: true,
        }
    }

    pub fn disconnected() -> Self {
        Self {
            value: 0.0,
            timestamp: Instant::now(),
            connected: false,
        }
    }
}

/// Latest worker output delivered to the UI thread
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TelemetryUpdate {
    pub sample: SimRateSample,
    pub simulator_focused: bool,
}

/// Simulator telemetry binding
///
/// `poll` must have bounded latency. An absent simulator is reported as a
/// disconnected sample, never as a panic.
pub trait TelemetrySource: Send {
    fn poll(&mut self) -> SimRateSample;

    /// Step the sim rate by `delta` increments (negative slows down)
    fn set_rate(&mut self, delta: i8) -> Result<()>;

    fn name(&self) -> &'static str;
}

/// Anything the controller can ask for a rate change
pub trait RateControl {
    fn set_rate(&mut self, delta: i8) -> Result<()>;
}

/// Source used when no simulator binding is available
#[derive(Debug, Default)]
pub struct OfflineSource;

impl TelemetrySource for OfflineSource {
    fn poll(&mut self) -> SimRateSample {
        SimRateSample::disconnected()
    }

    fn set_rate(&mut self, _delta: i8) -> Result<()> {
        Err(Error::TelemetryUnavailable {
            message: "no simulator binding available".to_string(),
        })
    }

    fn name(&self) -> &'static str {
        "offline"
    }
}
