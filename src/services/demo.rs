//! Demo Telemetry Source
//!
//! In-process stand-in for the simulator. Rates move in powers of two like the
//! simulator's own SIM_RATE_INCR / SIM_RATE_DECR events.

use crate::constants::{DEMO_MAX_RATE, DEMO_MIN_RATE};
use crate::error::Result;
use crate::services::telemetry::{SimRateSample, TelemetrySource};

#[derive(Debug, Clone)]
pub struct DemoSource {
    rate: f64,
}

impl DemoSource {
    pub fn new() -> Self {
        Self { rate: 1.0 }
    }

    pub fn rate(&self) -> f64 {
        self.rate
    }
}

impl Default for DemoSource {
    fn default() -> Self {
        Self::new()
    }
}

impl TelemetrySource for DemoSource {
    fn poll(&mut self) -> SimRateSample {
        SimRateSample::connected(self.rate)
    }

    fn set_rate(&mut self, delta: i8) -> Result<()> {
        let next = self.rate * 2f64.powi(i32::from(delta));
        self.rate = next.clamp(DEMO_MIN_RATE, DEMO_MAX_RATE);
        tracing::debug!(delta, rate = self.rate, "Demo sim rate changed");
        Ok(())
    }

    fn name(&self) -> &'static str {
        "demo"
    }
}
