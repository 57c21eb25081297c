//! SimRate Overlay Library
//!
//! Always-on-top sim-rate display for Microsoft Flight Simulator: telemetry polling,
//! the overlay state machine, persisted settings and the GPUI windows.

pub mod app;
pub mod components;
pub mod constants;
pub mod domain;
pub mod error;
pub mod features;
pub mod logging;
pub mod services;
pub mod theme;
pub mod utils;
