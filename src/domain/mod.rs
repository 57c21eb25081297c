//! Domain - Pure Data Structures
//!
//! These types don't depend on GPUI and represent the overlay's domain.

pub mod config;
pub mod rate;
