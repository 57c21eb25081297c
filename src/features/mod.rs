//! Features - Vertical Feature Slices
//!
//! Each feature contains its page and controller.

pub mod overlay;
pub mod settings;
