//! Utilities
//!
//! Local persistence and OS integration helpers.

pub mod config_store;
pub mod startup;
