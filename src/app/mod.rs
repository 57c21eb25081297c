//! Application Layer
//!
//! App initialization, global entities, the settings window shell and the overlay
//! window host.

pub mod application;
pub mod entities;
pub mod host;
pub mod workspace;
