//! Overlay Feature

pub mod controller;
pub mod page;
