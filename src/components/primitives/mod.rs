//! Primitive Components
//!
//! Basic building blocks: buttons, checkboxes and segmented selectors.

pub mod button;
pub mod checkbox;
pub mod segmented;
