//! Helpers shared by the layout engine and both renderers.

pub mod unit;
pub mod xml;
