//! Trigon engine crate.
//!
//! This crate owns the platform + GPU runtime pieces and the triangle
//! renderer driven by the viewer binary.

pub mod device;
pub mod window;
pub mod time;
pub mod core;

pub mod logging;
pub mod geometry;
pub mod render;
