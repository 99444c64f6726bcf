//! Core types for the icon generator
//!
//! This crate provides the shared data structures used by the rasterizer and
//! the PNG encoder: the RGBA pixel buffer, error types, and the tuning
//! constants that define the icon's geometry and colors.

pub mod consts;
pub mod error;
pub mod pixmap;

pub use error::{IconError, IconResult};
pub use pixmap::{Pixmap, Rgba};
