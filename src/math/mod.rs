//! Mathematical utilities for the tiling algorithms

/// Blend factors, interpolation and compositing arithmetic
pub mod blend;
