//! Seamless pattern tile generation from arbitrary source images
//!
//! A source image is cropped to its largest centred square and rewritten by one of
//! several tiling transforms so that opposite edges match when the tile is repeated.
//! All transforms can be run concurrently, and finished tiles can be previewed as a
//! repeating grid or written to disk.

#![forbid(unsafe_code)]

/// Input/output operations, configuration and error handling
pub mod io;
/// Blend arithmetic shared by the tiling transforms
pub mod math;
/// Variation orchestration and preview rendering
pub mod pattern;
/// Seamless tiling transforms
pub mod tiling;

pub use io::error::{LoadError, PatternError, Result};
pub use io::image::{ImageReference, ImageSource, download_pattern};
pub use pattern::{PatternVariation, generate_all_variations, render_preview};
pub use tiling::TilingMethod;
