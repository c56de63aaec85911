//! Pattern variation orchestration and preview rendering

/// Repeating-grid preview rendering
pub mod preview;
/// Concurrent variation generation and descriptors
pub mod variations;

pub use preview::{PreviewLayout, render_preview, tile_preview};
pub use variations::{PatternVariation, generate_all_variations, generate_variation};
