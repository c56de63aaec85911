//! Seamless tiling transforms
//!
//! Every algorithm takes an arbitrary-aspect bitmap, works on its largest centred
//! square and returns a new square tile whose opposite edges line up when repeated.

/// Centred square cropping shared by all algorithms
pub mod crop;
/// Opposite-edge averaging
pub mod edge_average;
/// Four-way mirror symmetry
pub mod mirror;
/// Quadrant swap with seam blending
pub mod offset;
/// Soft edge overlap (graph-cut approximation)
pub mod overlap;

use crate::io::error::Result;
use clap::ValueEnum;
use image::RgbaImage;
use std::fmt;

/// The tiling algorithms that run locally
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum TilingMethod {
    /// Diagonal quadrant swap followed by centreline blending
    #[value(name = "offset")]
    OffsetBlend,
    /// Top-left quadrant reflected into all four quadrants
    #[value(name = "mirror")]
    Mirror,
    /// Edge strips composited onto opposite edges at half opacity
    #[value(name = "overlap")]
    SoftOverlap,
    /// Opposite edges pulled toward their shared average
    #[value(name = "edge")]
    EdgeAverage,
}

impl TilingMethod {
    /// All locally computed methods, in presentation order
    pub const ALL: [Self; 4] = [
        Self::OffsetBlend,
        Self::Mirror,
        Self::SoftOverlap,
        Self::EdgeAverage,
    ];

    /// Stable identifier used in descriptors and output filenames
    pub const fn id(self) -> &'static str {
        match self {
            Self::OffsetBlend => "offset-blend",
            Self::Mirror => "mirror",
            Self::SoftOverlap => "soft-overlap",
            Self::EdgeAverage => "edge-average",
        }
    }

    /// Human readable name
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::OffsetBlend => "Offset & Blend",
            Self::Mirror => "Mirror Symmetry",
            Self::SoftOverlap => "Soft Overlap",
            Self::EdgeAverage => "Edge Average",
        }
    }

    /// One-line description for selection lists
    pub const fn description(self) -> &'static str {
        match self {
            Self::OffsetBlend => "Swaps quadrants diagonally and blends the new centre seams",
            Self::Mirror => "Kaleidoscope tile built from the top-left quadrant",
            Self::SoftOverlap => {
                "Softens the wrap by overlapping edge strips; approximates graph-cut synthesis without a seam search"
            }
            Self::EdgeAverage => "Pulls opposite edges toward their shared average colour",
        }
    }

    /// Whether the method is suggested as the default choice
    pub const fn recommended(self) -> bool {
        matches!(self, Self::OffsetBlend)
    }

    /// Run the method on a decoded source bitmap
    ///
    /// # Errors
    ///
    /// Returns an error if the source has no square region
    pub fn apply(self, image: &RgbaImage) -> Result<RgbaImage> {
        match self {
            Self::OffsetBlend => offset::offset_blend(image),
            Self::Mirror => mirror::mirror_tile(image),
            Self::SoftOverlap => overlap::soft_overlap(image),
            Self::EdgeAverage => edge_average::edge_average(image),
        }
    }
}

impl fmt::Display for TilingMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}
