//! Largest centred square region of an arbitrary bitmap

use crate::io::error::{PatternError, Result};
use image::RgbaImage;
use image::imageops::crop_imm;

/// Square region of a source bitmap that every tiling algorithm works on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SquareCrop {
    /// Edge length of the square
    pub size: u32,
    /// Left edge of the square in source coordinates
    pub origin_x: u32,
    /// Top edge of the square in source coordinates
    pub origin_y: u32,
}

impl SquareCrop {
    /// Compute the centred square for a `width` x `height` source
    ///
    /// Depends only on the dimensions, never on pixel content.
    pub const fn for_dimensions(width: u32, height: u32) -> Self {
        let size = if width < height { width } else { height };
        Self {
            size,
            origin_x: (width - size) / 2,
            origin_y: (height - size) / 2,
        }
    }

    /// Compute the square for an image
    pub fn of(image: &RgbaImage) -> Self {
        Self::for_dimensions(image.width(), image.height())
    }

    /// Half of the edge length, rounded down
    pub const fn half(&self) -> u32 {
        self.size / 2
    }

    /// `fraction` of the edge length in whole pixels, rounded down
    pub fn fraction(&self, fraction: f64) -> u32 {
        (f64::from(self.size) * fraction).floor() as u32
    }
}

/// Copy the centred square out of `image`
///
/// # Errors
///
/// Returns [`PatternError::DegenerateImage`] if the image has a zero dimension
pub fn crop_square(image: &RgbaImage) -> Result<(SquareCrop, RgbaImage)> {
    let crop = SquareCrop::of(image);
    if crop.size == 0 {
        return Err(PatternError::DegenerateImage {
            width: image.width(),
            height: image.height(),
        });
    }

    let square = crop_imm(image, crop.origin_x, crop.origin_y, crop.size, crop.size).to_image();
    Ok((crop, square))
}
