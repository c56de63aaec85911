//! Quadrant swap followed by seam blending along both centrelines
//!
//! Swapping the quadrants diagonally brings the original outer edges together at the
//! centre of the tile, so the outer edges of the result wrap seamlessly. The new inner
//! seams are then softened by mixing each pixel near a centreline with its mirror image
//! across that centreline.
//!
//! The two blend passes are sequential: the vertical pass samples the output of the
//! horizontal pass, not the unblended swap.

use crate::io::configuration::{BLEND_BAND_FRACTION, BLEND_STRENGTH};
use crate::io::error::Result;
use crate::math::blend::{mix_rgb, seam_factor};
use crate::tiling::crop::crop_square;
use image::{Rgba, RgbaImage};
use std::ops::Range;
use tracing::debug;

/// Run the full offset-and-blend algorithm on a source bitmap
///
/// # Errors
///
/// Returns an error if the source has no square region
pub fn offset_blend(image: &RgbaImage) -> Result<RgbaImage> {
    let (crop, square) = crop_square(image)?;
    let half = crop.half();
    let band = crop.fraction(BLEND_BAND_FRACTION);
    debug!(size = crop.size, half, band, "offset blend");

    let swapped = swap_quadrants(&square);
    let horizontal = blend_horizontal_seam(&swapped, half, band);
    let mut blended = blend_vertical_seam(&horizontal, half, band);
    force_opaque(&mut blended);
    Ok(blended)
}

/// Swap quadrants diagonally so the original edges meet at `size / 2`
///
/// Implemented as a cyclic shift by `size - size / 2` on both axes, which moves
/// bottom-right to top-left, bottom-left to top-right and so on.
pub fn swap_quadrants(square: &RgbaImage) -> RgbaImage {
    let (width, height) = square.dimensions();
    let shift_x = width - width / 2;
    let shift_y = height - height / 2;

    RgbaImage::from_fn(width, height, |x, y| {
        *square.get_pixel((x + shift_x) % width, (y + shift_y) % height)
    })
}

/// Blend rows around the horizontal centreline, reading only from `input`
pub fn blend_horizontal_seam(input: &RgbaImage, half: u32, band: u32) -> RgbaImage {
    let mut output = input.clone();
    for y in band_range(half, band, input.height()) {
        let weight = seam_weight(y, half, band);
        let mirrored = mirror_across(y, half, input.height());
        for x in 0..input.width() {
            let original = input.get_pixel(x, y).0;
            let opposite = input.get_pixel(x, mirrored).0;
            output.put_pixel(x, y, Rgba(mix_rgb(original, opposite, weight)));
        }
    }
    output
}

/// Blend columns around the vertical centreline, reading only from `input`
pub fn blend_vertical_seam(input: &RgbaImage, half: u32, band: u32) -> RgbaImage {
    let mut output = input.clone();
    for x in band_range(half, band, input.width()) {
        let weight = seam_weight(x, half, band);
        let mirrored = mirror_across(x, half, input.width());
        for y in 0..input.height() {
            let original = input.get_pixel(x, y).0;
            let opposite = input.get_pixel(mirrored, y).0;
            output.put_pixel(x, y, Rgba(mix_rgb(original, opposite, weight)));
        }
    }
    output
}

/// Set every alpha channel to fully opaque
pub fn force_opaque(image: &mut RgbaImage) {
    for pixel in image.pixels_mut() {
        pixel.0[3] = u8::MAX;
    }
}

// Coordinates strictly closer than `band` to the seam
fn band_range(half: u32, band: u32, limit: u32) -> Range<u32> {
    (half + 1).saturating_sub(band)..(half + band).min(limit)
}

fn seam_weight(coordinate: u32, half: u32, band: u32) -> f64 {
    let distance = f64::from(coordinate.abs_diff(half));
    seam_factor(distance, f64::from(band)) * BLEND_STRENGTH
}

// Reflection across the line between `half - 1` and `half`
fn mirror_across(coordinate: u32, half: u32, limit: u32) -> u32 {
    let reflected = i64::from(half) * 2 - 1 - i64::from(coordinate);
    reflected.clamp(0, i64::from(limit.saturating_sub(1))) as u32
}
