//! Soft overlap tiling, an approximation of graph-cut seam synthesis
//!
//! No minimum-cost seam is searched for. Opposite edge strips are composited onto
//! each other at reduced opacity and the right edge gets an additional overlay
//! gradient. The result is softer at the wrap but not mathematically seamless.

use crate::io::configuration::{OVERLAP_FRACTION, OVERLAP_OPACITY, OVERLAY_PEAK_ALPHA};
use crate::io::error::Result;
use crate::math::blend::{overlay, source_over};
use crate::tiling::crop::crop_square;
use image::{Rgba, RgbaImage};
use tracing::debug;

const OVERLAY_COLOR: [u8; 3] = [0, 0, 0];

/// Run the soft overlap algorithm on a source bitmap
///
/// # Errors
///
/// Returns an error if the source has no square region
pub fn soft_overlap(image: &RgbaImage) -> Result<RgbaImage> {
    let (crop, mut canvas) = crop_square(image)?;
    let overlap = crop.fraction(OVERLAP_FRACTION);
    debug!(size = crop.size, overlap, "soft overlap");

    if overlap == 0 {
        return Ok(canvas);
    }

    composite_left_strip_onto_right(&mut canvas, overlap);
    composite_top_strip_onto_bottom(&mut canvas, overlap);
    overlay_right_gradient(&mut canvas, overlap);
    Ok(canvas)
}

/// Draw columns `[0, overlap)` over `[size - overlap, size)` at reduced opacity
pub fn composite_left_strip_onto_right(canvas: &mut RgbaImage, overlap: u32) {
    let (width, height) = canvas.dimensions();
    let overlap = overlap.min(width);
    let strip = image::imageops::crop_imm(&*canvas, 0, 0, overlap, height).to_image();
    let offset = width - overlap;

    for (x, y, source) in strip.enumerate_pixels() {
        let target = canvas.get_pixel_mut(offset + x, y);
        *target = Rgba(source_over(target.0, source.0, OVERLAP_OPACITY));
    }
}

/// Draw rows `[0, overlap)` over `[size - overlap, size)` at reduced opacity
///
/// Reads the canvas as left by the previous step.
pub fn composite_top_strip_onto_bottom(canvas: &mut RgbaImage, overlap: u32) {
    let (width, height) = canvas.dimensions();
    let overlap = overlap.min(height);
    let strip = image::imageops::crop_imm(&*canvas, 0, 0, width, overlap).to_image();
    let offset = height - overlap;

    for (x, y, source) in strip.enumerate_pixels() {
        let target = canvas.get_pixel_mut(x, offset + y);
        *target = Rgba(source_over(target.0, source.0, OVERLAP_OPACITY));
    }
}

/// Alpha of the transparent-black-transparent gradient at `t` in `[0, 1]`
pub fn gradient_alpha(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    let ramp = if t <= 0.5 { t * 2.0 } else { (1.0 - t) * 2.0 };
    ramp * OVERLAY_PEAK_ALPHA
}

/// Overlay the horizontal gradient across the right edge strip
pub fn overlay_right_gradient(canvas: &mut RgbaImage, overlap: u32) {
    let (width, height) = canvas.dimensions();
    let overlap = overlap.min(width);
    let start = width - overlap;

    for x in start..width {
        // Sample at pixel centres, as canvas gradients do
        let t = (f64::from(x - start) + 0.5) / f64::from(overlap);
        let alpha = gradient_alpha(t);
        for y in 0..height {
            let target = canvas.get_pixel_mut(x, y);
            *target = Rgba(overlay(target.0, OVERLAY_COLOR, alpha));
        }
    }
}
