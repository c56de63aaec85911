//! Opposite-edge averaging so the wrap-around seam matches

use crate::io::configuration::EDGE_ZONE_FRACTION;
use crate::io::error::Result;
use crate::math::blend::{lerp, to_channel};
use crate::tiling::crop::crop_square;
use image::{Rgba, RgbaImage};
use tracing::debug;

/// Run the edge-average algorithm on a source bitmap
///
/// Left/right edges are averaged first; the top/bottom pass then reads the
/// already left/right-averaged pixels.
///
/// # Errors
///
/// Returns an error if the source has no square region
pub fn edge_average(image: &RgbaImage) -> Result<RgbaImage> {
    let (crop, square) = crop_square(image)?;
    let zone = crop.fraction(EDGE_ZONE_FRACTION);
    debug!(size = crop.size, zone, "edge average");

    let columns = average_left_right(&square, zone);
    Ok(average_top_bottom(&columns, zone))
}

/// Weight pulling a pixel `offset` pixels in from the edge toward the pair average
pub fn edge_weight(offset: u32, zone: u32) -> f64 {
    if zone == 0 {
        return 0.0;
    }
    1.0 - f64::from(offset) / f64::from(zone)
}

/// Average column `i` with column `width - 1 - i` for every `i < zone`
pub fn average_left_right(input: &RgbaImage, zone: u32) -> RgbaImage {
    let mut output = input.clone();
    let width = input.width();
    for offset in 0..zone.min(width / 2) {
        let weight = edge_weight(offset, zone);
        let right = width - 1 - offset;
        for y in 0..input.height() {
            let (a, b) = average_pair(
                input.get_pixel(offset, y).0,
                input.get_pixel(right, y).0,
                weight,
            );
            output.put_pixel(offset, y, Rgba(a));
            output.put_pixel(right, y, Rgba(b));
        }
    }
    output
}

/// Average row `i` with row `height - 1 - i` for every `i < zone`
pub fn average_top_bottom(input: &RgbaImage, zone: u32) -> RgbaImage {
    let mut output = input.clone();
    let height = input.height();
    for offset in 0..zone.min(height / 2) {
        let weight = edge_weight(offset, zone);
        let bottom = height - 1 - offset;
        for x in 0..input.width() {
            let (a, b) = average_pair(
                input.get_pixel(x, offset).0,
                input.get_pixel(x, bottom).0,
                weight,
            );
            output.put_pixel(x, offset, Rgba(a));
            output.put_pixel(x, bottom, Rgba(b));
        }
    }
    output
}

// Both pixels move toward their RGB mean by `weight`; alpha stays put
fn average_pair(a: [u8; 4], b: [u8; 4], weight: f64) -> ([u8; 4], [u8; 4]) {
    let mut out_a = a;
    let mut out_b = b;
    for ((da, db), (&ca, &cb)) in out_a
        .iter_mut()
        .zip(out_b.iter_mut())
        .zip(a.iter().zip(&b))
        .take(3)
    {
        let (fa, fb) = (f64::from(ca), f64::from(cb));
        let mean = (fa + fb) / 2.0;
        *da = to_channel(lerp(fa, mean, weight));
        *db = to_channel(lerp(fb, mean, weight));
    }
    (out_a, out_b)
}
