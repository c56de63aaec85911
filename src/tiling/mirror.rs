//! Four-way mirror ("kaleidoscope") tiling of the top-left quadrant

use crate::io::error::Result;
use crate::tiling::crop::crop_square;
use image::RgbaImage;
use tracing::debug;

/// Reflect the top-left quadrant of the centred square into all four quadrants
///
/// The other three quadrants of the source are ignored. Mirrored edges meet
/// exactly at the centrelines, so no blending is performed and alpha is copied
/// unchanged.
///
/// # Errors
///
/// Returns an error if the source has no square region
pub fn mirror_tile(image: &RgbaImage) -> Result<RgbaImage> {
    let (crop, square) = crop_square(image)?;
    let size = crop.size;
    let quadrant = crop.half().max(1);
    debug!(size, quadrant, "mirror tile");

    Ok(RgbaImage::from_fn(size, size, |x, y| {
        *square.get_pixel(
            quadrant_coordinate(x, size, quadrant),
            quadrant_coordinate(y, size, quadrant),
        )
    }))
}

/// Map an output coordinate onto the source quadrant
///
/// The first `quadrant` coordinates map to themselves, the rest are reflected
/// back from the far edge.
pub const fn quadrant_coordinate(coordinate: u32, size: u32, quadrant: u32) -> u32 {
    if coordinate < quadrant {
        coordinate
    } else {
        let reflected = size - 1 - coordinate;
        if reflected < quadrant {
            reflected
        } else {
            quadrant - 1
        }
    }
}
