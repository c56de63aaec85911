//! Tests for quadrant swapping and centreline blending

#[cfg(test)]
mod tests {
    use image::{Rgba, RgbaImage};
    use seamtile::tiling::crop::crop_square;
    use seamtile::tiling::offset::{
        blend_horizontal_seam, blend_vertical_seam, force_opaque, offset_blend, swap_quadrants,
    };

    fn red(image: &RgbaImage, x: u32, y: u32) -> u8 {
        image.get_pixel(x, y).0[0]
    }

    // Tests quadrants move diagonally
    // Verified by shifting only the x axis
    #[test]
    fn test_swap_quadrants_even() {
        let source = RgbaImage::from_fn(4, 4, |x, y| Rgba([(y * 4 + x) as u8, 0, 0, 255]));
        let swapped = swap_quadrants(&source);

        // bottom-right -> top-left
        assert_eq!(red(&swapped, 0, 0), red(&source, 2, 2));
        // bottom-left -> top-right
        assert_eq!(red(&swapped, 2, 0), red(&source, 0, 2));
        // top-right -> bottom-left
        assert_eq!(red(&swapped, 0, 2), red(&source, 2, 0));
        // top-left -> bottom-right
        assert_eq!(red(&swapped, 3, 3), red(&source, 1, 1));
    }

    // Tests odd sizes put the original edges together at size / 2
    // Verified by shifting by size / 2 instead of size - size / 2
    #[test]
    fn test_swap_quadrants_odd_seam_position() {
        let source = RgbaImage::from_fn(5, 5, |x, y| Rgba([x as u8, y as u8, 0, 255]));
        let swapped = swap_quadrants(&source);

        assert_eq!(swapped.get_pixel(2, 2).0[..2], [0, 0]);
        assert_eq!(swapped.get_pixel(1, 1).0[..2], [4, 4]);
    }

    // Tests rows inside the band are mixed with their mirror across the seam
    // Verified by sampling the mirror from the output instead of the input
    #[test]
    fn test_horizontal_seam_weights() {
        let source = RgbaImage::from_fn(20, 20, |_, y| {
            Rgba([if y < 10 { 0 } else { 90 }, 0, 0, 255])
        });
        let blended = blend_horizontal_seam(&source, 10, 3);

        let column: Vec<u8> = (6..15).map(|y| red(&blended, 4, y)).collect();
        assert_eq!(column, vec![0, 0, 15, 30, 45, 60, 75, 90, 90]);
    }

    // Tests an empty band leaves the image untouched
    // Verified by forcing a one-pixel band
    #[test]
    fn test_zero_band_is_identity() {
        let source = RgbaImage::from_fn(3, 3, |x, y| Rgba([x as u8 * 40, y as u8 * 40, 9, 200]));
        assert_eq!(blend_horizontal_seam(&source, 1, 0), source);
        assert_eq!(blend_vertical_seam(&source, 1, 0), source);
    }

    // Tests the algorithm runs horizontal then vertical on the swapped crop
    // Verified by swapping the pass order
    #[test]
    fn test_offset_blend_pipeline_order() {
        let source = RgbaImage::from_fn(31, 24, |x, y| {
            Rgba([(x * 8) as u8, (y * 10) as u8, ((x * y) % 256) as u8, 255])
        });
        let (crop, square) = crop_square(&source).unwrap();
        let band = crop.fraction(0.15);

        let horizontal = blend_horizontal_seam(&swap_quadrants(&square), crop.half(), band);
        let mut expected = blend_vertical_seam(&horizontal, crop.half(), band);
        force_opaque(&mut expected);

        assert_eq!(offset_blend(&source).unwrap(), expected);
    }

    // Tests every output pixel is fully opaque regardless of input alpha
    // Verified by skipping force_opaque
    #[test]
    fn test_offset_blend_output_is_opaque() {
        let source = RgbaImage::from_fn(16, 16, |x, y| Rgba([x as u8, y as u8, 3, (x * 16) as u8]));
        let tile = offset_blend(&source).unwrap();
        assert!(tile.pixels().all(|p| p.0[3] == 255));
    }

    // Tests the outer edges of the result wrap onto adjacent source columns
    // Verified by skipping the quadrant swap
    #[test]
    fn test_outer_edges_wrap() {
        let source = RgbaImage::from_fn(20, 20, |x, _| Rgba([(x * 10) as u8, 0, 0, 255]));
        let tile = offset_blend(&source).unwrap();

        for y in [0, 5, 19] {
            assert_eq!(red(&tile, 0, y), 100);
            assert_eq!(red(&tile, 19, y), 90);
        }
    }
}
