//! Tests for configuration constants and their relationships

#[cfg(test)]
mod tests {
    use seamtile::io::configuration::{
        BLEND_BAND_FRACTION, BLEND_STRENGTH, DEFAULT_PREVIEW_SCALE, DEFAULT_PREVIEW_SIZE,
        EDGE_ZONE_FRACTION, INPUT_EXTENSIONS, MAX_PREVIEW_SCALE, MIN_PREVIEW_SCALE,
        OVERLAP_FRACTION, OVERLAP_OPACITY, OVERLAY_PEAK_ALPHA, PATCH_FRACTION,
        PREVIEW_BASE_FRACTION, PREVIEW_SCALE_SPAN,
    };

    // Tests the blend fractions keep bands inside one half of the tile
    // Verified by setting a fraction above 0.5
    #[test]
    fn test_band_fractions_fit_within_half_tile() {
        for fraction in [BLEND_BAND_FRACTION, OVERLAP_FRACTION, EDGE_ZONE_FRACTION] {
            assert!(fraction > 0.0 && fraction < 0.5, "fraction {fraction} out of range");
        }
        assert!(PATCH_FRACTION > OVERLAP_FRACTION);
    }

    // Tests opacities and strengths are valid weights
    // Verified by setting opacity above 1
    #[test]
    fn test_weights_are_normalized() {
        for weight in [BLEND_STRENGTH, OVERLAP_OPACITY, OVERLAY_PEAK_ALPHA] {
            assert!((0.0..=1.0).contains(&weight));
        }
    }

    // Tests preview defaults lie inside the accepted scale range
    // Verified by moving the default scale outside 1..=100
    #[test]
    fn test_preview_defaults() {
        assert!((MIN_PREVIEW_SCALE..=MAX_PREVIEW_SCALE).contains(&i64::from(DEFAULT_PREVIEW_SCALE)));
        assert_eq!(DEFAULT_PREVIEW_SIZE, 512);
        assert!((PREVIEW_BASE_FRACTION + PREVIEW_SCALE_SPAN) <= 1.0);
    }

    // Tests PNG is always an accepted input
    // Verified by removing png from the list
    #[test]
    fn test_png_is_accepted_input() {
        assert!(INPUT_EXTENSIONS.contains(&"png"));
    }
}
