//! Per-channel blending arithmetic shared by the tiling algorithms
//!
//! All channel math happens in `f64` on the 0-255 scale and is rounded back to
//! `u8` with saturation, matching clamped 8-bit canvas storage

/// Weight for a pixel `distance` away from a seam inside a band of `band` pixels
///
/// Returns 1 at the seam and falls linearly to 0 at the band edge. Distances at or
/// beyond the band (and empty bands) yield 0.
pub fn seam_factor(distance: f64, band: f64) -> f64 {
    if band <= 0.0 {
        return 0.0;
    }
    (1.0 - distance / band).clamp(0.0, 1.0)
}

/// Linear interpolation between two channel values, `t = 0` keeps `from`
pub fn lerp(from: f64, to: f64, t: f64) -> f64 {
    (to - from).mul_add(t, from)
}

/// Round a channel value into the `u8` range
pub fn to_channel(value: f64) -> u8 {
    value.round().clamp(0.0, 255.0) as u8
}

/// Mix `sample` into `original` with the given weight, channel by channel
///
/// Only RGB are touched; the alpha of `original` is returned as-is.
pub fn mix_rgb(original: [u8; 4], sample: [u8; 4], weight: f64) -> [u8; 4] {
    let mut out = original;
    for ((dst, &a), &b) in out.iter_mut().zip(&original).zip(&sample).take(3) {
        *dst = to_channel(lerp(f64::from(a), f64::from(b), weight));
    }
    out
}

/// Source-over compositing of `source` at `opacity` onto an opaque or translucent backdrop
pub fn source_over(backdrop: [u8; 4], source: [u8; 4], opacity: f64) -> [u8; 4] {
    let alpha_s = f64::from(source[3]) / 255.0 * opacity;
    let alpha_b = f64::from(backdrop[3]) / 255.0;
    let alpha_out = alpha_b.mul_add(1.0 - alpha_s, alpha_s);
    if alpha_out <= 0.0 {
        return [0, 0, 0, 0];
    }

    let mut out = [0u8; 4];
    for ((dst, &b), &s) in out.iter_mut().zip(&backdrop).zip(&source).take(3) {
        let premultiplied =
            (f64::from(b) * alpha_b).mul_add(1.0 - alpha_s, f64::from(s) * alpha_s);
        *dst = to_channel(premultiplied / alpha_out);
    }
    out[3] = to_channel(alpha_out * 255.0);
    out
}

/// Overlay blend of a single normalized channel, branching on the backdrop
pub fn overlay_channel(source: f64, backdrop: f64) -> f64 {
    if backdrop <= 0.5 {
        2.0 * source * backdrop
    } else {
        1.0 - 2.0 * (1.0 - source) * (1.0 - backdrop)
    }
}

/// Composite an RGB colour with `alpha` onto `backdrop` using overlay blending
///
/// The blended colour replaces the backdrop in proportion to `alpha`; backdrop
/// alpha is kept.
pub fn overlay(backdrop: [u8; 4], rgb: [u8; 3], alpha: f64) -> [u8; 4] {
    if alpha <= 0.0 {
        return backdrop;
    }

    let mut out = backdrop;
    for ((dst, &b), &s) in out.iter_mut().zip(&backdrop).zip(&rgb) {
        let b_norm = f64::from(b) / 255.0;
        let blended = overlay_channel(f64::from(s) / 255.0, b_norm);
        *dst = to_channel(lerp(b_norm, blended, alpha) * 255.0);
    }
    out
}
