//! Repeating-grid preview of a finished pattern tile

use crate::io::configuration::{DEFAULT_PREVIEW_SIZE, PREVIEW_BASE_FRACTION, PREVIEW_SCALE_SPAN};
use crate::io::error::Result;
use crate::io::image::{ImageSource, encode_data_uri};
use image::RgbaImage;
use image::imageops::{FilterType, crop_imm, overlay, resize};
use tracing::debug;

/// Grid geometry for a preview canvas
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PreviewLayout {
    /// Edge length of the output canvas in pixels
    pub output_size: u32,
    /// Edge length of one drawn tile, possibly fractional
    pub tile_edge: f64,
    /// Tiles drawn per row
    pub columns: u32,
    /// Rows of tiles drawn
    pub rows: u32,
}

impl PreviewLayout {
    /// Compute the layout for a scale, nominally in `1..=100`
    ///
    /// The scale is not clamped. Scales that give a non-positive tile edge
    /// produce a layout with no draws.
    pub fn new(output_size: u32, scale: i32) -> Self {
        let size = f64::from(output_size);
        let tile_edge = (f64::from(scale) / 100.0 * size)
            .mul_add(PREVIEW_SCALE_SPAN, size * PREVIEW_BASE_FRACTION);

        // Never more draws per row than canvas pixels
        let count = if tile_edge.is_finite() && tile_edge > 0.0 {
            (size / tile_edge).ceil().min(size) as u32
        } else {
            0
        };

        Self {
            output_size,
            tile_edge,
            columns: count,
            rows: count,
        }
    }

    /// Total number of tile draws
    pub const fn draw_count(&self) -> u32 {
        self.columns.saturating_mul(self.rows)
    }

    /// Top-left canvas positions of every draw, row-major
    pub fn positions(&self) -> impl Iterator<Item = (i64, i64)> + '_ {
        (0..self.rows).flat_map(move |row| {
            (0..self.columns).map(move |col| (self.offset(col), self.offset(row)))
        })
    }

    fn offset(&self, index: u32) -> i64 {
        (f64::from(index) * self.tile_edge).floor() as i64
    }
}

/// Draw `tile` repeatedly across a transparent square canvas
///
/// Each tile is drawn `ceil(tile_edge)` pixels wide so neighbours overlap by at most
/// one pixel instead of leaving gaps. Tiles in the last row and column may extend
/// past the canvas and are clipped.
pub fn tile_preview(tile: &RgbaImage, scale: i32, output_size: u32) -> RgbaImage {
    let layout = PreviewLayout::new(output_size, scale);
    let mut canvas = RgbaImage::new(output_size, output_size);

    if layout.draw_count() == 0 || tile.width() == 0 || tile.height() == 0 {
        return canvas;
    }

    let scaled = scaled_tile(tile, layout.tile_edge, output_size);
    for (x, y) in layout.positions() {
        overlay(&mut canvas, &scaled, x, y);
    }

    debug!(
        output_size,
        scale,
        tile_edge = layout.tile_edge,
        draws = layout.draw_count(),
        "preview rendered"
    );
    canvas
}

/// Resize `tile` to its drawn size, never larger than the canvas
///
/// A tile wider than the canvas is only visible through its top-left corner, so
/// that corner is cut from the source and resized to the canvas size instead.
pub fn scaled_tile(tile: &RgbaImage, tile_edge: f64, output_size: u32) -> RgbaImage {
    let edge = tile_edge.ceil().max(1.0);
    let canvas = f64::from(output_size);
    if edge <= canvas {
        return resize(tile, edge as u32, edge as u32, FilterType::Triangle);
    }

    let visible = canvas / edge;
    let width = (f64::from(tile.width()) * visible).ceil().max(1.0) as u32;
    let height = (f64::from(tile.height()) * visible).ceil().max(1.0) as u32;
    let corner = crop_imm(tile, 0, 0, width, height).to_image();
    resize(&corner, output_size, output_size, FilterType::Triangle)
}

/// Render a preview for an encoded pattern and return it as a PNG data URI
///
/// `output_size` defaults to [`DEFAULT_PREVIEW_SIZE`].
///
/// # Errors
///
/// Returns an error if the pattern cannot be decoded or the preview cannot be encoded
pub fn render_preview<S: ImageSource + ?Sized>(
    pattern: &S,
    scale: i32,
    output_size: Option<u32>,
) -> Result<String> {
    let tile = pattern.load()?;
    let canvas = tile_preview(&tile, scale, output_size.unwrap_or(DEFAULT_PREVIEW_SIZE));
    encode_data_uri(&canvas)
}
