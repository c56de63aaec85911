//! Algorithm constants and runtime configuration defaults

// Offset & blend
/// Half-width of the blend band around each seam, as a fraction of tile size
pub const BLEND_BAND_FRACTION: f64 = 0.15;
/// Maximum share of the mirrored sample mixed in at the exact seam
pub const BLEND_STRENGTH: f64 = 0.5;

// Soft overlap
/// Nominal patch width as a fraction of tile size
///
/// Only records the advertised 30% patch width of the soft overlap method; no pixel
/// depends on it. The strips actually composited are [`OVERLAP_FRACTION`] wide.
pub const PATCH_FRACTION: f64 = 0.30;
/// Width of the overlapped edge strips as a fraction of tile size
pub const OVERLAP_FRACTION: f64 = 0.15;
/// Opacity used when compositing an edge strip onto its opposite edge
pub const OVERLAP_OPACITY: f64 = 0.5;
/// Alpha of the black overlay gradient at its centre stop
pub const OVERLAY_PEAK_ALPHA: f64 = 0.3;

// Edge average
/// Width of the averaging zone at each edge as a fraction of tile size
pub const EDGE_ZONE_FRACTION: f64 = 0.15;

// Preview tiling: edge = scale/100 * size * SPAN + size * BASE
/// Share of the output size added across the full scale range
pub const PREVIEW_SCALE_SPAN: f64 = 0.5;
/// Share of the output size used as the minimum tile edge
pub const PREVIEW_BASE_FRACTION: f64 = 0.1;
/// Default preview canvas edge in pixels
pub const DEFAULT_PREVIEW_SIZE: u32 = 512;
/// Default preview scale used by the CLI
pub const DEFAULT_PREVIEW_SCALE: i32 = 50;
/// Smallest scale accepted on the command line
pub const MIN_PREVIEW_SCALE: i64 = 1;
/// Largest scale accepted on the command line
pub const MAX_PREVIEW_SCALE: i64 = 100;

// Progress bar display settings
/// Threshold for switching to batch progress mode
pub const MAX_INDIVIDUAL_PROGRESS_BARS: usize = 5;

// Output settings
/// Separator placed between the input stem and the variation id
pub const OUTPUT_SEPARATOR: &str = "_";
/// Suffix added to preview filenames
pub const PREVIEW_SUFFIX: &str = "_preview";
/// File extensions accepted as batch inputs
pub const INPUT_EXTENSIONS: [&str; 6] = ["png", "jpg", "jpeg", "webp", "gif", "bmp"];
