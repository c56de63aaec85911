//! Concurrent generation of every pattern variation from one source

use crate::io::error::Result;
use crate::io::image::{ImageSource, encode_data_uri};
use crate::tiling::TilingMethod;
use rayon::prelude::*;
use std::time::Instant;
use tracing::{debug, info};

/// Identifier of the server-side placeholder entry
pub const AI_ENHANCED_ID: &str = "ai-enhanced";

/// Immutable description of one generated pattern
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternVariation {
    id: String,
    name: String,
    description: String,
    image: String,
    recommended: bool,
}

impl PatternVariation {
    /// Create a descriptor
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        image: impl Into<String>,
        recommended: bool,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            image: image.into(),
            recommended,
        }
    }

    /// Descriptor for a locally computed method with its encoded tile
    pub fn for_method(method: TilingMethod, image: String) -> Self {
        Self::new(
            method.id(),
            method.display_name(),
            method.description(),
            image,
            method.recommended(),
        )
    }

    /// Placeholder for the AI-enhanced variant, filled in by a separate service
    pub fn ai_enhanced_placeholder() -> Self {
        Self::new(
            AI_ENHANCED_ID,
            "AI Enhanced",
            "Seamless texture synthesized by a server-side model",
            String::new(),
            false,
        )
    }

    /// Stable identifier
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Display name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// One-line description
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Encoded image as a data URI, empty for the placeholder
    pub fn image(&self) -> &str {
        &self.image
    }

    /// Whether this variant is suggested by default
    pub const fn recommended(&self) -> bool {
        self.recommended
    }

    /// True when no image has been produced for this entry
    pub fn is_placeholder(&self) -> bool {
        self.image.is_empty()
    }
}

/// Load a fresh copy of the source, run one method and encode the result
///
/// # Errors
///
/// Returns an error if loading, tiling or encoding fails
pub fn generate_variation<S: ImageSource + ?Sized>(
    source: &S,
    method: TilingMethod,
) -> Result<PatternVariation> {
    let started = Instant::now();
    let bitmap = source.load()?;
    let tile = method.apply(&bitmap)?;
    let encoded = encode_data_uri(&tile)?;
    debug!(
        method = method.id(),
        size = tile.width(),
        elapsed_ms = started.elapsed().as_millis(),
        "variation generated"
    );
    Ok(PatternVariation::for_method(method, encoded))
}

/// Run the given methods concurrently, failing as a whole if any one fails
///
/// Results keep the order of `methods`.
///
/// # Errors
///
/// Returns the first error produced by any method; no partial list is returned
pub fn generate_variations<S: ImageSource + ?Sized>(
    source: &S,
    methods: &[TilingMethod],
) -> Result<Vec<PatternVariation>> {
    methods
        .par_iter()
        .map(|&method| generate_variation(source, method))
        .collect()
}

/// Generate all four local variations plus the AI placeholder
///
/// # Errors
///
/// Returns an error if any of the four algorithms fails
pub fn generate_all_variations<S: ImageSource + ?Sized>(
    source: &S,
) -> Result<Vec<PatternVariation>> {
    let started = Instant::now();
    info!(methods = TilingMethod::ALL.len(), "generating pattern variations");

    let mut variations = generate_variations(source, &TilingMethod::ALL)?;
    variations.push(PatternVariation::ai_enhanced_placeholder());

    info!(
        count = variations.len(),
        elapsed_ms = started.elapsed().as_millis(),
        "pattern variations ready"
    );
    Ok(variations)
}
