//! Image reference resolution, PNG encoding and pattern download

use crate::io::error::{LoadError, PatternError, Result};
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use image::{ImageFormat, RgbaImage};
use std::io::Cursor;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::debug;

const DATA_URI_PREFIX: &str = "data:";
const BASE64_MARKER: &str = ";base64";
const FILE_URI_PREFIX: &str = "file://";
const PNG_DATA_URI_HEADER: &str = "data:image/png;base64,";

/// A parsed reference to a source image
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageReference {
    /// Inline `data:` URI carrying the encoded image
    Embedded(String),
    /// Local file, with any `file://` prefix removed
    Path(PathBuf),
    /// `http://` or `https://` location
    Remote(String),
}

impl ImageReference {
    /// Classify a reference string
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::Empty`] if the reference is blank
    pub fn parse(reference: &str) -> std::result::Result<Self, LoadError> {
        let trimmed = reference.trim();
        if trimmed.is_empty() {
            return Err(LoadError::Empty);
        }

        if trimmed.starts_with(DATA_URI_PREFIX) {
            Ok(Self::Embedded(trimmed.to_string()))
        } else if let Some(path) = trimmed.strip_prefix(FILE_URI_PREFIX) {
            Ok(Self::Path(PathBuf::from(path)))
        } else if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
            Ok(Self::Remote(trimmed.to_string()))
        } else {
            Ok(Self::Path(PathBuf::from(trimmed)))
        }
    }

    /// Short label used in error messages and logs
    pub fn describe(&self) -> String {
        match self {
            Self::Embedded(uri) => uri
                .split_once(',')
                .map_or_else(|| uri.clone(), |(header, _)| header.to_string()),
            Self::Path(path) => path.display().to_string(),
            Self::Remote(url) => url.clone(),
        }
    }

    /// Read the encoded bytes behind the reference
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - A data URI is malformed or its base64 payload is invalid
    /// - A local file cannot be read
    /// - The reference is remote (no network access is performed)
    pub fn bytes(&self) -> std::result::Result<Vec<u8>, LoadError> {
        match self {
            Self::Embedded(uri) => decode_data_uri(uri),
            Self::Path(path) => std::fs::read(path).map_err(|source| LoadError::Io {
                path: path.clone(),
                source,
            }),
            Self::Remote(url) => Err(LoadError::Unreachable {
                reference: url.clone(),
                reason: "remote images must be fetched by the caller and passed as a data URI or path"
                    .to_string(),
            }),
        }
    }

    /// Decode the referenced image into an RGBA bitmap
    ///
    /// # Errors
    ///
    /// Returns an error if the bytes cannot be obtained or are not a decodable image
    pub fn decode(&self) -> std::result::Result<RgbaImage, LoadError> {
        let bytes = self.bytes()?;
        let image = image::load_from_memory(&bytes).map_err(|source| LoadError::Undecodable {
            reference: self.describe(),
            source,
        })?;
        let rgba = image.to_rgba8();
        debug!(
            source = %self.describe(),
            width = rgba.width(),
            height = rgba.height(),
            "decoded source image"
        );
        Ok(rgba)
    }
}

impl FromStr for ImageReference {
    type Err = LoadError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Anything that can produce a fresh decoded bitmap on demand
///
/// Each tiling run calls [`ImageSource::load`] on its own, so every algorithm
/// works on a private copy of the pixels
pub trait ImageSource: Sync {
    /// Produce a freshly decoded bitmap
    ///
    /// # Errors
    ///
    /// Returns an error if the source cannot be resolved or decoded
    fn load(&self) -> Result<RgbaImage>;
}

impl ImageSource for ImageReference {
    fn load(&self) -> Result<RgbaImage> {
        Ok(self.decode()?)
    }
}

impl ImageSource for str {
    fn load(&self) -> Result<RgbaImage> {
        ImageReference::parse(self)?.load()
    }
}

impl ImageSource for String {
    fn load(&self) -> Result<RgbaImage> {
        self.as_str().load()
    }
}

impl ImageSource for Path {
    fn load(&self) -> Result<RgbaImage> {
        ImageReference::Path(self.to_path_buf()).load()
    }
}

impl ImageSource for PathBuf {
    fn load(&self) -> Result<RgbaImage> {
        self.as_path().load()
    }
}

// Already-decoded pixels; every load hands out an independent copy
impl ImageSource for RgbaImage {
    fn load(&self) -> Result<RgbaImage> {
        Ok(self.clone())
    }
}

/// Decode the payload of a base64 `data:` URI
///
/// # Errors
///
/// Returns an error if the URI has no comma separator, is not base64-encoded,
/// or carries an invalid base64 payload
pub fn decode_data_uri(uri: &str) -> std::result::Result<Vec<u8>, LoadError> {
    let rest = uri
        .strip_prefix(DATA_URI_PREFIX)
        .ok_or_else(|| LoadError::MalformedDataUri {
            reason: "missing 'data:' prefix".to_string(),
        })?;
    let (header, payload) = rest
        .split_once(',')
        .ok_or_else(|| LoadError::MalformedDataUri {
            reason: "missing ',' between header and payload".to_string(),
        })?;
    if !header.ends_with(BASE64_MARKER) {
        return Err(LoadError::MalformedDataUri {
            reason: format!("unsupported encoding in header '{header}', expected base64"),
        });
    }

    Ok(STANDARD.decode(payload.trim())?)
}

/// Encode a bitmap as PNG bytes
///
/// # Errors
///
/// Returns an error if the PNG encoder fails
pub fn encode_png(image: &RgbaImage) -> Result<Vec<u8>> {
    let mut bytes = Vec::new();
    image
        .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .map_err(|source| PatternError::Encode { source })?;
    Ok(bytes)
}

/// Encode a bitmap as a `data:image/png;base64,...` URI
///
/// # Errors
///
/// Returns an error if the PNG encoder fails
pub fn encode_data_uri(image: &RgbaImage) -> Result<String> {
    let bytes = encode_png(image)?;
    Ok(format!("{PNG_DATA_URI_HEADER}{}", STANDARD.encode(bytes)))
}

/// Write an encoded pattern to disk under the given filename
///
/// The payload bytes are written verbatim, without re-encoding.
///
/// # Errors
///
/// Returns an error if:
/// - The pattern reference is empty or not a valid data URI
/// - The parent directory cannot be created
/// - The file cannot be written
pub fn download_pattern<P: AsRef<Path>>(pattern: &str, path: P) -> Result<PathBuf> {
    let path = path.as_ref();
    let bytes = match ImageReference::parse(pattern)? {
        ImageReference::Embedded(uri) => decode_data_uri(&uri)?,
        other => {
            return Err(LoadError::MalformedDataUri {
                reason: format!("expected an encoded pattern, got '{}'", other.describe()),
            }
            .into());
        }
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| PatternError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    std::fs::write(path, &bytes).map_err(|e| PatternError::FileSystem {
        path: path.to_path_buf(),
        operation: "write pattern",
        source: e,
    })?;

    debug!(path = %path.display(), bytes = bytes.len(), "pattern written");
    Ok(path.to_path_buf())
}
