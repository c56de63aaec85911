//! Tests for image reference parsing, decoding, encoding and pattern download

#[cfg(test)]
mod tests {
    use base64::Engine;
    use base64::engine::general_purpose::STANDARD;
    use image::{Rgba, RgbaImage};
    use seamtile::io::image::{
        ImageReference, ImageSource, decode_data_uri, download_pattern, encode_data_uri,
        encode_png,
    };
    use seamtile::{LoadError, PatternError};
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn checker(size: u32) -> RgbaImage {
        RgbaImage::from_fn(size, size, |x, y| {
            if (x + y) % 2 == 0 {
                Rgba([255, 0, 0, 255])
            } else {
                Rgba([0, 0, 255, 128])
            }
        })
    }

    // Tests reference strings are classified by scheme
    // Verified by treating file:// references as plain paths
    #[test]
    fn test_reference_classification() {
        assert!(matches!(
            ImageReference::parse("data:image/png;base64,AAAA"),
            Ok(ImageReference::Embedded(_))
        ));
        assert_eq!(
            ImageReference::parse("file:///tmp/a.png").ok(),
            Some(ImageReference::Path(PathBuf::from("/tmp/a.png")))
        );
        assert!(matches!(
            ImageReference::parse("https://example.com/a.png"),
            Ok(ImageReference::Remote(_))
        ));
        assert_eq!(
            "images/a.png".parse::<ImageReference>().ok(),
            Some(ImageReference::Path(PathBuf::from("images/a.png")))
        );
        assert!(matches!(ImageReference::parse("   "), Err(LoadError::Empty)));
    }

    // Tests data URI labels hide the payload
    // Verified by returning the full URI from describe
    #[test]
    fn test_describe_embedded_shows_header_only() {
        let reference = ImageReference::Embedded("data:image/png;base64,AAAA".to_string());
        assert_eq!(reference.describe(), "data:image/png;base64");
    }

    // Tests encoded tiles decode back to identical pixels
    // Verified by encoding as JPEG (lossy) instead of PNG
    #[test]
    fn test_encoded_data_uri_decodes_to_same_pixels() {
        let original = checker(6);
        let uri = encode_data_uri(&original).expect("encoding should succeed");

        assert!(uri.starts_with("data:image/png;base64,"));
        let decoded = uri.load().expect("decoding should succeed");
        assert_eq!(decoded, original);
    }

    // Tests malformed data URIs are rejected before decoding
    // Verified by accepting URIs without a comma
    #[test]
    fn test_malformed_data_uri() {
        assert!(matches!(
            decode_data_uri("data:image/png;base64"),
            Err(LoadError::MalformedDataUri { .. })
        ));
        assert!(matches!(
            decode_data_uri("data:text/plain,hello"),
            Err(LoadError::MalformedDataUri { .. })
        ));
        assert!(matches!(
            decode_data_uri("data:image/png;base64,@@@"),
            Err(LoadError::Base64 { .. })
        ));
    }

    // Tests remote references fail without network access
    // Verified by returning empty bytes for remote references
    #[test]
    fn test_remote_reference_is_unreachable() {
        let result = "https://example.com/texture.png".load();
        assert!(matches!(
            result,
            Err(PatternError::Load(LoadError::Unreachable { .. }))
        ));
    }

    // Tests missing files and undecodable bytes produce distinct load errors
    // Verified by mapping decode failures to Io errors
    #[test]
    fn test_missing_and_undecodable_sources() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("missing.png");
        assert!(matches!(
            missing.load(),
            Err(PatternError::Load(LoadError::Io { .. }))
        ));

        let garbage = temp_dir.path().join("garbage.png");
        fs::write(&garbage, b"definitely not an image").unwrap();
        assert!(matches!(
            garbage.load(),
            Err(PatternError::Load(LoadError::Undecodable { .. }))
        ));
    }

    // Tests files on disk load through path references
    // Verified by ignoring the file:// prefix stripping
    #[test]
    fn test_load_from_file_uri() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("tile.png");
        checker(4).save(&path).unwrap();

        let reference = format!("file://{}", path.display());
        let loaded = reference.load().expect("file should load");
        assert_eq!(loaded.dimensions(), (4, 4));
    }

    // Tests in-memory sources hand out independent copies
    // Verified by sharing one buffer between loads
    #[test]
    fn test_in_memory_source_copies() {
        let source = checker(3);
        let mut first = source.load().unwrap();
        first.put_pixel(0, 0, Rgba([1, 2, 3, 4]));

        let second = source.load().unwrap();
        assert_eq!(second.get_pixel(0, 0), &Rgba([255, 0, 0, 255]));
    }

    // Tests downloads write the encoded payload verbatim, creating directories
    // Verified by re-encoding the image before writing
    #[test]
    fn test_download_writes_payload_bytes() {
        let temp_dir = TempDir::new().unwrap();
        let png = encode_png(&checker(5)).unwrap();
        let uri = format!("data:image/png;base64,{}", STANDARD.encode(&png));
        let target = temp_dir.path().join("nested/dir/pattern.png");

        let written = download_pattern(&uri, &target).expect("download should succeed");

        assert_eq!(written, target);
        assert_eq!(fs::read(&target).unwrap(), png);
    }

    // Tests placeholder and non-embedded references cannot be downloaded
    // Verified by copying path references instead of rejecting them
    #[test]
    fn test_download_rejects_non_embedded() {
        let temp_dir = TempDir::new().unwrap();
        let target = temp_dir.path().join("out.png");

        assert!(matches!(
            download_pattern("", &target),
            Err(PatternError::Load(LoadError::Empty))
        ));
        assert!(download_pattern("some/file.png", &target).is_err());
        assert!(!target.exists());
    }
}
