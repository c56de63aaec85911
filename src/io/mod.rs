//! Input/output operations, configuration and error handling

/// Command-line interface and batch file processing
pub mod cli;
/// Algorithm constants and defaults
pub mod configuration;
/// Error types
pub mod error;
/// Image loading, encoding and download
pub mod image;
/// Logging subscriber setup
pub mod logging;
/// Terminal progress display
pub mod progress;
