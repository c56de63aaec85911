//! Structured logging setup for the command-line tool

use tracing_subscriber::EnvFilter;

/// Map a `-v` count to a default filter directive
pub const fn verbosity_directive(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    }
}

/// Build the filter from `RUST_LOG`, falling back to the verbosity level
pub fn env_filter(verbose: u8) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(verbosity_directive(verbose)))
}

/// Install a stderr subscriber for the process
///
/// Returns `false` if a global subscriber was already set, which is harmless
/// when the library is driven from tests
pub fn init_logging(verbose: u8) -> bool {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(verbose))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .is_ok()
}
