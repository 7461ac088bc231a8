//! Error types for the spell vision engine.
//!
//! The per-frame pipeline has no fatal outcomes of its own: "no blob",
//! "path too short", "not straight enough", and "still in cooldown" are all
//! ordinary values, never errors. The only failure categories that surface
//! here are malformed input at the frame boundary and invalid configuration.

use thiserror::Error;

/// Main error type for the library.
#[derive(Error, Debug)]
pub enum Error {
    /// A frame's declared dimensions do not match its pixel buffer.
    #[error(
        "frame geometry mismatch: declared {width}x{height} ({expected} pixels) but buffer holds {actual}"
    )]
    FrameGeometry {
        width: u32,
        height: u32,
        expected: usize,
        actual: usize,
    },

    /// A configuration value is outside its accepted range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Configuration file I/O failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration file could not be parsed.
    #[error("config parse error: {0}")]
    ConfigParse(#[from] serde_json::Error),
}

/// Convenience result type for the library.
pub type Result<T> = std::result::Result<T, Error>;
