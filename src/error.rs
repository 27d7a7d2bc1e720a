//! Configuration errors
//!
//! Runtime simulation never fails; only building a world from bad settings does.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading or validating settings, or constructing a world
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("world size must be at least 1x1 tiles, got {width}x{height}")]
    DegenerateWorld { width: usize, height: usize },

    #[error("world of {width}x{height} tiles exceeds the limit of {max} cells")]
    WorldTooLarge {
        width: usize,
        height: usize,
        max: usize,
    },

    #[error("{field} must be within [{min}, {max}], got {value}")]
    OutOfRange {
        field: &'static str,
        value: i64,
        min: i64,
        max: i64,
    },

    #[error("{field} must be positive, got {value}")]
    NonPositive { field: &'static str, value: f32 },

    #[error("{field} must be within [0, 1], got {value}")]
    OutOfUnitRange { field: &'static str, value: f32 },

    #[error("failed to read settings from {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse settings: {0}")]
    Parse(#[from] serde_json::Error),
}
