use std::path::PathBuf;
use std::time::SystemTime;
use thiserror::Error;

/// Errors raised while configuring matchers.
///
/// Evaluating a matcher never fails: a path whose metadata cannot be read
/// simply does not match. Everything here is a configuration problem and
/// surfaces before a traversal starts.
#[derive(Error, Debug)]
pub enum FindError {
    // Bounds
    #[error("invalid size bounds: min {min} exceeds max {max}")]
    InvalidSizeBounds { min: u64, max: u64 },

    #[error("invalid depth bounds: min {min} exceeds max {max}")]
    InvalidDepthBounds { min: usize, max: usize },

    #[error("invalid time window: older cutoff must precede newer cutoff")]
    InvalidTimeWindow { older: SystemTime, newer: SystemTime },

    // Patterns
    #[error("invalid pattern `{pattern}`")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("unknown file type `{0}`")]
    UnknownFileType(char),

    #[error("file type tag must be a single character, got `{0}`")]
    InvalidFileTypeTag(String),

    // Ignore rules
    #[error("ignore file error")]
    IgnoreFile {
        path: Option<PathBuf>,
        #[source]
        source: ignore::Error,
    },
}

impl FindError {
    /// The path this error refers to, if any.
    pub fn path(&self) -> Option<&PathBuf> {
        match self {
            Self::IgnoreFile { path, .. } => path.as_ref(),
            _ => None,
        }
    }

    /// Whether the error comes from an out-of-order bound pair.
    pub fn is_bounds_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidSizeBounds { .. }
                | Self::InvalidDepthBounds { .. }
                | Self::InvalidTimeWindow { .. }
        )
    }
}
