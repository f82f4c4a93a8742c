use std::path::Path;

use super::stat;
use crate::error::FindError;
use crate::traits::{FileSystem, Matcher};

/// Matches entries whose size lies in `[min, max]` bytes.
///
/// Both bounds are inclusive and optional. With neither set the matcher
/// matches everything without touching the filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct SizeMatcher {
    min: Option<u64>,
    max: Option<u64>,
}

impl SizeMatcher {
    pub fn builder() -> SizeBuilder {
        SizeBuilder::default()
    }

    pub fn min(&self) -> Option<u64> {
        self.min
    }

    pub fn max(&self) -> Option<u64> {
        self.max
    }

    fn contains(&self, size: u64) -> bool {
        self.min.map_or(true, |min| size >= min) && self.max.map_or(true, |max| size <= max)
    }
}

impl Matcher for SizeMatcher {
    fn is_match(&self, fs: &dyn FileSystem, path: &Path) -> bool {
        if self.min.is_none() && self.max.is_none() {
            return true;
        }
        match stat(fs, path) {
            Some(md) => self.contains(md.len),
            None     => false,
        }
    }
}

/// Configures a [`SizeMatcher`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SizeBuilder {
    min: Option<u64>,
    max: Option<u64>,
}

impl SizeBuilder {
    /// Smallest accepted size in bytes (inclusive).
    pub fn min(mut self, bytes: u64) -> Self {
        self.min = Some(bytes);
        self
    }

    /// Largest accepted size in bytes (inclusive).
    pub fn max(mut self, bytes: u64) -> Self {
        self.max = Some(bytes);
        self
    }

    /// # Errors
    ///
    /// [`FindError::InvalidSizeBounds`] if `min` exceeds `max`.
    pub fn build(self) -> Result<SizeMatcher, FindError> {
        if let (Some(min), Some(max)) = (self.min, self.max) {
            if min > max {
                return Err(FindError::InvalidSizeBounds { min, max });
            }
        }
        Ok(SizeMatcher {
            min: self.min,
            max: self.max,
        })
    }
}
