use std::path::Path;
use std::time::SystemTime;

use super::stat;
use crate::error::FindError;
use crate::traits::{FileSystem, Matcher};

/// Matches entries by modification time.
///
/// `older` and `newer` bound an open window: a path matches when its mtime
/// is strictly after `older` and strictly before `newer`. Either side may be
/// left unset.
#[derive(Debug, Clone, Copy, Default)]
pub struct ChangeTimeMatcher {
    older: Option<SystemTime>,
    newer: Option<SystemTime>,
}

impl ChangeTimeMatcher {
    pub fn builder() -> ChangeTimeBuilder {
        ChangeTimeBuilder::default()
    }

    pub fn older(&self) -> Option<SystemTime> {
        self.older
    }

    pub fn newer(&self) -> Option<SystemTime> {
        self.newer
    }

    fn contains(&self, mtime: SystemTime) -> bool {
        self.older.map_or(true, |older| mtime > older)
            && self.newer.map_or(true, |newer| mtime < newer)
    }
}

impl Matcher for ChangeTimeMatcher {
    fn is_match(&self, fs: &dyn FileSystem, path: &Path) -> bool {
        if self.older.is_none() && self.newer.is_none() {
            return true;
        }
        match stat(fs, path) {
            Some(md) => self.contains(md.modified),
            None     => false,
        }
    }
}

/// Configures a [`ChangeTimeMatcher`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ChangeTimeBuilder {
    older: Option<SystemTime>,
    newer: Option<SystemTime>,
}

impl ChangeTimeBuilder {
    /// Only match entries modified after `cutoff`.
    pub fn older(mut self, cutoff: SystemTime) -> Self {
        self.older = Some(cutoff);
        self
    }

    /// Only match entries modified before `cutoff`.
    pub fn newer(mut self, cutoff: SystemTime) -> Self {
        self.newer = Some(cutoff);
        self
    }

    /// # Errors
    ///
    /// [`FindError::InvalidTimeWindow`] unless `older` strictly precedes
    /// `newer`.
    pub fn build(self) -> Result<ChangeTimeMatcher, FindError> {
        if let (Some(older), Some(newer)) = (self.older, self.newer) {
            if older >= newer {
                return Err(FindError::InvalidTimeWindow { older, newer });
            }
        }
        Ok(ChangeTimeMatcher {
            older: self.older,
            newer: self.newer,
        })
    }
}
