//! The concrete matchers.
//!
//! Every matcher here is independent and configured through its own
//! constructor or builder. Only [`ResultCap`] carries state between calls.

use std::borrow::Cow;
use std::path::Path;

use tracing::trace;

use crate::metadata::Metadata;
use crate::traits::{FileSystem, Matcher};

mod depth;
mod file_type;
mod filename;
mod hidden;
mod ignore_file;
mod limit;
mod size;
mod suffix;
mod time;

pub use depth::{DepthBuilder, DepthMatcher};
pub use file_type::{FileType, FileTypeMatcher};
pub use filename::{FilenameBuilder, FilenameMatcher, MatchMode};
pub use hidden::HiddenMatcher;
pub use ignore_file::{IgnoreFileBuilder, IgnoreFileMatcher};
pub use limit::ResultCap;
pub use size::{SizeBuilder, SizeMatcher};
pub use suffix::SuffixMatcher;
pub use time::{ChangeTimeBuilder, ChangeTimeMatcher};

pub(crate) use depth::normalize;

/// Matches every path.
#[derive(Debug, Clone, Copy, Default)]
pub struct NopMatcher;

impl Matcher for NopMatcher {
    fn is_match(&self, _fs: &dyn FileSystem, _path: &Path) -> bool {
        true
    }
}

/// Final path component, or the whole path when it has none (`/`, `..`).
pub(crate) fn base_name(path: &Path) -> Cow<'_, str> {
    match path.file_name() {
        Some(name) => name.to_string_lossy(),
        None       => path.to_string_lossy(),
    }
}

/// Stat `path`, turning a failure into `None`.
pub(crate) fn stat(fs: &dyn FileSystem, path: &Path) -> Option<Metadata> {
    match fs.stat(path) {
        Ok(md) => Some(md),
        Err(err) => {
            trace!(path = %path.display(), error = %err, "stat failed, not matching");
            None
        }
    }
}
