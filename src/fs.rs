use std::borrow::Cow;
use std::io;
use std::path::{Path, PathBuf};

use crate::metadata::Metadata;
use crate::traits::FileSystem;

/// [`FileSystem`] backed by `std::fs`.
///
/// Paths are used as given, or joined onto a base directory when the
/// filesystem is created with [`OsFs::rooted`]. Symlinks are not followed.
#[derive(Debug, Clone, Default)]
pub struct OsFs {
    root: Option<PathBuf>,
}

impl OsFs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve relative paths against `root`, like a directory-scoped view.
    pub fn rooted(root: impl Into<PathBuf>) -> Self {
        Self {
            root: Some(root.into()),
        }
    }

    fn resolve<'a>(&self, path: &'a Path) -> Cow<'a, Path> {
        match &self.root {
            Some(root) => Cow::Owned(root.join(path)),
            None       => Cow::Borrowed(path),
        }
    }
}

impl FileSystem for OsFs {
    fn stat(&self, path: &Path) -> io::Result<Metadata> {
        let md = std::fs::symlink_metadata(self.resolve(path))?;
        Metadata::from_std(&md)
    }

    fn read_dir(&self, path: &Path) -> io::Result<Vec<PathBuf>> {
        std::fs::read_dir(self.resolve(path))?
            .map(|entry| entry.map(|e| PathBuf::from(e.file_name())))
            .collect()
    }
}
