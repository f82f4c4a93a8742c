#![allow(dead_code)]

use std::collections::BTreeMap;
use std::io;
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use finddd::{EntryKind, FileSystem, Metadata};

/// `UNIX_EPOCH + secs`.
pub fn at(secs: u64) -> SystemTime {
    UNIX_EPOCH + Duration::from_secs(secs)
}

/// In-memory filesystem for tests that need metadata real files can't
/// easily give (fixed mtimes, sockets, unreadable directories).
#[derive(Default)]
pub struct MemFs {
    entries:    BTreeMap<PathBuf, Metadata>,
    unlistable: Vec<PathBuf>,
}

impl MemFs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entry(mut self, path: &str, md: Metadata) -> Self {
        self.entries.insert(PathBuf::from(path), md);
        self
    }

    pub fn file(self, path: &str, len: u64) -> Self {
        self.entry(path, meta(EntryKind::File, len, at(1_000), 0o644))
    }

    pub fn file_at(self, path: &str, modified: SystemTime) -> Self {
        self.entry(path, meta(EntryKind::File, 1, modified, 0o644))
    }

    pub fn executable(self, path: &str) -> Self {
        self.entry(path, meta(EntryKind::File, 1, at(1_000), 0o755))
    }

    pub fn dir(self, path: &str) -> Self {
        self.entry(path, meta(EntryKind::Dir, 4096, at(1_000), 0o755))
    }

    pub fn special(self, path: &str, kind: EntryKind) -> Self {
        self.entry(path, meta(kind, 0, at(1_000), 0o644))
    }

    /// Directory that stats fine but fails to list.
    pub fn unlistable_dir(mut self, path: &str) -> Self {
        self.unlistable.push(PathBuf::from(path));
        self.dir(path)
    }
}

pub fn meta(kind: EntryKind, len: u64, modified: SystemTime, mode: u32) -> Metadata {
    Metadata {
        kind,
        len,
        modified,
        mode,
    }
}

impl FileSystem for MemFs {
    fn stat(&self, path: &Path) -> io::Result<Metadata> {
        self.entries
            .get(path)
            .cloned()
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, path.display().to_string()))
    }

    fn read_dir(&self, path: &Path) -> io::Result<Vec<PathBuf>> {
        if self.unlistable.iter().any(|p| p == path) {
            return Err(io::ErrorKind::PermissionDenied.into());
        }
        if !self.stat(path)?.is_dir() {
            return Err(io::Error::new(io::ErrorKind::Other, "not a directory"));
        }
        Ok(self
            .entries
            .keys()
            .filter(|p| p.parent() == Some(path))
            .filter_map(|p| p.file_name().map(PathBuf::from))
            .collect())
    }
}
