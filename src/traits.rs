use std::io;
use std::path::{Path, PathBuf};

use crate::metadata::Metadata;

/// Read-only access to the filesystem a traversal runs over.
///
/// Implement this to run matchers against anything that looks like a tree
/// of files: the OS filesystem ([`OsFs`](crate::OsFs)), an in-memory fake,
/// an archive. Matchers only ever call these two methods, and never more
/// than one stat plus one listing per path.
///
/// # Thread Safety
///
/// `Send + Sync` are required so a parallel walker can share one
/// filesystem between its workers.
///
/// # Example
///
/// ```rust
/// use std::io;
/// use std::path::{Path, PathBuf};
/// use finddd::{FileSystem, Metadata};
///
/// struct Unreadable;
///
/// impl FileSystem for Unreadable {
///     fn stat(&self, _path: &Path) -> io::Result<Metadata> {
///         Err(io::ErrorKind::PermissionDenied.into())
///     }
///     fn read_dir(&self, _path: &Path) -> io::Result<Vec<PathBuf>> {
///         Err(io::ErrorKind::PermissionDenied.into())
///     }
/// }
/// ```
pub trait FileSystem: Send + Sync {
    /// Metadata for `path`, without following a final symlink.
    fn stat(&self, path: &Path) -> io::Result<Metadata>;

    /// Names of the entries directly inside the directory at `path`.
    fn read_dir(&self, path: &Path) -> io::Result<Vec<PathBuf>>;
}

/// Decides whether a path belongs in the result set.
///
/// Implementations must not fail: if the metadata a matcher needs cannot be
/// read, the path does not match.
///
/// # Thread Safety
///
/// `Send + Sync` are required. Walkers call matchers concurrently from
/// several workers, so any internal state has to be synchronised (see
/// [`ResultCap`](crate::ResultCap)).
///
/// # Example
///
/// ```rust
/// use std::path::Path;
/// use finddd::{FileSystem, Matcher};
///
/// struct NotRust;
///
/// impl Matcher for NotRust {
///     fn is_match(&self, _fs: &dyn FileSystem, path: &Path) -> bool {
///         path.extension().map(|e| e != "rs").unwrap_or(true)
///     }
/// }
/// ```
pub trait Matcher: Send + Sync {
    /// Returns `true` if `path` should be included in results.
    fn is_match(&self, fs: &dyn FileSystem, path: &Path) -> bool;
}

impl<M: Matcher + ?Sized> Matcher for Box<M> {
    fn is_match(&self, fs: &dyn FileSystem, path: &Path) -> bool {
        (**self).is_match(fs, path)
    }
}
