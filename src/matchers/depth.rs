use std::path::{Component, Path, PathBuf};

use crate::error::FindError;
use crate::traits::{FileSystem, Matcher};

/// Lexically normalise a path: drop `.` components and resolve `..`
/// against the preceding component where there is one.
///
/// Never touches the filesystem, so symlinked directories are not
/// resolved.
pub(crate) fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for comp in path.components() {
        match comp {
            Component::CurDir => {}
            Component::ParentDir => match out.components().next_back() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                // `/..` is `/`
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => out.push(".."),
            },
            other => out.push(other.as_os_str()),
        }
    }
    out
}

/// Matches paths by how far below a root they sit.
///
/// The root itself is depth 0, its children depth 1 and so on. Depth is
/// worked out from the path text alone, so this matcher never stats.
/// Paths outside the root do not match once any bound is set.
#[derive(Debug, Clone)]
pub struct DepthMatcher {
    root: PathBuf,
    min:  Option<usize>,
    max:  Option<usize>,
}

impl DepthMatcher {
    pub fn builder(root: impl AsRef<Path>) -> DepthBuilder {
        DepthBuilder {
            root: normalize(root.as_ref()),
            min:  None,
            max:  None,
        }
    }

    /// The normalised root depths are measured from.
    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn min(&self) -> Option<usize> {
        self.min
    }

    pub fn max(&self) -> Option<usize> {
        self.max
    }

    /// Depth of `path` below the root, or `None` if it is not under it.
    pub fn depth(&self, path: &Path) -> Option<usize> {
        let path = normalize(path);
        let rel = path.strip_prefix(&self.root).ok()?;
        if rel.has_root() {
            return None;
        }
        Some(rel.components().count())
    }
}

impl Matcher for DepthMatcher {
    fn is_match(&self, _fs: &dyn FileSystem, path: &Path) -> bool {
        if self.min.is_none() && self.max.is_none() {
            return true;
        }
        let Some(depth) = self.depth(path) else {
            return false;
        };
        self.min.map_or(true, |min| depth >= min) && self.max.map_or(true, |max| depth <= max)
    }
}

/// Configures a [`DepthMatcher`].
#[derive(Debug, Clone)]
pub struct DepthBuilder {
    root: PathBuf,
    min:  Option<usize>,
    max:  Option<usize>,
}

impl DepthBuilder {
    pub fn min(mut self, depth: usize) -> Self {
        self.min = Some(depth);
        self
    }

    pub fn max(mut self, depth: usize) -> Self {
        self.max = Some(depth);
        self
    }

    /// Match exactly `depth`: sets both bounds.
    pub fn exact(mut self, depth: usize) -> Self {
        self.min = Some(depth);
        self.max = Some(depth);
        self
    }

    /// # Errors
    ///
    /// [`FindError::InvalidDepthBounds`] if `min` exceeds `max`.
    pub fn build(self) -> Result<DepthMatcher, FindError> {
        if let (Some(min), Some(max)) = (self.min, self.max) {
            if min > max {
                return Err(FindError::InvalidDepthBounds { min, max });
            }
        }
        Ok(DepthMatcher {
            root: self.root,
            min:  self.min,
            max:  self.max,
        })
    }
}
