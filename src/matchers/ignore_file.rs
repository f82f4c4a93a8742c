use std::path::{Path, PathBuf};

use ignore::gitignore::{Gitignore, GitignoreBuilder};
use ignore::Match;

use super::{normalize, stat};
use crate::error::FindError;
use crate::traits::{FileSystem, Matcher};

/// Ignore files picked up by [`IgnoreFileBuilder::standard_files`].
const STANDARD_IGNORE_FILES: &[&str] = &[".gitignore", ".ignore"];

/// Excludes paths covered by gitignore-style rules.
///
/// Rules come from ignore files or individual glob lines and are interpreted
/// relative to a root. A path matches when neither it nor any of its parents
/// below the root is ignored. Paths outside the root always match.
#[derive(Debug, Clone)]
pub struct IgnoreFileMatcher {
    root:      PathBuf,
    gitignore: Gitignore,
}

impl IgnoreFileMatcher {
    pub fn builder(root: impl AsRef<Path>) -> IgnoreFileBuilder {
        let root = root.as_ref();
        IgnoreFileBuilder {
            root:    root.to_path_buf(),
            builder: GitignoreBuilder::new(root),
            error:   None,
        }
    }

    /// Number of rules loaded.
    pub fn num_rules(&self) -> u64 {
        self.gitignore.num_ignores() + self.gitignore.num_whitelists()
    }

    fn is_ignored(&self, rel: &Path, is_dir: bool) -> bool {
        let mut current = Some(rel);
        let mut dir = is_dir;
        while let Some(p) = current {
            if p.as_os_str().is_empty() {
                break;
            }
            match self.gitignore.matched(p, dir) {
                Match::Ignore(_)    => return true,
                Match::Whitelist(_) => return false,
                Match::None         => {}
            }
            current = p.parent();
            dir = true;
        }
        false
    }
}

impl Matcher for IgnoreFileMatcher {
    fn is_match(&self, fs: &dyn FileSystem, path: &Path) -> bool {
        if self.gitignore.is_empty() {
            return true;
        }
        let normalized = normalize(path);
        let rel = match normalized.strip_prefix(&self.root) {
            Ok(rel) if !rel.has_root() => rel,
            _ => return true,
        };
        let is_dir = stat(fs, path).map_or(false, |md| md.is_dir());
        !self.is_ignored(rel, is_dir)
    }
}

/// Configures an [`IgnoreFileMatcher`].
///
/// Errors from adding files or lines are held until [`build`](Self::build)
/// so the setters chain.
pub struct IgnoreFileBuilder {
    root:    PathBuf,
    builder: GitignoreBuilder,
    error:   Option<FindError>,
}

impl IgnoreFileBuilder {
    /// Load rules from an ignore file on disk.
    pub fn add_file(mut self, path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        if self.error.is_none() {
            if let Some(source) = self.builder.add(path) {
                self.error = Some(FindError::IgnoreFile {
                    path: Some(path.to_path_buf()),
                    source,
                });
            }
        }
        self
    }

    /// Load `.gitignore` and `.ignore` from the root, where present.
    pub fn standard_files(mut self) -> Self {
        for name in STANDARD_IGNORE_FILES {
            let path = self.root.join(name);
            if path.is_file() {
                self = self.add_file(path);
            }
        }
        self
    }

    /// Add a single rule in gitignore syntax.
    pub fn add_line(mut self, line: &str) -> Self {
        if self.error.is_none() {
            if let Err(source) = self.builder.add_line(None, line) {
                self.error = Some(FindError::IgnoreFile { path: None, source });
            }
        }
        self
    }

    /// # Errors
    ///
    /// [`FindError::IgnoreFile`] if an ignore file could not be read or a
    /// rule does not parse.
    pub fn build(self) -> Result<IgnoreFileMatcher, FindError> {
        if let Some(err) = self.error {
            return Err(err);
        }
        let gitignore = self
            .builder
            .build()
            .map_err(|source| FindError::IgnoreFile { path: None, source })?;
        Ok(IgnoreFileMatcher {
            root: normalize(&self.root),
            gitignore,
        })
    }
}
