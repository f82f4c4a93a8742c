use std::path::PathBuf;
use std::time::SystemTime;

use tracing::debug;

use crate::composite::CompositeMatcher;
use crate::error::FindError;
use crate::matchers::{
    ChangeTimeMatcher, DepthMatcher, FileType, FileTypeMatcher, FilenameMatcher, HiddenMatcher,
    IgnoreFileMatcher, MatchMode, ResultCap, SizeMatcher, SuffixMatcher,
};

// ---------------------------------------------------------------------------
// MatcherBuilder
// ---------------------------------------------------------------------------

/// Builds the [`CompositeMatcher`] for one traversal from parsed options.
///
/// Created via [`finddd::matchers()`](crate::matchers). Each setter maps to
/// one option of a find-like tool; [`build()`](MatcherBuilder::build)
/// validates them and composes only the matchers that were configured.
///
/// # Example
///
/// ```rust
/// use finddd::FileType;
///
/// let matcher = finddd::matchers("/r")
///     .suffixes([".go"])
///     .file_types([FileType::File])
///     .max_depth(3)
///     .max_results(10)
///     .build()
///     .unwrap();
///
/// assert_eq!(matcher.len(), 5);
/// ```
#[derive(Debug, Clone)]
pub struct MatcherBuilder {
    root:           PathBuf,
    suffixes:       Vec<String>,
    file_types:     Vec<FileType>,
    older:          Option<SystemTime>,
    newer:          Option<SystemTime>,
    min_size:       Option<u64>,
    max_size:       Option<u64>,
    include_hidden: bool,
    min_depth:      Option<usize>,
    max_depth:      Option<usize>,
    max_results:    Option<usize>,
    name:           Option<(String, MatchMode)>,
    ignore_case:    bool,
    ignore_files:   bool,
    ignore_rules:   Vec<String>,
}

impl MatcherBuilder {
    pub(crate) fn new(root: PathBuf) -> Self {
        Self {
            root,
            suffixes:       Vec::new(),
            file_types:     Vec::new(),
            older:          None,
            newer:          None,
            min_size:       None,
            max_size:       None,
            include_hidden: false,
            min_depth:      None,
            max_depth:      None,
            max_results:    None,
            name:           None,
            ignore_case:    false,
            ignore_files:   false,
            ignore_rules:   Vec::new(),
        }
    }

    // ── Name ──────────────────────────────────────────────────────────────

    /// Only match base names ending in one of `suffixes` (case-insensitive).
    pub fn suffixes<I, S>(mut self, suffixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.suffixes = suffixes.into_iter().map(Into::into).collect();
        self
    }

    /// Only match base names against `pattern`, interpreted per `mode`.
    pub fn name(mut self, pattern: impl Into<String>, mode: MatchMode) -> Self {
        self.name = Some((pattern.into(), mode));
        self
    }

    /// Case-insensitive name pattern. Suffixes always ignore case.
    pub fn ignore_case(mut self, yes: bool) -> Self {
        self.ignore_case = yes;
        self
    }

    /// Include entries whose name starts with `.`. Excluded by default.
    pub fn hidden(mut self, yes: bool) -> Self {
        self.include_hidden = yes;
        self
    }

    // ── Ignore rules ──────────────────────────────────────────────────────

    /// Honour `.gitignore` and `.ignore` at the root.
    pub fn ignore_files(mut self, yes: bool) -> Self {
        self.ignore_files = yes;
        self
    }

    /// Add an extra gitignore-syntax rule.
    pub fn ignore_rule(mut self, rule: impl Into<String>) -> Self {
        self.ignore_rules.push(rule.into());
        self
    }

    // ── Metadata ──────────────────────────────────────────────────────────

    /// Only match entries of one of `types`.
    pub fn file_types(mut self, types: impl IntoIterator<Item = FileType>) -> Self {
        self.file_types = types.into_iter().collect();
        self
    }

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

    pub fn min_size(mut self, bytes: u64) -> Self {
        self.min_size = Some(bytes);
        self
    }

    pub fn max_size(mut self, bytes: u64) -> Self {
        self.max_size = Some(bytes);
        self
    }

    // ── Depth ─────────────────────────────────────────────────────────────

    pub fn min_depth(mut self, depth: usize) -> Self {
        self.min_depth = Some(depth);
        self
    }

    pub fn max_depth(mut self, depth: usize) -> Self {
        self.max_depth = Some(depth);
        self
    }

    /// Shorthand for `min_depth(depth).max_depth(depth)`.
    pub fn exact_depth(self, depth: usize) -> Self {
        self.min_depth(depth).max_depth(depth)
    }

    // ── Limit ─────────────────────────────────────────────────────────────

    /// Stop matching after `n` results.
    pub fn max_results(mut self, n: usize) -> Self {
        self.max_results = Some(n);
        self
    }

    // ── Build ─────────────────────────────────────────────────────────────

    /// Validate the options and compose the matchers.
    ///
    /// Path-only predicates come first, then the ones that stat, and the
    /// result cap last so it only counts paths every other matcher accepted.
    ///
    /// # Errors
    ///
    /// Returns `Err` for out-of-order bounds, an invalid regex, or an
    /// unreadable ignore file.
    pub fn build(self) -> Result<CompositeMatcher, FindError> {
        let mut composite = CompositeMatcher::new();

        if !self.include_hidden {
            composite.add(HiddenMatcher::new(false));
        }

        if self.min_depth.is_some() || self.max_depth.is_some() {
            let mut depth = DepthMatcher::builder(&self.root);
            if let Some(min) = self.min_depth {
                depth = depth.min(min);
            }
            if let Some(max) = self.max_depth {
                depth = depth.max(max);
            }
            composite.add(depth.build()?);
        }

        if !self.suffixes.is_empty() {
            composite.add(SuffixMatcher::new(&self.suffixes));
        }

        if let Some((pattern, mode)) = self.name {
            composite.add(
                FilenameMatcher::builder(pattern)
                    .mode(mode)
                    .ignore_case(self.ignore_case)
                    .build()?,
            );
        }

        if self.ignore_files || !self.ignore_rules.is_empty() {
            let mut ignore = IgnoreFileMatcher::builder(&self.root);
            if self.ignore_files {
                ignore = ignore.standard_files();
            }
            for rule in &self.ignore_rules {
                ignore = ignore.add_line(rule);
            }
            composite.add(ignore.build()?);
        }

        if !self.file_types.is_empty() {
            composite.add(FileTypeMatcher::new(self.file_types));
        }

        if self.min_size.is_some() || self.max_size.is_some() {
            let mut size = SizeMatcher::builder();
            if let Some(min) = self.min_size {
                size = size.min(min);
            }
            if let Some(max) = self.max_size {
                size = size.max(max);
            }
            composite.add(size.build()?);
        }

        if self.older.is_some() || self.newer.is_some() {
            let mut time = ChangeTimeMatcher::builder();
            if let Some(older) = self.older {
                time = time.older(older);
            }
            if let Some(newer) = self.newer {
                time = time.newer(newer);
            }
            composite.add(time.build()?);
        }

        if let Some(max) = self.max_results {
            composite.add(ResultCap::new(max));
        }

        debug!(
            root = %self.root.display(),
            matchers = composite.len(),
            "built composite matcher"
        );
        Ok(composite)
    }
}
