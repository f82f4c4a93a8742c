use std::path::Path;

use super::base_name;
use crate::traits::{FileSystem, Matcher};

/// Matches paths whose base name ends with one of a set of suffixes.
///
/// Comparison is case-insensitive and literal (`.rs` is not a glob). An
/// empty set matches everything.
#[derive(Debug, Clone, Default)]
pub struct SuffixMatcher {
    suffixes: Vec<String>,
}

impl SuffixMatcher {
    pub fn new<I, S>(suffixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            suffixes: suffixes
                .into_iter()
                .map(|s| s.as_ref().to_lowercase())
                .collect(),
        }
    }

    /// The configured suffixes, lower-cased.
    pub fn suffixes(&self) -> &[String] {
        &self.suffixes
    }
}

impl Matcher for SuffixMatcher {
    fn is_match(&self, _fs: &dyn FileSystem, path: &Path) -> bool {
        if self.suffixes.is_empty() {
            return true;
        }
        let name = base_name(path).to_lowercase();
        self.suffixes.iter().any(|s| name.ends_with(s.as_str()))
    }
}
