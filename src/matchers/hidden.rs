use std::path::{Component, Path};

use crate::traits::{FileSystem, Matcher};

const HIDDEN_MARKER: char = '.';

/// Filters out hidden entries (base name starting with `.`).
///
/// The flag is the inclusion policy: with `include_hidden` set everything
/// matches, otherwise only non-hidden names do. `.` and `..` are never
/// hidden, wherever they appear.
#[derive(Debug, Clone, Copy, Default)]
pub struct HiddenMatcher {
    include_hidden: bool,
}

impl HiddenMatcher {
    pub fn new(include_hidden: bool) -> Self {
        Self { include_hidden }
    }

    pub fn includes_hidden(&self) -> bool {
        self.include_hidden
    }
}

impl Matcher for HiddenMatcher {
    fn is_match(&self, _fs: &dyn FileSystem, path: &Path) -> bool {
        self.include_hidden || !is_hidden(path)
    }
}

fn is_hidden(path: &Path) -> bool {
    match path.components().next_back() {
        Some(Component::Normal(name)) => name.to_string_lossy().starts_with(HIDDEN_MARKER),
        _ => false,
    }
}
