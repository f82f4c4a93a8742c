use std::fmt;
use std::path::Path;

use crate::traits::{FileSystem, Matcher};

/// AND-combination of matchers.
///
/// Matchers run in the order they were added and evaluation stops at the
/// first one that fails, so cheap path-only predicates should go first.
/// Order also decides what a [`ResultCap`](crate::ResultCap) counts: put it
/// last to cap real results. An empty composite matches everything.
#[derive(Default)]
pub struct CompositeMatcher {
    matchers: Vec<Box<dyn Matcher>>,
}

impl CompositeMatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a matcher to the end of the chain.
    pub fn add(&mut self, m: impl Matcher + 'static) -> &mut Self {
        self.matchers.push(Box::new(m));
        self
    }

    /// By-value form of [`add`](Self::add) for chaining.
    pub fn with(mut self, m: impl Matcher + 'static) -> Self {
        self.add(m);
        self
    }

    pub fn len(&self) -> usize {
        self.matchers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matchers.is_empty()
    }
}

impl Extend<Box<dyn Matcher>> for CompositeMatcher {
    fn extend<I: IntoIterator<Item = Box<dyn Matcher>>>(&mut self, iter: I) {
        self.matchers.extend(iter);
    }
}

impl Matcher for CompositeMatcher {
    fn is_match(&self, fs: &dyn FileSystem, path: &Path) -> bool {
        self.matchers.iter().all(|m| m.is_match(fs, path))
    }
}

impl fmt::Debug for CompositeMatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompositeMatcher")
            .field("matchers", &self.matchers.len())
            .finish()
    }
}
