use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};

use tracing::trace;

use crate::traits::{FileSystem, Matcher};

/// Caps the number of paths that make it through.
///
/// The first `max` calls return `true`, every later call returns `false`.
/// The counter is shared by all callers of one instance and there is no
/// reset: build a new `ResultCap` for each traversal.
///
/// Compose it last (after every other predicate) so that it counts only
/// paths that would otherwise have matched.
#[derive(Debug, Default)]
pub struct ResultCap {
    max:   Option<usize>,
    count: AtomicUsize,
}

impl ResultCap {
    pub fn new(max: usize) -> Self {
        Self {
            max:   Some(max),
            count: AtomicUsize::new(0),
        }
    }

    /// A cap that never triggers and does no counting.
    pub fn unbounded() -> Self {
        Self::default()
    }

    pub fn max(&self) -> Option<usize> {
        self.max
    }

    /// How many calls have succeeded so far. Always zero when unbounded.
    pub fn count(&self) -> usize {
        self.count.load(Ordering::Acquire)
    }

    /// Successes left before the cap closes, or `None` when unbounded.
    pub fn remaining(&self) -> Option<usize> {
        self.max.map(|max| max.saturating_sub(self.count()))
    }
}

impl Matcher for ResultCap {
    fn is_match(&self, _fs: &dyn FileSystem, path: &Path) -> bool {
        let Some(max) = self.max else {
            return true;
        };
        // Compare and increment in one step so concurrent callers can
        // never push the count past `max`.
        let claimed = self
            .count
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |n| {
                (n < max).then_some(n + 1)
            });
        match claimed {
            Ok(n) => {
                if n + 1 == max {
                    trace!(path = %path.display(), max, "result cap reached");
                }
                true
            }
            Err(_) => false,
        }
    }
}
