//! # finddd
//!
//! Composable file matchers for find-like tools.
//!
//! finddd owns the predicates: the [`Matcher`] contract, the concrete
//! matchers (suffix, file type, modification time, size, hidden, depth,
//! name pattern, ignore rules, result cap) and their AND-composition. It
//! does **not** walk directories or print anything. A walker hands each
//! candidate path to a [`CompositeMatcher`] and keeps the ones that match.
//!
//! Filesystem access goes through the [`FileSystem`] trait, so the same
//! matchers run over the OS filesystem ([`OsFs`]) or anything else that can
//! report metadata and list directories.
//!
//! # Quick Start
//!
//! ```rust
//! use std::path::Path;
//! use finddd::{Matcher, OsFs};
//!
//! let matcher = finddd::matchers("/r")
//!     .suffixes([".go"])
//!     .exact_depth(2)
//!     .build()
//!     .unwrap();
//!
//! let fs = OsFs::new();
//! assert!(matcher.is_match(&fs, Path::new("/r/a/main.go")));
//! assert!(!matcher.is_match(&fs, Path::new("/r/a/main.txt")));
//! assert!(!matcher.is_match(&fs, Path::new("/r/a/.main.go")));
//! ```
//!
//! # Composing by hand
//!
//! Every matcher can also be built on its own and added to a composite in
//! whatever order suits the walker:
//!
//! ```rust
//! use std::path::Path;
//! use finddd::{CompositeMatcher, HiddenMatcher, Matcher, OsFs, ResultCap, SuffixMatcher};
//!
//! let matcher = CompositeMatcher::new()
//!     .with(HiddenMatcher::new(false))
//!     .with(SuffixMatcher::new([".rs"]))
//!     .with(ResultCap::new(1));
//!
//! let fs = OsFs::new();
//! assert!(matcher.is_match(&fs, Path::new("src/lib.rs")));
//! assert!(!matcher.is_match(&fs, Path::new("src/main.rs")));
//! ```

#![forbid(unsafe_code)]

mod builder;
mod composite;
mod error;
mod fs;
mod matchers;
mod metadata;
mod traits;

// ── Public re-exports ─────────────────────────────────────────────────────────

pub use builder::MatcherBuilder;
pub use composite::CompositeMatcher;
pub use error::FindError;
pub use fs::OsFs;
pub use matchers::{
    ChangeTimeBuilder, ChangeTimeMatcher, DepthBuilder, DepthMatcher, FileType, FileTypeMatcher,
    FilenameBuilder, FilenameMatcher, HiddenMatcher, IgnoreFileBuilder, IgnoreFileMatcher,
    MatchMode, NopMatcher, ResultCap, SizeBuilder, SizeMatcher, SuffixMatcher,
};
pub use metadata::{EntryKind, Metadata};
pub use traits::{FileSystem, Matcher};

// ── Entry point ───────────────────────────────────────────────────────────────

/// Start configuring the matchers for a traversal rooted at `root`.
///
/// The root anchors depth and ignore-file rules; paths handed to the
/// resulting matcher should be spelled relative to the same base.
///
/// # Example
///
/// ```rust
/// use std::path::Path;
/// use finddd::{Matcher, OsFs};
///
/// let matcher = finddd::matchers("/r").exact_depth(1).build().unwrap();
///
/// assert!(matcher.is_match(&OsFs::new(), Path::new("/r/x")));
/// assert!(!matcher.is_match(&OsFs::new(), Path::new("/r/x/y")));
/// ```
pub fn matchers(root: impl Into<std::path::PathBuf>) -> MatcherBuilder {
    MatcherBuilder::new(root.into())
}
