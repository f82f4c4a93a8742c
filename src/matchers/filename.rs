use std::path::Path;

use glob::{MatchOptions, Pattern};
use regex::{Regex, RegexBuilder};
use tracing::warn;

use super::base_name;
use crate::error::FindError;
use crate::traits::{FileSystem, Matcher};

/// How a [`FilenameMatcher`] compares its pattern with a base name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchMode {
    /// The name equals the pattern.
    #[default]
    Exact,
    /// The name contains the pattern.
    Substring,
    /// Shell glob: `*`, `?` and `[...]` classes.
    Glob,
    /// Regular expression, unanchored.
    Regex,
}

/// The pattern in the form the mode needs, built once per pattern.
#[derive(Debug, Clone)]
enum Compiled {
    /// Case-folded already when matching ignores case.
    Literal(String),
    /// `None` when the glob is malformed: such a pattern never matches.
    Glob(Option<Pattern>),
    Regex(Regex),
}

/// Matches paths by their base name.
///
/// # Example
///
/// ```rust
/// use std::path::Path;
/// use finddd::{FilenameMatcher, Matcher, MatchMode, OsFs};
///
/// let m = FilenameMatcher::builder("*.RS")
///     .mode(MatchMode::Glob)
///     .ignore_case(true)
///     .build()
///     .unwrap();
///
/// assert!(m.is_match(&OsFs::new(), Path::new("src/lib.rs")));
/// ```
#[derive(Debug, Clone)]
pub struct FilenameMatcher {
    pattern:     String,
    mode:        MatchMode,
    ignore_case: bool,
    compiled:    Compiled,
}

impl FilenameMatcher {
    pub fn builder(pattern: impl Into<String>) -> FilenameBuilder {
        FilenameBuilder {
            pattern:     pattern.into(),
            mode:        MatchMode::default(),
            ignore_case: false,
        }
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn mode(&self) -> MatchMode {
        self.mode
    }

    pub fn ignores_case(&self) -> bool {
        self.ignore_case
    }

    /// Replace the pattern, recompiling it for the current mode.
    ///
    /// On error the matcher keeps its previous pattern.
    pub fn set_pattern(&mut self, pattern: impl Into<String>) -> Result<(), FindError> {
        let pattern = pattern.into();
        self.compiled = compile(&pattern, self.mode, self.ignore_case)?;
        self.pattern = pattern;
        Ok(())
    }
}

fn compile(pattern: &str, mode: MatchMode, ignore_case: bool) -> Result<Compiled, FindError> {
    let folded = if ignore_case {
        pattern.to_lowercase()
    } else {
        pattern.to_owned()
    };
    let compiled = match mode {
        MatchMode::Exact | MatchMode::Substring => Compiled::Literal(folded),
        // `glob` only folds ASCII, so case is folded up front instead.
        MatchMode::Glob => match Pattern::new(&folded) {
            Ok(glob) => Compiled::Glob(Some(glob)),
            Err(err) => {
                warn!(pattern, error = %err, "malformed glob, it will match nothing");
                Compiled::Glob(None)
            }
        },
        MatchMode::Regex => {
            let re = RegexBuilder::new(pattern)
                .case_insensitive(ignore_case)
                .build()
                .map_err(|source| FindError::InvalidPattern {
                    pattern: pattern.to_owned(),
                    source,
                })?;
            Compiled::Regex(re)
        }
    };
    Ok(compiled)
}

impl Matcher for FilenameMatcher {
    fn is_match(&self, _fs: &dyn FileSystem, path: &Path) -> bool {
        let name = base_name(path);
        if let Compiled::Regex(re) = &self.compiled {
            return re.is_match(&name);
        }
        let name = if self.ignore_case {
            name.to_lowercase()
        } else {
            name.into_owned()
        };
        match &self.compiled {
            Compiled::Literal(pattern) => match self.mode {
                MatchMode::Substring => name.contains(pattern.as_str()),
                _                    => name == *pattern,
            },
            Compiled::Glob(Some(glob)) => glob.matches_with(
                &name,
                MatchOptions {
                    case_sensitive:              true,
                    require_literal_separator:   true,
                    require_literal_leading_dot: false,
                },
            ),
            Compiled::Glob(None) | Compiled::Regex(_) => false,
        }
    }
}

/// Configures a [`FilenameMatcher`].
#[derive(Debug, Clone)]
pub struct FilenameBuilder {
    pattern:     String,
    mode:        MatchMode,
    ignore_case: bool,
}

impl FilenameBuilder {
    /// How the pattern is interpreted. Defaults to [`MatchMode::Exact`].
    pub fn mode(mut self, mode: MatchMode) -> Self {
        self.mode = mode;
        self
    }

    /// Compare names case-insensitively. Off by default.
    pub fn ignore_case(mut self, yes: bool) -> Self {
        self.ignore_case = yes;
        self
    }

    /// # Errors
    ///
    /// [`FindError::InvalidPattern`] when the mode is [`MatchMode::Regex`]
    /// and the pattern does not compile. Malformed globs are accepted and
    /// simply never match.
    pub fn build(self) -> Result<FilenameMatcher, FindError> {
        let compiled = compile(&self.pattern, self.mode, self.ignore_case)?;
        Ok(FilenameMatcher {
            pattern:     self.pattern,
            mode:        self.mode,
            ignore_case: self.ignore_case,
            compiled,
        })
    }
}
