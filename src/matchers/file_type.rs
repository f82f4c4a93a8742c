use std::fmt;
use std::path::Path;
use std::str::FromStr;

use tracing::trace;

use super::stat;
use crate::error::FindError;
use crate::metadata::{EntryKind, Metadata};
use crate::traits::{FileSystem, Matcher};

/// A type filter, identified by the single-character tag used on the
/// command line of find-like tools.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileType {
    /// `f`: a regular file.
    File,
    /// `d`: a directory.
    Directory,
    /// `l`: a symbolic link.
    Symlink,
    /// `x`: any execute bit set.
    Executable,
    /// `e`: an empty regular file or a directory with no entries.
    Empty,
    /// `s`: a socket.
    Socket,
    /// `p`: a named pipe.
    Pipe,
}

impl FileType {
    pub const ALL: [FileType; 7] = [
        FileType::File,
        FileType::Directory,
        FileType::Symlink,
        FileType::Executable,
        FileType::Empty,
        FileType::Socket,
        FileType::Pipe,
    ];

    pub fn tag(self) -> char {
        match self {
            Self::File       => 'f',
            Self::Directory  => 'd',
            Self::Symlink    => 'l',
            Self::Executable => 'x',
            Self::Empty      => 'e',
            Self::Socket     => 's',
            Self::Pipe       => 'p',
        }
    }

    /// Parse a run of tags such as `"fd"` or `"f,l"`.
    ///
    /// Commas and whitespace between tags are ignored.
    pub fn parse_list(tags: &str) -> Result<Vec<FileType>, FindError> {
        tags.chars()
            .filter(|c| *c != ',' && !c.is_whitespace())
            .map(FileType::try_from)
            .collect()
    }

    /// Whether `path`, described by `md`, is of this type.
    ///
    /// `Empty` lists the directory, every other type only looks at `md`.
    fn holds(self, fs: &dyn FileSystem, path: &Path, md: &Metadata) -> bool {
        match self {
            Self::File       => md.is_file(),
            Self::Directory  => md.is_dir(),
            Self::Symlink    => md.is_symlink(),
            Self::Executable => md.is_executable(),
            Self::Socket     => md.kind == EntryKind::Socket,
            Self::Pipe       => md.kind == EntryKind::Pipe,
            Self::Empty      => is_empty(fs, path, md),
        }
    }
}

impl TryFrom<char> for FileType {
    type Error = FindError;

    fn try_from(tag: char) -> Result<Self, Self::Error> {
        FileType::ALL
            .into_iter()
            .find(|t| t.tag() == tag)
            .ok_or(FindError::UnknownFileType(tag))
    }
}

impl FromStr for FileType {
    type Err = FindError;

    /// Parse exactly one tag character.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(tag), None) => FileType::try_from(tag),
            _ => Err(FindError::InvalidFileTypeTag(s.to_owned())),
        }
    }
}

impl fmt::Display for FileType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag())
    }
}

fn is_empty(fs: &dyn FileSystem, path: &Path, md: &Metadata) -> bool {
    if md.is_file() {
        return md.len == 0;
    }
    if !md.is_dir() {
        return false;
    }
    match fs.read_dir(path) {
        Ok(entries) => entries.is_empty(),
        Err(err) => {
            trace!(path = %path.display(), error = %err, "listing failed, not empty");
            false
        }
    }
}

/// Matches entries of any of the requested [`FileType`]s.
///
/// An empty set matches everything. A path that cannot be stat'ed never
/// matches a non-empty set.
#[derive(Debug, Clone, Default)]
pub struct FileTypeMatcher {
    types: Vec<FileType>,
}

impl FileTypeMatcher {
    pub fn new(types: impl IntoIterator<Item = FileType>) -> Self {
        let mut deduped: Vec<FileType> = Vec::new();
        for t in types {
            if !deduped.contains(&t) {
                deduped.push(t);
            }
        }
        Self { types: deduped }
    }

    pub fn types(&self) -> &[FileType] {
        &self.types
    }
}

impl Matcher for FileTypeMatcher {
    fn is_match(&self, fs: &dyn FileSystem, path: &Path) -> bool {
        if self.types.is_empty() {
            return true;
        }
        let Some(md) = stat(fs, path) else {
            return false;
        };
        self.types.iter().any(|t| t.holds(fs, path, &md))
    }
}
