use std::io;
use std::time::SystemTime;

/// Per-path metadata reported by a [`FileSystem`](crate::traits::FileSystem).
///
/// Deliberately small: matchers only need the size, the modification time,
/// the entry kind and the permission bits. Filesystems that are not backed
/// by the OS (in-memory trees, archives) can fill this in directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Metadata {
    /// What kind of entry this is. Symlinks are reported as
    /// [`EntryKind::Symlink`], not as their target.
    pub kind: EntryKind,

    /// Size in bytes.
    pub len: u64,

    /// Last modification time.
    pub modified: SystemTime,

    /// Unix permission bits (`0o7777` mask). Zero where unavailable.
    pub mode: u32,
}

/// Owner, group and other execute bits.
const EXEC_BITS: u32 = 0o111;

impl Metadata {
    pub fn is_file(&self) -> bool {
        self.kind == EntryKind::File
    }

    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Dir
    }

    pub fn is_symlink(&self) -> bool {
        self.kind == EntryKind::Symlink
    }

    /// Whether any execute bit (owner, group or other) is set.
    pub fn is_executable(&self) -> bool {
        self.mode & EXEC_BITS != 0
    }

    /// Convert `std` metadata, as returned by `symlink_metadata`.
    pub fn from_std(md: &std::fs::Metadata) -> io::Result<Self> {
        Ok(Self {
            kind:     EntryKind::from_std(md.file_type()),
            len:      md.len(),
            modified: md.modified()?,
            mode:     mode_bits(md),
        })
    }
}

#[cfg(unix)]
fn mode_bits(md: &std::fs::Metadata) -> u32 {
    use std::os::unix::fs::PermissionsExt;
    md.permissions().mode() & 0o7777
}

#[cfg(not(unix))]
fn mode_bits(_md: &std::fs::Metadata) -> u32 {
    0
}

/// The kind of a filesystem entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryKind {
    /// A regular file.
    File,

    /// A directory.
    Dir,

    /// A symbolic link.
    Symlink,

    /// A unix domain socket.
    Socket,

    /// A named pipe (FIFO).
    Pipe,

    /// Anything else (block and character devices, etc.).
    Other,
}

impl EntryKind {
    pub fn from_std(ft: std::fs::FileType) -> Self {
        if ft.is_symlink() {
            return Self::Symlink;
        }
        if ft.is_dir() {
            return Self::Dir;
        }
        if ft.is_file() {
            return Self::File;
        }
        special_kind(ft)
    }
}

#[cfg(unix)]
fn special_kind(ft: std::fs::FileType) -> EntryKind {
    use std::os::unix::fs::FileTypeExt;
    if ft.is_socket() {
        EntryKind::Socket
    } else if ft.is_fifo() {
        EntryKind::Pipe
    } else {
        EntryKind::Other
    }
}

#[cfg(not(unix))]
fn special_kind(_ft: std::fs::FileType) -> EntryKind {
    EntryKind::Other
}
