//! Filesystem entries and their classification

use std::fs::{self, FileType, Metadata};
use std::io;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

/// What kind of filesystem object an entry is.
///
/// Classification looks at the link itself, never at what it points to.
/// A symlink whose target cannot be resolved is an `Orphan`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryKind {
    Regular,
    Directory,
    Symlink,
    BlockDevice,
    CharDevice,
    Socket,
    Pipe,
    Orphan,
}

impl EntryKind {
    fn from_file_type(ft: FileType) -> Self {
        if ft.is_dir() {
            return EntryKind::Directory;
        }
        if ft.is_symlink() {
            return EntryKind::Symlink;
        }
        #[cfg(unix)]
        {
            use std::os::unix::fs::FileTypeExt;
            if ft.is_block_device() {
                return EntryKind::BlockDevice;
            }
            if ft.is_char_device() {
                return EntryKind::CharDevice;
            }
            if ft.is_socket() {
                return EntryKind::Socket;
            }
            if ft.is_fifo() {
                return EntryKind::Pipe;
            }
        }
        EntryKind::Regular
    }

    /// The single character `ls -l` shows in front of the permission bits.
    pub fn type_char(self) -> char {
        match self {
            EntryKind::Directory => 'd',
            EntryKind::Symlink | EntryKind::Orphan => 'l',
            EntryKind::BlockDevice => 'b',
            EntryKind::CharDevice => 'c',
            EntryKind::Socket => 's',
            EntryKind::Pipe => 'p',
            EntryKind::Regular => '-',
        }
    }
}

/// Permission and special mode bits of an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Mode(u32);

impl Mode {
    pub const SETUID: u32 = 0o4000;
    pub const SETGID: u32 = 0o2000;
    pub const STICKY: u32 = 0o1000;
    pub const ANY_EXEC: u32 = 0o111;

    pub fn new(bits: u32) -> Self {
        Self(bits & 0o7777)
    }

    pub fn bits(self) -> u32 {
        self.0
    }

    pub fn has(self, bit: u32) -> bool {
        self.0 & bit != 0
    }

    pub fn is_executable(self) -> bool {
        self.has(Self::ANY_EXEC)
    }

    #[cfg(unix)]
    fn from_metadata(meta: &Metadata) -> Self {
        use std::os::unix::fs::PermissionsExt;
        Self::new(meta.permissions().mode())
    }

    #[cfg(not(unix))]
    fn from_metadata(meta: &Metadata) -> Self {
        if meta.permissions().readonly() {
            Self::new(0o444)
        } else {
            Self::new(0o644)
        }
    }
}

/// One filesystem object with the metadata needed to decorate it.
#[derive(Debug, Clone)]
pub struct Entry {
    pub path: PathBuf,
    pub name: String,
    pub kind: EntryKind,
    pub mode: Mode,
    pub size: u64,
    pub modified: SystemTime,
    pub link_target: Option<PathBuf>,
}

impl Entry {
    /// Stat `path` without following a final symlink.
    pub fn from_path(path: &Path) -> io::Result<Self> {
        let meta = fs::symlink_metadata(path)?;
        let mut kind = EntryKind::from_file_type(meta.file_type());

        let link_target = if kind == EntryKind::Symlink {
            let target = fs::read_link(path).ok();
            if fs::metadata(path).is_err() {
                kind = EntryKind::Orphan;
            }
            target
        } else {
            None
        };

        Ok(Self {
            path: path.to_path_buf(),
            name: entry_name(path),
            kind,
            mode: Mode::from_metadata(&meta),
            size: meta.len(),
            modified: meta.modified().unwrap_or(SystemTime::UNIX_EPOCH),
            link_target,
        })
    }

    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Directory
    }

    pub fn is_hidden(&self) -> bool {
        self.name.starts_with('.')
    }

    /// Regular file with at least one execute bit set.
    pub fn is_executable(&self) -> bool {
        self.kind == EntryKind::Regular && self.mode.is_executable()
    }
}

/// Last path component, or the path itself when it has none (`.`, `/`).
fn entry_name(path: &Path) -> String {
    path.file_name()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| path.to_string_lossy().to_string())
}
