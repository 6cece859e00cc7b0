//! Durable single-file storage for serialized sessions.
//!
//! # Responsibility
//! - Whole-file blocking reads and writes, one file per session.
//! - Restrict session files to owner-only access on creation.
//!
//! # Invariants
//! - Writes create or truncate; no staging, no partial appends.
//! - New files are created with mode 0600 on Unix; an existing file keeps
//!   its permissions.
//! - Failures are reported once; there is no retry logic.

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

#[cfg(unix)]
const SESSION_FILE_MODE: u32 = 0o600;

/// Creates or overwrites the file at `path` with `contents`.
pub fn write(path: &Path, contents: &str) -> Result<(), StoreError> {
    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(SESSION_FILE_MODE);
    }

    let mut file = options.open(path).map_err(|source| StoreError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    file.write_all(contents.as_bytes())
        .map_err(|source| StoreError::Io {
            path: path.to_path_buf(),
            source,
        })
}

/// Reads the entire file at `path` as UTF-8 text.
pub fn read(path: &Path) -> Result<String, StoreError> {
    fs::read_to_string(path).map_err(|source| StoreError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Error for session file access.
#[derive(Debug)]
pub enum StoreError {
    /// The file could not be created, read, or written.
    Io { path: PathBuf, source: io::Error },
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "session file access failed at `{}`: {source}", path.display())
            }
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
        }
    }
}
