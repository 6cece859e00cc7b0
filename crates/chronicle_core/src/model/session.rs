//! Session aggregate and its persistence operations.
//!
//! # Responsibility
//! - Own the ordered note log plus session metadata (title, number, date).
//! - Orchestrate save/load through the codec and store boundaries.
//!
//! # Invariants
//! - `add_note` silently discards empty-content notes; it never errors.
//! - `date` is set once at construction and never mutated.
//! - `path` is runtime-only state and is never serialized.
//! - `save` requires a recorded path; the first save must go through
//!   `save_as`.

use crate::codec::{self, CodecError};
use crate::model::note::Note;
use crate::store::{self, StoreError};
use chrono::{DateTime, Utc};
use log::{error, info};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

/// Sentinel meaning "no session number assigned".
pub const NO_SESSION_NUMBER: i64 = -1;

/// A single note-taking sitting: the note log plus its metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    /// All notes committed by the user, in entry order.
    pub notes: Vec<Note>,
    /// When this session began.
    pub date: DateTime<Utc>,
    /// Free-form session name; empty means "untitled".
    pub title: String,
    /// Session number, or `NO_SESSION_NUMBER` when unset.
    pub number: i64,
    /// Where this session was last saved; `None` means never saved.
    pub path: Option<PathBuf>,
}

impl Session {
    /// Creates a fresh session dated now, with no notes and no path.
    pub fn new(title: impl Into<String>, number: i64) -> Self {
        Self::with_date(title, number, Utc::now())
    }

    /// Creates a session with a caller-provided start date.
    ///
    /// Primarily a hook for deterministic tests; normal runtime use goes
    /// through [`Session::new`].
    pub fn with_date(title: impl Into<String>, number: i64, date: DateTime<Utc>) -> Self {
        Self {
            notes: Vec::new(),
            date,
            title: title.into(),
            number,
            path: None,
        }
    }

    /// Appends a note to the log.
    ///
    /// An empty-content note is treated as accidental input and discarded
    /// without error or side effect.
    pub fn add_note(&mut self, note: Note) {
        if note.content.is_empty() {
            return;
        }
        self.notes.push(note);
    }

    /// Serializes this session to its JSON wire form.
    pub fn to_json(&self) -> String {
        codec::encode(self)
    }

    /// Builds a session from its JSON wire form.
    ///
    /// The resulting session has no recorded path; [`Session::load`] is the
    /// path-aware entry point.
    pub fn from_json(text: &str) -> Result<Self, CodecError> {
        codec::decode(text)
    }

    /// Writes this session to its recorded path, overwriting the file.
    ///
    /// # Errors
    /// - [`SessionError::NoPath`] when no path has been recorded yet; the
    ///   caller is expected to route the first save through [`Session::save_as`].
    /// - [`SessionError::Store`] when the write fails.
    pub fn save(&self) -> Result<(), SessionError> {
        let path = self.path.as_ref().ok_or(SessionError::NoPath)?;
        let text = codec::encode(self);
        match store::write(path, &text) {
            Ok(()) => {
                info!(
                    "event=session_saved module=core status=ok path={} notes={}",
                    path.display(),
                    self.notes.len()
                );
                Ok(())
            }
            Err(err) => {
                error!(
                    "event=session_save_failed module=core status=error path={} error={err}",
                    path.display()
                );
                Err(err.into())
            }
        }
    }

    /// Records `path` on this session, then writes to it.
    ///
    /// The path is recorded before the write outcome is known, so a failed
    /// write still leaves the path set for a later retry via [`Session::save`].
    pub fn save_as(&mut self, path: impl Into<PathBuf>) -> Result<(), SessionError> {
        self.path = Some(path.into());
        self.save()
    }

    /// Reads and decodes the session stored at `path`.
    ///
    /// On success the returned session remembers `path` for subsequent
    /// [`Session::save`] calls. On any failure the caller should keep using
    /// its current session.
    pub fn load(path: impl Into<PathBuf>) -> Result<Self, SessionError> {
        let path = path.into();
        let text = store::read(&path).map_err(|err| {
            error!(
                "event=session_load_failed module=core status=error path={} error={err}",
                path.display()
            );
            SessionError::from(err)
        })?;
        let mut session = codec::decode(&text).map_err(|err| {
            error!(
                "event=session_decode_failed module=core status=error path={} error={err}",
                path.display()
            );
            SessionError::from(err)
        })?;
        info!(
            "event=session_loaded module=core status=ok path={} notes={}",
            path.display(),
            session.notes.len()
        );
        session.path = Some(path);
        Ok(session)
    }
}

impl Default for Session {
    /// An untitled, unnumbered, empty session dated now.
    fn default() -> Self {
        Self::new("", NO_SESSION_NUMBER)
    }
}

/// Error for session persistence operations.
#[derive(Debug)]
pub enum SessionError {
    /// `save` was called before any path was recorded.
    NoPath,
    /// The serialized form could not be decoded.
    Codec(CodecError),
    /// Reading or writing the session file failed.
    Store(StoreError),
}

impl Display for SessionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoPath => write!(f, "session has no save path; use save_as first"),
            Self::Codec(err) => write!(f, "{err}"),
            Self::Store(err) => write!(f, "{err}"),
        }
    }
}

impl Error for SessionError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::NoPath => None,
            Self::Codec(err) => Some(err),
            Self::Store(err) => Some(err),
        }
    }
}

impl From<CodecError> for SessionError {
    fn from(value: CodecError) -> Self {
        Self::Codec(value)
    }
}

impl From<StoreError> for SessionError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}
