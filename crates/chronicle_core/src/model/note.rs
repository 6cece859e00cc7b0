//! Note domain model.
//!
//! # Responsibility
//! - Represent one timestamped log entry exactly as the user submitted it.
//!
//! # Invariants
//! - `time` is assigned at creation and never mutated afterwards.
//! - Emptiness of `content` is a commit policy owned by `Session`, not a
//!   well-formedness rule of `Note` itself.

use chrono::{DateTime, Utc};

/// One entry in the session log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Note {
    /// The text exactly as input by the user.
    pub content: String,
    /// The moment the entry was submitted.
    pub time: DateTime<Utc>,
}

impl Note {
    /// Creates a note from submitted text and its submission time.
    ///
    /// Does not validate `content`; an empty note is still a valid value,
    /// the owning session decides whether it is worth keeping.
    pub fn new(content: impl Into<String>, time: DateTime<Utc>) -> Self {
        Self {
            content: content.into(),
            time,
        }
    }
}
