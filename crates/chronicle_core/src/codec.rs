//! JSON codec between in-memory sessions and the persisted wire form.
//!
//! # Responsibility
//! - Define the wire schema explicitly, decoupled from internal field names.
//! - Encode sessions infallibly; decode with structural validation.
//! - Apply the single post-decode repair rule for out-of-range numbers.
//!
//! # Invariants
//! - Wire field names are `Notes`, `Date`, `SessionTitle`, `SessionNumber`
//!   (notes as `Content` + `Time`); `Notes` is present even when empty.
//! - Timestamps are RFC 3339 with offset; encoded as UTC, any offset is
//!   accepted on decode and normalized to UTC.
//! - The runtime-only `path` field never appears on the wire.
//! - Repair touches `SessionNumber` only; structurally invalid input is
//!   rejected, never repaired.

use crate::model::note::Note;
use crate::model::session::{Session, NO_SESSION_NUMBER};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Wire shape of one persisted note.
#[derive(Debug, Serialize, Deserialize)]
struct NoteDoc {
    #[serde(rename = "Content")]
    content: String,
    #[serde(rename = "Time")]
    time: DateTime<Utc>,
}

/// Wire shape of one persisted session document.
#[derive(Debug, Serialize, Deserialize)]
struct SessionDoc {
    #[serde(rename = "Notes")]
    notes: Vec<NoteDoc>,
    #[serde(rename = "Date")]
    date: DateTime<Utc>,
    #[serde(rename = "SessionTitle")]
    session_title: String,
    #[serde(rename = "SessionNumber")]
    session_number: i64,
}

impl From<&Session> for SessionDoc {
    fn from(session: &Session) -> Self {
        Self {
            notes: session
                .notes
                .iter()
                .map(|note| NoteDoc {
                    content: note.content.clone(),
                    time: note.time,
                })
                .collect(),
            date: session.date,
            session_title: session.title.clone(),
            session_number: session.number,
        }
    }
}

impl SessionDoc {
    fn into_session(self) -> Session {
        let mut session = Session::with_date(self.session_title, self.session_number, self.date);
        session.notes = self
            .notes
            .into_iter()
            .map(|doc| Note::new(doc.content, doc.time))
            .collect();
        session
    }
}

/// Serializes a session to its JSON wire form.
///
/// Never fails for an in-memory session: the wire shape contains no
/// fallible conversions and no I/O.
pub fn encode(session: &Session) -> String {
    let doc = SessionDoc::from(session);
    serde_json::to_string(&doc).expect("session wire shape serializes without error")
}

/// Parses a JSON wire document into a session.
///
/// # Errors
/// Returns [`CodecError::Malformed`] when `text` is not valid JSON or does
/// not match the expected document shape (wrong field types, not an
/// object). Structural problems are never repaired.
pub fn decode(text: &str) -> Result<Session, CodecError> {
    let mut doc: SessionDoc = serde_json::from_str(text)?;
    repair(&mut doc);
    Ok(doc.into_session())
}

/// Post-decode repair pass for externally modified documents.
///
/// A correct encoder never emits a session number below the sentinel, so a
/// value below `-1` can only come from a hand-edited or corrupted file; it
/// is clamped back to "no number assigned". This is the only repair rule.
fn repair(doc: &mut SessionDoc) {
    if doc.session_number < NO_SESSION_NUMBER {
        doc.session_number = NO_SESSION_NUMBER;
    }
}

/// Error for wire-form decoding.
#[derive(Debug)]
pub enum CodecError {
    /// Input is not syntactically valid JSON or does not match the
    /// expected document shape.
    Malformed(serde_json::Error),
}

impl Display for CodecError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Malformed(err) => write!(f, "malformed session document: {err}"),
        }
    }
}

impl Error for CodecError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Malformed(err) => Some(err),
        }
    }
}

impl From<serde_json::Error> for CodecError {
    fn from(value: serde_json::Error) -> Self {
        Self::Malformed(value)
    }
}

#[cfg(test)]
mod tests {
    use super::{decode, encode, repair, CodecError, SessionDoc};
    use crate::model::session::{Session, NO_SESSION_NUMBER};
    use chrono::{TimeZone, Utc};

    fn doc_with_number(number: i64) -> SessionDoc {
        SessionDoc {
            notes: Vec::new(),
            date: Utc.with_ymd_and_hms(2021, 6, 22, 15, 0, 0).unwrap(),
            session_title: String::new(),
            session_number: number,
        }
    }

    #[test]
    fn repair_clamps_numbers_below_sentinel() {
        let mut doc = doc_with_number(-2);
        repair(&mut doc);
        assert_eq!(doc.session_number, NO_SESSION_NUMBER);

        let mut doc = doc_with_number(i64::MIN);
        repair(&mut doc);
        assert_eq!(doc.session_number, NO_SESSION_NUMBER);
    }

    #[test]
    fn repair_leaves_sentinel_and_assigned_numbers_alone() {
        let mut doc = doc_with_number(NO_SESSION_NUMBER);
        repair(&mut doc);
        assert_eq!(doc.session_number, NO_SESSION_NUMBER);

        let mut doc = doc_with_number(5);
        repair(&mut doc);
        assert_eq!(doc.session_number, 5);
    }

    #[test]
    fn decode_rejects_wrong_field_types() {
        let text = r#"{"Notes":[],"Date":"2021-06-22T15:00:00Z","SessionTitle":"x","SessionNumber":"five"}"#;
        let err = decode(text).unwrap_err();
        assert!(matches!(err, CodecError::Malformed(_)));
    }

    #[test]
    fn decode_rejects_non_object_input() {
        let err = decode("[1,2,3]").unwrap_err();
        assert!(matches!(err, CodecError::Malformed(_)));
    }

    #[test]
    fn decode_normalizes_offsets_to_utc() {
        let text = r#"{"Notes":[],"Date":"2021-06-22T17:00:00+02:00","SessionTitle":"","SessionNumber":-1}"#;
        let session = decode(text).unwrap();
        assert_eq!(
            session.date,
            Utc.with_ymd_and_hms(2021, 6, 22, 15, 0, 0).unwrap()
        );
    }

    #[test]
    fn encode_excludes_runtime_path() {
        let mut session = Session::new("already saved once", 3);
        session.path = Some("/tmp/somewhere.json".into());
        let text = encode(&session);
        assert!(!text.contains("path"));
        assert!(!text.contains("Path"));
    }
}
