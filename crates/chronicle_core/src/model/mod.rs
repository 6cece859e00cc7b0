//! Domain model for note-taking sessions.
//!
//! # Responsibility
//! - Define the canonical `Note` and `Session` shapes used by core logic.
//! - Own session-level mutation rules (append-only notes, empty-note discard).
//!
//! # Invariants
//! - `Session::notes` preserves insertion order and never holds an
//!   empty-content entry added through `add_note`.
//! - `Session::number` is `>= NO_SESSION_NUMBER` after any decode.

pub mod note;
pub mod session;
