//! Core domain logic for Chronicle, a personal session note tracker.
//! This crate is the single source of truth for session invariants and
//! the persisted document format; all rendering and input handling live
//! in calling layers.

pub mod codec;
pub mod logging;
pub mod model;
pub mod store;
pub mod validate;

pub use codec::CodecError;
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::note::Note;
pub use model::session::{Session, SessionError, NO_SESSION_NUMBER};
pub use store::StoreError;
pub use validate::{validate_session_number, ValidationError};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
