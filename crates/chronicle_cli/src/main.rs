//! CLI probe entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `chronicle_core` linkage.
//! - Print a saved session file as a readable summary for quick checks.

use chronicle_core::{Session, NO_SESSION_NUMBER};
use std::process::ExitCode;

fn main() -> ExitCode {
    let mut args = std::env::args().skip(1);

    match args.next() {
        None => {
            println!("chronicle_core version={}", chronicle_core::core_version());
            print_session(&Session::default());
            ExitCode::SUCCESS
        }
        Some(path) => match Session::load(&path) {
            Ok(session) => {
                print_session(&session);
                ExitCode::SUCCESS
            }
            Err(err) => {
                eprintln!("failed to load `{path}`: {err}");
                ExitCode::FAILURE
            }
        },
    }
}

fn print_session(session: &Session) {
    let title = if session.title.is_empty() {
        "(untitled)"
    } else {
        session.title.as_str()
    };
    println!("title: {title}");
    if session.number > NO_SESSION_NUMBER {
        println!("number: {}", session.number);
    } else {
        println!("number: (unset)");
    }
    println!("date: {}", session.date.to_rfc3339());
    println!("notes: {}", session.notes.len());
    for note in &session.notes {
        println!("  [{}] {}", note.time.to_rfc3339(), note.content);
    }
}
