//! Styled status messages.
//!
//! Stdout carries the generated artifact, so every helper here writes to
//! stderr.

use crossterm::style::{Color, Stylize};

/// Print a success message in green to stderr.
pub fn success(msg: &str) {
    eprintln!("{}", msg.with(Color::Green));
}

/// Print an error message in red to stderr.
pub fn error(msg: &str) {
    eprintln!("{}", msg.with(Color::Red));
}

/// Print an info message in cyan to stderr.
pub fn info(msg: &str) {
    eprintln!("{}", msg.with(Color::Cyan));
}
