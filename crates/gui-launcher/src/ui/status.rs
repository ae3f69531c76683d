//! Colored console status lines.
//!
//! These lines are the launcher's user-facing output channel; `tracing` is
//! reserved for diagnostics.

#![allow(clippy::print_stdout)]

use crossterm::style::Stylize;

use crate::domain::layout::SERVER_URL;

const RULE_WIDTH: usize = 40;

/// Prints the launcher banner.
pub fn header() {
    let rule = "=".repeat(RULE_WIDTH);
    println!("{}", rule.as_str().blue());
    println!("{}", "  Web GUI Launcher".blue());
    println!("{}", rule.as_str().blue());
    println!();
}

/// Prints the pre-launch banner for the dev server.
pub fn server_banner() {
    let rule = "=".repeat(RULE_WIDTH);
    println!();
    println!("{}", rule.as_str().blue());
    println!("{}", "  Starting dev server...".green());
    println!("{}", rule.as_str().blue());
    println!();
    println!("  🌐 Opening browser at {SERVER_URL}");
    println!("  ⏹  Press Ctrl+C to stop the server");
    println!();
}

/// Prints an in-progress step description.
pub fn info(message: &str) {
    println!("{}", message.blue());
}

/// Prints a secondary, indented hint line.
pub fn hint(message: &str) {
    println!("  {message}");
}

pub fn success(message: &str) {
    println!("{} {message}", "✓".green());
}

pub fn warning(message: &str) {
    println!("{} {message}", "⚠".yellow());
}

pub fn failure(message: &str) {
    println!("{} {message}", "✗".red());
}

/// Prints the blank separator between pipeline phases.
pub fn blank() {
    println!();
}
