//! Operator-facing status lines.
//!
//! Four prefixes: `[+]` info, `[!]` error, `[?]` prompt notice and `[$]`
//! suggested command. Diagnostics go through `tracing` on stderr instead
//! and never replace these lines.

use owo_colors::OwoColorize;

pub fn info(message: &str) {
    println!("{} {message}", "[+]".green());
}

pub fn error(message: &str) {
    println!("{} {message}", "[!]".red());
}

pub fn prompt(message: &str) {
    println!("{} {message}", "[?]".yellow());
}

pub fn command(message: &str) {
    println!("{} {message}", "[$]".cyan());
}
