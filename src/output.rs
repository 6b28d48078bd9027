//! Output rendering: colored severity prefixes and run-level messages.
//!
//! Diagnostics (warnings, tool failures, missing files) go to stderr; lint
//! output pass-through and the final summary go to stdout. Colors are
//! suppressed when `NO_COLOR` is set.

use owo_colors::OwoColorize;
use std::path::Path;

fn use_colors() -> bool {
    std::env::var_os("NO_COLOR").is_none()
}

pub fn error_prefix() -> String {
    if use_colors() {
        "✖".red().bold().to_string()
    } else {
        "✖".to_string()
    }
}

pub fn warn_prefix() -> String {
    if use_colors() {
        "▲".yellow().bold().to_string()
    } else {
        "▲".to_string()
    }
}

pub fn info_prefix() -> String {
    if use_colors() {
        "◆".blue().bold().to_string()
    } else {
        "◆".to_string()
    }
}

pub fn ok_prefix() -> String {
    if use_colors() {
        "✔".green().bold().to_string()
    } else {
        "✔".to_string()
    }
}

/// Per-file header printed before the tools run.
pub fn print_file_header(path: &Path) {
    let shown = path.to_string_lossy();
    if use_colors() {
        println!("\nChecking: {}", shown.bold());
    } else {
        println!("\nChecking: {}", shown);
    }
}

/// Sub-header naming the tool whose output follows.
pub fn print_tool_header(tool: &str) {
    println!("  • {}:", tool);
}

/// Final run summary reflecting the aggregate error flag.
pub fn print_final(had_errors: bool) {
    if had_errors {
        println!("\n{} Checks completed with errors.", error_prefix());
    } else {
        println!("\n{} All checks completed successfully.", ok_prefix());
    }
}
