//! Terminal output for operator-facing commands.
//!
//! Human-readable lines with colored symbols, or one JSON object per line
//! when `--json` is set.

use std::fmt::Display;
use std::sync::OnceLock;

use owo_colors::OwoColorize;
use serde_json::json;

use super::command::ColorChoice;

static JSON_MODE: OnceLock<bool> = OnceLock::new();

/// Apply output settings from global CLI flags.
///
/// Only the first call takes effect.
pub fn configure(json: bool, color: ColorChoice) {
    let _ = JSON_MODE.set(json);
    match color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {}
    }
}

/// Return whether machine-readable JSON output is enabled.
#[must_use]
pub fn is_json() -> bool {
    JSON_MODE.get().copied().unwrap_or(false)
}

fn emit_json_line(kind: &str, payload: serde_json::Value) {
    println!("{}", json!({ "type": kind, "payload": payload }));
}

/// Print the application header with name and version.
pub fn header(version: &str) {
    if is_json() {
        emit_json_line("header", json!({ "app": "tarotbot", "version": version }));
        return;
    }
    println!("{} {}", "tarotbot".bold(), version.dimmed());
}

/// Print a section header.
pub fn section(title: &str) {
    if is_json() {
        emit_json_line("section", json!({ "title": title }));
        return;
    }
    println!();
    println!("{}", title.bold());
}

/// Print a labeled value.
pub fn field(label: &str, value: impl Display) {
    let value = value.to_string();
    if is_json() {
        emit_json_line("field", json!({ "label": label, "value": value }));
        return;
    }
    println!("  {:<14} {}", label.dimmed(), value);
}

/// Print a success line.
pub fn success(message: &str) {
    if is_json() {
        emit_json_line("success", json!({ "message": message }));
        return;
    }
    println!("  {} {}", "✓".green(), message);
}

/// Print a warning line to stderr.
pub fn warning(message: &str) {
    if is_json() {
        eprintln!("{}", json!({ "type": "warning", "payload": { "message": message } }));
        return;
    }
    eprintln!("  {} {}", "⚠".yellow(), message);
}

/// Print an error line to stderr.
pub fn error(message: &str) {
    if is_json() {
        eprintln!("{}", json!({ "type": "error", "payload": { "message": message } }));
        return;
    }
    eprintln!("  {} {}", "×".red(), message);
}
