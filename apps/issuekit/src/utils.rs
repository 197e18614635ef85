//! Supporting helpers: stderr message prefixes.

use owo_colors::OwoColorize;

fn colored() -> bool {
    std::env::var_os("NO_COLOR").is_none()
}

pub fn error_prefix() -> String {
    if colored() {
        "error:".red().bold().to_string()
    } else {
        "error:".to_string()
    }
}

pub fn note_prefix() -> String {
    if colored() {
        "note:".cyan().bold().to_string()
    } else {
        "note:".to_string()
    }
}

pub fn info_prefix() -> String {
    if colored() {
        "info:".blue().bold().to_string()
    } else {
        "info:".to_string()
    }
}
