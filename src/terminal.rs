//! Terminal styling helpers.
//!
//! Styling is dropped automatically when the stream is not a terminal.

use console::style;

/// Render a banner or section title.
pub fn title(text: &str) -> String {
    style(text).bold().cyan().to_string()
}

/// Render a menu prompt.
pub fn prompt(text: &str) -> String {
    style(text).bold().to_string()
}

/// Turn colored output off for stdout and stderr.
pub fn disable_colors() {
    console::set_colors_enabled(false);
    console::set_colors_enabled_stderr(false);
}

/// Print a run-ending error to stdout.
pub fn print_error(message: &str) {
    println!("\n{} {}", style("❌ Error:").red().bold(), message);
}
