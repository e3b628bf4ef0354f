//! Formatting functions for error output.
//!
//! Results are printed by the caller as plain lines on stdout; everything
//! here writes to stderr so that piping a result stays clean.

use console::style;

/// Format an error message with a red prefix.
pub fn format_error(message: &str) -> String {
    format!("{} {}", style("ERROR:").for_stderr().red().bold(), message)
}

/// Print an error message to stderr.
pub fn display_error(message: &str) {
    eprintln!("{}", format_error(message));
}
