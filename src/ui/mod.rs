//! User-facing output on stderr.
//!
//! - `formatter` - styled error lines
//! - This module - terminal setup driven by configuration

pub mod formatter;

pub use formatter::{display_error, format_error};

use crate::config::OutputConfig;

/// Apply output settings from the configuration.
///
/// Colors are only ever used on stderr, and `console` still disables them
/// on its own when stderr is not a terminal.
pub fn configure(output: &OutputConfig) {
    if !output.color {
        console::set_colors_enabled_stderr(false);
    }
}
