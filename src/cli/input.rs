//! Resolution of version arguments, including `-` for stdin.

use crate::error::{Result, SemverError};
use std::io::BufRead;

/// Argument value that means "read this from stdin".
pub const STDIN_MARKER: &str = "-";

/// Return the argument itself, or one trimmed line of stdin for `-`.
///
/// An empty result is rejected before any parsing happens.
pub fn resolve_input<R: BufRead>(arg: &str, stdin: &mut R) -> Result<String> {
    let value = if arg == STDIN_MARKER {
        let mut line = String::new();
        stdin.read_line(&mut line)?;
        log::debug!("read {} bytes from stdin", line.len());
        line.trim().to_string()
    } else {
        arg.to_string()
    };

    if value.is_empty() {
        return Err(SemverError::argument("empty version string"));
    }
    Ok(value)
}

/// Resolve the two versions of `compare` and `diff`.
///
/// Accepts either two arguments, or a single argument (`-` or a literal)
/// holding both versions separated by whitespace.
pub fn resolve_pair<R: BufRead>(args: &[String], stdin: &mut R) -> Result<(String, String)> {
    match args {
        [left, right] => Ok((resolve_input(left, stdin)?, resolve_input(right, stdin)?)),
        [single] => {
            let line = resolve_input(single, stdin)?;
            let versions: Vec<&str> = line.split_whitespace().collect();
            match versions.as_slice() {
                [left, right] => Ok((left.to_string(), right.to_string())),
                _ => Err(SemverError::argument("two versions should be provided")),
            }
        }
        _ => Err(SemverError::argument("two versions should be provided")),
    }
}
