//! Command orchestration
//!
//! Turns a parsed command line into a line of output and an exit code. Kept
//! separate from `main.rs` so that every subcommand can be driven in tests
//! with an in-memory stdin and without depending on clap.

use std::io::BufRead;

use crate::cli::input::{resolve_input, resolve_pair};
use crate::config::Config;
use crate::domain::{self, Field, ParsedVersion};
use crate::error::{Result, SemverError, EXIT_INVALID_VERSION, EXIT_OK};

/// A single invocation of the tool
#[derive(Debug, Clone, PartialEq)]
pub enum Request {
    /// Check a version against the grammar
    Validate { version: String },

    /// Precedence of two versions; one or two raw arguments
    Compare { versions: Vec<String> },

    /// Most significant differing part; one or two raw arguments
    Diff { versions: Vec<String> },

    /// Extract one field
    Get { field: String, version: String },

    /// Increment one field
    Bump {
        field: String,
        version: String,
        prerelease: Option<String>,
        build: Option<String>,
    },

    /// Print the tool's own version banner
    Version,
}

/// What the CLI prints to stdout and the code it exits with
#[derive(Debug, Clone, PartialEq)]
pub struct CommandOutput {
    pub line: String,
    pub exit_code: i32,
}

impl CommandOutput {
    fn success(line: impl Into<String>) -> Self {
        CommandOutput {
            line: line.into(),
            exit_code: EXIT_OK,
        }
    }
}

/// Execute a request
///
/// # Arguments
///
/// * `request` - The command to run
/// * `config` - Loaded configuration (only output settings apply here)
/// * `stdin` - Source for arguments given as `-`
///
/// # Returns
///
/// The output line on success. Domain and argument failures are returned as
/// errors; the caller maps them to exit codes with [`SemverError::exit_code`].
pub fn run_request<R: BufRead>(
    request: Request,
    config: &Config,
    stdin: &mut R,
) -> Result<CommandOutput> {
    match request {
        Request::Validate { version } => {
            let version = resolve_input(&version, stdin)?;
            if domain::is_valid(&version) {
                Ok(CommandOutput::success("valid"))
            } else {
                log::debug!("'{}' rejected by the version grammar", version);
                Ok(CommandOutput {
                    line: "invalid".to_string(),
                    exit_code: EXIT_INVALID_VERSION,
                })
            }
        }
        Request::Compare { versions } => {
            let (left, right) = resolve_pair(&versions, stdin)?;
            let left = ParsedVersion::parse(&left)?;
            let right = ParsedVersion::parse(&right)?;
            let result = domain::compare(&left, &right);
            log::debug!("compare {} with {}: {}", left, right, result);
            Ok(CommandOutput::success(result.to_string()))
        }
        Request::Diff { versions } => {
            let (left, right) = resolve_pair(&versions, stdin)?;
            let left = ParsedVersion::parse(&left)?;
            let right = ParsedVersion::parse(&right)?;
            Ok(CommandOutput::success(domain::diff(&left, &right).to_string()))
        }
        Request::Get { field, version } => {
            let version = ParsedVersion::parse(&resolve_input(&version, stdin)?)?;
            let field: Field = field.parse()?;
            let value = if config.output.json_pretty {
                domain::extract_pretty(&version, field)?
            } else {
                domain::extract(&version, field)?
            };
            Ok(CommandOutput::success(value))
        }
        Request::Bump {
            field,
            version,
            prerelease,
            build,
        } => bump(&field, &version, prerelease, build, stdin),
        Request::Version => Ok(CommandOutput::success(version_banner())),
    }
}

fn bump<R: BufRead>(
    field: &str,
    version: &str,
    prerelease: Option<String>,
    build: Option<String>,
    stdin: &mut R,
) -> Result<CommandOutput> {
    let prerelease = prerelease.filter(|id| !id.is_empty());
    let build = build.filter(|id| !id.is_empty());

    if prerelease.is_some() && field != "prerelease" {
        return Err(SemverError::argument(
            "'prerelease' flag is allowed only for the 'prerelease' field",
        ));
    }
    if build.is_some() && field != "build" {
        return Err(SemverError::argument(
            "'build' flag is allowed only for the 'build' field",
        ));
    }

    let version = ParsedVersion::parse(&resolve_input(version, stdin)?)?;
    let field: Field = field.parse()?;
    let new_id = prerelease.or(build);

    let bumped = version.bump(field, new_id.as_deref())?;
    let rendered = bumped.to_string();

    // Overrides are taken verbatim, so the result can fall outside the grammar.
    if !domain::is_valid(&rendered) {
        return Err(SemverError::invalid_version(rendered));
    }

    log::debug!("bump {} of {}: {}", field, version, rendered);
    Ok(CommandOutput::success(rendered))
}

/// Banner for the `version` subcommand
pub fn version_banner() -> String {
    format!(
        "Version: {}\nCommit: {}\nBuild Time: {}",
        env!("CARGO_PKG_VERSION"),
        option_env!("SEMVER_TOOL_COMMIT").unwrap_or("unknown"),
        option_env!("SEMVER_TOOL_BUILD_TIME").unwrap_or("unknown"),
    )
}
