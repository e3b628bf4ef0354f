//! Version string grammar
//!
//! The accepted syntax is SemVer 2.0.0 with an optional leading `v` or `V`:
//! <https://semver.org/#backusnaur-form-grammar-for-valid-semver-versions>

use regex::{Captures, Regex};
use std::sync::OnceLock;

const NUMERIC: &str = r"0|[1-9][0-9]*";
const PRERELEASE_IDENT: &str = r"0|[1-9][0-9]*|[0-9]*[A-Za-z-][0-9A-Za-z-]*";
const BUILD_IDENT: &str = r"[0-9A-Za-z-]+";

fn version_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| {
        let pattern = format!(
            r"^[vV]?({n})\.({n})\.({n})(?:-((?:{p})(?:\.(?:{p}))*))?(?:\+({b}(?:\.{b})*))?$",
            n = NUMERIC,
            p = PRERELEASE_IDENT,
            b = BUILD_IDENT,
        );
        Regex::new(&pattern).expect("version grammar is a valid regex")
    })
}

/// Raw pieces of a version string that matched the grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VersionParts<'a> {
    pub major: &'a str,
    pub minor: &'a str,
    pub patch: &'a str,
    pub prerelease: &'a str,
    pub build: &'a str,
}

impl<'a> VersionParts<'a> {
    fn from_captures(caps: &Captures<'a>) -> Self {
        let get = |i: usize| caps.get(i).map(|m| m.as_str()).unwrap_or("");
        VersionParts {
            major: get(1),
            minor: get(2),
            patch: get(3),
            prerelease: get(4),
            build: get(5),
        }
    }
}

/// Match `input` against the version grammar and split it into its parts.
///
/// Returns `None` when the string is not a structurally valid version.
/// Numeric parts are guaranteed to be canonical decimal strings but may
/// still be too large for the numeric type the caller converts them to.
pub fn split(input: &str) -> Option<VersionParts<'_>> {
    version_regex()
        .captures(input)
        .map(|caps| VersionParts::from_captures(&caps))
}

/// Check whether `input` is a valid semantic version.
///
/// A single leading `v` or `V` is tolerated. Major, minor and patch must
/// also fit in a `u64`, so that every string accepted here parses.
pub fn is_valid(input: &str) -> bool {
    match split(input) {
        Some(parts) => [parts.major, parts.minor, parts.patch]
            .iter()
            .all(|n| n.parse::<u64>().is_ok()),
        None => false,
    }
}
