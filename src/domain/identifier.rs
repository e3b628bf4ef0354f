//! Pre-release identifier precedence
//!
//! Implements the identifier ordering rules of semver.org:
//! https://semver.org/#spec-item-11

use std::cmp::Ordering;

/// A single dot-separated pre-release identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Identifier<'a> {
    /// Identifier made of ASCII digits only
    Numeric(&'a str),
    /// Any other identifier (letters, hyphens, or digits mixed with those)
    Alphanumeric(&'a str),
}

impl<'a> Identifier<'a> {
    /// Classify a raw identifier
    pub fn new(raw: &'a str) -> Self {
        if !raw.is_empty() && raw.bytes().all(|b| b.is_ascii_digit()) {
            Identifier::Numeric(raw)
        } else {
            Identifier::Alphanumeric(raw)
        }
    }

    pub fn as_str(&self) -> &'a str {
        match self {
            Identifier::Numeric(s) | Identifier::Alphanumeric(s) => *s,
        }
    }
}

impl Ord for Identifier<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Identifier::Numeric(a), Identifier::Numeric(b)) => compare_numeric(a, b),
            (Identifier::Numeric(_), Identifier::Alphanumeric(_)) => Ordering::Less,
            (Identifier::Alphanumeric(_), Identifier::Numeric(_)) => Ordering::Greater,
            (Identifier::Alphanumeric(a), Identifier::Alphanumeric(b)) => {
                a.as_bytes().cmp(b.as_bytes())
            }
        }
    }
}

impl PartialOrd for Identifier<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Compare two digit strings by value without converting them to integers.
fn compare_numeric(a: &str, b: &str) -> Ordering {
    let a = a.trim_start_matches('0');
    let b = b.trim_start_matches('0');
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

/// Compare two raw pre-release strings by precedence.
///
/// An empty string means "no pre-release" and ranks above any pre-release.
/// Otherwise identifiers are compared left to right and a shorter list that
/// is a prefix of the longer one ranks lower.
pub fn compare_prerelease(left: &str, right: &str) -> Ordering {
    match (left.is_empty(), right.is_empty()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => {
            let left = left.split('.').map(Identifier::new);
            let right = right.split('.').map(Identifier::new);
            left.cmp(right)
        }
    }
}
