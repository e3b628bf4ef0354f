use crate::domain::ParsedVersion;
use std::fmt;

/// Most significant part in which two versions differ
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Difference {
    Major,
    Minor,
    Patch,
    Prerelease,
    Build,
    Equal,
}

impl Difference {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difference::Major => "major",
            Difference::Minor => "minor",
            Difference::Patch => "patch",
            Difference::Prerelease => "prerelease",
            Difference::Build => "build",
            Difference::Equal => "equal",
        }
    }
}

impl fmt::Display for Difference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Find the first differing part, checked in the order major, minor, patch,
/// prerelease, build.
///
/// Pre-release and build are compared as raw strings, so build metadata
/// counts here even though it never affects precedence.
pub fn diff(left: &ParsedVersion, right: &ParsedVersion) -> Difference {
    if left.major() != right.major() {
        Difference::Major
    } else if left.minor() != right.minor() {
        Difference::Minor
    } else if left.patch() != right.patch() {
        Difference::Patch
    } else if left.prerelease() != right.prerelease() {
        Difference::Prerelease
    } else if left.build() != right.build() {
        Difference::Build
    } else {
        Difference::Equal
    }
}
