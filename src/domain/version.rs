use crate::domain::field::Field;
use crate::domain::grammar;
use crate::domain::identifier::compare_prerelease;
use crate::domain::suffix::bump_suffix;
use crate::error::{Result, SemverError};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Semantic version representation
///
/// Built only by [`ParsedVersion::parse`] and [`ParsedVersion::bump`], so the
/// fields are private and the release triple is derived on demand.
///
/// Equality is structural and includes build metadata. Use
/// [`ParsedVersion::cmp_precedence`] or [`compare`] for SemVer ordering.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ParsedVersion {
    major: u64,
    minor: u64,
    patch: u64,
    prerelease: String,
    build: String,
}

impl ParsedVersion {
    /// Parse a version string (e.g., "v1.2.3-rc.1+build.5")
    ///
    /// A single leading `v` or `V` is accepted and dropped.
    pub fn parse(input: &str) -> Result<Self> {
        let parts = grammar::split(input).ok_or_else(|| SemverError::invalid_version(input))?;

        let number = |raw: &str| {
            raw.parse::<u64>()
                .map_err(|_| SemverError::invalid_version(input))
        };

        Ok(ParsedVersion {
            major: number(parts.major)?,
            minor: number(parts.minor)?,
            patch: number(parts.patch)?,
            prerelease: parts.prerelease.to_string(),
            build: parts.build.to_string(),
        })
    }

    pub fn major(&self) -> u64 {
        self.major
    }

    pub fn minor(&self) -> u64 {
        self.minor
    }

    pub fn patch(&self) -> u64 {
        self.patch
    }

    /// Raw pre-release string; empty for a release version
    pub fn prerelease(&self) -> &str {
        &self.prerelease
    }

    /// Raw build metadata string; empty when absent
    pub fn build(&self) -> &str {
        &self.build
    }

    /// The `major.minor.patch` triple
    pub fn release(&self) -> String {
        format!("{}.{}.{}", self.major, self.minor, self.patch)
    }

    pub fn is_prerelease(&self) -> bool {
        !self.prerelease.is_empty()
    }

    /// Compare by SemVer precedence, ignoring build metadata
    pub fn cmp_precedence(&self, other: &Self) -> Ordering {
        self.major
            .cmp(&other.major)
            .then(self.minor.cmp(&other.minor))
            .then(self.patch.cmp(&other.patch))
            .then_with(|| compare_prerelease(&self.prerelease, &other.prerelease))
    }

    /// Bump version according to the requested field
    ///
    /// - **Major**: major += 1, minor = patch = 0, pre-release and build cleared
    /// - **Minor**: minor += 1, patch = 0, pre-release and build cleared
    /// - **Patch**: patch += 1, pre-release and build cleared
    /// - **Prerelease**: numeric-suffix bump of the pre-release, build cleared
    /// - **Build**: numeric-suffix bump of the build, pre-release kept
    /// - **Release**: pre-release and build cleared
    ///
    /// `new_id` replaces the current pre-release or build value when given;
    /// the other fields ignore it. `Full` is not a bump target.
    pub fn bump(&self, field: Field, new_id: Option<&str>) -> Result<Self> {
        let increment =
            |value: u64| value.checked_add(1).ok_or(SemverError::Overflow(field));

        let bumped = match field {
            Field::Major => ParsedVersion {
                major: increment(self.major)?,
                minor: 0,
                patch: 0,
                prerelease: String::new(),
                build: String::new(),
            },
            Field::Minor => ParsedVersion {
                major: self.major,
                minor: increment(self.minor)?,
                patch: 0,
                prerelease: String::new(),
                build: String::new(),
            },
            Field::Patch => ParsedVersion {
                major: self.major,
                minor: self.minor,
                patch: increment(self.patch)?,
                prerelease: String::new(),
                build: String::new(),
            },
            Field::Prerelease => ParsedVersion {
                prerelease: bump_suffix(new_id, &self.prerelease),
                build: String::new(),
                ..self.clone()
            },
            Field::Build => ParsedVersion {
                build: bump_suffix(new_id, &self.build),
                ..self.clone()
            },
            Field::Release => ParsedVersion {
                prerelease: String::new(),
                build: String::new(),
                ..self.clone()
            },
            Field::Full => return Err(SemverError::unknown_field(field.as_str())),
        };

        log::trace!("bumped {} of {} to {}", field, self, bumped);
        Ok(bumped)
    }
}

impl FromStr for ParsedVersion {
    type Err = SemverError;

    fn from_str(s: &str) -> Result<Self> {
        ParsedVersion::parse(s)
    }
}

impl fmt::Display for ParsedVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        if !self.prerelease.is_empty() {
            write!(f, "-{}", self.prerelease)?;
        }
        if !self.build.is_empty() {
            write!(f, "+{}", self.build)?;
        }
        Ok(())
    }
}

/// Compare two versions by precedence, returning -1, 0 or 1.
pub fn compare(left: &ParsedVersion, right: &ParsedVersion) -> i8 {
    match left.cmp_precedence(right) {
        Ordering::Less => -1,
        Ordering::Equal => 0,
        Ordering::Greater => 1,
    }
}
