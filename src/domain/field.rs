use crate::domain::ParsedVersion;
use crate::error::{Result, SemverError};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// A named part of a version, used by `get` and `bump`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Major,
    Minor,
    Patch,
    Prerelease,
    Build,
    Release,
    /// The whole structure; also accepted as `json`
    Full,
}

impl Field {
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Major => "major",
            Field::Minor => "minor",
            Field::Patch => "patch",
            Field::Prerelease => "prerelease",
            Field::Build => "build",
            Field::Release => "release",
            Field::Full => "full",
        }
    }
}

impl FromStr for Field {
    type Err = SemverError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "major" => Ok(Field::Major),
            "minor" => Ok(Field::Minor),
            "patch" => Ok(Field::Patch),
            "prerelease" => Ok(Field::Prerelease),
            "build" => Ok(Field::Build),
            "release" => Ok(Field::Release),
            "full" | "json" => Ok(Field::Full),
            other => Err(SemverError::unknown_field(other)),
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Flat machine-readable view of a version
#[derive(Debug, Serialize)]
struct VersionRecord<'a> {
    major: u64,
    minor: u64,
    patch: u64,
    prerelease: &'a str,
    build: &'a str,
    release: String,
}

impl<'a> From<&'a ParsedVersion> for VersionRecord<'a> {
    fn from(version: &'a ParsedVersion) -> Self {
        VersionRecord {
            major: version.major(),
            minor: version.minor(),
            patch: version.patch(),
            prerelease: version.prerelease(),
            build: version.build(),
            release: version.release(),
        }
    }
}

/// Render a single field of `version` as a string.
///
/// Numeric fields are rendered in decimal, `prerelease` and `build` verbatim
/// (possibly empty), and `Full` as a compact JSON object with the keys
/// `major`, `minor`, `patch`, `prerelease`, `build` and `release`.
pub fn extract(version: &ParsedVersion, field: Field) -> Result<String> {
    render(version, field, false)
}

/// Same as [`extract`], but `Full` is rendered as indented JSON.
pub fn extract_pretty(version: &ParsedVersion, field: Field) -> Result<String> {
    render(version, field, true)
}

fn render(version: &ParsedVersion, field: Field, pretty: bool) -> Result<String> {
    let value = match field {
        Field::Major => version.major().to_string(),
        Field::Minor => version.minor().to_string(),
        Field::Patch => version.patch().to_string(),
        Field::Prerelease => version.prerelease().to_string(),
        Field::Build => version.build().to_string(),
        Field::Release => version.release(),
        Field::Full => {
            let record = VersionRecord::from(version);
            if pretty {
                serde_json::to_string_pretty(&record)?
            } else {
                serde_json::to_string(&record)?
            }
        }
    };
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(s: &str) -> ParsedVersion {
        ParsedVersion::parse(s).unwrap()
    }

    #[test]
    fn test_field_parse() {
        assert_eq!("major".parse::<Field>().unwrap(), Field::Major);
        assert_eq!("prerelease".parse::<Field>().unwrap(), Field::Prerelease);
        assert_eq!("full".parse::<Field>().unwrap(), Field::Full);
        assert_eq!("json".parse::<Field>().unwrap(), Field::Full);
    }

    #[test]
    fn test_field_parse_unknown() {
        let err = "prerel".parse::<Field>().unwrap_err();
        assert!(matches!(err, SemverError::UnknownField(ref name) if name == "prerel"));
        assert!("MAJOR".parse::<Field>().is_err());
        assert!("".parse::<Field>().is_err());
    }

    #[test]
    fn test_field_display_roundtrip() {
        let all = [
            Field::Major,
            Field::Minor,
            Field::Patch,
            Field::Prerelease,
            Field::Build,
            Field::Release,
            Field::Full,
        ];
        for field in all {
            assert_eq!(field.to_string().parse::<Field>().unwrap(), field);
        }
    }

    #[test]
    fn test_extract_numeric_fields() {
        let version = v("v10.20.30-rc.1+b7");
        assert_eq!(extract(&version, Field::Major).unwrap(), "10");
        assert_eq!(extract(&version, Field::Minor).unwrap(), "20");
        assert_eq!(extract(&version, Field::Patch).unwrap(), "30");
    }

    #[test]
    fn test_extract_release() {
        let version = v("1.2.3-alpha+build");
        assert_eq!(extract(&version, Field::Release).unwrap(), "1.2.3");
        assert_eq!(extract(&version, Field::Prerelease).unwrap(), "alpha");
        assert_eq!(extract(&version, Field::Build).unwrap(), "build");
    }

    #[test]
    fn test_extract_empty_parts() {
        let version = v("1.2.3");
        assert_eq!(extract(&version, Field::Prerelease).unwrap(), "");
        assert_eq!(extract(&version, Field::Build).unwrap(), "");
    }

    #[test]
    fn test_extract_full_json() {
        let version = v("1.2.3-beta.1+exp.sha");
        let json = extract(&version, Field::Full).unwrap();
        assert_eq!(
            json,
            r#"{"major":1,"minor":2,"patch":3,"prerelease":"beta.1","build":"exp.sha","release":"1.2.3"}"#
        );
    }

    #[test]
    fn test_extract_full_pretty_json() {
        let version = v("0.1.0");
        let json = extract_pretty(&version, Field::Full).unwrap();
        assert!(json.contains('\n'));

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["minor"], 1);
        assert_eq!(value["prerelease"], "");
        assert_eq!(value["release"], "0.1.0");
    }

    #[test]
    fn test_extract_pretty_plain_fields_unchanged() {
        let version = v("3.4.5");
        assert_eq!(extract_pretty(&version, Field::Patch).unwrap(), "5");
    }
}
