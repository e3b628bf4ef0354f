// tests/precedence_test.rs
//
// Cross-checks precedence against the `semver` crate, which implements the
// same SemVer 2.0.0 ordering rules.
use semver_tool::{compare, ParsedVersion};
use std::cmp::Ordering;

const CHAIN: &[&str] = &[
    "0.9.9",
    "1.0.0-0",
    "1.0.0-0.0",
    "1.0.0-1",
    "1.0.0-2",
    "1.0.0-10",
    "1.0.0-A",
    "1.0.0-Z",
    "1.0.0-a",
    "1.0.0-alpha",
    "1.0.0-alpha.1",
    "1.0.0-alpha.beta",
    "1.0.0-beta",
    "1.0.0-beta.2",
    "1.0.0-beta.11",
    "1.0.0-rc.1",
    "1.0.0",
    "1.0.1",
    "1.1.0",
    "1.10.0",
    "2.0.0",
];

fn ours(a: &str, b: &str) -> i8 {
    compare(
        &ParsedVersion::parse(a).unwrap(),
        &ParsedVersion::parse(b).unwrap(),
    )
}

fn reference(a: &str, b: &str) -> i8 {
    let a = semver::Version::parse(a).unwrap();
    let b = semver::Version::parse(b).unwrap();
    match a.cmp_precedence(&b) {
        Ordering::Less => -1,
        Ordering::Equal => 0,
        Ordering::Greater => 1,
    }
}

#[test]
fn test_chain_is_strictly_increasing() {
    for pair in CHAIN.windows(2) {
        assert_eq!(ours(pair[0], pair[1]), -1, "{} < {}", pair[0], pair[1]);
    }
}

#[test]
fn test_matches_semver_crate() {
    for a in CHAIN {
        for b in CHAIN {
            assert_eq!(ours(a, b), reference(a, b), "comparing {} with {}", a, b);
        }
    }
}

#[test]
fn test_build_metadata_matches_semver_crate() {
    let pairs = [
        ("1.0.0+a", "1.0.0+b"),
        ("1.0.0-rc.1+001", "1.0.0-rc.1"),
        ("1.0.0+zzz", "1.0.1+aaa"),
    ];
    for (a, b) in pairs {
        assert_eq!(ours(a, b), reference(a, b), "comparing {} with {}", a, b);
    }
}

#[test]
fn test_parse_agrees_with_semver_crate() {
    let inputs = [
        "1.2.3",
        "1.2.3-alpha.1+build.5",
        "1.0.0-x-y-z.--",
        "01.2.3",
        "1.2.3-01",
        "1.2.3-",
        "1.2.3+",
        "1.2",
        "1.2.3.4",
    ];
    for input in inputs {
        assert_eq!(
            ParsedVersion::parse(input).is_ok(),
            semver::Version::parse(input).is_ok(),
            "disagreement on '{}'",
            input
        );
    }
}

#[test]
fn test_format_roundtrip_without_prefix() {
    for input in CHAIN {
        let parsed = ParsedVersion::parse(&format!("v{}", input)).unwrap();
        assert_eq!(parsed.to_string(), *input);
    }
}
