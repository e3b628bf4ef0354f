//! Numeric-suffix bumping for pre-release and build identifiers
//!
//! `alpha1` becomes `alpha2`, `rc.9` becomes `rc.10`, and an identifier
//! without trailing digits gets `1` appended.

/// Split `value` into the part before its trailing ASCII digits and the digits.
///
/// # Examples
/// ```ignore
/// assert_eq!(split_numeric_suffix("alpha.beta.1"), ("alpha.beta.", "1"));
/// assert_eq!(split_numeric_suffix("alpha"), ("alpha", ""));
/// ```
pub fn split_numeric_suffix(value: &str) -> (&str, &str) {
    let digits = value
        .bytes()
        .rev()
        .take_while(|b| b.is_ascii_digit())
        .count();
    value.split_at(value.len() - digits)
}

/// Add one to a string of ASCII digits, dropping any leading zeros.
fn increment_decimal(digits: &str) -> String {
    let trimmed = digits.trim_start_matches('0');
    let mut out: Vec<u8> = trimmed.bytes().collect();

    let mut carry = true;
    for byte in out.iter_mut().rev() {
        if *byte == b'9' {
            *byte = b'0';
        } else {
            *byte += 1;
            carry = false;
            break;
        }
    }
    if carry {
        out.insert(0, b'1');
    }

    // Only ASCII digits were pushed above.
    String::from_utf8(out).unwrap_or_default()
}

/// Compute the next pre-release or build value.
///
/// A non-empty `new_id` always wins and is returned verbatim. Otherwise the
/// trailing number of `current` is incremented, or `1` is appended when there
/// is none. An empty `current` yields `"1"`.
pub fn bump_suffix(new_id: Option<&str>, current: &str) -> String {
    if let Some(id) = new_id.filter(|id| !id.is_empty()) {
        return id.to_string();
    }

    if current.is_empty() {
        return "1".to_string();
    }

    let (prefix, numeric_suffix) = split_numeric_suffix(current);
    if numeric_suffix.is_empty() {
        format!("{}1", prefix)
    } else {
        format!("{}{}", prefix, increment_decimal(numeric_suffix))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_numeric_suffix() {
        let cases = [
            ("", "", ""),
            ("alpha", "alpha", ""),
            ("1", "", "1"),
            ("alpha1", "alpha", "1"),
            ("alpha.beta.1", "alpha.beta.", "1"),
            ("alpha99", "alpha", "99"),
            ("alpha1beta2", "alpha1beta", "2"),
            ("alpha.1-beta.2", "alpha.1-beta.", "2"),
            ("...", "...", ""),
            ("---", "---", ""),
        ];
        for (input, prefix, digits) in cases {
            assert_eq!(
                split_numeric_suffix(input),
                (prefix, digits),
                "splitting '{}'",
                input
            );
        }
    }

    #[test]
    fn test_increment_decimal() {
        assert_eq!(increment_decimal("0"), "1");
        assert_eq!(increment_decimal("9"), "10");
        assert_eq!(increment_decimal("199"), "200");
        assert_eq!(increment_decimal("007"), "8");
        assert_eq!(increment_decimal("000"), "1");
        assert_eq!(
            increment_decimal("18446744073709551615"),
            "18446744073709551616"
        );
    }

    #[test]
    fn test_bump_suffix_from_empty() {
        assert_eq!(bump_suffix(None, ""), "1");
        assert_eq!(bump_suffix(Some(""), ""), "1");
    }

    #[test]
    fn test_bump_suffix_increments_trailing_number() {
        assert_eq!(bump_suffix(None, "alpha1"), "alpha2");
        assert_eq!(bump_suffix(None, "1"), "2");
        assert_eq!(bump_suffix(None, "alpha.beta.1"), "alpha.beta.2");
        assert_eq!(bump_suffix(None, "alpha99"), "alpha100");
        assert_eq!(bump_suffix(None, "alpha0"), "alpha1");
        assert_eq!(bump_suffix(None, "alpha1beta2"), "alpha1beta3");
    }

    #[test]
    fn test_bump_suffix_drops_leading_zeros() {
        assert_eq!(bump_suffix(None, "build.007"), "build.8");
    }

    #[test]
    fn test_bump_suffix_appends_one() {
        assert_eq!(bump_suffix(None, "alpha"), "alpha1");
        assert_eq!(bump_suffix(None, "rc-"), "rc-1");
    }

    #[test]
    fn test_bump_suffix_override_wins() {
        assert_eq!(bump_suffix(Some("beta"), "alpha"), "beta");
        assert_eq!(bump_suffix(Some("beta"), "beta1"), "beta");
        assert_eq!(bump_suffix(Some("rc.1"), ""), "rc.1");
    }
}
