//! Loose version string parsing
//!
//! A version key is the sequence of digit runs found in a version string, so
//! "5.1.2", "v5.1.2" and "release-5_1_2" all produce the same key. Keys of
//! different lengths compare as if the shorter one were padded with zeros.

use std::cmp::Ordering;
use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

static DIGIT_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]+").expect("digit run pattern is valid"));

/// A single non-negative integer component of arbitrary size.
///
/// Stored as its decimal digits with leading zeros stripped, so ordering is
/// length first, then lexicographic.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Component(String);

impl Component {
    fn from_digits(digits: &str) -> Self {
        let trimmed = digits.trim_start_matches('0');
        Self(trimmed.to_string())
    }

    fn is_zero(&self) -> bool {
        self.0.is_empty()
    }
}

impl Ord for Component {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0
            .len()
            .cmp(&other.0.len())
            .then_with(|| self.0.cmp(&other.0))
    }
}

impl PartialOrd for Component {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            f.write_str("0")
        } else {
            f.write_str(&self.0)
        }
    }
}

/// Ordered numeric decomposition of a version string. Never empty.
#[derive(Debug, Clone)]
pub struct VersionKey(Vec<Component>);

impl VersionKey {
    pub fn components(&self) -> &[Component] {
        &self.0
    }
}

/// Compare two keys position by position, treating missing positions as zero.
pub fn compare_keys(a: &VersionKey, b: &VersionKey) -> Ordering {
    let zero = Component(String::new());
    let len = a.0.len().max(b.0.len());

    (0..len)
        .map(|i| {
            let left = a.0.get(i).unwrap_or(&zero);
            let right = b.0.get(i).unwrap_or(&zero);
            left.cmp(right)
        })
        .find(|ordering| ordering.is_ne())
        .unwrap_or(Ordering::Equal)
}

impl Ord for VersionKey {
    fn cmp(&self, other: &Self) -> Ordering {
        compare_keys(self, other)
    }
}

impl PartialOrd for VersionKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// Equality follows the padded comparison, so "5.1" == "5.1.0".
impl PartialEq for VersionKey {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other).is_eq()
    }
}

impl Eq for VersionKey {}

impl fmt::Display for VersionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, component) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            write!(f, "{}", component)?;
        }
        Ok(())
    }
}

/// Parse a free-form version string into a [`VersionKey`].
///
/// Returns `None` when the text contains no ASCII digit.
///
/// Examples:
/// - "5.1.2" -> [5, 1, 2]
/// - "v4.3.16-M1" -> [4, 3, 16, 1]
/// - "latest" -> None
pub fn parse_version(text: &str) -> Option<VersionKey> {
    let components: Vec<Component> = DIGIT_RUN
        .find_iter(text)
        .map(|m| Component::from_digits(m.as_str()))
        .collect();

    if components.is_empty() {
        None
    } else {
        Some(VersionKey(components))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn key(text: &str) -> VersionKey {
        parse_version(text).unwrap()
    }

    #[rstest]
    #[case("5.1.2", "5.1.2")]
    #[case("v4.3.16", "4.3.16")]
    #[case("4.3.16-M1", "4.3.16.1")]
    #[case("release_2024_01", "2024.1")]
    #[case("007", "7")]
    #[case("0.0", "0.0")]
    #[case("12", "12")]
    fn parse_version_extracts_digit_runs(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(key(input).to_string(), expected);
    }

    #[rstest]
    #[case("")]
    #[case("latest")]
    #[case("snapshot-")]
    #[case("/")]
    #[case("٣.٤")] // non-ASCII digits are not version digits
    fn parse_version_returns_none_without_digits(#[case] input: &str) {
        assert!(parse_version(input).is_none());
    }

    #[test]
    fn parse_version_does_not_overflow_on_huge_components() {
        let huge = "184467440737095516150000000000.99999999999999999999999";
        let parsed = key(huge);

        assert_eq!(parsed.components().len(), 2);
        assert!(parsed > key("18446744073709551615.0"));
    }

    #[rstest]
    #[case("5.1", "5.1.0", Ordering::Equal)]
    #[case("5.1.0.0", "5.1", Ordering::Equal)]
    #[case("5.1.1", "5.1.2", Ordering::Less)]
    #[case("5.2.0", "5.1.12", Ordering::Greater)]
    #[case("10.0", "9.99.99", Ordering::Greater)]
    #[case("4.3.16", "5", Ordering::Less)]
    #[case("5.0.1", "5", Ordering::Greater)]
    #[case("05.01", "5.1", Ordering::Equal)]
    fn compare_keys_pads_missing_positions_with_zero(
        #[case] a: &str,
        #[case] b: &str,
        #[case] expected: Ordering,
    ) {
        assert_eq!(compare_keys(&key(a), &key(b)), expected);
    }

    #[test]
    fn compare_keys_is_antisymmetric_and_transitive() {
        let samples = [
            "0", "0.0.1", "1", "1.0.0.1", "4.3.16", "5", "5.1", "5.1.0", "5.1.2", "5.2.0", "10",
            "100.0.0",
        ];
        let keys: Vec<VersionKey> = samples.iter().map(|s| key(s)).collect();

        for a in &keys {
            for b in &keys {
                assert_eq!(compare_keys(a, b), compare_keys(b, a).reverse());
                for c in &keys {
                    let ab = compare_keys(a, b);
                    let bc = compare_keys(b, c);
                    if ab != Ordering::Greater && bc != Ordering::Greater {
                        assert_ne!(compare_keys(a, c), Ordering::Greater, "{a} {b} {c}");
                    }
                    if ab == Ordering::Equal && bc == Ordering::Equal {
                        assert_eq!(compare_keys(a, c), Ordering::Equal);
                    }
                }
            }
        }
    }
}
