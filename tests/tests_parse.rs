//! Parsing and error-reporting behavior of the full pipeline.

use rangespec::{Decimal, Range, RangeError, RangeSet, Width};
use rstest::rstest;

fn dec(s: &str) -> Decimal {
    s.parse().unwrap()
}

#[test]
fn test_open_range_expansion() {
    let set = RangeSet::parse(Some("-3,5,7,10-13,20-"), None).unwrap();

    assert_eq!(set.from(), Some(dec("1")));
    assert_eq!(set.to(), Some(Decimal::from(i64::MAX)));
    assert_eq!(set.len(), 5);

    let rendered: Vec<String> = set.ranges().iter().map(ToString::to_string).collect();
    assert_eq!(
        rendered,
        vec!["1-3", "5", "7", "10-13", "20-9223372036854775807"]
    );
}

#[test]
fn test_open_range_with_explicit_max() {
    let set = RangeSet::parse(Some("20-"), Some(dec("25"))).unwrap();
    assert_eq!(set.to_range_string(), "20-25");

    // open item collapsing onto the maximum itself
    let set = RangeSet::parse(Some("25-"), Some(dec("25"))).unwrap();
    assert_eq!(set.to_range_string(), "25");
}

#[test]
fn test_leading_serial_starts_at_one() {
    let set = RangeSet::parse(Some("-3"), None).unwrap();
    assert_eq!(set.to_range_string(), "1-3");
}

#[rstest]
#[case("3-4,1-2,0-4", "0-4")]
#[case("1,2,3", "1-3")]
#[case("10-13,5,7,1-3", "1-3,5,7,10-13")]
#[case("1-5,3-8", "1-8")]
#[case("1-10,5", "1-10")]
#[case("0", "0")]
#[case("7,7,7", "7")]
#[case(" 1 - 3 , 5 ", "1-3,5")]
fn test_canonicalization(#[case] spec: &str, #[case] expected: &str) {
    let set = RangeSet::parse(Some(spec), None).unwrap();
    assert_eq!(set.to_range_string(), expected);
}

#[test]
fn test_values_beyond_i64_classify_as_decimal() {
    let max = dec("9223372036854775810");
    let set = RangeSet::parse(Some("9223372036854775807-"), Some(max)).unwrap();
    assert_eq!(
        set.to_range_string(),
        "9223372036854775807-9223372036854775810"
    );
    assert_eq!(set.value_class(), Width::Decimal);
    assert!(set.contains_value(dec("9223372036854775809")));
}

#[test]
fn test_singleton_subrange_is_distinct_variant() {
    let set = RangeSet::parse(Some("7"), None).unwrap();
    assert!(matches!(set.ranges()[0], Range::Singleton(_)));

    let set = RangeSet::parse(Some("7-7"), None).unwrap();
    assert!(matches!(set.ranges()[0], Range::Singleton(_)));
    assert_eq!(set.to_range_string(), "7");
}

#[rstest]
#[case("1-3,abc,4", 5, "abc")]
#[case("abc", 1, "abc")]
#[case(",1", 1, ",")]
#[case("1,,2", 3, ",")]
#[case("1-2-3", 4, "-")]
fn test_illegal_format_positions(#[case] spec: &str, #[case] pos: usize, #[case] text: &str) {
    let err = RangeSet::parse(Some(spec), None).unwrap_err();
    assert_eq!(
        err,
        RangeError::IllegalFormat {
            pos,
            text: text.to_string()
        }
    );
}

#[rstest]
#[case("1abc", 2, "abc")]
#[case("1-3?!", 4, "?!")]
#[case("5-@", 3, "@")]
fn test_invalid_characters_positions(#[case] spec: &str, #[case] pos: usize, #[case] text: &str) {
    let err = RangeSet::parse(Some(spec), None).unwrap_err();
    assert_eq!(
        err,
        RangeError::InvalidCharacters {
            pos,
            text: text.to_string()
        }
    );
}

#[test]
fn test_error_message_shape() {
    let err = RangeSet::parse(Some("1-3,abc,4"), None).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Illegal number range format [pos:5, str:\"abc\"]"
    );
}

#[test]
fn test_trailing_delimiter_is_rejected() {
    let err = RangeSet::parse(Some("1-3,"), None).unwrap_err();
    assert!(matches!(err, RangeError::IllegalFormat { pos: 5, .. }));
}

#[test]
fn test_failure_yields_no_partial_set() {
    // the first two items are fine; the set must still not materialize
    let result = RangeSet::parse(Some("1-3,5,xyz"), None);
    assert!(result.is_err());
}
