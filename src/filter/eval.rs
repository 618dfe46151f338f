//! Filter condition evaluation

use std::cmp::Ordering;

use super::condition::SearchCondition;
use super::value::{parse_datetime, parse_decimal, FieldValue};

/// Decide whether `candidate` passes `condition` against the filter `value`.
///
/// Null handling:
/// - `IsNull`/`IsNotNull` look only at the candidate.
/// - Both null: equality-like conditions and the inclusive orderings pass.
/// - Exactly one null: only the negated conditions (`NotEquals`, `ContainsNot`) pass.
pub fn evaluate(condition: SearchCondition, value: Option<&str>, candidate: Option<&FieldValue>) -> bool {
    use SearchCondition::*;

    match condition {
        IsNull => return candidate.is_none(),
        IsNotNull => return candidate.is_some(),
        _ => {}
    }

    match (candidate, value) {
        (None, None) => matches!(
            condition,
            Equals | Contains | StartsWith | EndsWith | GreaterThanOrEqualTo | LessThanOrEqualTo
        ),
        (None, Some(_)) | (Some(_), None) => matches!(condition, NotEquals | ContainsNot),
        (Some(candidate), Some(value)) => evaluate_present(condition, candidate, value),
    }
}

fn evaluate_present(condition: SearchCondition, candidate: &FieldValue, value: &str) -> bool {
    use SearchCondition::*;

    match condition {
        Equals => candidate.to_string() == value,
        NotEquals => candidate.to_string() != value,
        Contains => candidate.to_string().contains(value),
        ContainsNot => !candidate.to_string().contains(value),
        StartsWith => candidate.to_string().starts_with(value),
        EndsWith => candidate.to_string().ends_with(value),
        GreaterThan => compare(candidate, value).map_or(false, |o| o == Ordering::Greater),
        GreaterThanOrEqualTo => compare(candidate, value).map_or(false, |o| o != Ordering::Less),
        LessThan => compare(candidate, value).map_or(false, |o| o == Ordering::Less),
        LessThanOrEqualTo => compare(candidate, value).map_or(false, |o| o != Ordering::Greater),
        // candidate is present here
        IsNull => false,
        IsNotNull => true,
    }
}

/// Order `candidate` against `value` parsed to the candidate's own type.
/// None when the type has no ordering or the string does not parse.
fn compare(candidate: &FieldValue, value: &str) -> Option<Ordering> {
    match candidate {
        FieldValue::DateTime(dt) => parse_datetime(value).map(|other| dt.cmp(&other)),
        FieldValue::Decimal(d) => parse_decimal(value).and_then(|other| d.partial_cmp(&other)),
        FieldValue::Integer(i) => compare_integer(*i, value),
        FieldValue::String(_) | FieldValue::Boolean(_) => None,
    }
}

/// Integers compare exactly against plain decimal text; other numeric forms
/// such as exponents go through `f64`.
fn compare_integer(candidate: i64, value: &str) -> Option<Ordering> {
    let text = value.trim();
    if let Ok(other) = text.parse::<i64>() {
        return Some(candidate.cmp(&other));
    }
    match floor_decimal(text) {
        Some((floor, false)) => Some(i128::from(candidate).cmp(&floor)),
        // value lies strictly between floor and floor + 1
        Some((floor, true)) if i128::from(candidate) <= floor => Some(Ordering::Less),
        Some((_, true)) => Some(Ordering::Greater),
        None => parse_decimal(text).and_then(|other| (candidate as f64).partial_cmp(&other)),
    }
}

/// Split `[+-]digits[.digits]` into its floor and whether a nonzero fraction remains.
fn floor_decimal(text: &str) -> Option<(i128, bool)> {
    let (negative, unsigned) = match text.as_bytes().first()? {
        b'-' => (true, &text[1..]),
        b'+' => (false, &text[1..]),
        _ => (false, text),
    };
    let (whole, fraction) = unsigned.split_once('.').unwrap_or((unsigned, ""));
    if whole.is_empty() && fraction.is_empty() {
        return None;
    }
    if !whole.bytes().chain(fraction.bytes()).all(|b| b.is_ascii_digit()) {
        return None;
    }
    let whole: i128 = if whole.is_empty() { 0 } else { whole.parse().ok()? };
    let has_fraction = fraction.bytes().any(|b| b != b'0');
    let floor = match (negative, has_fraction) {
        (false, _) => whole,
        (true, false) => -whole,
        (true, true) => -whole - 1,
    };
    Some((floor, has_fraction))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use SearchCondition::*;

    #[test]
    fn test_both_null_table() {
        let expected = [
            (Equals, true),
            (NotEquals, false),
            (Contains, true),
            (ContainsNot, false),
            (StartsWith, true),
            (EndsWith, true),
            (GreaterThan, false),
            (GreaterThanOrEqualTo, true),
            (LessThan, false),
            (LessThanOrEqualTo, true),
            (IsNull, true),
            (IsNotNull, false),
        ];
        for (condition, result) in expected {
            assert_eq!(evaluate(condition, None, None), result, "{}", condition);
        }
    }

    #[test]
    fn test_one_null_table() {
        let candidate = FieldValue::from("x");
        for condition in SearchCondition::ALL {
            if matches!(condition, IsNull | IsNotNull) {
                continue;
            }
            let expected = matches!(condition, NotEquals | ContainsNot);
            assert_eq!(evaluate(condition, Some("x"), None), expected, "{} null candidate", condition);
            assert_eq!(evaluate(condition, None, Some(&candidate)), expected, "{} null value", condition);
        }
    }

    #[test]
    fn test_string_conditions() {
        let abc = FieldValue::from("abc");
        assert!(evaluate(Equals, Some("abc"), Some(&abc)));
        assert!(!evaluate(Equals, Some("abd"), Some(&abc)));
        assert!(evaluate(NotEquals, Some("abd"), Some(&abc)));

        let hello = FieldValue::from("hello world");
        assert!(evaluate(Contains, Some("wor"), Some(&hello)));
        assert!(!evaluate(ContainsNot, Some("wor"), Some(&hello)));
        assert!(evaluate(ContainsNot, Some("xyz"), Some(&hello)));
        assert!(evaluate(StartsWith, Some("hello"), Some(&hello)));
        assert!(!evaluate(StartsWith, Some("world"), Some(&hello)));
        assert!(evaluate(EndsWith, Some("world"), Some(&hello)));
        assert!(!evaluate(Contains, Some("WOR"), Some(&hello)));
    }

    #[test]
    fn test_string_conditions_use_display_form() {
        assert!(evaluate(Equals, Some("42"), Some(&FieldValue::Integer(42))));
        assert!(evaluate(Equals, Some("true"), Some(&FieldValue::Boolean(true))));
        assert!(evaluate(StartsWith, Some("2024-"), Some(&FieldValue::DateTime(
            Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap()
        ))));
    }

    #[test]
    fn test_integer_ordering() {
        let ten = FieldValue::Integer(10);
        let five = FieldValue::Integer(5);
        assert!(evaluate(GreaterThan, Some("5"), Some(&ten)));
        assert!(!evaluate(GreaterThan, Some("10"), Some(&five)));
        assert!(evaluate(GreaterThanOrEqualTo, Some("10"), Some(&ten)));
        assert!(evaluate(LessThan, Some("10"), Some(&five)));
        assert!(evaluate(LessThanOrEqualTo, Some("5"), Some(&five)));
        assert!(!evaluate(LessThan, Some("5"), Some(&five)));
        assert!(evaluate(GreaterThan, Some("9.5"), Some(&ten)));
        assert!(!evaluate(GreaterThan, Some("10.5"), Some(&ten)));
    }

    #[test]
    fn test_integer_against_fraction_is_exact() {
        let big = FieldValue::Integer(9_007_199_254_740_993);
        assert!(evaluate(GreaterThan, Some("9007199254740992.5"), Some(&big)));
        assert!(evaluate(LessThan, Some("9007199254740993.25"), Some(&big)));
        assert!(evaluate(GreaterThanOrEqualTo, Some("9007199254740993.000"), Some(&big)));

        assert!(evaluate(LessThan, Some("-2.5"), Some(&FieldValue::Integer(-3))));
        assert!(evaluate(GreaterThan, Some("-2.5"), Some(&FieldValue::Integer(-2))));
        assert!(evaluate(LessThan, Some("-0.5"), Some(&FieldValue::Integer(-1))));
        assert!(evaluate(GreaterThan, Some("+.5"), Some(&FieldValue::Integer(1))));
        assert!(evaluate(LessThan, Some("1e3"), Some(&FieldValue::Integer(999))));
        assert!(!evaluate(LessThan, Some("1.2.3"), Some(&FieldValue::Integer(1))));
    }

    #[test]
    fn test_decimal_ordering() {
        let value = FieldValue::Decimal(2.75);
        assert!(evaluate(GreaterThan, Some("2.5"), Some(&value)));
        assert!(evaluate(LessThan, Some("3"), Some(&value)));
        assert!(evaluate(GreaterThanOrEqualTo, Some("2.75"), Some(&value)));
        assert!(!evaluate(GreaterThan, Some("abc"), Some(&value)));
    }

    #[test]
    fn test_datetime_ordering() {
        let new_year = FieldValue::DateTime(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap());
        assert!(evaluate(GreaterThanOrEqualTo, Some("2024-01-01"), Some(&new_year)));
        assert!(evaluate(LessThanOrEqualTo, Some("2024-01-01T00:00:00Z"), Some(&new_year)));
        assert!(evaluate(GreaterThan, Some("2023-12-31"), Some(&new_year)));
        assert!(!evaluate(LessThan, Some("2023-12-31"), Some(&new_year)));
        assert!(!evaluate(GreaterThan, Some("10"), Some(&new_year)));
    }

    #[test]
    fn test_unsupported_types_never_order() {
        let text = FieldValue::from("5");
        assert!(!evaluate(GreaterThan, Some("10"), Some(&text)));
        assert!(!evaluate(LessThan, Some("10"), Some(&text)));
        assert!(!evaluate(GreaterThanOrEqualTo, Some("5"), Some(&text)));
        assert!(!evaluate(LessThanOrEqualTo, Some("1"), Some(&FieldValue::Boolean(true))));
    }

    #[test]
    fn test_null_checks_ignore_value() {
        let present = FieldValue::from("x");
        assert!(!evaluate(IsNull, Some("anything"), Some(&present)));
        assert!(!evaluate(IsNull, None, Some(&present)));
        assert!(evaluate(IsNull, Some("anything"), None));
        assert!(evaluate(IsNotNull, None, Some(&present)));
        assert!(!evaluate(IsNotNull, Some("x"), None));
    }
}
