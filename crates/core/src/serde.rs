//! Serde helper functions for query-string deserialization.
//!
//! Search parameters arrive as strings, and an empty value such as `title=`
//! means "no constraint", so these helpers map empty strings to None.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer};

/// Deserialize an optional string, treating empty strings as None.
pub fn deserialize_optional_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    Ok(s.filter(|s| !s.trim().is_empty()))
}

/// Deserialize an optional i64, treating empty strings as None.
pub fn deserialize_optional_i64<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    match s {
        Some(s) if !s.trim().is_empty() => s
            .trim()
            .parse::<i64>()
            .map(Some)
            .map_err(serde::de::Error::custom),
        _ => Ok(None),
    }
}

/// Deserialize an optional NaiveDate, treating empty strings as None.
/// Accepts YYYY-MM-DD or an ISO 8601 datetime, whose date part is kept.
/// Years outside 1..=9999 are rejected.
pub fn deserialize_optional_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    match s {
        Some(s) if !s.trim().is_empty() => parse_date(s.trim())
            .map(Some)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid date: {s}"))),
        _ => Ok(None),
    }
}

/// Stored dates are compared as `YYYY-MM-DD` text, which only orders
/// correctly for four-digit years.
const SUPPORTED_YEARS: std::ops::RangeInclusive<i32> = 1..=9999;

fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(s).ok().map(|dt| dt.date_naive()))
        .or_else(|| {
            NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f")
                .ok()
                .map(|dt| dt.date())
        })
        .filter(|date| SUPPORTED_YEARS.contains(&date.year()))
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Test struct that uses the deserializer functions
    #[derive(Debug, Deserialize, PartialEq)]
    struct TestStruct {
        #[serde(default, deserialize_with = "deserialize_optional_string")]
        string_field: Option<String>,
        #[serde(default, deserialize_with = "deserialize_optional_i64")]
        int_field: Option<i64>,
        #[serde(default, deserialize_with = "deserialize_optional_date")]
        date_field: Option<NaiveDate>,
    }

    #[test]
    fn test_deserialize_optional_string_empty() {
        let json = r#"{"string_field": ""}"#;
        let result: TestStruct = serde_json::from_str(json).unwrap();
        assert_eq!(result.string_field, None);
    }

    #[test]
    fn test_deserialize_optional_string_whitespace() {
        let json = r#"{"string_field": "   "}"#;
        let result: TestStruct = serde_json::from_str(json).unwrap();
        assert_eq!(result.string_field, None);
    }

    #[test]
    fn test_deserialize_optional_string_value() {
        let json = r#"{"string_field": "Dune"}"#;
        let result: TestStruct = serde_json::from_str(json).unwrap();
        assert_eq!(result.string_field, Some("Dune".to_string()));
    }

    #[test]
    fn test_deserialize_optional_string_missing() {
        let json = r#"{}"#;
        let result: TestStruct = serde_json::from_str(json).unwrap();
        assert_eq!(result, TestStruct {
            string_field: None,
            int_field: None,
            date_field: None,
        });
    }

    #[test]
    fn test_deserialize_optional_i64_value() {
        let json = r#"{"int_field": "42"}"#;
        let result: TestStruct = serde_json::from_str(json).unwrap();
        assert_eq!(result.int_field, Some(42));
    }

    #[test]
    fn test_deserialize_optional_i64_empty() {
        let json = r#"{"int_field": ""}"#;
        let result: TestStruct = serde_json::from_str(json).unwrap();
        assert_eq!(result.int_field, None);
    }

    #[test]
    fn test_deserialize_optional_i64_invalid() {
        let json = r#"{"int_field": "abc"}"#;
        let result: Result<TestStruct, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn test_deserialize_optional_date_valid() {
        let json = r#"{"date_field": "2025-01-15"}"#;
        let result: TestStruct = serde_json::from_str(json).unwrap();
        assert_eq!(
            result.date_field,
            Some(NaiveDate::from_ymd_opt(2025, 1, 15).unwrap())
        );
    }

    #[test]
    fn test_deserialize_optional_date_from_datetime() {
        let json = r#"{"date_field": "2021-06-15T00:00:00"}"#;
        let result: TestStruct = serde_json::from_str(json).unwrap();
        assert_eq!(
            result.date_field,
            Some(NaiveDate::from_ymd_opt(2021, 6, 15).unwrap())
        );
    }

    #[test]
    fn test_deserialize_optional_date_from_rfc3339() {
        let json = r#"{"date_field": "2021-06-15T08:30:00Z"}"#;
        let result: TestStruct = serde_json::from_str(json).unwrap();
        assert_eq!(
            result.date_field,
            Some(NaiveDate::from_ymd_opt(2021, 6, 15).unwrap())
        );
    }

    #[test]
    fn test_deserialize_optional_date_empty() {
        let json = r#"{"date_field": ""}"#;
        let result: TestStruct = serde_json::from_str(json).unwrap();
        assert_eq!(result.date_field, None);
    }

    #[test]
    fn test_deserialize_optional_date_invalid() {
        let json = r#"{"date_field": "not-a-date"}"#;
        let result: Result<TestStruct, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn test_deserialize_optional_date_rejects_five_digit_year() {
        let json = r#"{"date_field": "+10000-01-01"}"#;
        let result: Result<TestStruct, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn test_deserialize_optional_date_rejects_year_zero_and_negative() {
        for value in ["0000-01-01", "-0001-06-15", "0000-12-31T00:00:00"] {
            let json = format!(r#"{{"date_field": "{value}"}}"#);
            let result: Result<TestStruct, _> = serde_json::from_str(&json);
            assert!(result.is_err(), "{value} should be rejected");
        }
    }

    #[test]
    fn test_deserialize_optional_date_accepts_year_bounds() {
        let json = r#"{"date_field": "0001-01-01"}"#;
        let result: TestStruct = serde_json::from_str(json).unwrap();
        assert_eq!(
            result.date_field,
            Some(NaiveDate::from_ymd_opt(1, 1, 1).unwrap())
        );

        let json = r#"{"date_field": "9999-12-31T23:59:59"}"#;
        let result: TestStruct = serde_json::from_str(json).unwrap();
        assert_eq!(
            result.date_field,
            Some(NaiveDate::from_ymd_opt(9999, 12, 31).unwrap())
        );
    }
}
