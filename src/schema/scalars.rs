/// The `DateTime` scalar
///
/// Values travel as RFC 3339 strings with second precision, UTC rendered as
/// `Z` (e.g. `2024-01-02T15:04:05Z`). Parsing is lenient: anything that is not
/// an RFC 3339 string yields `None` instead of an error.

use crate::catalog::parse_timestamp;

use async_graphql::dynamic::Scalar;
use async_graphql::Value;
use chrono::{DateTime, SecondsFormat, Utc};

pub const DATETIME_SCALAR: &str = "DateTime";

/// Create the DateTime scalar
pub fn datetime_scalar() -> Scalar {
    Scalar::new(DATETIME_SCALAR)
        .description("RFC 3339 datetime (e.g. 2024-01-02T15:04:05Z); malformed input reads as null")
        // Malformed strings are accepted here and read as null by parse_datetime
        .validator(|value| matches!(value, Value::String(_) | Value::Null))
}

/// Render a timestamp in the scalar's textual profile
pub fn format_datetime(datetime: &DateTime<Utc>) -> String {
    datetime.to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Serialize a timestamp as a GraphQL value
pub fn datetime_value(datetime: &DateTime<Utc>) -> Value {
    Value::String(format_datetime(datetime))
}

/// Parse a GraphQL input value (variable or inline literal).
///
/// No field takes a `DateTime` argument yet; this is the input half of the
/// scalar for callers decoding request values.
pub fn parse_datetime(value: &Value) -> Option<DateTime<Utc>> {
    match value {
        Value::String(s) => parse_timestamp(s),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_utc_uses_z() {
        let datetime = Utc.with_ymd_and_hms(2024, 1, 2, 15, 4, 5).unwrap();
        assert_eq!(format_datetime(&datetime), "2024-01-02T15:04:05Z");
    }

    #[test]
    fn test_round_trip() {
        let datetime = Utc.with_ymd_and_hms(1750, 7, 28, 20, 0, 0).unwrap();
        let value = datetime_value(&datetime);
        assert_eq!(parse_datetime(&value), Some(datetime));
    }

    #[test]
    fn test_offset_is_normalized_to_utc() {
        let parsed = parse_datetime(&Value::String("2024-01-02T15:04:05+02:00".to_string()));
        assert_eq!(parsed, Some(Utc.with_ymd_and_hms(2024, 1, 2, 13, 4, 5).unwrap()));
    }

    #[test]
    fn test_malformed_input_is_null() {
        assert_eq!(parse_datetime(&Value::String("not-a-date".to_string())), None);
        assert_eq!(parse_datetime(&Value::String("2024-01-02".to_string())), None);
        assert_eq!(parse_datetime(&Value::String("2024-01-02 15:04:05".to_string())), None);
    }

    #[test]
    fn test_non_string_input_is_null() {
        assert_eq!(parse_datetime(&Value::Number(1_704_207_845.into())), None);
        assert_eq!(parse_datetime(&Value::Null), None);
    }
}
