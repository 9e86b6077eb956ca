//! Input coercion and rejection rules shared by the user and exercise
//! services.
//!
//! Every rule returns a field-scoped [`Error`] with
//! [`ErrorCode::InvalidRequest`](super::ErrorCode::InvalidRequest) so creation
//! and query paths reject numbers and dates identically. Raw inputs arrive as
//! JSON values (request bodies) or strings (query parameters).

use chrono::{DateTime, NaiveDate, Utc};
use serde_json::{Value, json};

use super::{Description, DurationMinutes, Error, Username};

/// Machine-readable reason attached to validation error details.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ValidationCode {
    MissingField,
    InvalidText,
    InvalidInteger,
    InvalidDate,
}

impl ValidationCode {
    fn as_str(self) -> &'static str {
        match self {
            Self::MissingField => "missing_field",
            Self::InvalidText => "invalid_text",
            Self::InvalidInteger => "invalid_integer",
            Self::InvalidDate => "invalid_date",
        }
    }
}

/// Request field names used in error details.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldName(&'static str);

impl FieldName {
    pub const USERNAME: Self = Self("username");
    pub const DESCRIPTION: Self = Self("description");
    pub const DURATION: Self = Self("duration");
    pub const DATE: Self = Self("date");
    pub const FROM: Self = Self("from");
    pub const TO: Self = Self("to");
    pub const LIMIT: Self = Self("limit");

    /// Field name as it appears on the wire.
    pub fn as_str(self) -> &'static str {
        self.0
    }
}

fn field_error(field: FieldName, code: ValidationCode, message: &str) -> Error {
    Error::invalid_request(message).with_details(json!({
        "field": field.as_str(),
        "code": code.as_str(),
    }))
}

/// Treat JSON `null` and empty strings as "not supplied".
fn supplied(raw: Option<&Value>) -> Option<&Value> {
    raw.filter(|value| match value {
        Value::Null => false,
        Value::String(text) => !text.is_empty(),
        _ => true,
    })
}

/// Coerce a JSON number or a numeric string to an integer.
///
/// Integer-valued inputs are accepted in any notation (`30`, `30.0`, `"1e1"`).
/// Fractional or non-finite values, non-numeric strings, and other JSON types
/// yield `None`.
pub fn parse_integer(value: &Value) -> Option<i64> {
    match value {
        Value::Number(number) => number
            .as_i64()
            .or_else(|| number.as_f64().and_then(integral)),
        Value::String(text) => {
            let trimmed = text.trim();
            trimmed
                .parse::<i64>()
                .ok()
                .or_else(|| trimmed.parse::<f64>().ok().and_then(integral))
        }
        _ => None,
    }
}

/// Whole-valued finite floats within `i64` range.
#[expect(
    clippy::cast_possible_truncation,
    reason = "value is whole and range-checked before the cast"
)]
fn integral(value: f64) -> Option<i64> {
    const BOUND: f64 = 9_223_372_036_854_775_808.0; // 2^63
    (value.is_finite() && value.fract() == 0.0 && (-BOUND..BOUND).contains(&value))
        .then_some(value as i64)
}

/// Parse a calendar date given as `YYYY-MM-DD` or an RFC 3339 timestamp.
///
/// Timestamps resolve to their UTC calendar date.
///
/// # Examples
/// ```
/// use chrono::NaiveDate;
/// use exercise_tracker::domain::validation::parse_calendar_date;
///
/// let expected = NaiveDate::from_ymd_opt(2024, 3, 1);
/// assert_eq!(parse_calendar_date("2024-03-01"), expected);
/// assert_eq!(parse_calendar_date("2024-03-01T23:30:00-01:00"), NaiveDate::from_ymd_opt(2024, 3, 2));
/// assert_eq!(parse_calendar_date("2024-02-30"), None);
/// ```
pub fn parse_calendar_date(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d").ok().or_else(|| {
        DateTime::parse_from_rfc3339(trimmed)
            .ok()
            .map(|timestamp| timestamp.with_timezone(&Utc).date_naive())
    })
}

/// Validate the username supplied when registering a user.
pub fn username(raw: Option<&str>) -> Result<Username, Error> {
    raw.and_then(|value| Username::new(value).ok()).ok_or_else(|| {
        field_error(
            FieldName::USERNAME,
            ValidationCode::MissingField,
            "Username is required",
        )
    })
}

/// Validate an exercise description: a string that is non-empty once trimmed.
pub fn description(raw: Option<&Value>) -> Result<Description, Error> {
    let invalid = || {
        field_error(
            FieldName::DESCRIPTION,
            ValidationCode::InvalidText,
            "Description is required and must be a non-empty string",
        )
    };
    match raw {
        Some(Value::String(text)) => Description::new(text).map_err(|_| invalid()),
        _ => Err(invalid()),
    }
}

/// Validate an exercise duration: an integer strictly greater than zero.
///
/// `30`, `"30"`, and `30.0` are all accepted; `0`, `-5`, `"abc"`, `3.5`, and
/// missing values are rejected with the same error.
pub fn duration(raw: Option<&Value>) -> Result<DurationMinutes, Error> {
    supplied(raw)
        .and_then(parse_integer)
        .and_then(|value| DurationMinutes::try_from(value).ok())
        .ok_or_else(|| {
            field_error(
                FieldName::DURATION,
                ValidationCode::InvalidInteger,
                "Duration is required and must be a positive integer",
            )
        })
}

/// Validate the optional exercise date, defaulting to `today` when absent.
pub fn exercise_date(raw: Option<&Value>, today: NaiveDate) -> Result<NaiveDate, Error> {
    let Some(value) = supplied(raw) else {
        return Ok(today);
    };
    value
        .as_str()
        .and_then(parse_calendar_date)
        .ok_or_else(|| field_error(FieldName::DATE, ValidationCode::InvalidDate, "Date is invalid"))
}

/// Validate an optional log bound (`from` or `to`).
pub fn date_bound(field: FieldName, raw: Option<&str>) -> Result<Option<NaiveDate>, Error> {
    match raw.filter(|value| !value.is_empty()) {
        None => Ok(None),
        Some(value) => parse_calendar_date(value).map(Some).ok_or_else(|| {
            field_error(
                field,
                ValidationCode::InvalidDate,
                &format!("{} date is invalid", capitalise(field.as_str())),
            )
        }),
    }
}

/// Validate the optional log size cap: a positive integer.
///
/// Values beyond `u32::MAX` saturate; no log is that long.
pub fn limit(raw: Option<&str>) -> Result<Option<u32>, Error> {
    let Some(text) = raw.filter(|value| !value.is_empty()) else {
        return Ok(None);
    };
    match text.trim().parse::<i64>() {
        Ok(value) if value > 0 => Ok(Some(u32::try_from(value).unwrap_or(u32::MAX))),
        _ => Err(field_error(
            FieldName::LIMIT,
            ValidationCode::InvalidInteger,
            "Limit must be a positive integer",
        )),
    }
}

fn capitalise(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
