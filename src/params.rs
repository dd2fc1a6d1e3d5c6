use crate::error::{ParamError, Result};
use crate::helpers::non_blank;

/// Parses a base-10 integer and checks it against the inclusive `[min, max]` range.
///
/// Surrounding whitespace is ignored and a leading `+` or `-` is accepted.
/// Fractions, exponents and hexadecimal forms are rejected.
///
/// # Errors
///
/// - [`ParamError::Blank`] when the value is absent or only whitespace
/// - [`ParamError::InvalidInteger`] when the value is not a base-10 `i64`
/// - [`ParamError::OutOfRange`] when the parsed value is below `min` or above `max`
pub fn try_parse_int_parameter(value: Option<&str>, min: i64, max: i64) -> Result<i64> {
    let Some(value) = non_blank(value) else {
        trace_fallback!("blank integer parameter");
        return Err(ParamError::Blank);
    };
    let value = value.trim();

    let Ok(parsed) = value.parse::<i64>() else {
        trace_fallback!(value, "integer parameter is not a base-10 integer");
        return Err(ParamError::InvalidInteger);
    };
    if !(min..=max).contains(&parsed) {
        trace_fallback!(parsed, min, max, "integer parameter out of range");
        return Err(ParamError::OutOfRange);
    }

    Ok(parsed)
}

/// Parses an integer parameter, returning `default_value` when the value is
/// blank, not an integer, or outside the inclusive `[min, max]` range.
///
/// ```
/// use uritext::parse_int_parameter;
///
/// assert_eq!(parse_int_parameter(Some("999"), 1, 999, 123), 999);
/// assert_eq!(parse_int_parameter(Some("1000"), 1, 999, 123), 123);
/// assert_eq!(parse_int_parameter(Some("1.5"), 1, 999, 123), 123);
/// assert_eq!(parse_int_parameter(None, 1, 999, 123), 123);
/// ```
pub fn parse_int_parameter(value: Option<&str>, min: i64, max: i64, default_value: i64) -> i64 {
    try_parse_int_parameter(value, min, max).unwrap_or(default_value)
}

/// Returns the value unless it is absent, empty, or only whitespace, in which
/// case `default_value` is returned. The value is passed through untouched.
///
/// ```
/// use uritext::parse_string_parameter;
///
/// assert_eq!(parse_string_parameter(Some("this"), "123"), "this");
/// assert_eq!(parse_string_parameter(Some("   "), "123"), "123");
/// assert_eq!(parse_string_parameter(None::<String>, String::from("123")), "123");
/// ```
pub fn parse_string_parameter<T: AsRef<str>>(value: Option<T>, default_value: T) -> T {
    match value {
        Some(v) if !v.as_ref().trim().is_empty() => v,
        _ => default_value,
    }
}
