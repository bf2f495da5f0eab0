//! Duration value grammar

use thiserror::Error;

/// Error produced when a value does not parse as a duration literal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidDuration {
    #[error("empty duration")]
    Empty,
    #[error("invalid duration magnitude: {0}")]
    BadMagnitude(String),
    #[error("unrecognized duration unit: {0}")]
    UnknownUnit(String),
}

/// Recognized duration units, smallest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DurationUnit {
    Milliseconds,
    Seconds,
    Minutes,
    Hours,
    Days,
    Weeks,
}

impl DurationUnit {
    pub const ALL: [DurationUnit; 6] = [
        DurationUnit::Milliseconds,
        DurationUnit::Seconds,
        DurationUnit::Minutes,
        DurationUnit::Hours,
        DurationUnit::Days,
        DurationUnit::Weeks,
    ];

    pub fn suffix(&self) -> &'static str {
        match self {
            DurationUnit::Milliseconds => "ms",
            DurationUnit::Seconds => "s",
            DurationUnit::Minutes => "m",
            DurationUnit::Hours => "h",
            DurationUnit::Days => "d",
            DurationUnit::Weeks => "w",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DurationUnit::Milliseconds => "milliseconds",
            DurationUnit::Seconds => "seconds",
            DurationUnit::Minutes => "minutes",
            DurationUnit::Hours => "hours",
            DurationUnit::Days => "days",
            DurationUnit::Weeks => "weeks",
        }
    }

    fn from_suffix(suffix: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|unit| unit.suffix().eq_ignore_ascii_case(suffix))
    }
}

/// A parsed `<number><unit>` duration literal. `unit` is `None` for a
/// bare number.
#[derive(Debug, Clone, PartialEq)]
pub struct DurationValue {
    pub magnitude: f64,
    pub unit: Option<DurationUnit>,
}

/// Parse a duration literal (`500ms`, `2.5s`, bare `500`).
pub fn parse_duration(input: &str) -> Result<DurationValue, InvalidDuration> {
    if input.is_empty() {
        return Err(InvalidDuration::Empty);
    }

    let split = input
        .find(|c: char| !(c.is_ascii_digit() || c == '.' || c == '-'))
        .unwrap_or(input.len());
    let (number, suffix) = input.split_at(split);

    let magnitude = number
        .parse::<f64>()
        .map_err(|_| InvalidDuration::BadMagnitude(number.to_string()))?;

    let unit = if suffix.is_empty() {
        None
    } else {
        Some(
            DurationUnit::from_suffix(suffix)
                .ok_or_else(|| InvalidDuration::UnknownUnit(suffix.to_string()))?,
        )
    };

    Ok(DurationValue { magnitude, unit })
}

/// Clean a `DURATION` filter value. A bare number defaults to
/// milliseconds by appending `ms` (a write-side default, not a
/// rejection); anything that does not parse is rejected.
pub fn clean_duration(value: &str) -> Option<String> {
    match parse_duration(value) {
        Ok(DurationValue { unit: Some(_), .. }) => Some(value.to_string()),
        Ok(DurationValue { unit: None, .. }) => Some(format!("{value}ms")),
        Err(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_with_unit() {
        assert_eq!(
            parse_duration("500ms"),
            Ok(DurationValue {
                magnitude: 500.0,
                unit: Some(DurationUnit::Milliseconds)
            })
        );
        assert_eq!(
            parse_duration("2.5h"),
            Ok(DurationValue {
                magnitude: 2.5,
                unit: Some(DurationUnit::Hours)
            })
        );
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(parse_duration(""), Err(InvalidDuration::Empty));
        assert_eq!(
            parse_duration("500xs"),
            Err(InvalidDuration::UnknownUnit("xs".to_string()))
        );
        assert_eq!(
            parse_duration("..5s"),
            Err(InvalidDuration::BadMagnitude("..5".to_string()))
        );
    }

    #[test]
    fn test_clean_appends_default_unit() {
        assert_eq!(clean_duration("500"), Some("500ms".to_string()));
        assert_eq!(clean_duration("500MS"), Some("500MS".to_string()));
        assert_eq!(clean_duration("1w"), Some("1w".to_string()));
        assert_eq!(clean_duration("soon"), None);
    }
}
