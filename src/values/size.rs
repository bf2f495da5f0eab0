//! Size value grammar

use thiserror::Error;

/// Error produced when a value does not parse as a size literal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidSize {
    #[error("empty size")]
    Empty,
    #[error("invalid size magnitude: {0}")]
    BadMagnitude(String),
    #[error("unrecognized size unit: {0}")]
    UnknownUnit(String),
}

/// Recognized size units, smallest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeUnit {
    Bit,
    Bytes,
    Kilobytes,
    Megabytes,
    Gigabytes,
    Terabytes,
    Petabytes,
}

impl SizeUnit {
    pub const ALL: [SizeUnit; 7] = [
        SizeUnit::Bit,
        SizeUnit::Bytes,
        SizeUnit::Kilobytes,
        SizeUnit::Megabytes,
        SizeUnit::Gigabytes,
        SizeUnit::Terabytes,
        SizeUnit::Petabytes,
    ];

    pub fn suffix(&self) -> &'static str {
        match self {
            SizeUnit::Bit => "bit",
            SizeUnit::Bytes => "bytes",
            SizeUnit::Kilobytes => "kb",
            SizeUnit::Megabytes => "mb",
            SizeUnit::Gigabytes => "gb",
            SizeUnit::Terabytes => "tb",
            SizeUnit::Petabytes => "pb",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SizeUnit::Bit => "bits",
            SizeUnit::Bytes => "bytes",
            SizeUnit::Kilobytes => "kilobytes",
            SizeUnit::Megabytes => "megabytes",
            SizeUnit::Gigabytes => "gigabytes",
            SizeUnit::Terabytes => "terabytes",
            SizeUnit::Petabytes => "petabytes",
        }
    }

    fn from_suffix(suffix: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|unit| unit.suffix().eq_ignore_ascii_case(suffix))
    }
}

/// A parsed `<number><unit>` size literal. `unit` is `None` for a bare
/// number.
#[derive(Debug, Clone, PartialEq)]
pub struct SizeValue {
    pub magnitude: f64,
    pub unit: Option<SizeUnit>,
}

/// Parse a size literal (`4mb`, `512bytes`, bare `2048`).
pub fn parse_size(input: &str) -> Result<SizeValue, InvalidSize> {
    if input.is_empty() {
        return Err(InvalidSize::Empty);
    }

    let split = input
        .find(|c: char| !(c.is_ascii_digit() || c == '.' || c == '-'))
        .unwrap_or(input.len());
    let (number, suffix) = input.split_at(split);

    let magnitude = number
        .parse::<f64>()
        .map_err(|_| InvalidSize::BadMagnitude(number.to_string()))?;

    let unit = if suffix.is_empty() {
        None
    } else {
        Some(
            SizeUnit::from_suffix(suffix)
                .ok_or_else(|| InvalidSize::UnknownUnit(suffix.to_string()))?,
        )
    };

    Ok(SizeValue { magnitude, unit })
}

/// Clean a `SIZE` filter value. A bare number defaults to `bytes`;
/// anything that does not parse is rejected.
pub fn clean_size(value: &str) -> Option<String> {
    match parse_size(value) {
        Ok(SizeValue { unit: Some(_), .. }) => Some(value.to_string()),
        Ok(SizeValue { unit: None, .. }) => Some(format!("{value}bytes")),
        Err(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_with_unit() {
        assert_eq!(
            parse_size("4mb"),
            Ok(SizeValue {
                magnitude: 4.0,
                unit: Some(SizeUnit::Megabytes)
            })
        );
        assert_eq!(
            parse_size("512bytes"),
            Ok(SizeValue {
                magnitude: 512.0,
                unit: Some(SizeUnit::Bytes)
            })
        );
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(parse_size(""), Err(InvalidSize::Empty));
        assert_eq!(
            parse_size("4zb"),
            Err(InvalidSize::UnknownUnit("zb".to_string()))
        );
    }

    #[test]
    fn test_clean_appends_default_unit() {
        assert_eq!(clean_size("2048"), Some("2048bytes".to_string()));
        assert_eq!(clean_size("4MB"), Some("4MB".to_string()));
        assert_eq!(clean_size("big"), None);
    }
}
