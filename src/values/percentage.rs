//! Percentage value grammar

use thiserror::Error;

/// Error produced when a value does not parse as a percentage literal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidPercentage {
    #[error("invalid percentage magnitude: {0}")]
    BadMagnitude(String),
}

/// A parsed percentage literal. `explicit_percent` records whether the
/// input carried a `%` sign.
#[derive(Debug, Clone, PartialEq)]
pub struct PercentageValue {
    pub fraction: f64,
    pub explicit_percent: bool,
}

/// Parse a percentage literal: `50%` yields fraction `0.5`, a bare
/// number is taken as an already-fractional value.
pub fn parse_percentage(input: &str) -> Result<PercentageValue, InvalidPercentage> {
    if let Some(number) = input.strip_suffix('%') {
        let magnitude = number
            .parse::<f64>()
            .map_err(|_| InvalidPercentage::BadMagnitude(number.to_string()))?;
        return Ok(PercentageValue {
            fraction: magnitude / 100.0,
            explicit_percent: true,
        });
    }
    let fraction = input
        .parse::<f64>()
        .map_err(|_| InvalidPercentage::BadMagnitude(input.to_string()))?;
    Ok(PercentageValue {
        fraction,
        explicit_percent: false,
    })
}

/// Clean a `PERCENTAGE` filter value.
///
/// An explicit `%` converts to a fraction (`50%` → `0.5`). Everything
/// else passes through unchanged: a bare number is taken as already
/// fractional, and parse failure returns the raw text rather than
/// rejecting. Percentage deliberately has no rejection path.
pub fn clean_percentage(value: &str) -> String {
    match parse_percentage(value) {
        Ok(PercentageValue {
            fraction,
            explicit_percent: true,
        }) => fraction.to_string(),
        _ => value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_percent_converts() {
        assert_eq!(clean_percentage("50%"), "0.5");
        assert_eq!(clean_percentage("12.5%"), "0.125");
        assert_eq!(clean_percentage("100%"), "1");
    }

    #[test]
    fn test_bare_number_passes_through() {
        assert_eq!(clean_percentage("0.5"), "0.5");
        assert_eq!(clean_percentage("2"), "2");
    }

    #[test]
    fn test_unparseable_passes_through() {
        assert_eq!(clean_percentage("half"), "half");
        assert_eq!(clean_percentage("x%"), "x%");
    }

    #[test]
    fn test_parse_reports_magnitude_errors() {
        assert_eq!(
            parse_percentage("x%"),
            Err(InvalidPercentage::BadMagnitude("x".to_string()))
        );
        assert_eq!(
            parse_percentage("50%").map(|p| p.fraction),
            Ok(0.5)
        );
    }
}
