//! Manual entry validation
//!
//! Used when no reading could be extracted and the amount is typed in.

use super::units::FuelUnit;
use crate::error::{MixError, MixResult};
use crate::models::ParsedReading;

/// Largest gas amount accepted from manual entry unless configured otherwise
pub const DEFAULT_MAX_GAS_AMOUNT: f64 = 1000.0;

/// Parse a typed gas amount, rejecting non-positive and implausibly large values
pub fn parse_manual_amount(input: &str, max: f64) -> MixResult<f64> {
    let trimmed = input.trim();
    let amount = trimmed
        .parse::<f64>()
        .ok()
        .filter(|a| a.is_finite() && *a > 0.0)
        .ok_or_else(|| MixError::InvalidAmount(trimmed.to_string()))?;

    if amount > max {
        return Err(MixError::AmountTooLarge { amount, max });
    }

    Ok(amount)
}

/// Parse a typed unit name
pub fn parse_manual_unit(input: &str) -> MixResult<FuelUnit> {
    FuelUnit::from_str(input).ok_or_else(|| MixError::UnknownUnit(input.trim().to_string()))
}

/// Build a reading from manually entered amount and unit
pub fn manual_reading(amount: &str, unit: &str, max: f64) -> MixResult<ParsedReading> {
    Ok(ParsedReading {
        amount: parse_manual_amount(amount, max)?,
        unit: parse_manual_unit(unit)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_manual_amount() {
        assert_eq!(parse_manual_amount(" 12.5 ", DEFAULT_MAX_GAS_AMOUNT), Ok(12.5));
        assert_eq!(parse_manual_amount("1000", DEFAULT_MAX_GAS_AMOUNT), Ok(1000.0));
    }

    #[test]
    fn test_parse_manual_amount_rejects_invalid() {
        assert_eq!(
            parse_manual_amount("abc", DEFAULT_MAX_GAS_AMOUNT),
            Err(MixError::InvalidAmount("abc".to_string()))
        );
        assert_eq!(
            parse_manual_amount("0", DEFAULT_MAX_GAS_AMOUNT),
            Err(MixError::InvalidAmount("0".to_string()))
        );
        assert_eq!(
            parse_manual_amount("-3", DEFAULT_MAX_GAS_AMOUNT),
            Err(MixError::InvalidAmount("-3".to_string()))
        );
        assert!(parse_manual_amount("NaN", DEFAULT_MAX_GAS_AMOUNT).is_err());
        assert!(parse_manual_amount("", DEFAULT_MAX_GAS_AMOUNT).is_err());
    }

    #[test]
    fn test_parse_manual_amount_too_large() {
        assert_eq!(
            parse_manual_amount("1000.5", DEFAULT_MAX_GAS_AMOUNT),
            Err(MixError::AmountTooLarge {
                amount: 1000.5,
                max: 1000.0
            })
        );
        assert_eq!(
            parse_manual_amount("60", 50.0).unwrap_err().to_string(),
            "Amount 60 is too large (maximum 50)"
        );
    }

    #[test]
    fn test_manual_reading() {
        let reading = manual_reading("8", "Liters", DEFAULT_MAX_GAS_AMOUNT).unwrap();
        assert_eq!(reading.amount, 8.0);
        assert_eq!(reading.unit, FuelUnit::Liters);

        assert_eq!(
            manual_reading("8", "pints", DEFAULT_MAX_GAS_AMOUNT),
            Err(MixError::UnknownUnit("pints".to_string()))
        );
    }
}
