//! Two-stroke oil mix calculation

use super::format::{format_gas_amount, format_oil_amount};
use super::units::FuelUnit;
use crate::error::{MixError, MixResult};
use crate::models::{ratio_label, CalculationResult, MixSummary, MixingRatio};

/// Round half-up to the given number of decimal places.
///
/// Rounds the scaled value so that e.g. 3.33 * 128 / 32 lands on 13.32
/// rather than drifting to 13.31.
pub fn round_to(value: f64, places: i32) -> f64 {
    let scale = 10f64.powi(places);
    (value * scale).round() / scale
}

/// Round to 2 decimal places
pub fn round2(value: f64) -> f64 {
    round_to(value, 2)
}

/// Calculate the oil needed for a quantity of gas at a gas:oil ratio
///
/// Gallons are converted to fluid ounces (x128) and liters to milliliters
/// (x1000) before dividing by the ratio. Callers must pass a positive amount
/// and ratio; use [`calculate_checked`] for unvalidated input.
///
/// # Examples
/// - 5 gallons at 50:1 -> 12.8 fl oz
/// - 10 liters at 40:1 -> 250 ml
pub fn calculate(gas_amount: f64, gas_unit: FuelUnit, ratio: f64) -> CalculationResult {
    debug_assert!(gas_amount > 0.0, "gas amount must be positive");
    debug_assert!(ratio > 0.0, "ratio must be positive");

    let oil_amount = gas_amount * gas_unit.oil_units_per_fuel_unit() / ratio;

    CalculationResult {
        gas_amount,
        gas_unit,
        oil_amount: round2(oil_amount),
        oil_unit: gas_unit.oil_unit(),
        ratio,
    }
}

/// Validate inputs, then calculate
pub fn calculate_checked(
    gas_amount: f64,
    gas_unit: FuelUnit,
    ratio: f64,
) -> MixResult<CalculationResult> {
    if !gas_amount.is_finite() || gas_amount <= 0.0 {
        return Err(MixError::InvalidAmount(gas_amount.to_string()));
    }
    if !ratio.is_finite() || ratio <= 0.0 {
        return Err(MixError::InvalidRatio(ratio));
    }
    Ok(calculate(gas_amount, gas_unit, ratio))
}

/// A gas quantity and ratio that have already been validated
#[derive(Debug, Clone, PartialEq)]
pub struct MixRequest {
    gas_amount: f64,
    gas_unit: FuelUnit,
    ratio: MixingRatio,
}

impl MixRequest {
    pub fn new(gas_amount: f64, gas_unit: FuelUnit, ratio: MixingRatio) -> MixResult<Self> {
        if !gas_amount.is_finite() || gas_amount <= 0.0 {
            return Err(MixError::InvalidAmount(gas_amount.to_string()));
        }
        if !ratio.value.is_finite() || ratio.value <= 0.0 {
            return Err(MixError::InvalidRatio(ratio.value));
        }
        Ok(Self {
            gas_amount,
            gas_unit,
            ratio,
        })
    }

    pub fn ratio(&self) -> &MixingRatio {
        &self.ratio
    }

    pub fn calculate(&self) -> CalculationResult {
        calculate(self.gas_amount, self.gas_unit, self.ratio.value)
    }

    pub fn summarize(&self) -> MixSummary {
        summarize(self.calculate(), &self.ratio.label)
    }
}

/// Attach display strings to a calculation result
pub fn summarize(result: CalculationResult, ratio_label_text: &str) -> MixSummary {
    MixSummary {
        ratio_label: ratio_label_text.to_string(),
        gas_display: format_gas_amount(result.gas_amount, result.gas_unit),
        oil_display: format_oil_amount(result.oil_amount, result.oil_unit),
        result,
    }
}

impl From<CalculationResult> for MixSummary {
    fn from(result: CalculationResult) -> Self {
        summarize(result, &ratio_label(result.ratio))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mixing::units::OilUnit;

    #[test]
    fn test_calculate_gallons() {
        let result = calculate(5.0, FuelUnit::Gallons, 50.0);
        assert_eq!(result.gas_amount, 5.0);
        assert_eq!(result.gas_unit, FuelUnit::Gallons);
        assert_eq!(result.oil_amount, 12.8);
        assert_eq!(result.oil_unit, OilUnit::FluidOunces);
        assert_eq!(result.ratio, 50.0);
    }

    #[test]
    fn test_calculate_liters() {
        let result = calculate(10.0, FuelUnit::Liters, 40.0);
        assert_eq!(result.gas_unit, FuelUnit::Liters);
        assert_eq!(result.oil_amount, 250.0);
        assert_eq!(result.oil_unit, OilUnit::Milliliters);
        assert_eq!(result.ratio, 40.0);
    }

    #[test]
    fn test_rounds_to_two_places() {
        assert_eq!(calculate(3.33, FuelUnit::Gallons, 32.0).oil_amount, 13.32);
        // 1 gal at 16:1 is exactly 8 fl oz, 1 gal at 40:1 is 3.2
        assert_eq!(calculate(1.0, FuelUnit::Gallons, 16.0).oil_amount, 8.0);
        assert_eq!(calculate(1.0, FuelUnit::Gallons, 40.0).oil_amount, 3.2);
        // 1 L at 32:1 is 31.25 ml; 1 L at 25:1 is 40 ml
        assert_eq!(calculate(1.0, FuelUnit::Liters, 32.0).oil_amount, 31.25);
        assert_eq!(calculate(2.5, FuelUnit::Liters, 25.0).oil_amount, 100.0);
        // 1.7 gal at 50:1 = 4.352
        assert_eq!(calculate(1.7, FuelUnit::Gallons, 50.0).oil_amount, 4.35);
    }

    #[test]
    fn test_oil_amount_non_negative_and_rounding_idempotent() {
        let amounts = [0.001, 0.37, 1.0, 3.33, 12.345, 47.3, 199.99];
        let ratios = [16.0, 20.0, 25.0, 32.0, 40.0, 50.0, 62.5];
        for &amount in &amounts {
            for &ratio in &ratios {
                for unit in [FuelUnit::Gallons, FuelUnit::Liters] {
                    let result = calculate(amount, unit, ratio);
                    assert!(result.oil_amount >= 0.0);
                    assert_eq!(round2(result.oil_amount), result.oil_amount);
                    assert_eq!(result.oil_unit, unit.oil_unit());
                }
            }
        }
    }

    #[test]
    fn test_round_half_up() {
        assert_eq!(round_to(12.25, 1), 12.3);
        assert_eq!(round_to(0.5, 0), 1.0);
        assert_eq!(round2(4.352), 4.35);
        assert_eq!(round2(2.0), 2.0);
    }

    #[test]
    fn test_calculate_checked_rejects_non_positive() {
        assert_eq!(
            calculate_checked(0.0, FuelUnit::Gallons, 50.0),
            Err(MixError::InvalidAmount("0".to_string()))
        );
        assert_eq!(
            calculate_checked(5.0, FuelUnit::Gallons, -1.0),
            Err(MixError::InvalidRatio(-1.0))
        );
        assert!(calculate_checked(f64::NAN, FuelUnit::Liters, 50.0).is_err());
        assert_eq!(
            calculate_checked(5.0, FuelUnit::Gallons, 50.0).unwrap().oil_amount,
            12.8
        );
    }

    #[test]
    fn test_mix_request_summary() {
        let ratio = MixingRatio::parse("40:1").unwrap();
        let request = MixRequest::new(10.0, FuelUnit::Liters, ratio).unwrap();
        let summary = request.summarize();
        assert_eq!(summary.ratio_label, "40:1");
        assert_eq!(summary.gas_display, "10.0 liters");
        assert_eq!(summary.oil_display, "250.0 ml");
        assert_eq!(summary.result.oil_amount, 250.0);
    }

    #[test]
    fn test_mix_request_rejects_bad_amount() {
        let err = MixRequest::new(-2.0, FuelUnit::Gallons, MixingRatio::default()).unwrap_err();
        assert_eq!(err, MixError::InvalidAmount("-2".to_string()));
    }

    #[test]
    fn test_summary_from_result() {
        let summary = MixSummary::from(calculate(0.5, FuelUnit::Gallons, 32.0));
        assert_eq!(summary.ratio_label, "32:1");
        assert_eq!(summary.gas_display, "0.50 gallons");
        assert_eq!(summary.oil_display, "2.00 fl oz");
    }
}
