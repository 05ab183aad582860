//! Mix MCP Tools
//!
//! Manual-entry calculation, ratio listing and amount formatting.

use serde::Serialize;

use crate::config::Config;
use crate::mixing::{
    format_gas_amount, format_oil_amount, manual_reading, parse_manual_unit, MixRequest,
};
use crate::models::{MixSummary, MixingRatio};

/// Response for list_ratios
#[derive(Debug, Serialize)]
pub struct ListRatiosResponse {
    pub ratios: Vec<MixingRatio>,
    pub default_ratio: MixingRatio,
}

/// Response for format_amounts
#[derive(Debug, Serialize)]
pub struct FormatAmountsResponse {
    pub gas_display: String,
    pub oil_display: Option<String>,
}

/// Calculate the oil needed for a manually entered gas amount
pub fn calculate_mix(
    config: &Config,
    amount: &str,
    unit: &str,
    ratio: Option<&str>,
) -> Result<MixSummary, String> {
    let reading = manual_reading(amount, unit, config.max_gas_amount).map_err(|e| e.to_string())?;
    let ratio = config.resolve_ratio(ratio).map_err(|e| e.to_string())?;

    let summary = MixRequest::new(reading.amount, reading.unit, ratio)
        .map_err(|e| e.to_string())?
        .summarize();

    tracing::info!(
        "Mix calculated: {} at {} -> {}",
        summary.gas_display,
        summary.ratio_label,
        summary.oil_display
    );

    Ok(summary)
}

/// List the configured mixing ratios
pub fn list_ratios(config: &Config) -> ListRatiosResponse {
    ListRatiosResponse {
        ratios: config.ratios.clone(),
        default_ratio: config.default_ratio.clone(),
    }
}

/// Format a gas amount and, optionally, its matching oil amount
pub fn format_amounts(
    gas_amount: f64,
    gas_unit: &str,
    oil_amount: Option<f64>,
) -> Result<FormatAmountsResponse, String> {
    let unit = parse_manual_unit(gas_unit).map_err(|e| e.to_string())?;

    if !gas_amount.is_finite() || gas_amount < 0.0 {
        return Err(format!("gas_amount must be a non-negative number, got {}", gas_amount));
    }
    if let Some(oil) = oil_amount {
        if !oil.is_finite() || oil < 0.0 {
            return Err(format!("oil_amount must be a non-negative number, got {}", oil));
        }
    }

    Ok(FormatAmountsResponse {
        gas_display: format_gas_amount(gas_amount, unit),
        oil_display: oil_amount.map(|oil| format_oil_amount(oil, unit.oil_unit())),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mixing::{FuelUnit, OilUnit};

    #[test]
    fn test_calculate_mix_gallons() {
        let config = Config::default();
        let summary = calculate_mix(&config, "5", "gallons", None).unwrap();
        assert_eq!(summary.result.gas_unit, FuelUnit::Gallons);
        assert_eq!(summary.result.oil_unit, OilUnit::FluidOunces);
        assert_eq!(summary.result.oil_amount, 12.8);
        assert_eq!(summary.oil_display, "12.8 fl oz");
        assert_eq!(summary.gas_display, "5.00 gallons");
    }

    #[test]
    fn test_calculate_mix_liters_with_ratio() {
        let config = Config::default();
        let summary = calculate_mix(&config, "10", "L", Some("40:1")).unwrap();
        assert_eq!(summary.ratio_label, "40:1");
        assert_eq!(summary.result.oil_amount, 250.0);
        assert_eq!(summary.oil_display, "250.0 ml");
    }

    #[test]
    fn test_calculate_mix_validation() {
        let config = Config::default();
        assert!(calculate_mix(&config, "0", "gallons", None).is_err());
        assert!(calculate_mix(&config, "5", "quarts", None).is_err());
        let err = calculate_mix(&config, "1500", "liters", None).unwrap_err();
        assert!(err.contains("too large"));
    }

    #[test]
    fn test_list_ratios() {
        let response = list_ratios(&Config::default());
        assert_eq!(response.ratios.len(), 6);
        assert_eq!(response.default_ratio.label, "50:1");
    }

    #[test]
    fn test_format_amounts() {
        let response = format_amounts(15.67, "gallons", Some(0.75)).unwrap();
        assert_eq!(response.gas_display, "15.7 gallons");
        assert_eq!(response.oil_display.as_deref(), Some("0.75 fl oz"));

        let response = format_amounts(8.33, "liters", None).unwrap();
        assert_eq!(response.gas_display, "8.33 liters");
        assert!(response.oil_display.is_none());

        assert!(format_amounts(-1.0, "liters", None).is_err());
        assert!(format_amounts(1.0, "cups", None).is_err());
    }
}
