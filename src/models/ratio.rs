//! Mixing ratio model
//!
//! A gas:oil ratio such as 50:1, meaning 50 parts gas to 1 part oil.

use serde::{Deserialize, Serialize};

use crate::error::{MixError, MixResult};

/// Ratios offered by default, richest oil mix last
pub const STANDARD_RATIO_VALUES: [f64; 6] = [50.0, 40.0, 32.0, 25.0, 20.0, 16.0];

/// A gas:oil mixing ratio
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MixingRatio {
    /// Human-readable label, e.g. "50:1"
    pub label: String,
    /// Parts of gas per part of oil; the divisor in the mix calculation
    pub value: f64,
}

impl MixingRatio {
    /// Create a ratio with an explicit label
    pub fn new(label: impl Into<String>, value: f64) -> MixResult<Self> {
        if !value.is_finite() || value <= 0.0 {
            return Err(MixError::InvalidRatio(value));
        }
        Ok(Self {
            label: label.into(),
            value,
        })
    }

    /// Create a ratio labelled "N:1"
    pub fn from_value(value: f64) -> MixResult<Self> {
        Self::new(ratio_label(value), value)
    }

    /// Parse "50:1", "50 : 1", "100:2" or a bare "50"
    pub fn parse(s: &str) -> MixResult<Self> {
        let trimmed = s.trim();
        let value = match trimmed.split_once(':') {
            Some((gas, oil)) => {
                let gas = parse_part(gas, trimmed)?;
                let oil = parse_part(oil, trimmed)?;
                if oil <= 0.0 {
                    return Err(MixError::InvalidRatio(oil));
                }
                gas / oil
            }
            None => parse_part(trimmed, trimmed)?,
        };
        Self::from_value(value)
    }

    /// The preset ratios, 50:1 through 16:1
    pub fn standard() -> Vec<Self> {
        STANDARD_RATIO_VALUES
            .iter()
            .map(|&value| Self {
                label: ratio_label(value),
                value,
            })
            .collect()
    }
}

impl Default for MixingRatio {
    fn default() -> Self {
        Self {
            label: ratio_label(STANDARD_RATIO_VALUES[0]),
            value: STANDARD_RATIO_VALUES[0],
        }
    }
}

fn parse_part(part: &str, whole: &str) -> MixResult<f64> {
    part.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| MixError::UnknownRatio(whole.to_string()))
}

/// Label a ratio value as "N:1", dropping a zero fraction
pub fn ratio_label(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{:.0}:1", value)
    } else {
        format!("{}:1", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_ratios() {
        let labels: Vec<String> = MixingRatio::standard().into_iter().map(|r| r.label).collect();
        assert_eq!(labels, vec!["50:1", "40:1", "32:1", "25:1", "20:1", "16:1"]);
    }

    #[test]
    fn test_default_is_fifty_to_one() {
        let ratio = MixingRatio::default();
        assert_eq!(ratio.label, "50:1");
        assert_eq!(ratio.value, 50.0);
    }

    #[test]
    fn test_parse_forms() {
        assert_eq!(MixingRatio::parse("50:1").unwrap().value, 50.0);
        assert_eq!(MixingRatio::parse(" 32 : 1 ").unwrap().label, "32:1");
        assert_eq!(MixingRatio::parse("40").unwrap().label, "40:1");
        assert_eq!(MixingRatio::parse("100:2").unwrap().value, 50.0);
        assert_eq!(MixingRatio::parse("62.5:1").unwrap().label, "62.5:1");
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert_eq!(
            MixingRatio::parse("fifty"),
            Err(MixError::UnknownRatio("fifty".to_string()))
        );
        assert_eq!(MixingRatio::parse("0:1"), Err(MixError::InvalidRatio(0.0)));
        assert_eq!(MixingRatio::parse("50:0"), Err(MixError::InvalidRatio(0.0)));
        assert_eq!(MixingRatio::parse("-40"), Err(MixError::InvalidRatio(-40.0)));
    }

    #[test]
    fn test_new_rejects_non_finite() {
        assert!(MixingRatio::new("nan", f64::NAN).is_err());
        assert!(MixingRatio::new("inf", f64::INFINITY).is_err());
    }
}
