//! Runtime configuration
//!
//! Read once at startup from environment variables.

use thiserror::Error;

use crate::mixing::DEFAULT_MAX_GAS_AMOUNT;
use crate::models::MixingRatio;

pub const DEFAULT_RATIO_VAR: &str = "MIXMASTER_DEFAULT_RATIO";
pub const MAX_GAS_AMOUNT_VAR: &str = "MIXMASTER_MAX_GAS_AMOUNT";

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{var}: {source}")]
    Ratio {
        var: &'static str,
        #[source]
        source: crate::error::MixError,
    },

    #[error("{var}: expected a positive number, got '{value}'")]
    InvalidNumber { var: &'static str, value: String },
}

/// MixMaster configuration
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Ratio used when a caller does not pick one
    pub default_ratio: MixingRatio,
    /// Upper bound for manually entered gas amounts
    pub max_gas_amount: f64,
    /// Ratios offered to callers
    pub ratios: Vec<MixingRatio>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_ratio: MixingRatio::default(),
            max_gas_amount: DEFAULT_MAX_GAS_AMOUNT,
            ratios: MixingRatio::standard(),
        }
    }
}

impl Config {
    /// Load configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Load configuration from an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(value) = lookup(DEFAULT_RATIO_VAR) {
            config.default_ratio = MixingRatio::parse(&value).map_err(|source| {
                ConfigError::Ratio {
                    var: DEFAULT_RATIO_VAR,
                    source,
                }
            })?;
        }

        if let Some(value) = lookup(MAX_GAS_AMOUNT_VAR) {
            config.max_gas_amount = value
                .trim()
                .parse::<f64>()
                .ok()
                .filter(|v| v.is_finite() && *v > 0.0)
                .ok_or(ConfigError::InvalidNumber {
                    var: MAX_GAS_AMOUNT_VAR,
                    value: value.clone(),
                })?;
        }

        Ok(config)
    }

    /// Resolve an optional caller-supplied ratio, falling back to the default
    pub fn resolve_ratio(&self, ratio: Option<&str>) -> crate::error::MixResult<MixingRatio> {
        match ratio {
            Some(s) if !s.trim().is_empty() => MixingRatio::parse(s),
            _ => Ok(self.default_ratio.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |var| map.get(var).cloned()
    }

    #[test]
    fn test_defaults_without_env() {
        let config = Config::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.default_ratio.label, "50:1");
        assert_eq!(config.max_gas_amount, 1000.0);
        assert_eq!(config.ratios.len(), 6);
    }

    #[test]
    fn test_overrides_from_env() {
        let config = Config::from_lookup(lookup_from(&[
            (DEFAULT_RATIO_VAR, "32:1"),
            (MAX_GAS_AMOUNT_VAR, "200"),
        ]))
        .unwrap();
        assert_eq!(config.default_ratio.value, 32.0);
        assert_eq!(config.max_gas_amount, 200.0);
    }

    #[test]
    fn test_invalid_values() {
        let err = Config::from_lookup(lookup_from(&[(DEFAULT_RATIO_VAR, "lots")])).unwrap_err();
        assert!(matches!(err, ConfigError::Ratio { .. }));

        let err = Config::from_lookup(lookup_from(&[(MAX_GAS_AMOUNT_VAR, "-1")])).unwrap_err();
        assert_eq!(
            err.to_string(),
            "MIXMASTER_MAX_GAS_AMOUNT: expected a positive number, got '-1'"
        );
    }

    #[test]
    fn test_resolve_ratio() {
        let config = Config::default();
        assert_eq!(config.resolve_ratio(None).unwrap().label, "50:1");
        assert_eq!(config.resolve_ratio(Some("  ")).unwrap().label, "50:1");
        assert_eq!(config.resolve_ratio(Some("16:1")).unwrap().value, 16.0);
        assert!(config.resolve_ratio(Some("x")).is_err());
    }
}
