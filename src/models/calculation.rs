//! Calculation result models

use serde::{Deserialize, Serialize};

use crate::mixing::units::{FuelUnit, OilUnit};

/// Outcome of a single mix calculation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CalculationResult {
    pub gas_amount: f64,
    pub gas_unit: FuelUnit,
    /// Oil required, rounded to 2 decimal places
    pub oil_amount: f64,
    pub oil_unit: OilUnit,
    pub ratio: f64,
}

/// A calculation together with its display strings
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MixSummary {
    pub ratio_label: String,
    pub gas_display: String,
    pub oil_display: String,
    #[serde(flatten)]
    pub result: CalculationResult,
}
