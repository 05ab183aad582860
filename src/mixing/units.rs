//! Unit types and conversion constants
//!
//! Fuel is measured in gallons or liters; the matching oil unit is fixed by
//! the fuel unit and never chosen on its own.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Fluid ounces per US gallon
pub const FL_OZ_PER_GALLON: f64 = 128.0;
/// Milliliters per liter
pub const ML_PER_LITER: f64 = 1000.0;

/// Unit of a fuel pump reading
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FuelUnit {
    Gallons,
    Liters,
}

impl FuelUnit {
    /// Display label used after a formatted amount
    pub fn label(&self) -> &'static str {
        match self {
            FuelUnit::Gallons => "gallons",
            FuelUnit::Liters => "liters",
        }
    }

    /// The oil unit used when mixing with this fuel unit
    pub fn oil_unit(&self) -> OilUnit {
        match self {
            FuelUnit::Gallons => OilUnit::FluidOunces,
            FuelUnit::Liters => OilUnit::Milliliters,
        }
    }

    /// Number of oil units in one unit of fuel
    pub fn oil_units_per_fuel_unit(&self) -> f64 {
        match self {
            FuelUnit::Gallons => FL_OZ_PER_GALLON,
            FuelUnit::Liters => ML_PER_LITER,
        }
    }

    /// Parse from a unit word, case-insensitive
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "gallons" | "gallon" | "gal" | "g" => Some(FuelUnit::Gallons),
            "liters" | "liter" | "litres" | "litre" | "ltr" | "l" => Some(FuelUnit::Liters),
            _ => None,
        }
    }
}

impl fmt::Display for FuelUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Unit of the computed oil amount
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OilUnit {
    #[serde(rename = "fl oz")]
    FluidOunces,
    #[serde(rename = "ml")]
    Milliliters,
}

impl OilUnit {
    pub fn label(&self) -> &'static str {
        match self {
            OilUnit::FluidOunces => "fl oz",
            OilUnit::Milliliters => "ml",
        }
    }
}

impl fmt::Display for OilUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
