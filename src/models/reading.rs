//! Fuel reading models

use serde::{Deserialize, Serialize};

use crate::mixing::units::FuelUnit;

/// Confidence attached to readings detected from OCR text
pub const DEFAULT_CONFIDENCE: f64 = 0.8;

/// A fuel quantity and its unit. `amount` is always positive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ParsedReading {
    pub amount: f64,
    pub unit: FuelUnit,
}

/// A reading detected from OCR output, with a confidence score
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DetectedReading {
    pub amount: f64,
    pub unit: FuelUnit,
    pub confidence: f64,
}

impl DetectedReading {
    pub fn from_parsed(reading: ParsedReading) -> Self {
        Self {
            amount: reading.amount,
            unit: reading.unit,
            confidence: DEFAULT_CONFIDENCE,
        }
    }

    pub fn reading(&self) -> ParsedReading {
        ParsedReading {
            amount: self.amount,
            unit: self.unit,
        }
    }
}
