//! Data models
//!
//! Plain value types passed between the extractor, calculator and tools.

mod calculation;
mod ratio;
mod reading;

pub use calculation::{CalculationResult, MixSummary};
pub use ratio::{ratio_label, MixingRatio, STANDARD_RATIO_VALUES};
pub use reading::{DetectedReading, ParsedReading, DEFAULT_CONFIDENCE};
