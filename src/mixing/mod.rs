//! Mixing engine
//!
//! Reading extraction, oil mix calculation and display formatting. Everything
//! here is synchronous and free of I/O.

pub mod calculator;
pub mod format;
pub mod manual;
pub mod reading;
pub mod units;

pub use calculator::{calculate, calculate_checked, round2, round_to, summarize, MixRequest};
pub use format::{format_gas_amount, format_oil_amount};
pub use manual::{manual_reading, parse_manual_amount, parse_manual_unit, DEFAULT_MAX_GAS_AMOUNT};
pub use reading::{detect_reading, normalize, parse_reading, GALLONS_HEURISTIC_MAX};
pub use units::{FuelUnit, OilUnit, FL_OZ_PER_GALLON, ML_PER_LITER};
