//! Display formatting for gas and oil amounts
//!
//! Amounts under 10 get two decimals, larger ones get one. Ties round
//! half-up, same as the calculator.

use super::calculator::round_to;
use super::units::{FuelUnit, OilUnit};

const TWO_DECIMAL_LIMIT: f64 = 10.0;

fn format_amount(amount: f64, label: &str) -> String {
    if amount < TWO_DECIMAL_LIMIT {
        format!("{:.2} {}", round_to(amount, 2), label)
    } else {
        format!("{:.1} {}", round_to(amount, 1), label)
    }
}

/// Format a gas amount, e.g. "5.75 gallons" or "15.7 gallons"
pub fn format_gas_amount(amount: f64, unit: FuelUnit) -> String {
    format_amount(amount, unit.label())
}

/// Format an oil amount, e.g. "0.75 fl oz" or "125.3 ml"
pub fn format_oil_amount(amount: f64, unit: OilUnit) -> String {
    format_amount(amount, unit.label())
}
