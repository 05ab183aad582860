//! Fuel pump reading extraction
//!
//! Finds a fuel quantity and its unit in noisy OCR text. Patterns are tried
//! in a fixed order and the first one yielding a positive amount wins; if none
//! do, the first number in the text is taken and its unit is inferred.

use once_cell::sync::Lazy;
use regex::Regex;

use super::units::FuelUnit;
use crate::models::{DetectedReading, ParsedReading};

/// Readings at or below this amount with no unit hint are assumed to be
/// gallons; anything larger is assumed to be liters. Based on typical
/// single fill-up volumes for a vehicle and may not suit other equipment.
pub const GALLONS_HEURISTIC_MAX: f64 = 50.0;

/// Characters outside words, whitespace, periods and commas are noise
static NOISE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^\w\s.,]").unwrap());

static NUMBER: Lazy<Regex> = Lazy::new(|| Regex::new(r"(\d+\.?\d*)").unwrap());

/// Unit-bearing patterns in priority order
static UNIT_PATTERNS: Lazy<[(&'static str, Regex); 4]> = Lazy::new(|| {
    [
        (
            "number-gallons",
            Regex::new(r"(\d+\.?\d*)\s*(?:gal|gallons?|g)\b").unwrap(),
        ),
        (
            "number-liters",
            Regex::new(r"(\d+\.?\d*)\s*(?:l|liters?|ltr)\b").unwrap(),
        ),
        (
            "gallons-number",
            Regex::new(r"\b(?:gal|gallons?|g)\s*(\d+\.?\d*)").unwrap(),
        ),
        (
            "liters-number",
            Regex::new(r"\b(?:l|liters?|ltr)\s*(\d+\.?\d*)").unwrap(),
        ),
    ]
});

/// Replace noise characters with spaces and lower-case the result
pub fn normalize(text: &str) -> String {
    NOISE.replace_all(text, " ").to_lowercase()
}

/// Extract a fuel reading from free-form text
///
/// Returns `None` when no positive quantity can be found. Examples:
/// - "12.5 GAL" -> 12.5 gallons
/// - "GAL 8.25" -> 8.25 gallons
/// - "Total: 47.3 L" -> 47.3 liters
/// - "15.5" -> 15.5 gallons (no unit hint, at most 50)
pub fn parse_reading(text: &str) -> Option<ParsedReading> {
    let clean = normalize(text);

    for (name, pattern) in UNIT_PATTERNS.iter() {
        let Some(caps) = pattern.captures(&clean) else {
            continue;
        };
        let Some(amount) = caps.get(1).and_then(|m| parse_amount(m.as_str())) else {
            continue;
        };
        let fragment = caps.get(0).map_or("", |m| m.as_str());
        let unit = if fragment.contains("gal") {
            FuelUnit::Gallons
        } else {
            FuelUnit::Liters
        };
        tracing::debug!("Reading matched pattern {}: '{}'", name, fragment);
        return Some(ParsedReading { amount, unit });
    }

    let number = NUMBER.captures(&clean)?.get(1)?;
    let amount = parse_amount(number.as_str())?;
    let unit = infer_unit(&clean, amount);

    Some(ParsedReading { amount, unit })
}

/// Join OCR text fragments and extract a reading from the combined text
pub fn detect_reading<S: AsRef<str>>(fragments: &[S]) -> Option<DetectedReading> {
    let combined = fragments
        .iter()
        .map(|f| f.as_ref())
        .collect::<Vec<_>>()
        .join(" ");

    parse_reading(&combined).map(DetectedReading::from_parsed)
}

fn parse_amount(s: &str) -> Option<f64> {
    s.parse::<f64>().ok().filter(|amount| *amount > 0.0)
}

/// Pick a unit for a bare number from the rest of the text, then by magnitude
fn infer_unit(clean: &str, amount: f64) -> FuelUnit {
    if clean.contains("gal") {
        return FuelUnit::Gallons;
    }
    // "l" also covers "liter" and "litre"
    if clean.contains('l') {
        return FuelUnit::Liters;
    }

    let unit = if amount <= GALLONS_HEURISTIC_MAX {
        FuelUnit::Gallons
    } else {
        FuelUnit::Liters
    };
    tracing::warn!(
        "No unit found in reading '{}'. Assuming {} from magnitude {}.",
        clean.trim(),
        unit,
        amount
    );
    unit
}
