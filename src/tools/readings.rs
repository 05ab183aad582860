//! Reading MCP Tools
//!
//! Turns OCR text fragments into a fuel reading and, when one is found, the
//! oil needed for it.

use serde::Serialize;

use crate::config::Config;
use crate::mixing::{detect_reading, MixRequest};
use crate::models::{DetectedReading, MixSummary};

pub const NO_READING_MESSAGE: &str =
    "Could not detect a gas amount from the text. Please try again or use manual input (calculate_mix).";

/// Response for scan_reading
#[derive(Debug, Serialize)]
pub struct ScanReadingResponse {
    pub found: bool,
    pub text: String,
    pub reading: Option<DetectedReading>,
    pub mix: Option<MixSummary>,
    pub message: Option<String>,
}

/// Detect a fuel reading in OCR fragments and calculate the mix for it
pub fn scan_reading(
    config: &Config,
    fragments: &[String],
    ratio: Option<&str>,
) -> Result<ScanReadingResponse, String> {
    let ratio = config.resolve_ratio(ratio).map_err(|e| e.to_string())?;
    let text = fragments.join(" ");

    let Some(reading) = detect_reading(fragments) else {
        tracing::info!("No reading detected in '{}'", text);
        return Ok(ScanReadingResponse {
            found: false,
            text,
            reading: None,
            mix: None,
            message: Some(NO_READING_MESSAGE.to_string()),
        });
    };

    let mix = MixRequest::new(reading.amount, reading.unit, ratio)
        .map_err(|e| e.to_string())?
        .summarize();

    Ok(ScanReadingResponse {
        found: true,
        text,
        reading: Some(reading),
        mix: Some(mix),
        message: None,
    })
}
