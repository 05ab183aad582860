//! MixMaster Status Tool
//!
//! Provides runtime status information and usage instructions.

use serde::Serialize;
use std::time::Instant;
use sysinfo::{Pid, ProcessesToUpdate, System};

use crate::build_info::BuildInfo;
use crate::config::Config;

/// Usage instructions for AI assistants
pub const MIX_INSTRUCTIONS: &str = r#"
# MixMaster Instructions

MixMaster works out how much two-stroke oil to add to a quantity of gasoline.

## From a pump photo

1. Run OCR on the photo of the pump display (outside MixMaster).
2. Call `scan_reading` with every text fragment the OCR returned, in order.
   Optionally pass `ratio` (e.g. "40:1"); otherwise the default ratio is used.
3. If `found` is false, ask the user for the amount and use `calculate_mix`.

## Manual entry

Call `calculate_mix` with:
- `amount`: gas quantity as typed, e.g. "5.5"
- `unit`: "gallons" or "liters"
- `ratio` (optional): e.g. "50:1"

## Notes

- Gallons produce oil in fluid ounces (128 fl oz per gallon).
- Liters produce oil in milliliters (1000 ml per liter).
- Oil amounts are rounded to 2 decimal places.
- Readings with no unit are assumed to be gallons up to 50 and liters above.
  Confirm with the user when `scan_reading` text shows no unit.
- Call `list_ratios` for the supported presets.
"#;

/// Runtime status of the MixMaster service
#[derive(Debug, Clone, Serialize)]
pub struct MixMasterStatus {
    pub build_number: u64,
    pub build_timestamp: &'static str,
    pub version: &'static str,

    pub default_ratio: String,
    pub max_gas_amount: f64,

    pub started_at: String,
    pub uptime_seconds: u64,
    pub process_id: u32,
    pub memory_usage_bytes: u64,
}

/// Status tracker for collecting runtime information
pub struct StatusTracker {
    start_time: Instant,
    started_at: chrono::DateTime<chrono::Utc>,
    config: Config,
}

impl StatusTracker {
    pub fn new(config: Config) -> Self {
        Self {
            start_time: Instant::now(),
            started_at: chrono::Utc::now(),
            config,
        }
    }

    /// Get the current status
    pub fn get_status(&self) -> MixMasterStatus {
        let build_info = BuildInfo::current();

        let pid = std::process::id();
        let mut sys = System::new();
        sys.refresh_processes(ProcessesToUpdate::Some(&[Pid::from_u32(pid)]));

        let memory_usage_bytes = sys
            .process(Pid::from_u32(pid))
            .map(|p| p.memory())
            .unwrap_or(0);

        MixMasterStatus {
            build_number: build_info.build_number,
            build_timestamp: build_info.build_timestamp,
            version: build_info.version,
            default_ratio: self.config.default_ratio.label.clone(),
            max_gas_amount: self.config.max_gas_amount,
            started_at: self.started_at.format("%Y-%m-%dT%H:%M:%SZ").to_string(),
            uptime_seconds: self.start_time.elapsed().as_secs(),
            process_id: pid,
            memory_usage_bytes,
        }
    }
}
