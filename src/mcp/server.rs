//! MixMaster MCP Server Implementation
//!
//! Implements the MCP server with all MixMaster tools.

use std::sync::Arc;

use rmcp::handler::server::router::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{
    CallToolResult, Content, Implementation, ProtocolVersion, ServerCapabilities, ServerInfo,
};
use rmcp::{schemars, tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler};
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;

use crate::config::Config;
use crate::tools::mixes;
use crate::tools::readings;
use crate::tools::status::StatusTracker;

/// MixMaster MCP Service
#[derive(Clone)]
pub struct MixMasterService {
    status_tracker: Arc<Mutex<StatusTracker>>,
    config: Arc<Config>,
    tool_router: ToolRouter<MixMasterService>,
}

impl MixMasterService {
    pub fn new(config: Config) -> Self {
        Self {
            status_tracker: Arc::new(Mutex::new(StatusTracker::new(config.clone()))),
            config: Arc::new(config),
            tool_router: Self::tool_router(),
        }
    }
}

fn to_json<T: Serialize>(value: &T) -> Result<CallToolResult, McpError> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| McpError::internal_error(format!("Serialization error: {}", e), None))?;
    Ok(CallToolResult::success(vec![Content::text(json)]))
}

// ============================================================================
// Parameter Structs
// ============================================================================

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ScanReadingParams {
    /// Text fragments returned by OCR of the pump display, in reading order
    pub fragments: Vec<String>,
    /// Gas:oil ratio such as "50:1" (defaults to the configured ratio)
    pub ratio: Option<String>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct CalculateMixParams {
    /// Gas amount as entered, e.g. "5.5"
    pub amount: String,
    /// "gallons" or "liters"
    pub unit: String,
    /// Gas:oil ratio such as "50:1" (defaults to the configured ratio)
    pub ratio: Option<String>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct FormatAmountsParams {
    pub gas_amount: f64,
    /// "gallons" or "liters"
    pub gas_unit: String,
    /// Oil amount in the unit matching gas_unit (fl oz for gallons, ml for liters)
    pub oil_amount: Option<f64>,
}

// ============================================================================
// Tool Implementations
// ============================================================================

#[tool_router]
impl MixMasterService {
    #[tool(description = "Get the current status of the MixMaster service including build info, configuration, and process information")]
    async fn mixmaster_status(&self) -> Result<CallToolResult, McpError> {
        let tracker = self.status_tracker.lock().await;
        to_json(&tracker.get_status())
    }

    #[tool(description = "Get step-by-step instructions for calculating two-stroke oil mixes from pump photos or manual entry.")]
    fn mix_instructions(&self) -> Result<CallToolResult, McpError> {
        use crate::tools::status::MIX_INSTRUCTIONS;
        Ok(CallToolResult::success(vec![Content::text(MIX_INSTRUCTIONS)]))
    }

    #[tool(description = "List the supported gas:oil mixing ratios and the default ratio")]
    fn list_ratios(&self) -> Result<CallToolResult, McpError> {
        to_json(&mixes::list_ratios(&self.config))
    }

    #[tool(description = "Detect a fuel reading (amount and gallons/liters) in OCR text fragments from a pump display, and calculate the oil needed when one is found")]
    fn scan_reading(&self, Parameters(p): Parameters<ScanReadingParams>) -> Result<CallToolResult, McpError> {
        let result = readings::scan_reading(&self.config, &p.fragments, p.ratio.as_deref())
            .map_err(|e| McpError::invalid_params(e, None))?;
        to_json(&result)
    }

    #[tool(description = "Calculate the two-stroke oil needed for a manually entered gas amount and unit at a gas:oil ratio")]
    fn calculate_mix(&self, Parameters(p): Parameters<CalculateMixParams>) -> Result<CallToolResult, McpError> {
        let result = mixes::calculate_mix(&self.config, &p.amount, &p.unit, p.ratio.as_deref())
            .map_err(|e| McpError::invalid_params(e, None))?;
        to_json(&result)
    }

    #[tool(description = "Format gas and oil amounts for display (2 decimals under 10, otherwise 1)")]
    fn format_amounts(&self, Parameters(p): Parameters<FormatAmountsParams>) -> Result<CallToolResult, McpError> {
        let result = mixes::format_amounts(p.gas_amount, &p.gas_unit, p.oil_amount)
            .map_err(|e| McpError::invalid_params(e, None))?;
        to_json(&result)
    }
}

// ============================================================================
// Server Handler
// ============================================================================

#[tool_handler]
impl ServerHandler for MixMasterService {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::LATEST,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "mixmaster".into(),
                version: crate::build_info::VERSION.into(),
                title: Some("MixMaster".into()),
                icons: None,
                website_url: None,
            },
            instructions: Some(
                "MixMaster - two-stroke oil mix calculator. \
                 Call mix_instructions first. \
                 scan_reading: OCR text fragments from a pump display -> reading + oil amount. \
                 calculate_mix: manual gas amount/unit -> oil amount. \
                 list_ratios, format_amounts, mixmaster_status."
                    .into(),
            ),
        }
    }
}
