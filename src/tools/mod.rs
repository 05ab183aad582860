//! MixMaster Tools module
//!
//! MCP tool implementations for MixMaster.

pub mod mixes;
pub mod readings;
pub mod status;
