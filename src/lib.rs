//! MixMaster Library
//!
//! Fuel pump reading extraction and two-stroke oil mix calculation.

pub mod build_info;
pub mod config;
pub mod error;
pub mod mcp;
pub mod mixing;
pub mod models;
pub mod tools;
