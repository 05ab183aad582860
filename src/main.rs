//! MixMaster
//!
//! An MCP server for two-stroke oil mix calculation.

use rmcp::ServiceExt;
use tokio::io::{stdin, stdout};
use tracing_subscriber::EnvFilter;

use mixmaster::build_info;
use mixmaster::config::Config;
use mixmaster::mcp::MixMasterService;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Logs go to stderr so they don't interfere with MCP stdio
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("mixmaster=info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    build_info::print_startup_banner();

    let config = Config::from_env()?;
    eprintln!(
        "Default ratio: {} | Max gas amount: {}",
        config.default_ratio.label, config.max_gas_amount
    );
    eprintln!("Starting MCP server on stdio...");

    let service = MixMasterService::new(config);

    let transport = (stdin(), stdout());
    let server = service.serve(transport).await?;
    server.waiting().await?;

    Ok(())
}
