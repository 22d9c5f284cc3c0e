//! Hourgate MCP server
//!
//! Serves three two-operand tools to MCP clients. The advertised tool set depends on the
//! server's local time of day: `prodma` is only listed, and only callable, between 10:00 and
//! 22:00.
//!
//! ## Tools
//!
//! - `bodma` - `(a^b) / (a*b)`
//! - `codma` - `(a*b) / (a^b)`
//! - `prodma` - `(a^b) * (b^a)`, time-gated
//!
//! ## Usage
//!
//! ```json
//! {
//!   "mcpServers": {
//!     "hourgate": {
//!       "command": "hourgate-mcp",
//!       "env": { "FAKE_NOW_HOUR": "11" }
//!     }
//!   }
//! }
//! ```
//!
//! `hourgate-mcp --transport http` serves stateless streamable HTTP on `0.0.0.0:8000/mcp`.

mod catalog;
pub mod config;
mod hints;
mod render;
mod service;
pub mod transport;

use anyhow::{Context, Result};
use clap::Parser;
use config::{Cli, ServerConfig, Transport};
use hourgate_core::ToolSurface;

pub use service::HourgateService;

pub async fn main_entry() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = ServerConfig::from_cli(cli)?;
    log::info!(
        "Starting hourgate MCP server ({} transport, clock: {})",
        config.transport,
        config.clock.describe()
    );

    let surface = ToolSurface::builtin(config.clock.clone()).context("build tool registry")?;
    let service = HourgateService::new(surface);

    match config.transport {
        Transport::Stdio => transport::serve_stdio(service).await?,
        Transport::Http => transport::serve_http(service, &config.bind, &config.path).await?,
    }

    log::info!("hourgate MCP server stopped");
    Ok(())
}

fn init_logging(verbose: bool) {
    // stdout carries the MCP protocol in stdio mode
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    builder.target(env_logger::Target::Stderr);
    if verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.init();
}
