use anyhow::Result;
use clap::{Parser, ValueEnum};
use hourgate_core::{clock_from_override, Clock};
use std::fmt;
use std::sync::Arc;

/// Fixed hour of day (0-23) used instead of the wall clock, for exercising the prodma window.
pub const FAKE_NOW_HOUR_ENV: &str = "FAKE_NOW_HOUR";

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Transport {
    /// MCP over stdin/stdout
    Stdio,
    /// Stateless streamable HTTP
    Http,
}

impl fmt::Display for Transport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stdio => f.write_str("stdio"),
            Self::Http => f.write_str("http"),
        }
    }
}

#[derive(Parser, Debug, Clone)]
#[command(name = "hourgate-mcp")]
#[command(about = "MCP server for bodma, codma and the time-gated prodma", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Transport to serve MCP over
    #[arg(long, value_enum, env = "HOURGATE_TRANSPORT", default_value_t = Transport::Stdio)]
    pub transport: Transport,

    /// Listen address for the HTTP transport
    #[arg(long, env = "HOURGATE_BIND", default_value = "0.0.0.0:8000")]
    pub bind: String,

    /// Route the HTTP transport is mounted at
    #[arg(long, default_value = "/mcp")]
    pub path: String,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Clone)]
pub struct ServerConfig {
    pub transport: Transport,
    pub bind: String,
    pub path: String,
    pub clock: Arc<dyn Clock>,
}

impl ServerConfig {
    /// Combine CLI flags with the hour override from the environment.
    pub fn from_cli(cli: Cli) -> Result<Self> {
        let hour_override = std::env::var(FAKE_NOW_HOUR_ENV).ok();
        Self::from_parts(cli, hour_override.as_deref())
    }

    pub fn from_parts(cli: Cli, hour_override: Option<&str>) -> Result<Self> {
        let path = cli.path.trim().to_string();
        if !path.starts_with('/') {
            anyhow::bail!("--path must start with '/' (got '{path}')");
        }
        Ok(Self {
            transport: cli.transport,
            bind: cli.bind,
            path,
            clock: clock_from_override(hour_override),
        })
    }
}

impl fmt::Debug for ServerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServerConfig")
            .field("transport", &self.transport)
            .field("bind", &self.bind)
            .field("path", &self.path)
            .field("clock", &self.clock.describe())
            .finish()
    }
}
