use anyhow::{Context, Result};
use rmcp::{
    service::{RunningService, Service, ServiceExt},
    transport::TokioChildProcess,
};
use std::path::PathBuf;
use std::process::Stdio;
use std::time::Duration;
use tokio::process::{Child, Command};

pub fn locate_hourgate_mcp_bin() -> Result<PathBuf> {
    if let Some(path) = option_env!("CARGO_BIN_EXE_hourgate-mcp") {
        return Ok(PathBuf::from(path));
    }

    // `.../target/{debug|release}/deps/<test>` → `.../target/{debug|release}/hourgate-mcp`
    if let Ok(exe) = std::env::current_exe() {
        if let Some(target_profile_dir) = exe.parent().and_then(|p| p.parent()) {
            let candidate = target_profile_dir.join("hourgate-mcp");
            if candidate.exists() {
                return Ok(candidate);
            }
        }
    }

    let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let repo_root = manifest_dir
        .ancestors()
        .nth(2)
        .context("failed to resolve repo root from CARGO_MANIFEST_DIR")?;
    for rel in ["target/debug/hourgate-mcp", "target/release/hourgate-mcp"] {
        let candidate = repo_root.join(rel);
        if candidate.exists() {
            return Ok(candidate);
        }
    }

    anyhow::bail!("failed to locate hourgate-mcp binary; build with: cargo build -p hourgate-mcp")
}

/// Spawn the server over stdio with its clock pinned to `hour`.
#[allow(dead_code)]
pub async fn start_server_at_hour(
    hour: u32,
) -> Result<RunningService<rmcp::RoleClient, impl Service<rmcp::RoleClient>>> {
    let bin = locate_hourgate_mcp_bin()?;

    let mut cmd = Command::new(bin);
    cmd.env("FAKE_NOW_HOUR", hour.to_string());
    cmd.env("RUST_LOG", "warn");
    cmd.env_remove("HOURGATE_TRANSPORT");

    let transport = TokioChildProcess::new(cmd).context("spawn mcp server")?;
    tokio::time::timeout(Duration::from_secs(10), ().serve(transport))
        .await
        .context("timeout starting MCP server")?
        .context("start MCP server")
}

/// A `hourgate-mcp --transport http` child, killed when dropped.
#[allow(dead_code)]
pub struct HttpServer {
    pub url: String,
    _child: Child,
}

/// Spawn the server on a free loopback port with its clock pinned to `hour` and wait until
/// it accepts connections.
#[allow(dead_code)]
pub async fn start_http_server_at_hour(hour: u32) -> Result<HttpServer> {
    let bin = locate_hourgate_mcp_bin()?;
    let port = std::net::TcpListener::bind("127.0.0.1:0")
        .and_then(|listener| listener.local_addr())
        .context("reserve a loopback port")?
        .port();
    let bind = format!("127.0.0.1:{port}");

    let mut cmd = Command::new(bin);
    cmd.args(["--transport", "http", "--bind", &bind, "--path", "/mcp"]);
    cmd.env("FAKE_NOW_HOUR", hour.to_string());
    cmd.env("RUST_LOG", "warn");
    cmd.stdin(Stdio::null()).stdout(Stdio::null());
    cmd.kill_on_drop(true);
    let child = cmd.spawn().context("spawn http mcp server")?;

    tokio::time::timeout(Duration::from_secs(10), async {
        while tokio::net::TcpStream::connect(&bind).await.is_err() {
            tokio::time::sleep(Duration::from_millis(50)).await;
        }
    })
    .await
    .context("timeout waiting for http server")?;

    Ok(HttpServer {
        url: format!("http://{bind}/mcp"),
        _child: child,
    })
}
