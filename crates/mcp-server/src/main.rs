use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    hourgate_mcp::main_entry().await
}
