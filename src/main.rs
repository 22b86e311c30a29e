use polymarket_mcp::infra;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    infra::logging::init();
    infra::boot::run_server().await
}
