use crate::infra::config::{AppConfig, Config};
use crate::infra::mcp::MarketSvc;
use std::net::SocketAddr;

pub async fn run_server() -> anyhow::Result<()> {
    let cfg = Config::from_env();
    tracing::info!(
        mode = %cfg.mode,
        port = cfg.port,
        deprecate_rest = cfg.deprecate_rest,
        "BOOT polymarket-mcp"
    );

    let app_cfg = AppConfig::from_env_and_toml()?;
    let svc = MarketSvc::from_config(&app_cfg)?;

    // Stdio mode: MCP over stdin/stdout only, no HTTP listener.
    if cfg.mode == "stdio" {
        crate::infra::runtime::mcp_transport::serve_stdio(svc)
            .await
            .map_err(|e| anyhow::anyhow!(e))?;
        return Ok(());
    }

    let app = if cfg.deprecate_rest {
        crate::infra::http_app::build_app_default(svc)
    } else {
        crate::infra::http_app::build_app_with_rpc(svc)
    };

    let addr: SocketAddr = ([0, 0, 0, 0], cfg.port).into();
    tracing::info!(%addr, "listening");
    axum::serve(tokio::net::TcpListener::bind(addr).await?, app).await?;
    Ok(())
}
