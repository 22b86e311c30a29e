use anyhow::{anyhow, bail, Context};
use clap::{Parser, Subcommand};
use std::process::ExitCode;
use std::sync::Arc;

use crate::clients::ClobRemote;
use crate::infra::config::{AppConfig, Config};
use crate::tools::args::Arguments;
use crate::tools::{catalog, ToolDispatcher};

#[derive(Parser)]
#[command(name = "polymarket-mcp-cli")]
#[command(about = "Polymarket MCP server - Admin CLI")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Health check the service
    Health {
        /// Service URL to check
        #[arg(short, long, default_value = "http://localhost:8080")]
        url: String,
    },
    /// Validate configuration
    Config {
        /// Also check that the backend host is a usable URL
        #[arg(long)]
        validate: bool,
    },
    /// List the tools the server advertises
    Tools,
    /// Run one tool against the live backend and print its text
    Call {
        /// Tool name, e.g. get-market-info
        tool: String,
        /// Tool arguments as a JSON object
        #[arg(short, long)]
        args: Option<String>,
        /// Backend host (defaults to configuration)
        #[arg(long)]
        host: Option<String>,
    },
    /// Show service status
    Status {
        /// Service URL to check
        #[arg(short, long, default_value = "http://localhost:8080")]
        url: String,
    },
}

pub async fn run() -> ExitCode {
    let cli = Cli::parse();

    run_commands(cli.command).await
}

pub async fn run_commands(command: Commands) -> ExitCode {
    match command {
        Commands::Health { url } => match health_check(&url).await {
            Ok(_) => {
                println!("✅ Service is healthy");
                ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!("❌ Health check failed: {e:#}");
                ExitCode::FAILURE
            }
        },
        Commands::Config { validate } => match validate_config(validate) {
            Ok(_) => {
                println!("✅ Configuration is valid");
                ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!("❌ Configuration validation failed: {e:#}");
                ExitCode::FAILURE
            }
        },
        Commands::Tools => {
            print!("{}", tools_summary());
            ExitCode::SUCCESS
        }
        Commands::Call { tool, args, host } => match call_tool(&tool, args.as_deref(), host).await {
            Ok(text) => {
                println!("{text}");
                ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!("❌ Tool call failed: {e:#}");
                ExitCode::FAILURE
            }
        },
        Commands::Status { url } => match show_status(&url).await {
            Ok(_) => ExitCode::SUCCESS,
            Err(e) => {
                eprintln!("❌ Status check failed: {e:#}");
                ExitCode::FAILURE
            }
        },
    }
}

async fn health_check(url: &str) -> anyhow::Result<()> {
    let client = reqwest::Client::new();
    let response = client
        .get(format!("{}/healthz", url))
        .timeout(std::time::Duration::from_millis(500))
        .send()
        .await?;

    if response.status().is_success() {
        Ok(())
    } else {
        Err(anyhow!("HTTP {}", response.status()))
    }
}

fn validate_config(check_backend: bool) -> anyhow::Result<AppConfig> {
    let cfg = Config::from_env();
    if !matches!(cfg.mode.as_str(), "server" | "stdio") {
        bail!("Invalid MODE: {}. Must be 'server' or 'stdio'", cfg.mode);
    }
    if cfg.mode == "server" && cfg.port == 0 {
        bail!("PORT cannot be 0");
    }

    let app = AppConfig::from_env_and_toml()?;
    if check_backend {
        reqwest::Url::parse(&app.backend.host)
            .with_context(|| format!("Invalid backend host: {}", app.backend.host))?;
        if app.backend.timeout_ms == 0 {
            bail!("CLOB_TIMEOUT_MS cannot be 0");
        }
    }
    Ok(app)
}

fn tools_summary() -> String {
    catalog()
        .iter()
        .map(|t| format!("{}\n  {}\n", t.name, t.description))
        .collect()
}

fn parse_args(raw: Option<&str>) -> anyhow::Result<Option<Arguments>> {
    let Some(raw) = raw else {
        return Ok(None);
    };
    let value: serde_json::Value = serde_json::from_str(raw).context("--args is not valid JSON")?;
    match value {
        serde_json::Value::Object(map) => Ok(Some(map)),
        _ => bail!("--args must be a JSON object"),
    }
}

async fn call_tool(tool: &str, raw_args: Option<&str>, host: Option<String>) -> anyhow::Result<String> {
    let arguments = parse_args(raw_args)?;
    let mut app = AppConfig::from_env_and_toml()?;
    if let Some(host) = host {
        app.backend.host = host;
    }
    let backend = ClobRemote::from_config(&app.backend)?;
    let dispatcher = ToolDispatcher::new(Arc::new(backend));
    let resp = dispatcher.dispatch(tool, arguments.as_ref()).await;
    Ok(resp.first_text().to_string())
}

async fn show_status(url: &str) -> anyhow::Result<()> {
    let client = reqwest::Client::new();

    let health_response = client
        .get(format!("{}/healthz", url))
        .timeout(std::time::Duration::from_secs(5))
        .send()
        .await?;

    println!(
        "🏥 Health Status: {}",
        if health_response.status().is_success() {
            "✅ Healthy"
        } else {
            "❌ Unhealthy"
        }
    );

    let tools_response = client
        .post(format!("{}/rpc", url))
        .header("content-type", "application/json")
        .json(&serde_json::json!({
            "jsonrpc": "2.0",
            "id": 1,
            "method": "tools/list",
            "params": {}
        }))
        .timeout(std::time::Duration::from_millis(500))
        .send()
        .await;

    match tools_response {
        Ok(resp) if resp.status().is_success() => {
            println!("🔧 Tools: ✅ Available");
        }
        Ok(resp) => {
            println!("🔧 Tools: ❌ HTTP {}", resp.status());
        }
        Err(_) => {
            println!("🔧 Tools: ❌ Unavailable");
        }
    }

    let cfg = Config::from_env();
    println!("\n📋 Configuration:");
    println!("  Mode: {}", cfg.mode);
    println!("  Port: {}", cfg.port);
    println!(
        "  Log Level: {}",
        std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into())
    );

    match AppConfig::from_env_and_toml() {
        Ok(app) => {
            let reachable = match ClobRemote::from_config(&app.backend) {
                Ok(backend) => backend.health().await,
                Err(_) => false,
            };
            println!(
                "  CLOB Backend: {} ({})",
                app.backend.host,
                if reachable { "reachable" } else { "unreachable" }
            );
        }
        Err(e) => println!("  CLOB Backend: config error: {e}"),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use serial_test::serial;
    use std::env;

    fn clear_env() {
        for k in ["MODE", "PORT", "CLOB_HOST", "CLOB_TIMEOUT_MS", crate::infra::config::CONFIG_PATH_ENV] {
            env::remove_var(k);
        }
    }

    #[tokio::test]
    async fn health_check_fails_when_nothing_listens() {
        let result = health_check("http://localhost:9999").await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn health_check_ok_and_error_paths() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/healthz");
            then.status(200).body("ok");
        });
        assert!(health_check(&server.base_url()).await.is_ok());

        let bad = MockServer::start();
        bad.mock(|when, then| {
            when.method(GET).path("/healthz");
            then.status(500);
        });
        let err = health_check(&bad.base_url()).await.unwrap_err();
        assert!(err.to_string().contains("500"));
    }

    #[test]
    #[serial]
    fn validate_config_accepts_defaults() {
        clear_env();
        let app = validate_config(true).unwrap();
        assert_eq!(app.backend.host, crate::infra::config::DEFAULT_CLOB_HOST);
    }

    #[test]
    #[serial]
    fn validate_config_rejects_invalid_mode() {
        clear_env();
        env::set_var("MODE", "invalid");
        let err = validate_config(false).unwrap_err();
        assert!(err.to_string().contains("Invalid MODE"));
        clear_env();
    }

    #[test]
    #[serial]
    fn validate_config_rejects_port_zero_in_server_mode() {
        clear_env();
        env::set_var("PORT", "0");
        let err = validate_config(false).unwrap_err();
        assert!(err.to_string().contains("PORT cannot be 0"));

        env::set_var("MODE", "stdio");
        assert!(validate_config(false).is_ok());
        clear_env();
    }

    #[test]
    #[serial]
    fn validate_flag_checks_backend_host() {
        clear_env();
        env::set_var("CLOB_HOST", "not a url");
        assert!(validate_config(false).is_ok());
        let err = validate_config(true).unwrap_err();
        assert!(err.to_string().contains("Invalid backend host"));
        clear_env();
    }

    #[test]
    fn tools_summary_lists_every_tool() {
        let out = tools_summary();
        for name in ["get-market-info", "list-markets", "get-market-prices", "get-market-history"] {
            assert!(out.contains(name), "missing {name}");
        }
    }

    #[test]
    fn parse_args_requires_an_object() {
        assert!(parse_args(None).unwrap().is_none());
        assert_eq!(parse_args(Some(r#"{"limit":2}"#)).unwrap().unwrap()["limit"], 2);
        assert!(parse_args(Some("[1,2]")).is_err());
        assert!(parse_args(Some("{oops")).is_err());
    }

    #[tokio::test]
    #[serial]
    async fn call_tool_runs_against_given_host() {
        clear_env();
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/markets/0xabc");
            then.status(200)
                .header("content-type", "application/json")
                .body(r#"{"condition_id":"0xabc","title":"Rain tomorrow?","current_price":0.42}"#);
        });
        let text = call_tool(
            "get-market-prices",
            Some(r#"{"market_id":"0xabc"}"#),
            Some(server.base_url()),
        )
        .await
        .unwrap();
        assert_eq!(text, "Current Market Prices for Rain tomorrow?\n\nCurrent Price: 0.42\n---\n");
    }

    #[tokio::test]
    #[serial]
    async fn call_tool_without_args_prints_missing_arguments() {
        clear_env();
        let text = call_tool("list-markets", None, Some("http://localhost:9".into()))
            .await
            .unwrap();
        assert_eq!(text, "Missing arguments for the request");
    }

    #[tokio::test]
    #[serial]
    async fn status_handles_non_200_health_and_tools() {
        clear_env();
        let server = MockServer::start();
        env::set_var("CLOB_HOST", server.base_url());
        server.mock(|when, then| {
            when.method(GET).path("/healthz");
            then.status(500).body("boom");
        });
        server.mock(|when, then| {
            when.method(POST).path("/rpc");
            then.status(500).body("boom");
        });
        assert!(show_status(&server.base_url()).await.is_ok());
        clear_env();
    }

    #[tokio::test]
    async fn status_fails_when_service_is_down() {
        assert!(show_status("http://localhost:9999").await.is_err());
    }

    #[tokio::test]
    #[serial]
    async fn run_commands_config_and_tools() {
        clear_env();
        assert_eq!(run_commands(Commands::Config { validate: true }).await, ExitCode::SUCCESS);
        assert_eq!(run_commands(Commands::Tools).await, ExitCode::SUCCESS);

        env::set_var("MODE", "nope");
        assert_eq!(run_commands(Commands::Config { validate: true }).await, ExitCode::FAILURE);
        clear_env();
    }

    #[tokio::test]
    #[serial]
    async fn run_commands_call_rejects_bad_args() {
        clear_env();
        let code = run_commands(Commands::Call {
            tool: "list-markets".into(),
            args: Some("not json".into()),
            host: None,
        })
        .await;
        assert_eq!(code, ExitCode::FAILURE);
    }

    #[tokio::test]
    async fn run_commands_health_success() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/healthz");
            then.status(200).body("ok");
        });
        let code = run_commands(Commands::Health { url: server.base_url() }).await;
        assert_eq!(code, ExitCode::SUCCESS);
    }
}
