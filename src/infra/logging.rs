pub fn init() {
    // Initialize tracing subscriber once, honoring RUST_LOG if set.
    // Logs go to stderr: stdout carries MCP frames in stdio mode.
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Log a metrics-like line and feed the `metrics` facade.
pub fn log_metric(op: &'static str, metric: &'static str, value: f64) {
    tracing::info!(op = op, metric = metric, value = value, "metric");
    metrics::histogram!(metric, "op" => op).record(value);
}

/// Count one occurrence of `metric` for `op`.
pub fn count(op: &'static str, metric: &'static str) {
    tracing::debug!(op = op, metric = metric, "count");
    metrics::counter!(metric, "op" => op).increment(1);
}
