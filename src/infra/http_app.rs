use axum::{
    routing::{any_service, get, post},
    Router,
};
use std::sync::Arc;

use crate::infra::mcp::MarketSvc;
use crate::infra::runtime::mcp_transport::{make_streamable_http_service, LocalSessionManager};

fn mcp_routes<S>(svc: &MarketSvc) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    let session_mgr = Arc::new(LocalSessionManager::default());
    let handler = svc.clone();
    let mcp_service = make_streamable_http_service(move || handler.clone(), session_mgr);

    Router::new()
        .route("/healthz", get(|| async { "ok" }))
        .route_service("/mcp", any_service(mcp_service))
}

/// `/healthz` + streamable MCP at `/mcp`.
pub fn build_app_default(svc: MarketSvc) -> Router {
    mcp_routes(&svc)
}

/// Default app **plus** the plain JSON-RPC shim at `/rpc`.
pub fn build_app_with_rpc(svc: MarketSvc) -> Router {
    mcp_routes(&svc)
        .route("/rpc", post(crate::api::rpc::http))
        .with_state(svc.dispatcher().clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::config::AppConfig;
    use axum::body::{to_bytes, Body};
    use hyper::Request;
    use tower::ServiceExt;

    fn svc() -> MarketSvc {
        MarketSvc::from_config(&AppConfig::default()).unwrap()
    }

    #[tokio::test]
    async fn healthz_answers_ok() {
        let app = build_app_default(svc());
        let req = Request::builder().uri("/healthz").body(Body::empty()).unwrap();
        let resp = app.oneshot(req).await.unwrap();
        assert!(resp.status().is_success());
        let bytes = to_bytes(resp.into_body(), 1024).await.unwrap();
        assert_eq!(&bytes[..], b"ok");
    }

    #[tokio::test]
    async fn rpc_route_only_when_enabled() {
        let body = r#"{"jsonrpc":"2.0","id":1,"method":"tools/list"}"#;
        let req = || {
            Request::builder()
                .method("POST")
                .uri("/rpc")
                .header("content-type", "application/json")
                .body(Body::from(body))
                .unwrap()
        };
        let resp = build_app_with_rpc(svc()).oneshot(req()).await.unwrap();
        assert!(resp.status().is_success());
        let resp = build_app_default(svc()).oneshot(req()).await.unwrap();
        assert_eq!(resp.status(), 404);
    }
}
