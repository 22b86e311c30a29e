//! Plain JSON-RPC over HTTP for clients that do not speak streamable HTTP.

use axum::body::Bytes;
use axum::extract::State;
use axum::Json;
use serde_json::{json, Value as J};

use crate::core::mcp::{InitializeResult, RpcReq, RpcResp};
use crate::infra::http::json as http_json;
use crate::tools::{catalog, ToolDispatcher};

fn tools_list() -> J {
    let tools: Vec<J> = catalog().iter().map(|t| t.to_json()).collect();
    json!({ "tools": tools })
}

async fn call_tool(dispatcher: &ToolDispatcher, params: &J) -> Result<J, String> {
    let name = params
        .get("name")
        .and_then(|v| v.as_str())
        .ok_or("missing tool name")?;
    let arguments = params.get("arguments").and_then(|v| v.as_object());
    let resp = dispatcher.dispatch(name, arguments).await;
    serde_json::to_value(resp).map_err(|e| e.to_string())
}

pub async fn http(State(dispatcher): State<ToolDispatcher>, body: Bytes) -> Json<RpcResp> {
    let req: RpcReq = match serde_json::from_slice(&body) {
        Ok(r) => r,
        Err(e) => {
            tracing::warn!(error = %e, "rpc parse error");
            return http_json::parse_error(format!("parse error: {e}"));
        }
    };
    tracing::debug!(method = %req.method, id = ?req.id, "rpc request");
    let id = req.id.clone();
    if req.jsonrpc != "2.0" {
        return http_json::error(
            id,
            http_json::ErrorCode::InvalidRequest,
            format!("unsupported jsonrpc version: {}", req.jsonrpc),
        );
    }
    let resp = match req.method.as_str() {
        "initialize" => http_json::ok(id, json!(InitializeResult::current())),
        "shutdown" => http_json::ok(id, J::Null),
        "tools.list" | "tools/list" => http_json::ok(id, tools_list()),
        "tools.call" | "tools/call" => match call_tool(&dispatcher, &req.params).await {
            Ok(out) => http_json::ok(id, out),
            Err(e) => http_json::error(id, http_json::ErrorCode::InvalidParams, e),
        },
        _ => http_json::error(
            id,
            http_json::ErrorCode::MethodNotFound,
            format!("unknown method: {}", req.method),
        ),
    };
    tracing::trace!(response = ?resp.0, "rpc response");
    resp
}
