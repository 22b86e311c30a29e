use axum::Json;
use serde_json::Value;

use crate::core::mcp::RpcResp;

/// JSON-RPC 2.0 error codes the shim answers with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    ParseError,
    InvalidRequest,
    MethodNotFound,
    InvalidParams,
}

impl ErrorCode {
    pub fn code(self) -> i32 {
        match self {
            ErrorCode::ParseError => -32700,
            ErrorCode::InvalidRequest => -32600,
            ErrorCode::MethodNotFound => -32601,
            ErrorCode::InvalidParams => -32602,
        }
    }
}

pub fn ok(id: Value, result: Value) -> Json<RpcResp> {
    Json(RpcResp::success(id, result))
}

pub fn error(id: Value, code: ErrorCode, message: impl Into<String>) -> Json<RpcResp> {
    Json(RpcResp::failure(id, code.code(), message))
}

/// The request could not be read, so there is no id to echo.
pub fn parse_error(message: impl Into<String>) -> Json<RpcResp> {
    error(Value::Null, ErrorCode::ParseError, message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn ok_carries_result_and_id() {
        let Json(resp) = ok(json!("req-1"), json!({"tools": []}));
        assert_eq!(resp.id, "req-1");
        assert!(resp.error.is_none());
        assert!(resp.result.unwrap()["tools"].is_array());
    }

    #[test]
    fn error_uses_standard_codes() {
        let Json(resp) = error(json!(4), ErrorCode::InvalidParams, "missing tool name");
        assert!(resp.result.is_none());
        let err = resp.error.unwrap();
        assert_eq!(err.code, -32602);
        assert_eq!(err.message, "missing tool name");
        assert_eq!(ErrorCode::MethodNotFound.code(), -32601);
    }

    #[test]
    fn parse_error_has_null_id() {
        let Json(resp) = parse_error("bad json");
        assert_eq!(resp.id, Value::Null);
        assert_eq!(resp.error.unwrap().code, -32700);
    }
}
