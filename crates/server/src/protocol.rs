//! JSON-RPC 2.0 / MCP wire types.
//!
//! The transport is newline-delimited JSON-RPC 2.0 over stdio, per the MCP
//! stdio transport. Only the subset of the protocol this server speaks is
//! modeled here.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// JSON-RPC protocol version tag.
pub const JSONRPC_VERSION: &str = "2.0";

/// MCP protocol revision this server implements.
pub const PROTOCOL_VERSION: &str = "2024-11-05";

// Standard JSON-RPC error codes.
pub const PARSE_ERROR: i32 = -32700;
pub const METHOD_NOT_FOUND: i32 = -32601;
pub const INVALID_PARAMS: i32 = -32602;

/// An incoming request or notification.
///
/// A request without an `id` is a notification and receives no response.
#[derive(Debug, Clone, Deserialize)]
pub struct JsonRpcRequest {
    #[serde(default)]
    pub jsonrpc: Option<String>,
    #[serde(default)]
    pub id: Option<Value>,
    pub method: String,
    #[serde(default)]
    pub params: Option<Value>,
}

impl JsonRpcRequest {
    pub fn is_notification(&self) -> bool {
        self.id.is_none()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct JsonRpcError {
    pub code: i32,
    pub message: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct JsonRpcResponse {
    pub jsonrpc: &'static str,
    pub id: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<JsonRpcError>,
}

impl JsonRpcResponse {
    pub fn result(id: Value, result: Value) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION,
            id,
            result: Some(result),
            error: None,
        }
    }

    pub fn error(id: Value, code: i32, message: impl Into<String>) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION,
            id,
            result: None,
            error: Some(JsonRpcError {
                code,
                message: message.into(),
            }),
        }
    }
}

/// One block of tool-call result content. Only text content is produced.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ContentBlock {
    Text { text: String },
}

/// Result payload for `tools/call`.
#[derive(Debug, Clone, Serialize)]
pub struct ToolCallResult {
    pub content: Vec<ContentBlock>,
    #[serde(rename = "isError", skip_serializing_if = "std::ops::Not::not")]
    pub is_error: bool,
}

impl ToolCallResult {
    pub fn text(text: String, is_error: bool) -> Self {
        Self {
            content: vec![ContentBlock::Text { text }],
            is_error,
        }
    }
}

/// Result payload for `initialize`.
pub fn initialize_result() -> Value {
    json!({
        "protocolVersion": PROTOCOL_VERSION,
        "capabilities": { "tools": {} },
        "serverInfo": {
            "name": "reshack",
            "version": env!("CARGO_PKG_VERSION"),
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_without_id_is_notification() {
        let req: JsonRpcRequest =
            serde_json::from_str(r#"{"jsonrpc":"2.0","method":"notifications/initialized"}"#)
                .expect("valid request");
        assert!(req.is_notification());
    }

    #[test]
    fn response_serializes_result_without_error_field() {
        let resp = JsonRpcResponse::result(serde_json::json!(1), serde_json::json!({"ok": true}));
        let value = serde_json::to_value(&resp).expect("serialize");
        assert_eq!(value["jsonrpc"], "2.0");
        assert_eq!(value["result"]["ok"], true);
        assert!(value.get("error").is_none());
    }

    #[test]
    fn error_response_carries_code_and_message() {
        let resp = JsonRpcResponse::error(Value::Null, PARSE_ERROR, "Parse error");
        let value = serde_json::to_value(&resp).expect("serialize");
        assert_eq!(value["error"]["code"], PARSE_ERROR);
        assert_eq!(value["error"]["message"], "Parse error");
        assert!(value.get("result").is_none());
    }

    #[test]
    fn tool_call_result_omits_is_error_when_false() {
        let ok = serde_json::to_value(ToolCallResult::text("done".into(), false)).expect("ok");
        assert!(ok.get("isError").is_none());
        assert_eq!(ok["content"][0]["type"], "text");
        assert_eq!(ok["content"][0]["text"], "done");

        let err = serde_json::to_value(ToolCallResult::text("bad".into(), true)).expect("err");
        assert_eq!(err["isError"], true);
    }

    #[test]
    fn initialize_result_advertises_tools_capability() {
        let value = initialize_result();
        assert_eq!(value["protocolVersion"], PROTOCOL_VERSION);
        assert!(value["capabilities"]["tools"].is_object());
        assert_eq!(value["serverInfo"]["name"], "reshack");
    }
}
