//! Stdio serve loop.
//!
//! Reads newline-delimited JSON-RPC requests from stdin, handles each
//! `tools/call` in its own task so a slow editor invocation never blocks
//! other requests, and funnels all responses through one writer task so
//! concurrent results cannot interleave on stdout. Shutdown on stdin EOF
//! or ctrl-c.

use std::sync::Arc;

use serde_json::{json, Value};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::sync::mpsc;

use reshack_core::runner::EditorConfig;

use crate::dispatch;
use crate::protocol::{
    initialize_result, JsonRpcRequest, JsonRpcResponse, METHOD_NOT_FOUND, PARSE_ERROR,
};
use crate::tools;

/// Handle one raw input line. `None` means no response is due (notification).
pub async fn handle_line(config: &EditorConfig, line: &str) -> Option<JsonRpcResponse> {
    let request: JsonRpcRequest = match serde_json::from_str(line) {
        Ok(request) => request,
        Err(e) => {
            return Some(JsonRpcResponse::error(
                Value::Null,
                PARSE_ERROR,
                format!("Parse error: {e}"),
            ))
        }
    };
    handle_request(config, request).await
}

/// Handle one parsed request. `None` means no response is due.
pub async fn handle_request(
    config: &EditorConfig,
    request: JsonRpcRequest,
) -> Option<JsonRpcResponse> {
    if request.is_notification() {
        tracing::debug!(method = %request.method, "Ignoring notification");
        return None;
    }
    let id = request.id.clone().unwrap_or(Value::Null);

    match request.method.as_str() {
        "initialize" => Some(JsonRpcResponse::result(id, initialize_result())),
        "ping" => Some(JsonRpcResponse::result(id, json!({}))),
        "tools/list" => Some(JsonRpcResponse::result(
            id,
            json!({ "tools": tools::tool_definitions() }),
        )),
        "tools/call" => {
            let params = request.params.unwrap_or(Value::Null);
            let Some(name) = params.get("name").and_then(Value::as_str) else {
                return Some(JsonRpcResponse::error(
                    id,
                    crate::protocol::INVALID_PARAMS,
                    "Missing tool name",
                ));
            };
            let arguments = params
                .get("arguments")
                .cloned()
                .unwrap_or_else(|| json!({}));
            let result = dispatch::call_tool(config, name, arguments).await;
            match serde_json::to_value(&result) {
                Ok(value) => Some(JsonRpcResponse::result(id, value)),
                Err(e) => Some(JsonRpcResponse::error(
                    id,
                    crate::protocol::INVALID_PARAMS,
                    format!("Failed to serialize result: {e}"),
                )),
            }
        }
        method => Some(JsonRpcResponse::error(
            id,
            METHOD_NOT_FOUND,
            format!("Method not found: {method}"),
        )),
    }
}

/// Run the server until stdin closes or an interrupt arrives.
pub async fn serve(config: Arc<EditorConfig>) -> std::io::Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let (tx, mut rx) = mpsc::channel::<String>(64);

    // Single writer task: responses from concurrent request tasks are
    // serialized here so lines never interleave.
    let writer = tokio::spawn(async move {
        let mut stdout = tokio::io::stdout();
        while let Some(line) = rx.recv().await {
            if stdout.write_all(line.as_bytes()).await.is_err()
                || stdout.write_all(b"\n").await.is_err()
            {
                break;
            }
            let _ = stdout.flush().await;
        }
    });

    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => {
                tracing::info!("Received interrupt, shutting down");
                break;
            }
            line = lines.next_line() => {
                match line? {
                    None => {
                        tracing::info!("stdin closed, shutting down");
                        break;
                    }
                    Some(line) => {
                        let line = line.trim().to_string();
                        if line.is_empty() {
                            continue;
                        }
                        let config = Arc::clone(&config);
                        let tx = tx.clone();
                        tokio::spawn(async move {
                            if let Some(response) = handle_line(&config, &line).await {
                                if let Ok(json) = serde_json::to_string(&response) {
                                    let _ = tx.send(json).await;
                                }
                            }
                        });
                    }
                }
            }
        }
    }

    drop(tx);
    let _ = writer.await;
    Ok(())
}
