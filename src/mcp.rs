// Oblique Gate - MCP Server (JSON-RPC 2.0 over stdio)
// Copyright 2026 Joseph Stone - All Rights Reserved
//
// Line-delimited JSON-RPC. Exposes: start_oblique_thinking,
// plus empty prompts/list and resources/list for capability probes.

use crate::deck::TOOL_DESCRIPTION;
use crate::error::Result;
use crate::handlers::{Handlers, InvokeRequest, ListPromptsRequest, ListResourcesRequest};
use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use std::io::{self, BufRead, Write};

const PROTOCOL_VERSION: &str = "2024-11-05";
pub const SERVER_NAME: &str = "oblique-gate";
pub const SERVER_VERSION: &str = env!("CARGO_PKG_VERSION");

pub const TOOL_NAME: &str = "start_oblique_thinking";
pub const TOOL_TITLE: &str = "Oblique Strategies";

// JSON-RPC error codes
pub const PARSE_ERROR: i64 = -32700;
pub const METHOD_NOT_FOUND: i64 = -32601;
pub const INVALID_PARAMS: i64 = -32602;

fn response(id: &Value, result: Value) -> Value {
    json!({
        "jsonrpc": "2.0",
        "id": id,
        "result": result,
    })
}

fn error_response(id: &Value, code: i64, message: &str) -> Value {
    json!({
        "jsonrpc": "2.0",
        "id": id,
        "error": { "code": code, "message": message },
    })
}

/// Write one message as a single line and flush
fn send<W: Write>(out: &mut W, msg: &Value) -> Result<()> {
    serde_json::to_writer(&mut *out, msg)?;
    out.write_all(b"\n")?;
    out.flush()?;
    Ok(())
}

/// Tool list for tools/list. One tool, no parameters.
pub fn tool_definitions() -> Vec<Value> {
    vec![json!({
        "name": TOOL_NAME,
        "title": TOOL_TITLE,
        "description": TOOL_DESCRIPTION,
        "inputSchema": {
            "type": "object",
            "properties": {},
            "required": [],
        }
    })]
}

/// Missing or null params deserialize as the default request
fn parse_params<T: DeserializeOwned + Default>(params: Option<&Value>) -> serde_json::Result<T> {
    match params {
        None | Some(Value::Null) => Ok(T::default()),
        Some(v) => serde_json::from_value(v.clone()),
    }
}

fn handle_tool_call(handlers: &Handlers, id: &Value, params: &Value) -> Value {
    let name = params["name"].as_str().unwrap_or("");
    if name != TOOL_NAME {
        log::warn!("Unknown tool requested: {:?}", name);
        return error_response(id, INVALID_PARAMS, &format!("Unknown tool: {}", name));
    }

    let request: InvokeRequest = match parse_params(params.get("arguments")) {
        Ok(r) => r,
        Err(e) => return error_response(id, INVALID_PARAMS, &format!("Invalid arguments: {}", e)),
    };

    match handlers.handle_invoke(&request) {
        Ok(resp) => response(id, json!({
            "content": [{ "type": "text", "text": resp.result }],
            "structuredContent": resp,
            "isError": false,
        })),
        Err(e) => {
            log::error!("{} failed: {}", TOOL_NAME, e);
            response(id, json!({
                "content": [{ "type": "text", "text": format!("ERROR: {} failed", TOOL_NAME) }],
                "isError": true,
            }))
        }
    }
}

/// Route one decoded message. None means no reply (notification).
pub fn handle_message(handlers: &Handlers, msg: &Value) -> Option<Value> {
    let method = msg["method"].as_str().unwrap_or("");
    let id = &msg["id"];
    let params = &msg["params"];
    let is_notification = msg.get("id").map_or(true, Value::is_null);

    log::info!("Received: {}", method);

    match method {
        "initialize" => Some(response(id, json!({
            "protocolVersion": PROTOCOL_VERSION,
            "capabilities": { "tools": {} },
            "serverInfo": {
                "name": SERVER_NAME,
                "version": SERVER_VERSION,
            }
        }))),

        m if m.starts_with("notifications/") => None,

        "tools/list" => Some(response(id, json!({ "tools": tool_definitions() }))),

        "tools/call" => Some(handle_tool_call(handlers, id, params)),

        "prompts/list" => {
            let reply = parse_params::<ListPromptsRequest>(msg.get("params"))
                .map(|req| handlers.handle_list_prompts(&req))
                .and_then(serde_json::to_value);
            Some(match reply {
                Ok(v) => response(id, v),
                Err(e) => error_response(id, INVALID_PARAMS, &e.to_string()),
            })
        }

        "resources/list" => {
            let reply = parse_params::<ListResourcesRequest>(msg.get("params"))
                .map(|req| handlers.handle_list_resources(&req))
                .and_then(serde_json::to_value);
            Some(match reply {
                Ok(v) => response(id, v),
                Err(e) => error_response(id, INVALID_PARAMS, &e.to_string()),
            })
        }

        "ping" => Some(response(id, json!({}))),

        _ => {
            if is_notification {
                log::debug!("Ignoring notification: {}", method);
                None
            } else {
                log::warn!("Unknown method: {}", method);
                Some(error_response(id, METHOD_NOT_FOUND, &format!("Unknown method: {}", method)))
            }
        }
    }
}

/// Serve until `input` hits EOF. Generic so tests can drive it from buffers.
pub fn serve<R: BufRead, W: Write>(handlers: &Handlers, input: R, output: &mut W) -> Result<()> {
    for line in input.lines() {
        let line = match line {
            Ok(l) => l,
            Err(e) if e.kind() == io::ErrorKind::InvalidData => {
                log::warn!("stdin read error: {}", e);
                continue;
            }
            Err(e) => return Err(e.into()),
        };

        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let msg: Value = match serde_json::from_str(line) {
            Ok(v) => v,
            Err(e) => {
                log::warn!("JSON parse error: {}", e);
                send(output, &error_response(&Value::Null, PARSE_ERROR, &e.to_string()))?;
                continue;
            }
        };

        if let Some(reply) = handle_message(handlers, &msg) {
            send(output, &reply)?;
        }
    }
    Ok(())
}

/// Run on stdin/stdout. Blocks until stdin closes.
pub fn run(handlers: &Handlers) -> Result<()> {
    log::info!("Starting {} v{}", SERVER_NAME, SERVER_VERSION);
    log::info!("Mode: {}", handlers.mode());
    log::info!("Registered tool: {}", TOOL_NAME);
    log::info!("Registered compatibility handlers: prompts/list, resources/list");
    log::info!("Server capabilities: tools");

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    serve(handlers, stdin.lock(), &mut out)?;

    log::info!("stdin closed, {} stopped", SERVER_NAME);
    Ok(())
}
