//! JSON-RPC framing and MCP method dispatch

use hub_units::CategoryRegistry;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value as JsonValue};
use tracing::{debug, error, info, warn};

use crate::config::ServerConfig;
use crate::tools::{error_response, standard_tools, ToolContext, ToolRegistry};

pub const PROTOCOL_VERSION: &str = "2025-11-25";
pub const SERVER_NAME: &str = "converter-hub";
pub const SERVER_VERSION: &str = env!("CARGO_PKG_VERSION");

pub const PARSE_ERROR: i32 = -32700;
pub const METHOD_NOT_FOUND: i32 = -32601;
pub const INVALID_PARAMS: i32 = -32602;

// MCP Protocol types
#[derive(Debug, Deserialize)]
pub struct McpRequest {
    #[allow(dead_code)]
    pub jsonrpc: String,
    pub id: Option<JsonValue>,
    pub method: String,
    #[serde(default)]
    pub params: Option<JsonValue>,
}

#[derive(Debug, Serialize)]
pub struct McpResponse {
    pub jsonrpc: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<JsonValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<JsonValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<McpError>,
}

impl McpResponse {
    fn reply(id: Option<JsonValue>, result: Result<JsonValue, McpError>) -> Self {
        let (result, error) = match result {
            Ok(r) => (Some(r), None),
            Err(e) => (None, Some(e)),
        };
        McpResponse {
            jsonrpc: "2.0".to_string(),
            id,
            result,
            error,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct McpError {
    pub code: i32,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<JsonValue>,
}

impl McpError {
    fn new(code: i32, message: impl Into<String>) -> Self {
        McpError {
            code,
            message: message.into(),
            data: None,
        }
    }
}

/// One client session: the tool set plus its state
pub struct Server {
    tools: ToolRegistry,
    ctx: ToolContext,
}

impl Server {
    pub fn new(config: ServerConfig) -> Self {
        Server {
            tools: standard_tools(),
            ctx: ToolContext::new(CategoryRegistry::standard(), config),
        }
    }

    /// Handle one input line; `None` when no reply is due
    pub fn handle_line(&mut self, line: &str) -> Option<String> {
        let response = match serde_json::from_str::<McpRequest>(line) {
            Ok(request) => {
                debug!(method = %request.method, "processing");
                let response = self.handle_request(&request);
                // Notifications (no id) get no response
                if request.id.is_none() {
                    debug!(method = %request.method, "notification processed");
                    return None;
                }
                response
            }
            Err(e) => {
                warn!(error = %e, "unparseable request");
                McpResponse::reply(None, Err(McpError::new(PARSE_ERROR, format!("Parse error: {}", e))))
            }
        };

        match serde_json::to_string(&response) {
            Ok(json) => Some(json),
            Err(e) => {
                error!(error = %e, "failed to serialize response");
                None
            }
        }
    }

    pub fn handle_request(&mut self, request: &McpRequest) -> McpResponse {
        let result = match request.method.as_str() {
            // Lifecycle
            "initialize" => Ok(handle_initialize(&request.params)),
            "initialized" | "notifications/initialized" => Ok(json!({})),
            "ping" => Ok(json!({})),

            // Tools
            "tools/list" => Ok(self.tools.list_json()),
            "tools/call" => self.handle_tool_call(&request.params),

            _ => Err(McpError::new(
                METHOD_NOT_FOUND,
                format!("Method not found: {}", request.method),
            )),
        };

        McpResponse::reply(request.id.clone(), result)
    }

    fn handle_tool_call(&mut self, params: &Option<JsonValue>) -> Result<JsonValue, McpError> {
        let params = params
            .as_ref()
            .ok_or_else(|| McpError::new(INVALID_PARAMS, "Missing params"))?;

        let name = params
            .get("name")
            .and_then(|v| v.as_str())
            .ok_or_else(|| McpError::new(INVALID_PARAMS, "Missing tool name"))?;

        let args = params.get("arguments").cloned().unwrap_or_else(|| json!({}));

        // Tool failures are results, not protocol errors
        match self.tools.call(name, &args, &mut self.ctx) {
            Ok(result) => Ok(result),
            Err(e) => {
                info!(tool = name, code = %e.code, "tool call failed");
                Ok(error_response(&e))
            }
        }
    }
}

fn handle_initialize(params: &Option<JsonValue>) -> JsonValue {
    let client_info = params
        .as_ref()
        .and_then(|p| p.get("clientInfo"))
        .and_then(|c| c.get("name"))
        .and_then(|n| n.as_str())
        .unwrap_or("unknown");

    // Use client's protocol version for compatibility
    let client_protocol = params
        .as_ref()
        .and_then(|p| p.get("protocolVersion"))
        .and_then(|v| v.as_str())
        .unwrap_or(PROTOCOL_VERSION);

    info!(client = client_info, protocol = client_protocol, "client connected");

    json!({
        "protocolVersion": client_protocol,
        "serverInfo": {
            "name": SERVER_NAME,
            "version": SERVER_VERSION,
            "description": "Unit conversion across length, weight, temperature and more"
        },
        "capabilities": {
            "tools": {
                "listChanged": false
            }
        },
        "instructions": "Use list_categories to discover units, convert or quick_convert for single values, and batch_list or batch_range for many values at once."
    })
}
