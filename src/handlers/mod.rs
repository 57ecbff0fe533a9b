pub mod brand_colors;
pub mod component_code;
pub mod component_pattern;
pub mod design_compliance;
pub mod resources;

use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::FacadeError;
use crate::model::BrandContext;
use crate::protocol::{
    BrandColorsParams, ComponentCodeParams, ComponentPatternParams, DesignComplianceParams,
    InitializeParams, JsonRpcError, JsonRpcRequest, JsonRpcResponse, ReadResourceParams,
    ToolCallParams, ToolOutcome, ToolResult,
};
use crate::store::ContextStore;

/// Dispatch a JSON-RPC request to the appropriate handler.
///
/// Resource and tool requests re-read the persisted context first so that
/// writes made by other processes are visible. Returns `None` for
/// notifications (no response required).
pub async fn dispatch(req: &JsonRpcRequest, store: &mut ContextStore) -> Option<JsonRpcResponse> {
    match req.method.as_str() {
        "initialize" => {
            if let Some(params) = req
                .params
                .clone()
                .and_then(|p| serde_json::from_value::<InitializeParams>(p).ok())
            {
                let client = params.client_info.as_ref();
                debug!(
                    client = client.and_then(|c| c.name.as_deref()).unwrap_or("unknown"),
                    client_version = client.and_then(|c| c.version.as_deref()).unwrap_or("-"),
                    protocol = params.protocol_version.as_deref().unwrap_or("-"),
                    "Client initializing"
                );
            }

            let result = serde_json::json!({
                "protocolVersion": "2024-11-05",
                "capabilities": {
                    "resources": {},
                    "tools": {}
                },
                "serverInfo": {
                    "name": "figment-mcp-server",
                    "version": env!("CARGO_PKG_VERSION")
                }
            });
            Some(JsonRpcResponse::success(req.id.clone(), result))
        }

        "notifications/initialized" => None,

        "ping" => Some(JsonRpcResponse::success(req.id.clone(), serde_json::json!({}))),

        "resources/list" => {
            let context = store.load();
            let resources = resources::list(context.as_ref()).await;
            let result = serde_json::json!({ "resources": resources });
            Some(JsonRpcResponse::success(req.id.clone(), result))
        }

        "resources/read" => {
            let params: ReadResourceParams = match decode_params(req, "resources/read") {
                Ok(p) => p,
                Err(err) => return Some(JsonRpcResponse::error(req.id.clone(), err)),
            };

            let context = store.load();
            match resources::read(context.as_ref(), &params.uri).await {
                Ok(contents) => {
                    let result = serde_json::json!({ "contents": [contents] });
                    Some(JsonRpcResponse::success(req.id.clone(), result))
                }
                Err(err) => {
                    debug!(uri = %params.uri, error = %err, "Resource read refused");
                    Some(JsonRpcResponse::error(req.id.clone(), err.into()))
                }
            }
        }

        "tools/list" => {
            let result = serde_json::json!({ "tools": tool_definitions() });
            Some(JsonRpcResponse::success(req.id.clone(), result))
        }

        "tools/call" => {
            let params: ToolCallParams = match decode_params(req, "tools/call") {
                Ok(p) => p,
                Err(err) => return Some(JsonRpcResponse::error(req.id.clone(), err)),
            };

            let context = store.load();
            let outcome =
                match call_tool(&params.name, params.arguments.as_ref(), context.as_ref()).await {
                    Ok(outcome) => outcome,
                    Err(err) => return Some(JsonRpcResponse::error(req.id.clone(), err.into())),
                };

            let tool_result = ToolResult::from(outcome);
            match serde_json::to_value(&tool_result) {
                Ok(result_json) => Some(JsonRpcResponse::success(req.id.clone(), result_json)),
                Err(e) => Some(JsonRpcResponse::error(
                    req.id.clone(),
                    JsonRpcError::internal_error(format!("Cannot serialize tool result: {e}")),
                )),
            }
        }

        _ => Some(JsonRpcResponse::error(
            req.id.clone(),
            JsonRpcError::method_not_found(&req.method),
        )),
    }
}

fn decode_params<T: DeserializeOwned>(req: &JsonRpcRequest, method: &str) -> Result<T, JsonRpcError> {
    match &req.params {
        Some(v) => serde_json::from_value(v.clone())
            .map_err(|e| JsonRpcError::invalid_params(format!("Invalid {method} params: {e}"))),
        None => Err(JsonRpcError::invalid_params(format!(
            "Missing params for {method}"
        ))),
    }
}

/// Run a named tool against `context`.
///
/// Only an unknown tool name is an error; bad arguments and missing
/// configuration come back as tool outcomes.
pub async fn call_tool(
    name: &str,
    arguments: Option<&serde_json::Value>,
    context: Option<&BrandContext>,
) -> Result<ToolOutcome, FacadeError> {
    let outcome = match name {
        "get_brand_colors" => {
            let params: BrandColorsParams = match arguments {
                Some(v) => match decode_arguments(name, v) {
                    Ok(p) => p,
                    Err(rejected) => return Ok(rejected),
                },
                None => BrandColorsParams::default(),
            };
            brand_colors::handle(params, context).await
        }

        "get_component_pattern" => {
            let params: ComponentPatternParams = match require_arguments(name, arguments) {
                Ok(p) => p,
                Err(rejected) => return Ok(rejected),
            };
            component_pattern::handle(params, context).await
        }

        "validate_design_compliance" => {
            let params: DesignComplianceParams = match require_arguments(name, arguments) {
                Ok(p) => p,
                Err(rejected) => return Ok(rejected),
            };
            design_compliance::handle(params, context).await
        }

        "generate_component_code" => {
            let params: ComponentCodeParams = match require_arguments(name, arguments) {
                Ok(p) => p,
                Err(rejected) => return Ok(rejected),
            };
            component_code::handle(params, context).await
        }

        _ => return Err(FacadeError::UnknownTool(name.to_string())),
    };

    Ok(outcome)
}

fn require_arguments<T: DeserializeOwned>(
    tool: &str,
    arguments: Option<&serde_json::Value>,
) -> Result<T, ToolOutcome> {
    match arguments {
        Some(v) => decode_arguments(tool, v),
        None => Err(ToolOutcome::rejected(format!("Missing arguments for {tool}"))),
    }
}

fn decode_arguments<T: DeserializeOwned>(
    tool: &str,
    arguments: &serde_json::Value,
) -> Result<T, ToolOutcome> {
    serde_json::from_value(arguments.clone())
        .map_err(|e| ToolOutcome::rejected(format!("Invalid arguments for {tool}: {e}")))
}

/// The tool catalogue advertised by `tools/list`.
pub fn tool_definitions() -> serde_json::Value {
    serde_json::json!([
        {
            "name": "get_brand_colors",
            "description": "Get brand colors for use in components",
            "inputSchema": {
                "type": "object",
                "properties": {
                    "format": {
                        "type": "string",
                        "enum": ["hex", "rgb", "hsl", "css-var"],
                        "description": "Color format to return",
                        "default": "hex"
                    }
                }
            }
        },
        {
            "name": "get_component_pattern",
            "description": "Get CSS classes or styles for a specific component type",
            "inputSchema": {
                "type": "object",
                "properties": {
                    "component": {
                        "type": "string",
                        "enum": ["button", "input", "card", "modal"],
                        "description": "Component type to get pattern for"
                    },
                    "variant": {
                        "type": "string",
                        "description": "Component variant (e.g., primary, secondary, outline)",
                        "default": "default"
                    }
                },
                "required": ["component"]
            }
        },
        {
            "name": "validate_design_compliance",
            "description": "Validate if provided CSS or component follows brand guidelines",
            "inputSchema": {
                "type": "object",
                "properties": {
                    "css": {
                        "type": "string",
                        "description": "CSS code to validate against brand guidelines"
                    },
                    "component": {
                        "type": "string",
                        "description": "Component type being validated"
                    }
                },
                "required": ["css"]
            }
        },
        {
            "name": "generate_component_code",
            "description": "Generate React/HTML component code following brand guidelines",
            "inputSchema": {
                "type": "object",
                "properties": {
                    "component": {
                        "type": "string",
                        "description": "Type of component to generate"
                    },
                    "framework": {
                        "type": "string",
                        "enum": ["react", "vue", "html", "svelte"],
                        "description": "Framework to generate code for",
                        "default": "react"
                    },
                    "props": {
                        "type": "object",
                        "description": "Component properties and content",
                        "default": {}
                    }
                },
                "required": ["component"]
            }
        }
    ])
}
