use serde::{Deserialize, Serialize};

/// JSON-RPC 2.0 ID: a number or a string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RpcId {
    Number(i64),
    Str(String),
}

/// JSON-RPC 2.0 request envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct JsonRpcRequest {
    pub jsonrpc: String,
    pub id: Option<RpcId>,
    pub method: String,
    pub params: Option<serde_json::Value>,
}

/// MCP `initialize` params.
#[derive(Debug, Clone, Deserialize)]
pub struct InitializeParams {
    #[serde(rename = "protocolVersion")]
    pub protocol_version: Option<String>,
    #[serde(rename = "clientInfo")]
    pub client_info: Option<ClientInfo>,
}

/// Client information sent during `initialize`.
#[derive(Debug, Clone, Deserialize)]
pub struct ClientInfo {
    pub name: Option<String>,
    pub version: Option<String>,
}

/// Parameters for `resources/read`.
#[derive(Debug, Clone, Deserialize)]
pub struct ReadResourceParams {
    pub uri: String,
}

/// Parameters for `tools/call`.
#[derive(Debug, Clone, Deserialize)]
pub struct ToolCallParams {
    pub name: String,
    pub arguments: Option<serde_json::Value>,
}

/// Arguments of the `get_brand_colors` tool.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BrandColorsParams {
    /// `hex` (default), `css-var`; anything else renders hex.
    pub format: Option<String>,
}

/// Arguments of the `get_component_pattern` tool.
#[derive(Debug, Clone, Deserialize)]
pub struct ComponentPatternParams {
    pub component: String,
    #[serde(default = "default_variant")]
    pub variant: String,
}

fn default_variant() -> String {
    "default".to_string()
}

/// Arguments of the `validate_design_compliance` tool.
#[derive(Debug, Clone, Deserialize)]
pub struct DesignComplianceParams {
    pub css: String,
    pub component: Option<String>,
}

/// Arguments of the `generate_component_code` tool.
#[derive(Debug, Clone, Deserialize)]
pub struct ComponentCodeParams {
    pub component: String,
    #[serde(default = "default_framework")]
    pub framework: String,
    #[serde(default)]
    pub props: serde_json::Map<String, serde_json::Value>,
}

fn default_framework() -> String {
    "react".to_string()
}
