pub mod request;
pub mod response;

pub use request::{
    BrandColorsParams, ComponentCodeParams, ComponentPatternParams, DesignComplianceParams,
    InitializeParams, JsonRpcRequest, ReadResourceParams, RpcId, ToolCallParams,
};
pub use response::{
    JsonRpcError, JsonRpcResponse, ResourceContents, ResourceDescriptor, ToolOutcome,
    ToolResult, ToolResultContent, RESOURCE_NOT_FOUND,
};
