use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::{debug, info, warn};

use crate::config::ServerConfig;
use crate::handlers;
use crate::protocol::{JsonRpcError, JsonRpcRequest, JsonRpcResponse};
use crate::store::ContextStore;

/// Operator hint shown when no brand context is configured.
pub const SETUP_HINT: &str = "Run `figment-mcp import <guide.md>` to set up your brand guide.";

/// MCP server that communicates over stdio using newline-delimited JSON-RPC 2.0.
///
/// Owns the [`ContextStore`]; every handler reads the brand context through it.
pub struct McpServer {
    config: ServerConfig,
    store: ContextStore,
    initialized: bool,
}

impl McpServer {
    pub fn new(config: ServerConfig) -> Self {
        let store = ContextStore::new(config.context_path.clone());
        Self {
            config,
            store,
            initialized: false,
        }
    }

    pub fn store(&self) -> &ContextStore {
        &self.store
    }

    pub async fn run(&mut self) -> Result<(), Box<dyn std::error::Error>> {
        match self.store.load() {
            Some(context) => info!(brand = %context.name, "Loaded brand context"),
            None => warn!(
                path = %self.store.path().display(),
                hint = SETUP_HINT,
                "No brand context found"
            ),
        }

        let stdin = tokio::io::stdin();
        let mut stdout = tokio::io::stdout();
        let mut reader = BufReader::new(stdin);
        let mut raw = Vec::new();
        let limit = self.config.max_message_bytes;

        info!("figment MCP server running on stdio");

        loop {
            raw.clear();
            let n = reader.read_until(b'\n', &mut raw).await?;
            if n == 0 {
                break;
            }

            if n > limit {
                warn!(bytes = n, limit, "Message too large");
                write_response(
                    &mut stdout,
                    &JsonRpcResponse::error(None, JsonRpcError::parse_error()),
                )
                .await?;
                continue;
            }

            let trimmed = match std::str::from_utf8(&raw) {
                Ok(s) => s.trim(),
                Err(_) => {
                    write_response(
                        &mut stdout,
                        &JsonRpcResponse::error(None, JsonRpcError::parse_error()),
                    )
                    .await?;
                    continue;
                }
            };

            if trimmed.is_empty() {
                continue;
            }

            if let Some(resp) = self.handle_line(trimmed).await {
                write_response(&mut stdout, &resp).await?;
            }
        }

        debug!("stdin closed, shutting down");
        Ok(())
    }

    /// Process one framed message. Returns `None` when no reply is due.
    pub async fn handle_line(&mut self, line: &str) -> Option<JsonRpcResponse> {
        let req: JsonRpcRequest = match serde_json::from_str(line) {
            Ok(r) => r,
            Err(e) => {
                debug!(error = %e, "Parse error");
                return Some(JsonRpcResponse::error(None, JsonRpcError::parse_error()));
            }
        };

        if req.jsonrpc != "2.0" {
            return Some(JsonRpcResponse::error(
                req.id.clone(),
                JsonRpcError::invalid_request(),
            ));
        }

        // Only `initialize` is allowed before the handshake completes.
        if !self.initialized && req.method != "initialize" {
            if req.id.is_none() {
                return None;
            }
            return Some(JsonRpcResponse::error(
                req.id.clone(),
                JsonRpcError::invalid_request_with("Server not initialized"),
            ));
        }

        debug!(method = %req.method, "Dispatching request");
        let resp = handlers::dispatch(&req, &mut self.store).await;

        if req.method == "initialize" {
            self.initialized = true;
        }

        resp
    }
}

async fn write_response(
    stdout: &mut tokio::io::Stdout,
    resp: &JsonRpcResponse,
) -> Result<(), Box<dyn std::error::Error>> {
    let out = serde_json::to_string(resp)?;
    stdout.write_all(out.as_bytes()).await?;
    stdout.write_all(b"\n").await?;
    stdout.flush().await?;
    Ok(())
}
