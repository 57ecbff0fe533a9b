use std::path::PathBuf;

use crate::store::DEFAULT_CONTEXT_PATH;

/// Default maximum bytes per JSON-RPC message (1 MiB).
const DEFAULT_MAX_MESSAGE_BYTES: usize = 1024 * 1024;

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub context_path: PathBuf,
    pub max_message_bytes: usize,
}

impl ServerConfig {
    /// Load configuration from environment.
    ///
    /// - `FIGMENT_CONTEXT_PATH` (optional, default `.figment/brand-context.json`)
    /// - `FIGMENT_MAX_MESSAGE_BYTES` (optional, default 1 MiB)
    pub fn from_env() -> Result<Self, String> {
        let context_path = std::env::var("FIGMENT_CONTEXT_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_CONTEXT_PATH));

        let max_message_bytes = match std::env::var("FIGMENT_MAX_MESSAGE_BYTES") {
            Ok(val) => parse_positive(&val)
                .ok_or_else(|| "FIGMENT_MAX_MESSAGE_BYTES must be a positive integer".to_string())?,
            Err(_) => DEFAULT_MAX_MESSAGE_BYTES,
        };

        Ok(Self {
            context_path,
            max_message_bytes,
        })
    }

    pub fn with_context_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.context_path = path.into();
        self
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            context_path: PathBuf::from(DEFAULT_CONTEXT_PATH),
            max_message_bytes: DEFAULT_MAX_MESSAGE_BYTES,
        }
    }
}

fn parse_positive(val: &str) -> Option<usize> {
    val.trim().parse::<usize>().ok().filter(|n| *n > 0)
}
