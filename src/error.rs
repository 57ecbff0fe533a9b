use std::fmt;
use std::path::PathBuf;

use serde::Serialize;

/// A single constraint violation, addressed by a dotted field path
/// such as `colors.primary` or `spacing.scale[2]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldViolation {
    pub path: String,
    pub message: String,
}

impl FieldViolation {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_empty() {
            write!(f, "{}", self.message)
        } else {
            write!(f, "{}: {}", self.path, self.message)
        }
    }
}

/// Returned by the validator when a raw document does not describe a
/// brand context. Carries every violation found, not just the first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, thiserror::Error)]
#[error("invalid brand context: {}", join_violations(.violations))]
pub struct SchemaError {
    pub violations: Vec<FieldViolation>,
}

impl SchemaError {
    pub fn new(violations: Vec<FieldViolation>) -> Self {
        Self { violations }
    }

    pub fn single(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(vec![FieldViolation::new(path, message)])
    }

    /// True if any violation is reported against exactly `path`.
    pub fn names(&self, path: &str) -> bool {
        self.violations.iter().any(|v| v.path == path)
    }
}

fn join_violations(violations: &[FieldViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Failure to persist a brand context. Always carries the original cause.
#[derive(Debug, thiserror::Error)]
pub enum PersistenceError {
    #[error("brand context rejected before save: {0}")]
    Invalid(#[from] SchemaError),

    #[error("cannot write brand context to {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot serialize brand context: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("cannot lock {} for writing: {source}", .path.display())]
    Lock {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl PersistenceError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Protocol-level misuse of the resource/tool facade.
///
/// Soft conditions (no context, unconfigured pattern) never surface here;
/// they are ordinary tool results.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FacadeError {
    #[error("Unknown resource: {0}")]
    UnknownResource(String),

    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    #[error("No brand context available. Run `figment init` to set up your brand guide.")]
    NoContext,

    #[error("cannot render resource: {0}")]
    Render(String),
}

/// File-based import failure. Text import itself never fails.
#[derive(Debug, thiserror::Error)]
pub enum ImportError {
    #[error("cannot read brand guide {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("unsupported brand guide format: {0} (supported: .md)")]
    UnsupportedFormat(String),
}
