use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::{DateTime, SecondsFormat, Utc};
use fs2::FileExt;
use tracing::{debug, info, warn};

use crate::error::PersistenceError;
use crate::model::{BrandContext, Metadata};
use crate::validate::validate;

/// Default location of the persisted document, relative to the working directory.
pub const DEFAULT_CONTEXT_PATH: &str = ".figment/brand-context.json";

/// Owns the persisted brand context and the single in-memory copy that the
/// resolver and protocol handlers read from.
///
/// The in-memory context is replaced wholesale by `load` and `save`; it is
/// never patched in place.
#[derive(Debug)]
pub struct ContextStore {
    path: PathBuf,
    current: Option<BrandContext>,
}

impl ContextStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            current: None,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and validate the persisted document.
    ///
    /// Never fails: a missing file, malformed JSON or a schema violation all
    /// yield `None` (the latter two are logged). The in-memory context is
    /// replaced with whatever this returns.
    pub fn load(&mut self) -> Option<BrandContext> {
        self.current = read_context(&self.path);
        self.current.clone()
    }

    /// The last loaded or saved context, without touching storage.
    pub fn current(&self) -> Option<&BrandContext> {
        self.current.as_ref()
    }

    /// Validate, stamp and persist `context`, then make it current.
    ///
    /// Saves are serialized through an exclusive lock on a `<file>.lock`
    /// sidecar, which is left in place afterwards.
    ///
    /// `metadata.createdAt` is taken from the document already on disk, else
    /// from `context`, else set to now. `metadata.updatedAt` is always now.
    /// On failure neither the file nor the in-memory context changes.
    pub fn save(&mut self, context: BrandContext) -> Result<&BrandContext, PersistenceError> {
        let raw = serde_json::to_value(&context)?;
        let mut validated = validate(&raw)?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| PersistenceError::io(parent, e))?;
        }

        let lock_path = sidecar_path(&self.path, "lock");
        let lock = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(false)
            .open(&lock_path)
            .map_err(|e| PersistenceError::io(&lock_path, e))?;
        lock.lock_exclusive().map_err(|source| PersistenceError::Lock {
            path: self.path.clone(),
            source,
        })?;

        let now = now_timestamp();
        let previous = validated.metadata.take();
        let created_at = persisted_created_at(&self.path)
            .or_else(|| previous.as_ref().map(|m| m.created_at.clone()))
            .unwrap_or_else(|| now.clone());
        validated.metadata = Some(Metadata {
            created_at,
            updated_at: now,
            author: previous.and_then(|m| m.author),
        });

        let result = serde_json::to_value(&validated)
            .map_err(PersistenceError::from)
            .and_then(|stamped| validate(&stamped).map_err(PersistenceError::from))
            .and_then(|_| serde_json::to_string_pretty(&validated).map_err(PersistenceError::from))
            .and_then(|json| write_atomic(&self.path, json.as_bytes()));

        if let Err(e) = fs2::FileExt::unlock(&lock) {
            debug!(path = %lock_path.display(), error = %e, "Failed to release save lock");
        }
        result?;

        info!(path = %self.path.display(), brand = %validated.name, "Saved brand context");
        let saved: &BrandContext = self.current.insert(validated);
        Ok(saved)
    }
}

impl Default for ContextStore {
    fn default() -> Self {
        Self::new(DEFAULT_CONTEXT_PATH)
    }
}

/// Current UTC time as an ISO-8601 timestamp with millisecond precision.
pub(crate) fn now_timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

fn read_context(path: &Path) -> Option<BrandContext> {
    let content = match fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            debug!(path = %path.display(), "No brand context on disk");
            return None;
        }
        Err(e) => {
            warn!(path = %path.display(), error = %e, "Failed to read brand context");
            return None;
        }
    };

    let raw: serde_json::Value = match serde_json::from_str(&content) {
        Ok(v) => v,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "Brand context is not valid JSON");
            return None;
        }
    };

    match validate(&raw) {
        Ok(context) => Some(context),
        Err(e) => {
            warn!(path = %path.display(), error = %e, "Brand context failed validation");
            None
        }
    }
}

/// `createdAt` of the document currently on disk, read leniently.
///
/// The rest of the file may be invalid, but the stamp itself must parse.
fn persisted_created_at(path: &Path) -> Option<String> {
    let content = fs::read_to_string(path).ok()?;
    let raw: serde_json::Value = serde_json::from_str(&content).ok()?;
    raw.get("metadata")?
        .get("createdAt")?
        .as_str()
        .filter(|stamp| DateTime::parse_from_rfc3339(stamp).is_ok())
        .map(str::to_string)
}

fn sidecar_path(path: &Path, suffix: &str) -> PathBuf {
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    path.with_file_name(format!("{file_name}.{suffix}"))
}

/// Write-to-temp-then-rename so readers never observe a partial document.
fn write_atomic(path: &Path, content: &[u8]) -> Result<(), PersistenceError> {
    let temp_path = sidecar_path(path, &format!("{}.tmp", std::process::id()));

    let written = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(&temp_path)
        .and_then(|mut file| {
            file.write_all(content)?;
            file.sync_all()
        })
        .and_then(|()| fs::rename(&temp_path, path));

    written.map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        PersistenceError::io(path, e)
    })
}
