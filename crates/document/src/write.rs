use std::{
    io::Write,
    path::{Path, PathBuf},
};

use serde_json::Value;
use tempfile::NamedTempFile;

use crate::DocumentError;

/// Writes `value` to `path` as two-space indented JSON, replacing any
/// existing file.
///
/// The text goes to a uniquely named temp file in the destination directory
/// which is then renamed over the destination, so a failed write never
/// leaves a truncated document. A symlinked destination is written through
/// and the existing file's permissions are kept.
pub fn write_document(path: impl AsRef<Path>, value: &Value) -> Result<(), DocumentError> {
    let path = path.as_ref();
    let data = serde_json::to_string_pretty(value).map_err(|source| {
        DocumentError::Serialize {
            path: path.to_path_buf(),
            source,
        }
    })?;

    persist(&resolve_target(path), data.as_bytes()).map_err(|source| DocumentError::Write {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::debug!(path = %path.display(), bytes = data.len(), "write document");
    Ok(())
}

fn resolve_target(path: &Path) -> PathBuf {
    match std::fs::symlink_metadata(path) {
        Ok(md) if md.file_type().is_symlink() => {
            std::fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf())
        }
        _ => path.to_path_buf(),
    }
}

fn persist(target: &Path, data: &[u8]) -> std::io::Result<()> {
    let dir = match target.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    // dropped (and removed) on any early return
    let mut file = NamedTempFile::new_in(dir)?;
    file.write_all(data)?;
    if let Ok(md) = std::fs::metadata(target) {
        file.as_file().set_permissions(md.permissions())?;
    }
    file.persist(target).map_err(|err| err.error)?;
    Ok(())
}
