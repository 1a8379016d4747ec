//! JSON export of computed tables
//!
//! Exports land in the data directory next to the log file. Only computed
//! outputs are written; scenario inputs are never persisted.

use std::io;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::util::io::atomic_write;

/// Serialize `value` as pretty JSON to `{data_dir}/{name}`.
///
/// Returns the path written so the UI can tell the user where to look.
pub fn export_json<T: Serialize>(data_dir: &Path, name: &str, value: &T) -> io::Result<PathBuf> {
    std::fs::create_dir_all(data_dir)?;
    let path = data_dir.join(name);
    let json = serde_json::to_string_pretty(value).map_err(io::Error::other)?;
    atomic_write(&path, &json)?;
    tracing::info!("exported {}", path.display());
    Ok(path)
}
