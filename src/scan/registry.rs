//! The flat list of known repositories, one absolute path per line.
//!
//! There is no locking: two scans writing the same store at once is unsupported
//! and the last writer wins.

use crate::error::{GitheatError, Result};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

const STORE_FILE_NAME: &str = ".githeat_repos";

/// `~/.githeat_repos`, or `.githeat_repos` in the working directory when no home is known.
pub fn default_store_path() -> PathBuf {
    dirs::home_dir()
        .map(|home| home.join(STORE_FILE_NAME))
        .unwrap_or_else(|| PathBuf::from(STORE_FILE_NAME))
}

/// Read the known repositories. A store that does not exist yet is empty.
pub fn load<P: AsRef<Path>>(store: P) -> Result<Vec<PathBuf>> {
    let store = store.as_ref();
    let bytes = match fs::read(store) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(e.into()),
    };

    let content = String::from_utf8(bytes).map_err(|e| {
        GitheatError::Registry(format!("{} is not valid UTF-8: {e}", store.display()))
    })?;

    Ok(content
        .lines()
        .map(|line| line.trim_end_matches('\r'))
        .filter(|line| !line.is_empty())
        .map(PathBuf::from)
        .collect())
}

/// Keep `existing` as is and append every path from `discovered` not yet listed.
pub fn merge(discovered: &[PathBuf], existing: Vec<PathBuf>) -> Vec<PathBuf> {
    let mut merged = existing;
    for path in discovered {
        if !merged.contains(path) {
            merged.push(path.clone());
        }
    }
    merged
}

/// Overwrite the store with `paths`, newline separated.
pub fn persist<P: AsRef<Path>>(paths: &[PathBuf], store: P) -> Result<()> {
    let store = store.as_ref();
    if let Some(parent) = store.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    let content = paths
        .iter()
        .map(|p| p.to_string_lossy())
        .collect::<Vec<_>>()
        .join("\n");
    fs::write(store, content)?;
    Ok(())
}
