use ignore::{DirEntry, WalkBuilder};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Directory names never descended into.
const SKIPPED_DIRS: [&str; 3] = [".git", "vendor", "node_modules"];

/// Find every git work tree under `root`, depth-first.
///
/// A directory counts when it directly contains a `.git` directory. The walk keeps
/// going inside a found work tree, so nested repositories are reported too.
/// Unreadable subtrees are logged and skipped; whatever was found elsewhere is kept.
pub fn locate<P: AsRef<Path>>(root: P) -> Vec<PathBuf> {
    let root = root.as_ref();
    let root = match root.canonicalize() {
        Ok(path) => path,
        Err(e) => {
            warn!("Cannot open folder {}: {e}", root.display());
            return Vec::new();
        }
    };

    let walker = WalkBuilder::new(&root)
        .standard_filters(false)
        .follow_links(false)
        .sort_by_file_name(|a, b| a.cmp(b))
        .filter_entry(|entry| entry.depth() == 0 || !is_skipped(entry))
        .build();

    let mut repositories = Vec::new();
    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!("Skipping unreadable directory: {e}");
                continue;
            }
        };

        if !entry.file_type().is_some_and(|t| t.is_dir()) {
            continue;
        }

        if entry.path().join(".git").is_dir() {
            debug!("Found repository {}", entry.path().display());
            repositories.push(entry.into_path());
        }
    }

    repositories
}

fn is_skipped(entry: &DirEntry) -> bool {
    entry
        .file_name()
        .to_str()
        .is_some_and(|name| SKIPPED_DIRS.contains(&name))
}
