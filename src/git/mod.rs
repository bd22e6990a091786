mod repo;

pub use repo::{CommitLog, GitRepo};

use crate::error::Result;
use crate::model::CommitRecord;
use std::path::Path;

/// Anything that can produce the commit history reachable from a repository's HEAD.
pub trait HistorySource {
    type Log: Iterator<Item = Result<CommitRecord>>;

    fn log(&self, path: &Path) -> Result<Self::Log>;
}

/// Reads history from repositories on disk with `gix`.
#[derive(Debug, Default, Clone, Copy)]
pub struct GixHistory;

impl HistorySource for GixHistory {
    type Log = CommitLog;

    fn log(&self, path: &Path) -> Result<CommitLog> {
        GitRepo::open(path)?.log()
    }
}
