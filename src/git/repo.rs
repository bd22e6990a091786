use crate::error::{GitheatError, Result};
use crate::model::CommitRecord;
use chrono::{DateTime, FixedOffset};
use gix::{ObjectId, Repository};
use std::collections::HashSet;
use std::path::Path;

pub struct GitRepo {
    repo: Repository,
}

impl GitRepo {
    /// Open the repository rooted exactly at `path`; parent directories are not searched.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let repo = gix::open(path.as_ref())?;
        Ok(Self { repo })
    }

    /// Resolve HEAD and start a lazy walk over its ancestry.
    /// Fails when HEAD is unborn or does not point at a commit.
    pub fn log(self) -> Result<CommitLog> {
        let head_id = {
            let mut head = self.repo.head()?;
            let commit = head.peel_to_commit_in_place()?;
            commit.id
        };

        Ok(CommitLog {
            repo: self.repo,
            stack: vec![head_id],
            seen: HashSet::new(),
        })
    }
}

/// Commits reachable from HEAD, newest first along each line of ancestry.
/// Each commit is yielded once, even when several children point at it.
pub struct CommitLog {
    repo: Repository,
    stack: Vec<ObjectId>,
    seen: HashSet<ObjectId>,
}

impl CommitLog {
    fn read(&mut self, id: ObjectId) -> Result<CommitRecord> {
        let commit = self.repo.find_commit(id)?;
        let committed_at = to_datetime(commit.time()?)?;
        let author_email = commit.author()?.email.to_string();

        let parents: Vec<ObjectId> = commit.parent_ids().map(|id| id.detach()).collect();
        // Push in reverse so the first parent is walked first.
        self.stack.extend(parents.into_iter().rev());

        Ok(CommitRecord {
            author_email,
            committed_at,
        })
    }
}

impl Iterator for CommitLog {
    type Item = Result<CommitRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(id) = self.stack.pop() {
            if !self.seen.insert(id) {
                continue;
            }
            return Some(self.read(id));
        }
        None
    }
}

fn to_datetime(time: gix::date::Time) -> Result<DateTime<FixedOffset>> {
    let offset = FixedOffset::east_opt(time.offset)
        .ok_or_else(|| GitheatError::InvalidDate(format!("Invalid offset: {}", time.offset)))?;
    let utc = DateTime::from_timestamp(time.seconds, 0)
        .ok_or_else(|| GitheatError::InvalidDate(format!("Invalid timestamp: {}", time.seconds)))?;
    Ok(utc.with_timezone(&offset))
}
