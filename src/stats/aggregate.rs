use crate::git::HistorySource;
use crate::model::{CommitCounts, Today, WINDOW_DAYS};
use chrono::{DateTime, Days, FixedOffset, NaiveTime, TimeZone};
use indicatif::ProgressBar;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Number of days from the start of the commit's day to the start of `today`.
///
/// The commit's day starts at midnight in the committer's own offset. That instant
/// is moved forward one calendar day at a time until it reaches local midnight
/// today. Commits made at or after local midnight tomorrow are in the future and
/// give `None`, as do days older than the window.
pub fn day_bucket(committed_at: &DateTime<FixedOffset>, today: Today) -> Option<usize> {
    if *committed_at >= today.end() {
        return None;
    }

    let midnight = committed_at.date_naive().and_time(NaiveTime::MIN);
    let mut day = committed_at.offset().from_local_datetime(&midnight).single()?;
    let mut days = 0;
    while day < today.start() {
        day = day.checked_add_days(Days::new(1))?;
        days += 1;
        if days > WINDOW_DAYS {
            return None;
        }
    }
    Some(days)
}

/// Count commits authored by `email` per day across `repositories`.
pub fn aggregate<S: HistorySource>(
    email: &str,
    repositories: &[PathBuf],
    source: &S,
    today: Today,
) -> CommitCounts {
    aggregate_with_progress(email, repositories, source, today, &ProgressBar::hidden())
}

pub fn aggregate_with_progress<S: HistorySource>(
    email: &str,
    repositories: &[PathBuf],
    source: &S,
    today: Today,
    pb: &ProgressBar,
) -> CommitCounts {
    let mut commits = CommitCounts::new();

    for path in repositories {
        pb.set_message(format!("Reading {}", path.display()));
        if let Some(patch) = count_repository(email, path, source, today) {
            commits.merge(&patch);
        }
        pb.inc(1);
    }

    commits
}

/// Counts for one repository, or `None` when it cannot be opened or its HEAD resolved.
fn count_repository<S: HistorySource>(
    email: &str,
    path: &Path,
    source: &S,
    today: Today,
) -> Option<CommitCounts> {
    let log = match source.log(path) {
        Ok(log) => log,
        Err(e) => {
            warn!("Skipping repository {}: {e}", path.display());
            return None;
        }
    };

    let mut counts = CommitCounts::new();
    for record in log {
        let record = match record {
            Ok(record) => record,
            Err(e) => {
                warn!("Stopped reading history of {}: {e}", path.display());
                break;
            }
        };

        if record.author_email != email {
            continue;
        }
        if let Some(bucket) = day_bucket(&record.committed_at, today) {
            counts.increment(bucket);
        }
    }

    debug!("{} commits counted in {}", counts.total(), path.display());
    Some(counts)
}
