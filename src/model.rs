use chrono::{Datelike, DateTime, Days, FixedOffset, Local, NaiveDate, TimeZone, Weekday};

/// Number of days covered by the calendar, not counting today.
pub const WINDOW_DAYS: usize = 183;
pub const WEEKS_IN_WINDOW: usize = 26;

/// A single commit as seen by the aggregator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitRecord {
    pub author_email: String,
    /// Committer time, kept in the committer's own UTC offset.
    pub committed_at: DateTime<FixedOffset>,
}

/// The local day a run is anchored on: its date plus the instants at which it
/// starts and ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Today {
    date: NaiveDate,
    start: DateTime<FixedOffset>,
    end: DateTime<FixedOffset>,
}

impl Today {
    pub fn now() -> Self {
        Self::on(Local::now().date_naive())
    }

    /// `date` in the local time zone.
    pub fn on(date: NaiveDate) -> Self {
        let start = local_midnight(date);
        let end = date
            .succ_opt()
            .map(local_midnight)
            .unwrap_or(start + chrono::Duration::days(1));
        Self { date, start, end }
    }

    /// A day starting at `start`, independent of the local time zone.
    pub fn at(start: DateTime<FixedOffset>) -> Self {
        let end = start
            .checked_add_days(Days::new(1))
            .unwrap_or(start + chrono::Duration::days(1));
        Self {
            date: start.date_naive(),
            start,
            end,
        }
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn weekday(&self) -> Weekday {
        self.date().weekday()
    }

    /// Midnight at the beginning of today.
    pub fn start(&self) -> DateTime<FixedOffset> {
        self.start
    }

    /// Midnight at the beginning of tomorrow.
    pub fn end(&self) -> DateTime<FixedOffset> {
        self.end
    }
}

fn local_midnight(date: NaiveDate) -> DateTime<FixedOffset> {
    let midnight = date.and_time(chrono::NaiveTime::MIN);
    // Some zones skip midnight on a clock change; the day then starts an hour later.
    let start = Local
        .from_local_datetime(&midnight)
        .earliest()
        .or_else(|| {
            Local
                .from_local_datetime(&(midnight + chrono::Duration::hours(1)))
                .earliest()
        })
        .unwrap_or_else(|| Local.from_utc_datetime(&midnight));
    start.into()
}

/// Per-day commit counts for the trailing window. Bucket `0` is today,
/// bucket `n` is `n` calendar days ago. Every bucket always exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitCounts {
    days: [u32; WINDOW_DAYS + 1],
}

impl CommitCounts {
    pub fn new() -> Self {
        Self {
            days: [0; WINDOW_DAYS + 1],
        }
    }

    pub fn get(&self, bucket: usize) -> Option<u32> {
        self.days.get(bucket).copied()
    }

    /// Returns `false` and leaves the counts alone when `bucket` is outside the window.
    pub fn increment(&mut self, bucket: usize) -> bool {
        match self.days.get_mut(bucket) {
            Some(count) => {
                *count += 1;
                true
            }
            None => false,
        }
    }

    /// Adds every bucket of `other` onto `self`.
    pub fn merge(&mut self, other: &CommitCounts) {
        for (total, count) in self.days.iter_mut().zip(other.days.iter()) {
            *total += count;
        }
    }

    /// Buckets in ascending order, today first.
    pub fn iter(&self) -> impl Iterator<Item = (usize, u32)> + '_ {
        self.days.iter().copied().enumerate()
    }

    pub fn total(&self) -> u32 {
        self.days.iter().sum()
    }
}

impl Default for CommitCounts {
    fn default() -> Self {
        Self::new()
    }
}
