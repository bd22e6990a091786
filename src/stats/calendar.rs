use crate::model::{CommitCounts, Today, WEEKS_IN_WINDOW, WINDOW_DAYS};
use chrono::{Datelike, Duration, Month, Weekday};
use std::collections::BTreeMap;

/// Up to seven counts for one calendar week, indexed by row.
pub type WeekColumn = Vec<u32>;

/// Number of month slots in the header, one per week column right of the label gutter.
pub const MONTH_SLOTS: usize = WEEKS_IN_WINDOW + 1;
/// Number of week columns in the grid.
pub const WEEK_COLUMNS: usize = WEEKS_IN_WINDOW + 2;

/// Days from today up to and including the coming week boundary.
pub fn calc_offset(weekday: Weekday) -> usize {
    match weekday {
        Weekday::Sun => 1,
        Weekday::Mon => 2,
        Weekday::Tue => 3,
        Weekday::Wed => 4,
        Weekday::Thu => 5,
        Weekday::Fri => 6,
        Weekday::Sat => 7,
    }
}

/// Color tier of a cell, independent of how it ends up being drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    Empty,
    Low,
    Medium,
    High,
    Today,
}

impl Tier {
    pub fn for_count(count: u32) -> Self {
        match count {
            0 => Tier::Empty,
            1..=4 => Tier::Low,
            5..=9 => Tier::Medium,
            _ => Tier::High,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub count: u32,
    pub tier: Tier,
}

impl Cell {
    fn new(count: u32) -> Self {
        Self {
            count,
            tier: Tier::for_count(count),
        }
    }

    fn today(count: u32) -> Self {
        Self {
            count,
            tier: Tier::Today,
        }
    }
}

/// Day buckets regrouped into week columns. Week `0` holds today; row `offset`
/// of week `0` is today's cell and rows above it are days still to come.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarGrid {
    weeks: BTreeMap<usize, WeekColumn>,
    offset: usize,
}

impl CalendarGrid {
    pub fn build(counts: &CommitCounts, today: Weekday) -> Self {
        let offset = calc_offset(today) - 1;
        let mut weeks = BTreeMap::new();

        let mut column: WeekColumn = vec![0; offset];
        let mut week = 0;
        for (bucket, count) in counts.iter() {
            let week_day = bucket + offset;
            week = week_day / 7;
            let day = week_day % 7;

            if day == 0 {
                column = Vec::with_capacity(7);
            }
            column.push(count);
            if day == 6 {
                weeks.insert(week, std::mem::take(&mut column));
            }
        }
        // The oldest week is usually cut short by the window edge.
        if !column.is_empty() {
            weeks.insert(week, column);
        }

        Self { weeks, offset }
    }

    pub fn week(&self, week: usize) -> Option<&WeekColumn> {
        self.weeks.get(&week)
    }

    pub fn today_row(&self) -> usize {
        self.offset
    }

    pub fn cell(&self, week: usize, row: usize) -> Cell {
        let count = self
            .weeks
            .get(&week)
            .and_then(|column| column.get(row))
            .copied()
            .unwrap_or(0);

        if week == 0 && row == self.offset {
            Cell::today(count)
        } else {
            Cell::new(count)
        }
    }

}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarRow {
    /// Set only for the rows that carry a label (Mon, Wed, Fri).
    pub label: Option<Weekday>,
    /// Oldest week first.
    pub cells: Vec<Cell>,
}

/// Everything needed to draw the heat map: month header plus seven weekday rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Calendar {
    /// Header slots, oldest first; `None` where no month starts.
    pub months: Vec<Option<Month>>,
    pub rows: Vec<CalendarRow>,
}

impl Calendar {
    pub fn build(counts: &CommitCounts, today: Today) -> Self {
        let grid = CalendarGrid::build(counts, today.weekday());

        let rows = (0..7)
            .map(|row| {
                let label = row_label(row);
                let cells = (0..WEEK_COLUMNS).rev().map(|week| grid.cell(week, row)).collect();
                CalendarRow { label, cells }
            })
            .collect();

        Self {
            months: month_header(today),
            rows,
        }
    }
}

/// Labels sit on fixed rows whatever today's weekday is.
fn row_label(row: usize) -> Option<Weekday> {
    match row {
        1 => Some(Weekday::Fri),
        3 => Some(Weekday::Wed),
        5 => Some(Weekday::Mon),
        _ => None,
    }
}

/// A month name marks the first slot whose date falls in a new month.
fn month_header(today: Today) -> Vec<Option<Month>> {
    let start = today.date() - Duration::days(WINDOW_DAYS as i64);
    let mut shown = start.month();

    (0..MONTH_SLOTS)
        .map(|slot| {
            let date = start + Duration::days(7 * slot as i64);
            if date.month() == shown {
                return None;
            }
            shown = date.month();
            u8::try_from(date.month()).ok().and_then(|m| Month::try_from(m).ok())
        })
        .collect()
}
