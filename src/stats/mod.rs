pub mod aggregate;
pub mod calendar;
pub mod exec;
pub mod output;

pub use aggregate::{aggregate, aggregate_with_progress, day_bucket};
pub use calendar::{calc_offset, Calendar, CalendarGrid, Cell, Tier, WeekColumn};
pub use exec::exec;
pub use output::print_calendar;
