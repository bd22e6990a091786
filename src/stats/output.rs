use super::calendar::{Calendar, Cell, Tier};
use console::Style;
use std::io::{self, Write};

const MONTH_GUTTER: &str = "         ";
const LABEL_GUTTER: &str = "     ";

pub fn print_calendar(calendar: &Calendar, out: &mut impl Write) -> io::Result<()> {
    write!(out, "{MONTH_GUTTER}")?;
    for month in &calendar.months {
        match month {
            Some(month) => write!(out, "{} ", &month.name()[..3])?,
            None => write!(out, "    ")?,
        }
    }
    writeln!(out)?;

    for row in &calendar.rows {
        match row.label {
            Some(day) => write!(out, " {day} ")?,
            None => write!(out, "{LABEL_GUTTER}")?,
        }
        for cell in &row.cells {
            write!(out, "{}", tier_style(cell.tier).apply_to(cell_text(cell)))?;
        }
        writeln!(out)?;
    }

    out.flush()
}

/// Four columns wide: counts are right-aligned in three, zero prints as a dash.
fn cell_text(cell: &Cell) -> String {
    if cell.count == 0 {
        "  - ".to_string()
    } else {
        format!("{:>3} ", cell.count)
    }
}

fn tier_style(tier: Tier) -> Style {
    match tier {
        Tier::Empty => Style::new().black(),
        Tier::Low => Style::new().bold().black().on_white(),
        Tier::Medium => Style::new().bold().black().on_yellow(),
        Tier::High => Style::new().bold().black().on_green(),
        Tier::Today => Style::new().bold().white().on_magenta(),
    }
}
