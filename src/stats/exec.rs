use super::{aggregate_with_progress, output::print_calendar, Calendar};
use crate::git::GixHistory;
use crate::model::Today;
use crate::scan::registry;
use anyhow::Context;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;
use tracing::info;

/// Aggregate commits by `email` over every known repository and print the calendar.
pub fn exec(email: &str, store: &Path) -> anyhow::Result<()> {
    let repositories = registry::load(store)
        .with_context(|| format!("Failed to read repository list {}", store.display()))?;
    info!("Reading {} repositories for {email:?}", repositories.len());

    let today = Today::now();

    let pb = ProgressBar::new(repositories.len() as u64);
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} [{pos}/{len}] {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    let commits = aggregate_with_progress(email, &repositories, &GixHistory, today, &pb);
    pb.finish_and_clear();

    let calendar = Calendar::build(&commits, today);
    let mut out = std::io::stdout().lock();
    print_calendar(&calendar, &mut out).context("Failed to write calendar")?;
    Ok(())
}
