use super::{locate, registry};
use anyhow::Context;
use console::style;
use std::path::Path;
use tracing::info;

/// Discover repositories under `folder` and add the new ones to the store.
pub fn exec(folder: &Path, store: &Path) -> anyhow::Result<()> {
    println!("Scanning folder: {}", folder.display());

    let discovered = locate(folder);
    if discovered.is_empty() {
        println!("No repositories found");
        return Ok(());
    }
    info!("Discovered {} repositories under {}", discovered.len(), folder.display());

    let existing = registry::load(store)
        .with_context(|| format!("Failed to read repository list {}", store.display()))?;
    let known = existing.len();

    let merged = registry::merge(&discovered, existing);
    registry::persist(&merged, store)
        .with_context(|| format!("Failed to write repository list {}", store.display()))?;

    println!(
        "{} new repositories added to {}",
        style(merged.len() - known).bold(),
        store.display()
    );
    Ok(())
}
