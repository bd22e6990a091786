use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing::error;
use tracing::level_filters::LevelFilter;

#[derive(Parser)]
#[command(name = "githeat")]
#[command(about = "Commit activity calendar for one author across local git repositories")]
#[command(version)]
pub struct Cli {
    #[arg(long, help = "Folder to scan for git repositories before printing stats")]
    pub folder: Option<PathBuf>,

    #[arg(long, default_value = "", help = "Author email to count commits for")]
    pub email: String,

    #[arg(long, env = "GITHEAT_STORE", help = "Path to the list of known repositories")]
    pub store: Option<PathBuf>,

    #[arg(long, env = "GITHEAT_LOG", help = "Log level (error, warn, info, debug, trace)")]
    pub log_level: Option<LevelFilter>,
}

impl Cli {
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Scan first when a folder is given, then always print stats.
    /// Failures are logged; the run itself never fails.
    pub fn execute(self) -> Result<()> {
        let store = self
            .store
            .unwrap_or_else(crate::scan::default_store_path);

        if let Some(folder) = &self.folder {
            if let Err(e) = crate::scan::exec(folder, &store) {
                error!("Scan failed: {e:#}");
            }
        }

        if let Err(e) = crate::stats::exec(&self.email, &store) {
            error!("Stats failed: {e:#}");
        }

        Ok(())
    }
}
