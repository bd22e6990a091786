use anyhow::Result;
use githeat::cli::Cli;
use githeat::logging;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let _guard = logging::init(cli.log_level)
        .inspect_err(|e| eprintln!("logging disabled: {e}"))
        .ok();
    cli.execute()
}
