// promptsmith command-line entry point

use clap::Parser;
use tracing::debug;

use promptsmith::brain;
use promptsmith::cli::{execute, Cli};
use promptsmith::config::AppConfig;
use promptsmith::telemetry;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = AppConfig::load()?;
    telemetry::init(&config)?;
    debug!(?config, "Configuration loaded");

    // Compile every pattern up front so a bad table fails before any work
    brain::init();

    // anyhow reports a failed command on stderr
    let output = execute(&cli.command, &config, &mut std::io::stdin())?;
    println!("{output}");
    Ok(())
}
