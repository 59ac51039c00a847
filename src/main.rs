//! CLI entry point for regenerating heatmap patterns in SVG assets

use clap::Parser;
use heatmap_pattern::io::cli::{Cli, ThemeUpdater};
use heatmap_pattern::io::logging;

fn main() -> heatmap_pattern::Result<()> {
    let cli = Cli::parse();
    logging::init(cli.quiet)?;
    let mut updater = ThemeUpdater::new(&cli)?;
    updater.run()?;
    Ok(())
}
