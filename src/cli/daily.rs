use std::path::PathBuf;
use tracing::info;

use crate::alert::{self, AlertOptions};
use crate::config;
use crate::error::Result;
use crate::merge;
use crate::scrapers::Source;

/// Scrape, merge and alert in one run
pub async fn run(config_path: Option<PathBuf>) -> Result<()> {
    let config = config::load(&config::resolve_path(config_path))?;

    info!("Starting daily update");
    let appended = super::scrape::scrape(&config, &Source::ALL).await?;
    println!(
        "Added {} new tool(s), catalog now has {}",
        appended.added, appended.total
    );

    let merged = merge::run(&config)?;
    super::merge::print_report(&merged, &config.data.tools_csv);

    let alerted = alert::run(&config, AlertOptions::from_config(&config))?;
    super::alert::print_report(&alerted);

    info!("Daily update finished");
    Ok(())
}
