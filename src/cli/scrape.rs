use std::path::PathBuf;
use tracing::{info, warn};

use crate::catalog::{self, AppendReport};
use crate::config::{self, Config};
use crate::error::Result;
use crate::models::Tool;
use crate::scrapers::{self, GithubTrendingScraper, ProductHuntScraper, Source};

/// Fetch tools from the selected sources and append them to the catalog
pub async fn run(config_path: Option<PathBuf>, only: Option<String>) -> Result<()> {
    let config = config::load(&config::resolve_path(config_path))?;
    let sources = scrapers::select_sources(only.as_deref())?;

    let report = scrape(&config, &sources).await?;
    println!(
        "Added {} new tool(s), catalog now has {}: {}",
        report.added,
        report.total,
        config.data.tools_csv.display()
    );

    Ok(())
}

/// Run each source in turn. A failing source is logged and skipped.
pub async fn scrape(config: &Config, sources: &[Source]) -> Result<AppendReport> {
    let mut found: Vec<Tool> = Vec::new();

    for source in sources {
        match collect(config, *source).await {
            Ok(tools) => {
                info!(source = source.name(), count = tools.len(), "Collected tools");
                found.extend(tools);
            }
            Err(e) => warn!(source = source.name(), error = %e, "Scraper failed"),
        }
    }

    catalog::append_new(&config.data.tools_csv, found)
}

async fn collect(config: &Config, source: Source) -> Result<Vec<Tool>> {
    match source {
        Source::ProductHunt => {
            let scraper = ProductHuntScraper::new(&config.producthunt, config.producthunt.api_key())?;
            scraper.collect().await
        }
        Source::GithubTrending => GithubTrendingScraper::new(&config.github)?.collect().await,
    }
}
