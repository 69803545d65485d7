//! Scrapers module
//!
//! Fetches AI tools from external sources:
//! - ProductHuntScraper: Product Hunt GraphQL API (needs an API key)
//! - GithubTrendingScraper: GitHub Trending HTML page

mod github;
mod producthunt;

pub use github::GithubTrendingScraper;
pub use producthunt::ProductHuntScraper;

use crate::error::{Result, ToolscoutError};

/// A scraper selectable with `--only`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    ProductHunt,
    GithubTrending,
}

impl Source {
    pub const ALL: [Source; 2] = [Source::ProductHunt, Source::GithubTrending];

    pub fn name(&self) -> &'static str {
        match self {
            Source::ProductHunt => "producthunt",
            Source::GithubTrending => "github",
        }
    }
}

/// Parse a comma-separated `--only` list; `None` selects every source
pub fn select_sources(only: Option<&str>) -> Result<Vec<Source>> {
    let Some(only) = only else {
        return Ok(Source::ALL.to_vec());
    };

    let mut selected = Vec::new();
    for part in only.split(',').map(str::trim).filter(|p| !p.is_empty()) {
        let source = match part.to_lowercase().as_str() {
            "producthunt" | "product-hunt" | "ph" => Source::ProductHunt,
            "github" | "github-trending" | "gh" => Source::GithubTrending,
            other => {
                return Err(ToolscoutError::Config(format!(
                    "Unknown source '{}'. Expected producthunt or github",
                    other
                )))
            }
        };
        if !selected.contains(&source) {
            selected.push(source);
        }
    }

    Ok(selected)
}
