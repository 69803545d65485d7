use chrono::{DateTime, Utc};
use scraper::{ElementRef, Html, Selector};
use std::time::Duration;
use tracing::{debug, info};

use crate::config::GithubTrending;
use crate::error::{Result, ToolscoutError};
use crate::models::{sources, Tool};
use crate::text;

/// Keywords that mark a repository as AI/ML related
const AI_KEYWORDS: &[&str] = &[
    "ai",
    "artificial intelligence",
    "machine learning",
    "ml",
    "deep learning",
    "neural",
    "nlp",
    "llm",
    "gpt",
    "transformer",
    "pytorch",
    "tensorflow",
    "chatbot",
    "computer vision",
    "cv",
    "reinforcement learning",
];

const NO_DESCRIPTION: &str = "No description";

/// GitHub Trending page scraper
pub struct GithubTrendingScraper {
    client: reqwest::Client,
    url: String,
    limit: usize,
    delay: Duration,
}

impl GithubTrendingScraper {
    pub fn new(config: &GithubTrending) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.as_str())
            .build()?;

        Ok(Self {
            client,
            url: config.url.clone(),
            limit: config.limit,
            delay: Duration::from_millis(config.delay_ms),
        })
    }

    /// Fetch the trending page and keep AI/ML repositories
    pub async fn collect(&self) -> Result<Vec<Tool>> {
        debug!(url = %self.url, "Fetching GitHub Trending");
        let response = self.client.get(&self.url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ToolscoutError::Scraper(format!(
                "GitHub Trending returned {}",
                status
            )));
        }

        let html = response.text().await?;
        let tools = parse_trending(&html, self.limit, Utc::now())?;

        info!(count = tools.len(), "Found AI/ML repositories on GitHub Trending");

        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        Ok(tools)
    }
}

fn selector(css: &str) -> Result<Selector> {
    Selector::parse(css)
        .map_err(|e| ToolscoutError::Scraper(format!("Invalid selector '{}': {}", css, e)))
}

/// Extract AI/ML repositories from trending page HTML
pub fn parse_trending(html: &str, limit: usize, fetched_at: DateTime<Utc>) -> Result<Vec<Tool>> {
    let document = Html::parse_document(html);

    let row = selector("article.Box-row")?;
    let heading = selector("h2.h3")?;
    let heading_link = selector("h2 a[href]")?;
    let any_link = selector("a[href]")?;
    let description = selector("p.col-9")?;
    let paragraph = selector("p")?;

    let mut items: Vec<ElementRef> = document.select(&row).collect();
    if items.is_empty() {
        items = document.select(&heading).collect();
    }
    debug!(count = items.len(), "Repository rows on trending page");

    let mut tools = Vec::new();
    for item in items.into_iter().take(limit) {
        let Some(link) = item
            .select(&heading_link)
            .next()
            .or_else(|| item.select(&any_link).next())
        else {
            continue;
        };

        let Some(href) = link.value().attr("href") else {
            continue;
        };
        let repo_path: String = href.chars().filter(|c| !c.is_whitespace()).collect();
        let repo_name = repo_path.trim_matches('/').to_string();
        if repo_name.is_empty() {
            continue;
        }

        let desc = item
            .select(&description)
            .next()
            .or_else(|| item.select(&paragraph).next())
            .map(element_text)
            .filter(|d| !d.is_empty())
            .unwrap_or_else(|| NO_DESCRIPTION.to_string());

        let haystack = format!("{} {}", repo_name, desc);
        if !text::contains_any(&haystack, AI_KEYWORDS) {
            continue;
        }

        tools.push(Tool {
            id: format!("github-{}", repo_name.replace('/', "-")),
            name: repo_name.clone(),
            description: desc,
            url: format!("https://github.com/{}", repo_name),
            category: "devtools,github".to_string(),
            primary_category: "devtools".to_string(),
            source: sources::GITHUB_TRENDING.to_string(),
            launch_date: fetched_at.to_rfc3339(),
        });
    }

    Ok(tools)
}

/// Text content with whitespace collapsed
fn element_text(element: ElementRef) -> String {
    element
        .text()
        .flat_map(str::split_whitespace)
        .collect::<Vec<_>>()
        .join(" ")
}
