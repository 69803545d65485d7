use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, info};

use crate::config::ProductHunt;
use crate::error::{Result, ToolscoutError};
use crate::models::{sources, Tool, GENERAL_CATEGORY};
use crate::text;

/// Keywords that mark a post as AI-related
const AI_KEYWORDS: &[&str] = &[
    "ai",
    "artificial intelligence",
    "machine learning",
    "ml",
    "nlp",
    "neural",
    "deep learning",
];

/// Product Hunt topic slugs folded into our category names
const CATEGORY_MAP: &[(&str, &str)] = &[
    ("fintech", "finance"),
    ("developer-tools", "devtools"),
    ("content-marketing", "content"),
];

#[derive(Debug, Deserialize)]
struct GraphQlResponse {
    data: Option<PostsData>,
    /// `Some` whenever the key is present, even as `null`
    #[serde(default, deserialize_with = "present")]
    errors: Option<serde_json::Value>,
}

fn present<'de, D>(deserializer: D) -> std::result::Result<Option<serde_json::Value>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    serde_json::Value::deserialize(deserializer).map(Some)
}

#[derive(Debug, Deserialize)]
struct PostsData {
    posts: Connection<Post>,
}

#[derive(Debug, Deserialize)]
struct Connection<T> {
    #[serde(default = "Vec::new")]
    edges: Vec<Edge<T>>,
}

impl<T> Default for Connection<T> {
    fn default() -> Self {
        Self { edges: Vec::new() }
    }
}

#[derive(Debug, Deserialize)]
struct Edge<T> {
    node: T,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Post {
    #[serde(default)]
    id: Option<String>,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    tagline: Option<String>,
    #[serde(default)]
    url: Option<String>,
    #[serde(default)]
    website: Option<String>,
    #[serde(default)]
    topics: Option<Connection<Topic>>,
    #[serde(default)]
    created_at: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Topic {
    name: String,
}

/// How posts become tools
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostFilter {
    /// Keep AI-related posts and fold topics into catalog categories
    AiOnly,
    /// Keep every post; the category is the slugified first topic
    All,
}

/// Product Hunt GraphQL scraper
pub struct ProductHuntScraper {
    client: reqwest::Client,
    api_url: String,
    api_key: Option<String>,
    limit: usize,
    filter: PostFilter,
}

impl ProductHuntScraper {
    /// Scraper for the daily run: AI posts only
    pub fn new(config: &ProductHunt, api_key: Option<String>) -> Result<Self> {
        Self::build(config, api_key, config.timeout_secs, PostFilter::AiOnly)
    }

    /// Interactive lookup for chat: every post, short timeout
    pub fn lookup(config: &ProductHunt, api_key: Option<String>, timeout_secs: u64) -> Result<Self> {
        Self::build(config, api_key, timeout_secs, PostFilter::All)
    }

    fn build(
        config: &ProductHunt,
        api_key: Option<String>,
        timeout_secs: u64,
        filter: PostFilter,
    ) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()?;

        Ok(Self {
            client,
            api_url: config.api_url.clone(),
            api_key,
            limit: config.limit,
            filter,
        })
    }

    /// Whether an API key is available
    pub fn is_enabled(&self) -> bool {
        self.api_key.is_some()
    }

    /// Fetch the top posts, filtered per [`PostFilter`].
    ///
    /// Without an API key this logs and returns nothing.
    pub async fn collect(&self) -> Result<Vec<Tool>> {
        let Some(api_key) = &self.api_key else {
            info!("Product Hunt API key not set, skipping Product Hunt");
            return Ok(Vec::new());
        };

        debug!(url = %self.api_url, "Fetching tools from Product Hunt API");
        let response = self
            .client
            .post(&self.api_url)
            .bearer_auth(api_key)
            .json(&serde_json::json!({ "query": posts_query(self.limit) }))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let excerpt: String = body.chars().take(200).collect();
            return Err(ToolscoutError::Scraper(format!(
                "Product Hunt API returned {}: {}",
                status, excerpt
            )));
        }

        let body = response.text().await?;
        let tools = parse_posts_with(&body, Utc::now(), self.filter)?;

        info!(count = tools.len(), filter = ?self.filter, "Fetched tools from Product Hunt");
        Ok(tools)
    }
}

/// GraphQL query for the most voted posts
fn posts_query(limit: usize) -> String {
    format!(
        "query {{ posts(first: {}, order: VOTES) {{ edges {{ node {{ id name tagline url website topics {{ edges {{ node {{ name }} }} }} createdAt }} }} }} }}",
        limit
    )
}

/// Turn a GraphQL response body into AI-related tools
pub fn parse_posts(body: &str, fetched_at: DateTime<Utc>) -> Result<Vec<Tool>> {
    parse_posts_with(body, fetched_at, PostFilter::AiOnly)
}

fn parse_posts_with(body: &str, fetched_at: DateTime<Utc>, filter: PostFilter) -> Result<Vec<Tool>> {
    let response: GraphQlResponse = serde_json::from_str(body)?;

    if let Some(errors) = response.errors {
        return Err(ToolscoutError::Scraper(format!(
            "Product Hunt GraphQL errors: {}",
            errors
        )));
    }

    let posts = response.data.map(|d| d.posts.edges).unwrap_or_default();

    let tools = posts
        .into_iter()
        .map(|edge| edge.node)
        .filter_map(|post| post_to_tool(post, fetched_at, filter))
        .collect();

    Ok(tools)
}

fn post_to_tool(post: Post, fetched_at: DateTime<Utc>, filter: PostFilter) -> Option<Tool> {
    let name = post.name.unwrap_or_default();
    let tagline = post.tagline.unwrap_or_default();
    let topics: Vec<String> = post
        .topics
        .unwrap_or_default()
        .edges
        .into_iter()
        .map(|e| e.node.name)
        .collect();

    let is_ai = text::contains_any(&name, AI_KEYWORDS)
        || text::contains_any(&tagline, AI_KEYWORDS)
        || text::contains_any(&topics.join(" "), AI_KEYWORDS);
    if filter == PostFilter::AiOnly && !is_ai {
        return None;
    }

    let category = match (topics.first(), filter) {
        (Some(topic), PostFilter::AiOnly) => map_category(&slugify(topic)),
        (Some(topic), PostFilter::All) => slugify(topic),
        (None, _) => GENERAL_CATEGORY.to_string(),
    };

    let url = post
        .website
        .filter(|w| !w.trim().is_empty())
        .or(post.url)
        .unwrap_or_default();

    let launch_date = post
        .created_at
        .filter(|c| !c.trim().is_empty())
        .unwrap_or_else(|| fetched_at.to_rfc3339());

    Some(Tool {
        id: post.id.unwrap_or_default(),
        name,
        description: tagline,
        url,
        primary_category: category.clone(),
        category,
        source: sources::PRODUCT_HUNT.to_string(),
        launch_date,
    })
}

fn slugify(topic: &str) -> String {
    topic.trim().to_lowercase().replace(' ', "-")
}

fn map_category(slug: &str) -> String {
    CATEGORY_MAP
        .iter()
        .find(|(from, _)| *from == slug)
        .map(|(_, to)| to.to_string())
        .unwrap_or_else(|| slug.to_string())
}
