//! Chat module
//!
//! Keyword-driven answers over the tool catalog: detects a category in the
//! question, filters the catalog and writes a template summary.

mod history;

pub use history::{ChatMessage, History, Role};

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::catalog::{self, Query};
use crate::config::Config;
use crate::error::Result;
use crate::models::{Tool, GENERAL_CATEGORY};
use crate::scrapers::ProductHuntScraper;
use crate::text;

/// Categories offered in the UI; `all` disables the filter
pub const CATEGORIES: &[&str] = &[
    "all",
    "finance",
    "customer-support",
    "content",
    "devtools",
    "marketing",
    "productivity",
];

/// Keyword table, checked in order; the first category with a hit wins
const CATEGORY_KEYWORDS: &[(&str, &[&str])] = &[
    (
        "finance",
        &["finance", "financial", "money", "banking", "investment"],
    ),
    (
        "customer-support",
        &["support", "customer", "service", "helpdesk", "chatbot"],
    ),
    ("content", &["content", "writing", "blog", "article", "copy"]),
    (
        "devtools",
        &["development", "code", "programming", "developer", "api"],
    ),
    (
        "marketing",
        &["marketing", "social", "advertising", "campaign"],
    ),
    (
        "productivity",
        &["productivity", "task", "project", "management", "workflow"],
    ),
];

pub const NO_TOOLS_SUMMARY: &str = "No tools found matching your criteria.";

pub const NO_RESULTS_REPLY: &str = "I couldn't find any tools matching your query. Try asking about a specific category like 'finance tools' or 'content creation tools'.";

/// Category implied by the question, if any
pub fn detect_category(prompt: &str) -> Option<&'static str> {
    CATEGORY_KEYWORDS
        .iter()
        .find(|(_, keywords)| text::contains_any(prompt, keywords))
        .map(|(category, _)| *category)
}

/// Build the catalog query for a chat question.
///
/// A detected category beats the sidebar selection. Free-text terms only
/// narrow the result when no category applies.
pub fn query_for(prompt: &str, selected: Option<&str>) -> Query {
    let selected = selected.filter(|c| !c.trim().is_empty() && *c != "all");

    match detect_category(prompt).or(selected) {
        Some(category) => Query::new(Some(category.to_string()), None),
        None => Query::new(None, Some(prompt)),
    }
}

/// Template summary of a result set
pub fn summarize(tools: &[Tool], question: &str) -> String {
    if tools.is_empty() {
        return NO_TOOLS_SUMMARY.to_string();
    }

    let mut categories: Vec<&str> = Vec::new();
    for tool in tools {
        let category = tool.display_category();
        if !categories.contains(&category) {
            categories.push(category);
        }
        if categories.len() == 3 {
            break;
        }
    }
    let categories = if categories.is_empty() {
        GENERAL_CATEGORY.to_string()
    } else {
        categories.join(", ")
    };

    let top: Vec<&str> = tools.iter().take(3).map(|t| t.name.as_str()).collect();

    let question = question.trim();
    let purpose = if question.is_empty() {
        "various tasks".to_string()
    } else {
        question.to_lowercase()
    };

    format!(
        "Found {} AI tool(s) matching your query.\n\nCategories: {}\n\nTop recommendations:\n{}\n\nThese tools can help with: {}",
        tools.len(),
        categories,
        top.join(", "),
        purpose
    )
}

/// Answer to one chat question
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatAnswer {
    /// Category the search used
    pub category: Option<String>,
    pub summary: String,
    /// Short line recorded in the chat history
    pub reply: String,
    pub tools: Vec<Tool>,
}

impl ChatAnswer {
    pub fn new(query: &Query, question: &str, tools: Vec<Tool>) -> Self {
        let reply = if tools.is_empty() {
            "No tools found.".to_string()
        } else {
            format!("Found {} tool(s) matching your query.", tools.len())
        };

        let summary = if tools.is_empty() {
            NO_RESULTS_REPLY.to_string()
        } else {
            summarize(&tools, question)
        };

        Self {
            category: query.category.clone(),
            summary,
            reply,
            tools,
        }
    }
}

/// Answers questions from the catalog, optionally trying Product Hunt first
pub struct ChatEngine {
    config: Config,
    live: Option<ProductHuntScraper>,
}

impl ChatEngine {
    pub fn new(config: Config) -> Result<Self> {
        let live = if config.chat.live_producthunt {
            let scraper = ProductHuntScraper::lookup(
                &config.producthunt,
                config.producthunt.api_key(),
                config.chat.live_timeout_secs,
            )?;
            scraper.is_enabled().then_some(scraper)
        } else {
            None
        };

        Ok(Self { config, live })
    }

    /// Engine that only reads the CSV catalog
    pub fn offline(config: Config) -> Self {
        Self { config, live: None }
    }

    /// Tools matching `query`: live results when available, else the CSV
    pub async fn search(&self, query: &Query) -> Result<Vec<Tool>> {
        if let Some(live) = &self.live {
            match live.collect().await {
                Ok(tools) => {
                    let found = catalog::search(&tools, query);
                    if !found.is_empty() {
                        return Ok(found);
                    }
                }
                Err(e) => warn!(error = %e, "Product Hunt lookup failed, falling back to CSV"),
            }
        }

        let tools =
            catalog::load_with_fallback(&self.config.data.tools_csv, &self.config.data.sample_csv)?;
        Ok(catalog::search(&tools, query))
    }

    /// Answer a chat question
    pub async fn answer(&self, question: &str, selected: Option<&str>) -> Result<ChatAnswer> {
        let query = query_for(question, selected);
        let tools = self.search(&query).await?;
        Ok(ChatAnswer::new(&query, question, tools))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;
    use tempfile::TempDir;

    fn tool(name: &str, category: &str) -> Tool {
        Tool {
            name: name.to_string(),
            description: format!("{} helps", name),
            url: format!("https://{}.example", name.to_lowercase()),
            category: category.to_string(),
            ..Tool::default()
        }
    }

    fn write_catalog(dir: &Path) -> Config {
        let mut config = Config::default();
        config.data.tools_csv = dir.join("tools.csv");
        config.data.sample_csv = dir.join("sample.csv");
        config.chat.live_producthunt = false;

        catalog::write(
            &config.data.tools_csv,
            &[
                tool("LedgerBot", "finance"),
                tool("Scribe", "content,marketing"),
                tool("TicketAI", "customer-support"),
            ],
        )
        .unwrap();
        config
    }

    #[test]
    fn test_detect_category() {
        assert_eq!(detect_category("Show me finance tools"), Some("finance"));
        assert_eq!(
            detect_category("Any good helpdesk software?"),
            Some("customer-support")
        );
        assert_eq!(
            detect_category("What tools help with content creation?"),
            Some("content")
        );
        assert_eq!(detect_category("I need an API client"), Some("devtools"));
        assert_eq!(detect_category("Something for my capital"), None);
        assert_eq!(detect_category("video editing"), None);
    }

    #[test]
    fn test_detect_category_first_match_wins() {
        // "money" (finance) is checked before "blog" (content)
        assert_eq!(detect_category("make money blogging"), Some("finance"));
    }

    #[test]
    fn test_query_prefers_detected_category() {
        let query = query_for("banking assistants", Some("marketing"));
        assert_eq!(query.category.as_deref(), Some("finance"));
        assert!(query.terms.is_empty());

        let query = query_for("anything new?", Some("marketing"));
        assert_eq!(query.category.as_deref(), Some("marketing"));

        let query = query_for("video editing", Some("all"));
        assert!(query.category.is_none());
        assert_eq!(query.terms, vec!["video".to_string(), "editing".to_string()]);
    }

    #[test]
    fn test_summarize_template() {
        let tools = vec![
            tool("A", "finance"),
            tool("B", "content"),
            tool("C", "finance"),
            tool("D", ""),
            tool("E", "devtools"),
        ];

        let summary = summarize(&tools, "Finance Tools");
        assert!(summary.starts_with("Found 5 AI tool(s) matching your query."));
        assert!(summary.contains("Categories: finance, content, general"));
        assert!(summary.contains("Top recommendations:\nA, B, C"));
        assert!(summary.ends_with("These tools can help with: finance tools"));
    }

    #[test]
    fn test_summarize_empty_question_and_list() {
        assert_eq!(summarize(&[], "x"), NO_TOOLS_SUMMARY);

        let summary = summarize(&[tool("A", "finance")], "  ");
        assert!(summary.ends_with("These tools can help with: various tasks"));
    }

    #[tokio::test]
    async fn test_answer_from_csv() {
        let temp = TempDir::new().unwrap();
        let engine = ChatEngine::offline(write_catalog(temp.path()));

        let answer = engine.answer("Show me finance tools", None).await.unwrap();
        assert_eq!(answer.category.as_deref(), Some("finance"));
        assert_eq!(answer.tools.len(), 1);
        assert_eq!(answer.tools[0].name, "LedgerBot");
        assert_eq!(answer.reply, "Found 1 tool(s) matching your query.");
    }

    #[tokio::test]
    async fn test_answer_with_no_results() {
        let temp = TempDir::new().unwrap();
        let engine = ChatEngine::offline(write_catalog(temp.path()));

        let answer = engine.answer("tools for workflow automation", None).await.unwrap();
        assert_eq!(answer.category.as_deref(), Some("productivity"));
        assert!(answer.tools.is_empty());
        assert_eq!(answer.summary, NO_RESULTS_REPLY);
        assert_eq!(answer.reply, "No tools found.");
    }

    #[tokio::test]
    async fn test_answer_missing_data_is_error() {
        let temp = TempDir::new().unwrap();
        let mut config = Config::default();
        config.data.tools_csv = temp.path().join("none.csv");
        config.data.sample_csv = temp.path().join("none-either.csv");

        let engine = ChatEngine::offline(config);
        assert!(engine.answer("finance", None).await.is_err());
    }
}
