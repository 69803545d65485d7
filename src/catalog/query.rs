use serde::{Deserialize, Serialize};

use crate::models::Tool;
use crate::text;

/// Catalog filter
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Query {
    /// Category slug matched as a substring of `Tool::category`
    pub category: Option<String>,
    /// Any term must appear in the name or description
    pub terms: Vec<String>,
}

impl Query {
    pub fn new(category: Option<String>, text: Option<&str>) -> Self {
        Self {
            category: category.filter(|c| !c.trim().is_empty() && c != "all"),
            terms: text.map(text::terms).unwrap_or_default(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.category.is_none() && self.terms.is_empty()
    }

    pub fn matches(&self, tool: &Tool) -> bool {
        if let Some(category) = &self.category {
            if !tool.in_category(category) {
                return false;
            }
        }

        self.terms.is_empty() || tool.matches_any_term(&self.terms)
    }
}

/// Tools matching the query, in catalog order
pub fn search(tools: &[Tool], query: &Query) -> Vec<Tool> {
    if query.is_empty() {
        return tools.to_vec();
    }
    tools.iter().filter(|t| query.matches(t)).cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Vec<Tool> {
        vec![
            Tool {
                name: "LedgerBot".to_string(),
                description: "Bookkeeping for startups".to_string(),
                category: "finance".to_string(),
                ..Tool::default()
            },
            Tool {
                name: "Scribe".to_string(),
                description: "Blog post writer".to_string(),
                category: "content,marketing".to_string(),
                ..Tool::default()
            },
            Tool {
                name: "AdPilot".to_string(),
                description: "Campaign planner".to_string(),
                category: "marketing".to_string(),
                ..Tool::default()
            },
        ]
    }

    #[test]
    fn test_empty_query_returns_everything() {
        let query = Query::new(None, None);
        assert!(query.is_empty());
        assert_eq!(search(&catalog(), &query).len(), 3);
    }

    #[test]
    fn test_all_category_means_no_filter() {
        let query = Query::new(Some("all".to_string()), None);
        assert!(query.category.is_none());
    }

    #[test]
    fn test_category_filter_is_substring() {
        let query = Query::new(Some("marketing".to_string()), None);
        let names: Vec<_> = search(&catalog(), &query)
            .into_iter()
            .map(|t| t.name)
            .collect();
        assert_eq!(names, vec!["Scribe", "AdPilot"]);
    }

    #[test]
    fn test_terms_and_category_combine() {
        let query = Query::new(Some("marketing".to_string()), Some("blog ideas"));
        let found = search(&catalog(), &query);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "Scribe");
    }

    #[test]
    fn test_terms_only() {
        let query = Query::new(None, Some("bookkeeping"));
        let found = search(&catalog(), &query);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "LedgerBot");
    }
}
