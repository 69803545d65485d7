use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Category used when a tool carries none
pub const GENERAL_CATEGORY: &str = "general";

/// Well-known values of the `source` column
pub mod sources {
    pub const PRODUCT_HUNT: &str = "producthunt";
    pub const GITHUB_TRENDING: &str = "github-trending";
}

/// One row of the tool catalog.
///
/// Field order is the CSV column order. Missing columns deserialize as
/// empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tool {
    /// Source-specific identifier
    pub id: String,
    pub name: String,
    pub description: String,
    /// Canonical link, primary dedup key
    pub url: String,
    /// Comma-separated category slugs
    pub category: String,
    pub primary_category: String,
    pub source: String,
    /// ISO date or timestamp as scraped
    pub launch_date: String,
}

impl Tool {
    /// Stored primary category, else the first slug of `category`
    pub fn primary_category_or_derived(&self) -> String {
        let stored = self.primary_category.trim();
        if !stored.is_empty() {
            return stored.to_string();
        }

        self.category
            .split(',')
            .map(str::trim)
            .find(|s| !s.is_empty())
            .unwrap_or(GENERAL_CATEGORY)
            .to_string()
    }

    /// Category shown to users
    pub fn display_category(&self) -> &str {
        let category = self.category.trim();
        if category.is_empty() {
            GENERAL_CATEGORY
        } else {
            category
        }
    }

    /// Launch time for ordering; offset timestamps are compared in UTC
    pub fn launched_at(&self) -> Option<NaiveDateTime> {
        let raw = self.launch_date.trim();
        match DateTime::parse_from_rfc3339(raw) {
            Ok(dt) => Some(dt.naive_utc()),
            Err(_) => parse_launch_date(raw),
        }
    }

    /// Launch day as written, in the timestamp's own offset
    pub fn launch_day(&self) -> Option<NaiveDate> {
        parse_launch_date(&self.launch_date).map(|dt| dt.date())
    }

    /// URL when present, otherwise name + source
    pub fn dedup_key(&self) -> String {
        let url = self.url.trim();
        if url.is_empty() {
            format!(
                "{}|{}",
                self.name.trim().to_lowercase(),
                self.source.trim().to_lowercase()
            )
        } else {
            url.to_lowercase()
        }
    }

    /// Case-insensitive substring test against `category`
    pub fn in_category(&self, category: &str) -> bool {
        self.category
            .to_lowercase()
            .contains(&category.trim().to_lowercase())
    }

    /// True when any term appears in the name or description
    pub fn matches_any_term(&self, terms: &[String]) -> bool {
        let haystack = format!("{} {}", self.name, self.description).to_lowercase();
        terms.iter().any(|t| haystack.contains(t.as_str()))
    }

    /// Backfill `primary_category` from `category`
    pub fn fill_primary_category(&mut self) {
        if self.primary_category.trim().is_empty() {
            self.primary_category = self.primary_category_or_derived();
        }
    }
}

/// Parse the date formats the scrapers and curators produce.
///
/// Offset timestamps keep their wall-clock time, so the date part is the
/// calendar day in the source's own offset.
pub fn parse_launch_date(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.naive_local());
    }

    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(dt);
        }
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}
