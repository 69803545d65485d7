//! Merge step
//!
//! Consolidates the catalog after the scrapers ran: detects tools that are
//! new relative to the committed baseline, removes duplicates, sorts by
//! launch date and writes the CSV back.
use std::collections::{HashMap, HashSet};
use tracing::{info, warn};

use crate::catalog;
use crate::config::Config;
use crate::error::Result;
use crate::models::Tool;
use crate::publish;
use crate::state;

/// Summary of a merge run
#[derive(Debug, Clone, Default)]
pub struct MergeReport {
    /// Rows read before deduplication
    pub loaded: usize,
    /// Rows written after deduplication
    pub written: usize,
    pub duplicates_removed: usize,
    /// Tools absent from the baseline
    pub new_tools: Vec<Tool>,
    /// Catalog was seeded from the sample list
    pub seeded_from_sample: bool,
}

/// Run the merge step against the git HEAD baseline
pub fn run(config: &Config) -> Result<MergeReport> {
    let baseline = match publish::read_head_file(&config.data.tools_csv) {
        Ok(Some(content)) => match catalog::parse(&content) {
            Ok(tools) => {
                info!(count = tools.len(), "Loaded baseline from previous commit");
                tools
            }
            Err(e) => {
                warn!(error = %e, "Cannot parse committed catalog, treating baseline as empty");
                Vec::new()
            }
        },
        Ok(None) => Vec::new(),
        Err(e) => {
            warn!(error = %e, "Cannot read committed catalog, treating baseline as empty");
            Vec::new()
        }
    };

    merge(config, &baseline)
}

/// Merge the catalog against an explicit baseline
pub fn merge(config: &Config, baseline: &[Tool]) -> Result<MergeReport> {
    let mut current = catalog::load(&config.data.tools_csv)?;
    let mut seeded_from_sample = false;

    if current.is_empty() && config.data.sample_csv.exists() {
        current = catalog::load(&config.data.sample_csv)?;
        seeded_from_sample = true;
        info!(count = current.len(), "Initialized catalog from sample list");
    }

    let new_tools = find_new(&current, baseline);
    if new_tools.is_empty() {
        state::clear_pending(&config.data.new_tools_file)?;
    } else {
        info!(count = new_tools.len(), "Found new tools");
        if let Err(e) = state::save_pending(&config.data.new_tools_file, &new_tools) {
            warn!(error = %e, "Cannot record pending alerts");
        }
    }

    let loaded = current.len();
    if current.is_empty() {
        return Ok(MergeReport {
            new_tools,
            ..MergeReport::default()
        });
    }

    let mut merged = dedup_keep_last(current);
    sort_newest_first(&mut merged);
    for tool in &mut merged {
        normalize(tool);
    }

    catalog::write(&config.data.tools_csv, &merged)?;
    info!(count = merged.len(), path = %config.data.tools_csv.display(), "Saved catalog");

    Ok(MergeReport {
        loaded,
        written: merged.len(),
        duplicates_removed: loaded - merged.len(),
        new_tools,
        seeded_from_sample,
    })
}

/// Tools whose URL does not appear in the baseline, first occurrence only
pub fn find_new(current: &[Tool], baseline: &[Tool]) -> Vec<Tool> {
    let known: HashSet<&str> = baseline.iter().map(|t| t.url.as_str()).collect();
    let mut reported = HashSet::new();

    current
        .iter()
        .filter(|t| !known.contains(t.url.as_str()))
        .filter(|t| reported.insert(t.url.clone()))
        .cloned()
        .collect()
}

/// Drop earlier rows that share a dedup key with a later row
pub fn dedup_keep_last(tools: Vec<Tool>) -> Vec<Tool> {
    let mut last_index: HashMap<String, usize> = HashMap::new();
    for (i, tool) in tools.iter().enumerate() {
        last_index.insert(tool.dedup_key(), i);
    }

    tools
        .into_iter()
        .enumerate()
        .filter(|(i, tool)| last_index.get(&tool.dedup_key()) == Some(i))
        .map(|(_, tool)| tool)
        .collect()
}

/// Newest launch first; rows without a parseable date keep their order at the end
pub fn sort_newest_first(tools: &mut [Tool]) {
    tools.sort_by(|a, b| match (a.launched_at(), b.launched_at()) {
        (Some(x), Some(y)) => y.cmp(&x),
        (Some(_), None) => std::cmp::Ordering::Less,
        (None, Some(_)) => std::cmp::Ordering::Greater,
        (None, None) => std::cmp::Ordering::Equal,
    });
}

/// Date-only launch date and a filled primary category
fn normalize(tool: &mut Tool) {
    tool.launch_date = tool
        .launch_day()
        .map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_default();
    tool.fill_primary_category();
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    fn tool(name: &str, url: &str, date: &str) -> Tool {
        Tool {
            id: name.to_lowercase(),
            name: name.to_string(),
            description: format!("{} does AI things", name),
            url: url.to_string(),
            category: "content,marketing".to_string(),
            source: "producthunt".to_string(),
            launch_date: date.to_string(),
            ..Tool::default()
        }
    }

    fn test_config(dir: &Path) -> Config {
        let mut config = Config::default();
        config.data.tools_csv = dir.join("data/tools.csv");
        config.data.sample_csv = dir.join("data/sample_ai_tools.csv");
        config.data.new_tools_file = dir.join("data/new_tools.json");
        config
    }

    #[test]
    fn test_dedup_keeps_last_occurrence() {
        let tools = vec![
            tool("Alpha v1", "https://alpha.ai", "2024-01-01"),
            tool("Beta", "https://beta.ai", "2024-01-02"),
            tool("Alpha v2", "https://alpha.ai", "2024-01-03"),
        ];

        let names: Vec<_> = dedup_keep_last(tools).into_iter().map(|t| t.name).collect();
        assert_eq!(names, vec!["Beta", "Alpha v2"]);
    }

    #[test]
    fn test_dedup_without_url_uses_name_and_source() {
        let tools = vec![
            tool("Gamma", "", "2024-01-01"),
            tool("gamma", "", "2024-01-05"),
            tool("Delta", "", "2024-01-02"),
        ];

        let deduped = dedup_keep_last(tools);
        assert_eq!(deduped.len(), 2);
        assert_eq!(deduped[0].launch_date, "2024-01-05");
    }

    #[test]
    fn test_sort_newest_first_unparseable_last() {
        let mut tools = vec![
            tool("Old", "https://old.ai", "2023-05-01"),
            tool("Unknown", "https://unknown.ai", "soon"),
            tool("New", "https://new.ai", "2024-02-01T10:00:00Z"),
            tool("Blank", "https://blank.ai", ""),
        ];

        sort_newest_first(&mut tools);
        let names: Vec<_> = tools.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["New", "Old", "Unknown", "Blank"]);
    }

    #[test]
    fn test_normalize_keeps_offset_calendar_day() {
        let mut late = tool("Late", "https://late.ai", "2024-01-15T20:00:00-08:00");
        normalize(&mut late);
        assert_eq!(late.launch_date, "2024-01-15");

        let mut early = tool("Early", "https://early.ai", "2024-01-15T01:30:00+09:00");
        normalize(&mut early);
        assert_eq!(early.launch_date, "2024-01-15");
    }

    #[test]
    fn test_sort_compares_offset_timestamps_as_instants() {
        // 20:00 -08:00 is 04:00 UTC the next day, later than 23:00 UTC
        let mut tools = vec![
            tool("Utc", "https://utc.ai", "2024-01-15T23:00:00Z"),
            tool("Pacific", "https://pacific.ai", "2024-01-15T20:00:00-08:00"),
        ];

        sort_newest_first(&mut tools);
        assert_eq!(tools[0].name, "Pacific");
    }

    #[test]
    fn test_find_new_by_url() {
        let baseline = vec![tool("Alpha", "https://alpha.ai", "2024-01-01")];
        let current = vec![
            tool("Alpha", "https://alpha.ai", "2024-01-01"),
            tool("Beta", "https://beta.ai", "2024-01-02"),
            tool("Beta dup", "https://beta.ai", "2024-01-03"),
        ];

        let new_tools = find_new(&current, &baseline);
        assert_eq!(new_tools.len(), 1);
        assert_eq!(new_tools[0].name, "Beta");
    }

    #[test]
    fn test_merge_writes_sorted_normalized_catalog() {
        let temp = TempDir::new().unwrap();
        let config = test_config(temp.path());

        catalog::write(
            &config.data.tools_csv,
            &[
                tool("Alpha", "https://alpha.ai", "2024-01-01T09:00:00Z"),
                tool("Beta", "https://beta.ai", "2024-03-01T09:00:00.5"),
                tool("Alpha", "https://alpha.ai", "2024-02-01"),
            ],
        )
        .unwrap();

        let baseline = vec![tool("Alpha", "https://alpha.ai", "2024-01-01")];
        let report = merge(&config, &baseline).unwrap();

        assert_eq!(report.loaded, 3);
        assert_eq!(report.written, 2);
        assert_eq!(report.duplicates_removed, 1);
        assert_eq!(report.new_tools.len(), 1);
        assert!(!report.seeded_from_sample);

        let written = catalog::load(&config.data.tools_csv).unwrap();
        assert_eq!(written[0].name, "Beta");
        assert_eq!(written[0].launch_date, "2024-03-01");
        assert_eq!(written[1].launch_date, "2024-02-01");
        assert_eq!(written[1].primary_category, "content");

        let pending = state::load_pending(&config.data.new_tools_file).unwrap();
        assert_eq!(pending[0].url, "https://beta.ai");
    }

    #[test]
    fn test_merge_clears_pending_when_nothing_new() {
        let temp = TempDir::new().unwrap();
        let config = test_config(temp.path());

        let tools = vec![tool("Alpha", "https://alpha.ai", "2024-01-01")];
        catalog::write(&config.data.tools_csv, &tools).unwrap();
        state::save_pending(&config.data.new_tools_file, &tools).unwrap();

        let report = merge(&config, &tools).unwrap();

        assert!(report.new_tools.is_empty());
        assert!(!config.data.new_tools_file.exists());
    }

    #[test]
    fn test_merge_seeds_from_sample() {
        let temp = TempDir::new().unwrap();
        let config = test_config(temp.path());

        catalog::write(
            &config.data.sample_csv,
            &[tool("Sample", "https://sample.ai", "2024-01-01")],
        )
        .unwrap();

        let report = merge(&config, &[]).unwrap();

        assert!(report.seeded_from_sample);
        assert_eq!(report.written, 1);
        assert_eq!(report.new_tools.len(), 1);
        assert!(config.data.tools_csv.exists());
    }

    #[test]
    fn test_merge_empty_catalog_writes_nothing() {
        let temp = TempDir::new().unwrap();
        let config = test_config(temp.path());

        let report = merge(&config, &[]).unwrap();

        assert_eq!(report.written, 0);
        assert!(!config.data.tools_csv.exists());
    }

    #[test]
    fn test_run_outside_repository_treats_all_as_new() {
        let temp = TempDir::new().unwrap();
        let config = test_config(temp.path());
        fs::create_dir_all(temp.path().join("data")).unwrap();
        catalog::write(
            &config.data.tools_csv,
            &[tool("Alpha", "https://alpha.ai", "2024-01-01")],
        )
        .unwrap();

        let report = run(&config).unwrap();
        assert_eq!(report.new_tools.len(), 1);
    }
}
