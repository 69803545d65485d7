//! Tool catalog module
//!
//! Reads and writes the flat CSV catalog and filters it for the chat surface.

mod query;

pub use query::{search, Query};

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::error::{Result, ToolscoutError};
use crate::models::Tool;

/// Load tools from a CSV file; a missing file is an empty catalog
pub fn load(path: &Path) -> Result<Vec<Tool>> {
    if !path.exists() {
        return Ok(Vec::new());
    }

    let content = fs::read_to_string(path).map_err(|e| {
        ToolscoutError::Catalog(format!("Cannot read '{}': {}", path.display(), e))
    })?;

    parse(&content)
}

/// Parse CSV text with a header row
pub fn parse(content: &str) -> Result<Vec<Tool>> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(content.as_bytes());

    let mut tools = Vec::new();
    for record in reader.deserialize() {
        let tool: Tool = record?;
        tools.push(tool);
    }

    Ok(tools)
}

/// Load the live catalog, falling back to the sample list when absent
pub fn load_with_fallback(tools_csv: &Path, sample_csv: &Path) -> Result<Vec<Tool>> {
    let path = if tools_csv.exists() {
        tools_csv
    } else {
        sample_csv
    };

    if !path.exists() {
        return Err(ToolscoutError::Catalog(format!(
            "Data file not found: {}",
            path.display()
        )));
    }

    load(path)
}

/// Write tools to a CSV file with the full header
pub fn write(path: &Path, tools: &[Tool]) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let mut writer = csv::Writer::from_path(path)?;
    for tool in tools {
        writer.serialize(tool)?;
    }
    writer.flush()?;

    Ok(())
}

/// Outcome of appending scraper output to the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppendReport {
    pub added: usize,
    pub total: usize,
}

/// Append tools whose dedup key is not yet in the catalog.
///
/// Existing rows get their primary category backfilled. The file is only
/// rewritten when something was added.
pub fn append_new(path: &Path, incoming: Vec<Tool>) -> Result<AppendReport> {
    let mut tools = load(path)?;
    let mut seen: HashSet<String> = tools.iter().map(Tool::dedup_key).collect();

    let mut added = 0;
    for mut tool in incoming {
        if seen.insert(tool.dedup_key()) {
            tool.fill_primary_category();
            tools.push(tool);
            added += 1;
        }
    }

    if added > 0 {
        for tool in &mut tools {
            tool.fill_primary_category();
        }
        write(path, &tools)?;
    }

    Ok(AppendReport {
        added,
        total: tools.len(),
    })
}
