//! Pending alerts handoff
//!
//! The merge step records newly discovered tools in a JSON file
//! (data/new_tools.json) that the alert step consumes and removes.
use std::fs;
use std::path::Path;

use crate::error::{Result, ToolscoutError};
use crate::models::Tool;

/// Load pending tools; a missing file means nothing is pending
pub fn load_pending(path: &Path) -> Result<Vec<Tool>> {
    if !path.exists() {
        return Ok(Vec::new());
    }

    let content = fs::read_to_string(path)?;
    let tools = serde_json::from_str(&content).map_err(|e| {
        ToolscoutError::Catalog(format!(
            "Cannot parse pending tools in '{}': {}",
            path.display(),
            e
        ))
    })?;

    Ok(tools)
}

/// Save pending tools as pretty JSON
pub fn save_pending(path: &Path, tools: &[Tool]) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let json = serde_json::to_string_pretty(tools)?;
    fs::write(path, json)?;
    Ok(())
}

/// Remove the pending file; returns whether one existed
pub fn clear_pending(path: &Path) -> Result<bool> {
    if path.exists() {
        fs::remove_file(path)?;
        Ok(true)
    } else {
        Ok(false)
    }
}
