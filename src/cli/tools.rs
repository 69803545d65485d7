use std::path::PathBuf;

use crate::catalog::{self, Query};
use crate::config;
use crate::display::{self, ColorMode};
use crate::error::Result;
use crate::renderer;

/// List catalog entries, optionally filtered
pub fn list(
    config_path: Option<PathBuf>,
    category: Option<String>,
    query: Option<String>,
    limit: Option<usize>,
    color: ColorMode,
) -> Result<()> {
    let config = config::load(&config::resolve_path(config_path))?;
    let tools = catalog::load_with_fallback(&config.data.tools_csv, &config.data.sample_csv)?;

    let mut found = catalog::search(&tools, &Query::new(category, query.as_deref()));
    if let Some(limit) = limit {
        found.truncate(limit);
    }

    display::print_markdown(&renderer::render_tools(&found), color);
    Ok(())
}
