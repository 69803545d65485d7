use std::path::PathBuf;

use crate::chat::ChatEngine;
use crate::config;
use crate::display::{self, ColorMode};
use crate::error::Result;
use crate::renderer;

/// Answer one chat question in the terminal
pub async fn run(
    config_path: Option<PathBuf>,
    prompt: String,
    category: Option<String>,
    color: ColorMode,
) -> Result<()> {
    let config = config::load(&config::resolve_path(config_path))?;
    let engine = ChatEngine::new(config)?;

    let answer = engine.answer(&prompt, category.as_deref()).await?;
    display::print_markdown(&renderer::render_answer(&answer), color);
    Ok(())
}
