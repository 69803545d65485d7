use crate::config;
use crate::error::Result;
use crate::state;
use std::path::PathBuf;

/// Drop the pending alerts left by the last merge
pub fn reset(config_path: Option<PathBuf>) -> Result<()> {
    let config = config::load(&config::resolve_path(config_path))?;
    let pending = &config.data.new_tools_file;

    if state::clear_pending(pending)? {
        println!("Pending alerts cleared: {}", pending.display());
        println!("Next 'toolscout alert' will compare against the last commit.");
    } else {
        println!("No pending alerts file: {}", pending.display());
        println!("Nothing to reset.");
    }

    Ok(())
}
