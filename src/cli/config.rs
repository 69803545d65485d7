use crate::config::{self, Config};
use crate::error::Result;
use std::fs;
use std::path::PathBuf;

/// Initialize toolscout.toml configuration file
pub fn init(path: Option<PathBuf>) -> Result<()> {
    let config_path = config::resolve_path(path);

    if config_path.exists() {
        eprintln!(
            "Configuration file already exists at: {}",
            config_path.display()
        );
        eprintln!("Remove it first if you want to reinitialize.");
        return Ok(());
    }

    let config = Config::default();

    if let Some(data_dir) = config.data.tools_csv.parent() {
        if !data_dir.as_os_str().is_empty() && !data_dir.exists() {
            fs::create_dir_all(data_dir)?;
            println!("Created data directory: {}", data_dir.display());
        }
    }

    config::save(&config, &config_path)?;

    println!("Configuration file created: {}", config_path.display());
    println!("\nNext steps:");
    println!(
        "1. Export {} to enable the Product Hunt scraper",
        config.producthunt.api_key_env
    );
    println!(
        "2. Export {}, {} and {} to receive email alerts",
        config.email.user_env, config.email.password_env, config.email.recipient_env
    );
    println!("3. Run 'toolscout daily' to build your catalog");

    Ok(())
}
