//! Configuration module
//!
//! Handles loading and saving of toolscout.toml configuration files.
//! Secrets stay in the environment; the file only names the variables.

mod types;

#[allow(unused_imports)]
pub use types::{
    Chat, Config, DataPaths, Email, GitPublish, GithubTrending, ProductHunt, Server,
    SmtpCredentials,
};

use crate::error::{Result, ToolscoutError};
use std::fs;
use std::path::{Path, PathBuf};

/// Default configuration file name
pub const DEFAULT_CONFIG_FILE: &str = "toolscout.toml";

/// Resolve an optional `--config` argument
pub fn resolve_path(path: Option<PathBuf>) -> PathBuf {
    path.unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE))
}

/// Load configuration from a TOML file
pub fn load(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path).map_err(|e| {
        ToolscoutError::Config(format!(
            "Cannot read config from '{}': {}. Run 'toolscout config init' to create one.",
            path.display(),
            e
        ))
    })?;

    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

/// Save configuration to a TOML file
pub fn save(config: &Config, path: &Path) -> Result<()> {
    let toml = toml::to_string_pretty(config)
        .map_err(|e| ToolscoutError::Config(format!("Failed to serialize config: {}", e)))?;

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    fs::write(path, toml)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_valid_config() {
        let temp = TempDir::new().unwrap();
        let config_path = temp.path().join("toolscout.toml");

        save(&Config::default(), &config_path).unwrap();

        let loaded = load(&config_path).unwrap();
        assert_eq!(loaded.producthunt.api_key_env, "PRODUCTHUNT_API_KEY");
        assert!(loaded.git.push);
    }

    #[test]
    fn test_load_missing_config() {
        let result = load(Path::new("/nonexistent/toolscout.toml"));
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("Run 'toolscout config init'"));
    }

    #[test]
    fn test_load_invalid_toml() {
        let temp = TempDir::new().unwrap();
        let config_path = temp.path().join("toolscout.toml");
        fs::write(&config_path, "[server\nport = ").unwrap();

        let err = load(&config_path).unwrap_err();
        assert!(err.to_string().starts_with("TOML parsing error"));
    }

    #[test]
    fn test_save_creates_directories() {
        let temp = TempDir::new().unwrap();
        let config_path = temp.path().join("nested/dir/toolscout.toml");

        save(&Config::default(), &config_path).unwrap();

        assert!(config_path.exists());
    }

    #[test]
    fn test_roundtrip_custom_paths() {
        let temp = TempDir::new().unwrap();
        let config_path = temp.path().join("toolscout.toml");

        let mut config = Config::default();
        config.data.tools_csv = "/srv/catalog/tools.csv".into();
        config.git.push = false;

        save(&config, &config_path).unwrap();
        let loaded = load(&config_path).unwrap();

        assert_eq!(loaded.data.tools_csv, PathBuf::from("/srv/catalog/tools.csv"));
        assert!(!loaded.git.push);
    }

    #[test]
    fn test_resolve_path_default() {
        assert_eq!(resolve_path(None), PathBuf::from("toolscout.toml"));
        assert_eq!(
            resolve_path(Some(PathBuf::from("x.toml"))),
            PathBuf::from("x.toml")
        );
    }
}
