use thiserror::Error;

/// Toolscout error types
#[derive(Error, Debug)]
pub enum ToolscoutError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Catalog error: {0}")]
    Catalog(String),

    #[error("Scraper error: {0}")]
    Scraper(String),

    #[error("Alert error: {0}")]
    Alert(String),

    #[error("Server error: {0}")]
    Server(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Git error: {0}")]
    Git(#[from] git2::Error),

    #[error("TOML parsing error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("SMTP error: {0}")]
    Smtp(#[from] lettre::transport::smtp::Error),

    #[error("Email error: {0}")]
    Email(#[from] lettre::error::Error),

    #[error("Email address error: {0}")]
    Address(#[from] lettre::address::AddressError),
}

/// Result type for toolscout operations
pub type Result<T> = std::result::Result<T, ToolscoutError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_config() {
        let err = ToolscoutError::Config("bad port".to_string());
        assert_eq!(err.to_string(), "Configuration error: bad port");
    }

    #[test]
    fn test_error_display_catalog() {
        let err = ToolscoutError::Catalog("missing file".to_string());
        assert_eq!(err.to_string(), "Catalog error: missing file");
    }

    #[test]
    fn test_error_display_scraper() {
        let err = ToolscoutError::Scraper("HTTP 503".to_string());
        assert_eq!(err.to_string(), "Scraper error: HTTP 503");
    }

    #[test]
    fn test_error_from_io() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: ToolscoutError = io.into();
        assert!(err.to_string().starts_with("IO error:"));
    }
}
