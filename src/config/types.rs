use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Toolscout configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Catalog and handoff file locations
    pub data: DataPaths,

    /// Product Hunt GraphQL scraper
    pub producthunt: ProductHunt,

    /// GitHub Trending HTML scraper
    pub github: GithubTrending,

    /// Email alerts for newly discovered tools
    pub email: Email,

    /// Auto-commit of the refreshed catalog
    pub git: GitPublish,

    /// Web chat server
    pub server: Server,

    /// Chat behaviour
    pub chat: Chat,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DataPaths {
    /// Consolidated tool list
    pub tools_csv: PathBuf,

    /// Seed list used when the catalog is empty
    pub sample_csv: PathBuf,

    /// Tools found by merge, waiting for the alert step
    pub new_tools_file: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProductHunt {
    pub api_url: String,

    /// Environment variable holding the API token
    pub api_key_env: String,

    /// Number of posts requested per run
    pub limit: usize,

    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GithubTrending {
    pub url: String,

    pub user_agent: String,

    /// Maximum repository rows inspected
    pub limit: usize,

    pub timeout_secs: u64,

    /// Pause after fetching, in milliseconds
    pub delay_ms: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Email {
    pub smtp_host: String,
    pub smtp_port: u16,
    pub user_env: String,
    pub password_env: String,
    pub recipient_env: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GitPublish {
    /// Commit the catalog after each alert run
    pub commit: bool,

    /// Push the commit to `remote`
    pub push: bool,

    pub remote: String,

    /// Environment variable naming the commit author (CI actor)
    pub actor_env: String,

    /// Environment variable holding a token for HTTPS pushes
    pub token_env: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Server {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Chat {
    /// Query Product Hunt live before falling back to the CSV catalog
    pub live_producthunt: bool,

    /// Timeout for the live lookup, kept short for interactive use
    pub live_timeout_secs: u64,

    /// Messages kept in the server-side chat log
    pub max_history: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data: DataPaths::default(),
            producthunt: ProductHunt::default(),
            github: GithubTrending::default(),
            email: Email::default(),
            git: GitPublish::default(),
            server: Server::default(),
            chat: Chat::default(),
        }
    }
}

impl Default for DataPaths {
    fn default() -> Self {
        Self {
            tools_csv: PathBuf::from("data/tools.csv"),
            sample_csv: PathBuf::from("data/sample_ai_tools.csv"),
            new_tools_file: PathBuf::from("data/new_tools.json"),
        }
    }
}

impl Default for ProductHunt {
    fn default() -> Self {
        Self {
            api_url: "https://api.producthunt.com/v2/api/graphql".to_string(),
            api_key_env: "PRODUCTHUNT_API_KEY".to_string(),
            limit: 50,
            timeout_secs: 30,
        }
    }
}

impl Default for GithubTrending {
    fn default() -> Self {
        Self {
            url: "https://github.com/trending".to_string(),
            user_agent: "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36".to_string(),
            limit: 25,
            timeout_secs: 30,
            delay_ms: 1000,
        }
    }
}

impl Default for Email {
    fn default() -> Self {
        Self {
            smtp_host: "smtp.gmail.com".to_string(),
            smtp_port: 587,
            user_env: "SMTP_USER".to_string(),
            password_env: "SMTP_PASS".to_string(),
            recipient_env: "EMAIL_TO".to_string(),
        }
    }
}

impl Default for GitPublish {
    fn default() -> Self {
        Self {
            commit: true,
            push: true,
            remote: "origin".to_string(),
            actor_env: "GITHUB_ACTOR".to_string(),
            token_env: "GITHUB_TOKEN".to_string(),
        }
    }
}

impl Default for Server {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8501,
        }
    }
}

impl Default for Chat {
    fn default() -> Self {
        Self {
            live_producthunt: true,
            live_timeout_secs: 10,
            max_history: 200,
        }
    }
}

/// Read a non-empty environment variable
fn env_value(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

impl ProductHunt {
    /// API token from the configured environment variable
    pub fn api_key(&self) -> Option<String> {
        env_value(&self.api_key_env)
    }
}

impl GitPublish {
    /// CI actor used as commit author
    pub fn actor(&self) -> Option<String> {
        env_value(&self.actor_env)
    }

    /// Token for authenticated pushes
    pub fn token(&self) -> Option<String> {
        env_value(&self.token_env)
    }
}

/// SMTP credentials resolved from the environment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SmtpCredentials {
    pub user: String,
    pub password: String,
    pub recipient: String,
}

impl Email {
    /// All three of user, password and recipient, or nothing
    pub fn credentials(&self) -> Option<SmtpCredentials> {
        Some(SmtpCredentials {
            user: env_value(&self.user_env)?,
            password: env_value(&self.password_env)?,
            recipient: env_value(&self.recipient_env)?,
        })
    }
}
