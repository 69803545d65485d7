use std::path::PathBuf;

use crate::config;
use crate::error::Result;
use crate::server;

/// Start the web chat UI
pub async fn run(config_path: Option<PathBuf>, host: Option<String>, port: Option<u16>) -> Result<()> {
    let mut config = config::load(&config::resolve_path(config_path))?;
    if let Some(host) = host {
        config.server.host = host;
    }
    if let Some(port) = port {
        config.server.port = port;
    }

    server::run(config).await
}
