//! Web chat server
//!
//! Serves the single-page chat UI and a small JSON API over the catalog.

mod handlers;

use axum::{
    response::Html,
    routing::{get, post},
    Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::sync::RwLock;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::chat::{ChatEngine, History};
use crate::config::Config;
use crate::error::{Result, ToolscoutError};

const CHAT_PAGE: &str = include_str!("chat.html");

/// Shared state passed to every handler
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub engine: Arc<ChatEngine>,
    pub history: Arc<RwLock<History>>,
}

impl AppState {
    pub fn new(config: Config, engine: ChatEngine) -> Self {
        let history = History::new(config.chat.max_history);
        Self {
            config: Arc::new(config),
            engine: Arc::new(engine),
            history: Arc::new(RwLock::new(history)),
        }
    }
}

/// Build the router
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(|| async { Html(CHAT_PAGE) }))
        .route("/health", get(handlers::health))
        .route("/api/categories", get(handlers::categories))
        .route("/api/tools", get(handlers::list_tools))
        .route("/api/chat", post(handlers::chat))
        .route("/api/history", get(handlers::history))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

/// Bind and serve until the process is stopped
pub async fn run(config: Config) -> Result<()> {
    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port)
        .parse()
        .map_err(|e| {
            ToolscoutError::Config(format!(
                "Invalid server address {}:{}: {}",
                config.server.host, config.server.port, e
            ))
        })?;

    let engine = ChatEngine::new(config.clone())?;
    let app = router(AppState::new(config, engine));

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| ToolscoutError::Server(format!("Failed to bind to {}: {}", addr, e)))?;

    info!("Chat UI listening on http://{}", addr);
    println!("Chat UI available at http://{}", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| ToolscoutError::Server(format!("Server error: {}", e)))?;

    Ok(())
}
