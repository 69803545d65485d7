//! HTTP handlers for the chat API

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::{debug, info, warn};

use super::AppState;
use crate::catalog;
use crate::chat::{self, ChatMessage, Role};
use crate::error::ToolscoutError;
use crate::models::Tool;

/// Query parameters for tool listing
#[derive(Debug, Default, Deserialize)]
pub struct ToolsQuery {
    pub category: Option<String>,
    pub q: Option<String>,
}

/// Chat request body
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub message: String,
    /// Sidebar selection; `all` or missing means no preference
    #[serde(default)]
    pub category: Option<String>,
}

/// Tool as shown by the UI
#[derive(Debug, Serialize)]
pub struct ToolView {
    pub name: String,
    pub description: String,
    pub category: String,
    pub launched: String,
    pub source: String,
    pub url: Option<String>,
}

impl From<&Tool> for ToolView {
    fn from(tool: &Tool) -> Self {
        Self {
            name: tool.name.clone(),
            description: tool.description.clone(),
            category: tool.display_category().to_string(),
            launched: tool
                .launch_day()
                .map(|d| d.format("%Y-%m-%d").to_string())
                .unwrap_or_else(|| tool.launch_date.clone()),
            source: tool.source.clone(),
            url: (!tool.url.trim().is_empty()).then(|| tool.url.clone()),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub category: Option<String>,
    pub summary: String,
    pub reply: String,
    pub tools: Vec<ToolView>,
}

pub enum ApiError {
    EmptyMessage,
    Internal(String),
}

impl From<ToolscoutError> for ApiError {
    fn from(e: ToolscoutError) -> Self {
        ApiError::Internal(e.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::EmptyMessage => (
                StatusCode::BAD_REQUEST,
                "Message must not be empty".to_string(),
            ),
            ApiError::Internal(msg) => {
                warn!(error = %msg, "Request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, msg)
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

/// GET /health
pub async fn health() -> &'static str {
    "ok"
}

/// GET /api/categories
pub async fn categories() -> Json<Vec<&'static str>> {
    Json(chat::CATEGORIES.to_vec())
}

/// GET /api/tools?category=&q=
pub async fn list_tools(
    State(state): State<AppState>,
    Query(params): Query<ToolsQuery>,
) -> Result<Json<Vec<ToolView>>, ApiError> {
    let tools =
        catalog::load_with_fallback(&state.config.data.tools_csv, &state.config.data.sample_csv)?;
    let query = catalog::Query::new(params.category, params.q.as_deref());

    let found = catalog::search(&tools, &query);
    Ok(Json(found.iter().map(ToolView::from).collect()))
}

/// POST /api/chat
///
/// Answers the message and records both sides in the shared history.
pub async fn chat(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, ApiError> {
    let message = request.message.trim();
    if message.is_empty() {
        return Err(ApiError::EmptyMessage);
    }

    let answer = state
        .engine
        .answer(message, request.category.as_deref())
        .await?;
    info!(
        category = answer.category.as_deref().unwrap_or("all"),
        results = answer.tools.len(),
        "Answered chat message"
    );

    {
        let mut history = state.history.write().await;
        history.push(Role::User, message);
        history.push(Role::Assistant, answer.reply.clone());
        debug!(messages = history.len(), "Chat history updated");
    }

    Ok(Json(ChatResponse {
        category: answer.category,
        summary: answer.summary,
        reply: answer.reply,
        tools: answer.tools.iter().map(ToolView::from).collect(),
    }))
}

/// GET /api/history
pub async fn history(State(state): State<AppState>) -> Json<Vec<ChatMessage>> {
    Json(state.history.read().await.messages())
}
