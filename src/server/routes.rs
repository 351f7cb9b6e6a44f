//! HTTP route handlers for the guide API.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use tower_http::services::ServeDir;

use crate::session::{Message, SessionError, SessionId};

use super::state::AppState;

/// Create the API router with all routes.
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/api/topics", get(list_topics))
        .route("/api/session", post(create_session))
        .route("/api/session/{id}", get(get_session).delete(delete_session))
        .route("/api/session/{id}/reset", post(reset_session))
        .route("/api/ask", post(ask))
        .fallback_service(ServeDir::new("static"))
        .with_state(state)
}

/// Map a session error to an HTTP error response.
fn session_error(err: &SessionError) -> (StatusCode, String) {
    match err {
        SessionError::NotFound(_) => (StatusCode::NOT_FOUND, err.to_string()),
    }
}

/// Health check endpoint.
async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "service": "giza-guide",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// One preset button: a topic label plus the question the button sends.
#[derive(Debug, Serialize)]
pub struct TopicDto {
    /// Topic label shown on the button.
    pub label: String,
    /// Question text injected into the chat when clicked.
    pub question: String,
}

/// Preset-button listing response.
#[derive(Debug, Serialize)]
pub struct TopicsResponse {
    /// All topics in match-priority order.
    pub topics: Vec<TopicDto>,
    /// Number of topics.
    pub count: usize,
}

/// List the preset topic buttons.
async fn list_topics(State(state): State<Arc<AppState>>) -> Json<TopicsResponse> {
    let topics: Vec<TopicDto> = state
        .responder
        .base()
        .topics()
        .iter()
        .map(|t| TopicDto {
            label: t.label.clone(),
            question: t.button_question(),
        })
        .collect();
    let count = topics.len();

    Json(TopicsResponse { topics, count })
}

/// A session id together with its conversation log.
#[derive(Debug, Serialize)]
pub struct SessionResponse {
    /// Session identifier.
    pub session_id: SessionId,
    /// Full conversation log, oldest first.
    pub log: Vec<Message>,
}

/// Create a new conversation session, seeded with the guide's greeting.
async fn create_session(State(state): State<Arc<AppState>>) -> Json<SessionResponse> {
    let (session_id, log) = state.sessions.create();
    tracing::info!("Created session {session_id}");

    Json(SessionResponse { session_id, log })
}

/// Fetch a session's conversation log.
async fn get_session(
    State(state): State<Arc<AppState>>,
    Path(id): Path<SessionId>,
) -> Result<Json<SessionResponse>, (StatusCode, String)> {
    let log = state.sessions.log(id).map_err(|e| session_error(&e))?;

    Ok(Json(SessionResponse {
        session_id: id,
        log,
    }))
}

/// Empty a session's conversation log (the clear-history control).
async fn reset_session(
    State(state): State<Arc<AppState>>,
    Path(id): Path<SessionId>,
) -> Result<StatusCode, (StatusCode, String)> {
    state.sessions.reset(id).map_err(|e| session_error(&e))?;
    tracing::info!("Reset session {id}");

    Ok(StatusCode::NO_CONTENT)
}

/// Drop a session entirely.
async fn delete_session(
    State(state): State<Arc<AppState>>,
    Path(id): Path<SessionId>,
) -> Result<StatusCode, (StatusCode, String)> {
    if state.sessions.remove(id) {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(session_error(&SessionError::NotFound(id)))
    }
}

/// Question request.
#[derive(Debug, Deserialize)]
pub struct AskRequest {
    /// Session to record the exchange in.
    pub session_id: SessionId,
    /// The user's free-text question.
    pub question: String,
}

/// Question response.
#[derive(Debug, Serialize)]
pub struct AskResponse {
    /// Session the exchange was recorded in.
    pub session_id: SessionId,
    /// The guide's answer (the fallback string when nothing matched).
    pub answer: String,
    /// Label of the matched topic, if any keyword matched.
    pub topic: Option<String>,
    /// Full conversation log after this exchange, oldest first.
    pub log: Vec<Message>,
}

/// Answer a question and record the exchange on the session log.
async fn ask(
    State(state): State<Arc<AppState>>,
    Json(request): Json<AskRequest>,
) -> Result<Json<AskResponse>, (StatusCode, String)> {
    let topic = state.responder.lookup(&request.question);
    let label = topic.map(|t| t.label.clone());
    let answer = state.responder.answer(&request.question).to_string();

    if label.is_none() {
        tracing::debug!("No keyword matched: {:?}", request.question);
    }

    state
        .sessions
        .record_exchange(request.session_id, &request.question, &answer)
        .map_err(|e| session_error(&e))?;

    // Pacing only; the lookup itself is instantaneous
    let delay = state.config.response_delay();
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }

    let log = state
        .sessions
        .log(request.session_id)
        .map_err(|e| session_error(&e))?;

    Ok(Json(AskResponse {
        session_id: request.session_id,
        answer,
        topic: label,
        log,
    }))
}
