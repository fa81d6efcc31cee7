//! # API REST
//!
//! REST API implementation for the healthbot.
//!
//! Handles:
//! - HTTP endpoints with axum
//! - OpenAPI/Swagger documentation
//! - REST-specific concerns (JSON serialization, CORS, status codes)
//!
//! Uses `api-shared` for request/response types and `healthbot-core` for everything else.

#![warn(rust_2018_idioms)]

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::{delete, get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;
use uuid::Uuid;

use api_shared::dto;
use api_shared::HealthService;
use healthbot_core::{
    ChatError, ChatService, ConversationEntry, Language, SessionStore, EMPTY_QUESTION_WARNING,
};

/// Application state shared across REST API handlers
///
/// Holds the chat service and the live sessions. Both are cheap to clone: the
/// chat service shares its translator and the session store sits behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    chat: ChatService,
    sessions: Arc<SessionStore>,
}

impl AppState {
    pub fn new(chat: ChatService, sessions: SessionStore) -> Self {
        Self {
            chat,
            sessions: Arc::new(sessions),
        }
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        health,
        list_topics,
        list_languages,
        ask,
        create_session,
        delete_session,
        session_ask,
        session_history,
    ),
    components(schemas(
        dto::HealthRes,
        dto::TopicSummary,
        dto::ListTopicsRes,
        dto::LanguageInfo,
        dto::ListLanguagesRes,
        dto::AskReq,
        dto::AskRes,
        dto::CreateSessionRes,
        dto::HistoryEntry,
        dto::SessionAskRes,
        dto::HistoryRes,
        Language,
    ))
)]
pub struct ApiDoc;

/// Build the REST router over `state`.
///
/// Serves the JSON endpoints, the OpenAPI document at `/api-docs/openapi.json`
/// and Swagger UI at `/swagger-ui`.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/topics", get(list_topics))
        .route("/languages", get(list_languages))
        .route("/ask", post(ask))
        .route("/sessions", post(create_session))
        .route("/sessions/:id", delete(delete_session))
        .route("/sessions/:id/ask", post(session_ask))
        .route("/sessions/:id/history", get(session_history))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Health check response", body = dto::HealthRes)
    )
)]
/// Health check endpoint for the REST API
///
/// Used for monitoring and load balancer health checks.
#[axum::debug_handler]
async fn health(State(_state): State<AppState>) -> Json<dto::HealthRes> {
    Json(HealthService::check_health())
}

#[utoipa::path(
    get,
    path = "/topics",
    responses(
        (status = 200, description = "Topics the chatbot can answer about", body = dto::ListTopicsRes)
    )
)]
#[axum::debug_handler]
async fn list_topics(State(state): State<AppState>) -> Json<dto::ListTopicsRes> {
    let topics = state
        .chat
        .knowledge_base()
        .topics()
        .iter()
        .map(|t| dto::TopicSummary {
            name: t.name.to_string(),
            about: t.about.to_string(),
        })
        .collect();
    Json(dto::ListTopicsRes { topics })
}

#[utoipa::path(
    get,
    path = "/languages",
    responses(
        (status = 200, description = "Supported reply languages", body = dto::ListLanguagesRes)
    )
)]
#[axum::debug_handler]
async fn list_languages() -> Json<dto::ListLanguagesRes> {
    let languages = Language::ALL
        .into_iter()
        .map(|code| dto::LanguageInfo {
            code,
            name: code.display_name().to_string(),
        })
        .collect();
    Json(dto::ListLanguagesRes { languages })
}

#[utoipa::path(
    post,
    path = "/ask",
    request_body = dto::AskReq,
    responses(
        (status = 200, description = "Chatbot reply", body = dto::AskRes),
        (status = 400, description = "Empty or over-long question"),
        (status = 422, description = "Unsupported language code")
    )
)]
/// Answer a single question without recording it in any session.
///
/// Translation failures are not errors: the reply then carries the English
/// text prefixed with `(Translation failed)`.
#[axum::debug_handler]
async fn ask(
    State(state): State<AppState>,
    Json(req): Json<dto::AskReq>,
) -> Result<Json<dto::AskRes>, (StatusCode, &'static str)> {
    match state.chat.ask(&req.question, req.language).await {
        Ok(reply) => Ok(Json(dto::AskRes {
            reply,
            language: req.language,
        })),
        Err(e) => Err(error_response(&e)),
    }
}

#[utoipa::path(
    post,
    path = "/sessions",
    responses(
        (status = 201, description = "Session created", body = dto::CreateSessionRes),
        (status = 503, description = "Session limit reached")
    )
)]
#[axum::debug_handler]
async fn create_session(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<dto::CreateSessionRes>), (StatusCode, &'static str)> {
    let id = state.sessions.create().map_err(|e| error_response(&e))?;
    tracing::info!("session {} started", id);
    Ok((
        StatusCode::CREATED,
        Json(dto::CreateSessionRes {
            session_id: id.to_string(),
        }),
    ))
}

#[utoipa::path(
    delete,
    path = "/sessions/{id}",
    params(
        ("id" = String, Path, description = "Session id returned by POST /sessions")
    ),
    responses(
        (status = 204, description = "Session ended and its history dropped"),
        (status = 400, description = "Invalid session id"),
        (status = 404, description = "Session not found")
    )
)]
/// End a session, freeing its slot in the session store.
#[axum::debug_handler]
async fn delete_session(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, (StatusCode, &'static str)> {
    let session_id = parse_session_id(&id)?;

    if state.sessions.remove(session_id) {
        tracing::info!("session {} ended", session_id);
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err((StatusCode::NOT_FOUND, "Session not found"))
    }
}

#[utoipa::path(
    post,
    path = "/sessions/{id}/ask",
    request_body = dto::AskReq,
    params(
        ("id" = String, Path, description = "Session id returned by POST /sessions")
    ),
    responses(
        (status = 200, description = "Reply and updated history", body = dto::SessionAskRes),
        (status = 400, description = "Bad request"),
        (status = 404, description = "Session not found"),
        (status = 422, description = "Unsupported language code")
    )
)]
/// Ask a question within a session.
///
/// On success the question and the reply are appended to the session history,
/// which is returned in full.
#[axum::debug_handler]
async fn session_ask(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<dto::AskReq>,
) -> Result<Json<dto::SessionAskRes>, (StatusCode, &'static str)> {
    let session_id = parse_session_id(&id)?;

    let reply = state
        .chat
        .ask_in_session(&state.sessions, session_id, &req.question, req.language)
        .await
        .map_err(|e| error_response(&e))?;

    let history = state
        .sessions
        .history(session_id)
        .ok_or((StatusCode::NOT_FOUND, "Session not found"))?;

    Ok(Json(dto::SessionAskRes {
        reply,
        language: req.language,
        history: to_history_entries(&history),
    }))
}

#[utoipa::path(
    get,
    path = "/sessions/{id}/history",
    params(
        ("id" = String, Path, description = "Session id returned by POST /sessions")
    ),
    responses(
        (status = 200, description = "Conversation history, oldest first", body = dto::HistoryRes),
        (status = 400, description = "Invalid session id"),
        (status = 404, description = "Session not found")
    )
)]
#[axum::debug_handler]
async fn session_history(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<dto::HistoryRes>, (StatusCode, &'static str)> {
    let session_id = parse_session_id(&id)?;

    match state.sessions.history(session_id) {
        Some(history) => Ok(Json(dto::HistoryRes {
            session_id: session_id.to_string(),
            entries: to_history_entries(&history),
        })),
        None => Err((StatusCode::NOT_FOUND, "Session not found")),
    }
}

fn parse_session_id(id: &str) -> Result<Uuid, (StatusCode, &'static str)> {
    Uuid::parse_str(id).map_err(|e| {
        tracing::warn!("Invalid session id {:?}: {}", id, e);
        (StatusCode::BAD_REQUEST, "Invalid session id")
    })
}

fn to_history_entries(history: &[ConversationEntry]) -> Vec<dto::HistoryEntry> {
    history
        .iter()
        .map(|entry| dto::HistoryEntry {
            speaker: entry.speaker.label().to_string(),
            message: entry.message.clone(),
        })
        .collect()
}

fn error_response(e: &ChatError) -> (StatusCode, &'static str) {
    match e {
        ChatError::EmptyQuestion => (StatusCode::BAD_REQUEST, EMPTY_QUESTION_WARNING),
        ChatError::QuestionTooLong { .. } => (StatusCode::BAD_REQUEST, "Question is too long"),
        ChatError::InvalidInput(_) => (StatusCode::BAD_REQUEST, "Invalid input"),
        ChatError::SessionNotFound(_) => (StatusCode::NOT_FOUND, "Session not found"),
        ChatError::SessionLimitReached { .. } => {
            tracing::warn!("Chat error: {}", e);
            (StatusCode::SERVICE_UNAVAILABLE, "Session limit reached")
        }
        ChatError::Translation(_) => {
            tracing::error!("Chat error: {:?}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Internal error")
        }
    }
}
