use anyhow::{Context, Result};
use axum::{
    extract::State,
    http::{HeaderValue, Method, StatusCode},
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use shared::{HealthResponse, LogRequest, LogResponse};
use std::path::Path;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;
use tracing::{debug, error, info, warn};

use crate::task_store::TaskStore;

/// State shared by all handlers
pub struct AppState {
    pub task_store: TaskStore,
}

impl AppState {
    pub fn new(task_store: TaskStore) -> Self {
        Self { task_store }
    }
}

/// Build the full application: API under `/api`, everything else served
/// from the frontend dist directory with `index.html` as the fallback so
/// deep links into the client-side router resolve.
pub fn build_router(state: Arc<AppState>, dist_dir: &Path, allowed_origin: &str) -> Result<Router> {
    let origin = allowed_origin
        .parse::<HeaderValue>()
        .with_context(|| format!("Invalid allowed origin: {}", allowed_origin))?;

    let cors = CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers(Any);

    let api_routes = Router::new()
        .route("/tasks", get(list_tasks))
        .route("/logs", post(log_message))
        .route("/health", get(health));

    let static_files = ServeDir::new(dist_dir).fallback(ServeFile::new(dist_dir.join("index.html")));

    Ok(Router::new()
        .nest("/api", api_routes)
        .fallback_service(static_files)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state))
}

/// GET /api/tasks
async fn list_tasks(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    info!("GET /api/tasks");

    match state.task_store.list_tasks().await {
        Ok(tasks) => (StatusCode::OK, Json(tasks)).into_response(),
        Err(e) => {
            error!("Error loading tasks: {:?}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Error loading tasks").into_response()
        }
    }
}

/// POST /api/logs - sink for browser log lines
async fn log_message(Json(request): Json<LogRequest>) -> Json<LogResponse> {
    let component = request.component.as_deref().unwrap_or("frontend");

    match request.level.to_lowercase().as_str() {
        "debug" => debug!(component, "{}", request.message),
        "warn" => warn!(component, "{}", request.message),
        "error" => error!(component, "{}", request.message),
        _ => info!(component, "{}", request.message),
    }

    Json(LogResponse { success: true })
}

/// GET /api/health
async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}
