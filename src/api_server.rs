// Axum Form Server Module
//
// Purpose: serve the comparison form and render the infographic on submission.
// Each request builds its own roster, display order and RNG; only the builder is shared.

use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Json, Response},
    routing::{get, post},
    Form, Router,
};

use tower_http::{compression::CompressionLayer, cors::CorsLayer, trace::TraceLayer};

use std::sync::Arc;

use crate::config::InfographicConfig;
use crate::error::InfographicError;
use crate::formatters::json::JsonFormatter;
use crate::formatters::HtmlFormatter;
use crate::infographic::{HumanForm, HumanInput, InfographicBuilder};

// ============================================================================
// Application State
// ============================================================================

#[derive(Clone)]
pub struct AppState {
    pub builder: Arc<InfographicBuilder>,
}

impl AppState {
    pub fn new(config: InfographicConfig) -> anyhow::Result<Self> {
        tracing::info!("Loading dinosaur dataset...");
        let builder = InfographicBuilder::from_config(config)?;
        tracing::info!("Dataset ready ({} records)", builder.dataset().len());

        Ok(Self {
            builder: Arc::new(builder),
        })
    }

    pub fn from_builder(builder: InfographicBuilder) -> Self {
        Self {
            builder: Arc::new(builder),
        }
    }
}

// ============================================================================
// Router
// ============================================================================

pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health_check))

        // HTML form + rendered grid
        .route("/", get(form_page))
        .route("/infographic", post(submit_form))

        // JSON API
        .route("/api/infographic", post(build_infographic))

        // Middleware (applied in reverse order)
        .layer(CompressionLayer::new())
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

// ============================================================================
// Endpoint Handlers
// ============================================================================

async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

async fn form_page() -> Html<String> {
    Html(HtmlFormatter::form_page(None))
}

/// Form submission: grid on success, the form with an alert on invalid input.
async fn submit_form(State(state): State<AppState>, Form(form): Form<HumanForm>) -> Response {
    match state.builder.build_default(&form.to_input()) {
        Ok(infographic) => Html(HtmlFormatter::grid_page(&infographic.collect_tiles())).into_response(),
        Err(InfographicError::InvalidInput) => (
            StatusCode::UNPROCESSABLE_ENTITY,
            Html(HtmlFormatter::form_page(Some(
                &InfographicError::InvalidInput.to_string(),
            ))),
        )
            .into_response(),
        Err(e) => AppError::from(e).into_response(),
    }
}

async fn build_infographic(
    State(state): State<AppState>,
    Json(input): Json<HumanInput>,
) -> Result<Json<serde_json::Value>, AppError> {
    let infographic = state.builder.build_default(&input)?;
    let tiles = infographic.collect_tiles();

    let body = serde_json::to_value(JsonFormatter::grid(&tiles))
        .map_err(|e| AppError::Internal(e.to_string()))?;
    Ok(Json(body))
}

// ============================================================================
// Error Handling
// ============================================================================

#[derive(Debug)]
pub enum AppError {
    InvalidInput(String),
    Internal(String),
}

impl From<InfographicError> for AppError {
    fn from(err: InfographicError) -> Self {
        if err.is_user_error() {
            AppError::InvalidInput(err.to_string())
        } else {
            tracing::error!("Infographic build failed: {}", err);
            AppError::Internal(err.to_string())
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::InvalidInput(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg),
            AppError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        let body = Json(serde_json::json!({
            "error": message
        }));

        (status, body).into_response()
    }
}
