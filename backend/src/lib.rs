//! AIClinic Backend
//!
//! Symptom-triage chat service: a small rule layer (language detection,
//! emergency red flags, symptom guidelines) in front of a language model.

pub mod config;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod services;
pub mod utils;

#[cfg(test)]
mod tests;

use std::sync::Arc;

use axum::{
    Router,
    http::HeaderValue,
    routing::{get, post},
};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::config::CorsConfig;
use crate::services::llm::ChatModel;
use crate::services::triage::TriageOrchestrator;

rust_i18n::i18n!("locales", fallback = "en");

/// Shared, read-only state for all requests
pub struct AppState {
    pub orchestrator: TriageOrchestrator<Arc<dyn ChatModel>>,
}

#[derive(OpenApi)]
#[openapi(
    info(title = "AIClinic Backend", version = "0.1.0"),
    paths(handlers::chat::chat, handlers::health::health),
    components(schemas(
        models::ChatRequest,
        models::ChatResponse,
        models::HealthResponse,
        services::triage::GuidelineInfo,
        services::triage::SymptomCategory,
        services::triage::UrgencyLevel,
    )),
    tags(
        (name = "Chat", description = "Symptom triage"),
        (name = "System", description = "Service health"),
    )
)]
pub struct ApiDoc;

/// Build the CORS layer; an empty origin list, or one containing `*`,
/// allows any origin.
pub fn cors_layer(config: &CorsConfig) -> CorsLayer {
    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);

    if config.allowed_origins.is_empty() || config.allowed_origins.iter().any(|o| o == "*") {
        return layer.allow_origin(Any);
    }

    let origins: Vec<HeaderValue> = config
        .allowed_origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!("Ignoring invalid CORS origin '{}': {}", origin, e);
                None
            },
        })
        .collect();

    layer.allow_origin(AllowOrigin::list(origins))
}

pub fn build_router(state: Arc<AppState>, cors: &CorsConfig) -> Router {
    Router::new()
        .route("/health", get(handlers::health::health))
        .route("/api/chat", post(handlers::chat::chat))
        .with_state(state)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(axum::middleware::from_fn(middleware::locale_middleware))
        .layer(cors_layer(cors))
        .layer(TraceLayer::new_for_http())
}
