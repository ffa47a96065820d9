//! HTTP API exposing locale resolution, translation lookup and diagram data.
//!
//! # Routes
//!
//! - `GET /health`                      — liveness probe
//! - `GET /api/locales`                 — supported locales and the default
//! - `GET /api/locale?path=/zh-TW/docs` — locale named by a URL path
//! - `GET /api/translate/:locale/:key`  — dotted-key lookup with fallback
//! - `GET /api/diagram/:locale`         — localized flow-diagram graph
//! - `GET /api/coverage`                — missing keys per locale

use crate::diagram::FlowDiagram;
use crate::i18n::{CoverageReport, I18nError, LocaleRegistry};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use thiserror::Error;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;

/// Shared application state for the HTTP server.
#[derive(Clone)]
pub struct AppState {
    /// Immutable registry, built once at startup.
    pub registry: &'static LocaleRegistry,
}

impl AppState {
    pub fn new(registry: &'static LocaleRegistry) -> Self {
        Self { registry }
    }
}

/// Errors returned by API handlers, rendered as `{"error": "..."}`.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    I18n(#[from] I18nError),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::I18n(I18nError::UnknownLocale(_) | I18nError::MissingKey { .. }) => {
                StatusCode::NOT_FOUND
            }
            ApiError::I18n(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

/// Build the axum router with all routes.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/api/locales", get(locales_handler))
        .route("/api/locale", get(resolve_handler))
        .route("/api/translate/:locale/:key", get(translate_handler))
        .route("/api/diagram/:locale", get(diagram_handler))
        .route("/api/coverage", get(coverage_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Serve the API on `listener` until the process is stopped.
pub async fn serve(listener: TcpListener, state: AppState) -> std::io::Result<()> {
    info!("Listening on {}", listener.local_addr()?);
    axum::serve(listener, router(state)).await
}

/// GET /health
async fn health_handler() -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

#[derive(Debug, Serialize)]
struct LocaleSummary {
    code: String,
    name: String,
    default: bool,
}

/// GET /api/locales
async fn locales_handler(State(state): State<AppState>) -> Json<Vec<LocaleSummary>> {
    let registry = state.registry;
    let locales = registry
        .list()
        .into_iter()
        .map(|locale| LocaleSummary {
            code: locale.code().to_string(),
            name: locale.native_name().to_string(),
            default: registry.is_default(locale),
        })
        .collect();
    Json(locales)
}

#[derive(Debug, Deserialize)]
struct ResolveParams {
    #[serde(default)]
    path: String,
}

/// GET /api/locale?path=...
///
/// Always succeeds: unknown or missing locales resolve to the default.
async fn resolve_handler(
    State(state): State<AppState>,
    Query(params): Query<ResolveParams>,
) -> impl IntoResponse {
    let locale = state.registry.resolve(&params.path);
    Json(json!({ "locale": locale.code() }))
}

/// GET /api/translate/:locale/:key
///
/// The value is a string, a nested section object, or the raw key when
/// neither the locale nor the default locale defines it.
async fn translate_handler(
    State(state): State<AppState>,
    Path((locale, key)): Path<(String, String)>,
) -> Result<impl IntoResponse, ApiError> {
    let t = state.registry.translator(&locale)?;
    let value = t.t(&key);
    let resolved = !value.is_key();
    Ok(Json(json!({
        "locale": locale,
        "key": key,
        "value": value,
        "resolved": resolved,
    })))
}

/// GET /api/diagram/:locale
async fn diagram_handler(
    State(state): State<AppState>,
    Path(locale): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let t = state.registry.translator(&locale)?;
    Ok(Json(FlowDiagram::localized(&t).graph()))
}

/// GET /api/coverage
async fn coverage_handler(State(state): State<AppState>) -> Json<CoverageReport> {
    Json(CoverageReport::for_registry(state.registry))
}
