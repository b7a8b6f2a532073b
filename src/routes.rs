//! API routes for the validation service
//!
//! Response shapes follow the original interface contract:
//! `{result, errors, valid}` for translate-and-validate, `{result: "ok"}`
//! for mutating sample operations.

use crate::samples::{self, Sample};
use crate::server::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{error, info};

type AppStateArc = Arc<AppState>;

// ============================================================================
// Translate Routes
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslateRequest {
    pub source: String,
    pub expected: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslateResponse {
    /// Generated text captured from the translator's stdout
    pub result: String,
    /// Translator stderr, surfaced verbatim
    pub errors: String,
    /// Whether the generated text matches the expected template
    pub valid: bool,
}

pub fn translate_routes() -> Router<AppStateArc> {
    Router::new().route("/translate", post(translate))
}

/// Invoke the external translator on the submitted source and validate its
/// output against the expected template
async fn translate(
    State(state): State<AppStateArc>,
    Json(req): Json<TranslateRequest>,
) -> Result<Json<TranslateResponse>, (StatusCode, String)> {
    let translated = state.translator.translate(&req.source).await.map_err(|e| {
        error!("Translator invocation failed: {e:#}");
        (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
    })?;

    let valid = state.matcher.validate(&translated.output, &req.expected);
    info!(valid, "Translate request validated");

    Ok(Json(TranslateResponse {
        result: translated.output,
        errors: translated.errors,
        valid,
    }))
}

// ============================================================================
// Sample Routes
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SampleBody {
    pub source: String,
    pub expected: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OkResponse {
    pub result: String,
}

impl OkResponse {
    fn ok() -> Self {
        Self {
            result: "ok".to_string(),
        }
    }
}

pub fn sample_routes() -> Router<AppStateArc> {
    Router::new()
        .route("/samples", get(list_samples))
        .route(
            "/samples/:name",
            get(get_sample)
                .post(save_sample)
                .put(save_sample)
                .delete(delete_sample),
        )
}

async fn list_samples(
    State(state): State<AppStateArc>,
) -> Result<Json<Vec<String>>, (StatusCode, String)> {
    let names = state.samples.list().await.map_err(|e| {
        error!("Failed to list samples: {e:#}");
        (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
    })?;
    Ok(Json(names))
}

async fn get_sample(
    State(state): State<AppStateArc>,
    Path(name): Path<String>,
) -> Result<Json<SampleBody>, (StatusCode, String)> {
    check_name(&name)?;

    let sample = state
        .samples
        .load(&name)
        .await
        .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?
        .ok_or_else(|| (StatusCode::NOT_FOUND, format!("Sample '{name}' not found")))?;

    let Sample { source, expected } = sample;
    Ok(Json(SampleBody { source, expected }))
}

async fn save_sample(
    State(state): State<AppStateArc>,
    Path(name): Path<String>,
    Json(body): Json<SampleBody>,
) -> Result<Json<OkResponse>, (StatusCode, String)> {
    check_name(&name)?;

    state
        .samples
        .save(&name, &body.source, &body.expected)
        .await
        .map_err(|e| {
            error!("Failed to save sample '{name}': {e:#}");
            (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
        })?;

    Ok(Json(OkResponse::ok()))
}

async fn delete_sample(
    State(state): State<AppStateArc>,
    Path(name): Path<String>,
) -> Result<Json<OkResponse>, (StatusCode, String)> {
    check_name(&name)?;

    let existed = state
        .samples
        .delete(&name)
        .await
        .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?;

    if !existed {
        return Err((StatusCode::NOT_FOUND, format!("Sample '{name}' not found")));
    }
    Ok(Json(OkResponse::ok()))
}

/// Reject names the store would refuse before touching the filesystem
fn check_name(name: &str) -> Result<(), (StatusCode, String)> {
    if !samples::is_valid_name(name) {
        return Err((StatusCode::BAD_REQUEST, format!("Invalid sample name: {name:?}")));
    }
    Ok(())
}

// ============================================================================
// Health Routes
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub uptime_seconds: u64,
}

pub fn health_routes() -> Router<AppStateArc> {
    Router::new().route("/health", get(health_check))
}

async fn health_check(State(state): State<AppStateArc>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: state.start_time.elapsed().as_secs(),
    })
}
