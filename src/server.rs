//! HTTP server wiring for the validation service

use crate::matcher::TemplateMatcher;
use crate::routes;
use crate::samples::SampleStore;
use crate::translator::Translator;
use anyhow::Result;
use axum::Router;
use std::sync::Arc;
use std::time::Instant;
use tower_http::trace::TraceLayer;
use tracing::info;

/// Application state shared across handlers
///
/// The matcher is pure and the collaborators hold no mutable state, so a
/// plain `Arc` suffices - no locking required for concurrent requests.
pub struct AppState {
    pub matcher: TemplateMatcher,
    pub translator: Translator,
    pub samples: SampleStore,
    pub start_time: Instant,
}

impl AppState {
    pub fn new(matcher: TemplateMatcher, translator: Translator, samples: SampleStore) -> Self {
        Self {
            matcher,
            translator,
            samples,
            start_time: Instant::now(),
        }
    }
}

/// Build the application router
///
/// Exposed separately from [`run`] so tests can drive the router directly
/// without binding a socket.
pub fn app(state: Arc<AppState>) -> Router {
    Router::new()
        .merge(routes::translate_routes())
        .merge(routes::sample_routes())
        .merge(routes::health_routes())
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

/// Run the HTTP server until shutdown
pub async fn run(state: AppState, addr: &str) -> Result<()> {
    let state = Arc::new(state);
    let router = app(state);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Listening on http://{}", listener.local_addr()?);

    axum::serve(listener, router).await?;
    Ok(())
}
