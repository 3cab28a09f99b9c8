use std::sync::Arc;

use axum::{extract::DefaultBodyLimit, routing::any, Router};
use service::workshop::WorkshopRepository;
use tower_http::trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::Level;

pub mod workshop;

pub const WORKSHOP_PATH: &str = "/workshop";

/// Shared handler state.
#[derive(Clone)]
pub struct ServerState {
    pub workshops: Arc<dyn WorkshopRepository>,
}

impl ServerState {
    pub fn new(workshops: Arc<dyn WorkshopRepository>) -> Self {
        Self { workshops }
    }
}

/// Build the application router: the single workshop endpoint plus request tracing.
/// CORS preflights are not intercepted; OPTIONS reaches the handler like any other method.
pub fn build_router(state: ServerState) -> Router {
    Router::new()
        // method dispatch happens in the handler so that every non GET/POST verb,
        // HEAD included, gets the same 405 body
        .route(WORKSHOP_PATH, any(workshop::dispatch))
        // bodies are unbounded; size never turns into a 413
        .layer(DefaultBodyLimit::disable())
        .with_state(state)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
