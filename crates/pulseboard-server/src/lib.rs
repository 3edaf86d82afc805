#![forbid(unsafe_code)]
//! Pulseboard HTTP server: the in-memory project store behind a
//! contract-validated axum route layer, plus the served docs surface.

use axum::extract::DefaultBodyLimit;
use axum::middleware::from_fn_with_state;
use axum::routing::get;
use axum::Router;
use std::sync::atomic::AtomicU64;
use std::sync::Arc;

mod config;
mod docs;
mod http;
mod middleware;
mod store;

pub use config::ApiConfig;
pub use store::ProjectStore;

pub const CRATE_NAME: &str = "pulseboard-server";

/// Shared per-process state, injected into every handler. The store lives
/// here rather than in a global so tests can run servers in parallel.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<ProjectStore>,
    pub api: ApiConfig,
    pub request_id_seed: Arc<AtomicU64>,
}

impl AppState {
    #[must_use]
    pub fn new(store: Arc<ProjectStore>) -> Self {
        Self::with_config(store, ApiConfig::default())
    }

    #[must_use]
    pub fn with_config(store: Arc<ProjectStore>, api: ApiConfig) -> Self {
        Self {
            store,
            api,
            request_id_seed: Arc::new(AtomicU64::new(1)),
        }
    }
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/healthz", get(http::handlers::healthz_handler))
        .route(
            "/api/projects",
            get(http::handlers::list_projects_handler)
                .post(http::handlers::create_project_handler),
        )
        .route(
            "/api/projects/:id",
            get(http::handlers::get_project_handler)
                .patch(http::handlers::update_project_handler)
                .delete(http::handlers::delete_project_handler),
        )
        .route("/docs/openapi.json", get(docs::openapi_document_handler))
        .route("/docs/index.html", get(docs::docs_index_handler))
        .layer(from_fn_with_state(
            state.clone(),
            middleware::request_tracing_middleware,
        ))
        .layer(DefaultBodyLimit::max(state.api.max_body_bytes))
        .with_state(state)
}
