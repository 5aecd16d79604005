//! Axum router assembly.

use axum::Router;
use axum::routing::get;
use tower_http::trace::TraceLayer;

use syncpart_app::ports::ContentLookup;

use crate::state::AppState;

/// Build the top-level axum [`Router`].
///
/// Merges the content-retrieval routes with a `/health` liveness route.
/// Includes a [`TraceLayer`] that logs each HTTP request/response at the
/// `DEBUG` level using the `tracing` ecosystem.
pub fn build<L>(state: AppState<L>) -> Router
where
    L: ContentLookup + Send + Sync + 'static,
{
    Router::new()
        .route("/health", get(health_check))
        .merge(crate::api::routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}
