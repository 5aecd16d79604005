//! Shared application state for axum handlers.

use std::sync::Arc;

use syncpart_app::ports::ContentLookup;
use syncpart_app::services::content_service::ContentService;

/// Application state shared across all axum handlers.
///
/// Generic over the lookup type to avoid dynamic dispatch. `Clone` is
/// implemented manually so the lookup itself does not need to be `Clone` —
/// only the `Arc` wrapper is cloned.
pub struct AppState<L> {
    /// Content retrieval service.
    pub content_service: Arc<ContentService<L>>,
}

impl<L> Clone for AppState<L> {
    fn clone(&self) -> Self {
        Self {
            content_service: Arc::clone(&self.content_service),
        }
    }
}

impl<L> AppState<L>
where
    L: ContentLookup + Send + Sync + 'static,
{
    /// Create a new application state from a service instance.
    pub fn new(content_service: ContentService<L>) -> Self {
        Self {
            content_service: Arc::new(content_service),
        }
    }

    /// Create a new application state from a pre-wrapped `Arc` service.
    ///
    /// Use this when the service needs to be shared with background tasks
    /// before constructing the HTTP state.
    pub fn from_arc(content_service: Arc<ContentService<L>>) -> Self {
        Self { content_service }
    }
}
