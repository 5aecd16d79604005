//! Plain-text API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod content;

use axum::Router;
use axum::routing::get;

use syncpart_app::ports::ContentLookup;

use crate::state::AppState;

/// Build the content-retrieval sub-router.
///
/// `GET` is the only method routed; everything else on `/content` receives
/// the router's 405 Method Not Allowed.
pub fn routes<L>() -> Router<AppState<L>>
where
    L: ContentLookup + Send + Sync + 'static,
{
    Router::new().route("/content", get(content::retrieve::<L>))
}
