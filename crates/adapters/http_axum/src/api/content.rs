//! Content-retrieval handler.

use axum::extract::{Query, State};
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use syncpart_app::ports::ContentLookup;
use syncpart_domain::content::Content;
use syncpart_domain::error::SyncPartError;
use syncpart_domain::id::EntityIdentifier;

use crate::error::ApiError;
use crate::state::AppState;

/// Query string of the content-retrieval endpoint.
///
/// `identifier` is the single parameter the core reads; an absent parameter
/// deserialises to `None` and is treated exactly like an empty one.
#[derive(Deserialize)]
pub struct RetrieveContentQuery {
    #[serde(default)]
    pub identifier: Option<String>,
}

/// Possible responses from the retrieve endpoint.
pub enum RetrieveResponse {
    /// The entity's current content, verbatim.
    Ok(Content),
}

impl IntoResponse for RetrieveResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(content) => content.into_string().into_response(),
        }
    }
}

/// `GET /content?identifier={identifier}`
///
/// Decision table: absent/empty identifier → 400, unknown identifier → 404,
/// known identifier → 200 with the content. The lookup capability is invoked
/// exactly once, and only when the identifier is present.
pub async fn retrieve<L>(
    State(state): State<AppState<L>>,
    Query(query): Query<RetrieveContentQuery>,
) -> Result<RetrieveResponse, ApiError>
where
    L: ContentLookup + Send + Sync + 'static,
{
    let identifier = EntityIdentifier::new(query.identifier.unwrap_or_default())
        .map_err(SyncPartError::from)?;
    let content = state.content_service.retrieve(&identifier).await?;
    Ok(RetrieveResponse::Ok(content))
}
