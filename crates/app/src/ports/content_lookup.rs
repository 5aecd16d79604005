//! Content lookup port — the capability the participant supplies.

use std::future::Future;
use std::sync::Arc;

use syncpart_domain::content::Content;
use syncpart_domain::error::SyncPartError;
use syncpart_domain::id::EntityIdentifier;

/// Single-method capability resolving an identifier to its current content.
///
/// `Ok(None)` means "no entity with this identifier exists" and is a normal
/// outcome, distinct from an empty payload. A call may block for an arbitrary
/// duration; timeouts and cancellation belong to the host, not to
/// implementors or callers of this trait.
///
/// Two equivalent ways to supply the capability to the HTTP layer:
/// implement this trait directly on a concrete type, or wrap an existing
/// object in a [`ContentLookupDelegator`]. Both are observably identical to
/// an HTTP client.
pub trait ContentLookup {
    /// Resolve `identifier` to its current content, or `None` if unknown.
    fn retrieve_content(
        &self,
        identifier: &EntityIdentifier,
    ) -> impl Future<Output = Result<Option<Content>, SyncPartError>> + Send;
}

impl<L: ContentLookup> ContentLookup for Arc<L> {
    fn retrieve_content(
        &self,
        identifier: &EntityIdentifier,
    ) -> impl Future<Output = Result<Option<Content>, SyncPartError>> + Send {
        (**self).retrieve_content(identifier)
    }
}

impl<L: ContentLookup> ContentLookup for &L {
    fn retrieve_content(
        &self,
        identifier: &EntityIdentifier,
    ) -> impl Future<Output = Result<Option<Content>, SyncPartError>> + Send {
        (**self).retrieve_content(identifier)
    }
}

/// Forwarding adapter around an existing lookup object.
///
/// Forwards every call unchanged — no caching, no retries, no transformation
/// of the identifier or the returned content. Wrap a type here when its
/// ownership structure cannot absorb a direct [`ContentLookup`]
/// implementation where the HTTP layer needs one.
pub struct ContentLookupDelegator<H> {
    handler: H,
}

impl<H> ContentLookupDelegator<H> {
    /// Wrap `handler`, delegating every lookup to it.
    pub fn new(handler: H) -> Self {
        Self { handler }
    }

    /// Give back the wrapped handler.
    pub fn into_inner(self) -> H {
        self.handler
    }
}

impl<H: ContentLookup> ContentLookup for ContentLookupDelegator<H> {
    fn retrieve_content(
        &self,
        identifier: &EntityIdentifier,
    ) -> impl Future<Output = Result<Option<Content>, SyncPartError>> + Send {
        self.handler.retrieve_content(identifier)
    }
}
