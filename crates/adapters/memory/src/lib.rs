//! # syncpart-adapter-memory
//!
//! In-memory implementation of the [`ContentLookup`] port.
//!
//! Serves as the reference collaborator for the daemon and for tests:
//! a mutable map of identifier → content behind a mutex, answering lookups
//! without IO. Integrators replace this with whatever owns their real data.

use std::collections::HashMap;
use std::future::Future;
use std::sync::{Mutex, PoisonError};

use syncpart_app::ports::ContentLookup;
use syncpart_domain::content::Content;
use syncpart_domain::error::SyncPartError;
use syncpart_domain::id::EntityIdentifier;

/// Mutable in-memory content store.
///
/// Interior mutability keeps the store usable behind the shared references
/// the HTTP layer hands out. Every critical section is a single map
/// operation; poisoned locks are recovered rather than propagated.
#[derive(Debug, Default)]
pub struct InMemoryContentStore {
    entries: Mutex<HashMap<EntityIdentifier, Content>>,
}

impl InMemoryContentStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated from an iterator of entries.
    pub fn from_entries(entries: impl IntoIterator<Item = (EntityIdentifier, Content)>) -> Self {
        Self {
            entries: Mutex::new(entries.into_iter().collect()),
        }
    }

    /// Insert or replace the content for `identifier`.
    pub fn insert(&self, identifier: EntityIdentifier, content: Content) {
        self.lock().insert(identifier, content);
    }

    /// Remove the entry for `identifier`, returning its content if present.
    pub fn remove(&self, identifier: &EntityIdentifier) -> Option<Content> {
        self.lock().remove(identifier)
    }

    /// Number of stored entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Whether the store holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<EntityIdentifier, Content>> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl ContentLookup for InMemoryContentStore {
    fn retrieve_content(
        &self,
        identifier: &EntityIdentifier,
    ) -> impl Future<Output = Result<Option<Content>, SyncPartError>> + Send {
        let result = self.lock().get(identifier).cloned();
        async move { Ok(result) }
    }
}
