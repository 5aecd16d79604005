//! Content service — resolve one identifier to its current content.

use syncpart_domain::content::Content;
use syncpart_domain::error::{NotFoundError, SyncPartError};
use syncpart_domain::id::EntityIdentifier;

use crate::ports::ContentLookup;

/// Application service answering "what is the current content of entity X?".
///
/// Stateless across requests: no caching of prior lookups, no shared mutable
/// state. Each call invokes the injected lookup exactly once.
pub struct ContentService<L> {
    lookup: L,
}

impl<L: ContentLookup> ContentService<L> {
    /// Create a new service backed by the given lookup capability.
    pub fn new(lookup: L) -> Self {
        Self { lookup }
    }

    /// Resolve `identifier` to its content.
    ///
    /// # Errors
    ///
    /// Returns [`SyncPartError::NotFound`] when the lookup reports the
    /// identifier as unknown, or the lookup's own failure unchanged.
    pub async fn retrieve(&self, identifier: &EntityIdentifier) -> Result<Content, SyncPartError> {
        let outcome = self.lookup.retrieve_content(identifier).await?;
        tracing::debug!(identifier = %identifier, found = outcome.is_some(), "content retrieval");
        outcome.ok_or_else(|| {
            NotFoundError {
                identifier: identifier.to_string(),
            }
            .into()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::future::Future;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use syncpart_domain::error::LookupError;

    struct InMemoryLookup {
        entries: Mutex<HashMap<String, String>>,
        calls: AtomicUsize,
    }

    impl InMemoryLookup {
        fn with_entries(entries: &[(&str, &str)]) -> Self {
            Self {
                entries: Mutex::new(
                    entries
                        .iter()
                        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
                        .collect(),
                ),
                calls: AtomicUsize::new(0),
            }
        }
    }

    impl ContentLookup for InMemoryLookup {
        fn retrieve_content(
            &self,
            identifier: &EntityIdentifier,
        ) -> impl Future<Output = Result<Option<Content>, SyncPartError>> + Send {
            self.calls.fetch_add(1, Ordering::SeqCst);
            let result = self
                .entries
                .lock()
                .unwrap()
                .get(identifier.as_str())
                .cloned()
                .map(Content::new);
            async move { Ok(result) }
        }
    }

    struct FailingLookup;

    impl ContentLookup for FailingLookup {
        fn retrieve_content(
            &self,
            _identifier: &EntityIdentifier,
        ) -> impl Future<Output = Result<Option<Content>, SyncPartError>> + Send {
            async { Err(LookupError::new("backing store unreachable").into()) }
        }
    }

    #[tokio::test]
    async fn should_return_content_when_identifier_known() {
        let svc = ContentService::new(InMemoryLookup::with_entries(&[("foo", "hello world")]));

        let content = svc
            .retrieve(&EntityIdentifier::new("foo").unwrap())
            .await
            .unwrap();

        assert_eq!(content, Content::new("hello world"));
    }

    #[tokio::test]
    async fn should_return_not_found_when_identifier_unknown() {
        let svc = ContentService::new(InMemoryLookup::with_entries(&[]));

        let result = svc.retrieve(&EntityIdentifier::new("foo").unwrap()).await;

        match result {
            Err(SyncPartError::NotFound(err)) => {
                assert_eq!(err.identifier, "foo");
            }
            other => panic!("expected not-found, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn should_invoke_lookup_exactly_once_per_retrieval() {
        let lookup = InMemoryLookup::with_entries(&[("foo", "x")]);
        let svc = ContentService::new(&lookup);

        svc.retrieve(&EntityIdentifier::new("foo").unwrap())
            .await
            .unwrap();

        assert_eq!(lookup.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn should_propagate_lookup_failure_unchanged() {
        let svc = ContentService::new(FailingLookup);

        let result = svc.retrieve(&EntityIdentifier::new("foo").unwrap()).await;

        assert!(matches!(result, Err(SyncPartError::Lookup(_))));
    }

    #[tokio::test]
    async fn should_yield_identical_results_on_repeated_retrievals() {
        let svc = ContentService::new(InMemoryLookup::with_entries(&[("foo", "stable")]));
        let identifier = EntityIdentifier::new("foo").unwrap();

        let first = svc.retrieve(&identifier).await.unwrap();
        let second = svc.retrieve(&identifier).await.unwrap();

        assert_eq!(first, second);
    }
}
