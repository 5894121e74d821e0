//! Handle to DID resolution.
use crate::error::Error;
use crate::handle_store::DynHandleStore;

/// Response body served when no mapping exists for the requested handle.
pub const FALLBACK_BODY: &str = "Why are you here?";

/// Resolves handles against an injected [`HandleStore`][crate::handle_store::HandleStore].
#[derive(Clone)]
pub struct Resolver {
    store: DynHandleStore,
}

impl Resolver {
    #[must_use]
    pub fn new(store: DynHandleStore) -> Self {
        Self { store }
    }

    /// Look `handle` up with a single store query and return the DID of the first matching
    /// mapping, if any.
    ///
    /// # Errors
    ///
    /// Returns whatever error the store produced. Lookups are not retried.
    pub async fn resolve(&self, handle: &str) -> Result<Option<String>, Error> {
        let mappings = self.store.lookup(handle).await?;
        Ok(mappings.into_iter().next().map(|m| m.did))
    }
}
