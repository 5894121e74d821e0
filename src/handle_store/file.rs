//! A JSON file-backed implementation of the [`HandleStore`][super::HandleStore] trait.
//!
//! The file holds the serialized form of an [`InMemoryHandleStore`][super::memory::InMemoryHandleStore]:
//!
//! ```json
//! { "mappings": [ { "handle": "alice.example", "did": "did:plc:abc123" } ] }
//! ```
use crate::error::Error;
use crate::handle_store::memory::InMemoryHandleStore;
use crate::handle_store::{HandleMapping, HandleStore};
use tokio::fs::File;
use tokio::io::AsyncReadExt;

/// A file-backed handle store. The file is read once when the store is created, to catch a
/// bad path or bad JSON at startup, and again on each lookup so that mappings edited on disk
/// are served without a restart. The file is never written.
#[derive(Debug, Clone)]
#[allow(clippy::module_name_repetitions)]
pub struct FileHandleStore {
    path: String,
}

impl FileHandleStore {
    /// Create a [`FileHandleStore`] for the JSON handle mappings located at the given path, or
    /// return an Error.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidJSON`] if the JSON mappings file is invalid.
    ///
    /// Returns [`Error::IO`] if the path can't be opened or read.
    pub async fn try_from_file(p: &str) -> Result<Self, Error> {
        let store = Self {
            path: p.to_string(),
        };
        store.load().await?;
        Ok(store)
    }

    async fn load(&self) -> Result<InMemoryHandleStore, Error> {
        let mut f = File::open(&self.path).await?;
        let mut buf = vec![];
        f.read_to_end(&mut buf).await?;
        Ok(serde_json::from_slice(&buf)?)
    }
}

#[async_trait::async_trait]
impl HandleStore for FileHandleStore {
    async fn lookup(&self, handle: &str) -> Result<Vec<HandleMapping>, Error> {
        Ok(self.load().await?.matching(handle))
    }
}
