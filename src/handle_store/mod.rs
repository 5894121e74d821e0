//! Read-only handle to DID mapping storage.
//!
//! Supports a generic interface for looking up the [DID] a handle maps to. The mappings
//! themselves are owned by whoever administers the backing store; nothing here writes to it.
//!
//! Three implementations are provided, [`memory::InMemoryHandleStore`],
//! [`file::FileHandleStore`] and [`sqlite::SqliteHandleStore`]. The first serves a fixed list
//! of mappings given in the configuration. The second re-reads a JSON file on every lookup so
//! edits made on disk take effect without a restart. The third queries a SQLite table.
//!
//! [DID]: https://www.w3.org/TR/did-core/

use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

pub mod file;
pub mod memory;
pub mod sqlite;

#[allow(clippy::module_name_repetitions)]
pub use file::FileHandleStore;
#[allow(clippy::module_name_repetitions)]
pub use memory::InMemoryHandleStore;
#[allow(clippy::module_name_repetitions)]
pub use sqlite::SqliteHandleStore;

/// `DynHandleStore` is a type alias for a [`HandleStore`] shared between concurrent request
/// handlers. Lookups take `&self`, so no lock is needed.
#[allow(clippy::module_name_repetitions)]
pub type DynHandleStore = Arc<dyn HandleStore + Send + Sync>;

/// A single row of the handle relation.
#[derive(Serialize, Deserialize, Debug, Clone, Default, Eq, PartialEq)]
pub struct HandleMapping {
    pub handle: String,
    pub did: String,
}

impl HandleMapping {
    pub fn new(handle: impl Into<String>, did: impl Into<String>) -> Self {
        Self {
            handle: handle.into(),
            did: did.into(),
        }
    }
}

/// An async trait describing a read-only relation of [`HandleMapping`]s.
#[async_trait::async_trait]
pub trait HandleStore {
    /// Return every mapping whose handle equals `handle`, in the store's default order.
    ///
    /// An empty result is not an error.
    async fn lookup(&self, handle: &str) -> Result<Vec<HandleMapping>, Error>;
}
