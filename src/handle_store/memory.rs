use crate::error::Error;
use crate::handle_store::{HandleMapping, HandleStore};
use serde::{Deserialize, Serialize};

#[derive(Default, Debug, Clone, Serialize, Deserialize)]
pub struct InMemoryHandleStore {
    mappings: Vec<HandleMapping>,
}

impl InMemoryHandleStore {
    #[must_use]
    pub fn new(mappings: Vec<HandleMapping>) -> Self {
        Self { mappings }
    }

    pub(crate) fn matching(&self, handle: &str) -> Vec<HandleMapping> {
        self.mappings
            .iter()
            .filter(|m| m.handle == handle)
            .cloned()
            .collect()
    }
}

#[async_trait::async_trait]
impl HandleStore for InMemoryHandleStore {
    async fn lookup(&self, handle: &str) -> Result<Vec<HandleMapping>, Error> {
        Ok(self.matching(handle))
    }
}
