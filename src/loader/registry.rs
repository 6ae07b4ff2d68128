use indexmap::IndexMap;
use std::sync::{Arc, RwLock};

/// Runtime handle exposed by a successfully installed charting backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LibraryHandle {
    pub id: String,
    pub version: String,
    /// Size of the fetched source in bytes.
    pub source_len: usize,
}

/// Shared namespace that installed backends publish their handles into.
///
/// A transport-level success that leaves no handle here is treated as a
/// verification failure by the loader. Entries keep insertion order for
/// diagnostics.
#[derive(Debug, Clone, Default)]
pub struct HandleRegistry {
    inner: Arc<RwLock<IndexMap<String, LibraryHandle>>>,
}

impl HandleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Publish a handle, replacing any previous entry for the same id.
    pub fn register(&self, handle: LibraryHandle) {
        self.inner.write().unwrap().insert(handle.id.clone(), handle);
    }

    pub fn get(&self, id: &str) -> Option<LibraryHandle> {
        self.inner.read().unwrap().get(id).cloned()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.inner.read().unwrap().contains_key(id)
    }

    /// Registered library ids, in installation order.
    pub fn registered_ids(&self) -> Vec<String> {
        self.inner.read().unwrap().keys().cloned().collect()
    }
}
