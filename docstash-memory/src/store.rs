//! Copy-on-write in-memory storage.
//!
//! Documents live in an `Arc<Vec<Document>>`. Readers clone the `Arc` and scan that snapshot
//! without holding any lock. Writers queue on a separate mutex, build the next vector from the
//! current snapshot with no lock on the documents held, and take the write lock only to swap
//! the new `Arc` in. A reader therefore never waits for a copy or a scan, only for a pointer swap.

use parking_lot::{Mutex, RwLock};
use std::{mem, sync::Arc};
use tracing::{debug, instrument};

use docstash_core::{
    backend::{StoreBackend, StoreBackendBuilder},
    document::Document,
    error::{DocumentStoreError, DocumentStoreResult},
    query::SearchRequest,
};

use crate::evaluator::DocumentEvaluator;

type Snapshot = Arc<Vec<Document>>;

/// Thread-safe in-memory document storage backend.
///
/// `InMemoryStore` is cloneable; clones share the same documents. Documents are kept in
/// insertion order and queries scan all of them.
///
/// # Example
///
/// ```ignore
/// use docstash_memory::InMemoryStore;
/// use docstash::backend::StoreBackend;
///
/// let store = InMemoryStore::new();
/// store.upsert_document(document.with_id("r1"))?;
///
/// assert_eq!(store.count_documents()?, 1);
/// ```
#[derive(Default, Clone, Debug)]
pub struct InMemoryStore {
    documents: Arc<RwLock<Snapshot>>,
    writer: Arc<Mutex<()>>,
}

impl InMemoryStore {
    /// Creates a new empty in-memory store.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Creates an empty store with room for `capacity` documents before reallocating.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            documents: Arc::new(RwLock::new(Arc::new(Vec::with_capacity(capacity)))),
            writer: Arc::new(Mutex::new(())),
        }
    }

    /// Creates a builder for constructing an `InMemoryStore` with custom options.
    pub fn builder() -> InMemoryStoreBuilder {
        InMemoryStoreBuilder::default()
    }

    /// Returns the documents as they are right now.
    ///
    /// The snapshot is immutable and unaffected by later writes.
    pub fn snapshot(&self) -> Snapshot {
        Arc::clone(&self.documents.read())
    }
}

impl StoreBackend for InMemoryStore {
    #[instrument(skip(self, document))]
    fn upsert_document(&self, document: Document) -> DocumentStoreResult<()> {
        let id = document
            .id()
            .map(str::to_owned)
            .ok_or_else(|| DocumentStoreError::InvalidDocument("document has no id".to_string()))?;

        let _writer = self.writer.lock();
        let current = self.snapshot();

        let mut documents = Vec::with_capacity(current.len() + 1);
        documents.extend(current.iter().cloned());

        match documents.iter().position(|doc| doc.id() == Some(id.as_str())) {
            Some(index) => {
                debug!(doc_id = %id, index, "Replacing stored document");
                documents[index] = document;
            }
            None => {
                debug!(doc_id = %id, "Appending document");
                documents.push(document);
            }
        }

        // The previous version is freed after the write lock is released.
        let previous = mem::replace(&mut *self.documents.write(), Arc::new(documents));
        drop(previous);

        Ok(())
    }

    #[instrument(skip(self, request))]
    fn query_documents(&self, request: &SearchRequest) -> DocumentStoreResult<Vec<Document>> {
        let snapshot = self.snapshot();
        debug!(count = snapshot.len(), "Scanning snapshot");

        if request.is_unconstrained() {
            return Ok(snapshot.to_vec());
        }

        Ok(DocumentEvaluator::filter_documents(snapshot.iter(), request))
    }

    #[instrument(skip(self))]
    fn get_document(&self, id: &str) -> DocumentStoreResult<Option<Document>> {
        Ok(self
            .snapshot()
            .iter()
            .find(|doc| doc.id() == Some(id))
            .cloned())
    }

    fn count_documents(&self) -> DocumentStoreResult<usize> {
        Ok(self.documents.read().len())
    }
}

/// Builder for constructing [`InMemoryStore`] instances.
///
/// # Example
///
/// ```ignore
/// use docstash_memory::InMemoryStore;
/// use docstash::backend::StoreBackendBuilder;
///
/// let store = InMemoryStore::builder().with_capacity(1_000).build()?;
/// ```
#[derive(Default, Debug)]
pub struct InMemoryStoreBuilder {
    capacity: usize,
}

impl InMemoryStoreBuilder {
    /// Reserves room for `capacity` documents up front.
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }
}

impl StoreBackendBuilder for InMemoryStoreBuilder {
    type Backend = InMemoryStore;

    /// Builds a new, empty [`InMemoryStore`]. This always succeeds.
    fn build(self) -> DocumentStoreResult<Self::Backend> {
        Ok(InMemoryStore::with_capacity(self.capacity))
    }
}
