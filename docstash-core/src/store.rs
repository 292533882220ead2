//! The document manager: the public entry point for saving and finding documents.
//!
//! # Example
//!
//! ```ignore
//! use docstash::{memory::InMemoryStore, store::DocumentManager};
//!
//! let manager = DocumentManager::new(InMemoryStore::new());
//! let saved = manager.save(document)?;
//! let found = manager.find_by_id(saved.id().unwrap())?;
//! ```

use tracing::{debug, instrument};

use crate::{
    backend::StoreBackend,
    document::Document,
    error::DocumentStoreResult,
    id::{IdGenerator, SecureIdGenerator},
    query::SearchRequest,
};

/// Saves, searches and looks up documents held by a backend.
///
/// The manager assigns identifiers to documents saved without one; everything else is
/// delegated to the backend.
#[derive(Debug)]
pub struct DocumentManager<B: StoreBackend> {
    backend: B,
    id_generator: Box<dyn IdGenerator>,
}

impl<B: StoreBackend> DocumentManager<B> {
    /// Creates a manager over `backend` that generates identifiers with [`SecureIdGenerator`].
    pub fn new(backend: B) -> Self {
        Self::builder(backend).build()
    }

    /// Creates a builder for a manager over `backend`.
    pub fn builder(backend: B) -> DocumentManagerBuilder<B> {
        DocumentManagerBuilder::new(backend)
    }

    /// Returns the underlying backend.
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Inserts or replaces a document and returns it with its identifier set.
    ///
    /// A document without an identifier receives a freshly generated one that no stored
    /// document uses yet. A document that already has one keeps it unchanged, and replaces
    /// any stored document with the same identifier. The `created` timestamp is never touched.
    ///
    /// # Errors
    ///
    /// Returns any error reported by the backend.
    #[instrument(skip(self, document))]
    pub fn save(&self, mut document: Document) -> DocumentStoreResult<Document> {
        if document.id.is_none() {
            let id = self.unused_id()?;
            debug!(doc_id = %id, "Assigned generated id");
            document.id = Some(id);
        }

        self.backend.upsert_document(document.clone())?;

        Ok(document)
    }

    // Generated ids must never replace an unrelated stored document.
    fn unused_id(&self) -> DocumentStoreResult<String> {
        loop {
            let id = self.id_generator.make_id();

            if self.backend.get_document(&id)?.is_none() {
                return Ok(id);
            }

            debug!(doc_id = %id, "Generated id already in use, retrying");
        }
    }

    /// Returns every stored document matching `request`, in insertion order.
    #[instrument(skip(self, request))]
    pub fn search(&self, request: &SearchRequest) -> DocumentStoreResult<Vec<Document>> {
        let documents = self.backend.query_documents(request)?;
        debug!(matched = documents.len(), "Search finished");

        Ok(documents)
    }

    /// Returns the document with the given identifier, or `None` if there is none.
    #[instrument(skip(self))]
    pub fn find_by_id(&self, id: &str) -> DocumentStoreResult<Option<Document>> {
        self.backend.get_document(id)
    }

    /// Returns the number of stored documents.
    pub fn len(&self) -> DocumentStoreResult<usize> {
        self.backend.count_documents()
    }

    /// Returns `true` if nothing has been stored yet.
    pub fn is_empty(&self) -> DocumentStoreResult<bool> {
        Ok(self.len()? == 0)
    }
}

/// Builder for [`DocumentManager`].
#[derive(Debug)]
pub struct DocumentManagerBuilder<B: StoreBackend> {
    backend: B,
    id_generator: Option<Box<dyn IdGenerator>>,
}

impl<B: StoreBackend> DocumentManagerBuilder<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            id_generator: None,
        }
    }

    /// Replaces the default [`SecureIdGenerator`].
    pub fn id_generator(mut self, generator: impl IdGenerator + 'static) -> Self {
        self.id_generator = Some(Box::new(generator));
        self
    }

    pub fn build(self) -> DocumentManager<B> {
        DocumentManager {
            backend: self.backend,
            id_generator: self
                .id_generator
                .unwrap_or_else(|| Box::new(SecureIdGenerator)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{document::Author, id::ID_LENGTH};
    use std::sync::{
        Mutex,
        atomic::{AtomicUsize, Ordering},
    };

    // Append-only backend that records what the manager hands it.
    #[derive(Debug, Default)]
    struct RecordingBackend {
        documents: Mutex<Vec<Document>>,
    }

    impl StoreBackend for RecordingBackend {
        fn upsert_document(&self, document: Document) -> DocumentStoreResult<()> {
            self.documents.lock().unwrap().push(document);
            Ok(())
        }

        fn query_documents(&self, _request: &SearchRequest) -> DocumentStoreResult<Vec<Document>> {
            Ok(self.documents.lock().unwrap().clone())
        }

        fn get_document(&self, id: &str) -> DocumentStoreResult<Option<Document>> {
            Ok(self
                .documents
                .lock()
                .unwrap()
                .iter()
                .find(|doc| doc.id() == Some(id))
                .cloned())
        }

        fn count_documents(&self) -> DocumentStoreResult<usize> {
            Ok(self.documents.lock().unwrap().len())
        }
    }

    #[derive(Debug, Default)]
    struct CountingIds(AtomicUsize);

    impl IdGenerator for CountingIds {
        fn make_id(&self) -> String {
            format!("doc-{}", self.0.fetch_add(1, Ordering::SeqCst))
        }
    }

    fn draft(title: &str) -> Document {
        Document::builder()
            .title(title)
            .author(Author::new("a1", "Alice"))
            .build()
    }

    #[test]
    fn save_generates_missing_id() {
        let manager = DocumentManager::new(RecordingBackend::default());

        let saved = manager.save(draft("Alpha")).unwrap();

        assert_eq!(saved.id().map(str::len), Some(ID_LENGTH));
        assert_eq!(manager.backend().documents.lock().unwrap()[0], saved);
    }

    #[test]
    fn save_keeps_existing_id_and_created() {
        let manager = DocumentManager::new(RecordingBackend::default());
        let doc = draft("Alpha").with_id("fixed");

        let saved = manager.save(doc.clone()).unwrap();

        assert_eq!(saved.id(), Some("fixed"));
        assert_eq!(saved.created, doc.created);
    }

    #[test]
    fn save_keeps_empty_id_as_given() {
        let manager = DocumentManager::new(RecordingBackend::default());

        let saved = manager.save(draft("Alpha").with_id("")).unwrap();

        assert_eq!(saved.id(), Some(""));
        assert_eq!(manager.find_by_id("").unwrap(), Some(saved));
    }

    #[test]
    fn generated_id_skips_ids_already_stored() {
        let manager = DocumentManager::builder(RecordingBackend::default())
            .id_generator(CountingIds::default())
            .build();
        manager.save(draft("Taken").with_id("doc-0")).unwrap();
        manager.save(draft("Also taken").with_id("doc-1")).unwrap();

        let saved = manager.save(draft("Fresh")).unwrap();

        assert_eq!(saved.id(), Some("doc-2"));
        assert_eq!(manager.len().unwrap(), 3);
        assert_eq!(manager.find_by_id("doc-0").unwrap().unwrap().title, "Taken");
    }

    #[test]
    fn builder_uses_custom_generator() {
        let manager = DocumentManager::builder(RecordingBackend::default())
            .id_generator(CountingIds::default())
            .build();

        let first = manager.save(draft("Alpha")).unwrap();
        let second = manager.save(draft("Beta")).unwrap();

        assert_eq!(first.id(), Some("doc-0"));
        assert_eq!(second.id(), Some("doc-1"));
        assert_eq!(manager.len().unwrap(), 2);
        assert_eq!(manager.find_by_id("doc-1").unwrap(), Some(second));
    }

    #[test]
    fn works_over_a_borrowed_backend() {
        let backend = RecordingBackend::default();
        let manager = DocumentManager::new(&backend);

        manager.save(draft("Alpha")).unwrap();

        assert_eq!(backend.count_documents().unwrap(), 1);
    }
}
