//! Storage backend abstraction for the document manager.
//!
//! The [`StoreBackend`] trait is the seam between [`DocumentManager`](crate::store::DocumentManager),
//! which owns identifier assignment, and the container that actually holds documents.
//! Backends never generate identifiers: every document they receive already has one.
//!
//! # Thread Safety
//!
//! Implementations must be `Send + Sync`. A reader running concurrently with a writer must see
//! either the state before the write or the state after it, never a mix of both.

use std::fmt::Debug;

use crate::{document::Document, error::DocumentStoreResult, query::SearchRequest};

/// Abstract interface for document storage backends.
pub trait StoreBackend: Send + Sync + Debug {
    /// Stores a document that already carries an identifier.
    ///
    /// If a document with the same identifier is stored, it is replaced in place and keeps its
    /// position in iteration order. Otherwise the document is appended.
    fn upsert_document(&self, document: Document) -> DocumentStoreResult<()>;

    /// Returns every stored document matching the request, in insertion order.
    ///
    /// An unconstrained request returns every stored document.
    fn query_documents(&self, request: &SearchRequest) -> DocumentStoreResult<Vec<Document>>;

    /// Returns the first stored document with the given identifier, or `None`.
    fn get_document(&self, id: &str) -> DocumentStoreResult<Option<Document>>;

    /// Returns the number of stored documents.
    fn count_documents(&self) -> DocumentStoreResult<usize>;
}

impl<B> StoreBackend for &B
where
    B: StoreBackend,
{
    fn upsert_document(&self, document: Document) -> DocumentStoreResult<()> {
        (*self).upsert_document(document)
    }

    fn query_documents(&self, request: &SearchRequest) -> DocumentStoreResult<Vec<Document>> {
        (*self).query_documents(request)
    }

    fn get_document(&self, id: &str) -> DocumentStoreResult<Option<Document>> {
        (*self).get_document(id)
    }

    fn count_documents(&self) -> DocumentStoreResult<usize> {
        (*self).count_documents()
    }
}

/// Factory for backend instances.
pub trait StoreBackendBuilder {
    type Backend: StoreBackend;

    fn build(self) -> DocumentStoreResult<Self::Backend>;
}
