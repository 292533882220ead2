//! Error types and result types for document store operations.
//!
//! Lookups that find nothing are not errors: they return `Ok(None)` or an empty `Vec`.
//! Use [`DocumentStoreResult<T>`] as the return type for fallible operations.

use serde_json::Error as SerdeJsonError;
use thiserror::Error;

/// Represents all possible errors that can occur when interacting with a document store.
#[derive(Error, Debug)]
pub enum DocumentStoreError {
    /// Serialization/deserialization error when converting a document to or from JSON.
    #[error("Serialization error: {0}")]
    Serialization(String),
    /// The document is malformed and cannot be stored.
    #[error("Invalid document: {0}")]
    InvalidDocument(String),
}

/// A specialized `Result` type for document store operations.
pub type DocumentStoreResult<T> = Result<T, DocumentStoreError>;

impl From<SerdeJsonError> for DocumentStoreError {
    fn from(err: SerdeJsonError) -> Self {
        DocumentStoreError::Serialization(err.to_string())
    }
}
