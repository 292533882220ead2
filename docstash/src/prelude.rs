//! Convenient re-exports of commonly used types from docstash.
//!
//! ```ignore
//! use docstash::prelude::*;
//! ```

pub use docstash_core::{
    backend::{StoreBackend, StoreBackendBuilder},
    document::{Author, Document, DocumentBuilder, JsonExt},
    error::{DocumentStoreError, DocumentStoreResult},
    id::{IdGenerator, SecureIdGenerator},
    query::{Criterion, CriterionVisitor, SearchRequest, SearchRequestBuilder},
    store::{DocumentManager, DocumentManagerBuilder},
};
