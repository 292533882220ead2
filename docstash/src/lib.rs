//! Main docstash crate: a small in-memory document repository.
//!
//! This crate is the primary entry point for users of docstash. It re-exports the core types
//! from `docstash-core` and the in-memory backend from `docstash-memory`.
//!
//! # Features
//!
//! - **Upsert** - Save a document; it gets a secure random id if it has none
//! - **Multi-criteria search** - Title prefixes, content substrings, author ids and an
//!   exclusive creation-time window, combined with AND
//! - **Lookup by id** - An explicit `None` when nothing matches
//! - **Snapshot reads** - Searches never see a half-applied save
//!
//! # Quick Start
//!
//! ```ignore
//! use docstash::{prelude::*, memory::InMemoryStore};
//! use docstash::chrono::{Duration, Utc};
//!
//! fn main() -> DocumentStoreResult<()> {
//!     let manager = DocumentManager::new(InMemoryStore::new());
//!     let now = Utc::now();
//!
//!     let report = manager.save(
//!         Document::builder()
//!             .title("Alpha Report")
//!             .content("quarterly results")
//!             .author(Author::new("a1", "Alice"))
//!             .created(now)
//!             .build(),
//!     )?;
//!
//!     let hits = manager.search(
//!         &SearchRequest::builder()
//!             .author_id("a1")
//!             .created_from(now - Duration::hours(1))
//!             .build(),
//!     )?;
//!     assert_eq!(hits, vec![report.clone()]);
//!
//!     assert_eq!(manager.find_by_id(report.id().unwrap())?, Some(report));
//!     assert_eq!(manager.find_by_id("nonexistent")?, None);
//!
//!     Ok(())
//! }
//! ```
//!
//! # Backends
//!
//! - [`memory`] - Copy-on-write in-memory storage

pub mod prelude;

pub use docstash_core::{backend, document, error, id, query, store};

// Re-export chrono so callers build timestamps with the same version.
pub use chrono;

/// In-memory storage backend implementations.
pub mod memory {
    pub use docstash_memory::{InMemoryStore, InMemoryStoreBuilder};
}
