//! A small in-memory document repository: the core types and traits.
//!
//! This crate is the core of the docstash project and provides:
//!
//! - **Documents** ([`document`]) - The `Document` and `Author` value types and JSON helpers
//! - **Search requests** ([`query`]) - Optional search constraints and the criteria they lower into
//! - **Identifiers** ([`id`]) - Secure random identifiers for newly saved documents
//! - **Store backend abstraction** ([`backend`]) - The trait storage containers implement
//! - **Document manager** ([`store`]) - `save`, `search` and `find_by_id`
//! - **Error handling** ([`error`]) - Error types and result types
//!
//! # Example
//!
//! ```ignore
//! use docstash::prelude::*;
//! use docstash::memory::InMemoryStore;
//!
//! let manager = DocumentManager::new(InMemoryStore::new());
//!
//! let saved = manager.save(
//!     Document::builder()
//!         .title("Alpha Report")
//!         .content("quarterly results")
//!         .author(Author::new("a1", "Alice"))
//!         .build(),
//! )?;
//!
//! let hits = manager.search(&SearchRequest::builder().author_id("a1").build())?;
//! assert_eq!(hits, vec![saved]);
//! ```

pub mod backend;
pub mod document;
pub mod error;
pub mod id;
pub mod query;
pub mod store;
