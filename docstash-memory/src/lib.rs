//! In-memory document storage backend for docstash.
//!
//! This crate provides a thread-safe, in-memory implementation of the `StoreBackend` trait.
//! Documents are held in a copy-on-write vector, so searches read an immutable snapshot and
//! never observe a half-applied save.
//!
//! # Quick Start
//!
//! ```ignore
//! use docstash::{prelude::*, memory::InMemoryStore};
//!
//! let manager = DocumentManager::new(InMemoryStore::builder().build()?);
//!
//! let saved = manager.save(
//!     Document::builder()
//!         .title("Alpha Report")
//!         .author(Author::new("a1", "Alice"))
//!         .build(),
//! )?;
//!
//! assert_eq!(manager.find_by_id(saved.id().unwrap())?, Some(saved));
//! ```

pub mod store;
pub mod evaluator;

pub use store::{InMemoryStore, InMemoryStoreBuilder};
