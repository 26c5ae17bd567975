//! # Rolodex Store
//!
//! Durable flat-table record store for Rolodex.
//!
//! This crate defines the persistence boundary of the address book: a
//! table of contact rows keyed by name, with one row per contact. Stores
//! do not interpret ordering or enforce uniqueness - the index layer owns
//! both; a store only keeps the current row set durable.
//!
//! ## Design Principles
//!
//! - Stores are row tables (append, update, remove, load)
//! - No knowledge of the in-memory index or its tree shape
//! - Mutations rewrite the full table (single-writer assumption)
//!
//! ## Available Stores
//!
//! - [`MemoryStore`] - For testing and ephemeral address books
//! - [`JsonFileStore`] - For persistent storage using a JSON table file
//!
//! ## Example
//!
//! ```rust
//! use rolodex_store::{ContactRow, MemoryStore, RecordStore};
//!
//! let mut store = MemoryStore::new();
//! store.append(&ContactRow::new("Ada", "555-0100", "ada@example.org")).unwrap();
//! assert_eq!(store.load_all().unwrap().len(), 1);
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod error;
mod file;
mod memory;
mod row;
mod store;

pub use error::{StoreError, StoreResult};
pub use file::JsonFileStore;
pub use memory::MemoryStore;
pub use row::ContactRow;
pub use store::RecordStore;
