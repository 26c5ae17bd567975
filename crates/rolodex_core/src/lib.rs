//! # Rolodex Core
//!
//! Ordered contact index and synchronization core for Rolodex.
//!
//! This crate provides:
//! - [`ContactTree`]: an unbalanced binary search tree keyed by contact
//!   name, with insert/search/update/delete and in-order traversal
//! - [`ContactBook`]: the façade that couples the tree with a durable
//!   [`rolodex_store::RecordStore`] and keeps the two in lockstep
//! - [`Config`]: configuration for opening a file-backed book
//!
//! The tree is the sole in-memory index; the store mirrors it row for row
//! after every successful mutation, so contacts survive process restarts.

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod book;
mod config;
mod contact;
mod error;
mod tree;

pub use book::ContactBook;
pub use config::Config;
pub use contact::Contact;
pub use error::{CoreError, CoreResult};
pub use tree::{ContactTree, Iter};

/// Crate version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
