//! Record store trait definition.

use crate::error::StoreResult;
use crate::row::ContactRow;

/// A durable table of contact rows keyed by name.
///
/// Stores are **row tables**. They provide simple operations for appending,
/// updating, removing, and loading rows. The index layer owns all ordering
/// and uniqueness - stores do not understand the tree that drives them.
///
/// # Invariants
///
/// - `append` adds exactly one row; behavior is undefined if a row with the
///   same name already exists (the caller guarantees uniqueness first)
/// - `update_row` and `remove_row` are no-ops when no row matches
/// - `load_all` returns exactly the rows currently in the table
pub trait RecordStore: Send {
    /// Appends one row to the table.
    ///
    /// The caller must have verified that no row with `row.name` exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the table cannot be read or rewritten.
    fn append(&mut self, row: &ContactRow) -> StoreResult<()>;

    /// Locates the row with the given name and overwrites the supplied
    /// fields in place. An absent or empty phone or email leaves that
    /// column unchanged. Does nothing if no row matches.
    ///
    /// # Errors
    ///
    /// Returns an error if the table cannot be read or rewritten.
    fn update_row(
        &mut self,
        name: &str,
        phone: Option<&str>,
        email: Option<&str>,
    ) -> StoreResult<()>;

    /// Removes the row with the given name. Does nothing if no row matches.
    ///
    /// # Errors
    ///
    /// Returns an error if the table cannot be read or rewritten.
    fn remove_row(&mut self, name: &str) -> StoreResult<()>;

    /// Returns every row currently in the table, in stored order.
    ///
    /// # Errors
    ///
    /// Returns an error if the table cannot be read or parsed.
    fn load_all(&self) -> StoreResult<Vec<ContactRow>>;
}
