//! In-memory record store for testing.

use crate::error::StoreResult;
use crate::row::ContactRow;
use crate::store::RecordStore;

/// An in-memory record store.
///
/// This store keeps all rows in memory and is suitable for:
/// - Unit tests
/// - Integration tests
/// - Ephemeral address books that don't need persistence
///
/// # Example
///
/// ```rust
/// use rolodex_store::{ContactRow, MemoryStore, RecordStore};
///
/// let mut store = MemoryStore::new();
/// store.append(&ContactRow::new("Ada", "555-0100", "ada@example.org")).unwrap();
/// assert_eq!(store.load_all().unwrap().len(), 1);
/// ```
#[derive(Debug, Default)]
pub struct MemoryStore {
    rows: Vec<ContactRow>,
}

impl MemoryStore {
    /// Creates a new empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an in-memory store with pre-existing rows.
    ///
    /// Useful for testing rebuild scenarios.
    #[must_use]
    pub fn with_rows(rows: Vec<ContactRow>) -> Self {
        Self { rows }
    }

    /// Returns the number of rows in the table.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if the table has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl RecordStore for MemoryStore {
    fn append(&mut self, row: &ContactRow) -> StoreResult<()> {
        self.rows.push(row.clone());
        Ok(())
    }

    fn update_row(
        &mut self,
        name: &str,
        phone: Option<&str>,
        email: Option<&str>,
    ) -> StoreResult<()> {
        if let Some(row) = self.rows.iter_mut().find(|r| r.name == name) {
            row.apply(phone, email);
        }
        Ok(())
    }

    fn remove_row(&mut self, name: &str) -> StoreResult<()> {
        self.rows.retain(|r| r.name != name);
        Ok(())
    }

    fn load_all(&self) -> StoreResult<Vec<ContactRow>> {
        Ok(self.rows.clone())
    }
}
