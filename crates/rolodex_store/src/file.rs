//! File-based record store for persistent storage.

use crate::error::{StoreError, StoreResult};
use crate::row::ContactRow;
use crate::store::RecordStore;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// A file-based record store.
///
/// The table is persisted as a JSON array of rows. Every mutating call
/// reads the full table, applies the change, and rewrites the file -
/// there is no append-only log or partial update format. This
/// read-modify-write cycle assumes at most one writer at a time.
///
/// A missing file reads as an empty table; the file is created by the
/// first mutation.
///
/// # Example
///
/// ```no_run
/// use rolodex_store::{ContactRow, JsonFileStore, RecordStore};
/// use std::path::Path;
///
/// let mut store = JsonFileStore::open(Path::new("contacts.json")).unwrap();
/// store.append(&ContactRow::new("Ada", "555-0100", "ada@example.org")).unwrap();
/// ```
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Opens a file store at the given path.
    ///
    /// The file does not have to exist yet. If it does exist, it must
    /// parse as a row table.
    ///
    /// # Errors
    ///
    /// Returns an error if an existing file cannot be read or parsed.
    pub fn open(path: &Path) -> StoreResult<Self> {
        let store = Self {
            path: path.to_path_buf(),
        };
        // Surface a corrupt table at open time rather than mid-mutation.
        store.read_table()?;
        Ok(store)
    }

    /// Opens a file store, creating parent directories if needed.
    ///
    /// # Errors
    ///
    /// Returns an error if directories cannot be created or an existing
    /// file cannot be parsed.
    pub fn open_with_create_dirs(path: &Path) -> StoreResult<Self> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        Self::open(path)
    }

    /// Returns the path to the underlying table file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_table(&self) -> StoreResult<Vec<ContactRow>> {
        let data = match fs::read(&self.path) {
            Ok(data) => data,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };
        serde_json::from_slice(&data)
            .map_err(|e| StoreError::malformed(format!("{}: {e}", self.path.display())))
    }

    fn write_table(&self, rows: &[ContactRow]) -> StoreResult<()> {
        let mut data = serde_json::to_vec_pretty(rows)
            .map_err(|e| StoreError::malformed(e.to_string()))?;
        data.push(b'\n');
        fs::write(&self.path, data)?;
        Ok(())
    }
}

impl RecordStore for JsonFileStore {
    fn append(&mut self, row: &ContactRow) -> StoreResult<()> {
        let mut rows = self.read_table()?;
        rows.push(row.clone());
        self.write_table(&rows)
    }

    fn update_row(
        &mut self,
        name: &str,
        phone: Option<&str>,
        email: Option<&str>,
    ) -> StoreResult<()> {
        let mut rows = self.read_table()?;
        match rows.iter_mut().find(|r| r.name == name) {
            Some(row) => row.apply(phone, email),
            None => return Ok(()),
        }
        self.write_table(&rows)
    }

    fn remove_row(&mut self, name: &str) -> StoreResult<()> {
        let mut rows = self.read_table()?;
        let before = rows.len();
        rows.retain(|r| r.name != name);
        if rows.len() == before {
            return Ok(());
        }
        self.write_table(&rows)
    }

    fn load_all(&self) -> StoreResult<Vec<ContactRow>> {
        self.read_table()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn ada() -> ContactRow {
        ContactRow::new("Ada", "555-0100", "ada@example.org")
    }

    #[test]
    fn file_missing_reads_empty() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("contacts.json");

        let store = JsonFileStore::open(&path).unwrap();
        assert!(store.load_all().unwrap().is_empty());
        // Open alone does not create the file.
        assert!(!path.exists());
    }

    #[test]
    fn file_append_creates_table() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("contacts.json");

        let mut store = JsonFileStore::open(&path).unwrap();
        store.append(&ada()).unwrap();

        assert!(path.exists());
        assert_eq!(store.load_all().unwrap(), vec![ada()]);
    }

    #[test]
    fn file_persistence_across_reopen() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("contacts.json");

        {
            let mut store = JsonFileStore::open(&path).unwrap();
            store.append(&ada()).unwrap();
            store
                .append(&ContactRow::new("Bob", "555-0101", "bob@example.org"))
                .unwrap();
        }

        let store = JsonFileStore::open(&path).unwrap();
        let rows = store.load_all().unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].name, "Ada");
        assert_eq!(rows[1].name, "Bob");
    }

    #[test]
    fn file_update_row_partial() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("contacts.json");

        let mut store = JsonFileStore::open(&path).unwrap();
        store.append(&ada()).unwrap();
        store.update_row("Ada", None, Some("ada@example.net")).unwrap();

        let rows = store.load_all().unwrap();
        assert_eq!(rows[0].phone, "555-0100");
        assert_eq!(rows[0].email, "ada@example.net");
    }

    #[test]
    fn file_update_absent_does_not_rewrite() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("contacts.json");

        let mut store = JsonFileStore::open(&path).unwrap();
        store.update_row("Ada", Some("555-0199"), None).unwrap();
        // No matching row, nothing to write.
        assert!(!path.exists());
    }

    #[test]
    fn file_remove_row() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("contacts.json");

        let mut store = JsonFileStore::open(&path).unwrap();
        store.append(&ada()).unwrap();
        store.remove_row("Ada").unwrap();

        assert!(store.load_all().unwrap().is_empty());
    }

    #[test]
    fn file_malformed_table_fails_open() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("contacts.json");
        fs::write(&path, b"not a table").unwrap();

        let result = JsonFileStore::open(&path);
        assert!(matches!(result, Err(StoreError::Malformed { .. })));
    }

    #[test]
    fn file_create_with_dirs() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("contacts.json");

        let mut store = JsonFileStore::open_with_create_dirs(&path).unwrap();
        store.append(&ada()).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn file_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("contacts.json");

        let store = JsonFileStore::open(&path).unwrap();
        assert_eq!(store.path(), path);
    }
}
