//! Book configuration.

use crate::book::ContactBook;
use crate::error::CoreResult;
use rolodex_store::JsonFileStore;
use std::path::{Path, PathBuf};

/// Configuration for opening a file-backed contact book.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path to the contact table file.
    pub table_path: PathBuf,

    /// Whether to create missing parent directories of the table file.
    pub create_dirs: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            table_path: PathBuf::from("contacts.json"),
            create_dirs: false,
        }
    }
}

impl Config {
    /// Creates a configuration for the given table path.
    #[must_use]
    pub fn new(table_path: impl AsRef<Path>) -> Self {
        Self {
            table_path: table_path.as_ref().to_path_buf(),
            ..Self::default()
        }
    }

    /// Sets whether to create missing parent directories.
    #[must_use]
    pub fn create_dirs(mut self, value: bool) -> Self {
        self.create_dirs = value;
        self
    }

    /// Opens a contact book over the configured table file.
    ///
    /// # Errors
    ///
    /// Returns an error if the table file cannot be opened or parsed.
    pub fn open(&self) -> CoreResult<ContactBook> {
        let store = if self.create_dirs {
            JsonFileStore::open_with_create_dirs(&self.table_path)?
        } else {
            JsonFileStore::open(&self.table_path)?
        };
        ContactBook::open(Box::new(store))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn default_config() {
        let config = Config::default();
        assert_eq!(config.table_path, PathBuf::from("contacts.json"));
        assert!(!config.create_dirs);
    }

    #[test]
    fn open_file_backed_book() {
        let dir = tempdir().unwrap();
        let config = Config::new(dir.path().join("contacts.json"));

        let mut book = config.open().unwrap();
        book.insert("Ada", "555-0100", "ada@example.org").unwrap();

        let reopened = config.open().unwrap();
        assert_eq!(reopened.len(), 1);
    }

    #[test]
    fn open_with_create_dirs() {
        let dir = tempdir().unwrap();
        let config = Config::new(dir.path().join("deep").join("contacts.json")).create_dirs(true);

        let mut book = config.open().unwrap();
        book.insert("Ada", "555-0100", "ada@example.org").unwrap();
        assert!(config.table_path.exists());
    }
}
