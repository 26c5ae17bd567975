//! Integration tests for a file-backed contact book.

use rolodex_core::{Config, CoreError};
use tempfile::tempdir;

#[test]
fn end_to_end_insert_list_delete() {
    let dir = tempdir().unwrap();
    let config = Config::new(dir.path().join("contacts.json"));
    let mut book = config.open().unwrap();

    book.insert("Bob", "111", "b@x").unwrap();
    book.insert("Alice", "222", "a@x").unwrap();
    book.insert("Carl", "333", "c@x").unwrap();

    let names: Vec<_> = book.contacts().iter().map(|c| c.name.clone()).collect();
    assert_eq!(names, vec!["Alice", "Bob", "Carl"]);

    book.remove("Bob").unwrap();
    let names: Vec<_> = book.contacts().iter().map(|c| c.name.clone()).collect();
    assert_eq!(names, vec!["Alice", "Carl"]);
    assert!(matches!(book.find("Bob"), Err(CoreError::NotFound { .. })));
}

#[test]
fn contacts_survive_reopen() {
    let dir = tempdir().unwrap();
    let config = Config::new(dir.path().join("contacts.json"));

    {
        let mut book = config.open().unwrap();
        book.insert("Ada", "555-0100", "ada@example.org").unwrap();
        book.insert("Bob", "555-0101", "bob@example.org").unwrap();
        book.update("Ada", Some("555-0199"), None).unwrap();
    }

    let book = config.open().unwrap();
    assert_eq!(book.len(), 2);
    let ada = book.find("Ada").unwrap();
    assert_eq!(ada.phone, "555-0199");
    assert_eq!(ada.email, "ada@example.org");
}

#[test]
fn delete_survives_reopen() {
    let dir = tempdir().unwrap();
    let config = Config::new(dir.path().join("contacts.json"));

    {
        let mut book = config.open().unwrap();
        book.insert("Ada", "555-0100", "ada@example.org").unwrap();
        book.insert("Bob", "555-0101", "bob@example.org").unwrap();
        book.remove("Ada").unwrap();
    }

    let book = config.open().unwrap();
    assert_eq!(book.len(), 1);
    assert!(matches!(book.find("Ada"), Err(CoreError::NotFound { .. })));
    assert!(book.find("Bob").is_ok());
}

#[test]
fn malformed_table_surfaces_store_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("contacts.json");
    std::fs::write(&path, b"not a table").unwrap();

    let result = Config::new(&path).open();
    assert!(matches!(result, Err(CoreError::Store(_))));
}
