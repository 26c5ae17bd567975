//! The contact book: tree index plus durable store.

use crate::contact::Contact;
use crate::error::{CoreError, CoreResult};
use crate::tree::ContactTree;
use rolodex_store::RecordStore;
use tracing::{debug, warn};

/// An address book backed by a [`ContactTree`] index and a durable
/// [`RecordStore`].
///
/// The book enforces the synchronization contract: after every completed
/// operation the store contains exactly one row per indexed name, with
/// that contact's current phone and email. To keep the two in lockstep,
/// every mutation writes the store first and touches the tree only once
/// the write has succeeded - a store failure aborts the operation with
/// the index unchanged.
///
/// Operations are synchronous and run one at a time; the store's
/// read-modify-write cycle assumes a single writer.
pub struct ContactBook {
    tree: ContactTree,
    store: Box<dyn RecordStore>,
}

impl ContactBook {
    /// Opens a book over the given store, rebuilding the index from the
    /// persisted table.
    ///
    /// Rows with a name that is already indexed are skipped with a
    /// warning; the first occurrence wins.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read.
    pub fn open(store: Box<dyn RecordStore>) -> CoreResult<Self> {
        let rows = store.load_all()?;
        let mut tree = ContactTree::new();
        for row in rows {
            let name = row.name.clone();
            if !tree.insert(Contact::from(row)) {
                warn!("skipping duplicate row for {name} while rebuilding index");
            }
        }
        debug!("rebuilt index with {} contacts", tree.len());
        Ok(Self { tree, store })
    }

    /// Inserts a new contact.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::DuplicateKey`] if the name is already
    /// indexed (nothing is written), or [`CoreError::Store`] if the
    /// append fails (the index is left unchanged).
    pub fn insert(&mut self, name: &str, phone: &str, email: &str) -> CoreResult<()> {
        if self.tree.contains(name) {
            return Err(CoreError::duplicate_key(name));
        }
        let contact = Contact::new(name, phone, email);
        self.store.append(&contact.to_row())?;
        // Cannot collide: uniqueness was checked above.
        self.tree.insert(contact);
        debug!("added contact {name}");
        Ok(())
    }

    /// Looks up a contact by name.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::NotFound`] if no contact has that name.
    pub fn find(&self, name: &str) -> CoreResult<&Contact> {
        self.tree.get(name).ok_or_else(|| CoreError::not_found(name))
    }

    /// Updates a contact's phone and/or email. An absent or empty
    /// argument leaves that field unchanged; the name itself is
    /// immutable.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::NotFound`] if no contact has that name
    /// (nothing is written), or [`CoreError::Store`] if the row update
    /// fails (the index is left unchanged).
    pub fn update(
        &mut self,
        name: &str,
        phone: Option<&str>,
        email: Option<&str>,
    ) -> CoreResult<()> {
        // Empty strings count as "not supplied".
        let phone = phone.filter(|p| !p.is_empty());
        let email = email.filter(|e| !e.is_empty());
        let Some(contact) = self.tree.get_mut(name) else {
            return Err(CoreError::not_found(name));
        };
        self.store.update_row(name, phone, email)?;
        if let Some(phone) = phone {
            contact.phone = phone.to_string();
        }
        if let Some(email) = email {
            contact.email = email.to_string();
        }
        debug!("updated contact {name}");
        Ok(())
    }

    /// Removes a contact by name.
    ///
    /// Removing an absent name leaves the tree and the store unchanged;
    /// the [`CoreError::NotFound`] result is informational.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::NotFound`] if no contact has that name, or
    /// [`CoreError::Store`] if the row removal fails (the index is left
    /// unchanged).
    pub fn remove(&mut self, name: &str) -> CoreResult<()> {
        if !self.tree.contains(name) {
            return Err(CoreError::not_found(name));
        }
        self.store.remove_row(name)?;
        self.tree.remove(name);
        debug!("removed contact {name}");
        Ok(())
    }

    /// Returns the contacts in ascending name order.
    #[must_use]
    pub fn contacts(&self) -> Vec<&Contact> {
        self.tree.contacts()
    }

    /// Returns the number of contacts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tree.len()
    }

    /// Returns true if the book has no contacts.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    /// Returns the current store row set, for display or parity checks.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read.
    pub fn rows(&self) -> CoreResult<Vec<rolodex_store::ContactRow>> {
        Ok(self.store.load_all()?)
    }
}

impl std::fmt::Debug for ContactBook {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContactBook")
            .field("len", &self.len())
            .finish_non_exhaustive()
    }
}
