//! The contact record type.

use rolodex_store::ContactRow;
use std::fmt;

/// A single contact record.
///
/// The name is the sort and search key and is immutable once the contact
/// is in a tree; phone and email are free-form and may be rewritten in
/// place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contact {
    /// The contact name, unique within an index.
    pub name: String,
    /// Free-form phone number.
    pub phone: String,
    /// Free-form email address.
    pub email: String,
}

impl Contact {
    /// Creates a new contact.
    pub fn new(
        name: impl Into<String>,
        phone: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            phone: phone.into(),
            email: email.into(),
        }
    }

    /// Converts this contact to its persisted row form.
    #[must_use]
    pub fn to_row(&self) -> ContactRow {
        ContactRow::new(&self.name, &self.phone, &self.email)
    }
}

impl From<ContactRow> for Contact {
    fn from(row: ContactRow) -> Self {
        Self {
            name: row.name,
            phone: row.phone,
            email: row.email,
        }
    }
}

impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Name: {}, Phone: {}, Email: {}",
            self.name, self.phone, self.email
        )
    }
}
