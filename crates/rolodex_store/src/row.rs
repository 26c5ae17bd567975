//! The contact row record type.

use serde::{Deserialize, Serialize};

/// One row of the persisted contact table.
///
/// A row carries the three columns of the flat table: `name` (the key),
/// `phone`, and `email`. Phone and email are free-form strings; the store
/// applies no validation to either.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ContactRow {
    /// The contact name. Unique within a table; uniqueness is the caller's
    /// responsibility.
    #[serde(rename = "Name")]
    pub name: String,
    /// Free-form phone number.
    #[serde(rename = "Phone")]
    pub phone: String,
    /// Free-form email address.
    #[serde(rename = "Email")]
    pub email: String,
}

impl ContactRow {
    /// Creates a new row.
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

    /// Overwrites the supplied fields, leaving absent or empty ones
    /// unchanged.
    pub(crate) fn apply(&mut self, phone: Option<&str>, email: Option<&str>) {
        if let Some(phone) = phone.filter(|p| !p.is_empty()) {
            self.phone = phone.to_string();
        }
        if let Some(email) = email.filter(|e| !e.is_empty()) {
            self.email = email.to_string();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_json_columns() {
        let row = ContactRow::new("Ada", "555-0100", "ada@example.org");
        let json = serde_json::to_string(&row).unwrap();
        assert!(json.contains("\"Name\":\"Ada\""));
        assert!(json.contains("\"Phone\":\"555-0100\""));
        assert!(json.contains("\"Email\":\"ada@example.org\""));
    }

    #[test]
    fn apply_partial() {
        let mut row = ContactRow::new("Ada", "555-0100", "ada@example.org");

        row.apply(Some("555-0199"), None);
        assert_eq!(row.phone, "555-0199");
        assert_eq!(row.email, "ada@example.org");

        row.apply(None, Some("ada@example.net"));
        assert_eq!(row.phone, "555-0199");
        assert_eq!(row.email, "ada@example.net");
    }

    #[test]
    fn apply_empty_is_unchanged() {
        let mut row = ContactRow::new("Ada", "555-0100", "ada@example.org");

        row.apply(Some(""), Some(""));
        assert_eq!(row.phone, "555-0100");
        assert_eq!(row.email, "ada@example.org");
    }
}
