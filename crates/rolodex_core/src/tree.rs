//! Unbalanced binary search tree keyed by contact name.

use crate::contact::Contact;
use std::cmp::Ordering;

/// A binary search tree of contacts, keyed by name.
///
/// For every node, all names in its left subtree compare less than the
/// node's name and all names in its right subtree compare greater, under
/// `str` ordering. Names are unique; an insert with an existing name is
/// rejected without mutation. The tree is not rebalanced, so worst-case
/// depth is O(n) for adversarial insertion order.
///
/// Each node owns its children exclusively. Deletion splices: a node with
/// at most one child is replaced by that child, and a node with two
/// children takes over its in-order successor's fields before the
/// successor is deleted from the right subtree.
///
/// The tree is a pure in-memory structure with no persistence of its own;
/// [`crate::ContactBook`] mirrors it to a record store.
#[derive(Debug, Default)]
pub struct ContactTree {
    root: Option<Box<Node>>,
    len: usize,
}

#[derive(Debug)]
struct Node {
    contact: Contact,
    left: Option<Box<Node>>,
    right: Option<Box<Node>>,
}

impl Node {
    fn new(contact: Contact) -> Box<Self> {
        Box::new(Self {
            contact,
            left: None,
            right: None,
        })
    }
}

impl ContactTree {
    /// Creates an empty tree.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of contacts in the tree.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the tree has no contacts.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Inserts a contact, keyed by its name.
    ///
    /// Returns true if the contact was inserted, false if a contact with
    /// the same name is already present (in which case nothing changes).
    pub fn insert(&mut self, contact: Contact) -> bool {
        let inserted = Self::insert_at(&mut self.root, contact);
        if inserted {
            self.len += 1;
        }
        inserted
    }

    fn insert_at(slot: &mut Option<Box<Node>>, contact: Contact) -> bool {
        match slot {
            None => {
                *slot = Some(Node::new(contact));
                true
            }
            Some(node) => match contact.name.cmp(&node.contact.name) {
                Ordering::Less => Self::insert_at(&mut node.left, contact),
                Ordering::Greater => Self::insert_at(&mut node.right, contact),
                Ordering::Equal => false,
            },
        }
    }

    /// Looks up a contact by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Contact> {
        let mut cur = self.root.as_deref();
        while let Some(node) = cur {
            match name.cmp(node.contact.name.as_str()) {
                Ordering::Less => cur = node.left.as_deref(),
                Ordering::Greater => cur = node.right.as_deref(),
                Ordering::Equal => return Some(&node.contact),
            }
        }
        None
    }

    /// Looks up a contact by name, for in-place mutation of its
    /// phone/email fields.
    ///
    /// The name field must not be changed through the returned reference;
    /// doing so would break search order.
    pub fn get_mut(&mut self, name: &str) -> Option<&mut Contact> {
        let mut cur = self.root.as_deref_mut();
        while let Some(node) = cur {
            match name.cmp(node.contact.name.as_str()) {
                Ordering::Less => cur = node.left.as_deref_mut(),
                Ordering::Greater => cur = node.right.as_deref_mut(),
                Ordering::Equal => return Some(&mut node.contact),
            }
        }
        None
    }

    /// Returns true if a contact with the given name is present.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Removes the contact with the given name.
    ///
    /// Returns true if a contact was removed, false if no contact had
    /// that name (in which case nothing changes).
    pub fn remove(&mut self, name: &str) -> bool {
        let removed = Self::remove_at(&mut self.root, name);
        if removed {
            self.len -= 1;
        }
        removed
    }

    fn remove_at(slot: &mut Option<Box<Node>>, name: &str) -> bool {
        let Some(node) = slot else { return false };
        match name.cmp(node.contact.name.as_str()) {
            Ordering::Less => Self::remove_at(&mut node.left, name),
            Ordering::Greater => Self::remove_at(&mut node.right, name),
            Ordering::Equal => {
                if node.left.is_none() {
                    let right = node.right.take();
                    *slot = right;
                } else if let Some(right) = node.right.as_deref() {
                    // Two children: take over the in-order successor's
                    // fields, then delete the successor from the right
                    // subtree. The successor has no left child, so the
                    // recursion terminates at a simpler case.
                    let successor = Self::min_node(right).contact.clone();
                    node.contact = successor;
                    let successor_name = node.contact.name.clone();
                    Self::remove_at(&mut node.right, &successor_name);
                } else {
                    let left = node.left.take();
                    *slot = left;
                }
                true
            }
        }
    }

    fn min_node(mut node: &Node) -> &Node {
        while let Some(left) = node.left.as_deref() {
            node = left;
        }
        node
    }

    /// Returns an in-order iterator over the contacts, ascending by name.
    ///
    /// Iteration never mutates the tree and can be restarted by calling
    /// `iter` again.
    #[must_use]
    pub fn iter(&self) -> Iter<'_> {
        let mut iter = Iter { stack: Vec::new() };
        iter.push_left_spine(self.root.as_deref());
        iter
    }

    /// Collects the contacts in ascending name order.
    #[must_use]
    pub fn contacts(&self) -> Vec<&Contact> {
        self.iter().collect()
    }
}

impl<'a> IntoIterator for &'a ContactTree {
    type Item = &'a Contact;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// In-order iterator over a [`ContactTree`].
#[derive(Debug)]
pub struct Iter<'a> {
    stack: Vec<&'a Node>,
}

impl<'a> Iter<'a> {
    fn push_left_spine(&mut self, mut node: Option<&'a Node>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left.as_deref();
        }
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Contact;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right.as_deref());
        Some(&node.contact)
    }
}
