//! Frontend Models
//!
//! Data structures shown in the list.

use serde::{Deserialize, Serialize};

/// A list entry. Identity is its position in the list at render time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub name: String,
}

impl Item {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// The row awaiting delete confirmation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingDeletion {
    pub index: usize,
}

/// Items shown when the page supplies none
pub fn default_items() -> Vec<Item> {
    ["Dale", "Jitu", "Monty", "Joseph", "Luke"]
        .into_iter()
        .map(Item::new)
        .collect()
}
