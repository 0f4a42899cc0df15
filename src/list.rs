//! List Controller
//!
//! Ordered items plus the single pending-deletion slot.

use reactive_stores::Store;
use thiserror::Error;

use crate::models::{Item, PendingDeletion};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ListError {
    #[error("confirm_delete called with no pending deletion")]
    NoPendingDeletion,
    #[error("pending index {index} is out of range for {len} items")]
    IndexOutOfRange { index: usize, len: usize },
}

#[derive(Clone, Debug, Default, PartialEq, Store)]
pub struct ListController {
    pub items: Vec<Item>,
    pub pending_deletion: Option<PendingDeletion>,
}

impl ListController {
    pub fn new(items: Vec<Item>) -> Self {
        Self {
            items,
            pending_deletion: None,
        }
    }

    /// Last request wins
    pub fn request_delete(&mut self, index: usize) {
        self.pending_deletion = Some(PendingDeletion { index });
    }

    pub fn cancel_delete(&mut self) {
        self.pending_deletion = None;
    }

    /// The pending selection, if it can be confirmed
    pub fn pending_target(&self) -> Result<PendingDeletion, ListError> {
        let pending = self.pending_deletion.ok_or(ListError::NoPendingDeletion)?;
        if pending.index >= self.items.len() {
            return Err(ListError::IndexOutOfRange {
                index: pending.index,
                len: self.items.len(),
            });
        }
        Ok(pending)
    }

    /// Moves the pending item to the tail of the list and clears the selection.
    pub fn confirm_delete(&mut self) -> Result<Item, ListError> {
        let pending = self.pending_target()?;
        let moved = relocate_to_tail(&mut self.items, pending.index)?;
        self.pending_deletion = None;
        Ok(moved)
    }
}

/// Removes `items[index]` and appends it; the list length never changes.
pub fn relocate_to_tail(items: &mut Vec<Item>, index: usize) -> Result<Item, ListError> {
    if index >= items.len() {
        return Err(ListError::IndexOutOfRange {
            index,
            len: items.len(),
        });
    }
    let item = items.remove(index);
    items.push(item.clone());
    Ok(item)
}
