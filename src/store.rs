//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::list::{ListController, ListError};
use crate::models::Item;

/// Type alias for the store
pub type ListStore = Store<ListController>;

/// Get the list store from context
pub fn use_list_store() -> ListStore {
    expect_context::<ListStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Open the delete prompt for the row at `index`
pub fn store_request_delete(store: &ListStore, index: usize) {
    log::info!("[LIST] Delete requested for row {}", index);
    store.update(|list| list.request_delete(index));
}

/// Close the delete prompt without touching the items
pub fn store_cancel_delete(store: &ListStore) {
    log::info!("[LIST] Delete cancelled");
    store.update(ListController::cancel_delete);
}

/// Move the pending row to the tail and close the prompt
pub fn store_confirm_delete(store: &ListStore) -> Result<Item, ListError> {
    // Checked before writing so a rejected confirm notifies nobody
    let pending = store.with_untracked(ListController::pending_target)?;
    let moved = store
        .try_update(ListController::confirm_delete)
        .unwrap_or(Err(ListError::NoPendingDeletion))?;
    log::info!(
        "[LIST] Moved '{}' from row {} to the end",
        moved.name,
        pending.index
    );
    Ok(moved)
}
