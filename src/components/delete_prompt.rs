//! Delete Prompt Component
//!
//! Centered confirmation panel, visible exactly while a deletion is pending.

use leptos::prelude::*;

use crate::list::ListControllerStoreFields;
use crate::store::{store_cancel_delete, store_confirm_delete, use_list_store};

/// Confirmation panel for the pending deletion
///
/// # Arguments
/// * `title` - Heading shown in the panel
/// * `fade_ms` - Opacity/visibility transition duration
#[component]
pub fn DeletePrompt(#[prop(into)] title: String, fade_ms: u32) -> impl IntoView {
    let store = use_list_store();
    let open = move || store.pending_deletion().read().is_some();

    let panel_style = move || {
        let (visibility, opacity) = if open() {
            ("visible", "1")
        } else {
            ("hidden", "0")
        };
        format!(
            "position: fixed; top: 50%; left: 50%; z-index: 999; min-width: 300px; \
             background: rgb(152, 110, 187); padding: 10px; transform: translate(-50%, -50%); \
             text-align: center; visibility: {}; opacity: {}; transition: all {}ms linear;",
            visibility, opacity, fade_ms
        )
    };

    view! {
        <div class="delete-prompt" style=panel_style>
            <h1>{title}</h1>
            <input
                type="button"
                value="Cancel"
                on:click=move |_| store_cancel_delete(&store)
            />
            " "
            <input
                type="button"
                value="Delete"
                on:click=move |_| {
                    // Only reachable while a deletion is pending
                    if let Err(err) = store_confirm_delete(&store) {
                        log::error!("[LIST] {}", err);
                    }
                }
            />
        </div>
    }
}
