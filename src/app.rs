//! Slide List App
//!
//! Swipe a row to the right to be asked whether to delete it.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{DeletePrompt, ItemList};
use crate::config::AppConfig;
use crate::list::ListController;

#[component]
pub fn App() -> impl IntoView {
    let config = AppConfig::load();

    // Provide the list store to all children
    provide_context(Store::new(ListController::new(config.items)));

    view! {
        <div style="position: relative;">
            <ItemList slide=config.slide />
            <DeletePrompt title=config.prompt_title fade_ms=config.prompt_ms />
        </div>
    }
}
