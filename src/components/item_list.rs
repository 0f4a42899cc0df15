//! Item List Component
//!
//! One slidable row per item; sliding a row out opens the delete prompt.

use leptos::prelude::*;
use leptos_slide::{SlidableItem, SlideConfig};

use crate::list::ListControllerStoreFields;
use crate::store::{store_request_delete, use_list_store};

#[component]
pub fn ItemList(slide: SlideConfig) -> impl IntoView {
    let store = use_list_store();

    view! {
        <div class="app">
            <For
                each=move || store.items().get().into_iter().enumerate()
                // Rows are identified by position, like the list itself
                key=|(index, item)| (*index, item.name.clone())
                children=move |(index, item)| {
                    let on_slide_out = Callback::new(move |_| store_request_delete(&store, index));
                    view! {
                        <SlidableItem on_slide_out=on_slide_out config=slide>
                            <div class="no-select item">{item.name}</div>
                        </SlidableItem>
                    }
                }
            />
        </div>
        <p class="item-count">{move || format!("{} items", store.items().read().len())}</p>
    }
}
