//! UI Components
//!
//! Leptos components of the slide list.

mod delete_prompt;
mod item_list;

pub use delete_prompt::DeletePrompt;
pub use item_list::ItemList;
