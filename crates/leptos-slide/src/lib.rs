//! Leptos Slide Utilities
//!
//! Swipe-to-remove rows for Leptos using mouse events.
//! A row follows the pointer to the right with a damping factor and fires a
//! one-shot callback once the damped offset reaches the threshold.

mod binding;
mod component;
mod config;
mod controller;
mod dom;
mod recognizer;
mod slot;

pub use binding::{
    bind_slide, rebind_slide, ListenScope, ListenerHost, PointerHandler, PointerPhase,
    PointerSample, SlideBinding,
};
pub use component::SlidableItem;
pub use config::{ConfigError, SlideConfig, COMMIT_THRESHOLD_PX, DAMPING_FACTOR, TRANSITION_MS};
pub use controller::{SlideController, SlideSurface};
pub use dom::{DomHost, DomListener, ElementSurface};
pub use recognizer::{DragRecognizer, DragState, MoveOutcome};
pub use slot::CallbackSlot;
