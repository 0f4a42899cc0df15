//! Latest-callback holder.
//!
//! Listener closures capture the slot once; callers swap the callback inside
//! it without touching the listeners.

use std::cell::RefCell;
use std::rc::Rc;

type SlideOutFn = Rc<dyn Fn()>;

#[derive(Clone, Default)]
pub struct CallbackSlot {
    current: Rc<RefCell<Option<SlideOutFn>>>,
}

impl CallbackSlot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with<F: Fn() + 'static>(f: F) -> Self {
        let slot = Self::new();
        slot.replace(f);
        slot
    }

    pub fn replace<F: Fn() + 'static>(&self, f: F) {
        *self.current.borrow_mut() = Some(Rc::new(f));
    }

    pub fn is_set(&self) -> bool {
        self.current.borrow().is_some()
    }

    /// Invokes the current callback, if any.
    ///
    /// The borrow ends before the call, so the callback may replace itself.
    pub fn call(&self) {
        let current = self.current.borrow().clone();
        if let Some(f) = current {
            f();
        }
    }
}

impl std::fmt::Debug for CallbackSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CallbackSlot").field("set", &self.is_set()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_calls_latest_callback() {
        let hits = Rc::new(Cell::new((0, 0)));
        let slot = CallbackSlot::new();
        slot.call();

        let h = hits.clone();
        slot.replace(move || h.set((h.get().0 + 1, h.get().1)));
        slot.call();

        let shared = slot.clone();
        let h = hits.clone();
        shared.replace(move || h.set((h.get().0, h.get().1 + 1)));
        slot.call();

        assert_eq!(hits.get(), (1, 1));
    }

    #[test]
    fn test_callback_may_replace_itself() {
        let slot = CallbackSlot::new();
        let inner = slot.clone();
        slot.replace(move || inner.replace(|| {}));
        slot.call();
        assert!(slot.is_set());
    }
}
