//! Listener wiring for one slidable row.
//!
//! Down/move are bound to the row element, up to the global target so a drag
//! released outside the row still ends. Listeners live exactly as long as the
//! returned `SlideBinding`.

use std::rc::Rc;

use crate::controller::{SlideController, SlideSurface};

/// Where a listener is registered
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ListenScope {
    Element,
    Global,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerPhase {
    Down,
    Move,
    Up,
}

impl PointerPhase {
    pub fn event_name(self) -> &'static str {
        match self {
            PointerPhase::Down => "mousedown",
            PointerPhase::Move => "mousemove",
            PointerPhase::Up => "mouseup",
        }
    }
}

/// The parts of a mouse event a row cares about
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerSample {
    pub x: f64,
    /// `MouseEvent.button`; 0 is the primary button
    pub button: i16,
}

impl PointerSample {
    pub fn primary(x: f64) -> Self {
        Self { x, button: 0 }
    }

    pub fn is_primary(&self) -> bool {
        self.button == 0
    }
}

pub type PointerHandler = Box<dyn Fn(PointerSample)>;

/// Event targets a row can bind to.
///
/// `Listener` is a guard: dropping it must unregister the handler.
pub trait ListenerHost: Clone + 'static {
    type Listener;

    fn listen(
        &self,
        scope: ListenScope,
        phase: PointerPhase,
        handler: PointerHandler,
    ) -> Option<Self::Listener>;

    /// Emit a synthetic release on the row element for outer listeners
    fn dispatch_release(&self);
}

/// The live listener set of one row
pub struct SlideBinding<L> {
    listeners: Vec<L>,
}

impl<L> SlideBinding<L> {
    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }
}

/// Bind a controller to its element and the global release target
pub fn bind_slide<H, S>(
    host: &H,
    controller: Rc<SlideController<S>>,
) -> SlideBinding<H::Listener>
where
    H: ListenerHost,
    S: SlideSurface + 'static,
{
    let mut listeners = Vec::with_capacity(3);

    let down = controller.clone();
    listeners.extend(host.listen(
        ListenScope::Element,
        PointerPhase::Down,
        Box::new(move |sample: PointerSample| {
            // Right or middle clicks never start a drag
            if sample.is_primary() {
                down.pointer_down(sample.x);
            }
        }),
    ));

    let moved = controller.clone();
    let release_target = host.clone();
    listeners.extend(host.listen(
        ListenScope::Element,
        PointerPhase::Move,
        Box::new(move |sample: PointerSample| {
            if moved.pointer_move(sample.x).is_commit() && moved.config().redispatch_release {
                release_target.dispatch_release();
            }
        }),
    ));

    let up = controller;
    listeners.extend(host.listen(
        ListenScope::Global,
        PointerPhase::Up,
        Box::new(move |_| {
            if up.is_dragging() {
                log::debug!("[SLIDE] Released");
                up.release();
            }
        }),
    ));

    SlideBinding { listeners }
}

/// Replace a row's binding, dropping (and so unregistering) the old one first
pub fn rebind_slide<H, S>(
    current: &mut Option<SlideBinding<H::Listener>>,
    host: &H,
    controller: Rc<SlideController<S>>,
) where
    H: ListenerHost,
    S: SlideSurface + 'static,
{
    current.take();
    *current = Some(bind_slide(host, controller));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SlideConfig;
    use crate::controller::tests::RecordingSurface;
    use crate::slot::CallbackSlot;
    use std::cell::{Cell, RefCell};

    /// (id, row, phase, handler); `row` is None for the global target
    type Registered = (usize, Option<usize>, PointerPhase, Rc<dyn Fn(PointerSample)>);

    /// In-memory page; the global target is shared by every row
    #[derive(Clone, Default)]
    struct FakePage {
        live: Rc<RefCell<Vec<Registered>>>,
        next_id: Rc<Cell<usize>>,
        releases: Rc<Cell<usize>>,
    }

    /// One row's view of the page
    #[derive(Clone)]
    struct FakeHost {
        page: FakePage,
        row: usize,
    }

    struct FakeListener {
        id: usize,
        live: Rc<RefCell<Vec<Registered>>>,
    }

    impl Drop for FakeListener {
        fn drop(&mut self) {
            self.live.borrow_mut().retain(|(id, ..)| *id != self.id);
        }
    }

    impl FakePage {
        fn host(&self, row: usize) -> FakeHost {
            FakeHost {
                page: self.clone(),
                row,
            }
        }

        fn live_count(&self) -> usize {
            self.live.borrow().len()
        }

        fn fire(&self, row: Option<usize>, phase: PointerPhase, sample: PointerSample) {
            let handlers: Vec<_> = self
                .live
                .borrow()
                .iter()
                .filter(|(_, r, p, _)| *r == row && *p == phase)
                .map(|(.., h)| h.clone())
                .collect();
            for h in handlers {
                h(sample);
            }
        }

        fn release_anywhere(&self) {
            self.fire(None, PointerPhase::Up, PointerSample::primary(0.0));
        }
    }

    impl FakeHost {
        fn fire(&self, phase: PointerPhase, x: f64) {
            self.page.fire(Some(self.row), phase, PointerSample::primary(x));
        }

        fn fire_button(&self, phase: PointerPhase, x: f64, button: i16) {
            self.page.fire(Some(self.row), phase, PointerSample { x, button });
        }
    }

    impl ListenerHost for FakeHost {
        type Listener = FakeListener;

        fn listen(
            &self,
            scope: ListenScope,
            phase: PointerPhase,
            handler: PointerHandler,
        ) -> Option<FakeListener> {
            let row = match scope {
                ListenScope::Element => Some(self.row),
                ListenScope::Global => None,
            };
            let id = self.page.next_id.get();
            self.page.next_id.set(id + 1);
            self.page
                .live
                .borrow_mut()
                .push((id, row, phase, Rc::from(handler)));
            Some(FakeListener {
                id,
                live: self.page.live.clone(),
            })
        }

        fn dispatch_release(&self) {
            // A bubbling mouseup on the row reaches the global target
            self.page.releases.set(self.page.releases.get() + 1);
            self.page.release_anywhere();
        }
    }

    fn counting_slot(counter: &Rc<Cell<u32>>) -> CallbackSlot {
        let c = counter.clone();
        CallbackSlot::with(move || c.set(c.get() + 1))
    }

    fn controller(slot: CallbackSlot) -> Rc<SlideController<RecordingSurface>> {
        Rc::new(SlideController::new(
            SlideConfig::default(),
            RecordingSurface::default(),
            slot,
        ))
    }

    #[test]
    fn test_binding_registers_three_and_drop_removes_them() {
        let page = FakePage::default();
        let binding = bind_slide(&page.host(0), controller(CallbackSlot::new()));
        assert_eq!(binding.len(), 3);
        assert_eq!(page.live_count(), 3);
        drop(binding);
        assert_eq!(page.live_count(), 0);
    }

    #[test]
    fn test_release_outside_element_ends_drag() {
        let page = FakePage::default();
        let host = page.host(0);
        let c = controller(CallbackSlot::new());
        let _binding = bind_slide(&host, c.clone());

        host.fire(PointerPhase::Down, 0.0);
        host.fire(PointerPhase::Move, 100.0);
        assert!(c.is_dragging());

        page.release_anywhere();
        assert!(!c.is_dragging());
        assert_eq!(c.surface().last_offset(), Some(0.0));
    }

    #[test]
    fn test_commit_redispatches_release_once() {
        let page = FakePage::default();
        let host = page.host(0);
        let fired = Rc::new(Cell::new(0));
        let c = controller(counting_slot(&fired));
        let _binding = bind_slide(&host, c.clone());

        host.fire(PointerPhase::Down, 0.0);
        host.fire(PointerPhase::Move, 500.0);
        host.fire(PointerPhase::Move, 600.0);
        page.release_anywhere();

        assert_eq!(fired.get(), 1);
        assert_eq!(page.releases.get(), 1);
        assert_eq!(c.surface().last_offset(), Some(0.0));
    }

    #[test]
    fn test_redispatch_can_be_disabled() {
        let page = FakePage::default();
        let host = page.host(0);
        let config = SlideConfig {
            redispatch_release: false,
            ..Default::default()
        };
        let c = Rc::new(SlideController::new(
            config,
            RecordingSurface::default(),
            CallbackSlot::new(),
        ));
        let _binding = bind_slide(&host, c);

        host.fire(PointerPhase::Down, 0.0);
        host.fire(PointerPhase::Move, 500.0);
        assert_eq!(page.releases.get(), 0);
    }

    #[test]
    fn test_rebinding_keeps_one_listener_set_and_latest_callback() {
        let page = FakePage::default();
        let host = page.host(0);
        let old_hits = Rc::new(Cell::new(0));
        let new_hits = Rc::new(Cell::new(0));

        let slot = counting_slot(&old_hits);
        let c = controller(slot.clone());
        let mut binding = None;
        for _ in 0..10 {
            rebind_slide(&mut binding, &host, c.clone());
        }
        assert_eq!(page.live_count(), 3);

        slot.replace({
            let n = new_hits.clone();
            move || n.set(n.get() + 1)
        });
        host.fire(PointerPhase::Down, 0.0);
        host.fire(PointerPhase::Move, 400.0);

        assert_eq!(old_hits.get(), 0);
        assert_eq!(new_hits.get(), 1);
    }

    #[test]
    fn test_idle_rows_ignore_global_release() {
        let page = FakePage::default();
        let (h0, h1) = (page.host(0), page.host(1));
        let (hits0, hits1) = (Rc::new(Cell::new(0)), Rc::new(Cell::new(0)));
        let c0 = controller(counting_slot(&hits0));
        let c1 = controller(counting_slot(&hits1));
        let _b0 = bind_slide(&h0, c0.clone());
        let _b1 = bind_slide(&h1, c1.clone());
        assert_eq!(page.live_count(), 6);

        // Row 0 commits; its synthetic release reaches row 1's global listener
        h0.fire(PointerPhase::Down, 0.0);
        h0.fire(PointerPhase::Move, 1000.0);

        assert_eq!(hits0.get(), 1);
        assert_eq!(hits1.get(), 0);
        assert!(!c0.is_dragging());
        assert_eq!(c1.surface().transitions.get(), 0);
        assert!(c1.surface().offsets.borrow().is_empty());
    }

    #[test]
    fn test_only_primary_button_starts_drag() {
        let page = FakePage::default();
        let host = page.host(0);
        let fired = Rc::new(Cell::new(0));
        let c = controller(counting_slot(&fired));
        let _binding = bind_slide(&host, c.clone());

        // Right then middle button
        for button in [2, 1] {
            host.fire_button(PointerPhase::Down, 0.0, button);
            host.fire(PointerPhase::Move, 1000.0);
            assert!(!c.is_dragging());
        }
        assert_eq!(fired.get(), 0);
        assert_eq!(c.surface().transitions.get(), 0);

        host.fire(PointerPhase::Down, 0.0);
        host.fire(PointerPhase::Move, 1000.0);
        assert_eq!(fired.get(), 1);
    }
}
