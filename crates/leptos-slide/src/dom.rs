//! Browser bindings: web-sys listeners and the row element surface.

use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{EventTarget, HtmlElement, MouseEvent, MouseEventInit};

use crate::binding::{
    ListenScope, ListenerHost, PointerHandler, PointerPhase, PointerSample,
};
use crate::controller::SlideSurface;

/// A registered DOM listener, removed from its target on drop
pub struct DomListener {
    target: EventTarget,
    event: &'static str,
    closure: Closure<dyn FnMut(MouseEvent)>,
}

impl Drop for DomListener {
    fn drop(&mut self) {
        let _ = self.target.remove_event_listener_with_callback(
            self.event,
            self.closure.as_ref().unchecked_ref(),
        );
    }
}

/// The row element plus the window
#[derive(Clone)]
pub struct DomHost {
    element: HtmlElement,
    global: Option<EventTarget>,
}

impl DomHost {
    pub fn new(element: HtmlElement) -> Self {
        let global = web_sys::window().map(EventTarget::from);
        if global.is_none() {
            log::warn!("[SLIDE] No window; releases outside the row will be missed");
        }
        Self { element, global }
    }
}

impl ListenerHost for DomHost {
    type Listener = DomListener;

    fn listen(
        &self,
        scope: ListenScope,
        phase: PointerPhase,
        handler: PointerHandler,
    ) -> Option<DomListener> {
        let target: EventTarget = match scope {
            ListenScope::Element => self.element.clone().into(),
            ListenScope::Global => self.global.clone()?,
        };
        let event = phase.event_name();
        let closure = Closure::<dyn FnMut(MouseEvent)>::new(move |ev: MouseEvent| {
            handler(PointerSample {
                x: f64::from(ev.client_x()),
                button: ev.button(),
            });
        });

        if let Err(err) =
            target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
        {
            log::warn!("[SLIDE] Failed to bind {}: {:?}", event, err);
            return None;
        }
        Some(DomListener {
            target,
            event,
            closure,
        })
    }

    fn dispatch_release(&self) {
        let init = MouseEventInit::new();
        init.set_bubbles(true);
        init.set_cancelable(true);
        match MouseEvent::new_with_mouse_event_init_dict("mouseup", &init) {
            Ok(ev) => {
                let _ = self.element.dispatch_event(&ev);
            }
            Err(err) => log::warn!("[SLIDE] Could not create synthetic mouseup: {:?}", err),
        }
    }
}

/// Moves the row element directly through its inline style
pub struct ElementSurface {
    element: HtmlElement,
    dragging: WriteSignal<bool>,
    rest_transition: String,
}

impl ElementSurface {
    pub fn new(
        element: HtmlElement,
        dragging: WriteSignal<bool>,
        rest_transition: String,
    ) -> Self {
        Self {
            element,
            dragging,
            rest_transition,
        }
    }

    fn set_style(&self, property: &str, value: &str) {
        let _ = self.element.style().set_property(property, value);
    }
}

impl SlideSurface for ElementSurface {
    fn set_offset(&self, offset_px: f64) {
        self.set_style("left", &format!("{}px", offset_px));
    }

    fn set_dragging(&self, dragging: bool) {
        // Track the pointer without lag while dragging, animate back otherwise
        let transition = if dragging {
            "none"
        } else {
            self.rest_transition.as_str()
        };
        self.set_style("transition", transition);
        self.dragging.set(dragging);
    }
}
