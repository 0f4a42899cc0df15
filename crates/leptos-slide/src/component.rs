//! Slidable Item Component

use std::rc::Rc;

use leptos::html;
use leptos::prelude::*;

use crate::binding::{rebind_slide, SlideBinding};
use crate::config::SlideConfig;
use crate::controller::SlideController;
use crate::dom::{DomHost, DomListener, ElementSurface};
use crate::slot::CallbackSlot;

/// A list row that can be dragged to the right to "slide out".
///
/// # Arguments
/// * `on_slide_out` - Invoked once when a drag crosses the threshold.
///   Always the latest value is used.
/// * `config` - Gesture tunables, `SlideConfig::default()` when omitted
#[component]
pub fn SlidableItem(
    #[prop(into)] on_slide_out: Signal<Callback<()>>,
    #[prop(optional)] config: SlideConfig,
    children: Children,
) -> impl IntoView {
    let row_ref = NodeRef::<html::Div>::new();
    let (dragging, set_dragging) = signal(false);
    let slot = CallbackSlot::new();
    let binding = StoredValue::new_local(None::<SlideBinding<DomListener>>);

    // Swap the callback in place; listeners stay bound
    let latest = slot.clone();
    Effect::new(move |_| {
        let callback = on_slide_out.get();
        latest.replace(move || callback.run(()));
    });

    // Bind once the element is mounted, replacing any previous binding
    Effect::new(move |_| {
        let Some(row) = row_ref.get() else { return };
        let element: web_sys::HtmlElement = row.into();
        let surface =
            ElementSurface::new(element.clone(), set_dragging, config.rest_transition());
        let controller = Rc::new(SlideController::new(config, surface, slot.clone()));
        let host = DomHost::new(element);
        binding.update_value(|current| rebind_slide(current, &host, controller));
    });

    on_cleanup(move || {
        binding.update_value(|current| {
            current.take();
        });
    });

    let row_class = move || {
        if dragging.get() {
            "slide-row dragging"
        } else {
            "slide-row"
        }
    };
    let rest_style = format!(
        "position: relative; left: 0px; overflow: hidden; transition: {};",
        config.rest_transition()
    );

    view! {
        <div class="slide-item">
            <div node_ref=row_ref class=row_class style=rest_style>
                {children()}
            </div>
        </div>
    }
}
