use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Event, EventTarget};

use crate::dom::discovery::js_fault;
use crate::interactions::error::{contain, InteractionError};
use crate::interactions::teardown::Detach;

/// A registered event listener. Detaching removes it from its target and
/// frees the callback.
pub struct Listener {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl Detach for Listener {
    fn detach(self: Box<Self>) {
        if let Err(e) = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref())
        {
            warn!("Failed to remove {} listener: {:?}", self.event, e);
        }
    }
}

/// Attaches `handler` until the returned [`Listener`] is detached. Errors the
/// handler returns are logged under `component` and go no further.
pub fn listen<F>(
    target: &EventTarget,
    event: &'static str,
    component: &'static str,
    mut handler: F,
) -> Result<Listener, InteractionError>
where
    F: FnMut(Event) -> Result<(), InteractionError> + 'static,
{
    let callback = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
        contain(component, || handler(event));
    });
    target
        .add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
        .map_err(js_fault(component))?;
    Ok(Listener {
        target: target.clone(),
        event,
        callback,
    })
}
