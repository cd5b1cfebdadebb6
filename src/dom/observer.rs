use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::dom::discovery::js_fault;
use crate::interactions::error::{contain, InteractionError};
use crate::interactions::teardown::Detach;
use crate::interactions::visibility::ObserverOptions;

/// An observer together with the callback it reports to.
pub struct Observation {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl Detach for Observation {
    fn detach(self: Box<Self>) {
        self.observer.disconnect();
    }
}

/// Watches all `targets` with one shared observer.
///
/// `on_entry` gets the target's index in `targets` and whether it is
/// intersecting. It keeps being called until the observation is detached.
pub fn observe<F>(
    targets: &[Element],
    options: &ObserverOptions,
    component: &'static str,
    mut on_entry: F,
) -> Result<Observation, InteractionError>
where
    F: FnMut(usize, bool) + 'static,
{
    let watched = targets.to_vec();
    let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
        move |entries: Array, _observer: IntersectionObserver| {
            contain(component, || {
                for entry in entries.iter() {
                    let entry: IntersectionObserverEntry = entry
                        .dyn_into()
                        .map_err(js_fault(component))?;
                    let target = entry.target();
                    if let Some(index) = watched.iter().position(|element| *element == target) {
                        on_entry(index, entry.is_intersecting());
                    }
                }
                Ok(())
            });
        },
    );

    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(options.threshold));
    init.set_root_margin(&options.root_margin);
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
            .map_err(js_fault(component))?;
    for target in targets {
        observer.observe(target);
    }
    Ok(Observation {
        observer,
        _callback: callback,
    })
}
