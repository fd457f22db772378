//! Browser binding for [`VisibilityTrigger`]
//!
//! Attaches an `IntersectionObserver` to a node and arms the reveal timer on
//! the first intersection. Both the observer and the timer are held by the
//! owning component and released in `on_cleanup`, so nothing fires into a
//! card that has left the tree.

use leptos::html::Div;
use leptos::prelude::*;

use crate::core::VisibilityTrigger;

#[cfg(not(feature = "ssr"))]
use leptos::wasm_bindgen::{JsCast, closure::Closure};

/// Observer plus the callback it calls. Dropping the lease disconnects the observer.
#[cfg(not(feature = "ssr"))]
struct ObserverLease {
    observer: web_sys::IntersectionObserver,
    _callback: Closure<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>,
}

#[cfg(not(feature = "ssr"))]
impl Drop for ObserverLease {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

#[cfg(not(feature = "ssr"))]
fn observe(
    element: &web_sys::Element,
    trigger: RwSignal<VisibilityTrigger>,
    timer: StoredValue<Option<TimeoutHandle>>,
) -> Option<ObserverLease> {
    use crate::core::ObserverOptions;
    use std::time::Duration;

    let callback = Closure::<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>::new(
        move |entries: js_sys::Array, observer: web_sys::IntersectionObserver| {
            let intersecting = entries.iter().any(|entry| {
                entry
                    .unchecked_into::<web_sys::IntersectionObserverEntry>()
                    .is_intersecting()
            });

            let Some(Some(delay_ms)) = trigger.try_update(|t| t.on_intersection(intersecting))
            else {
                return;
            };

            // One-shot: nothing left to watch for
            observer.disconnect();

            let handle = set_timeout_with_handle(
                move || {
                    let _ = trigger.try_update(|t| t.on_timer_elapsed());
                },
                Duration::from_millis(u64::from(delay_ms)),
            );
            match handle {
                Ok(handle) => {
                    let _ = timer.try_set_value(Some(handle));
                }
                Err(_) => leptos::logging::warn!("failed to arm reveal timer"),
            }
        },
    );

    let defaults = ObserverOptions::default();
    let options = web_sys::IntersectionObserverInit::new();
    options.set_threshold(&leptos::wasm_bindgen::JsValue::from_f64(defaults.threshold));
    options.set_root_margin(defaults.root_margin);

    let observer = match web_sys::IntersectionObserver::new_with_options(
        callback.as_ref().unchecked_ref(),
        &options,
    ) {
        Ok(observer) => observer,
        Err(_) => {
            leptos::logging::warn!("IntersectionObserver unavailable");
            return None;
        }
    };
    observer.observe(element);

    Some(ObserverLease {
        observer,
        _callback: callback,
    })
}

/// Reveal flag for the node behind `node_ref`.
///
/// Becomes `true` `delay_ms` after the node first enters the viewport and
/// stays `true` from then on.
pub fn use_visibility_trigger(node_ref: NodeRef<Div>, delay_ms: u32) -> Signal<bool> {
    let trigger = RwSignal::new(VisibilityTrigger::new(delay_ms));

    #[cfg(not(feature = "ssr"))]
    {
        let lease = StoredValue::new_local(None::<ObserverLease>);
        let timer = StoredValue::new(None::<TimeoutHandle>);

        Effect::new(move |_| {
            let Some(element) = node_ref.get() else {
                return;
            };
            if !trigger.with_untracked(VisibilityTrigger::is_watching) {
                return;
            }
            lease.set_value(observe(&element, trigger, timer));
        });

        on_cleanup(move || {
            // Disconnects via Drop
            let _ = lease.try_update_value(|lease| lease.take());
            if let Some(Some(handle)) = timer.try_get_value() {
                handle.clear();
            }
            let _ = trigger.try_update(VisibilityTrigger::release);
        });
    }

    Signal::derive(move || trigger.with(VisibilityTrigger::is_visible))
}
