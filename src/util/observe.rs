//! Viewport intersection observation.
//!
//! Thin wrapper over `IntersectionObserver` that delivers `(id,
//! is_intersecting)` batches to a plain closure, in callback delivery order.
//! `supported()` is the capability check callers consult before wiring
//! anything; when the API is missing, observed elements simply keep their
//! default presentation.

#[cfg(feature = "hydrate")]
use wasm_bindgen::{JsCast, JsValue, closure::Closure};

/// Whether the browser exposes `IntersectionObserver`.
pub fn supported() -> bool {
    #[cfg(feature = "hydrate")]
    {
        match web_sys::window() {
            Some(window) => {
                js_sys::Reflect::has(window.as_ref(), &JsValue::from_str("IntersectionObserver"))
                    .unwrap_or(false)
            }
            None => false,
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}

/// Collect all elements matching a selector, in document order.
#[cfg(feature = "hydrate")]
pub fn query_elements(selector: &str) -> Vec<web_sys::Element> {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return Vec::new();
    };
    let Ok(list) = document.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<web_sys::Element>().ok())
        .collect()
}

/// Observe `elements` with the given threshold and root margin, feeding each
/// callback batch to `on_batch` as `(element id, is_intersecting)` pairs.
///
/// The observer watches for the lifetime of the page; the callback is leaked
/// so it stays valid, matching how the page never disconnects its observers.
#[cfg(feature = "hydrate")]
pub fn observe_ids(
    elements: &[web_sys::Element],
    threshold: f64,
    root_margin: &str,
    on_batch: impl FnMut(Vec<(String, bool)>) + 'static,
) {
    let mut on_batch = on_batch;
    let callback = Closure::<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>::new(
        move |entries: js_sys::Array, _observer: web_sys::IntersectionObserver| {
            let batch = entries
                .iter()
                .filter_map(|entry| entry.dyn_into::<web_sys::IntersectionObserverEntry>().ok())
                .map(|entry| (entry.target().id(), entry.is_intersecting()))
                .collect::<Vec<_>>();
            on_batch(batch);
        },
    );

    let options = web_sys::IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(threshold));
    options.set_root_margin(root_margin);

    let Ok(observer) = web_sys::IntersectionObserver::new_with_options(
        callback.as_ref().unchecked_ref(),
        &options,
    ) else {
        return;
    };

    for element in elements {
        observer.observe(element);
    }

    callback.forget();
}
