//! Startup transition guard.
//!
//! The `loading` class on `<body>` lets the stylesheet zero out transition
//! durations so the first paint does not animate half-initialized elements.
//! It is added before hydration and removed again on the window `load` event.

/// Add the `loading` class to `<body>`.
pub fn begin_loading() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(body) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.body()) {
            let _ = body.class_list().add_1("loading");
        }
    }
}

/// Remove the `loading` class once the page has fully loaded. If hydration
/// happened after the load event already fired, clear it immediately.
pub fn finish_on_load() {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;
        use wasm_bindgen::closure::Closure;

        let Some(window) = web_sys::window() else { return };

        let already_loaded = window
            .document()
            .map_or(false, |d| d.ready_state() == "complete");
        if already_loaded {
            remove_loading_class();
            return;
        }

        let callback = Closure::<dyn FnMut()>::new(remove_loading_class);
        let _ =
            window.add_event_listener_with_callback("load", callback.as_ref().unchecked_ref());
        callback.forget();
    }
}

#[cfg(feature = "hydrate")]
fn remove_loading_class() {
    if let Some(body) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.body()) {
        let _ = body.class_list().remove_1("loading");
    }
}
