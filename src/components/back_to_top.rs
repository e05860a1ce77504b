//! Back-to-top affordance shown after scrolling down the page.

use leptos::prelude::*;

use crate::state::ui::UiState;
use crate::util;

/// Floating button that appears past the scroll threshold and smooth-scrolls
/// back to the top. Visibility is recomputed on every scroll event and once
/// at setup so a restored scroll position is reflected immediately.
#[component]
pub fn BackToTop() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    Effect::new(move || {
        ui.update(|u| u.update_scroll(util::scroll::scroll_y()));
        listen_for_scroll(ui);
    });

    let on_click = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        util::scroll::scroll_to_top();
    };

    view! {
        <button
            id="backToTop"
            class="back-to-top"
            class:visible=move || ui.with(|u| u.back_to_top_visible)
            type="button"
            aria-label="Back to top"
            on:click=on_click
        >
            "\u{2191}"
        </button>
    }
}

fn listen_for_scroll(ui: RwSignal<UiState>) {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;
        use wasm_bindgen::closure::Closure;

        let Some(window) = web_sys::window() else { return };

        let callback = Closure::<dyn FnMut()>::new(move || {
            ui.update(|u| u.update_scroll(util::scroll::scroll_y()));
        });
        let _ =
            window.add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref());
        callback.forget();
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = ui;
    }
}
