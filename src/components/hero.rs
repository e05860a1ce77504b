//! Hero section with a staggered entrance animation and scroll prompts.

use leptos::prelude::*;

use crate::util;

/// Selectors animated on first paint, in entrance order.
#[cfg(feature = "hydrate")]
const ENTRANCE_SELECTORS: &[&str] = &[
    ".hero__title",
    ".hero__subtitle",
    ".hero__tagline",
    ".hero__actions",
    ".hero__avatar",
];

/// Delay between consecutive entrances.
#[cfg(feature = "hydrate")]
const ENTRANCE_STEP_MS: u64 = 150;

/// Full-viewport hero with name, tagline, and calls to action.
#[component]
pub fn Hero() -> impl IntoView {
    Effect::new(move || {
        animate_entrance();
    });

    let scroll_to = |href: &'static str| {
        move |ev: leptos::ev::MouseEvent| {
            ev.prevent_default();
            if let Some(target) = util::scroll::anchor_target(href) {
                util::scroll::scroll_to_section(target);
            }
        }
    };

    view! {
        <section id="home" class="hero">
            <div class="hero__inner">
                <h1 class="hero__title">"Alex Chen"</h1>
                <p class="hero__subtitle">"Full-Stack Developer"</p>
                <p class="hero__tagline">
                    "I build fast, accessible web applications from database to browser."
                </p>
                <div class="hero__actions">
                    <a class="btn btn--primary" href="#projects" on:click=scroll_to("#projects")>
                        "View My Work"
                    </a>
                    <a class="btn btn--outline" href="#contact" on:click=scroll_to("#contact")>
                        "Get In Touch"
                    </a>
                </div>
                <div class="hero__avatar" aria-hidden="true">"AC"</div>
            </div>
            <a
                class="scroll-indicator"
                href="#about"
                aria-label="Scroll to about section"
                on:click=scroll_to("#about")
            >
                "\u{2193}"
            </a>
        </section>
    }
}

/// Stagger the hero elements in: each starts transparent and offset, then
/// transitions to its resting position on the next animation frame, 150 ms
/// after the previous one. Missing elements are skipped.
fn animate_entrance() {
    #[cfg(feature = "hydrate")]
    {
        for (index, selector) in ENTRANCE_SELECTORS.iter().enumerate() {
            let selector = (*selector).to_owned();
            let delay = ENTRANCE_STEP_MS * index as u64;
            leptos::task::spawn_local(async move {
                gloo_timers::future::sleep(std::time::Duration::from_millis(delay)).await;
                enter(&selector);
            });
        }
    }
}

#[cfg(feature = "hydrate")]
fn enter(selector: &str) {
    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;

    let Some(window) = web_sys::window() else { return };
    let Some(document) = window.document() else { return };
    let Some(el) = document.query_selector(selector).ok().flatten() else {
        return;
    };
    let Ok(el) = el.dyn_into::<web_sys::HtmlElement>() else {
        return;
    };

    let style = el.style();
    let _ = style.set_property("opacity", "0");
    let _ = style.set_property("transform", "translateY(20px)");
    let _ = style.set_property(
        "transition",
        "opacity 0.6s ease-out, transform 0.6s ease-out",
    );

    let raf = Closure::once_into_js(move || {
        let style = el.style();
        let _ = style.set_property("opacity", "1");
        let _ = style.set_property("transform", "translateY(0)");
    });
    let _ = window.request_animation_frame(raf.unchecked_ref());
}
