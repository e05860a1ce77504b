//! Fixed top navigation: brand, section links, theme toggle, hamburger menu.

use leptos::prelude::*;

use crate::state::theme::ThemeMode;
use crate::state::ui::UiState;
use crate::util;

/// One entry in the primary navigation.
struct NavLink {
    id: &'static str,
    href: &'static str,
    label: &'static str,
}

const NAV_LINKS: &[NavLink] = &[
    NavLink { id: "home", href: "#home", label: "Home" },
    NavLink { id: "about", href: "#about", label: "About" },
    NavLink { id: "skills", href: "#skills", label: "Skills" },
    NavLink { id: "projects", href: "#projects", label: "Projects" },
    NavLink { id: "contact", href: "#contact", label: "Contact" },
];

/// Top navigation bar.
///
/// The hamburger button and the menu panel both render their `active` class
/// from the single `UiState::menu_open` field, so trigger and panel can never
/// disagree. Clicking a link closes the menu and smooth-scrolls to its
/// section; outside clicks and Escape close the menu from document-level
/// listeners.
#[component]
pub fn Navbar() -> impl IntoView {
    let theme = expect_context::<RwSignal<ThemeMode>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let on_toggle_theme = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        theme.update(|mode| *mode = mode.toggled());
        util::theme::save(theme.get_untracked());
    };

    let on_hamburger = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        // Keep the document-level listener from treating this same click as
        // an outside click and immediately closing the menu again.
        ev.stop_propagation();
        ui.update(UiState::toggle_menu);
    };

    Effect::new(move || {
        listen_for_dismissal(ui);
    });

    let links = NAV_LINKS
        .iter()
        .map(|link| {
            let id = link.id;
            let href = link.href;
            let label = link.label;

            let on_click = move |ev: leptos::ev::MouseEvent| {
                ev.prevent_default();
                ui.update(UiState::close_menu);
                if let Some(target) = util::scroll::anchor_target(href) {
                    util::scroll::scroll_to_section(target);
                }
            };

            view! {
                <li class="nav__item">
                    <a
                        class="nav__link"
                        class:active=move || ui.with(|u| u.is_active_section(id))
                        href=href
                        on:click=on_click
                    >
                        {label}
                    </a>
                </li>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <header class="nav">
            <span class="nav__brand">"Alex Chen"</span>

            <ul id="navMenu" class="nav__menu" class:active=move || ui.with(|u| u.menu_open)>
                {links}
            </ul>

            <button
                id="themeToggle"
                class="theme-toggle"
                type="button"
                title="Toggle color scheme"
                on:click=on_toggle_theme
            >
                <span class="theme-toggle__icon">{move || theme.get().icon()}</span>
            </button>

            <button
                id="navHamburger"
                class="nav__hamburger"
                class:active=move || ui.with(|u| u.menu_open)
                type="button"
                aria-label="Toggle navigation menu"
                on:click=on_hamburger
            >
                <span class="nav__hamburger-bar"></span>
                <span class="nav__hamburger-bar"></span>
                <span class="nav__hamburger-bar"></span>
            </button>
        </header>
    }
}

/// Attach the document-level listeners that force the menu closed: clicks
/// outside both the hamburger and the panel, and the Escape key.
fn listen_for_dismissal(ui: RwSignal<UiState>) {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;
        use wasm_bindgen::closure::Closure;

        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };

        let click_ui = ui;
        let on_click = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(
            move |ev: web_sys::MouseEvent| {
                if !click_ui.get_untracked().menu_open {
                    return;
                }
                let inside = ev
                    .target()
                    .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
                    .and_then(|el| el.closest("#navHamburger, #navMenu").ok().flatten())
                    .is_some();
                if !inside {
                    click_ui.update(UiState::close_menu);
                }
            },
        );
        let _ = document
            .add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref());
        on_click.forget();

        let key_ui = ui;
        let on_keydown = Closure::<dyn FnMut(web_sys::KeyboardEvent)>::new(
            move |ev: web_sys::KeyboardEvent| {
                if ev.key() == "Escape" && key_ui.get_untracked().menu_open {
                    key_ui.update(UiState::close_menu);
                }
            },
        );
        let _ = document
            .add_event_listener_with_callback("keydown", on_keydown.as_ref().unchecked_ref());
        on_keydown.forget();
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = ui;
    }
}
