//! Smooth scrolling for in-page anchors.

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

/// Fixed header height subtracted from anchor scroll targets so headings
/// land below the nav bar.
pub const HEADER_OFFSET: f64 = 80.0;

/// Extract the fragment id from an in-page anchor href.
///
/// `"#about"` yields `Some("about")`; a bare `"#"` or any non-fragment href
/// yields `None`.
pub fn anchor_target(href: &str) -> Option<&str> {
    let id = href.strip_prefix('#')?;
    if id.is_empty() { None } else { Some(id) }
}

/// Smooth-scroll so the element with `id` sits just below the fixed header.
/// A missing element means the section is not on this page; do nothing.
pub fn scroll_to_section(id: &str) {
    #[cfg(feature = "hydrate")]
    {
        let Some(window) = web_sys::window() else { return };
        let Some(document) = window.document() else { return };
        let Some(el) = document.get_element_by_id(id) else { return };

        let top = el.get_bounding_client_rect().top() + window.page_y_offset().unwrap_or(0.0)
            - HEADER_OFFSET;
        smooth_scroll_to(&window, top);
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
    }
}

/// Smooth-scroll back to the top of the page.
pub fn scroll_to_top() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            smooth_scroll_to(&window, 0.0);
        }
    }
}

/// Current vertical scroll offset, `0.0` outside a browser.
pub fn scroll_y() -> f64 {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.scroll_y().ok())
            .unwrap_or(0.0)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        0.0
    }
}

#[cfg(feature = "hydrate")]
fn smooth_scroll_to(window: &web_sys::Window, top: f64) {
    let options = web_sys::ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(web_sys::ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}
