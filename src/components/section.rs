//! Content section wrapper that reveals once scrolled into view.

use leptos::prelude::*;

use crate::state::ui::UiState;

/// A page section that fades in the first time it enters the viewport.
///
/// The reveal flag lives in `UiState::revealed`, fed by the page's
/// intersection observer. Membership is insert-only, so a section that has
/// been revealed stays revealed even when scrolled back out of view. Without
/// `IntersectionObserver` the class never appears and the section keeps its
/// default presentation.
#[component]
pub fn Section(
    /// Anchor id; also the key in the reveal set.
    id: &'static str,
    /// Heading shown at the top of the section.
    title: &'static str,
    children: Children,
) -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    view! {
        <section id=id class="section" class:visible=move || ui.with(|u| u.is_revealed(id))>
            <h2 class="section__title">{title}</h2>
            {children()}
        </section>
    }
}
