//! Home Page

use campahill_core::{Navigator, ScrollTracker, SectionId, SiteConfig, UiState};
use leptos::prelude::*;

use crate::dom::{self, DomSections};
use crate::sections::{About, Contact, Hero, NavBar, Products};

#[component]
pub fn HomePage() -> impl IntoView {
    let config = use_context::<SiteConfig>().unwrap_or_default();

    // Reset on every page view, never persisted.
    let state = RwSignal::new(UiState::new());
    let on_navigate = bind_page(state, &config);

    view! {
        <div class="relative">
            <NavBar state=state on_navigate=on_navigate />
            <Hero />
            <About />
            <Products />
            <Contact />
        </div>
    }
}

/// Attach the scroll tracker to `state` for the lifetime of the current
/// owner and build the navigation action shared by both menus.
pub fn bind_page(state: RwSignal<UiState>, config: &SiteConfig) -> Callback<SectionId> {
    dom::track_scroll(state, ScrollTracker::from_config(config));

    let navigator = Navigator::from_config(config);
    Callback::new(move |section: SectionId| {
        // Ignored targets leave the state untouched, so nothing re-renders.
        state.maybe_update(|s| {
            navigator
                .navigate(&DomSections, s, section.as_str())
                .is_scrolled()
        });
    })
}
