//! Main App Component

use campahill_core::SiteConfig;
use leptos::prelude::*;
use leptos_router::{components::*, path};

use crate::pages::HomePage;

/// Root application component
#[component]
pub fn App(config: SiteConfig) -> impl IntoView {
    provide_context(config);

    view! {
        <Router>
            <div class="app">
                <Routes fallback=|| view! { <p>"Page not found"</p> }>
                    <Route path=path!("/") view=HomePage />
                </Routes>
            </div>
        </Router>
    }
}
