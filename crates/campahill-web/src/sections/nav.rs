use campahill_core::{BRAND_NAME, BRAND_TAGLINE, Glyph, SectionId, UiState, catalog::NAV_ITEMS};
use leptos::prelude::*;

use crate::components::Icon;

const NAV_SOLID: &str = "fixed top-0 left-0 right-0 z-50 transition-all duration-300 slide-down bg-black/80 backdrop-blur-lg border-b border-gold/20";
const NAV_CLEAR: &str = "fixed top-0 left-0 right-0 z-50 transition-all duration-300 slide-down bg-transparent";

const LINK_ACTIVE: &str = "text-white hover:text-gold transition-colors duration-300 relative text-gold";
const LINK_IDLE: &str = "text-white hover:text-gold transition-colors duration-300 relative";

/// Background variant, driven only by the scrolled flag
pub const fn nav_class(scrolled: bool) -> &'static str {
    if scrolled { NAV_SOLID } else { NAV_CLEAR }
}

pub const fn link_class(active: bool) -> &'static str {
    if active { LINK_ACTIVE } else { LINK_IDLE }
}

/// Fixed navigation bar with desktop links and a collapsible mobile menu
#[component]
pub fn NavBar(state: RwSignal<UiState>, on_navigate: Callback<SectionId>) -> impl IntoView {
    let menu_open = move || state.with(|s| s.menu_open);

    view! {
        <nav class=move || nav_class(state.with(|s| s.scrolled))>
            <div class="container mx-auto px-6 py-4">
                <div class="flex justify-between items-center">
                    <Brand />

                    <div class="hidden md:flex space-x-8">
                        {NAV_ITEMS
                            .into_iter()
                            .map(|item| {
                                let id = item.id;
                                let active = move || state.with(|s| s.is_current(id));
                                view! {
                                    <button
                                        class=move || link_class(active())
                                        on:click=move |_| on_navigate.run(id)
                                    >
                                        {item.label}
                                        <Show when=active>
                                            <div class="absolute -bottom-1 left-0 right-0 h-0.5 bg-gold"></div>
                                        </Show>
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>

                    <button
                        class="md:hidden text-white hover:text-gold transition-colors"
                        aria-label="Toggle menu"
                        on:click=move |_| state.update(UiState::toggle_menu)
                    >
                        {move || {
                            let glyph = if menu_open() { Glyph::Close } else { Glyph::Menu };
                            view! { <Icon glyph=glyph size=24 /> }
                        }}
                    </button>
                </div>
            </div>

            <Show when=menu_open>
                <div class="md:hidden bg-black/90 backdrop-blur-lg border-t border-gold/20">
                    <div class="container mx-auto px-6 py-4">
                        {NAV_ITEMS
                            .into_iter()
                            .map(|item| {
                                let id = item.id;
                                view! {
                                    <button
                                        class="block w-full text-left py-3 text-white hover:text-gold transition-colors"
                                        on:click=move |_| on_navigate.run(id)
                                    >
                                        {item.label}
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </Show>
        </nav>
    }
}

#[component]
fn Brand() -> impl IntoView {
    view! {
        <div class="flex items-center space-x-3">
            <div class="w-12 h-12 bg-gradient-to-r from-red-600 to-red-800 rounded-full flex items-center justify-center">
                <span class="text-gold font-bold text-xl">"C"</span>
            </div>
            <div>
                <h1 class="text-2xl font-bold text-gold">{BRAND_NAME}</h1>
                <p class="text-sm text-gold/70">{BRAND_TAGLINE}</p>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_background_follows_scrolled_flag() {
        assert!(nav_class(false).contains("bg-transparent"));
        assert!(!nav_class(false).contains("backdrop-blur"));
        assert!(nav_class(true).contains("bg-black/80"));
        assert!(nav_class(true).contains("backdrop-blur-lg"));
    }

    #[test]
    fn test_only_active_link_is_gold() {
        assert!(link_class(true).ends_with("text-gold"));
        assert!(!link_class(false).ends_with("text-gold"));
    }

    #[test]
    fn test_one_active_link_per_state() {
        let mut state = UiState::new();
        state.enter_section(SectionId::About);
        let gold = NAV_ITEMS
            .iter()
            .filter(|item| link_class(state.is_current(item.id)) == LINK_ACTIVE)
            .count();
        assert_eq!(gold, 1);
    }
}
