//! DOM Bindings
//!
//! Browser side of the section navigator, the scroll subscription and the
//! startup configuration block.

use campahill_core::{
    Result, ScrollBehavior, ScrollTracker, SectionId, SectionLocator, SiteConfig, SiteError,
    UiState,
};
use leptos::{ev, prelude::*};

/// Id of the optional `<script type="application/json">` config block
pub const CONFIG_ELEMENT_ID: &str = "site-config";

/// Looks sections up by element id in the live document
#[derive(Clone, Copy, Debug, Default)]
pub struct DomSections;

impl SectionLocator for DomSections {
    fn scroll_into_view(&self, section: SectionId, behavior: ScrollBehavior) -> Result<()> {
        let element = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(section.as_str()))
            .ok_or(SiteError::SectionNotRendered(section))?;

        let options = web_sys::ScrollIntoViewOptions::new();
        options.set_behavior(match behavior {
            ScrollBehavior::Smooth => web_sys::ScrollBehavior::Smooth,
            ScrollBehavior::Instant => web_sys::ScrollBehavior::Instant,
        });
        element.scroll_into_view_with_scroll_into_view_options(&options);
        Ok(())
    }
}

/// Read the site config block. Absent or blank means defaults.
pub fn load_config() -> Result<SiteConfig> {
    let raw = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|el| el.text_content());

    match raw {
        Some(raw) if !raw.trim().is_empty() => SiteConfig::from_json(&raw),
        _ => Ok(SiteConfig::default()),
    }
}

fn scroll_offset() -> f64 {
    web_sys::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or_default()
}

/// Keep `state.scrolled` in step with the viewport for the lifetime of the
/// calling owner. The window listener is removed when that owner is
/// cleaned up.
pub fn track_scroll(state: RwSignal<UiState>, tracker: ScrollTracker) {
    // Subscribers are only notified when the flag actually flips.
    let handle = window_event_listener(ev::scroll, move |_| {
        let offset = scroll_offset();
        state.maybe_update(|s| tracker.observe(s, offset));
    });

    tracing::debug!(
        threshold_px = tracker.threshold_px(),
        "scroll listener attached"
    );
    on_cleanup(move || {
        handle.remove();
        tracing::debug!("scroll listener removed");
    });
}
