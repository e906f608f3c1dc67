//! Scroll Tracker
//!
//! Derives the "scrolled" flag from the viewport's vertical offset.

use crate::config::SiteConfig;
use crate::state::UiState;

/// Default threshold, in CSS pixels
pub const DEFAULT_SCROLL_THRESHOLD_PX: f64 = 50.0;

/// Maps scroll offsets onto [`UiState::scrolled`]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollTracker {
    threshold_px: f64,
}

impl Default for ScrollTracker {
    fn default() -> Self {
        Self::new(DEFAULT_SCROLL_THRESHOLD_PX)
    }
}

impl ScrollTracker {
    /// Tracker flipping the flag once the offset passes `threshold_px`
    pub const fn new(threshold_px: f64) -> Self {
        Self { threshold_px }
    }

    /// Tracker using the configured threshold
    pub fn from_config(config: &SiteConfig) -> Self {
        Self::new(config.scroll_threshold_px)
    }

    /// Threshold in CSS pixels
    pub const fn threshold_px(&self) -> f64 {
        self.threshold_px
    }

    /// Strictly past the threshold. NaN never counts as scrolled.
    pub fn is_scrolled(&self, offset_px: f64) -> bool {
        offset_px > self.threshold_px
    }

    /// Apply one scroll event, returning whether the flag changed.
    pub fn observe(&self, state: &mut UiState, offset_px: f64) -> bool {
        let changed = state.set_scrolled(self.is_scrolled(offset_px));
        if changed {
            tracing::trace!(
                offset_px,
                scrolled = state.scrolled,
                "scroll threshold crossed"
            );
        }
        changed
    }
}
