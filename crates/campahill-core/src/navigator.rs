//! Section Navigator
//!
//! Turns a click on a navigation label into a scroll and a state update.
//! A target that cannot be found is ignored: nothing scrolls and the state
//! is left exactly as it was.

use crate::config::SiteConfig;
use crate::error::Result;
use crate::section::SectionId;
use crate::state::UiState;

/// How a section is brought into view
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ScrollBehavior {
    #[default]
    Smooth,
    Instant,
}

/// Finds rendered sections and scrolls them into view.
///
/// Implementations return [`crate::SiteError::SectionNotRendered`] when no
/// element carries the section's id.
pub trait SectionLocator {
    fn scroll_into_view(&self, section: SectionId, behavior: ScrollBehavior) -> Result<()>;
}

/// Result of a navigation request
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Navigation {
    /// Target scrolled into view and marked current
    Scrolled(SectionId),
    /// Target not found; state untouched
    Ignored,
}

impl Navigation {
    /// Whether the target was found and scrolled to
    pub const fn is_scrolled(self) -> bool {
        matches!(self, Self::Scrolled(_))
    }
}

/// Navigation action shared by the desktop and mobile menus
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Navigator {
    behavior: ScrollBehavior,
}

impl Navigator {
    /// Navigator that always scrolls with `behavior`
    pub const fn new(behavior: ScrollBehavior) -> Self {
        Self { behavior }
    }

    /// Smooth or instant scrolling per `smooth_scroll`
    pub fn from_config(config: &SiteConfig) -> Self {
        let behavior = if config.smooth_scroll {
            ScrollBehavior::Smooth
        } else {
            ScrollBehavior::Instant
        };
        Self::new(behavior)
    }

    /// Behavior passed to the locator on every scroll
    pub const fn behavior(&self) -> ScrollBehavior {
        self.behavior
    }

    /// Navigate to the section named `target`.
    pub fn navigate<L>(&self, locator: &L, state: &mut UiState, target: &str) -> Navigation
    where
        L: SectionLocator + ?Sized,
    {
        match self.try_navigate(locator, state, target) {
            Ok(section) => Navigation::Scrolled(section),
            Err(e) => {
                tracing::debug!(target_id = target, error = %e, "navigation ignored");
                Navigation::Ignored
            }
        }
    }

    fn try_navigate<L>(&self, locator: &L, state: &mut UiState, target: &str) -> Result<SectionId>
    where
        L: SectionLocator + ?Sized,
    {
        let section: SectionId = target.parse()?;
        locator.scroll_into_view(section, self.behavior)?;
        state.enter_section(section);
        tracing::debug!(section = %section, "navigated");
        Ok(section)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SiteError;
    use crate::scroll::ScrollTracker;
    use pretty_assertions::assert_eq;
    use std::cell::RefCell;

    /// Stand-in for the DOM: knows which sections are rendered and records
    /// every scroll request.
    struct FakePage {
        rendered: Vec<SectionId>,
        scrolls: RefCell<Vec<(SectionId, ScrollBehavior)>>,
    }

    impl FakePage {
        fn full() -> Self {
            Self::with(&SectionId::ALL)
        }

        fn with(rendered: &[SectionId]) -> Self {
            Self {
                rendered: rendered.to_vec(),
                scrolls: RefCell::new(Vec::new()),
            }
        }

        fn scrolls(&self) -> Vec<(SectionId, ScrollBehavior)> {
            self.scrolls.borrow().clone()
        }
    }

    impl SectionLocator for FakePage {
        fn scroll_into_view(&self, section: SectionId, behavior: ScrollBehavior) -> Result<()> {
            if !self.rendered.contains(&section) {
                return Err(SiteError::SectionNotRendered(section));
            }
            self.scrolls.borrow_mut().push((section, behavior));
            Ok(())
        }
    }

    #[test]
    fn test_navigate_every_section() {
        let page = FakePage::full();
        let navigator = Navigator::default();

        for section in SectionId::ALL {
            let mut state = UiState {
                menu_open: true,
                ..UiState::default()
            };
            let outcome = navigator.navigate(&page, &mut state, section.as_str());

            assert_eq!(outcome, Navigation::Scrolled(section));
            assert!(outcome.is_scrolled());
            assert_eq!(state.current_section, section);
            assert!(!state.menu_open);
        }
        assert_eq!(page.scrolls().len(), 4);
    }

    #[test]
    fn test_unknown_id_is_noop() {
        let page = FakePage::full();
        let mut state = UiState {
            menu_open: true,
            current_section: SectionId::About,
            scrolled: true,
        };
        let before = state.clone();

        let outcome = Navigator::default().navigate(&page, &mut state, "gallery");

        assert_eq!(outcome, Navigation::Ignored);
        assert!(!outcome.is_scrolled());
        assert_eq!(state, before);
        assert!(page.scrolls().is_empty());
    }

    #[test]
    fn test_unrendered_section_is_noop() {
        let page = FakePage::with(&[SectionId::Home, SectionId::About]);
        let mut state = UiState {
            menu_open: true,
            ..UiState::default()
        };
        let before = state.clone();

        let outcome = Navigator::default().navigate(&page, &mut state, "products");

        assert_eq!(outcome, Navigation::Ignored);
        assert_eq!(state, before);
        assert!(page.scrolls().is_empty());
    }

    #[test]
    fn test_behavior_from_config() {
        let page = FakePage::full();
        let config = SiteConfig {
            smooth_scroll: false,
            ..SiteConfig::default()
        };
        let mut state = UiState::new();

        Navigator::from_config(&config).navigate(&page, &mut state, "about");
        Navigator::default().navigate(&page, &mut state, "contact");

        assert_eq!(
            page.scrolls(),
            vec![
                (SectionId::About, ScrollBehavior::Instant),
                (SectionId::Contact, ScrollBehavior::Smooth),
            ]
        );
    }

    #[test]
    fn test_scroll_then_navigate_to_products() {
        let page = FakePage::full();
        let tracker = ScrollTracker::default();
        let navigator = Navigator::default();
        let mut state = UiState::new();

        assert_eq!(state, UiState::default());

        tracker.observe(&mut state, 120.0);
        assert!(state.scrolled);

        navigator.navigate(&page, &mut state, "products");
        assert_eq!(
            state,
            UiState {
                menu_open: false,
                current_section: SectionId::Products,
                scrolled: true,
            }
        );
        assert_eq!(
            page.scrolls(),
            vec![(SectionId::Products, ScrollBehavior::Smooth)]
        );
    }

    #[test]
    fn test_mobile_menu_closes_after_navigation() {
        let page = FakePage::full();
        let mut state = UiState::new();

        state.toggle_menu();
        assert!(state.menu_open);

        Navigator::default().navigate(&page, &mut state, "contact");
        assert_eq!(state.current_section, SectionId::Contact);
        assert!(!state.menu_open);
    }
}
