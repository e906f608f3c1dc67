//! # campahill-core
//!
//! Target-independent model behind the CampaHill Weddings page.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                         UiState                              │
//! │   scrolled ◄── ScrollTracker ◄── viewport scroll events      │
//! │   current_section, menu_open ◄── Navigator ◄── label clicks  │
//! │                                     │                        │
//! │                                     ▼                        │
//! │                             SectionLocator (DOM / fake)      │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! The `SectionLocator` trait is the only seam between the navigation
//! model and rendered markup, so everything here runs and tests natively.

pub mod catalog;
pub mod config;
pub mod contact;
pub mod error;
pub mod navigator;
pub mod scroll;
pub mod section;
pub mod state;

pub use catalog::{ContactDetail, Glyph, NavItem, Product, Stat};
pub use config::SiteConfig;
pub use contact::{ContactDraft, ContactField};
pub use error::{Result, SiteError};
pub use navigator::{Navigation, Navigator, ScrollBehavior, SectionLocator};
pub use scroll::ScrollTracker;
pub use section::SectionId;
pub use state::UiState;

/// Brand name shown in the navigation bar
pub const BRAND_NAME: &str = "CampaHill";

/// Brand subtitle shown under the name
pub const BRAND_TAGLINE: &str = "Weddings";
