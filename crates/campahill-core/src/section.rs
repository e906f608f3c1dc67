//! Section Identifiers
//!
//! The four page regions addressable by the navigator. The string form of
//! each id is the DOM id of its rendered container.

use std::fmt;
use std::str::FromStr;

use crate::error::SiteError;

/// One of the four fixed page sections
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SectionId {
    #[default]
    Home,
    About,
    Products,
    Contact,
}

impl SectionId {
    /// All sections in page order
    pub const ALL: [SectionId; 4] = [
        SectionId::Home,
        SectionId::About,
        SectionId::Products,
        SectionId::Contact,
    ];

    /// DOM id of the section container
    pub const fn as_str(self) -> &'static str {
        match self {
            SectionId::Home => "home",
            SectionId::About => "about",
            SectionId::Products => "products",
            SectionId::Contact => "contact",
        }
    }
}

impl FromStr for SectionId {
    type Err = SiteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SectionId::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| SiteError::UnknownSection(s.to_string()))
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
