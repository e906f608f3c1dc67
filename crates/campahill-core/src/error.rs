//! Error Types

use thiserror::Error;

use crate::section::SectionId;

/// Result type alias for site operations
pub type Result<T> = std::result::Result<T, SiteError>;

/// Site error types
///
/// None of these are shown to visitors. The UI layer absorbs them and logs.
#[derive(Error, Debug)]
pub enum SiteError {
    /// Identifier does not name one of the four sections
    #[error("Unknown section: {0}")]
    UnknownSection(String),

    /// Section is known but no rendered element carries its id
    #[error("Section not rendered: {0}")]
    SectionNotRendered(SectionId),

    /// The contact form has no submission backend
    #[error("Contact form is not connected to a backend")]
    ContactNotConnected,

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl SiteError {
    /// Whether the error means a navigation target could not be found.
    pub fn is_missing_target(&self) -> bool {
        matches!(
            self,
            SiteError::UnknownSection(_) | SiteError::SectionNotRendered(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_target_classification() {
        assert!(SiteError::UnknownSection("gallery".into()).is_missing_target());
        assert!(SiteError::SectionNotRendered(SectionId::About).is_missing_target());
        assert!(!SiteError::ContactNotConnected.is_missing_target());
        assert!(!SiteError::Config("bad".into()).is_missing_target());
    }

    #[test]
    fn test_display_names_section() {
        let err = SiteError::SectionNotRendered(SectionId::Products);
        assert_eq!(err.to_string(), "Section not rendered: products");
    }
}
