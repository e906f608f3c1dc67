//! Contact Form
//!
//! Holds what a visitor types into the contact form. There is no submission
//! backend yet: [`ContactDraft::submit`] always reports
//! [`SiteError::ContactNotConnected`] and keeps the typed values.

use crate::error::{Result, SiteError};

/// Input fields of the contact form
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Message,
}

impl ContactField {
    pub const ALL: [ContactField; 3] = [
        ContactField::Name,
        ContactField::Email,
        ContactField::Message,
    ];

    /// Visible field label
    pub const fn label(self) -> &'static str {
        match self {
            ContactField::Name => "Name",
            ContactField::Email => "Email",
            ContactField::Message => "Message",
        }
    }

    /// Hint shown while the field is empty
    pub const fn placeholder(self) -> &'static str {
        match self {
            ContactField::Name => "Your Name",
            ContactField::Email => "your@email.com",
            ContactField::Message => "Tell us about your event planning needs...",
        }
    }
}

/// Text currently held by the contact form
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactDraft {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactDraft {
    /// Empty draft
    pub fn new() -> Self {
        Self::default()
    }

    /// Current text of `field`
    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Message => &self.message,
        }
    }

    /// Replace a field's text verbatim. No validation.
    pub fn set(&mut self, field: ContactField, value: impl Into<String>) {
        let slot = match field {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Message => &mut self.message,
        };
        *slot = value.into();
    }

    /// True when every field is blank
    pub fn is_empty(&self) -> bool {
        ContactField::ALL.iter().all(|f| self.get(*f).is_empty())
    }

    /// Submit the draft.
    ///
    /// Contact capture is not implemented: nothing is sent, validated or
    /// stored, and the draft is left as typed.
    pub fn submit(&self) -> Result<()> {
        tracing::warn!(
            empty = self.is_empty(),
            "contact form submitted but no backend is connected"
        );
        Err(SiteError::ContactNotConnected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_and_get() {
        let mut draft = ContactDraft::new();
        assert!(draft.is_empty());

        draft.set(ContactField::Name, "Sita");
        draft.set(ContactField::Email, "not-an-email");
        draft.set(ContactField::Message, "Need 40 thalis in March");

        assert_eq!(draft.get(ContactField::Name), "Sita");
        assert_eq!(draft.get(ContactField::Email), "not-an-email");
        assert_eq!(draft.message, "Need 40 thalis in March");
        assert!(!draft.is_empty());
    }

    #[test]
    fn test_submit_is_not_connected_and_keeps_values() {
        let mut draft = ContactDraft::new();
        draft.set(ContactField::Name, "Ram");
        let before = draft.clone();

        let err = draft.submit().unwrap_err();
        assert!(matches!(err, SiteError::ContactNotConnected));
        assert_eq!(draft, before);
    }

    #[test]
    fn test_empty_submit_also_fails_quietly() {
        assert!(ContactDraft::new().submit().is_err());
    }

    #[test]
    fn test_field_labels() {
        let labels: Vec<_> = ContactField::ALL.iter().map(|f| f.label()).collect();
        assert_eq!(labels, ["Name", "Email", "Message"]);
        assert_eq!(ContactField::Email.placeholder(), "your@email.com");
    }
}
