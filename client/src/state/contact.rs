//! Contact form draft and submission status.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use serde::{Deserialize, Serialize};

/// Fields of the contact form, sent as JSON.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactDraft {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub subject: String,
    pub message: String,
}

impl ContactDraft {
    /// Presence check matching the form's `required` attributes.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        [&self.name, &self.email, &self.message]
            .iter()
            .all(|field| !field.trim().is_empty())
    }
}

/// How a submission ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactOutcome {
    /// Endpoint answered 2xx.
    Sent,
    /// Endpoint answered with any other status.
    Rejected,
    /// The request never completed.
    Failed,
}

impl ContactOutcome {
    #[must_use]
    pub fn from_status(status: u16) -> Self {
        if (200..300).contains(&status) { Self::Sent } else { Self::Rejected }
    }

    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            Self::Sent => "✅ Thank you! Your message has been sent.",
            Self::Rejected => "⚠️ Oops! Something went wrong. Try again later.",
            Self::Failed => "❌ Error sending message. Please check your internet connection.",
        }
    }

    /// Whether the form should be reset.
    #[must_use]
    pub fn clears_form(self) -> bool {
        self == Self::Sent
    }
}

/// Reactive state for the contact section.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactState {
    pub draft: ContactDraft,
    pub sending: bool,
    pub outcome: Option<ContactOutcome>,
}

impl ContactState {
    /// Apply a finished submission.
    pub fn finish(&mut self, outcome: ContactOutcome) {
        self.sending = false;
        self.outcome = Some(outcome);
        if outcome.clears_form() {
            self.draft = ContactDraft::default();
        }
    }
}
