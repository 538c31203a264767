//! CV download gated behind a lead-capture form.
//!
//! DESIGN
//! ======
//! `LeadGate` is an explicit widget instance: it owns the modal state and the
//! download counter, and persists through an injected `KeyValueStore`. The
//! two overlays (contact form, success notice) are a single `ModalState`, so
//! at most one can ever be visible.
//!
//! ```text
//!   Idle --open_contact--> ContactOpen --submit--> SuccessOpen
//!    ^                         |                       |
//!    +------- close / backdrop click ------------------+
//! ```
//!
//! Configuration is validated when the gate is built, so a missing download
//! target is reported up front instead of failing inside a click handler.

#[cfg(test)]
#[path = "lead_gate_test.rs"]
mod lead_gate_test;

use crate::util::storage::{KeyValueStore, read_count, write_count};

/// Storage key for the CV download counter.
pub const CV_COUNTER_KEY: &str = "cvDownloadCount";
pub const DEFAULT_CV_HREF: &str = "/cv/resume.pdf";
pub const DEFAULT_CV_FILE_NAME: &str = "resume.pdf";

/// Which overlay, if any, is currently shown.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ModalState {
    #[default]
    Idle,
    ContactOpen,
    SuccessOpen,
}

impl ModalState {
    #[must_use]
    pub fn contact_visible(self) -> bool {
        self == Self::ContactOpen
    }

    #[must_use]
    pub fn success_visible(self) -> bool {
        self == Self::SuccessOpen
    }
}

/// The two overlays owned by the gate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModalKind {
    Contact,
    Success,
}

/// Where a pointer event landed relative to the overlays.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerTarget {
    /// The dimmed area around a modal's content box.
    Backdrop(ModalKind),
    /// Anywhere inside a modal's content box.
    Content,
    /// Somewhere else on the page.
    Elsewhere,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("lead gate counter key must not be empty")]
    EmptyCounterKey,
    #[error("lead gate download href must not be empty")]
    EmptyDownloadHref,
    #[error("lead gate download file name must not be empty")]
    EmptyDownloadName,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum LeadGateError {
    #[error("email is required")]
    MissingEmail,
    #[error("mobile number is required")]
    MissingMobile,
    #[error("lead form is not open (state: {0:?})")]
    NotOpen(ModalState),
}

/// Static wiring for one gate instance.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LeadGateConfig {
    pub counter_key: String,
    pub download_href: String,
    pub download_name: String,
}

impl Default for LeadGateConfig {
    fn default() -> Self {
        Self {
            counter_key: CV_COUNTER_KEY.to_owned(),
            download_href: DEFAULT_CV_HREF.to_owned(),
            download_name: DEFAULT_CV_FILE_NAME.to_owned(),
        }
    }
}

impl LeadGateConfig {
    /// Check that every handle the gate needs is present.
    ///
    /// # Errors
    ///
    /// Returns the first empty field found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.counter_key.trim().is_empty() {
            return Err(ConfigError::EmptyCounterKey);
        }
        if self.download_href.trim().is_empty() {
            return Err(ConfigError::EmptyDownloadHref);
        }
        if self.download_name.trim().is_empty() {
            return Err(ConfigError::EmptyDownloadName);
        }
        Ok(())
    }
}

/// Captured contact details. Logged once, never stored.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LeadRecord {
    pub email: String,
    pub mobile: String,
}

impl LeadRecord {
    /// Build a record from raw form values. Only presence is checked.
    ///
    /// # Errors
    ///
    /// Returns `MissingEmail` or `MissingMobile` for blank fields.
    pub fn from_form(email: &str, mobile: &str) -> Result<Self, LeadGateError> {
        if email.trim().is_empty() {
            return Err(LeadGateError::MissingEmail);
        }
        if mobile.trim().is_empty() {
            return Err(LeadGateError::MissingMobile);
        }
        Ok(Self { email: email.to_owned(), mobile: mobile.to_owned() })
    }
}

/// File the browser should fetch after a successful submission.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Download {
    pub href: String,
    pub file_name: String,
}

/// Result of an accepted submission. The caller triggers `download` and
/// clears the form fields.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Submission {
    pub count: u64,
    pub download: Download,
}

/// Lead-gated CV download widget.
#[derive(Clone, Debug)]
pub struct LeadGate<S> {
    store: S,
    config: LeadGateConfig,
    state: ModalState,
    count: u64,
}

impl<S: KeyValueStore> LeadGate<S> {
    /// Validate `config` and load the persisted counter from `store`.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if any configured handle is empty.
    pub fn new(store: S, config: LeadGateConfig) -> Result<Self, ConfigError> {
        let mut gate = Self::deferred(store, config)?;
        gate.reload();
        Ok(gate)
    }

    /// Validate `config` but leave the counter at zero until `reload`.
    ///
    /// The page renders `0` on the server; reading storage only after the
    /// view is hydrated makes the first real value a change the DOM sees.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if any configured handle is empty.
    pub fn deferred(store: S, config: LeadGateConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { store, config, state: ModalState::Idle, count: 0 })
    }

    #[must_use]
    pub fn state(&self) -> ModalState {
        self.state
    }

    #[must_use]
    pub fn count(&self) -> u64 {
        self.count
    }

    /// Counter text as shown on the page.
    #[must_use]
    pub fn count_text(&self) -> String {
        self.count.to_string()
    }

    #[must_use]
    pub fn config(&self) -> &LeadGateConfig {
        &self.config
    }

    /// Re-read the counter from the store (page load).
    pub fn reload(&mut self) {
        self.count = read_count(&self.store, &self.config.counter_key);
    }

    /// Show the lead form.
    pub fn open_contact(&mut self) {
        self.state = ModalState::ContactOpen;
    }

    /// Hide whichever overlay is open. Idempotent.
    pub fn close(&mut self) {
        self.state = ModalState::Idle;
    }

    /// Close when the pointer landed on the open modal's backdrop.
    ///
    /// Returns `true` if the gate transitioned to `Idle`.
    pub fn backdrop_click(&mut self, target: PointerTarget) -> bool {
        let hit = matches!(
            (self.state, target),
            (ModalState::ContactOpen, PointerTarget::Backdrop(ModalKind::Contact))
                | (ModalState::SuccessOpen, PointerTarget::Backdrop(ModalKind::Success))
        );
        if hit {
            self.close();
        }
        hit
    }

    /// Accept the lead form.
    ///
    /// Logs the lead, bumps and persists the counter, and swaps the contact
    /// form for the success notice.
    ///
    /// # Errors
    ///
    /// `NotOpen` if the form is not showing, `MissingEmail`/`MissingMobile`
    /// for blank fields. State and counter are untouched on error.
    pub fn submit(&mut self, email: &str, mobile: &str) -> Result<Submission, LeadGateError> {
        if self.state != ModalState::ContactOpen {
            return Err(LeadGateError::NotOpen(self.state));
        }
        let lead = LeadRecord::from_form(email, mobile)?;
        log::info!("lead captured: email={} mobile={}", lead.email, lead.mobile);

        self.count = self.count.saturating_add(1);
        write_count(&self.store, &self.config.counter_key, self.count);
        self.state = ModalState::SuccessOpen;

        Ok(Submission {
            count: self.count,
            download: Download {
                href: self.config.download_href.clone(),
                file_name: self.config.download_name.clone(),
            },
        })
    }
}
