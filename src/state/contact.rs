//! Contact form validation and submit-feedback state.
//!
//! DESIGN
//! ======
//! Submission never leaves the browser: a valid form becomes a `mailto:` link
//! handed to the user's mail client. The button walks through
//! `Idle -> Preparing -> Ready -> Idle` on fixed delays so the user sees the
//! handoff happen.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use std::sync::LazyLock;
use std::time::Duration;

use regex::Regex;

use crate::util::mailto::MailtoLink;

/// Delay between accepting the form and opening the mail client.
pub const PREPARE_DELAY: Duration = Duration::from_millis(1000);
/// Delay between opening the mail client and resetting the form.
pub const RESET_DELAY: Duration = Duration::from_millis(3000);

/// Label shown on the submit button while idle.
pub const IDLE_LABEL: &str = "Send Message";

const EMAIL_PATTERN_SRC: &str = r"^\S+@\S+\.\S+$";

static EMAIL_PATTERN: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(EMAIL_PATTERN_SRC).ok());

/// Validation failures, displayed verbatim to the user.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ContactError {
    #[error("Please fill in all fields.")]
    MissingField,
    #[error("Please enter a valid email address.")]
    InvalidEmail,
}

/// Raw field values as typed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactFields {
    /// Trim and validate the fields.
    ///
    /// Emptiness is checked before the email shape, so a form with a blank
    /// field always reports `MissingField`.
    ///
    /// # Errors
    ///
    /// Returns the first validation failure.
    pub fn validate(&self) -> Result<ContactMessage, ContactError> {
        let name = self.name.trim();
        let email = self.email.trim();
        let message = self.message.trim();
        if name.is_empty() || email.is_empty() || message.is_empty() {
            return Err(ContactError::MissingField);
        }
        if !is_valid_email(email) {
            return Err(ContactError::InvalidEmail);
        }
        Ok(ContactMessage { name: name.to_owned(), email: email.to_owned(), message: message.to_owned() })
    }

    pub fn clear(&mut self) {
        self.name.clear();
        self.email.clear();
        self.message.clear();
    }
}

/// Loose `something@something.something` check.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.as_ref().is_some_and(|re| re.is_match(email))
}

/// A validated message ready to be handed to the mail client.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactMessage {
    pub fn subject(&self) -> String {
        format!("Portfolio Inquiry from {}", self.name)
    }

    pub fn body(&self) -> String {
        format!("Name: {}\nEmail: {}\n\nMessage:\n{}", self.name, self.email, self.message)
    }

    /// `mailto:` URL addressed to `recipient`.
    pub fn mailto(&self, recipient: &str) -> String {
        MailtoLink::new(recipient).subject(self.subject()).body(self.body()).to_string()
    }
}

/// Submit button phase.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmitPhase {
    #[default]
    Idle,
    /// Accepted; waiting to open the mail client.
    Preparing,
    /// Mail client opened; waiting to reset the form.
    Ready,
}

impl SubmitPhase {
    pub fn label(self) -> &'static str {
        match self {
            Self::Idle => IDLE_LABEL,
            Self::Preparing => "Preparing Email...",
            Self::Ready => "Message Ready!",
        }
    }

    /// Inline background override; empty clears the override.
    pub fn background(self) -> &'static str {
        match self {
            Self::Idle => "",
            Self::Preparing => "var(--accent-teal)",
            Self::Ready => "#00ff88",
        }
    }

    /// Inline text color override; empty clears the override.
    pub fn color(self) -> &'static str {
        match self {
            Self::Idle => "",
            Self::Preparing | Self::Ready => "#000",
        }
    }

    pub fn is_busy(self) -> bool {
        self != Self::Idle
    }
}

/// Contact form state: fields plus the button phase.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactState {
    pub fields: ContactFields,
    pub phase: SubmitPhase,
}

impl ContactState {
    /// Handle a submit. On success the state moves to `Preparing` and the
    /// message is returned for the delayed handoff.
    ///
    /// # Errors
    ///
    /// Returns the validation failure and leaves the state unchanged.
    /// Submitting while a previous handoff is in flight yields `Ok(None)`.
    pub fn submit(&mut self) -> Result<Option<ContactMessage>, ContactError> {
        if self.phase.is_busy() {
            return Ok(None);
        }
        let message = self.fields.validate()?;
        self.phase = SubmitPhase::Preparing;
        Ok(Some(message))
    }

    /// First delay elapsed: the mail client has been opened.
    pub fn mark_ready(&mut self) {
        if self.phase == SubmitPhase::Preparing {
            self.phase = SubmitPhase::Ready;
        }
    }

    /// Second delay elapsed: restore the button and clear the form.
    pub fn reset(&mut self) {
        self.phase = SubmitPhase::Idle;
        self.fields.clear();
    }
}
