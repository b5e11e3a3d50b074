//! `mailto:` URL construction.
//!
//! Header values are percent-encoded so that spaces, newlines, `&`, and `=`
//! in user input cannot break out of their field.

#[cfg(test)]
#[path = "mailto_test.rs"]
mod mailto_test;

use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MailtoLink {
    recipient: String,
    headers: Vec<(&'static str, String)>,
}

impl MailtoLink {
    pub fn new(recipient: impl Into<String>) -> Self {
        Self { recipient: recipient.into(), headers: Vec::new() }
    }

    #[must_use]
    pub fn subject(mut self, subject: impl Into<String>) -> Self {
        self.headers.push(("subject", subject.into()));
        self
    }

    #[must_use]
    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.headers.push(("body", body.into()));
        self
    }
}

impl fmt::Display for MailtoLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "mailto:{}", self.recipient)?;
        for (i, (name, value)) in self.headers.iter().enumerate() {
            let sep = if i == 0 { '?' } else { '&' };
            write!(f, "{sep}{name}={}", urlencoding::encode(value))?;
        }
        Ok(())
    }
}
