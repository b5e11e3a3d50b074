//! Site content configuration.
//!
//! SYSTEM CONTEXT
//! ==============
//! The certificate catalog, the contact recipient, and the initial gallery
//! category live in `data/site.json`, embedded at build time. Components read
//! a parsed `SiteConfig` from context so the filtering and form logic never
//! touch literal data and can be exercised with synthetic catalogs.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::error::SiteError;
use crate::state::certs::{CATEGORY_TABS, Catalog, Certificate};

const EMBEDDED_SITE_JSON: &str = include_str!("../data/site.json");

/// Parsed site configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SiteConfig {
    pub contact_recipient: String,
    pub default_category: String,
    pub catalog: Catalog,
}

#[derive(Deserialize)]
struct RawSiteConfig {
    contact_recipient: String,
    default_category: String,
    certificates: Vec<Certificate>,
}

impl SiteConfig {
    /// Parse the configuration embedded in the binary.
    ///
    /// # Errors
    ///
    /// Returns an error if the embedded JSON is malformed or invalid.
    pub fn embedded() -> Result<Self, SiteError> {
        Self::from_json(EMBEDDED_SITE_JSON)
    }

    /// Parse a site configuration document.
    ///
    /// # Errors
    ///
    /// Returns [`SiteError::Config`] for malformed JSON and
    /// [`SiteError::InvalidConfig`] for a blank recipient, or a default
    /// category that is blank or names no gallery tab.
    pub fn from_json(raw: &str) -> Result<Self, SiteError> {
        let parsed: RawSiteConfig = serde_json::from_str(raw)?;
        let contact_recipient = parsed.contact_recipient.trim().to_owned();
        if contact_recipient.is_empty() {
            return Err(SiteError::InvalidConfig("contact_recipient is empty".into()));
        }
        let default_category = parsed.default_category.trim().to_owned();
        if default_category.is_empty() {
            return Err(SiteError::InvalidConfig("default_category is empty".into()));
        }
        if !CATEGORY_TABS.iter().any(|tab| tab.category == default_category) {
            return Err(SiteError::InvalidConfig("default_category matches no tab".into()));
        }
        Ok(Self { contact_recipient, default_category, catalog: Catalog::new(parsed.certificates) })
    }
}
