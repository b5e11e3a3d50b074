//! Certificate catalog and gallery tab state.
//!
//! DESIGN
//! ======
//! The catalog is an immutable, ordered list loaded from site configuration.
//! A record's `category` is a whitespace-separated tag set and filtering is a
//! plain substring match, so a record tagged `"Workshops IEEE"` shows under
//! both tabs. The gallery keeps only the active tab; the visible cards are
//! recomputed from scratch on every selection.

#[cfg(test)]
#[path = "certs_test.rs"]
mod certs_test;

use serde::{Deserialize, Serialize};

/// One certificate record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Certificate {
    pub title: String,
    pub org: String,
    /// Year, optionally annotated (e.g. `"2024 (7 Days)"`).
    pub year: String,
    pub category: String,
    /// Relative path to the certificate image.
    pub image: String,
    /// Font Awesome classes for the card icon.
    pub icon: String,
}

impl Certificate {
    pub fn matches(&self, filter: &str) -> bool {
        self.category.contains(filter)
    }
}

/// Ordered, read-only certificate list.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Catalog {
    records: Vec<Certificate>,
}

impl Catalog {
    pub fn new(records: Vec<Certificate>) -> Self {
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[Certificate] {
        &self.records
    }

    /// Records whose category contains `filter`, in catalog order.
    pub fn filter(&self, filter: &str) -> Vec<Certificate> {
        self.records.iter().filter(|c| c.matches(filter)).cloned().collect()
    }
}

/// A gallery tab and the category tag it selects.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CategoryTab {
    pub label: &'static str,
    pub category: &'static str,
}

/// Tabs shown above the certificate grid, in display order.
pub static CATEGORY_TABS: [CategoryTab; 6] = [
    CategoryTab { label: "Workshops", category: "Workshops" },
    CategoryTab { label: "Bootcamps", category: "Bootcamps" },
    CategoryTab { label: "Internships", category: "Internships" },
    CategoryTab { label: "Govt / Institutional", category: "Govt" },
    CategoryTab { label: "IEEE", category: "IEEE" },
    CategoryTab { label: "NPTEL", category: "NPTEL" },
];

/// Gallery state: exactly one active category.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GalleryState {
    pub active: String,
}

impl GalleryState {
    pub fn new(default_category: impl Into<String>) -> Self {
        Self { active: default_category.into() }
    }

    /// Activate the tab carrying `category`.
    pub fn select(&mut self, category: &str) {
        category.clone_into(&mut self.active);
    }

    pub fn is_active(&self, category: &str) -> bool {
        self.active == category
    }

    /// Cards for the active category.
    pub fn visible(&self, catalog: &Catalog) -> Vec<Certificate> {
        catalog.filter(&self.active)
    }
}
