//! UI components.

pub mod cert_gallery;
pub mod contact_form;
pub mod navbar;
pub mod reveal;
pub mod section;
pub mod theme_toggle;
