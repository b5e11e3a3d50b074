use super::*;
use crate::state::certs::GalleryState;

const SYNTHETIC: &str = r#"{
    "contact_recipient": "  me@example.com ",
    "default_category": " NPTEL ",
    "certificates": [
        {"title": "A", "org": "Org A", "year": "2020", "category": "NPTEL", "image": "a.jpg", "icon": "fas fa-a"},
        {"title": "B", "org": "Org B", "year": "2021", "category": "NPTEL Labs", "image": "b.jpg", "icon": "fas fa-b"}
    ]
}"#;

#[test]
fn embedded_config_parses() {
    let config = SiteConfig::embedded().expect("embedded config");
    assert_eq!(config.contact_recipient, "adarsh.official2011@gmail.com");
    assert_eq!(config.default_category, "Workshops");
    assert_eq!(config.catalog.len(), 18);
}

#[test]
fn synthetic_config_trims_scalars() {
    let config = SiteConfig::from_json(SYNTHETIC).expect("synthetic config");
    assert_eq!(config.contact_recipient, "me@example.com");
    assert_eq!(config.default_category, "NPTEL");
    assert_eq!(config.catalog.len(), 2);
}

#[test]
fn default_category_outside_tab_list_is_rejected() {
    let raw = r#"{"contact_recipient": "a@b.c", "default_category": "Talks", "certificates": []}"#;
    let err = SiteConfig::from_json(raw).unwrap_err();
    assert!(matches!(err, SiteError::InvalidConfig(_)));
    assert_eq!(err.to_string(), "site config invalid: default_category matches no tab");
}

#[test]
fn accepted_default_category_activates_exactly_one_tab() {
    let config = SiteConfig::from_json(SYNTHETIC).expect("synthetic config");
    let gallery = GalleryState::new(&config.default_category);
    let active = CATEGORY_TABS.iter().filter(|tab| gallery.is_active(tab.category)).count();
    assert_eq!(active, 1);
}

#[test]
fn malformed_json_is_config_error() {
    let err = SiteConfig::from_json("{ not json").unwrap_err();
    assert!(matches!(err, SiteError::Config(_)));
}

#[test]
fn missing_certificates_field_is_config_error() {
    let err = SiteConfig::from_json(r#"{"contact_recipient": "a@b.c", "default_category": "X"}"#).unwrap_err();
    assert!(matches!(err, SiteError::Config(_)));
}

#[test]
fn blank_recipient_is_rejected() {
    let raw = r#"{"contact_recipient": "  ", "default_category": "X", "certificates": []}"#;
    let err = SiteConfig::from_json(raw).unwrap_err();
    assert!(matches!(err, SiteError::InvalidConfig(_)));
    assert_eq!(err.to_string(), "site config invalid: contact_recipient is empty");
}

#[test]
fn blank_default_category_is_rejected() {
    let raw = r#"{"contact_recipient": "a@b.c", "default_category": "", "certificates": []}"#;
    assert!(matches!(SiteConfig::from_json(raw), Err(SiteError::InvalidConfig(_))));
}
