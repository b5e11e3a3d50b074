use std::collections::HashMap;

use super::*;

fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = vars.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| map.get(key).cloned()
}

#[test]
fn defaults_when_unset() {
    let config = ServerConfig::from_lookup(lookup(&[])).unwrap();
    assert_eq!(config.port, None);
    assert_eq!(config.assets_dir, PathBuf::from("assets"));
}

#[test]
fn port_and_assets_dir_are_read() {
    let config = ServerConfig::from_lookup(lookup(&[("PORT", " 8080 "), ("ASSETS_DIR", "/srv/site/assets")])).unwrap();
    assert_eq!(config.port, Some(8080));
    assert_eq!(config.assets_dir, PathBuf::from("/srv/site/assets"));
}

#[test]
fn blank_values_fall_back_to_defaults() {
    let config = ServerConfig::from_lookup(lookup(&[("PORT", ""), ("ASSETS_DIR", "  ")])).unwrap();
    assert_eq!(config.port, None);
    assert_eq!(config.assets_dir, PathBuf::from(DEFAULT_ASSETS_DIR));
}

#[test]
fn invalid_port_is_rejected() {
    let err = ServerConfig::from_lookup(lookup(&[("PORT", "http")])).unwrap_err();
    assert_eq!(err, ConfigError::Invalid { var: "PORT", value: "http".into() });
    assert_eq!(err.to_string(), "invalid PORT: \"http\"");
    assert!(ServerConfig::from_lookup(lookup(&[("PORT", "70000")])).is_err());
}

#[test]
fn site_addr_overrides_port_only() {
    let default: SocketAddr = "127.0.0.1:3000".parse().unwrap();
    let unchanged = ServerConfig::from_lookup(lookup(&[])).unwrap();
    assert_eq!(unchanged.site_addr(default), default);

    let overridden = ServerConfig::from_lookup(lookup(&[("PORT", "9000")])).unwrap();
    assert_eq!(overridden.site_addr(default), "127.0.0.1:9000".parse().unwrap());
}
