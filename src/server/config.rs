//! Server configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::net::SocketAddr;
use std::path::PathBuf;

pub const DEFAULT_ASSETS_DIR: &str = "assets";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid {var}: {value:?}")]
    Invalid { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Overrides the port of the Leptos site address when set.
    pub port: Option<u16>,
    /// Directory served under `/assets`.
    pub assets_dir: PathBuf,
}

impl ServerConfig {
    /// Build typed server config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: listen port, default from `[package.metadata.leptos]`
    /// - `ASSETS_DIR`: certificate image root, default `assets`
    ///
    /// # Errors
    ///
    /// Returns an error if `PORT` is set but not a valid port number.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns an error if `PORT` is set but not a valid port number.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = match lookup("PORT").map(|v| v.trim().to_owned()) {
            None => None,
            Some(raw) if raw.is_empty() => None,
            Some(raw) => Some(raw.parse::<u16>().map_err(|_| ConfigError::Invalid { var: "PORT", value: raw })?),
        };
        let assets_dir = lookup("ASSETS_DIR")
            .filter(|v| !v.trim().is_empty())
            .map_or_else(|| PathBuf::from(DEFAULT_ASSETS_DIR), PathBuf::from);
        Ok(Self { port, assets_dir })
    }

    /// Resolve the listen address, keeping the host of `default`.
    pub fn site_addr(&self, default: SocketAddr) -> SocketAddr {
        match self.port {
            Some(port) => SocketAddr::new(default.ip(), port),
            None => default,
        }
    }
}
