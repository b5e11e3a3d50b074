//! Error types shared across the site.

/// Startup and environment failures for the client application.
#[derive(Debug, thiserror::Error)]
pub enum SiteError {
    /// The embedded site configuration could not be parsed.
    #[error("site config parse failed: {0}")]
    Config(#[from] serde_json::Error),

    /// The site configuration parsed but is unusable.
    #[error("site config invalid: {0}")]
    InvalidConfig(String),

    /// The browser refused to construct a viewport watcher.
    #[error("viewport watcher setup failed: {0}")]
    Watcher(String),
}
