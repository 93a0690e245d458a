//! Base-URL configuration.

/// Base URL used when no override is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// Environment variable that overrides [`DEFAULT_BASE_URL`].
pub const BASE_URL_ENV: &str = "PLACES_API_BASE";

/// Configuration injected into `PlacesClient` at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Resolve the base URL from `PLACES_API_BASE`, falling back to the default.
    pub fn from_env() -> Self {
        Self::from_override(std::env::var(BASE_URL_ENV).ok())
    }

    /// An unset or empty override yields the default base URL.
    pub fn from_override(value: Option<String>) -> Self {
        match value {
            Some(url) if !url.is_empty() => Self::new(url),
            _ => Self::default(),
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}
