/// Backend used when neither a flag nor `BI_API_BASE` is given.
pub const DEFAULT_API_BASE: &str = "http://localhost:5000";

/// Environment variable consulted for the backend base URL.
pub const API_BASE_ENV: &str = "BI_API_BASE";

pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Connection settings for the REST backend.
///
/// An empty `base_url` means "same origin": endpoints are rendered as
/// relative `/api/...` paths, which is what the browser build uses.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout_secs: u64,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Same-origin configuration for the browser.
    pub fn same_origin() -> Self {
        Self::new("")
    }

    /// Read the base URL from `BI_API_BASE`, falling back to the default.
    pub fn from_env() -> Self {
        match std::env::var(API_BASE_ENV) {
            Ok(base) if !base.trim().is_empty() => Self::new(base.trim()),
            _ => Self::default(),
        }
    }

    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_is_trimmed() {
        let config = ApiConfig::new("http://example.com:8080/");
        assert_eq!(config.base_url, "http://example.com:8080");
    }

    #[test]
    fn test_same_origin_has_empty_base() {
        let config = ApiConfig::same_origin();
        assert!(config.base_url.is_empty());
        assert_eq!(config.timeout_secs, DEFAULT_TIMEOUT_SECS);
    }

    #[test]
    fn test_with_timeout_overrides_default() {
        let config = ApiConfig::default().with_timeout(5);
        assert_eq!(config.base_url, DEFAULT_API_BASE);
        assert_eq!(config.timeout_secs, 5);
    }
}
