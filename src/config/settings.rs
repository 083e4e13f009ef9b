//! Settings structures for pixabay-rs configuration

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Root of the search endpoint for the current API version
pub const DEFAULT_BASE_URL: &str = "https://pixabay.com/api/";

/// Main settings structure, read from `pixabay.yml`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub pixabay: PixabaySettings,
    pub outgoing: OutgoingSettings,
}

impl Settings {
    /// Load settings from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse settings from a YAML string
    pub fn from_yaml(content: &str) -> Result<Self> {
        let settings: Settings = serde_yaml::from_str(content)?;
        Ok(settings)
    }

    /// Merge with environment variables (PIXABAY_* prefix)
    pub fn merge_env(&mut self) {
        self.merge_vars(|name| std::env::var(name).ok());
    }

    fn merge_vars<F>(&mut self, var: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(val) = var("PIXABAY_API_KEY") {
            self.pixabay.api_key = Some(val);
        }
        if let Some(val) = var("PIXABAY_BASE_URL") {
            self.pixabay.base_url = val;
        }
        if let Some(val) = var("PIXABAY_VALIDATE") {
            self.pixabay.validate_locally = val.parse().unwrap_or(false);
        }
    }
}

/// API access settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PixabaySettings {
    /// API key from https://pixabay.com/api/docs/
    pub api_key: Option<String>,
    /// Search endpoint; video searches append `videos/`
    pub base_url: String,
    /// Check filter values locally before sending them
    pub validate_locally: bool,
}

impl Default for PixabaySettings {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            validate_locally: false,
        }
    }
}

/// Outgoing request settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutgoingSettings {
    /// Request timeout in seconds (none = transport default)
    pub request_timeout: Option<f64>,
    /// Pool max idle connections per host
    pub pool_maxsize: usize,
    /// Verify SSL certificates
    pub verify_ssl: bool,
    /// Proxy settings
    pub proxies: ProxySettings,
    /// User agent string (none = crate name and version)
    pub user_agent: Option<String>,
}

impl Default for OutgoingSettings {
    fn default() -> Self {
        Self {
            request_timeout: None,
            pool_maxsize: 10,
            verify_ssl: true,
            proxies: ProxySettings::default(),
            user_agent: None,
        }
    }
}

/// Proxy settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProxySettings {
    pub http: Option<String>,
    pub https: Option<String>,
    pub all: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.pixabay.base_url, DEFAULT_BASE_URL);
        assert!(settings.pixabay.api_key.is_none());
        assert!(!settings.pixabay.validate_locally);
        assert!(settings.outgoing.request_timeout.is_none());
        assert!(settings.outgoing.verify_ssl);
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let yaml = r#"
pixabay:
  api_key: "abc123"
outgoing:
  request_timeout: 2.5
  proxies:
    https: "http://proxy.local:3128"
"#;
        let settings = Settings::from_yaml(yaml).unwrap();
        assert_eq!(settings.pixabay.api_key.as_deref(), Some("abc123"));
        assert_eq!(settings.pixabay.base_url, DEFAULT_BASE_URL);
        assert_eq!(settings.outgoing.request_timeout, Some(2.5));
        assert_eq!(
            settings.outgoing.proxies.https.as_deref(),
            Some("http://proxy.local:3128")
        );
        assert_eq!(settings.outgoing.pool_maxsize, 10);
    }

    #[test]
    fn test_env_overrides() {
        let vars: HashMap<&str, &str> = [
            ("PIXABAY_API_KEY", "from-env"),
            ("PIXABAY_BASE_URL", "http://localhost:9000/api/"),
            ("PIXABAY_VALIDATE", "true"),
        ]
        .into_iter()
        .collect();

        let mut settings = Settings::from_yaml("pixabay:\n  api_key: from-file\n").unwrap();
        settings.merge_vars(|name| vars.get(name).map(|v| v.to_string()));

        assert_eq!(settings.pixabay.api_key.as_deref(), Some("from-env"));
        assert_eq!(settings.pixabay.base_url, "http://localhost:9000/api/");
        assert!(settings.pixabay.validate_locally);
    }

    #[test]
    fn test_invalid_validate_flag_is_false() {
        let mut settings = Settings::default();
        settings.merge_vars(|name| (name == "PIXABAY_VALIDATE").then(|| "yes".to_string()));
        assert!(!settings.pixabay.validate_locally);
    }
}
