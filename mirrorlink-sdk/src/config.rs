//! Client configuration
//!
//! Settings come from, in increasing priority: defaults, an optional JSON
//! file, and `MIRRORLINK_*` environment variables.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use mirrorlink_api::operations::LIST_ALL_FILTER;
use serde::{Deserialize, Serialize};
use soap_client::TransportConfig;

use crate::error::SdkError;

/// Configuration for [`MirrorLinkClient`](crate::MirrorLinkClient)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Profile id sent with every action
    /// Default: 0
    pub profile_id: u32,

    /// `AppListingFilter` used by `list_applications`
    /// Default: "*"
    pub app_list_filter: String,

    /// TCP connect timeout in seconds
    /// Default: 5
    pub connect_timeout_secs: u64,

    /// Read and write timeout in seconds
    /// Default: 10
    pub io_timeout_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            profile_id: 0,
            app_list_filter: LIST_ALL_FILTER.to_string(),
            connect_timeout_secs: 5,
            io_timeout_secs: 10,
        }
    }
}

impl ClientConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_profile_id(mut self, profile_id: u32) -> Self {
        self.profile_id = profile_id;
        self
    }

    pub fn with_app_list_filter(mut self, filter: impl Into<String>) -> Self {
        self.app_list_filter = filter.into();
        self
    }

    pub fn with_connect_timeout_secs(mut self, secs: u64) -> Self {
        self.connect_timeout_secs = secs;
        self
    }

    pub fn with_io_timeout_secs(mut self, secs: u64) -> Self {
        self.io_timeout_secs = secs;
        self
    }

    /// Transport timeouts derived from this configuration
    pub fn transport(&self) -> TransportConfig {
        TransportConfig::new()
            .with_connect_timeout(Duration::from_secs(self.connect_timeout_secs))
            .with_read_timeout(Duration::from_secs(self.io_timeout_secs))
            .with_write_timeout(Duration::from_secs(self.io_timeout_secs))
    }

    /// Parse a JSON document; missing fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self, SdkError> {
        serde_json::from_str(json).map_err(|e| SdkError::ConfigError(format!("Invalid config JSON: {}", e)))
    }

    /// Read a JSON configuration file
    pub fn load_from(path: &Path) -> Result<Self, SdkError> {
        let contents = fs::read_to_string(path)
            .map_err(|e| SdkError::ConfigError(format!("Failed to read {}: {}", path.display(), e)))?;
        Self::from_json(&contents)
    }

    /// `<config dir>/mirrorlink/client.json`, if the platform has a config dir
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("mirrorlink").join("client.json"))
    }

    /// Defaults, overlaid with the default config file when it exists, then
    /// with environment variables
    pub fn load() -> Result<Self, SdkError> {
        let config = match Self::default_path() {
            Some(path) if path.exists() => Self::load_from(&path)?,
            _ => Self::default(),
        };
        config.apply_env()
    }

    /// Overlay `MIRRORLINK_PROFILE_ID` and `MIRRORLINK_APP_FILTER`
    pub fn apply_env(self) -> Result<Self, SdkError> {
        self.apply_vars(|name| std::env::var(name).ok())
    }

    fn apply_vars(mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<Self, SdkError> {
        if let Some(value) = lookup("MIRRORLINK_PROFILE_ID") {
            self.profile_id = value.trim().parse().map_err(|_| {
                SdkError::ConfigError(format!("MIRRORLINK_PROFILE_ID is not a profile id: '{}'", value))
            })?;
        }
        if let Some(filter) = lookup("MIRRORLINK_APP_FILTER") {
            self.app_list_filter = filter;
        }
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    fn vars(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.profile_id, 0);
        assert_eq!(config.app_list_filter, LIST_ALL_FILTER);

        let transport = config.transport();
        assert_eq!(transport.connect_timeout, Duration::from_secs(5));
        assert_eq!(transport.read_timeout, Duration::from_secs(10));
        assert_eq!(transport.write_timeout, Duration::from_secs(10));
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = ClientConfig::from_json(r#"{ "profile_id": 4, "io_timeout_secs": 3 }"#).unwrap();

        assert_eq!(config.profile_id, 4);
        assert_eq!(config.app_list_filter, "*");
        assert_eq!(config.connect_timeout_secs, 5);
        assert_eq!(config.transport().read_timeout, Duration::from_secs(3));
    }

    #[test]
    fn test_invalid_json() {
        assert!(matches!(ClientConfig::from_json("{ profile_id"), Err(SdkError::ConfigError(_))));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "app_list_filter": "navigation" }}"#).unwrap();

        let config = ClientConfig::load_from(file.path()).unwrap();
        assert_eq!(config.app_list_filter, "navigation");
    }

    #[test]
    fn test_load_from_missing_file() {
        let result = ClientConfig::load_from(Path::new("/nonexistent/mirrorlink/client.json"));
        assert!(matches!(result, Err(SdkError::ConfigError(_))));
    }

    #[test]
    fn test_env_overrides() {
        let config = ClientConfig::default()
            .apply_vars(vars(&[("MIRRORLINK_PROFILE_ID", " 12 "), ("MIRRORLINK_APP_FILTER", "media")]))
            .unwrap();

        assert_eq!(config.profile_id, 12);
        assert_eq!(config.app_list_filter, "media");
    }

    #[test]
    fn test_env_invalid_profile_id() {
        let result = ClientConfig::default().apply_vars(vars(&[("MIRRORLINK_PROFILE_ID", "abc")]));
        assert!(matches!(result, Err(SdkError::ConfigError(_))));
    }

    #[test]
    fn test_builders() {
        let config = ClientConfig::new()
            .with_profile_id(2)
            .with_app_list_filter("all")
            .with_connect_timeout_secs(1)
            .with_io_timeout_secs(2);

        assert_eq!(config.profile_id, 2);
        assert_eq!(config.app_list_filter, "all");
        assert_eq!(config.transport().connect_timeout, Duration::from_secs(1));
        assert_eq!(config.transport().write_timeout, Duration::from_secs(2));
    }
}
