//! # Client configuration: `psm-hub.toml`
//!
//! Optional TOML file read by native clients from the platform config
//! directory (filename: [`HubConfig::filename`]). The web client always uses
//! the defaults.
//!
//! ```toml
//! [backend]
//! server_url = "https://hub.example.com"   # where server functions live
//!
//! [session]
//! key = "psm_active_session"               # durable session key
//! ```
//!
//! A missing or empty file is equivalent to [`HubConfig::default`].

use serde::{Deserialize, Serialize};

use crate::session::SESSION_KEY;

/// Top-level configuration stored in `psm-hub.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct HubConfig {
    #[serde(default)]
    pub backend: BackendConfig,
    #[serde(default)]
    pub session: SessionConfig,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BackendConfig {
    /// Base URL of the fullstack server. `None` leaves server functions on
    /// the default origin.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub server_url: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionConfig {
    #[serde(default = "default_session_key")]
    pub key: String,
}

fn default_session_key() -> String {
    SESSION_KEY.to_string()
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            key: default_session_key(),
        }
    }
}

impl HubConfig {
    /// Builder method to set the backend URL.
    pub fn with_server_url(mut self, url: impl Into<String>) -> Self {
        self.backend.server_url = Some(url.into());
        self
    }

    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "psm-hub.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Server URL with surrounding whitespace and trailing slashes removed;
    /// blank values count as unset.
    pub fn server_url(&self) -> Option<&str> {
        self.backend
            .server_url
            .as_deref()
            .map(|u| u.trim().trim_end_matches('/'))
            .filter(|u| !u.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_is_default() {
        let config = HubConfig::from_toml("").unwrap();
        assert_eq!(config, HubConfig::default());
        assert_eq!(config.session.key, SESSION_KEY);
        assert!(config.server_url().is_none());
    }

    #[test]
    fn test_roundtrip() {
        let config = HubConfig::default().with_server_url("https://hub.example.com/");
        let text = config.to_toml().unwrap();
        let parsed = HubConfig::from_toml(&text).unwrap();
        assert_eq!(parsed, config);
        assert_eq!(parsed.server_url(), Some("https://hub.example.com"));
    }

    #[test]
    fn test_partial_sections() {
        let config = HubConfig::from_toml("[session]\nkey = \"other\"\n").unwrap();
        assert_eq!(config.session.key, "other");
        assert!(config.backend.server_url.is_none());

        let blank = HubConfig::from_toml("[backend]\nserver_url = \"  \"\n").unwrap();
        assert!(blank.server_url().is_none());
    }
}
