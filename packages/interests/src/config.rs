//! # Client configuration — `bitsa.toml`
//!
//! ```toml
//! [api]
//! base_url = "https://api.bitsa.example/api"
//! token_storage_key = "token"   # localStorage key holding the bearer token (web)
//! demo = false                  # run against the in-memory backend
//!
//! [onboarding]
//! enabled = true                # show the first-login interest prompt
//! default_category = "General"  # bucket for uncategorized interests
//! ```
//!
//! Every key has a default, so a missing or empty file is the default
//! configuration. Environment overrides are applied by [`BitsaConfig::apply_env`]:
//!
//! | Variable | Overrides |
//! |----------|-----------|
//! | `BITSA_API_URL` | `api.base_url` |
//! | `BITSA_DEMO` | `api.demo` (`1`/`true`/`yes`) |
//! | `BITSA_ONBOARDING` | `onboarding.enabled` |

use serde::{Deserialize, Serialize};

use crate::selection::DEFAULT_CATEGORY;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    #[error("Invalid configuration: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Top-level configuration stored in `bitsa.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BitsaConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub onboarding: OnboardingConfig,
}

/// Backend connection settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_token_storage_key")]
    pub token_storage_key: String,
    #[serde(default)]
    pub demo: bool,
}

fn default_base_url() -> String {
    "http://localhost:5000/api".to_string()
}

fn default_token_storage_key() -> String {
    "token".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            token_storage_key: default_token_storage_key(),
            demo: false,
        }
    }
}

/// Interest onboarding settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OnboardingConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default = "default_category")]
    pub default_category: String,
}

fn default_true() -> bool {
    true
}

fn default_category() -> String {
    DEFAULT_CATEGORY.to_string()
}

impl Default for OnboardingConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            default_category: default_category(),
        }
    }
}

impl BitsaConfig {
    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "bitsa.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Read `path` if it exists; a missing file yields the defaults.
    pub fn from_file(path: &std::path::Path) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(s) => Self::from_toml(&s),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(source) => Err(ConfigError::Read {
                path: path.display().to_string(),
                source,
            }),
        }
    }

    /// Builder method to point at another backend.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.api.base_url = base_url.into();
        self
    }

    /// Apply overrides from a variable lookup (usually `std::env::var`).
    pub fn apply_env<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup("BITSA_API_URL").filter(|u| !u.trim().is_empty()) {
            self.api.base_url = url.trim().to_string();
        }
        if let Some(demo) = lookup("BITSA_DEMO").and_then(|v| parse_flag(&v)) {
            self.api.demo = demo;
        }
        if let Some(enabled) = lookup("BITSA_ONBOARDING").and_then(|v| parse_flag(&v)) {
            self.onboarding.enabled = enabled;
        }
        self
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
