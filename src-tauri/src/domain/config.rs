//! Application configuration
//!
//! Compiled-in defaults with a couple of environment overrides. Nothing is
//! read from or written to disk.

use serde::{Deserialize, Serialize};

/// Environment variable overriding the deep-link scheme
pub const ENV_DEEP_LINK_SCHEME: &str = "PORTLINK_DEEP_LINK_SCHEME";
/// Environment variable overriding the QR render size
pub const ENV_QR_SIZE: &str = "PORTLINK_QR_SIZE";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppConfig {
    /// URL scheme registered by the target application
    pub deep_link_scheme: String,
    /// Host part of the hand-off URL
    pub deep_link_host: String,
    /// Minimum QR code edge in pixels
    pub qr_size_px: u32,
    /// Announcement spoken on selection; `{name}` is replaced
    pub narration_template: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            deep_link_scheme: "businessnextparent".to_string(),
            deep_link_host: "port-data".to_string(),
            qr_size_px: 240,
            narration_template: "You have selected {name}".to_string(),
        }
    }
}

impl AppConfig {
    /// Defaults, with overrides from the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        if let Some(scheme) = lookup(ENV_DEEP_LINK_SCHEME).filter(|s| !s.trim().is_empty()) {
            config.deep_link_scheme = scheme.trim().to_string();
        }
        if let Some(raw) = lookup(ENV_QR_SIZE) {
            match raw.trim().parse::<u32>() {
                Ok(size) if size > 0 => config.qr_size_px = size,
                _ => log::warn!("Ignoring invalid {ENV_QR_SIZE}={raw:?}"),
            }
        }
        config
    }

    pub fn narration_for(&self, name: &str) -> String {
        self.narration_template.replace("{name}", name)
    }
}
