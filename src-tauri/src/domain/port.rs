//! Port configuration records
//!
//! A `PortConfig` names one server environment: the four root URLs the
//! target application needs. Only the URLs travel in the JSON payload that
//! is shown, copied, encoded as a QR code and handed off through a deep link.

use serde::{Deserialize, Serialize};
use url::Url;
use uuid::Uuid;

use super::error::{PortError, PortResult};
use super::palette::PaletteColor;

/// A named port configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortConfig {
    /// Generated at creation, never reused
    pub id: Uuid,
    /// Display label (e.g., "G8Tab", "IOB-SIT"); not unique
    pub name: String,
    pub application_root_url: String,
    pub api_root_url: String,
    pub main_app_url: String,
    pub ocp_root_url: String,
}

/// The wire payload: exactly the four URLs, in this key order.
///
/// Field order here is the serialized key order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct PortPayload {
    pub application_root_url: String,
    pub api_root_url: String,
    pub main_app_url: String,
    pub ocp_root_url: String,
}

impl PortPayload {
    /// Parse a payload string (e.g., a scanned QR code)
    pub fn parse(json: &str) -> PortResult<Self> {
        serde_json::from_str(json).map_err(|e| PortError::InvalidPayload(e.to_string()))
    }

    /// Pretty-printed JSON, 2-space indent, slashes left unescaped
    pub fn to_json(&self) -> PortResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl PortConfig {
    /// Create a record with a fresh id
    pub fn new(
        name: impl Into<String>,
        application_root_url: impl Into<String>,
        api_root_url: impl Into<String>,
        main_app_url: impl Into<String>,
        ocp_root_url: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            application_root_url: application_root_url.into(),
            api_root_url: api_root_url.into(),
            main_app_url: main_app_url.into(),
            ocp_root_url: ocp_root_url.into(),
        }
    }

    /// Create a record from a parsed payload
    pub fn from_payload(name: impl Into<String>, payload: PortPayload) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            application_root_url: payload.application_root_url,
            api_root_url: payload.api_root_url,
            main_app_url: payload.main_app_url,
            ocp_root_url: payload.ocp_root_url,
        }
    }

    pub fn payload(&self) -> PortPayload {
        PortPayload {
            application_root_url: self.application_root_url.clone(),
            api_root_url: self.api_root_url.clone(),
            main_app_url: self.main_app_url.clone(),
            ocp_root_url: self.ocp_root_url.clone(),
        }
    }

    /// JSON payload for display, clipboard, QR and deep link
    pub fn to_json(&self) -> PortResult<String> {
        self.payload().to_json()
    }

    pub fn stable_color(&self) -> PaletteColor {
        PaletteColor::for_name(&self.name)
    }

    /// Short title: last non-empty path segment of `main_app_url`
    /// (percent-decoded), falling back to `name`.
    ///
    /// Relative references such as `g8tab/` count as paths.
    pub fn display_title(&self) -> String {
        parse_lenient(&self.main_app_url)
            .and_then(|url| {
                url.path_segments()?
                    .filter(|segment| !segment.is_empty())
                    .last()
                    .map(|segment| match urlencoding::decode(segment) {
                        Ok(decoded) => decoded.into_owned(),
                        Err(_) => segment.to_string(),
                    })
            })
            .unwrap_or_else(|| self.name.clone())
    }

    /// Build `<scheme>://<host>?data=<percent-encoded payload>`.
    ///
    /// Fails with `PortError::Encoding` if the payload cannot be serialized
    /// or the result is not a valid URL; no partial link is returned.
    pub fn deep_link(&self, scheme: &str, host: &str) -> PortResult<String> {
        let json = self.to_json()?;
        let link = format!("{scheme}://{host}?data={}", urlencoding::encode(&json));
        Url::parse(&link).map_err(|e| PortError::Encoding(format!("{link}: {e}")))?;
        Ok(link)
    }
}

/// Parse an absolute URL, or resolve a whitespace-free relative reference
/// against a throwaway base so its path can still be read
fn parse_lenient(raw: &str) -> Option<Url> {
    match Url::parse(raw) {
        Ok(url) => Some(url),
        Err(url::ParseError::RelativeUrlWithoutBase)
            if !raw.is_empty() && !raw.chars().any(char::is_whitespace) =>
        {
            let base = Url::parse("http://localhost/").ok()?;
            base.join(raw).ok()
        }
        Err(_) => None,
    }
}
