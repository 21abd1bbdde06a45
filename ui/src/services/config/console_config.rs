//! Console configuration
//!
//! Defaults are compiled in; a JSON object stored in `localStorage` under
//! [`CONFIG_STORAGE_KEY`] overrides any subset of fields.

use gloo_storage::{LocalStorage, Storage};
use serde::Deserialize;
use tracing::{info, warn};

/// `localStorage` key holding configuration overrides
pub const CONFIG_STORAGE_KEY: &str = "realm-console.config";

/// How long a notification stays on screen
pub const DEFAULT_ALERT_TIMEOUT_MS: u32 = 8_000;

/// Post-broker flow preselected when an organization has no active provider
pub const DEFAULT_POST_BROKER_FLOW: &str = "post org broker login";

const FALLBACK_SERVER_URL: &str = "http://localhost:8080";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ConsoleConfig {
    /// Identity server root, e.g. `https://id.example.com/auth`
    pub server_url: String,

    /// Realm the console administers
    pub realm: String,

    /// Notification auto-dismiss delay in milliseconds
    pub alert_timeout_ms: u32,

    /// Post-broker flow preselected in the organization form
    pub default_post_broker_flow: String,

    /// `sessionStorage` key the hosting page stores the access token under
    pub token_storage_key: String,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            server_url: page_origin().unwrap_or_else(|| FALLBACK_SERVER_URL.to_string()),
            realm: "master".to_string(),
            alert_timeout_ms: DEFAULT_ALERT_TIMEOUT_MS,
            default_post_broker_flow: DEFAULT_POST_BROKER_FLOW.to_string(),
            token_storage_key: "realm-console.token".to_string(),
        }
    }
}

impl ConsoleConfig {
    /// Load configuration, falling back to defaults when nothing is stored or
    /// the stored value does not parse.
    pub fn load() -> Self {
        match LocalStorage::get::<ConsoleConfig>(CONFIG_STORAGE_KEY) {
            Ok(config) => {
                info!("Loaded console configuration for realm {}", config.realm);
                config
            }
            Err(e) => {
                warn!("Using default console configuration: {:?}", e);
                Self::default()
            }
        }
    }
}

/// Origin of the page the console is served from.
#[cfg(target_arch = "wasm32")]
fn page_origin() -> Option<String> {
    web_sys::window().and_then(|window| window.location().origin().ok())
}

#[cfg(not(target_arch = "wasm32"))]
fn page_origin() -> Option<String> {
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ConsoleConfig::default();
        assert_eq!(config.server_url, FALLBACK_SERVER_URL);
        assert_eq!(config.alert_timeout_ms, 8_000);
        assert_eq!(config.default_post_broker_flow, "post org broker login");
    }

    #[test]
    fn test_partial_override_keeps_defaults() {
        let config: ConsoleConfig =
            serde_json::from_str(r#"{ "realm": "acme", "server_url": "https://id.acme.io" }"#)
                .unwrap();
        assert_eq!(config.realm, "acme");
        assert_eq!(config.server_url, "https://id.acme.io");
        assert_eq!(config.alert_timeout_ms, DEFAULT_ALERT_TIMEOUT_MS);
        assert_eq!(config.token_storage_key, "realm-console.token");
    }
}
