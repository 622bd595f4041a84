//! Configuration types for restyle
//!
//! Defines:
//! - `Settings` - Global application settings
//! - `RemoteSettings` - Layout service endpoint, model, and timeouts
//! - `UiSettings` - Front-end toggles

use std::time::Duration;

use restyle_core::prelude::*;
use restyle_remote::{ClientConfig, DEFAULT_ENDPOINT, DEFAULT_MODEL};
use serde::{Deserialize, Serialize};
use url::Url;

/// Global settings from `.restyle/config.toml`
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub remote: RemoteSettings,

    #[serde(default)]
    pub ui: UiSettings,
}

/// Remote layout service settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RemoteSettings {
    /// Chat-completions endpoint (must be https)
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Model name sent with each request
    #[serde(default = "default_model")]
    pub model: String,

    /// Connection establishment timeout in seconds
    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,

    /// Overall request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Name of the environment variable holding the credential.
    /// The credential itself is never stored in the config file.
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,
}

impl Default for RemoteSettings {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            model: default_model(),
            connect_timeout_secs: default_connect_timeout_secs(),
            timeout_secs: default_timeout_secs(),
            api_key_env: default_api_key_env(),
        }
    }
}

impl RemoteSettings {
    /// Read the credential from the configured environment variable.
    ///
    /// Missing or blank values yield `None`, which disables the remote path.
    pub fn api_key(&self) -> Option<String> {
        std::env::var(&self.api_key_env)
            .ok()
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty())
    }

    /// Build the client configuration.
    ///
    /// An endpoint that is not an `https` URL is replaced by the default.
    pub fn client_config(&self) -> ClientConfig {
        let endpoint = match validate_endpoint(&self.endpoint) {
            Ok(()) => self.endpoint.clone(),
            Err(reason) => {
                warn!(
                    "Ignoring remote endpoint {:?} ({}), using {}",
                    self.endpoint, reason, DEFAULT_ENDPOINT
                );
                DEFAULT_ENDPOINT.to_string()
            }
        };

        let model = if self.model.trim().is_empty() {
            warn!("Empty remote model in config, using {}", DEFAULT_MODEL);
            DEFAULT_MODEL.to_string()
        } else {
            self.model.clone()
        };

        ClientConfig {
            endpoint,
            model,
            connect_timeout: Duration::from_secs(self.connect_timeout_secs.max(1)),
            request_timeout: Duration::from_secs(self.timeout_secs.max(1)),
        }
    }
}

fn validate_endpoint(endpoint: &str) -> std::result::Result<(), String> {
    let url = Url::parse(endpoint).map_err(|e| e.to_string())?;
    if url.scheme() != "https" {
        return Err(format!("scheme `{}` is not https", url.scheme()));
    }
    if url.host_str().is_none() {
        return Err("missing host".to_string());
    }
    Ok(())
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

fn default_connect_timeout_secs() -> u64 {
    30
}

fn default_timeout_secs() -> u64 {
    60
}

fn default_api_key_env() -> String {
    "OPENAI_API_KEY".to_string()
}

/// UI settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UiSettings {
    /// Show the F1-F4 quick action bar
    #[serde(default = "default_true")]
    pub show_quick_actions: bool,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            show_quick_actions: true,
        }
    }
}

fn default_true() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_settings_default() {
        let settings = Settings::default();
        assert_eq!(settings.remote.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(settings.remote.model, "gpt-4o-mini");
        assert_eq!(settings.remote.connect_timeout_secs, 30);
        assert_eq!(settings.remote.timeout_secs, 60);
        assert_eq!(settings.remote.api_key_env, "OPENAI_API_KEY");
        assert!(settings.ui.show_quick_actions);
    }

    #[test]
    fn test_settings_deserialize_partial() {
        let toml = r#"
[remote]
model = "gpt-4o"
"#;
        let settings: Settings = toml::from_str(toml).unwrap();
        assert_eq!(settings.remote.model, "gpt-4o");
        assert_eq!(settings.remote.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(settings.remote.timeout_secs, 60);
        assert!(settings.ui.show_quick_actions);
    }

    #[test]
    fn test_client_config_uses_settings() {
        let remote = RemoteSettings {
            endpoint: "https://llm.internal.example/v1/chat/completions".into(),
            model: "local".into(),
            connect_timeout_secs: 5,
            timeout_secs: 20,
            ..RemoteSettings::default()
        };
        let config = remote.client_config();
        assert_eq!(
            config.endpoint,
            "https://llm.internal.example/v1/chat/completions"
        );
        assert_eq!(config.model, "local");
        assert_eq!(config.connect_timeout, Duration::from_secs(5));
        assert_eq!(config.request_timeout, Duration::from_secs(20));
    }

    #[test]
    fn test_client_config_rejects_plain_http() {
        let remote = RemoteSettings {
            endpoint: "http://api.openai.com/v1/chat/completions".into(),
            ..RemoteSettings::default()
        };
        assert_eq!(remote.client_config().endpoint, DEFAULT_ENDPOINT);
    }

    #[test]
    fn test_client_config_rejects_garbage_endpoint() {
        let remote = RemoteSettings {
            endpoint: "not a url".into(),
            model: "  ".into(),
            ..RemoteSettings::default()
        };
        let config = remote.client_config();
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.model, DEFAULT_MODEL);
    }

    #[test]
    fn test_client_config_zero_timeouts_clamped() {
        let remote = RemoteSettings {
            connect_timeout_secs: 0,
            timeout_secs: 0,
            ..RemoteSettings::default()
        };
        let config = remote.client_config();
        assert_eq!(config.connect_timeout, Duration::from_secs(1));
        assert_eq!(config.request_timeout, Duration::from_secs(1));
    }

    #[test]
    #[serial]
    fn test_api_key_from_env() {
        let remote = RemoteSettings {
            api_key_env: "RESTYLE_TEST_KEY_PRESENT".into(),
            ..RemoteSettings::default()
        };
        std::env::set_var("RESTYLE_TEST_KEY_PRESENT", "  sk-test \n");
        assert_eq!(remote.api_key().as_deref(), Some("sk-test"));
        std::env::remove_var("RESTYLE_TEST_KEY_PRESENT");
    }

    #[test]
    #[serial]
    fn test_api_key_missing_or_blank() {
        let remote = RemoteSettings {
            api_key_env: "RESTYLE_TEST_KEY_BLANK".into(),
            ..RemoteSettings::default()
        };
        std::env::remove_var("RESTYLE_TEST_KEY_BLANK");
        assert_eq!(remote.api_key(), None);

        std::env::set_var("RESTYLE_TEST_KEY_BLANK", "   ");
        assert_eq!(remote.api_key(), None);
        std::env::remove_var("RESTYLE_TEST_KEY_BLANK");
    }
}
