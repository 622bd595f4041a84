//! Settings parser for .restyle/config.toml

use super::types::Settings;
use restyle_core::prelude::*;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.toml";
const RESTYLE_DIR: &str = ".restyle";

const DEFAULT_CONFIG: &str = r#"# restyle configuration

[remote]
# OpenAI-compatible chat-completions endpoint (https only)
endpoint = "https://api.openai.com/v1/chat/completions"
model = "gpt-4o-mini"
connect_timeout_secs = 30
timeout_secs = 60
# Environment variable holding the API key.
# Leave it unset to disable remote resolution.
api_key_env = "OPENAI_API_KEY"

[ui]
show_quick_actions = true   # F1-F4 bar under the form preview
"#;

/// Path of the settings file under `base_dir`
pub fn config_path(base_dir: &Path) -> PathBuf {
    base_dir.join(RESTYLE_DIR).join(CONFIG_FILENAME)
}

/// Load settings from `.restyle/config.toml` under `base_dir`
///
/// Returns defaults if the file doesn't exist or can't be parsed.
pub fn load_settings(base_dir: &Path) -> Settings {
    load_settings_from(&config_path(base_dir))
}

/// Load settings from an explicit file path
///
/// Returns defaults if the file doesn't exist or can't be parsed.
pub fn load_settings_from(path: &Path) -> Settings {
    if !path.exists() {
        debug!("No config file at {:?}, using defaults", path);
        return Settings::default();
    }

    match std::fs::read_to_string(path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", path);
                settings
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", path, e);
            Settings::default()
        }
    }
}

/// Create `.restyle/config.toml` with commented defaults if it is missing
pub fn init_config_dir(base_dir: &Path) -> Result<()> {
    let restyle_dir = base_dir.join(RESTYLE_DIR);

    if !restyle_dir.exists() {
        std::fs::create_dir_all(&restyle_dir)
            .map_err(|e| Error::config(format!("Failed to create .restyle dir: {}", e)))?;
    }

    let path = restyle_dir.join(CONFIG_FILENAME);
    if !path.exists() {
        std::fs::write(&path, DEFAULT_CONFIG)
            .map_err(|e| Error::config(format!("Failed to write config.toml: {}", e)))?;
        info!("Wrote default config to {:?}", path);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_load_settings_missing_file() {
        let temp = tempdir().unwrap();
        let settings = load_settings(temp.path());
        assert_eq!(settings.remote.model, "gpt-4o-mini");
        assert!(settings.ui.show_quick_actions);
    }

    #[test]
    fn test_load_settings_from_file() {
        let temp = tempdir().unwrap();
        let dir = temp.path().join(".restyle");
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(
            dir.join("config.toml"),
            r#"
[remote]
model = "gpt-4o"
api_key_env = "MY_KEY"

[ui]
show_quick_actions = false
"#,
        )
        .unwrap();

        let settings = load_settings(temp.path());
        assert_eq!(settings.remote.model, "gpt-4o");
        assert_eq!(settings.remote.api_key_env, "MY_KEY");
        assert_eq!(settings.remote.timeout_secs, 60);
        assert!(!settings.ui.show_quick_actions);
    }

    #[test]
    fn test_load_settings_invalid_toml() {
        let temp = tempdir().unwrap();
        let dir = temp.path().join(".restyle");
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("config.toml"), "not valid toml {{{{").unwrap();

        let settings = load_settings(temp.path());
        assert_eq!(settings.remote.model, "gpt-4o-mini");
    }

    #[test]
    fn test_load_settings_from_explicit_path() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("custom.toml");
        std::fs::write(&path, "[remote]\ntimeout_secs = 5\n").unwrap();

        let settings = load_settings_from(&path);
        assert_eq!(settings.remote.timeout_secs, 5);
    }

    #[test]
    fn test_init_config_dir() {
        let temp = tempdir().unwrap();

        init_config_dir(temp.path()).unwrap();

        let path = config_path(temp.path());
        assert!(path.exists());

        let content = std::fs::read_to_string(&path).unwrap();
        let settings: Settings = toml::from_str(&content).expect("default config is valid TOML");
        assert_eq!(settings.remote.api_key_env, "OPENAI_API_KEY");
        assert_eq!(settings.remote.connect_timeout_secs, 30);
    }

    #[test]
    fn test_init_config_dir_idempotent() {
        let temp = tempdir().unwrap();
        init_config_dir(temp.path()).unwrap();

        let path = config_path(temp.path());
        std::fs::write(&path, "[remote]\nmodel = \"kept\"\n").unwrap();

        init_config_dir(temp.path()).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("model = \"kept\""));
    }
}
