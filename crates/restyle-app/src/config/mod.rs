//! Configuration file parsing for restyle
//!
//! Supports:
//! - `.restyle/config.toml` - Global settings

pub mod settings;
pub mod types;

pub use settings::{config_path, init_config_dir, load_settings, load_settings_from};
pub use types::*;
