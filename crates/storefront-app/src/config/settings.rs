//! Settings loader for `<config_dir>/storefront/config.toml`

use std::path::{Path, PathBuf};

use super::types::Settings;
use storefront_core::prelude::*;

const CONFIG_FILENAME: &str = "config.toml";
const APP_DIR: &str = "storefront";

/// Environment variable overriding the API base URL
pub const API_URL_ENV: &str = "STOREFRONT_API_URL";

/// Location of the user config file, if a config directory exists
pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILENAME))
}

/// Load settings from the user config directory
pub fn load_settings() -> Settings {
    match config_path() {
        Some(path) => load_settings_from(&path),
        None => {
            debug!("No config directory on this platform, using defaults");
            Settings::default()
        }
    }
}

/// Load settings from a specific file, falling back to defaults
pub fn load_settings_from(config_path: &Path) -> Settings {
    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Settings::default();
    }

    match std::fs::read_to_string(config_path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", config_path);
                warn_on_reversed_limits(&settings);
                settings
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", config_path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", config_path, e);
            Settings::default()
        }
    }
}

fn warn_on_reversed_limits(settings: &Settings) {
    let catalog = &settings.catalog;
    if catalog.min_price > catalog.max_price {
        warn!(
            "catalog.min_price ({}) is above catalog.max_price ({}), swapping them",
            catalog.min_price, catalog.max_price
        );
    }
}

/// Resolve the API base URL: CLI flag, then environment, then settings
pub fn resolve_api_url(cli_override: Option<&str>, settings: &Settings) -> String {
    if let Some(url) = cli_override.filter(|u| !u.trim().is_empty()) {
        debug!("API URL from command line: {}", url);
        return url.to_string();
    }

    if let Ok(url) = std::env::var(API_URL_ENV) {
        if !url.trim().is_empty() {
            debug!("API URL from {}: {}", API_URL_ENV, url);
            return url;
        }
    }

    settings.api.base_url.clone()
}

/// Write the default config file if none exists
pub fn init_config_file(config_path: &Path) -> Result<()> {
    if config_path.exists() {
        return Ok(());
    }

    if let Some(dir) = config_path.parent() {
        std::fs::create_dir_all(dir)
            .map_err(|e| Error::config(format!("Failed to create config dir: {}", e)))?;
    }

    let default_content = r#"# Storefront Configuration

[api]
# base_url = "https://pesona-api.onrender.com/trpc"
# timeout_secs = 30

[catalog]
page_size = 12
min_price = 0
max_price = 2000
price_step = 10
currency = "USD"

[ui]
theme = "dark"            # "dark" or "light"
toast_duration_ms = 5000
narrow_width = 100
"#;

    std::fs::write(config_path, default_content)
        .map_err(|e| Error::config(format!("Failed to write config.toml: {}", e)))?;

    Ok(())
}
