//! Configuration file parsing for the storefront
//!
//! Settings live in `<config_dir>/storefront/config.toml`. Every section is
//! optional; missing or invalid files fall back to defaults.

pub mod settings;
pub mod types;

pub use settings::{
    config_path, init_config_file, load_settings, load_settings_from, resolve_api_url,
    API_URL_ENV,
};
pub use types::*;
