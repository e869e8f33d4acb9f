//! Configuration types for the storefront

use std::fmt;

use serde::{Deserialize, Serialize};
use storefront_api::DEFAULT_API_URL;
use storefront_core::{
    FilterState, DEFAULT_MAX_PRICE, DEFAULT_MIN_PRICE, DEFAULT_PAGE_SIZE, NARROW_VIEWPORT_WIDTH,
};

/// Application settings (`<config_dir>/storefront/config.toml`)
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub api: ApiSettings,

    #[serde(default)]
    pub catalog: CatalogSettings,

    #[serde(default)]
    pub ui: UiSettings,
}

impl Settings {
    /// Filter state the catalog starts from and resets to
    pub fn filter_defaults(&self) -> FilterState {
        let (min_price, max_price) = self.catalog.price_limits();
        FilterState::with_defaults(self.catalog.page_size, min_price, max_price)
    }
}

/// Remote API settings
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ApiSettings {
    /// Base URL of the tRPC endpoint
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Per-request timeout in seconds. Unset means no timeout.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: None,
        }
    }
}

/// Catalog browsing settings
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct CatalogSettings {
    /// Products per page
    #[serde(default = "default_page_size")]
    pub page_size: u32,

    /// Lower limit of the price filter
    #[serde(default = "default_min_price")]
    pub min_price: i64,

    /// Upper limit of the price filter
    #[serde(default = "default_max_price")]
    pub max_price: i64,

    /// Price filter adjustment step
    #[serde(default = "default_price_step")]
    pub price_step: i64,

    /// ISO currency code used for price display
    #[serde(default = "default_currency")]
    pub currency: String,
}

impl CatalogSettings {
    /// Price filter limits as `(low, high)`, whichever order the file gave them in
    pub fn price_limits(&self) -> (i64, i64) {
        if self.min_price > self.max_price {
            (self.max_price, self.min_price)
        } else {
            (self.min_price, self.max_price)
        }
    }
}

impl Default for CatalogSettings {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            min_price: default_min_price(),
            max_price: default_max_price(),
            price_step: default_price_step(),
            currency: default_currency(),
        }
    }
}

/// Color theme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ThemeMode {
    #[default]
    Dark,
    Light,
}

impl ThemeMode {
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Dark => ThemeMode::Light,
            ThemeMode::Light => ThemeMode::Dark,
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ThemeMode::Dark => write!(f, "dark"),
            ThemeMode::Light => write!(f, "light"),
        }
    }
}

/// UI settings
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct UiSettings {
    #[serde(default)]
    pub theme: ThemeMode,

    /// How long a toast stays on screen
    #[serde(default = "default_toast_duration_ms")]
    pub toast_duration_ms: u64,

    /// Terminals narrower than this use the compact pagination window
    #[serde(default = "default_narrow_width")]
    pub narrow_width: u16,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            theme: ThemeMode::default(),
            toast_duration_ms: default_toast_duration_ms(),
            narrow_width: default_narrow_width(),
        }
    }
}

fn default_base_url() -> String {
    DEFAULT_API_URL.to_string()
}

fn default_page_size() -> u32 {
    DEFAULT_PAGE_SIZE
}

fn default_min_price() -> i64 {
    DEFAULT_MIN_PRICE
}

fn default_max_price() -> i64 {
    DEFAULT_MAX_PRICE
}

fn default_price_step() -> i64 {
    10
}

fn default_currency() -> String {
    "USD".to_string()
}

fn default_toast_duration_ms() -> u64 {
    5000
}

fn default_narrow_width() -> u16 {
    NARROW_VIEWPORT_WIDTH
}
