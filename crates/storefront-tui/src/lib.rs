//! storefront-tui - Terminal UI for the storefront
//!
//! Renders the catalog and product pages with ratatui. The [`Engine`] from
//! storefront-app owns the state; this crate draws it and feeds it terminal
//! events.
//!
//! [`Engine`]: storefront_app::Engine

pub mod event;
pub mod layout;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod theme;
pub mod widgets;

#[cfg(test)]
pub mod test_utils;

pub use runner::run;
