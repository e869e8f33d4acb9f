//! Theme system.
//!
//! - `palette`: dark and light color sets, chosen from `AppState::theme`
//! - `styles`: semantic style builders over a palette

pub mod palette;
pub mod styles;

pub use palette::Palette;
