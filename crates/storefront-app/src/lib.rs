//! storefront-app - Application state and orchestration for the storefront
//!
//! This crate implements the TEA (The Elm Architecture) pattern for state management:
//! the listing and detail state machines, filter/location synchronization with a
//! browser-style history, the notification queue, the Engine abstraction shared by
//! the TUI and headless runners, and configuration loading.

pub mod actions;
pub mod config;
pub mod detail;
pub mod engine;
pub mod engine_event;
pub mod filter_form;
pub mod handler;
pub mod history;
pub mod input_key;
pub mod listing;
pub mod message;
pub mod process;
pub mod request;
pub mod signals;
pub mod state;
pub mod toast;

// Re-export primary types
pub use detail::{DetailPhase, DetailState};
pub use engine::Engine;
pub use engine_event::EngineEvent;
pub use filter_form::{FilterForm, FormField};
pub use handler::{UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use listing::{ListingPhase, ListingState};
pub use message::Message;
pub use state::{AppState, Page, UiMode};
pub use toast::{Toast, ToastQueue, ToastVariant};
