//! Headless mode runner - resolve one location without the TUI

use tokio::sync::broadcast::{self, error::TryRecvError};
use tracing::{info, warn};

use storefront_api::ProductApi;
use storefront_app::{Engine, EngineEvent};
use storefront_core::prelude::*;

use super::HeadlessEvent;

/// Load the engine's initial location, print the outcome and return.
///
/// Returns the settling event, or `None` when the run was interrupted first.
pub async fn run_headless<A>(mut engine: Engine<A>) -> Result<Option<EngineEvent>>
where
    A: ProductApi + Clone + Sync + 'static,
{
    info!("═══════════════════════════════════════════════════════");
    info!("Storefront starting in HEADLESS mode");
    info!("Location: {}", engine.state.location());
    info!("═══════════════════════════════════════════════════════");

    let mut events = engine.subscribe();
    engine.start();

    let outcome = loop {
        if let Some(outcome) = forward_events(&mut events) {
            break Some(outcome);
        }
        if engine.should_quit() {
            info!("Quit requested");
            break None;
        }
        if !engine.process_next().await {
            info!("Message channel closed");
            break None;
        }
    };

    engine.shutdown();
    info!("Storefront headless mode exiting");
    Ok(outcome)
}

/// Print pending engine events; returns the first load outcome
fn forward_events(events: &mut broadcast::Receiver<EngineEvent>) -> Option<EngineEvent> {
    loop {
        match events.try_recv() {
            Ok(event) => {
                if let Some(headless) = HeadlessEvent::from_engine(&event) {
                    headless.emit();
                }
                if event.is_load_outcome() {
                    return Some(event);
                }
            }
            Err(TryRecvError::Lagged(skipped)) => {
                warn!("Headless runner missed {} engine events", skipped);
            }
            Err(TryRecvError::Empty) | Err(TryRecvError::Closed) => return None,
        }
    }
}
