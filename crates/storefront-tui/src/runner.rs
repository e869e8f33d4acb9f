//! Main TUI runner - terminal lifecycle and event loop

use ratatui::DefaultTerminal;
use storefront_app::{Engine, Message};
use storefront_core::prelude::*;

use super::{event, render, terminal};

/// Run the interactive storefront until the user quits.
///
/// The engine is created by the caller (it already knows the initial
/// location). The terminal is restored whether the loop succeeds or not.
pub async fn run(mut engine: Engine) -> Result<()> {
    let mut term = terminal::enter();

    let result = run_loop(&mut term, &mut engine);

    engine.shutdown();
    terminal::leave();

    if let Err(e) = &result {
        error!("TUI loop failed: {}", e);
    }
    result
}

/// Main event loop
fn run_loop(terminal: &mut DefaultTerminal, engine: &mut Engine) -> Result<()> {
    // The state starts without a viewport width; seed it before the first fetch
    let size = terminal.size()?;
    engine.process_message(Message::Resize {
        width: size.width,
        height: size.height,
    });

    engine.start();

    while !engine.should_quit() {
        // Fetch results and signals
        engine.drain_pending_messages();

        terminal.draw(|frame| render::view(frame, &engine.state))?;

        if let Some(message) = event::poll()? {
            engine.process_message(message);
        }
    }

    info!("Leaving TUI at {}", engine.state.location());
    Ok(())
}
