//! Terminal setup and restoration

use ratatui::DefaultTerminal;

/// Enter the alternate screen in raw mode.
///
/// A panic hook is installed first so a crash never leaves the shell in raw mode.
pub fn enter() -> DefaultTerminal {
    let previous = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        ratatui::restore();
        previous(info);
    }));
    ratatui::init()
}

/// Leave the alternate screen and restore the cooked terminal
pub fn leave() {
    ratatui::restore();
}
