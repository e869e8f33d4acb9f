//! Key event handlers for each page and UI mode

use crate::filter_form::FormField;
use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::{AppState, Page, UiMode};

/// Price steps moved by PageUp/PageDown in the sidebar
const PRICE_JUMP_STEPS: i64 = 10;

/// Convert key events to messages based on current page and UI mode
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    match (state.ui_mode, state.page()) {
        (UiMode::Sidebar, Page::Catalog) => handle_key_sidebar(state, key),
        (_, Page::Catalog) => handle_key_catalog(key),
        (_, Page::Product) => handle_key_product(key),
    }
}

/// Keys available on every page
fn handle_key_global(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('q') | InputKey::CharCtrl('c') => Some(Message::Quit),
        InputKey::Char('r') => Some(Message::Reload),
        InputKey::Char('b') | InputKey::Backspace => Some(Message::HistoryBack),
        InputKey::Char('f') => Some(Message::HistoryForward),
        InputKey::Char('t') => Some(Message::ToggleTheme),
        InputKey::Char('x') => Some(Message::DismissToast),
        _ => None,
    }
}

/// Handle key events on the catalog grid and pagination
fn handle_key_catalog(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('/' | 's') => Some(Message::FocusSidebar),
        InputKey::Char('c') => Some(Message::ClearFilters),

        // Product selection
        InputKey::Down | InputKey::Char('j') => Some(Message::SelectNextProduct),
        InputKey::Up | InputKey::Char('k') => Some(Message::SelectPreviousProduct),
        InputKey::Enter => Some(Message::OpenSelectedProduct),

        // Pagination
        InputKey::Right | InputKey::Char('l' | ']') | InputKey::PageDown => {
            Some(Message::NextPage)
        }
        InputKey::Left | InputKey::Char('h' | '[') | InputKey::PageUp => {
            Some(Message::PreviousPage)
        }
        InputKey::Home | InputKey::Char('g') => Some(Message::FirstPage),
        InputKey::End | InputKey::Char('G') => Some(Message::LastPage),
        InputKey::Char(c @ '1'..='9') => c.to_digit(10).map(Message::GoToPage),

        _ => handle_key_global(key),
    }
}

/// Handle key events on the product detail page
fn handle_key_product(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Esc => Some(Message::BackToProducts),
        InputKey::Char('o') => Some(Message::StartOrder),
        InputKey::Char('s') => Some(Message::ContactSupplier),
        _ => handle_key_global(key),
    }
}

/// Handle key events while the filter sidebar has focus
fn handle_key_sidebar(state: &AppState, key: InputKey) -> Option<Message> {
    let form = &state.filter_form;
    let on_price = matches!(form.focus, FormField::MinPrice | FormField::MaxPrice);

    match key {
        InputKey::Esc => Some(Message::SidebarCancel),
        InputKey::Enter => Some(Message::SidebarSubmit),
        InputKey::Tab | InputKey::Down => Some(Message::SidebarFocusNext),
        InputKey::BackTab | InputKey::Up => Some(Message::SidebarFocusPrev),
        InputKey::CharCtrl('r') => Some(Message::SidebarReset),
        InputKey::CharCtrl('c') => Some(Message::Quit),

        // Price sliders
        InputKey::Right if on_price => Some(Message::SidebarAdjust(1)),
        InputKey::Left if on_price => Some(Message::SidebarAdjust(-1)),
        InputKey::PageUp if on_price => Some(Message::SidebarAdjust(PRICE_JUMP_STEPS)),
        InputKey::PageDown if on_price => Some(Message::SidebarAdjust(-PRICE_JUMP_STEPS)),

        // Search text
        InputKey::CharCtrl('u') | InputKey::Delete if form.focus == FormField::Search => {
            Some(Message::SidebarInput {
                text: String::new(),
            })
        }
        InputKey::Backspace if form.focus == FormField::Search => {
            let mut text = form.search.clone();
            text.pop();
            Some(Message::SidebarInput { text })
        }
        InputKey::Char(c) if form.focus == FormField::Search => {
            let mut text = form.search.clone();
            text.push(c);
            Some(Message::SidebarInput { text })
        }

        _ => None,
    }
}
