//! Key event handlers for different UI modes

use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::{AppState, UiMode};

/// Convert key events to messages based on current UI mode
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    match state.mode() {
        UiMode::Tour => handle_key_tour(key),
        UiMode::EditingDemo => handle_key_demo_input(key),
        UiMode::Browse => handle_key_browse(key),
    }
}

/// Tour modal captures input; the page behind it does not scroll
fn handle_key_tour(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('n') | InputKey::Enter | InputKey::Tab => Some(Message::TourNext),
        InputKey::Char('p') | InputKey::BackTab => Some(Message::TourPrevious),
        InputKey::Esc | InputKey::Char('q') => Some(Message::CloseTour),
        InputKey::CharCtrl('c') => Some(Message::Quit),
        _ => None,
    }
}

/// Text entry for the demo input field
fn handle_key_demo_input(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Enter => Some(Message::StartDemo),
        InputKey::Esc => Some(Message::StopEditingDemo),
        InputKey::Backspace => Some(Message::DemoBackspace),
        InputKey::Char(c) => Some(Message::DemoInput(c)),
        InputKey::CharCtrl('c') => Some(Message::Quit),
        _ => None,
    }
}

fn handle_key_browse(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('q') | InputKey::CharCtrl('c') => Some(Message::Quit),

        InputKey::Char('t') => Some(Message::ToggleTheme),

        // Scrolling
        InputKey::Char('j') | InputKey::Down => Some(Message::ScrollDown),
        InputKey::Char('k') | InputKey::Up => Some(Message::ScrollUp),
        InputKey::PageDown | InputKey::CharCtrl('d') => Some(Message::PageDown),
        InputKey::PageUp | InputKey::CharCtrl('u') => Some(Message::PageUp),
        InputKey::Home | InputKey::Char('g') => Some(Message::BackToTop),

        // FAQ
        InputKey::Tab => Some(Message::FaqCursorNext),
        InputKey::BackTab => Some(Message::FaqCursorPrevious),
        InputKey::Enter | InputKey::Char(' ') => Some(Message::ToggleFaqAtCursor),

        // Demo
        InputKey::Char('e') => Some(Message::EditDemoInput),
        InputKey::Char('x') => Some(Message::ResetDemo),

        // Tour
        InputKey::Char('?') => Some(Message::OpenTour),

        // Toasts
        InputKey::Char('d') | InputKey::Esc => Some(Message::DismissOldestToast),

        InputKey::Char('o') => Some(Message::OpenApp),

        _ => None,
    }
}
