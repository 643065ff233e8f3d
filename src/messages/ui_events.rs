//! UI events - messages from UI layer to App layer

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Events generated from user input in the UI layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiEvent {
    // Focus navigation
    NextField,
    PrevField,

    // Picker options
    HighlightNext,
    HighlightPrev,
    Choose,
    ClearState,

    // Form
    Submit,

    // Routing
    Back,

    // Popups
    ToggleHelp,
    CloseHelp,

    // System
    Quit,
}

/// Focusable control on the form (needed for context-aware event mapping)
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Field {
    #[default]
    State,
    City,
    Search,
}

impl Field {
    /// Next control; the city picker is skipped while disabled
    pub fn next(&self, city_enabled: bool) -> Field {
        match self {
            Field::State if city_enabled => Field::City,
            Field::State => Field::Search,
            Field::City => Field::Search,
            Field::Search => Field::State,
        }
    }

    pub fn prev(&self, city_enabled: bool) -> Field {
        match self {
            Field::State => Field::Search,
            Field::City => Field::State,
            Field::Search if city_enabled => Field::City,
            Field::Search => Field::State,
        }
    }
}

/// Which screen is showing
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Screen {
    #[default]
    Form,
    Results,
}

/// Convert a key event to a UiEvent based on current UI context
pub fn key_to_ui_event(
    key: KeyEvent,
    screen: Screen,
    focus: Field,
    show_help: bool,
) -> Option<UiEvent> {
    use crossterm::event::KeyEventKind;

    if key.kind != KeyEventKind::Press {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(UiEvent::Quit);
    }

    if show_help {
        return Some(UiEvent::CloseHelp);
    }

    match key.code {
        KeyCode::Char('q') => return Some(UiEvent::Quit),
        KeyCode::Char('?') => return Some(UiEvent::ToggleHelp),
        _ => {}
    }

    match screen {
        Screen::Form => handle_form_keys(key, focus),
        Screen::Results => handle_results_keys(key),
    }
}

/// Handle keys on the search form
fn handle_form_keys(key: KeyEvent, focus: Field) -> Option<UiEvent> {
    match key.code {
        KeyCode::Tab => Some(UiEvent::NextField),
        KeyCode::BackTab => Some(UiEvent::PrevField),
        KeyCode::Char('s') => Some(UiEvent::Submit),
        KeyCode::Up if focus != Field::Search => Some(UiEvent::HighlightPrev),
        KeyCode::Down if focus != Field::Search => Some(UiEvent::HighlightNext),
        KeyCode::Enter | KeyCode::Char(' ') => match focus {
            Field::State | Field::City => Some(UiEvent::Choose),
            Field::Search => Some(UiEvent::Submit),
        },
        KeyCode::Backspace | KeyCode::Delete if focus == Field::State => Some(UiEvent::ClearState),
        _ => None,
    }
}

/// Handle keys on the results screen
fn handle_results_keys(key: KeyEvent) -> Option<UiEvent> {
    match key.code {
        KeyCode::Esc | KeyCode::Backspace | KeyCode::Char('b') => Some(UiEvent::Back),
        _ => None,
    }
}
