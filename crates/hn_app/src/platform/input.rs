use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use hn_core::Msg;

/// What a key press means to the app.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Dispatch(Msg),
    SelectPrevious,
    SelectNext,
    FavoriteSelected,
    OpenSelected,
    Quit,
}

/// Maps a key press to an action. Text keys edit a copy of `search_term`.
pub fn map_key(key: KeyEvent, search_term: &str) -> Option<Action> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Esc => Some(Action::Quit),
        KeyCode::Char('c') if ctrl => Some(Action::Quit),
        KeyCode::Char('f') if ctrl => Some(Action::FavoriteSelected),
        KeyCode::Char('o') if ctrl => Some(Action::OpenSelected),
        KeyCode::Up => Some(Action::SelectPrevious),
        KeyCode::Down => Some(Action::SelectNext),
        KeyCode::Enter => Some(Action::Dispatch(Msg::SearchSubmitted)),
        KeyCode::Backspace => {
            let mut term = search_term.to_string();
            term.pop()?;
            Some(Action::Dispatch(Msg::SearchInputChanged(term)))
        }
        KeyCode::Char(ch) if !ctrl => {
            let mut term = search_term.to_string();
            term.push(ch);
            Some(Action::Dispatch(Msg::SearchInputChanged(term)))
        }
        _ => None,
    }
}
