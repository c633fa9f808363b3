use crate::state::AppState;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};
use std::path::Path;

/// What the render loop should do after a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputOutcome {
    Continue,
    Quit,
}

pub fn handle_key_event(key: KeyEvent, state: &mut AppState, save_path: &Path) -> InputOutcome {
    if key.kind == KeyEventKind::Release {
        return InputOutcome::Continue;
    }

    match key.code {
        KeyCode::Char('q') => return InputOutcome::Quit,
        KeyCode::Up | KeyCode::Char('k') => state.move_cursor(1, 0),
        KeyCode::Down | KeyCode::Char('j') => state.move_cursor(-1, 0),
        KeyCode::Left | KeyCode::Char('h') => state.move_cursor(0, -1),
        KeyCode::Right | KeyCode::Char('l') => state.move_cursor(0, 1),
        KeyCode::Enter | KeyCode::Char(' ') => state.activate_cursor(),
        KeyCode::Esc => state.clear_selection(),
        KeyCode::Char('n') => state.new_game(),
        KeyCode::Char('u') => state.undo(),
        KeyCode::Char('s') => state.save(save_path),
        KeyCode::Char('o') => state.load(save_path),
        _ => {}
    }

    InputOutcome::Continue
}
