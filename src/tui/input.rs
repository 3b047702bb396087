use crate::model::Priority;
use crate::tui::action::Action;
use crate::tui::state::{AppState, FormField, InputMode};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEventKind};

/// Updates UI-only state in place and returns the store mutation, if any, the
/// key asks for.
pub fn handle_key(state: &mut AppState, key: KeyEvent) -> Option<Action> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }
    match state.mode {
        InputMode::Normal => handle_normal(state, key),
        InputMode::Searching => {
            handle_search(state, key);
            None
        }
        InputMode::Creating => handle_form(state, key),
        InputMode::Folder => {
            if matches!(
                key.code,
                KeyCode::Esc | KeyCode::Enter | KeyCode::Char('f') | KeyCode::Char('q')
            ) {
                state.mode = InputMode::Normal;
            }
            None
        }
    }
}

/// Wheel scrolling moves the list only while no popup or search bar has focus.
pub fn handle_mouse(state: &mut AppState, kind: MouseEventKind) {
    if state.mode != InputMode::Normal {
        return;
    }
    match kind {
        MouseEventKind::ScrollDown => state.next(),
        MouseEventKind::ScrollUp => state.previous(),
        _ => {}
    }
}

fn handle_normal(state: &mut AppState, key: KeyEvent) -> Option<Action> {
    match key.code {
        KeyCode::Char('q') => return Some(Action::Quit),
        KeyCode::Down | KeyCode::Char('j') => state.next(),
        KeyCode::Up | KeyCode::Char('k') => state.previous(),
        KeyCode::PageDown => state.jump_forward(10),
        KeyCode::PageUp => state.jump_backward(10),
        KeyCode::Char(' ') | KeyCode::Enter => {
            return state.selected_id().map(Action::ToggleTask);
        }
        KeyCode::Char('a') | KeyCode::Char('+') => state.open_form(),
        KeyCode::Char('/') => state.start_search(),
        KeyCode::Char('m') => state.toggle_mark(),
        KeyCode::Char('d') | KeyCode::Delete => {
            let targets = state.delete_targets();
            if !targets.is_empty() {
                return Some(Action::DeleteTasks(targets));
            }
        }
        KeyCode::Char('f') => state.mode = InputMode::Folder,
        KeyCode::Esc => {
            state.marked.clear();
            state.clear_search();
        }
        _ => {}
    }
    None
}

fn handle_search(state: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Enter => state.mode = InputMode::Normal,
        KeyCode::Esc => {
            state.clear_search();
            state.mode = InputMode::Normal;
        }
        KeyCode::Char(c) => state.enter_char(c),
        KeyCode::Backspace => state.delete_char(),
        KeyCode::Left => state.move_cursor_left(),
        KeyCode::Right => state.move_cursor_right(),
        _ => {}
    }
}

fn handle_form(state: &mut AppState, key: KeyEvent) -> Option<Action> {
    match key.code {
        KeyCode::Esc => {
            state.cancel_form();
            return None;
        }
        KeyCode::Enter => return Some(Action::SaveDraft),
        KeyCode::Tab => {
            state.form_focus = state.form_focus.next();
            return None;
        }
        KeyCode::BackTab => {
            state.form_focus = state.form_focus.previous();
            return None;
        }
        _ => {}
    }

    let focus = state.form_focus;
    let form = state.form.as_mut()?;
    match (focus, key.code) {
        (FormField::Title, KeyCode::Char(c)) => form.push_char(c),
        (FormField::Title, KeyCode::Backspace) => form.pop_char(),
        (FormField::Date, KeyCode::Right) => form.shift_date(1),
        (FormField::Date, KeyCode::Left) => form.shift_date(-1),
        (FormField::Date, KeyCode::Up) => form.shift_date(7),
        (FormField::Date, KeyCode::Down) => form.shift_date(-7),
        (FormField::Date, KeyCode::Char('t')) => form.set_date(AppState::today()),
        (FormField::Priority, KeyCode::Right) => form.cycle_priority(true),
        (FormField::Priority, KeyCode::Left) => form.cycle_priority(false),
        (FormField::Priority, KeyCode::Char('l')) => form.set_priority(Priority::Low),
        (FormField::Priority, KeyCode::Char('m')) => form.set_priority(Priority::Medium),
        (FormField::Priority, KeyCode::Char('h')) => form.set_priority(Priority::High),
        _ => {}
    }
    None
}
