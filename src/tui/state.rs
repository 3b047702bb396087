use crate::config::Config;
use crate::form::NewItemForm;
use crate::search::TaskView;
use crate::store::TaskStore;
use crate::tui::action::Action;
use chrono::{Local, NaiveDate};
use ratatui::widgets::ListState;
use std::collections::HashSet;
use uuid::Uuid;

pub const HELP_TEXT: &str = "a: Add | /: Search | Space: Done | m: Mark | d: Del | f: Folder | q: Quit";

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum InputMode {
    Normal,
    Searching,
    Creating,
    Folder,
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum FormField {
    Title,
    Date,
    Priority,
}

impl FormField {
    pub fn next(self) -> Self {
        match self {
            FormField::Title => FormField::Date,
            FormField::Date => FormField::Priority,
            FormField::Priority => FormField::Title,
        }
    }

    pub fn previous(self) -> Self {
        match self {
            FormField::Title => FormField::Priority,
            FormField::Date => FormField::Title,
            FormField::Priority => FormField::Date,
        }
    }
}

pub struct AppState {
    pub store: TaskStore,
    pub config: Config,
    pub view: TaskView,
    pub list_state: ListState,
    pub marked: HashSet<Uuid>,
    pub mode: InputMode,
    pub query: String,
    pub cursor_position: usize,
    pub form: Option<NewItemForm>,
    pub form_focus: FormField,
    pub message: String,
}

impl AppState {
    pub fn new(store: TaskStore, config: Config) -> Self {
        let mut l_state = ListState::default();
        l_state.select(Some(0));
        let message = format!("Tasks: {}", store.len());
        let mut state = Self {
            store,
            config,
            view: TaskView::default(),
            list_state: l_state,
            marked: HashSet::new(),
            mode: InputMode::Normal,
            query: String::new(),
            cursor_position: 0,
            form: None,
            form_focus: FormField::Title,
            message,
        };
        state.recalculate_view();
        state
    }

    pub fn today() -> NaiveDate {
        Local::now().date_naive()
    }

    /// Applies one queued store mutation. `Quit` is handled by the event loop.
    pub fn apply(&mut self, action: Action) {
        match action {
            Action::ToggleTask(id) => {
                if self.store.toggle(id) {
                    let checked = self.store.get(id).is_some_and(|t| t.is_checked);
                    self.message = (if checked { "Done." } else { "Reopened." }).to_string();
                }
            }
            Action::DeleteTasks(ids) => {
                let removed = self.store.remove(&ids);
                self.marked.retain(|id| !ids.contains(id));
                self.message = format!("Deleted {}.", removed);
            }
            Action::SaveDraft => {
                let Some(form) = self.form.as_mut() else {
                    return;
                };
                match form.save(&mut self.store) {
                    Some(id) => {
                        self.close_form();
                        self.recalculate_view();
                        if let Some(offset) = self.view.offset_of(id) {
                            self.list_state.select(Some(offset));
                        }
                        self.message = "Created.".to_string();
                        return;
                    }
                    None => {
                        self.message = "A title is required to save.".to_string();
                    }
                }
            }
            Action::Quit => {}
        }
        self.recalculate_view();
    }

    pub fn open_form(&mut self) {
        self.form = Some(NewItemForm::new(
            Self::today(),
            self.config.default_priority,
        ));
        self.form_focus = FormField::Title;
        self.mode = InputMode::Creating;
        self.message = "Enter: Save | Esc: Cancel | Tab: Next field".to_string();
    }

    pub fn cancel_form(&mut self) {
        if let Some(form) = self.form.as_mut() {
            form.cancel();
        }
        self.close_form();
        self.message = "Cancelled.".to_string();
    }

    fn close_form(&mut self) {
        self.form = None;
        self.mode = InputMode::Normal;
    }

    pub fn start_search(&mut self) {
        self.mode = InputMode::Searching;
        self.cursor_position = self.query.chars().count();
    }

    pub fn clear_search(&mut self) {
        self.query.clear();
        self.cursor_position = 0;
        self.recalculate_view();
    }

    pub fn move_cursor_left(&mut self) {
        let cursor_moved_left = self.cursor_position.saturating_sub(1);
        self.cursor_position = self.clamp_cursor(cursor_moved_left);
    }
    pub fn move_cursor_right(&mut self) {
        let cursor_moved_right = self.cursor_position.saturating_add(1);
        self.cursor_position = self.clamp_cursor(cursor_moved_right);
    }
    pub fn enter_char(&mut self, new_char: char) {
        let idx = self.byte_index();
        self.query.insert(idx, new_char);
        self.move_cursor_right();
        self.recalculate_view();
    }
    pub fn delete_char(&mut self) {
        if self.cursor_position != 0 {
            let current_index = self.cursor_position;
            let from_left_to_current_index = current_index - 1;
            let before_char_to_delete = self.query.chars().take(from_left_to_current_index);
            let after_char_to_delete = self.query.chars().skip(current_index);
            self.query = before_char_to_delete.chain(after_char_to_delete).collect();
            self.move_cursor_left();
            self.recalculate_view();
        }
    }
    fn byte_index(&self) -> usize {
        self.query
            .char_indices()
            .map(|(i, _)| i)
            .nth(self.cursor_position)
            .unwrap_or(self.query.len())
    }
    fn clamp_cursor(&self, new_cursor_pos: usize) -> usize {
        new_cursor_pos.clamp(0, self.query.chars().count())
    }

    pub fn recalculate_view(&mut self) {
        self.view = TaskView::build(&self.store, &self.query);
        let sel = self.list_state.selected().unwrap_or(0);
        if self.view.is_empty() {
            self.list_state.select(Some(0));
        } else if sel >= self.view.len() {
            self.list_state.select(Some(self.view.len() - 1));
        }
    }

    pub fn selected_id(&self) -> Option<Uuid> {
        self.list_state
            .selected()
            .and_then(|offset| self.view.id_at(offset))
    }

    pub fn toggle_mark(&mut self) {
        if let Some(id) = self.selected_id()
            && !self.marked.remove(&id)
        {
            self.marked.insert(id);
        }
    }

    /// Marked items that are currently visible, otherwise the selected one.
    /// Marks hidden by the search are never deleted.
    pub fn delete_targets(&self) -> HashSet<Uuid> {
        let visible: HashSet<Uuid> = self
            .view
            .ids()
            .iter()
            .filter(|id| self.marked.contains(id))
            .copied()
            .collect();
        if visible.is_empty() {
            self.selected_id().into_iter().collect()
        } else {
            visible
        }
    }

    pub fn next(&mut self) {
        let len = self.view.len();
        if len == 0 {
            return;
        }
        let i = match self.list_state.selected() {
            Some(i) => {
                if i >= len - 1 {
                    0
                } else {
                    i + 1
                }
            }
            None => 0,
        };
        self.list_state.select(Some(i));
    }
    pub fn previous(&mut self) {
        let len = self.view.len();
        if len == 0 {
            return;
        }
        let i = match self.list_state.selected() {
            Some(i) => {
                if i == 0 {
                    len - 1
                } else {
                    i - 1
                }
            }
            None => 0,
        };
        self.list_state.select(Some(i));
    }
    pub fn jump_forward(&mut self, step: usize) {
        if self.view.is_empty() {
            return;
        }
        let current = self.list_state.selected().unwrap_or(0);
        let new_index = (current + step).min(self.view.len() - 1);
        self.list_state.select(Some(new_index));
    }
    pub fn jump_backward(&mut self, step: usize) {
        if self.view.is_empty() {
            return;
        }
        let current = self.list_state.selected().unwrap_or(0);
        let new_index = current.saturating_sub(step);
        self.list_state.select(Some(new_index));
    }
}
