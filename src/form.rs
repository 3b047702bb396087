// File: ./src/form.rs
// Draft state of the "New Item" form.
use crate::model::Priority;
use crate::store::TaskStore;
use chrono::{Days, NaiveDate};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormState {
    Editing,
    Saved(Uuid),
    Cancelled,
}

#[derive(Debug, Clone)]
pub struct NewItemForm {
    pub task: String,
    pub date: NaiveDate,
    pub priority: Priority,
    state: FormState,
}

impl NewItemForm {
    pub fn new(today: NaiveDate, priority: Priority) -> Self {
        Self {
            task: String::new(),
            date: today,
            priority,
            state: FormState::Editing,
        }
    }

    pub fn state(&self) -> FormState {
        self.state
    }

    pub fn is_editing(&self) -> bool {
        self.state == FormState::Editing
    }

    /// Save stays disabled while the title is empty.
    pub fn can_save(&self) -> bool {
        self.is_editing() && !self.task.is_empty()
    }

    /// Adds the draft to `store` and closes the form. Returns None (and leaves
    /// the store alone) when saving is not allowed.
    pub fn save(&mut self, store: &mut TaskStore) -> Option<Uuid> {
        if !self.can_save() {
            return None;
        }
        let id = store.add(&self.task, self.date, self.priority).id;
        self.state = FormState::Saved(id);
        Some(id)
    }

    pub fn cancel(&mut self) {
        if self.is_editing() {
            self.state = FormState::Cancelled;
        }
    }

    pub fn set_task(&mut self, task: &str) {
        self.task = task.to_string();
    }

    pub fn push_char(&mut self, c: char) {
        self.task.push(c);
    }

    pub fn pop_char(&mut self) {
        self.task.pop();
    }

    pub fn set_date(&mut self, date: NaiveDate) {
        self.date = date;
    }

    /// Moves the date by whole days; out-of-range results leave it unchanged.
    pub fn shift_date(&mut self, days: i64) {
        let shifted = if days >= 0 {
            self.date.checked_add_days(Days::new(days.unsigned_abs()))
        } else {
            self.date.checked_sub_days(Days::new(days.unsigned_abs()))
        };
        if let Some(d) = shifted {
            self.date = d;
        }
    }

    pub fn set_priority(&mut self, priority: Priority) {
        self.priority = priority;
    }

    pub fn cycle_priority(&mut self, forward: bool) {
        self.priority = self.priority.step(forward);
    }
}
