// File: ./src/model/item.rs
use crate::model::priority::Priority;
use chrono::NaiveDate;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToDo {
    pub id: Uuid,
    pub task: String,
    pub date: NaiveDate,
    pub is_checked: bool,
    pub priority: Priority,
}

impl ToDo {
    pub fn new(task: &str, date: NaiveDate, priority: Priority) -> Self {
        Self {
            id: Uuid::new_v4(),
            task: task.to_string(),
            date,
            is_checked: false,
            priority,
        }
    }

    pub fn toggle(&mut self) {
        self.is_checked = !self.is_checked;
    }

    pub fn format_date(&self, fmt: &str) -> String {
        self.date.format(fmt).to_string()
    }
}
