// File: ./src/model/mod.rs
// Aggregates the split model files
pub mod item;
pub mod priority;

pub use item::ToDo;
pub use priority::{ParsePriorityError, Priority, PriorityColor, priority_color};
