use std::collections::HashSet;
use uuid::Uuid;

/// Store mutations produced by key handling. They are queued and applied one
/// at a time, in the order they were dispatched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    ToggleTask(Uuid),
    DeleteTasks(HashSet<Uuid>),
    SaveDraft,
    Quit,
}
