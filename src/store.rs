// File: ./src/store.rs
use crate::model::{Priority, ToDo};
use crate::search::TaskView;
use chrono::NaiveDate;
use std::collections::{BTreeSet, HashSet};
use uuid::Uuid;

/// Owner of the ordered task list. Order is insertion order; all mutations
/// go through ids so a filtered view can never hit the wrong item.
#[derive(Debug, Default, Clone)]
pub struct TaskStore {
    items: Vec<ToDo>,
}

impl TaskStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// The four example items shown on first launch.
    pub fn with_examples(today: NaiveDate) -> Self {
        let mut store = Self::new();
        store.add("Beispiel 1", today, Priority::Medium);
        store.add("Beispiel 2", today, Priority::High);
        let id = store.add("Beispiel 3", today, Priority::Low).id;
        store.toggle(id);
        store.add("Beispiel 4", today, Priority::Medium);
        store
    }

    /// Appends a new unchecked item. Title validation is the caller's job.
    pub fn add(&mut self, task: &str, date: NaiveDate, priority: Priority) -> &ToDo {
        let item = ToDo::new(task, date, priority);
        tracing::debug!(id = %item.id, task, %priority, "added task");
        self.items.push(item);
        &self.items[self.items.len() - 1]
    }

    /// Returns false (and changes nothing) when the id is unknown.
    pub fn toggle(&mut self, id: Uuid) -> bool {
        match self.items.iter_mut().find(|t| t.id == id) {
            Some(item) => {
                item.toggle();
                tracing::debug!(%id, checked = item.is_checked, "toggled task");
                true
            }
            None => {
                tracing::warn!(%id, "toggle for unknown task ignored");
                false
            }
        }
    }

    /// Removes every item whose id is in `ids` in one pass. Unknown ids are ignored.
    pub fn remove(&mut self, ids: &HashSet<Uuid>) -> usize {
        let before = self.items.len();
        self.items.retain(|t| !ids.contains(&t.id));
        let removed = before - self.items.len();
        if removed < ids.len() {
            tracing::warn!(
                requested = ids.len(),
                removed,
                "some tasks were already gone"
            );
        }
        tracing::debug!(removed, "removed tasks");
        removed
    }

    /// Deletes by position in `view`, resolving positions to ids first.
    pub fn remove_in_view(&mut self, view: &TaskView, offsets: &BTreeSet<usize>) -> usize {
        let ids = view.resolve(offsets);
        self.remove(&ids)
    }

    pub fn list(&self) -> &[ToDo] {
        &self.items
    }

    pub fn get(&self, id: Uuid) -> Option<&ToDo> {
        self.items.iter().find(|t| t.id == id)
    }

    pub fn position(&self, id: Uuid) -> Option<usize> {
        self.items.iter().position(|t| t.id == id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 1).unwrap()
    }

    fn titles(store: &TaskStore) -> Vec<&str> {
        store.list().iter().map(|t| t.task.as_str()).collect()
    }

    #[test]
    fn add_appends_unchecked() {
        let mut store = TaskStore::with_examples(day());
        let id = store.add("Neu", day(), Priority::Low).id;
        assert_eq!(store.len(), 5);
        let last = &store.list()[4];
        assert_eq!(last.id, id);
        assert!(!last.is_checked);
        assert_eq!(last.priority, Priority::Low);
    }

    #[test]
    fn store_accepts_empty_title() {
        let mut store = TaskStore::new();
        store.add("", day(), Priority::Medium);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn examples_match_first_launch() {
        let store = TaskStore::with_examples(day());
        assert_eq!(
            titles(&store),
            ["Beispiel 1", "Beispiel 2", "Beispiel 3", "Beispiel 4"]
        );
        let checked: Vec<bool> = store.list().iter().map(|t| t.is_checked).collect();
        assert_eq!(checked, [false, false, true, false]);
        assert_eq!(store.list()[1].priority, Priority::High);
        assert_eq!(store.list()[2].priority, Priority::Low);
    }

    #[test]
    fn double_toggle_round_trips() {
        let mut store = TaskStore::with_examples(day());
        let id = store.list()[2].id;
        assert!(store.toggle(id));
        assert!(!store.get(id).unwrap().is_checked);
        assert!(store.toggle(id));
        assert!(store.get(id).unwrap().is_checked);
    }

    #[test]
    fn toggle_unknown_is_noop() {
        let mut store = TaskStore::with_examples(day());
        let snapshot = store.list().to_vec();
        assert!(!store.toggle(Uuid::new_v4()));
        assert_eq!(store.list(), snapshot.as_slice());
    }

    #[test]
    fn remove_by_id_keeps_order() {
        let mut store = TaskStore::with_examples(day());
        let ids: HashSet<Uuid> = [store.list()[0].id, store.list()[2].id].into();
        assert_eq!(store.remove(&ids), 2);
        assert_eq!(titles(&store), ["Beispiel 2", "Beispiel 4"]);
    }

    #[test]
    fn remove_ignores_missing_ids() {
        let mut store = TaskStore::with_examples(day());
        let ids: HashSet<Uuid> = [store.list()[3].id, Uuid::new_v4()].into();
        assert_eq!(store.remove(&ids), 1);
        assert_eq!(store.len(), 3);
        assert_eq!(store.remove(&HashSet::new()), 0);
    }

    #[test]
    fn remove_in_filtered_view_hits_the_visible_item() {
        let mut store = TaskStore::with_examples(day());
        let view = TaskView::build(&store, "4");
        assert_eq!(view.len(), 1);

        // Offset 0 of the filtered view is "Beispiel 4", not "Beispiel 1".
        assert_eq!(store.remove_in_view(&view, &BTreeSet::from([0])), 1);
        assert_eq!(titles(&store), ["Beispiel 1", "Beispiel 2", "Beispiel 3"]);
    }

    #[test]
    fn remove_in_view_skips_out_of_range() {
        let mut store = TaskStore::with_examples(day());
        let view = TaskView::build(&store, "");
        assert_eq!(store.remove_in_view(&view, &BTreeSet::from([1, 9])), 1);
        assert_eq!(titles(&store), ["Beispiel 1", "Beispiel 3", "Beispiel 4"]);
    }
}
