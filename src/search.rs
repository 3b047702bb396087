// File: ./src/search.rs
// Free-text filtering of the task list. Filtering never touches the store.
use crate::model::ToDo;
use crate::store::TaskStore;
use std::collections::{BTreeSet, HashSet};
use uuid::Uuid;

/// Case-insensitive substring match on the title. Blank queries match everything.
pub fn matches(todo: &ToDo, query: &str) -> bool {
    let query = query.trim();
    if query.is_empty() {
        return true;
    }
    todo.task.to_lowercase().contains(&query.to_lowercase())
}

/// The ids currently on screen, in store order.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TaskView {
    ids: Vec<Uuid>,
}

impl TaskView {
    pub fn build(store: &TaskStore, query: &str) -> Self {
        let ids = store
            .list()
            .iter()
            .filter(|t| matches(t, query))
            .map(|t| t.id)
            .collect();
        Self { ids }
    }

    pub fn ids(&self) -> &[Uuid] {
        &self.ids
    }

    pub fn id_at(&self, offset: usize) -> Option<Uuid> {
        self.ids.get(offset).copied()
    }

    pub fn offset_of(&self, id: Uuid) -> Option<usize> {
        self.ids.iter().position(|i| *i == id)
    }

    /// Offsets past the end are dropped.
    pub fn resolve(&self, offsets: &BTreeSet<usize>) -> HashSet<Uuid> {
        offsets.iter().filter_map(|&o| self.id_at(o)).collect()
    }

    /// Items of `store` in view order. Ids that vanished from the store are skipped.
    pub fn items<'a>(&'a self, store: &'a TaskStore) -> impl Iterator<Item = &'a ToDo> + 'a {
        self.ids.iter().filter_map(move |id| store.get(*id))
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn store() -> TaskStore {
        TaskStore::with_examples(NaiveDate::from_ymd_opt(2025, 1, 1).unwrap())
    }

    #[test]
    fn exact_title_yields_one() {
        let store = store();
        let view = TaskView::build(&store, "Beispiel 2");
        let found: Vec<&str> = view.items(&store).map(|t| t.task.as_str()).collect();
        assert_eq!(found, ["Beispiel 2"]);
        assert_eq!(store.len(), 4);
        assert_eq!(store.list()[0].task, "Beispiel 1");
    }

    #[test]
    fn case_insensitive_and_trimmed() {
        let store = store();
        assert_eq!(TaskView::build(&store, "  BEISPIEL ").len(), 4);
        assert_eq!(TaskView::build(&store, "spiel 3").len(), 1);
        assert!(TaskView::build(&store, "Einkauf").is_empty());
    }

    #[test]
    fn blank_query_shows_everything_in_order() {
        let store = store();
        let view = TaskView::build(&store, "");
        let all: Vec<Uuid> = store.list().iter().map(|t| t.id).collect();
        assert_eq!(view.ids(), all.as_slice());
    }

    #[test]
    fn resolve_maps_offsets_to_ids() {
        let store = store();
        let view = TaskView::build(&store, "Beispiel");
        let ids = view.resolve(&BTreeSet::from([0, 3, 7]));
        assert_eq!(ids.len(), 2);
        assert!(ids.contains(&store.list()[0].id));
        assert!(ids.contains(&store.list()[3].id));
        assert_eq!(view.offset_of(store.list()[3].id), Some(3));
    }
}
