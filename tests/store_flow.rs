use chrono::Local;
use listo::form::{FormState, NewItemForm};
use listo::model::{Priority, PriorityColor, priority_color};
use listo::search::TaskView;
use listo::store::TaskStore;
use std::collections::{BTreeSet, HashSet};

fn titles(store: &TaskStore) -> Vec<&str> {
    store.list().iter().map(|t| t.task.as_str()).collect()
}

#[test]
fn first_launch_walkthrough() {
    let today = Local::now().date_naive();
    let mut store = TaskStore::with_examples(today);
    assert_eq!(store.len(), 4);

    // Toggle the first item.
    let first = store.list()[0].id;
    assert!(store.toggle(first));
    assert!(store.list()[0].is_checked);

    // Add through the form.
    let mut form = NewItemForm::new(today, Priority::default());
    form.set_task("Beispiel 5");
    form.set_priority(Priority::High);
    let id = form.save(&mut store).expect("non-empty title saves");
    assert_eq!(form.state(), FormState::Saved(id));
    assert_eq!(store.len(), 5);
    let last = store.list().last().unwrap();
    assert_eq!(last.id, id);
    assert!(!last.is_checked);
    assert_eq!(priority_color(last.priority.label()), PriorityColor::Red);

    // Delete offset 0 of the unfiltered list.
    let view = TaskView::build(&store, "");
    assert_eq!(store.remove_in_view(&view, &BTreeSet::from([0])), 1);
    assert_eq!(store.len(), 4);
    assert_eq!(store.list()[0].task, "Beispiel 2");
}

#[test]
fn filtering_is_read_only() {
    let store = TaskStore::with_examples(Local::now().date_naive());
    let before = store.list().to_vec();

    let view = TaskView::build(&store, "Beispiel 2");
    let shown: Vec<&str> = view.items(&store).map(|t| t.task.as_str()).collect();
    assert_eq!(shown, ["Beispiel 2"]);
    assert_eq!(store.list(), before.as_slice());
}

#[test]
fn empty_title_never_reaches_the_store() {
    let today = Local::now().date_naive();
    let mut store = TaskStore::with_examples(today);
    let mut form = NewItemForm::new(today, Priority::Medium);
    assert!(!form.can_save());
    assert!(form.save(&mut store).is_none());
    form.cancel();
    assert_eq!(form.state(), FormState::Cancelled);
    assert_eq!(store.len(), 4);
}

#[test]
fn delete_by_identity_preserves_order() {
    let mut store = TaskStore::with_examples(Local::now().date_naive());
    let extra = store
        .add("Beispiel 5", Local::now().date_naive(), Priority::Low)
        .id;
    let ids: HashSet<_> = [store.list()[1].id, extra].into();
    assert_eq!(store.remove(&ids), 2);
    assert_eq!(titles(&store), ["Beispiel 1", "Beispiel 3", "Beispiel 4"]);
}
