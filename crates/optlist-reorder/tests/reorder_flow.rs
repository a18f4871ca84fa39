//! End-to-end reorder flow: seed, grow, rename from the catalog, and
//! reorder through a scripted gesture source.

use optlist_core::{Catalog, CatalogEntry, OrderedItemStore};
use optlist_reorder::{
    DragEndEvent, GestureSource, ReorderResolver, ResolveOutcome, ScriptedGestureSource,
    ViewStateMap,
};

fn catalog() -> Catalog {
    Catalog::new((1..=5).map(|n| CatalogEntry::new(n.to_string(), format!("Name {n}"))))
}

fn snapshot(store: &OrderedItemStore) -> Vec<(&str, Option<&str>)> {
    store
        .items()
        .iter()
        .map(|i| (i.id().as_str(), i.name()))
        .collect()
}

#[test]
fn build_rename_and_reorder() {
    let mut store = OrderedItemStore::new();
    assert_eq!(
        snapshot(&store),
        vec![("1", None), ("2", None), ("3", None)]
    );

    // Grow by two.
    assert_eq!(store.append().as_ref().map(|id| id.as_str()), Some("4"));
    assert_eq!(store.append().as_ref().map(|id| id.as_str()), Some("5"));
    assert_eq!(store.len(), 5);

    // Pick "Name 5" from the catalog for the last item, the way a
    // search box would: filter, take the hit, assign its label.
    let catalog = catalog();
    let hit = catalog.matching("name 5").next().expect("catalog hit");
    assert!(store.rename(4, hit.label.clone()));

    // Drag item "5" onto item "1".
    let mut gestures = ScriptedGestureSource::new();
    gestures.push(DragEndEvent::new("5", "1"));
    let outcomes = ReorderResolver::new().drain(&mut store, &mut gestures);
    assert_eq!(outcomes, vec![ResolveOutcome::Moved { from: 4, to: 0 }]);

    assert_eq!(
        snapshot(&store),
        vec![
            ("5", Some("Name 5")),
            ("1", None),
            ("2", None),
            ("3", None),
            ("4", None),
        ]
    );
}

#[test]
fn degraded_gestures_leave_everything_consistent() {
    let mut store = OrderedItemStore::new();
    let before = store.clone();
    let resolver = ReorderResolver::new();

    let mut gestures = ScriptedGestureSource::new();
    gestures.extend([
        DragEndEvent::cancelled("2"),
        DragEndEvent::new("2", "2"),
        DragEndEvent::new("nope", "1"),
    ]);

    let outcomes = resolver.drain(&mut store, &mut gestures);
    assert_eq!(
        outcomes,
        vec![
            ResolveOutcome::NoTarget,
            ResolveOutcome::SelfDrop,
            ResolveOutcome::UnknownId,
        ]
    );
    assert_eq!(store, before);
}

#[test]
fn view_state_and_names_survive_interleaved_gestures() {
    let mut store = OrderedItemStore::new();
    let mut view = ViewStateMap::new();
    let resolver = ReorderResolver::new();
    let catalog = catalog();

    // User opens the picker on item "2" and selects a name.
    let target = store.get(1).expect("seeded item").id().clone();
    view.open_popover(&target);
    let label = catalog.label_for("3").expect("catalog label").to_string();
    assert!(store.rename(1, label.clone()));
    view.set_selected(&target, label);
    view.close_popover(&target);

    // Then drags it to the front, with a stray cancelled drag mixed in.
    let mut gestures = ScriptedGestureSource::new();
    gestures.push(DragEndEvent::cancelled("3"));
    gestures.push(DragEndEvent::new("2", "1"));
    while let Some(event) = gestures.next_drag_end() {
        resolver.resolve(&mut store, &event);
    }

    let first = store.get(0).expect("moved item");
    assert_eq!(first.id().as_str(), "2");
    assert_eq!(first.name(), Some("Name 3"));
    assert_eq!(view.selected(first.id()), Some("Name 3"));
    assert!(!view.is_popover_open(first.id()));
}
