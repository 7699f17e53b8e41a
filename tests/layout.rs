use std::collections::BTreeSet;

use frontpage_builder::catalog::{Article, ArticleId, Catalog, Package};
use frontpage_builder::drag::{DragController, GestureEnd};
use frontpage_builder::slot::LAYOUT;
use frontpage_builder::store::SlotStore;

fn catalog() -> Catalog {
    Catalog::new(
        vec![Article::new("1", "Första"), Article::new("2", "Andra"), Article::new("3", "Tredje")],
        vec![Package {
            id: "skola".into(),
            name: "Skolan".into(),
            icon: "🎒".into(),
            articles: vec![Article::new("s1", "Skolmaten")],
        }],
    )
}

fn ids(values: &[&str]) -> BTreeSet<ArticleId> {
    values.iter().map(|v| ArticleId::from(*v)).collect()
}

fn assert_used_matches_slots(store: &SlotStore) {
    let placed: BTreeSet<ArticleId> = store.get_all().into_values().flatten().collect();
    assert_eq!(&placed, store.used());
}

#[test]
fn fresh_store_has_every_slot_empty() {
    let store = SlotStore::new();
    let all = store.get_all();
    assert_eq!(all.len(), LAYOUT.len());
    assert!(all.values().all(Option::is_none));
    assert!(store.used().is_empty());
}

#[test]
fn used_set_tracks_assign_and_clear() {
    let catalog = catalog();
    let mut store = SlotStore::new();

    store.assign(&catalog, "puff1", "1");
    store.assign(&catalog, "huvudnyhet", "2");
    store.assign(&catalog, "liten1", "s1");
    assert_eq!(store.used(), &ids(&["1", "2", "s1"]));
    assert_used_matches_slots(&store);

    store.assign(&catalog, "puff1", "3");
    assert_eq!(store.used(), &ids(&["2", "3", "s1"]));

    assert_eq!(store.clear("huvudnyhet"), Some(ArticleId::from("2")));
    assert_eq!(store.used(), &ids(&["3", "s1"]));
    assert_used_matches_slots(&store);
}

#[test]
fn an_article_sits_in_one_slot_at_a_time() {
    let catalog = catalog();
    let mut store = SlotStore::new();

    store.assign(&catalog, "puff1", "1");
    let moved = store.assign(&catalog, "mellan1", "1").unwrap();

    assert_eq!(moved.vacated.map(|s| s.name), Some("puff1"));
    assert_eq!(store.get("puff1"), None);
    assert_eq!(store.get("mellan1"), Some(&ArticleId::from("1")));
    assert_eq!(store.used(), &ids(&["1"]));
}

#[test]
fn unknown_article_or_slot_is_a_no_op() {
    let catalog = catalog();
    let mut store = SlotStore::new();

    assert!(store.assign(&catalog, "puff1", "nope").is_none());
    assert!(store.assign(&catalog, "sidan99", "1").is_none());
    assert!(store.used().is_empty());
}

#[test]
fn card_drop_fills_the_target() {
    let catalog = catalog();
    let mut store = SlotStore::new();
    let mut drag = DragController::new();

    drag.start_from_card(ArticleId::from("2"));
    drag.enter("texttopp");
    assert!(drag.is_drag_over("texttopp"));

    let changed = drag.drop_on(&mut store, &catalog, "texttopp");
    assert_eq!(changed.iter().map(|s| s.name).collect::<Vec<_>>(), ["texttopp"]);
    assert!(!drag.is_drag_over("texttopp"));
    assert_eq!(drag.end(), GestureEnd::Dropped);
    assert!(store.is_used("2"));
}

#[test]
fn slot_to_filled_slot_drop_swaps() {
    let catalog = catalog();
    let mut store = SlotStore::new();
    let mut drag = DragController::new();
    store.assign(&catalog, "puff1", "1");
    store.assign(&catalog, "puff2", "2");

    assert!(drag.start_from_slot(&store, "puff1"));
    let changed = drag.drop_on(&mut store, &catalog, "puff2");
    drag.end();

    assert_eq!(store.get("puff1"), Some(&ArticleId::from("2")));
    assert_eq!(store.get("puff2"), Some(&ArticleId::from("1")));
    assert_eq!(store.used(), &ids(&["1", "2"]));
    assert_eq!(changed.iter().map(|s| s.name).collect::<Vec<_>>(), ["puff1", "puff2"]);
}

#[test]
fn slot_to_empty_slot_drop_moves() {
    let catalog = catalog();
    let mut store = SlotStore::new();
    let mut drag = DragController::new();
    store.assign(&catalog, "citat", "3");

    assert!(drag.start_from_slot(&store, "citat"));
    drag.drop_on(&mut store, &catalog, "liten2");

    assert!(!store.is_filled("citat"));
    assert_eq!(store.get("liten2"), Some(&ArticleId::from("3")));
    assert_used_matches_slots(&store);
}

#[test]
fn dragging_an_empty_slot_is_refused() {
    let store = SlotStore::new();
    let mut drag = DragController::new();

    assert!(!drag.start_from_slot(&store, "mellan1"));
    assert!(drag.payload().is_none());
}

#[test]
fn abandoned_gesture_is_cancelled_and_leaves_store_alone() {
    let catalog = catalog();
    let mut store = SlotStore::new();
    let mut drag = DragController::new();
    store.assign(&catalog, "puff3", "1");

    drag.start_from_card(ArticleId::from("2"));
    drag.enter("puff3");
    drag.leave("puff3");

    assert_eq!(drag.end(), GestureEnd::Cancelled);
    assert_eq!(store.get("puff3"), Some(&ArticleId::from("1")));
    assert!(!drag.is_dragging_card("2"));
}

#[test]
fn pinned_size_is_dropped_on_reassign() {
    let catalog = catalog();
    let mut store = SlotStore::new();
    store.assign(&catalog, "mellan1", "1");
    store.pin_size("mellan1", 30.0);
    assert_eq!(store.pinned_size("mellan1"), Some(30.0));

    store.assign(&catalog, "mellan1", "2");
    assert_eq!(store.pinned_size("mellan1"), None);
}
