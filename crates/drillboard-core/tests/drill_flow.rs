//! End-to-end drill-down flows: selection → navigation → scoped fetch.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use drillboard_core::{
    BreadcrumbEntry, DataCache, DrillClickAdapter, DrillItem, DrillNavigator, FetchController,
    FetchOptions, ManualClock, MemoryStorage, SharedCache,
};
use serde_json::{Value, json};

fn cache() -> SharedCache {
    DataCache::new(MemoryStorage::new(), ManualClock::new(0)).into_shared()
}

/// Controller for the view at the navigator's current level, keyed by the
/// drill context the way a hosting view would build it.
fn controller_for(
    cache: &SharedCache,
    nav: &DrillNavigator,
    calls: Rc<Cell<usize>>,
) -> FetchController<Value, Value> {
    let scope = nav
        .state()
        .drill_context()
        .map(|item| item.key.clone())
        .unwrap_or_else(|| "root".to_string());
    let key = format!("regions/{scope}");

    FetchController::new(
        cache.clone(),
        {
            let scope = scope.clone();
            move || {
                calls.set(calls.get() + 1);
                let scope = scope.clone();
                async move { Ok::<_, String>(json!({"scope": scope, "rows": [1, 2]})) }
            }
        },
        FetchOptions::new(Value::Null).cache_key(key),
    )
}

#[test]
fn breadcrumb_jump_back_to_root() {
    let mut nav = DrillNavigator::new();
    nav.drill_down(DrillItem::new("east", "East Region"));
    nav.drill_down(DrillItem::new("nyc", "New York"));
    assert_eq!(nav.level(), 2);

    nav.jump_to_level(0);

    assert_eq!(nav.breadcrumbs(), &[BreadcrumbEntry::root()]);
    assert_eq!(nav.level(), 0);
    assert!(nav.state().drill_context().is_none());
}

#[test]
fn clicks_drive_navigation_through_adapter() {
    let nav = Rc::new(RefCell::new(DrillNavigator::new()));
    let adapter = DrillClickAdapter::new({
        let nav = nav.clone();
        move |item| {
            nav.borrow_mut().drill_down(item);
        }
    });

    adapter.drill(&json!({"name": "East", "value": 40}));
    adapter.drill(&json!({"id": 17, "type": "store"}));

    let nav = nav.borrow();
    let labels: Vec<_> = nav.breadcrumbs().iter().map(|e| e.label.as_str()).collect();
    assert_eq!(labels, vec!["All", "East", "store"]);
    assert_eq!(nav.state().drill_context().map(|i| i.key.as_str()), Some("17"));
}

#[tokio::test]
async fn each_level_fetches_once_and_revisits_hit_cache() {
    let cache = cache();
    let calls = Rc::new(Cell::new(0));
    let mut nav = DrillNavigator::new();

    let root = controller_for(&cache, &nav, calls.clone());
    root.load().await;
    assert_eq!(root.data()["scope"], "root");

    nav.drill_down(DrillItem::new("east", "East Region"));
    let east = controller_for(&cache, &nav, calls.clone());
    east.load().await;
    assert_eq!(east.data()["scope"], "east");
    assert_eq!(calls.get(), 2);

    nav.drill_up();
    let root_again = controller_for(&cache, &nav, calls.clone());
    let pending = root_again.load();
    assert!(!root_again.is_loading());
    pending.await;

    assert_eq!(root_again.data()["scope"], "root");
    assert_eq!(calls.get(), 2);
}

#[tokio::test]
async fn failed_level_keeps_previous_data_and_recovers_on_retry() {
    let attempts = Rc::new(Cell::new(0));
    let ctrl = FetchController::new(
        cache(),
        {
            let attempts = attempts.clone();
            move || {
                let n = attempts.get() + 1;
                attempts.set(n);
                async move {
                    match n {
                        2 => Err("gateway timeout".to_string()),
                        _ => Ok(json!({"attempt": n})),
                    }
                }
            }
        },
        FetchOptions::new(json!({})).cache_key("k"),
    );

    ctrl.load().await;
    ctrl.refetch().await;
    assert_eq!(ctrl.data(), json!({"attempt": 1}));
    assert_eq!(ctrl.error().as_deref(), Some("gateway timeout"));

    ctrl.refetch().await;
    assert_eq!(ctrl.data(), json!({"attempt": 3}));
    assert_eq!(ctrl.error(), None);
}
