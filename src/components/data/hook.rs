//! Data loading hook.
//!
//! Bridges a [`FetchController`] into the reactive graph: the controller
//! keeps the load/cache/generation logic, and every state change it reports
//! is mirrored into a signal the view can read.

use std::cell::RefCell;
use std::fmt::Display;
use std::future::Future;
use std::hash::Hash;
use std::rc::Rc;

use drillboard_core::{FetchController, FetchOptions, FetchState};
use leptos::prelude::*;
use serde::{Serialize, de::DeserializeOwned};
use wasm_bindgen_futures::spawn_local;

use crate::app::AppContext;

/// Reactive handle returned by [`use_fetch`].
///
/// `Copy` like a signal; all methods are cheap.
pub struct FetchHandle<R, T> {
    state: RwSignal<FetchState<T>>,
    controller: StoredValue<FetchController<R, T>, LocalStorage>,
}

impl<R, T> Clone for FetchHandle<R, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R, T> Copy for FetchHandle<R, T> {}

impl<R, T> FetchHandle<R, T>
where
    R: Serialize + DeserializeOwned + 'static,
    T: Clone + Send + Sync + 'static,
{
    /// Current data (tracked).
    pub fn data(&self) -> T {
        self.state.with(|s| s.data.clone())
    }

    pub fn loading(&self) -> bool {
        self.state.with(|s| s.loading)
    }

    pub fn error(&self) -> Option<String> {
        self.state.with(|s| s.error.clone())
    }

    /// Reload from the network, skipping the cache.
    pub fn refetch(&self) {
        if let Some(pending) = self.controller.try_with_value(|c| c.refetch()) {
            spawn_local(pending);
        }
    }

    /// Overwrite the data locally (optimistic edits).
    #[allow(dead_code)]
    pub fn set_data(&self, data: T) {
        self.controller.with_value(|c| c.set_data(data));
    }
}

/// Load data for a view.
///
/// `deps` is tracked: the first run loads, and every later run whose value
/// differs from the previous one loads again with `fetch(deps)`.
/// Equal values (e.g. an unrelated signal in the same closure changing)
/// start nothing.
///
/// # Example
///
/// ```ignore
/// let sales = use_fetch(
///     move || scope.get(),
///     fetch_segments,
///     FetchOptions::new(Vec::new()).cache_key("sales"),
/// );
/// ```
pub fn use_fetch<D, R, T, F, Fut, E>(
    deps: impl Fn() -> D + 'static,
    fetch: F,
    options: FetchOptions<R, T>,
) -> FetchHandle<R, T>
where
    D: Hash + Clone + 'static,
    F: Fn(D) -> Fut + 'static,
    Fut: Future<Output = Result<R, E>> + 'static,
    E: Display + 'static,
    R: Serialize + DeserializeOwned + 'static,
    T: Clone + Send + Sync + 'static,
{
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let current = Rc::new(RefCell::new(untrack(&deps)));
    let controller = FetchController::new(
        ctx.cache(),
        {
            let current = current.clone();
            move || {
                let deps = current.borrow().clone();
                fetch(deps)
            }
        },
        options,
    );

    let state = RwSignal::new(controller.state());
    controller.subscribe(move |s| {
        // The view may already be gone when a slow response lands
        let _ = state.try_set(s.clone());
    });

    let handle = FetchHandle {
        state,
        controller: StoredValue::new_local(controller.clone()),
    };

    Effect::new(move |_| {
        let value = deps();
        *current.borrow_mut() = value.clone();
        if let Some(pending) = controller.sync_deps(&value) {
            spawn_local(pending);
        }
    });

    handle
}
