//! Cached, generation-guarded data loading for one view.
//!
//! A [`FetchController`] owns the `{data, loading, error}` state of a view.
//! Every load is tagged with a generation number; when a response arrives
//! after a newer load has started it is dropped, so a slow old request can
//! never overwrite fresher data.
//!
//! [`load`](FetchController::load) consults the shared [`DataCache`] first
//! and resolves synchronously on a hit. [`refetch`](FetchController::refetch)
//! always goes to the network and refreshes the cached payload.
//!
//! [`DataCache`]: crate::DataCache

use std::cell::{Cell, RefCell};
use std::fmt::Display;
use std::future::Future;
use std::hash::{DefaultHasher, Hash, Hasher};
use std::rc::Rc;
use std::time::Duration;

use futures::future::{self, FutureExt, LocalBoxFuture};
use serde::{Serialize, de::DeserializeOwned};

use crate::cache::SharedCache;
use crate::config::DEFAULT_TTL;

/// Observable state of a controller.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchState<T> {
    /// Last successfully loaded value, or the initial value.
    pub data: T,
    pub loading: bool,
    /// Message of the most recent failure, cleared when a load starts.
    pub error: Option<String>,
}

type Fetcher<R> = Rc<dyn Fn() -> LocalBoxFuture<'static, Result<R, String>>>;
type Transform<R, T> = Rc<dyn Fn(&R) -> T>;
type Listener<T> = Rc<dyn Fn(&FetchState<T>)>;

/// Configuration for a [`FetchController`].
///
/// `R` is the raw payload as fetched and cached, `T` the displayed shape.
pub struct FetchOptions<R, T> {
    initial_value: T,
    transform: Transform<R, T>,
    cache_key: Option<String>,
    ttl: Duration,
}

impl<R: Clone + 'static> FetchOptions<R, R> {
    /// Options with the identity transform.
    pub fn new(initial_value: R) -> Self {
        Self::transformed(initial_value, R::clone)
    }
}

impl<R, T> FetchOptions<R, T> {
    /// Options that display `transform(raw)`.
    pub fn transformed(initial_value: T, transform: impl Fn(&R) -> T + 'static) -> Self {
        Self {
            initial_value,
            transform: Rc::new(transform),
            cache_key: None,
            ttl: DEFAULT_TTL,
        }
    }

    /// Cache raw payloads under `key`. Without a key nothing is cached.
    pub fn cache_key(mut self, key: impl Into<String>) -> Self {
        self.cache_key = Some(key.into());
        self
    }

    pub fn ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }
}

struct Inner<R, T> {
    fetcher: Fetcher<R>,
    transform: RefCell<Transform<R, T>>,
    cache: SharedCache,
    cache_key: Option<String>,
    ttl: Duration,
    state: RefCell<FetchState<T>>,
    generation: Cell<u64>,
    deps: Cell<Option<u64>>,
    listeners: RefCell<Vec<Listener<T>>>,
}

impl<R, T: Clone> Inner<R, T> {
    fn update(&self, f: impl FnOnce(&mut FetchState<T>)) {
        let snapshot = {
            let mut state = self.state.borrow_mut();
            f(&mut state);
            state.clone()
        };
        let listeners = self.listeners.borrow().clone();
        for listener in listeners {
            listener(&snapshot);
        }
    }

    fn apply(&self, raw: &R) -> T {
        let transform = self.transform.borrow().clone();
        transform(raw)
    }
}

/// Loads data for one view instance.
///
/// Cloning yields another handle to the same controller.
pub struct FetchController<R, T> {
    inner: Rc<Inner<R, T>>,
}

impl<R, T> Clone for FetchController<R, T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<R, T> FetchController<R, T>
where
    R: Serialize + DeserializeOwned + 'static,
    T: Clone + 'static,
{
    /// Create a controller. No load starts until [`load`](Self::load) or
    /// [`sync_deps`](Self::sync_deps) is called.
    ///
    /// The error type only needs `Display`: its message becomes
    /// [`FetchState::error`].
    pub fn new<F, Fut, E>(cache: SharedCache, fetch: F, options: FetchOptions<R, T>) -> Self
    where
        F: Fn() -> Fut + 'static,
        Fut: Future<Output = Result<R, E>> + 'static,
        E: Display + 'static,
    {
        let fetcher: Fetcher<R> = Rc::new(move || {
            fetch()
                .map(|result| result.map_err(|e| e.to_string()))
                .boxed_local()
        });

        Self {
            inner: Rc::new(Inner {
                fetcher,
                transform: RefCell::new(options.transform),
                cache,
                cache_key: options.cache_key,
                ttl: options.ttl,
                state: RefCell::new(FetchState {
                    data: options.initial_value,
                    loading: false,
                    error: None,
                }),
                generation: Cell::new(0),
                deps: Cell::new(None),
                listeners: RefCell::new(Vec::new()),
            }),
        }
    }

    /// Start a load, reading the cache first.
    ///
    /// State moves to `loading` immediately. On a cache hit the load
    /// completes before this returns and the future is already ready;
    /// otherwise the future drives the network request.
    pub fn load(&self) -> LocalBoxFuture<'static, ()> {
        self.start(true)
    }

    /// Start a load that skips the cache read.
    ///
    /// A manual refresh must never be answered with cached data; the fresh
    /// result is still written back to the cache.
    pub fn refetch(&self) -> LocalBoxFuture<'static, ()> {
        self.start(false)
    }

    /// Start a load when `deps` differs (by value) from the previous call.
    ///
    /// The first call always loads.
    pub fn sync_deps<D: Hash + ?Sized>(&self, deps: &D) -> Option<LocalBoxFuture<'static, ()>> {
        let mut hasher = DefaultHasher::new();
        deps.hash(&mut hasher);
        let hash = hasher.finish();

        if self.inner.deps.replace(Some(hash)) == Some(hash) {
            return None;
        }
        Some(self.load())
    }

    /// Overwrite `data` without touching `loading` or `error`.
    pub fn set_data(&self, data: T) {
        self.inner.update(|state| state.data = data);
    }

    /// Replace the transform. Takes effect on the next load; a cache hit
    /// re-applies it to the stored raw payload.
    pub fn set_transform(&self, transform: impl Fn(&R) -> T + 'static) {
        *self.inner.transform.borrow_mut() = Rc::new(transform);
    }

    /// Call `listener` after every state change.
    pub fn subscribe(&self, listener: impl Fn(&FetchState<T>) + 'static) {
        self.inner.listeners.borrow_mut().push(Rc::new(listener));
    }

    pub fn state(&self) -> FetchState<T> {
        self.inner.state.borrow().clone()
    }

    pub fn data(&self) -> T {
        self.inner.state.borrow().data.clone()
    }

    pub fn is_loading(&self) -> bool {
        self.inner.state.borrow().loading
    }

    pub fn error(&self) -> Option<String> {
        self.inner.state.borrow().error.clone()
    }

    pub fn cache_key(&self) -> Option<&str> {
        self.inner.cache_key.as_deref()
    }

    fn start(&self, read_cache: bool) -> LocalBoxFuture<'static, ()> {
        let inner = Rc::clone(&self.inner);
        let generation = inner.generation.get() + 1;
        inner.generation.set(generation);

        inner.update(|state| {
            state.loading = true;
            state.error = None;
        });

        if read_cache
            && let Some(key) = inner.cache_key.as_deref()
            && let Some(raw) = inner.cache.read::<R>(key, inner.ttl)
        {
            let data = inner.apply(&raw);
            inner.update(|state| {
                state.data = data;
                state.loading = false;
            });
            return future::ready(()).boxed_local();
        }

        tracing::debug!(key = ?inner.cache_key, generation, "fetching");
        let request = (inner.fetcher)();

        async move {
            let result = request.await;

            if inner.generation.get() != generation {
                tracing::debug!(
                    generation,
                    current = inner.generation.get(),
                    "discarding superseded response"
                );
                return;
            }

            match result {
                Ok(raw) => {
                    let data = inner.apply(&raw);
                    inner.update(|state| {
                        state.data = data;
                        state.loading = false;
                    });
                    if let Some(key) = inner.cache_key.as_deref()
                        && let Err(e) = inner.cache.write(key, &raw)
                    {
                        tracing::warn!(key, error = %e, "failed to cache response");
                    }
                }
                Err(message) => {
                    tracing::warn!(error = %message, "fetch failed");
                    inner.update(|state| {
                        state.error = Some(message);
                        state.loading = false;
                    });
                }
            }
        }
        .boxed_local()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::{CacheStorage, DataCache, MemoryStorage};
    use crate::clock::ManualClock;
    use crate::error::CacheError;
    use futures::channel::oneshot;
    use serde_json::{Value, json};
    use std::collections::VecDeque;

    fn memory_cache() -> SharedCache {
        DataCache::new(MemoryStorage::new(), ManualClock::new(0)).into_shared()
    }

    /// Fetch function returning `value` and counting calls.
    fn counting<R: Clone + 'static>(
        value: R,
    ) -> (
        impl Fn() -> LocalBoxFuture<'static, Result<R, String>>,
        Rc<Cell<usize>>,
    ) {
        let calls = Rc::new(Cell::new(0));
        let counter = calls.clone();
        let fetch = move || {
            counter.set(counter.get() + 1);
            future::ready(Ok(value.clone())).boxed_local()
        };
        (fetch, calls)
    }

    #[tokio::test]
    async fn test_load_success() {
        let (fetch, _) = counting(json!({"count": 1}));
        let ctrl = FetchController::new(memory_cache(), fetch, FetchOptions::new(Value::Null));
        assert!(!ctrl.is_loading());

        let pending = ctrl.load();
        assert!(ctrl.is_loading());
        pending.await;

        assert_eq!(
            ctrl.state(),
            FetchState {
                data: json!({"count": 1}),
                loading: false,
                error: None,
            }
        );
    }

    #[tokio::test]
    async fn test_load_failure_keeps_initial_value() {
        let ctrl = FetchController::new(
            memory_cache(),
            || async { Err::<Value, _>("boom") },
            FetchOptions::new(json!([])),
        );
        ctrl.load().await;

        assert_eq!(ctrl.data(), json!([]));
        assert_eq!(ctrl.error().as_deref(), Some("boom"));
        assert!(!ctrl.is_loading());
    }

    #[tokio::test]
    async fn test_failure_preserves_last_good_data() {
        let fail = Rc::new(Cell::new(false));
        let ctrl = FetchController::new(
            memory_cache(),
            {
                let fail = fail.clone();
                move || {
                    let fail = fail.get();
                    async move { if fail { Err("offline") } else { Ok(7) } }
                }
            },
            FetchOptions::new(0),
        );

        ctrl.load().await;
        assert_eq!(ctrl.data(), 7);

        fail.set(true);
        ctrl.refetch().await;
        assert_eq!(ctrl.data(), 7);
        assert_eq!(ctrl.error().as_deref(), Some("offline"));
    }

    #[tokio::test]
    async fn test_new_load_clears_error() {
        let fail = Rc::new(Cell::new(true));
        let ctrl = FetchController::new(
            memory_cache(),
            {
                let fail = fail.clone();
                move || {
                    let fail = fail.get();
                    async move { if fail { Err("down") } else { Ok(1) } }
                }
            },
            FetchOptions::new(0),
        );

        ctrl.load().await;
        assert!(ctrl.error().is_some());

        fail.set(false);
        let pending = ctrl.load();
        assert_eq!(ctrl.error(), None);
        pending.await;
        assert_eq!(ctrl.data(), 1);
    }

    #[tokio::test]
    async fn test_transform_applies_to_raw_cached_value() {
        let cache = memory_cache();
        let (fetch, calls) = counting(21);
        let ctrl = FetchController::new(
            cache.clone(),
            fetch,
            FetchOptions::transformed(0, |raw: &i32| raw * 2).cache_key("answer"),
        );

        ctrl.load().await;
        assert_eq!(ctrl.data(), 42);
        assert_eq!(cache.read::<i32>("answer", DEFAULT_TTL), Some(21));

        ctrl.set_transform(|raw: &i32| raw * 4);
        let pending = ctrl.load();
        assert_eq!(ctrl.data(), 84);
        assert!(!ctrl.is_loading());
        pending.await;
        assert_eq!(calls.get(), 1);
    }

    #[tokio::test]
    async fn test_cache_hit_shared_across_controllers() {
        let cache = memory_cache();
        let (fetch_a, calls_a) = counting(vec![1, 2]);
        let (fetch_b, calls_b) = counting(vec![9, 9]);

        let a = FetchController::new(cache.clone(), fetch_a, FetchOptions::new(vec![]).cache_key("k"));
        let b = FetchController::new(cache, fetch_b, FetchOptions::new(vec![]).cache_key("k"));

        a.load().await;
        b.load().await;

        assert_eq!(b.data(), vec![1, 2]);
        assert_eq!((calls_a.get(), calls_b.get()), (1, 0));
    }

    #[tokio::test]
    async fn test_expired_cache_fetches_again() {
        let clock = Rc::new(ManualClock::new(0));
        let cache = DataCache::new(MemoryStorage::new(), clock.clone()).into_shared();
        let (fetch, calls) = counting(5);
        let ctrl = FetchController::new(
            cache,
            fetch,
            FetchOptions::new(0)
                .cache_key("k")
                .ttl(Duration::from_secs(10)),
        );

        ctrl.load().await;
        clock.advance(Duration::from_secs(9));
        ctrl.load().await;
        assert_eq!(calls.get(), 1);

        clock.advance(Duration::from_secs(2));
        ctrl.load().await;
        assert_eq!(calls.get(), 2);
    }

    #[tokio::test]
    async fn test_refetch_bypasses_cache() {
        let (fetch, calls) = counting(3);
        let ctrl = FetchController::new(memory_cache(), fetch, FetchOptions::new(0).cache_key("k"));

        ctrl.load().await;
        ctrl.refetch().await;
        ctrl.load().await;

        assert_eq!(calls.get(), 2);
    }

    #[tokio::test]
    async fn test_no_cache_key_never_caches() {
        let (fetch, calls) = counting(3);
        let ctrl = FetchController::new(memory_cache(), fetch, FetchOptions::new(0));

        ctrl.load().await;
        ctrl.load().await;
        assert_eq!(calls.get(), 2);
    }

    #[tokio::test]
    async fn test_cache_write_failure_still_delivers_data() {
        struct FullStorage;

        impl CacheStorage for FullStorage {
            fn get(&self, _key: &str) -> Result<Option<String>, CacheError> {
                Ok(None)
            }

            fn set(&self, _key: &str, _value: &str) -> Result<(), CacheError> {
                Err(CacheError::WriteFailed("quota exceeded".into()))
            }

            fn remove(&self, _key: &str) -> Result<(), CacheError> {
                Ok(())
            }
        }

        let cache = DataCache::new(FullStorage, ManualClock::new(0)).into_shared();
        let (fetch, _) = counting("payload".to_string());
        let ctrl = FetchController::new(cache, fetch, FetchOptions::new(String::new()).cache_key("k"));

        ctrl.load().await;
        assert_eq!(ctrl.data(), "payload");
        assert_eq!(ctrl.error(), None);
    }

    #[tokio::test]
    async fn test_superseded_response_is_discarded() {
        let pending: Rc<RefCell<VecDeque<oneshot::Receiver<i32>>>> = Rc::default();
        let (slow_tx, slow_rx) = oneshot::channel();
        let (fast_tx, fast_rx) = oneshot::channel();
        pending.borrow_mut().extend([slow_rx, fast_rx]);

        let ctrl = FetchController::new(
            memory_cache(),
            {
                let pending = pending.clone();
                move || {
                    let rx = pending.borrow_mut().pop_front();
                    async move {
                        match rx {
                            Some(rx) => rx.await.map_err(|e| e.to_string()),
                            None => Err("no response queued".to_string()),
                        }
                    }
                }
            },
            FetchOptions::new(0).cache_key("k"),
        );

        let first = ctrl.load();
        let second = ctrl.load();

        fast_tx.send(2).unwrap();
        second.await;
        assert_eq!(ctrl.data(), 2);
        assert!(!ctrl.is_loading());

        slow_tx.send(1).unwrap();
        first.await;
        assert_eq!(ctrl.data(), 2);
        assert_eq!(ctrl.inner.cache.read::<i32>("k", DEFAULT_TTL), Some(2));
    }

    #[tokio::test]
    async fn test_sync_deps_loads_on_value_change_only() {
        let (fetch, calls) = counting(1);
        let ctrl = FetchController::new(memory_cache(), fetch, FetchOptions::new(0));

        ctrl.sync_deps(&("sales", 2024)).expect("mount loads").await;
        assert!(ctrl.sync_deps(&("sales", 2024)).is_none());

        ctrl.sync_deps(&("sales", 2025)).expect("changed deps load").await;
        assert_eq!(calls.get(), 2);
    }

    #[tokio::test]
    async fn test_set_data_leaves_status_alone() {
        let (fetch, _) = counting(1);
        let ctrl = FetchController::new(memory_cache(), fetch, FetchOptions::new(0));

        let pending = ctrl.load();
        ctrl.set_data(99);
        assert_eq!(ctrl.data(), 99);
        assert!(ctrl.is_loading());

        pending.await;
        assert_eq!(ctrl.data(), 1);
    }

    #[tokio::test]
    async fn test_subscribers_see_every_transition() {
        let (fetch, _) = counting(4);
        let ctrl = FetchController::new(memory_cache(), fetch, FetchOptions::new(0));
        let seen = Rc::new(RefCell::new(Vec::new()));
        ctrl.subscribe({
            let seen = seen.clone();
            move |state| seen.borrow_mut().push((state.data, state.loading))
        });

        ctrl.load().await;
        assert_eq!(*seen.borrow(), vec![(0, true), (4, false)]);
    }
}
