//! Drill-down navigation and cached data fetching for dashboard views.
//!
//! Provides:
//! - [`DataCache`] - Session-scoped payload cache with strict TTL expiry
//! - [`FetchController`] - One async load per view with loading/error state
//! - [`DrillNavigator`] - Breadcrumb trail state machine
//! - [`DrillClickAdapter`] - Maps visualization selection events to drill-downs
//!
//! Everything here is single-threaded (`Rc`/`RefCell`) and runs unchanged on
//! native targets and `wasm32`.

pub mod cache;
pub mod clock;
pub mod config;
pub mod drill;
pub mod error;
pub mod fetch;

pub use cache::{CacheEntry, CacheStorage, DataCache, MemoryStorage, SharedCache};
#[cfg(target_arch = "wasm32")]
pub use cache::SessionStorage;
pub use clock::{Clock, ManualClock, SystemClock};
pub use drill::{
    BreadcrumbEntry, DrillClickAdapter, DrillItem, DrillNavigator, LevelView, NavigationState,
    SelectionHandler, SupportsSelection,
};
pub use error::{CacheError, DrillError};
pub use fetch::{FetchController, FetchOptions, FetchState};
