//! Root application module.
//!
//! Contains the main App component and the AppContext definition following
//! Leptos conventions.

use drillboard_core::{DataCache, SharedCache};
use leptos::prelude::*;

use crate::components::Dashboard;

// ============================================================================
// AppContext
// ============================================================================

/// Application-wide context.
///
/// Provided at the root of the component tree and accessed from any child
/// component using `use_context::<AppContext>()`.
///
/// # Note
///
/// The cache itself is `Rc`-based and not thread-safe, so it lives in a
/// local [`StoredValue`]; the handle is `Copy` like a signal.
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Session payload cache shared by every data view.
    cache: StoredValue<SharedCache, LocalStorage>,
}

impl AppContext {
    pub fn new(cache: SharedCache) -> Self {
        Self {
            cache: StoredValue::new_local(cache),
        }
    }

    /// Handle to the shared cache.
    pub fn cache(&self) -> SharedCache {
        self.cache.get_value()
    }
}

impl Default for AppContext {
    /// `sessionStorage` in the browser, an in-memory map elsewhere.
    fn default() -> Self {
        #[cfg(target_arch = "wasm32")]
        let cache = DataCache::session();
        #[cfg(not(target_arch = "wasm32"))]
        let cache = DataCache::in_memory();

        Self::new(cache.into_shared())
    }
}

/// Root application component with error boundary.
///
/// This component:
/// - Creates the session cache once and provides it through AppContext
/// - Wraps the app in an ErrorBoundary for graceful error handling
/// - Renders the dashboard
#[component]
pub fn App() -> impl IntoView {
    provide_context(AppContext::default());

    view! {
        <ErrorBoundary
            fallback=|errors| view! {
                <div style="
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    height: 100vh;
                    padding: 2rem;
                    background: #0f1420;
                    color: #e0e0e0;
                    font-family: system-ui, sans-serif;
                ">
                    <h1 style="color: #ff6b6b; margin-bottom: 1rem;">
                        "Something went wrong"
                    </h1>
                    <ul style="color: #ff6b6b; font-size: 0.9rem;">
                        {move || errors.get()
                            .into_iter()
                            .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                            .collect::<Vec<_>>()
                        }
                    </ul>
                    <button
                        on:click=move |_| {
                            if let Some(window) = web_sys::window() {
                                let _ = window.location().reload();
                            }
                        }
                        style="
                            background: #4a90e2;
                            color: white;
                            border: none;
                            padding: 0.75rem 2rem;
                            border-radius: 4px;
                            cursor: pointer;
                        "
                    >
                        "Reload Page"
                    </button>
                </div>
            }
        >
            <Dashboard />
        </ErrorBoundary>
    }
}
