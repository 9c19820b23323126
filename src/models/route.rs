//! URL hash mirroring of the drill trail.
//!
//! The hash is informational: it lets users see and share where they are
//! (`#/east/new-york`). It is written with `replaceState` so drilling does
//! not flood the back-button history.

use drillboard_core::BreadcrumbEntry;

use super::sales::slug;

/// Build the hash for a trail, skipping the root entry.
pub fn trail_hash(trail: &[BreadcrumbEntry]) -> String {
    let path: Vec<String> = trail
        .iter()
        .filter(|entry| !entry.is_root())
        .map(|entry| slug(&entry.key))
        .collect();
    format!("#/{}", path.join("/"))
}

/// Replace the URL hash without adding to browser history.
pub fn replace_hash(hash: &str) {
    if let Some(window) = web_sys::window()
        && let Ok(history) = window.history()
    {
        let _ = history.replace_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(hash));
    }
}
