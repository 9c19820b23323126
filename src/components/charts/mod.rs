//! Minimal visualizations that can drive drill-downs.
//!
//! Rendering here is deliberately plain HTML. What matters is the
//! selection contract: each visualization reports element selection in its
//! own payload shape through a [`SelectionSlot`].

mod bars;
mod table;

use drillboard_core::{SelectionHandler, SupportsSelection};
use leptos::prelude::*;
use serde_json::Value;

pub use bars::SegmentBars;
pub use table::StoreTable;

/// Holds the selection handler registered on a visualization.
///
/// `Copy`, so it can be passed into components and event closures freely.
#[derive(Clone, Copy)]
pub struct SelectionSlot(StoredValue<Option<SelectionHandler>, LocalStorage>);

impl SelectionSlot {
    pub fn new() -> Self {
        Self(StoredValue::new_local(None))
    }

    /// Report a selected element. Does nothing until a handler is attached.
    pub fn select(&self, payload: &Value) {
        if let Some(handler) = self.0.try_get_value().flatten() {
            handler(payload);
        }
    }
}

impl Default for SelectionSlot {
    fn default() -> Self {
        Self::new()
    }
}

impl SupportsSelection for SelectionSlot {
    fn on_element_selected(&self, handler: SelectionHandler) {
        self.0.set_value(Some(handler));
    }
}
