//! Selection-event normalization.
//!
//! Each visualization reports "element selected" with its own event shape.
//! Visualizations expose that through [`SupportsSelection`], and
//! [`DrillClickAdapter`] turns every payload into one [`DrillItem`] handed
//! to a single drill-down handler.

use std::rc::Rc;

use serde_json::Value;

use super::item::DrillItem;
use crate::config::DEFAULT_DRILL_FIELD;
use crate::error::DrillError;

/// Receives the raw payload of a selected element.
pub type SelectionHandler = Rc<dyn Fn(&Value)>;

/// A visualization whose elements can be selected.
pub trait SupportsSelection {
    /// Register the handler invoked on every element selection.
    fn on_element_selected(&self, handler: SelectionHandler);
}

/// Maps selection payloads to drill-down calls.
#[derive(Clone)]
pub struct DrillClickAdapter {
    field: String,
    on_drill_down: Rc<dyn Fn(DrillItem)>,
}

impl DrillClickAdapter {
    pub fn new(on_drill_down: impl Fn(DrillItem) + 'static) -> Self {
        Self {
            field: DEFAULT_DRILL_FIELD.to_string(),
            on_drill_down: Rc::new(on_drill_down),
        }
    }

    /// Use `field` instead of `name` as the key/label source.
    pub fn with_field(mut self, field: impl Into<String>) -> Self {
        self.field = field.into();
        self
    }

    pub fn field(&self) -> &str {
        &self.field
    }

    pub fn normalize(&self, payload: &Value) -> Result<DrillItem, DrillError> {
        DrillItem::from_selection(payload, &self.field)
    }

    /// Forward `payload` to the drill-down handler.
    ///
    /// Payloads without a derivable key are dropped; returns whether the
    /// handler was called.
    pub fn drill(&self, payload: &Value) -> bool {
        match self.normalize(payload) {
            Ok(item) => {
                (self.on_drill_down)(item);
                true
            }
            Err(e) => {
                tracing::warn!(error = %e, "ignoring selection");
                false
            }
        }
    }

    /// Handler suitable for [`SupportsSelection::on_element_selected`].
    pub fn handler(&self) -> SelectionHandler {
        let adapter = self.clone();
        Rc::new(move |payload| {
            adapter.drill(payload);
        })
    }

    /// Wire this adapter to a visualization.
    pub fn attach(&self, viz: &impl SupportsSelection) {
        viz.on_element_selected(self.handler());
    }
}

impl std::fmt::Debug for DrillClickAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DrillClickAdapter")
            .field("field", &self.field)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::cell::RefCell;

    /// Bar chart reporting `{category, value}` clicks.
    #[derive(Default)]
    struct BarChart {
        handler: RefCell<Option<SelectionHandler>>,
    }

    impl BarChart {
        fn click_bar(&self, category: &str, value: f64) {
            if let Some(handler) = self.handler.borrow().as_ref() {
                handler(&json!({"name": category, "value": value}));
            }
        }
    }

    impl SupportsSelection for BarChart {
        fn on_element_selected(&self, handler: SelectionHandler) {
            *self.handler.borrow_mut() = Some(handler);
        }
    }

    /// Graph reporting node clicks as `{id, type}`.
    #[derive(Default)]
    struct NodeGraph {
        handler: RefCell<Option<SelectionHandler>>,
    }

    impl NodeGraph {
        fn click_node(&self, id: u32, kind: &str) {
            if let Some(handler) = self.handler.borrow().as_ref() {
                handler(&json!({"id": id, "type": kind}));
            }
        }
    }

    impl SupportsSelection for NodeGraph {
        fn on_element_selected(&self, handler: SelectionHandler) {
            *self.handler.borrow_mut() = Some(handler);
        }
    }

    fn recording_adapter() -> (DrillClickAdapter, Rc<RefCell<Vec<DrillItem>>>) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let adapter = DrillClickAdapter::new({
            let seen = seen.clone();
            move |item| seen.borrow_mut().push(item)
        });
        (adapter, seen)
    }

    #[test]
    fn test_default_field_is_name() {
        let (adapter, _) = recording_adapter();
        assert_eq!(adapter.field(), "name");
    }

    #[test]
    fn test_heterogeneous_visualizations_share_one_handler() {
        let (adapter, seen) = recording_adapter();
        let bars = BarChart::default();
        let graph = NodeGraph::default();
        adapter.attach(&bars);
        adapter.attach(&graph);

        bars.click_bar("East", 12.5);
        graph.click_node(9, "warehouse");

        let seen = seen.borrow();
        assert_eq!(seen.len(), 2);
        assert_eq!((seen[0].key.as_str(), seen[0].label.as_str()), ("East", "East"));
        assert_eq!(seen[0].data["value"], json!(12.5));
        assert_eq!((seen[1].key.as_str(), seen[1].label.as_str()), ("9", "warehouse"));
    }

    #[test]
    fn test_payload_without_key_is_dropped() {
        let (adapter, seen) = recording_adapter();
        assert!(!adapter.drill(&json!({"value": 1})));
        assert!(!adapter.drill(&json!(null)));
        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn test_custom_field() {
        let (adapter, seen) = recording_adapter();
        let adapter = adapter.with_field("region");

        assert!(adapter.drill(&json!({"region": "apac", "name": "Asia Pacific"})));
        assert_eq!(seen.borrow()[0].key, "apac");
    }
}
