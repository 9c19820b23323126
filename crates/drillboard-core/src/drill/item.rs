//! Breadcrumb entries and drill items.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::config::{ROOT_KEY, ROOT_LABEL};
use crate::error::DrillError;

/// One level in the breadcrumb trail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreadcrumbEntry {
    pub key: String,
    pub label: String,
}

impl BreadcrumbEntry {
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
        }
    }

    /// The synthetic top-level entry.
    pub fn root() -> Self {
        Self::new(ROOT_KEY, ROOT_LABEL)
    }

    pub fn is_root(&self) -> bool {
        self.key == ROOT_KEY
    }
}

/// A selected element to drill into.
///
/// `data` carries the raw selection payload so the next level can scope its
/// fetch to it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrillItem {
    pub key: String,
    pub label: String,
    #[serde(default)]
    pub data: Value,
}

impl DrillItem {
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            data: Value::Null,
        }
    }

    pub fn with_data(mut self, data: Value) -> Self {
        self.data = data;
        self
    }

    /// Derive an item from an object with explicit `key`/`label` fields.
    ///
    /// Falls back to `id` for the key and to `name`, then `type`, for the
    /// label. A payload with no label candidate is labelled by its key.
    pub fn from_value(payload: &Value) -> Result<Self, DrillError> {
        let obj = payload.as_object().ok_or(DrillError::NotAnObject)?;
        let key = ["key", "id"]
            .iter()
            .find_map(|f| obj.get(*f).and_then(scalar_text))
            .ok_or_else(|| DrillError::MissingKey {
                field: "key".to_string(),
            })?;
        let label = ["label", "name", "type"]
            .iter()
            .find_map(|f| obj.get(*f).and_then(scalar_text))
            .unwrap_or_else(|| key.clone());

        Ok(Self {
            key,
            label,
            data: payload.clone(),
        })
    }

    /// Derive an item from a visualization selection payload.
    ///
    /// `field` supplies both key and label when present; otherwise the key
    /// comes from `id` and the label from `name` or `type`.
    pub fn from_selection(payload: &Value, field: &str) -> Result<Self, DrillError> {
        let obj = payload.as_object().ok_or(DrillError::NotAnObject)?;
        let primary = obj.get(field).and_then(scalar_text);

        let key = primary
            .clone()
            .or_else(|| obj.get("id").and_then(scalar_text))
            .ok_or_else(|| DrillError::MissingKey {
                field: field.to_string(),
            })?;
        let label = primary
            .or_else(|| obj.get("name").and_then(scalar_text))
            .or_else(|| obj.get("type").and_then(scalar_text))
            .unwrap_or_else(|| key.clone());

        Ok(Self {
            key,
            label,
            data: payload.clone(),
        })
    }
}

/// Strings as-is, numbers and booleans stringified, everything else `None`.
fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}
