//! Context values substituted into path templates.

use std::collections::BTreeMap;

use serde_json::{Map, Value};

use super::AppError;

/// Ordered map of context variable name to value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContextValues {
    values: BTreeMap<String, Value>,
}

impl ContextValues {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a `key=value` assignment. Splits on the first `=`; the value stays a string.
    pub fn parse_assignment(assignment: &str) -> Result<(String, String), AppError> {
        let (key, value) = assignment
            .split_once('=')
            .ok_or_else(|| AppError::InvalidContextAssignment(assignment.to_string()))?;
        let key = key.trim();
        if key.is_empty() {
            return Err(AppError::InvalidContextAssignment(assignment.to_string()));
        }
        Ok((key.to_string(), value.to_string()))
    }

    /// Build values from a parsed context document.
    ///
    /// A document shaped like `{ "<namespace>": { ... } }` is unwrapped to its inner mapping.
    pub fn from_document(document: Value, namespace: &str) -> Result<Self, String> {
        let Value::Object(map) = document else {
            return Err("context document must be a mapping".to_string());
        };

        let map = unwrap_namespace(map, namespace);
        Ok(Self { values: map.into_iter().collect() })
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.values.insert(key.into(), value.into());
    }

    /// Overlay `other` on top of `self`; keys in `other` win.
    pub fn merge(&mut self, other: ContextValues) {
        self.values.extend(other.values);
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    /// Values nested under `namespace`, ready for template rendering.
    pub fn namespaced(&self, namespace: &str) -> Value {
        let inner: Map<String, Value> =
            self.values.iter().map(|(k, v)| (k.clone(), v.clone())).collect();
        let mut outer = Map::new();
        outer.insert(namespace.to_string(), Value::Object(inner));
        Value::Object(outer)
    }
}

fn unwrap_namespace(mut map: Map<String, Value>, namespace: &str) -> Map<String, Value> {
    if map.len() == 1
        && matches!(map.get(namespace), Some(Value::Object(_)))
        && let Some(Value::Object(inner)) = map.remove(namespace)
    {
        return inner;
    }
    map
}
