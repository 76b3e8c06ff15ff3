//! In-memory document store addressed by dotted key paths

use crate::Document;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

/// Holds a config document and gives nested access to it
///
/// Paths use dot notation: `"database.host"` is the `host` key of the
/// `database` mapping. Sequences are not indexed through paths; fetch the
/// sequence and index it directly.
///
/// ```
/// use forge_config::DataStore;
/// use serde_json::json;
///
/// let mut store = DataStore::new();
/// store.set("database.host", json!("localhost"));
/// assert_eq!(store.get("database.host"), Some(&json!("localhost")));
/// assert!(store.has("database"));
/// assert_eq!(store.remove("database.host"), Some(json!("localhost")));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DataStore {
    data: Document,
}

impl Default for DataStore {
    fn default() -> Self {
        Self::new()
    }
}

impl DataStore {
    /// Create a store holding an empty mapping
    pub fn new() -> Self {
        Self {
            data: Value::Object(Map::new()),
        }
    }

    /// Create a store holding `data`
    pub fn from_document(data: Document) -> Self {
        Self { data }
    }

    /// The whole document
    pub fn data(&self) -> &Document {
        &self.data
    }

    /// Replace the whole document
    pub fn replace(&mut self, data: Document) {
        self.data = data;
    }

    /// Take the document out of the store
    pub fn into_inner(self) -> Document {
        self.data
    }

    /// Get the value at a dotted path
    pub fn get(&self, path: &str) -> Option<&Value> {
        let parts = split_path(path)?;
        let mut current = &self.data;
        for part in parts {
            current = current.as_object()?.get(part)?;
        }
        Some(current)
    }

    /// Get the value at a dotted path, deserialized into `T`
    pub fn get_as<T: DeserializeOwned>(&self, path: &str) -> Option<serde_json::Result<T>> {
        self.get(path).map(|value| serde_json::from_value(value.clone()))
    }

    /// Whether a value exists at a dotted path
    ///
    /// An explicit `null` counts as present.
    pub fn has(&self, path: &str) -> bool {
        self.get(path).is_some()
    }

    /// Set the value at a dotted path
    ///
    /// Missing intermediate mappings are created and non-mapping values along
    /// the way are replaced by mappings. An empty path is ignored.
    pub fn set(&mut self, path: &str, value: Value) {
        let Some(parts) = split_path(path) else {
            return;
        };
        let Some((last, parents)) = parts.split_last() else {
            return;
        };

        let mut current = ensure_object(&mut self.data);
        for part in parents {
            let entry = current
                .entry(part.to_string())
                .or_insert_with(|| Value::Object(Map::new()));
            current = ensure_object(entry);
        }
        current.insert(last.to_string(), value);
    }

    /// Remove and return the value at a dotted path
    pub fn remove(&mut self, path: &str) -> Option<Value> {
        let parts = split_path(path)?;
        let (last, parents) = parts.split_last()?;

        let mut current = self.data.as_object_mut()?;
        for part in parents {
            current = current.get_mut(*part)?.as_object_mut()?;
        }
        current.shift_remove(*last)
    }
}

impl From<Document> for DataStore {
    fn from(data: Document) -> Self {
        Self::from_document(data)
    }
}

fn split_path(path: &str) -> Option<Vec<&str>> {
    if path.is_empty() {
        return None;
    }
    Some(path.split('.').collect())
}

fn ensure_object(value: &mut Value) -> &mut Map<String, Value> {
    if !value.is_object() {
        *value = Value::Object(Map::new());
    }
    match value {
        Value::Object(map) => map,
        _ => unreachable!("value was just replaced by an object"),
    }
}
