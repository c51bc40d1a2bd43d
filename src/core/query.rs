//! Query parameters, filter sets, partial updates and pagination placeholders

use indexmap::IndexMap;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Query parameters appended to a collection fetch
///
/// Insertion order is preserved so the generated query string is stable.
///
/// # Example
/// ```rust,ignore
/// let params = QueryParams::new().with("status", "active").with("region", "NY");
/// // GET /users?status=active&region=NY
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QueryParams(IndexMap<String, String>);

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a parameter, replacing any previous value for the key
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Exact-match filters of a store module
///
/// An empty value means "any" (the "All" option of a select box) and
/// imposes no constraint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Filters(IndexMap<String, String>);

impl Filters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build filters from key/value pairs
    pub fn from_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self(
            pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    /// Merge a partial filter set into this one; later keys win
    pub fn merge(&mut self, partial: Filters) {
        for (key, value) in partial.0 {
            self.0.insert(key, value);
        }
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Filters that actually constrain the view (non-empty values)
    pub fn active(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0
            .iter()
            .filter(|(_, v)| !v.is_empty())
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Partial update of a record
///
/// Only the keys that were set are serialized. Stores either merge the patch
/// over a held record and send the result with `PUT /{collection}/{id}`, or
/// send the patch alone with `PATCH`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordPatch(Map<String, Value>);

impl RecordPatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a field by its wire name
    ///
    /// Values that fail to serialize are stored as null.
    #[must_use]
    pub fn set(mut self, field: impl Into<String>, value: impl Serialize) -> Self {
        let value = serde_json::to_value(value).unwrap_or(Value::Null);
        self.0.insert(field.into(), value);
        self
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn fields(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }

    /// Merge the set fields over `record`, keeping its `id`
    ///
    /// Fails when a patched value does not fit the record's schema.
    pub fn apply_to<T: Serialize + DeserializeOwned>(&self, record: &T) -> Result<T, serde_json::Error> {
        let mut value = serde_json::to_value(record)?;
        if let Some(fields) = value.as_object_mut() {
            for (key, field) in self.fields() {
                if key != "id" {
                    fields.insert(key.clone(), field.clone());
                }
            }
        }
        serde_json::from_value(value)
    }
}

/// Decorative pagination state
///
/// Pages are not requested from the backend; `total` mirrors the size of the
/// last fetched collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    pub page: usize,
    pub limit: usize,
    pub total: usize,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: 1,
            limit: 10,
            total: 0,
        }
    }
}

/// Partial pagination update
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PaginationUpdate {
    pub page: Option<usize>,
    pub limit: Option<usize>,
}

impl Pagination {
    /// Merge a partial update; page and limit never drop below 1
    pub fn apply(&mut self, update: PaginationUpdate) {
        if let Some(page) = update.page {
            self.page = page.max(1);
        }
        if let Some(limit) = update.limit {
            self.limit = limit.max(1);
        }
    }

    pub fn total_pages(&self) -> usize {
        if self.total == 0 {
            0
        } else {
            self.total.div_ceil(self.limit.max(1))
        }
    }
}
