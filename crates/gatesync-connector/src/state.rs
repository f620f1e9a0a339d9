//! Local state record abstraction
//!
//! The caller's persistence layer owns the record; this module defines the
//! accessor contract the controller mutates it through, the loosely-typed
//! field values it holds, and a map-backed implementation used by import
//! and by tests.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A loosely-typed field value in the local state record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// No value.
    Null,
    /// A string value (ports and TLS flags travel string-encoded).
    String(String),
    /// A boolean value.
    Bool(bool),
    /// An ordered list of strings (`ciphers`, `protocols`).
    List(Vec<String>),
}

impl FieldValue {
    /// Get as a string slice if this is a string value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            FieldValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Get as a boolean if this is a boolean value.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            FieldValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Get as a string list if this is a list value.
    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            FieldValue::List(items) => Some(items),
            _ => None,
        }
    }

    /// Check if this is the null value.
    pub fn is_null(&self) -> bool {
        matches!(self, FieldValue::Null)
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::String(s)
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::String(s.to_string())
    }
}

impl From<bool> for FieldValue {
    fn from(b: bool) -> Self {
        FieldValue::Bool(b)
    }
}

impl From<Vec<String>> for FieldValue {
    fn from(items: Vec<String>) -> Self {
        FieldValue::List(items)
    }
}

/// Accessor contract for the local state record.
///
/// The record is flat: nested blocks appear as dotted keys, e.g. the TLS
/// sub-fields under `ssl_info.0.`. The opaque identifier is local
/// bookkeeping only — it is never sent to the remote API and carries no
/// remote meaning.
pub trait ResourceState {
    /// Get a field value by name.
    fn get(&self, field: &str) -> Option<&FieldValue>;

    /// Set a field value by name.
    fn set(&mut self, field: &str, value: FieldValue);

    /// Get the opaque local identifier, if assigned.
    fn id(&self) -> Option<&str>;

    /// Assign the opaque local identifier.
    fn assign_id(&mut self, id: String);

    /// Clear the local identifier, marking the record as "no longer backed
    /// by a remote resource".
    fn clear_id(&mut self);

    /// Check whether a field is set.
    fn has(&self, field: &str) -> bool {
        self.get(field).is_some()
    }

    /// Get a string field.
    fn get_str(&self, field: &str) -> Option<&str> {
        self.get(field).and_then(FieldValue::as_str)
    }

    /// Get a boolean field.
    fn get_bool(&self, field: &str) -> Option<bool> {
        self.get(field).and_then(FieldValue::as_bool)
    }

    /// Get a list field.
    fn get_list(&self, field: &str) -> Option<&[String]> {
        self.get(field).and_then(FieldValue::as_list)
    }
}

/// Map-backed state record.
///
/// Import materializes brand-new records as `MemoryState`; tests use it as
/// the stand-in for the caller's persistence layer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemoryState {
    fields: HashMap<String, FieldValue>,
    id: Option<String>,
}

impl MemoryState {
    /// Create a new empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a field using builder pattern.
    pub fn with(mut self, field: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.fields.insert(field.into(), value.into());
        self
    }

    /// Iterate over all fields.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &FieldValue)> {
        self.fields.iter()
    }

    /// Get the number of set fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Check if no fields are set.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl ResourceState for MemoryState {
    fn get(&self, field: &str) -> Option<&FieldValue> {
        self.fields.get(field)
    }

    fn set(&mut self, field: &str, value: FieldValue) {
        self.fields.insert(field.to_string(), value);
    }

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn assign_id(&mut self, id: String) {
        self.id = Some(id);
    }

    fn clear_id(&mut self) {
        self.id = None;
    }
}
