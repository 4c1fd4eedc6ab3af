//! Record flattening into (field path, string value) pairs
//!
//! Indexable record types declare their fields through the [`Flatten`]
//! trait instead of being inspected at runtime. Nested list fields recurse
//! with the list field's path as the prefix and emit no entry of their own.

use url::Url;
use uuid::Uuid;

/// A single flattened field entry
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FlatField {
    /// Lowercase, dot-separated field path
    pub path: String,
    /// Canonical string form of the field value
    pub value: String,
}

impl FlatField {
    pub fn new(path: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            value: value.into(),
        }
    }
}

/// Canonical, locale-independent string conversion for indexable scalars
///
/// What you see on the wire is what gets indexed: UUIDs in hyphenated form,
/// URLs in their serialized textual form, integers in base 10.
pub trait FlattenValue {
    fn flatten_value(&self) -> String;
}

impl FlattenValue for String {
    fn flatten_value(&self) -> String {
        self.clone()
    }
}

impl FlattenValue for &str {
    fn flatten_value(&self) -> String {
        (*self).to_string()
    }
}

impl FlattenValue for bool {
    fn flatten_value(&self) -> String {
        self.to_string()
    }
}

impl FlattenValue for u64 {
    fn flatten_value(&self) -> String {
        self.to_string()
    }
}

impl FlattenValue for i64 {
    fn flatten_value(&self) -> String {
        self.to_string()
    }
}

impl FlattenValue for Uuid {
    fn flatten_value(&self) -> String {
        self.to_string()
    }
}

impl FlattenValue for Url {
    fn flatten_value(&self) -> String {
        self.as_str().to_string()
    }
}

/// Absent optionals flatten to the empty-string sentinel, which is itself
/// indexable like any other value.
impl<T: FlattenValue> FlattenValue for Option<T> {
    fn flatten_value(&self) -> String {
        match self {
            Some(value) => value.flatten_value(),
            None => String::new(),
        }
    }
}

/// Compile-time field extraction contract for indexable record types
pub trait Flatten {
    /// Append this record's flattened fields, composing paths under `prefix`.
    ///
    /// Fields must be emitted in declaration order so the flattened sequence
    /// is deterministic.
    fn flatten_into(&self, prefix: &str, out: &mut Vec<FlatField>);

    /// Flatten the whole record starting from an empty prefix
    fn flatten(&self) -> Vec<FlatField> {
        let mut out = Vec::new();
        self.flatten_into("", &mut out);
        out
    }
}

/// Compose a lowercase dotted field path
pub fn field_path(prefix: &str, name: &str) -> String {
    if prefix.is_empty() {
        name.to_lowercase()
    } else {
        format!("{}.{}", prefix, name).to_lowercase()
    }
}
