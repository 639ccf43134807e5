//! Diagnostic strings for entries.
//!
//! [`entry_debug_string`] is total: it accepts null and undefined markers and
//! arbitrary values through [`Describe`], whose defaults render the generic
//! `(Object) ` shape.

use crate::entry::Entry;
use serde_json::Value;

/// Something that can be rendered by [`entry_debug_string`].
pub trait Describe {
    /// Type tag shown in parentheses.
    fn type_name(&self) -> &str {
        "Object"
    }

    fn full_path(&self) -> Option<&str> {
        None
    }

    fn url(&self) -> Option<String> {
        None
    }

    /// Render as the null sentinel.
    fn is_null(&self) -> bool {
        false
    }
}

impl Describe for Entry {
    /// Real entries share the generic tag with plain objects.
    fn type_name(&self) -> &str {
        match self {
            Entry::File(_) | Entry::Directory(_) => "Object",
            Entry::Fake(_) => "FakeEntry",
            Entry::List(_) => "EntryList",
            Entry::Volume(_) => "VolumeEntry",
        }
    }

    fn full_path(&self) -> Option<&str> {
        Some(Entry::full_path(self))
    }

    fn url(&self) -> Option<String> {
        Some(self.to_url())
    }
}

/// A structureless value.
impl Describe for () {}

/// Best effort over loosely shaped data: `fullPath` and `url` string fields
/// are picked up when present.
impl Describe for Value {
    fn type_name(&self) -> &str {
        match self {
            Value::Object(_) | Value::Null => "Object",
            Value::Array(_) => "Array",
            Value::String(_) => "String",
            Value::Number(_) => "Number",
            Value::Bool(_) => "Boolean",
        }
    }

    fn full_path(&self) -> Option<&str> {
        self.get("fullPath").and_then(Value::as_str)
    }

    fn url(&self) -> Option<String> {
        self.get("url").and_then(Value::as_str).map(str::to_string)
    }

    fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }
}

/// Input to [`entry_debug_string`].
pub enum DebugTarget<'a> {
    Null,
    /// A slot that was never populated
    Undefined,
    Value(&'a dyn Describe),
}

impl<'a, T: Describe> From<&'a T> for DebugTarget<'a> {
    fn from(value: &'a T) -> Self {
        DebugTarget::Value(value)
    }
}

impl<'a, T: Describe> From<Option<&'a T>> for DebugTarget<'a> {
    fn from(value: Option<&'a T>) -> Self {
        match value {
            Some(value) => DebugTarget::Value(value),
            None => DebugTarget::Null,
        }
    }
}

/// Short diagnostic string, e.g. `(Object) /dir_a filesystem:downloads/dir_a`
/// or `(FakeEntry) / fake-entry://crostini`. Never fails.
pub fn entry_debug_string<'a>(target: impl Into<DebugTarget<'a>>) -> String {
    let value = match target.into() {
        DebugTarget::Null => return "entry is null".to_string(),
        DebugTarget::Undefined => return "entry is undefined".to_string(),
        DebugTarget::Value(value) if value.is_null() => return "entry is null".to_string(),
        DebugTarget::Value(value) => value,
    };

    let mut description = format!("({}) ", value.type_name());
    if let Some(full_path) = value.full_path().filter(|p| !p.is_empty()) {
        description.push_str(full_path);
        description.push(' ');
    }
    if let Some(url) = value.url() {
        description.push_str(&url);
    }
    description
}
