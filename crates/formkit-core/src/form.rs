//! Form-state collaborator
//!
//! Widgets never store field values themselves. They read and write through
//! a [`FormState`], which owns the values, the dirty flags and the per-field
//! error messages. [`FormValues`] is the plain in-memory implementation; the
//! UI crate wraps it in a reactive signal.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::FieldIssue;

/// Options for [`FormState::set_value`]
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct SetValueOptions {
    /// Mark the field dirty as part of the write
    pub should_dirty: bool,
}

impl SetValueOptions {
    /// Write that marks the field dirty
    pub fn dirty() -> Self {
        Self { should_dirty: true }
    }
}

/// What a widget needs to bind itself to one field
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct FieldBinding {
    pub name: String,
    /// Current value rendered as text
    pub value: String,
    pub dirty: bool,
    /// Validation or read error to show under the field
    pub error: Option<String>,
}

/// The operations formkit performs against a form's state
pub trait FormState {
    /// Current value of a field; `Value::Null` when unset
    fn value(&self, name: &str) -> Value;

    /// A dirty write also clears the field's error message.
    fn set_value(&mut self, name: &str, value: Value, options: SetValueOptions);

    /// Binding descriptor for rendering a widget against `name`
    fn binding(&self, name: &str) -> FieldBinding;
}

/// Text shown in a widget for a stored value
pub fn value_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// In-memory form state
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FormValues {
    values: BTreeMap<String, Value>,
    #[serde(skip)]
    dirty: BTreeSet<String>,
    #[serde(skip)]
    errors: BTreeMap<String, String>,
}

impl FormValues {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert without marking the field dirty
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.values.insert(name.into(), value.into());
        self
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    /// Value of `name` as text, empty when unset
    pub fn text(&self, name: &str) -> String {
        self.get(name).map(value_text).unwrap_or_default()
    }

    pub fn values(&self) -> &BTreeMap<String, Value> {
        &self.values
    }

    pub fn is_dirty(&self) -> bool {
        !self.dirty.is_empty()
    }

    pub fn is_field_dirty(&self, name: &str) -> bool {
        self.dirty.contains(name)
    }

    pub fn error(&self, name: &str) -> Option<&str> {
        self.errors.get(name).map(String::as_str)
    }

    pub fn set_error(&mut self, name: impl Into<String>, message: impl Into<String>) {
        self.errors.insert(name.into(), message.into());
    }

    pub fn clear_errors(&mut self) {
        self.errors.clear();
    }

    /// Replace all field errors with the given issues.
    /// The first issue per field wins.
    pub fn apply_issues(&mut self, issues: &[FieldIssue]) {
        self.errors.clear();
        for issue in issues {
            self.errors
                .entry(issue.field.clone())
                .or_insert_with(|| issue.message.clone());
        }
    }

    /// Forget dirty flags, e.g. after a successful submit
    pub fn mark_clean(&mut self) {
        self.dirty.clear();
    }
}

impl FormState for FormValues {
    fn value(&self, name: &str) -> Value {
        self.values.get(name).cloned().unwrap_or(Value::Null)
    }

    fn set_value(&mut self, name: &str, value: Value, options: SetValueOptions) {
        self.values.insert(name.to_string(), value);
        if options.should_dirty {
            self.dirty.insert(name.to_string());
            self.errors.remove(name);
        }
    }

    fn binding(&self, name: &str) -> FieldBinding {
        FieldBinding {
            name: name.to_string(),
            value: self.text(name),
            dirty: self.is_field_dirty(name),
            error: self.error(name).map(str::to_string),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn unset_field_reads_as_null_and_empty_text() {
        let form = FormValues::new();
        assert_eq!(form.value("title"), Value::Null);
        assert_eq!(form.binding("title").value, "");
    }

    #[test]
    fn set_value_marks_dirty_only_when_asked() {
        let mut form = FormValues::new();
        form.set_value("title", json!("a"), SetValueOptions::default());
        assert!(!form.is_dirty());

        form.set_value("title", json!("b"), SetValueOptions::dirty());
        assert!(form.is_field_dirty("title"));
        assert_eq!(form.text("title"), "b");
    }

    #[test]
    fn dirty_write_clears_only_that_fields_error() {
        let mut form = FormValues::new();
        form.set_error("title", "Title is required");
        form.set_error("category", "Pick a category");

        form.set_value("title", json!("x"), SetValueOptions::default());
        assert_eq!(form.error("title"), Some("Title is required"));

        form.set_value("title", json!("Fork"), SetValueOptions::dirty());
        assert_eq!(form.error("title"), None);
        assert_eq!(form.error("category"), Some("Pick a category"));
    }

    #[test]
    fn value_text_renders_non_strings() {
        assert_eq!(value_text(&json!(3)), "3");
        assert_eq!(value_text(&json!(true)), "true");
        assert_eq!(value_text(&Value::Null), "");
    }

    #[test]
    fn apply_issues_keeps_first_message_per_field() {
        let mut form = FormValues::new();
        form.set_error("stale", "old");
        form.apply_issues(&[
            FieldIssue::new("title", "required"),
            FieldIssue::new("title", "too short"),
        ]);
        assert_eq!(form.error("title"), Some("required"));
        assert_eq!(form.error("stale"), None);
        assert_eq!(form.binding("title").error.as_deref(), Some("required"));
    }

    #[test]
    fn serialises_values_only() {
        let mut form = FormValues::new().with("title", "x");
        form.set_error("title", "bad");
        let json = serde_json::to_value(&form).unwrap();
        assert_eq!(json, json!({ "values": { "title": "x" } }));
    }
}
