//! Field metadata and validation schema types
//!
//! The UI map describes how each named field is rendered. It is a lookup
//! table only: rendering order always comes from a separate [`FieldOrder`].

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::FieldIssue;

/// Widget a field is rendered with
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WidgetKind {
    /// Single line text input
    Input,
    /// Multi line text input
    Textarea,
    /// Native select with one option per metadata option
    Select,
    /// Image file picker storing a data URL
    File,
    /// Any widget name this library does not know; renders like a missing entry
    #[serde(other)]
    Unknown,
}

/// A `(value, label)` pair offered by a selection widget
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// Rendering metadata for one field
#[derive(Clone, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub struct FieldMeta {
    /// Label shown above the widget
    pub label: String,
    /// Declared widget; `None` falls back to a plain text input
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub widget: Option<WidgetKind>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    /// Options for [`WidgetKind::Select`], in display order
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<SelectOption>>,
    /// Whether the field is a column of the tabular item view
    #[serde(default)]
    pub table: bool,
}

impl FieldMeta {
    fn with_widget(label: impl Into<String>, widget: WidgetKind) -> Self {
        Self {
            label: label.into(),
            widget: Some(widget),
            ..Default::default()
        }
    }

    pub fn input(label: impl Into<String>) -> Self {
        Self::with_widget(label, WidgetKind::Input)
    }

    pub fn textarea(label: impl Into<String>) -> Self {
        Self::with_widget(label, WidgetKind::Textarea)
    }

    pub fn select(label: impl Into<String>, options: Vec<SelectOption>) -> Self {
        Self {
            options: Some(options),
            ..Self::with_widget(label, WidgetKind::Select)
        }
    }

    pub fn file(label: impl Into<String>) -> Self {
        Self::with_widget(label, WidgetKind::File)
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    /// Mark the field as a column of the tabular view
    pub fn in_table(mut self) -> Self {
        self.table = true;
        self
    }
}

/// Field name to metadata lookup table
pub type UiMap = HashMap<String, FieldMeta>;

/// Ordered field names; the only source of rendering order
pub type FieldOrder = Vec<String>;

/// Opaque validation schema for values of type `T`
///
/// Closures of the shape `Fn(&T) -> Result<(), Vec<FieldIssue>>` are schemas.
pub trait Schema<T>: Send + Sync {
    fn validate(&self, value: &T) -> Result<(), Vec<FieldIssue>>;
}

impl<T, F> Schema<T> for F
where
    F: Fn(&T) -> Result<(), Vec<FieldIssue>> + Send + Sync,
{
    fn validate(&self, value: &T) -> Result<(), Vec<FieldIssue>> {
        self(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn widget_kind_uses_lowercase_names() {
        let kind: WidgetKind = serde_json::from_str("\"textarea\"").unwrap();
        assert_eq!(kind, WidgetKind::Textarea);
        assert_eq!(serde_json::to_string(&WidgetKind::File).unwrap(), "\"file\"");
    }

    #[test]
    fn unrecognised_widget_decodes_to_unknown() {
        let kind: WidgetKind = serde_json::from_str("\"color-picker\"").unwrap();
        assert_eq!(kind, WidgetKind::Unknown);
    }

    #[test]
    fn field_meta_optional_parts_default() {
        let meta: FieldMeta = serde_json::from_str(r#"{"label":"Title"}"#).unwrap();
        assert_eq!(meta.label, "Title");
        assert_eq!(meta.widget, None);
        assert_eq!(meta.placeholder, None);
        assert_eq!(meta.options, None);
        assert!(!meta.table);
    }

    #[test]
    fn builders_set_widget_and_extras() {
        let meta = FieldMeta::select("Category", vec![SelectOption::new("a", "A")])
            .with_placeholder("pick one")
            .in_table();
        assert_eq!(meta.widget, Some(WidgetKind::Select));
        assert_eq!(meta.placeholder.as_deref(), Some("pick one"));
        assert_eq!(meta.options.as_ref().map(Vec::len), Some(1));
        assert!(meta.table);
    }

    #[test]
    fn closures_are_schemas() {
        let schema = |v: &String| {
            if v.is_empty() {
                Err(vec![FieldIssue::new("title", "required")])
            } else {
                Ok(())
            }
        };
        assert!(schema.validate(&"x".to_string()).is_ok());
        assert_eq!(schema.validate(&String::new()).unwrap_err().len(), 1);
    }
}
