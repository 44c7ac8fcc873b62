//! Schema-driven field planning
//!
//! Resolves each name of a [`FieldOrder`] against a [`UiMap`] and the
//! current form state into a [`FieldPlan`]. The UI crate renders plans one
//! to one, so everything that decides *what* a field looks like lives here.

use serde_json::Value;

use crate::form::{FieldBinding, FormState};
use crate::schema::{FieldMeta, SelectOption, UiMap, WidgetKind};

/// The widget a field resolves to
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum FieldWidget {
    TextInput { placeholder: Option<String> },
    Multiline { placeholder: Option<String> },
    Selection {
        placeholder: Option<String>,
        options: Vec<SelectOption>,
    },
    /// Image picker writing a data URL into the field
    File,
    /// Missing or unrecognised metadata: a plain text input
    Default,
}

impl FieldWidget {
    /// Resolve the widget for optional field metadata
    pub fn resolve(meta: Option<&FieldMeta>) -> Self {
        let Some(meta) = meta else {
            return FieldWidget::Default;
        };
        match meta.widget {
            Some(WidgetKind::Input) => FieldWidget::TextInput {
                placeholder: meta.placeholder.clone(),
            },
            Some(WidgetKind::Textarea) => FieldWidget::Multiline {
                placeholder: meta.placeholder.clone(),
            },
            Some(WidgetKind::Select) => FieldWidget::Selection {
                placeholder: meta.placeholder.clone(),
                options: meta.options.clone().unwrap_or_default(),
            },
            Some(WidgetKind::File) => FieldWidget::File,
            Some(WidgetKind::Unknown) | None => FieldWidget::Default,
        }
    }

    pub fn is_file(&self) -> bool {
        matches!(self, FieldWidget::File)
    }
}

/// Everything needed to render one field
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct FieldPlan {
    pub name: String,
    /// Metadata label, or the field name when there is no metadata
    pub label: String,
    pub has_meta: bool,
    pub widget: FieldWidget,
    pub binding: FieldBinding,
    /// Show the "file loaded" indicator after the widget
    pub file_loaded: bool,
}

/// Whether the "file loaded" indicator shows for a field
pub fn shows_file_indicator(widget: &FieldWidget, current: &Value) -> bool {
    widget.is_file() && matches!(current, Value::String(s) if !s.is_empty())
}

/// Plan a single field
pub fn plan_field<F: FormState + ?Sized>(name: &str, ui: &UiMap, form: &F) -> FieldPlan {
    let meta = ui.get(name);
    if meta.is_none() {
        tracing::debug!(field = name, "no ui metadata, rendering default input");
    }

    let current = form.value(name);
    let widget = FieldWidget::resolve(meta);
    let file_loaded = shows_file_indicator(&widget, &current);

    FieldPlan {
        name: name.to_string(),
        label: meta.map_or_else(|| name.to_string(), |m| m.label.clone()),
        has_meta: meta.is_some(),
        widget,
        binding: form.binding(name),
        file_loaded,
    }
}

/// Plan every field of `order`, in order
pub fn plan_fields<F, S>(order: &[S], ui: &UiMap, form: &F) -> Vec<FieldPlan>
where
    F: FormState + ?Sized,
    S: AsRef<str>,
{
    order
        .iter()
        .map(|name| plan_field(name.as_ref(), ui, form))
        .collect()
}

/// A column of the tabular item view
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct TableColumn {
    pub name: String,
    pub label: String,
}

/// Fields flagged `table` in the UI map, in field order
pub fn table_columns<S: AsRef<str>>(order: &[S], ui: &UiMap) -> Vec<TableColumn> {
    order
        .iter()
        .filter_map(|name| {
            let name = name.as_ref();
            ui.get(name).filter(|m| m.table).map(|m| TableColumn {
                name: name.to_string(),
                label: m.label.clone(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::FormValues;
    use proptest::prelude::*;

    fn item_ui() -> UiMap {
        UiMap::from([
            (
                "title".to_string(),
                FieldMeta::input("Title").with_placeholder("Name it").in_table(),
            ),
            ("notes".to_string(), FieldMeta::textarea("Notes")),
            (
                "category".to_string(),
                FieldMeta::select(
                    "Category",
                    vec![
                        SelectOption::new("tool", "Tool"),
                        SelectOption::new("seed", "Seed"),
                        SelectOption::new("book", "Book"),
                    ],
                )
                .in_table(),
            ),
            ("image".to_string(), FieldMeta::file("Image")),
        ])
    }

    #[test]
    fn missing_metadata_falls_back_to_default_input() {
        let form = FormValues::new().with("extra", "hello");
        let plan = plan_field("extra", &item_ui(), &form);
        assert_eq!(plan.widget, FieldWidget::Default);
        assert!(!plan.has_meta);
        assert_eq!(plan.label, "extra");
        assert_eq!(plan.binding.value, "hello");
        assert_eq!(plan.binding.name, "extra");
    }

    #[test]
    fn unknown_widget_kind_falls_back_but_keeps_label() {
        let mut ui = item_ui();
        ui.insert(
            "color".into(),
            FieldMeta {
                label: "Color".into(),
                widget: Some(WidgetKind::Unknown),
                ..Default::default()
            },
        );
        let plan = plan_field("color", &ui, &FormValues::new());
        assert_eq!(plan.widget, FieldWidget::Default);
        assert_eq!(plan.label, "Color");
        assert!(plan.has_meta);
    }

    #[test]
    fn selection_keeps_options_in_list_order() {
        let plan = plan_field("category", &item_ui(), &FormValues::new());
        let FieldWidget::Selection { options, .. } = plan.widget else {
            panic!("expected selection widget");
        };
        let values: Vec<_> = options.iter().map(|o| o.value.as_str()).collect();
        assert_eq!(values, ["tool", "seed", "book"]);
    }

    #[test]
    fn selection_without_options_is_empty() {
        let ui = UiMap::from([(
            "kind".to_string(),
            FieldMeta {
                label: "Kind".into(),
                widget: Some(WidgetKind::Select),
                ..Default::default()
            },
        )]);
        let plan = plan_field("kind", &ui, &FormValues::new());
        assert_eq!(
            plan.widget,
            FieldWidget::Selection {
                placeholder: None,
                options: vec![]
            }
        );
    }

    #[test]
    fn placeholder_carries_through() {
        let plan = plan_field("title", &item_ui(), &FormValues::new());
        assert_eq!(
            plan.widget,
            FieldWidget::TextInput {
                placeholder: Some("Name it".into())
            }
        );
    }

    #[test]
    fn file_indicator_needs_file_kind_and_non_empty_string() {
        let ui = item_ui();
        let empty = FormValues::new().with("image", "");
        assert!(!plan_field("image", &ui, &empty).file_loaded);

        let loaded = FormValues::new().with("image", "data:image/png;base64,AA==");
        assert!(plan_field("image", &ui, &loaded).file_loaded);

        let text = FormValues::new().with("title", "data:image/png;base64,AA==");
        assert!(!plan_field("title", &ui, &text).file_loaded);

        let number = FormValues::new().with("image", 7);
        assert!(!plan_field("image", &ui, &number).file_loaded);
    }

    #[test]
    fn table_columns_follow_field_order() {
        let order = ["category", "notes", "title"];
        let cols = table_columns(&order, &item_ui());
        let names: Vec<_> = cols.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["category", "title"]);
        assert_eq!(cols[1].label, "Title");
    }

    proptest! {
        #[test]
        fn plan_order_matches_input_order(
            order in proptest::collection::vec("[a-z]{1,6}", 0..12)
        ) {
            let plans = plan_fields(&order, &item_ui(), &FormValues::new());
            let names: Vec<_> = plans.iter().map(|p| p.name.clone()).collect();
            prop_assert_eq!(names, order);
        }
    }
}
