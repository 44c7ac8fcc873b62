//! The "item" schema rendered by the desktop app.
//!
//! Form values are flat text fields; the domain [`Item`] is typed. A
//! `--schema` config can replace the UI map and field order, the
//! validators and converters stay the same.

use std::sync::Arc;

use formkit_core::{
    FieldIssue, FieldMeta, FormError, FormValues, Result, SchemaConfig, SchemaModule,
    SelectOption, UiMap,
};
use serde::{Deserialize, Serialize};

const TITLE_MAX: usize = 80;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Tool,
    Seed,
    Book,
    Other,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Tool,
        Category::Seed,
        Category::Book,
        Category::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Tool => "tool",
            Category::Seed => "seed",
            Category::Book => "book",
            Category::Other => "other",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Category::Tool => "Tool",
            Category::Seed => "Seeds",
            Category::Book => "Book",
            Category::Other => "Other",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == value)
    }
}

/// A shared item
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub title: String,
    pub description: String,
    pub category: Category,
    /// Image as a data URL
    pub image: Option<String>,
    pub link: Option<String>,
}

/// Default field order; `link` has no UI entry and renders as a plain input
pub fn item_field_order() -> Vec<String> {
    ["title", "description", "category", "image", "link"]
        .into_iter()
        .map(String::from)
        .collect()
}

pub fn item_ui() -> UiMap {
    let options = Category::ALL
        .iter()
        .map(|c| SelectOption::new(c.as_str(), c.label()))
        .collect();

    UiMap::from([
        (
            "title".to_string(),
            FieldMeta::input("Title")
                .with_placeholder("What are you sharing?")
                .in_table(),
        ),
        (
            "description".to_string(),
            FieldMeta::textarea("Description").with_placeholder("Condition, pickup, notes"),
        ),
        (
            "category".to_string(),
            FieldMeta::select("Category", options)
                .with_placeholder("Choose a category")
                .in_table(),
        ),
        ("image".to_string(), FieldMeta::file("Photo").in_table()),
    ])
}

pub fn item_form_defaults() -> FormValues {
    item_field_order()
        .into_iter()
        .fold(FormValues::new(), |form, name| form.with(name, ""))
}

fn non_empty(text: String) -> Option<String> {
    let trimmed = text.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

pub fn item_to_domain(values: &FormValues) -> Result<Item> {
    let category_text = values.text("category");
    let category = Category::parse(&category_text)
        .ok_or_else(|| FormError::Conversion(format!("unknown category '{category_text}'")))?;

    Ok(Item {
        title: values.text("title").trim().to_string(),
        description: values.text("description").trim().to_string(),
        category,
        image: non_empty(values.text("image")),
        link: non_empty(values.text("link")),
    })
}

pub fn item_to_form_values(item: &Item) -> FormValues {
    FormValues::new()
        .with("title", item.title.clone())
        .with("description", item.description.clone())
        .with("category", item.category.as_str())
        .with("image", item.image.clone().unwrap_or_default())
        .with("link", item.link.clone().unwrap_or_default())
}

fn validate_item_form(values: &FormValues) -> std::result::Result<(), Vec<FieldIssue>> {
    let mut issues = Vec::new();
    if values.text("title").trim().is_empty() {
        issues.push(FieldIssue::new("title", "Title is required"));
    }
    if values.text("category").is_empty() {
        issues.push(FieldIssue::new("category", "Pick a category"));
    }
    if issues.is_empty() {
        Ok(())
    } else {
        Err(issues)
    }
}

fn validate_item(item: &Item) -> std::result::Result<(), Vec<FieldIssue>> {
    let mut issues = Vec::new();
    if item.title.chars().count() > TITLE_MAX {
        issues.push(FieldIssue::new(
            "title",
            format!("Keep the title under {TITLE_MAX} characters"),
        ));
    }
    if let Some(link) = &item.link {
        if !(link.starts_with("http://") || link.starts_with("https://")) {
            issues.push(FieldIssue::new("link", "Links must start with http(s)://"));
        }
    }
    if issues.is_empty() {
        Ok(())
    } else {
        Err(issues)
    }
}

/// The item schema module, with UI map and order taken from `config` when given
pub fn item_schema(config: Option<&SchemaConfig>) -> SchemaModule<FormValues, Item> {
    let (ui, order) = match config {
        Some(config) => (config.ui.clone(), config.field_order.clone()),
        None => (item_ui(), item_field_order()),
    };

    SchemaModule {
        form_schema: Arc::new(validate_item_form),
        domain_schema: Arc::new(validate_item),
        ui: Arc::new(ui),
        form_defaults: item_form_defaults,
        to_domain: item_to_domain,
        to_form_values: item_to_form_values,
        field_order: Arc::from(order),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use formkit_core::{make_schema_transport, plan_fields, FieldWidget};

    fn filled() -> FormValues {
        item_form_defaults()
            .with("title", "  Garden fork ")
            .with("category", "tool")
            .with("link", "https://example.org/fork")
    }

    #[test]
    fn submit_converts_valid_values() {
        let transport = make_schema_transport(&item_schema(None));
        let item = transport.submit(&filled()).unwrap();
        assert_eq!(item.title, "Garden fork");
        assert_eq!(item.category, Category::Tool);
        assert_eq!(item.image, None);
    }

    #[test]
    fn empty_form_reports_title_and_category() {
        let transport = make_schema_transport(&item_schema(None));
        let err = transport.submit(&transport.defaults()).unwrap_err();
        let FormError::Validation(issues) = err else {
            panic!("expected validation error");
        };
        let fields: Vec<_> = issues.iter().map(|i| i.field.as_str()).collect();
        assert_eq!(fields, ["title", "category"]);
    }

    #[test]
    fn bad_link_fails_domain_validation() {
        let transport = make_schema_transport(&item_schema(None));
        let err = transport
            .submit(&filled().with("link", "ftp://nope"))
            .unwrap_err();
        assert!(matches!(err, FormError::Validation(issues) if issues[0].field == "link"));
    }

    #[test]
    fn unknown_category_is_a_conversion_error() {
        let err = item_to_domain(&filled().with("category", "boat")).unwrap_err();
        assert!(matches!(err, FormError::Conversion(_)));
    }

    #[test]
    fn edit_round_trips_an_item() {
        let transport = make_schema_transport(&item_schema(None));
        let item = transport.submit(&filled()).unwrap();
        assert_eq!(item_to_domain(&transport.edit(&item)).unwrap(), item);
    }

    #[test]
    fn link_renders_with_default_input() {
        let module = item_schema(None);
        let plans = plan_fields(&module.field_order[..], &module.ui, &item_form_defaults());
        let link = plans.iter().find(|p| p.name == "link").unwrap();
        assert_eq!(link.widget, FieldWidget::Default);
        assert_eq!(link.label, "link");
    }

    #[test]
    fn config_overrides_ui_and_order() {
        let config = SchemaConfig::from_json(
            r#"{ "field_order": ["category", "title"],
                 "ui": { "title": { "label": "Name", "widget": "input" } } }"#,
        )
        .unwrap();
        let module = item_schema(Some(&config));
        assert_eq!(&module.field_order[..], ["category", "title"]);
        assert_eq!(module.ui["title"].label, "Name");
    }
}
