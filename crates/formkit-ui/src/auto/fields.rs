//! Auto Fields Component
//!
//! Renders one labelled field per name of a field order, choosing each
//! widget from the UI map. Field values live in the [`FormHandle`]; the
//! component only reads and writes through it.

use std::sync::Arc;

use dioxus::prelude::*;
use formkit_core::{load_file_field, plan_fields, FieldPlan, FieldWidget, UiMap, IMAGE_ACCEPT};

use super::files::EngineFiles;
use crate::components::{FormControl, FormItem, FormLabel, FormMessage, Input, Select, TextArea};
use crate::form_handle::FormHandle;

/// Text of the indicator shown after a loaded file field
pub const FILE_LOADED_TEXT: &str = "File loaded";

/// Renders every field of `fields` in order
///
/// A name listed twice renders twice; keys combine position and name.
///
/// # Example
///
/// ```rust,ignore
/// let transport = make_schema_transport(&item_schema());
/// let form = use_form(move || (transport.form_defaults)());
///
/// rsx! {
///     AutoFields {
///         form: form,
///         fields: transport.field_order.clone(),
///         ui: transport.ui.clone(),
///     }
/// }
/// ```
#[component]
pub fn AutoFields(form: FormHandle, fields: Arc<[String]>, ui: Arc<UiMap>) -> Element {
    let plans: Vec<(String, FieldPlan)> = plan_fields(&fields[..], &ui, &form)
        .into_iter()
        .enumerate()
        .map(|(index, plan)| (field_key(index, &plan.name), plan))
        .collect();

    rsx! {
        for (key, plan) in plans {
            AutoField { key: "{key}", form: form, plan: plan.clone() }
        }
    }
}

/// Render key for the field at `index`; unique even when a name repeats
fn field_key(index: usize, name: &str) -> String {
    format!("{index}-{name}")
}

#[component]
fn AutoField(form: FormHandle, plan: FieldPlan) -> Element {
    let id = format!("field-{}", plan.name);
    let invalid = plan.binding.error.is_some();
    let widget = render_widget(form, &plan, &id);

    rsx! {
        FormItem {
            FormLabel { html_for: id.clone(), invalid: invalid, "{plan.label}" }
            FormControl { {widget} }
            if plan.file_loaded {
                span { class: "field-file-loaded", "{FILE_LOADED_TEXT}" }
            }
            if let Some(error) = &plan.binding.error {
                FormMessage { "{error}" }
            }
        }
    }
}

fn render_widget(form: FormHandle, plan: &FieldPlan, id: &str) -> Element {
    let value = plan.binding.value.clone();
    let invalid = plan.binding.error.is_some();
    let name = plan.name.clone();
    let write = move |text: String| form.set_text(&name, text);

    match &plan.widget {
        FieldWidget::TextInput { placeholder } => rsx! {
            Input {
                id: id.to_string(),
                name: plan.name.clone(),
                value: value,
                placeholder: placeholder.clone().unwrap_or_default(),
                invalid: invalid,
                oninput: move |text| write(text),
            }
        },
        FieldWidget::Multiline { placeholder } => rsx! {
            TextArea {
                id: id.to_string(),
                name: plan.name.clone(),
                value: value,
                placeholder: placeholder.clone().unwrap_or_default(),
                invalid: invalid,
                oninput: move |text| write(text),
            }
        },
        FieldWidget::Selection {
            placeholder,
            options,
        } => rsx! {
            Select {
                id: id.to_string(),
                name: plan.name.clone(),
                value: value.clone(),
                invalid: invalid,
                onchange: move |choice| write(choice),
                if let Some(placeholder) = placeholder {
                    option { value: "", disabled: true, selected: value.is_empty(), "{placeholder}" }
                }
                for opt in options.iter() {
                    option {
                        key: "{opt.value}",
                        value: "{opt.value}",
                        selected: opt.value == value,
                        "{opt.label}"
                    }
                }
            }
        },
        FieldWidget::File => {
            let name = plan.name.clone();
            rsx! {
                Input {
                    id: id.to_string(),
                    input_type: "file".to_string(),
                    accept: IMAGE_ACCEPT.to_string(),
                    invalid: invalid,
                    onchange: move |evt: FormEvent| load_file(form, name.clone(), evt),
                }
            }
        }
        FieldWidget::Default => rsx! {
            Input {
                id: id.to_string(),
                name: plan.name.clone(),
                value: value,
                invalid: invalid,
                oninput: move |text| write(text),
            }
        },
    }
}

/// Read the picked image into the field. A failed read is logged and shown
/// as the field's error; the stored value is left as it was.
fn load_file(form: FormHandle, name: String, evt: FormEvent) {
    let files = evt.files().map(EngineFiles);
    spawn(async move {
        let mut form = form;
        match load_file_field(&mut form, &name, files.as_ref()).await {
            Ok(()) => tracing::debug!(field = %name, "file field updated"),
            Err(e) => {
                tracing::warn!(field = %name, error = %e, "failed to read picked file");
                form.set_error(&name, e.to_string());
            }
        }
    });
}
