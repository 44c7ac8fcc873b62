use dioxus::prelude::*;
use formkit_core::{make_schema_transport, FormError, FormValues, SchemaTransport};
use formkit_ui::{
    use_form, AutoFields, AutoTable, Checkbox, ContentPosition, Label, Radio, RadioGroup,
    SelectContent, SelectItem, SelectTrigger, SelectValue, Switch, FORMKIT_STYLES,
};

use crate::item::{item_schema, Item};
use crate::theme::APP_STYLES;

type ItemTransport = SchemaTransport<FormValues, Item>;

/// How the item table is ordered
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum SortOrder {
    #[default]
    Newest,
    Oldest,
    Title,
}

impl SortOrder {
    const ALL: [SortOrder; 3] = [SortOrder::Newest, SortOrder::Oldest, SortOrder::Title];

    fn value(&self) -> &'static str {
        match self {
            SortOrder::Newest => "newest",
            SortOrder::Oldest => "oldest",
            SortOrder::Title => "title",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            SortOrder::Newest => "Newest first",
            SortOrder::Oldest => "Oldest first",
            SortOrder::Title => "By title",
        }
    }

    fn parse(value: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|s| s.value() == value)
            .unwrap_or_default()
    }
}

/// Items in display order
pub fn sort_items(items: &[Item], order: SortOrder) -> Vec<Item> {
    let mut sorted = items.to_vec();
    match order {
        SortOrder::Newest => sorted.reverse(),
        SortOrder::Oldest => {}
        SortOrder::Title => sorted.sort_by_key(|item| item.title.to_lowercase()),
    }
    sorted
}

/// Root application component.
///
/// The item form on the left, list options on the right, saved items below.
#[component]
pub fn App() -> Element {
    let transport: ItemTransport =
        use_hook(|| make_schema_transport(&item_schema(crate::schema_config())));
    let defaults = transport.form_defaults;
    let form = use_form(move || defaults());

    let mut items = use_signal(Vec::<Item>::new);
    let mut status = use_signal(|| Option::<String>::None);
    let sort = use_signal(SortOrder::default);
    let compact = use_signal(|| false);
    let placement = use_signal(|| ContentPosition::Bottom);

    let save_transport = transport.clone();
    let save = move |_: MouseEvent| {
        let values = form.snapshot();
        match save_transport.submit(&values) {
            Ok(item) => {
                tracing::info!(title = %item.title, category = ?item.category, "item saved");
                items.write().push(item);
                form.reset(save_transport.defaults());
                status.set(Some("Saved".to_string()));
            }
            Err(FormError::Validation(issues)) => {
                tracing::debug!(issues = issues.len(), "item form invalid");
                form.apply_issues(&issues);
                status.set(None);
            }
            Err(e) => {
                tracing::warn!(error = %e, "could not save item");
                status.set(Some(e.to_string()));
            }
        }
    };

    let rows: Vec<FormValues> = sort_items(&items.read(), sort())
        .iter()
        .map(|item| transport.edit(item))
        .collect();

    rsx! {
        style { {FORMKIT_STYLES} }
        style { {APP_STYLES} }
        main { class: "app",
            h1 { class: "app-title", "{crate::app_title()}" }
            section { class: "panel",
                h2 { "New item" }
                AutoFields {
                    form: form,
                    fields: transport.field_order.clone(),
                    ui: transport.ui.clone(),
                }
                div { class: "form-actions",
                    button { class: "btn-primary", r#type: "button", onclick: save, "Save item" }
                    if let Some(message) = status() {
                        span { class: "status", "{message}" }
                    }
                    if form.is_dirty() {
                        span { class: "status", "unsaved changes" }
                    }
                }
            }
            ListOptions { sort: sort, compact: compact, placement: placement }
            section { class: "panel items",
                h2 { "Items" }
                AutoTable {
                    fields: transport.field_order.clone(),
                    ui: transport.ui.clone(),
                    rows: rows,
                    class: if compact() { "table--compact".to_string() } else { String::new() },
                    caption: format!("{} saved", items.read().len()),
                }
            }
        }
    }
}

/// Table options built from the primitive widgets
#[component]
fn ListOptions(
    sort: Signal<SortOrder>,
    compact: Signal<bool>,
    placement: Signal<ContentPosition>,
) -> Element {
    let mut open = use_signal(|| false);
    let mut sort = sort;
    let mut compact = compact;
    let mut placement = placement;
    let mut public = use_signal(|| true);

    rsx! {
        section { class: "panel",
            h2 { "List options" }
            div { class: "form-field",
                Label { "Sort" }
                div { class: "select-anchor",
                    SelectTrigger {
                        expanded: open(),
                        onclick: move |_| open.toggle(),
                        SelectValue { value: sort().label().to_string() }
                        span { "aria-hidden": "true", "\u{25BE}" }
                    }
                    if open() {
                        SelectContent { position: placement(),
                            for order in SortOrder::ALL {
                                SelectItem {
                                    key: "{order.value()}",
                                    value: order.value().to_string(),
                                    selected: sort() == order,
                                    onclick: move |value: String| {
                                        sort.set(SortOrder::parse(&value));
                                        open.set(false);
                                    },
                                    "{order.label()}"
                                }
                            }
                        }
                    }
                }
            }
            div { class: "form-field",
                Label { "Dropdown opens" }
                RadioGroup { aria_label: "Dropdown placement".to_string(),
                    for (position, text) in [(ContentPosition::Bottom, "below"), (ContentPosition::Top, "above")] {
                        Label { key: "{text}",
                            Radio {
                                name: "placement".to_string(),
                                value: text.to_string(),
                                checked: placement() == position,
                                onchange: move |_: String| placement.set(position),
                            }
                            "{text}"
                        }
                    }
                }
            }
            div { class: "option-row",
                Checkbox {
                    id: "compact".to_string(),
                    checked: compact(),
                    onchange: move |on: bool| compact.set(on),
                }
                Label { html_for: "compact".to_string(), "Compact rows" }
            }
            div { class: "option-row",
                Switch {
                    checked: public(),
                    onchange: move |on: bool| {
                        tracing::debug!(public = on, "listing visibility changed");
                        public.set(on);
                    },
                    if public() { "Listing is public" } else { "Listing is private" }
                }
            }
        }
    }
}
