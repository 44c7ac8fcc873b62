//! Auto Table Component
//!
//! Lists form-value rows using the fields flagged `table` in the UI map as
//! columns. Image data URLs render as thumbnails.

use std::sync::Arc;

use dioxus::prelude::*;
use formkit_core::{table_columns, FormValues, UiMap};

use crate::components::{
    Table, TableBody, TableCaption, TableCell, TableHead, TableHeader, TableRow,
};

/// Whether a cell value is an inline image
pub fn is_image_data_url(text: &str) -> bool {
    text.starts_with("data:image/")
}

#[component]
pub fn AutoTable(
    fields: Arc<[String]>,
    ui: Arc<UiMap>,
    rows: Vec<FormValues>,
    #[props(default)] caption: Option<String>,
    /// Shown in a single cell when there are no rows
    #[props(default = "Nothing here yet".to_string())]
    empty_text: String,
    #[props(default)] class: Option<String>,
) -> Element {
    let columns = table_columns(&fields[..], &ui);
    let span = columns.len().max(1) as u32;

    rsx! {
        Table { class: class.unwrap_or_default(),
            if let Some(caption) = &caption {
                TableCaption { "{caption}" }
            }
            TableHeader {
                TableRow {
                    for col in columns.iter() {
                        TableHead { key: "{col.name}", "{col.label}" }
                    }
                }
            }
            TableBody {
                if rows.is_empty() {
                    TableRow {
                        TableCell { colspan: span, class: "table-empty".to_string(), "{empty_text}" }
                    }
                }
                for (index, row) in rows.iter().enumerate() {
                    TableRow { key: "{index}",
                        for col in columns.iter() {
                            TableCell { key: "{col.name}", {render_cell(row.text(&col.name))} }
                        }
                    }
                }
            }
        }
    }
}

fn render_cell(text: String) -> Element {
    if is_image_data_url(&text) {
        rsx! {
            img { class: "table-thumb", src: "{text}", alt: "" }
        }
    } else {
        rsx! { "{text}" }
    }
}
