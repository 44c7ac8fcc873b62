//! Table Components
//!
//! Thin wrappers over the table elements; each merges its base class with
//! an optional override and renders its children.

use dioxus::prelude::*;

use crate::class::merge_class;

/// Scrollable table
#[component]
pub fn Table(#[props(default)] class: Option<String>, children: Element) -> Element {
    let class = merge_class("table", class.as_deref());

    rsx! {
        div { class: "table-container",
            table { class: "{class}", {children} }
        }
    }
}

#[component]
pub fn TableHeader(#[props(default)] class: Option<String>, children: Element) -> Element {
    let class = merge_class("table-header", class.as_deref());
    rsx! {
        thead { class: "{class}", {children} }
    }
}

#[component]
pub fn TableBody(#[props(default)] class: Option<String>, children: Element) -> Element {
    let class = merge_class("table-body", class.as_deref());
    rsx! {
        tbody { class: "{class}", {children} }
    }
}

#[component]
pub fn TableFooter(#[props(default)] class: Option<String>, children: Element) -> Element {
    let class = merge_class("table-footer", class.as_deref());
    rsx! {
        tfoot { class: "{class}", {children} }
    }
}

/// Table row; `selected` highlights it
#[component]
pub fn TableRow(
    #[props(default = false)] selected: bool,
    #[props(default)] class: Option<String>,
    children: Element,
) -> Element {
    let class = merge_class("table-row", class.as_deref());
    rsx! {
        tr {
            class: "{class}",
            "data-state": if selected { "selected" } else { "" },
            {children}
        }
    }
}

#[component]
pub fn TableHead(#[props(default)] class: Option<String>, children: Element) -> Element {
    let class = merge_class("table-head", class.as_deref());
    rsx! {
        th { class: "{class}", scope: "col", {children} }
    }
}

#[component]
pub fn TableCell(
    #[props(default)] colspan: Option<u32>,
    #[props(default)] class: Option<String>,
    children: Element,
) -> Element {
    let class = merge_class("table-cell", class.as_deref());
    let colspan = colspan.map(|c| c.to_string());
    rsx! {
        td { class: "{class}", colspan, {children} }
    }
}

#[component]
pub fn TableCaption(#[props(default)] class: Option<String>, children: Element) -> Element {
    let class = merge_class("table-caption", class.as_deref());
    rsx! {
        caption { class: "{class}", {children} }
    }
}
