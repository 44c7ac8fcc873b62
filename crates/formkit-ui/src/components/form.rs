//! Form Layout Components
//!
//! Structure around a single field: `FormItem` groups a `FormLabel`, a
//! `FormControl` holding the widget, an optional `FormDescription` and a
//! `FormMessage` for errors.

use dioxus::prelude::*;

use crate::class::merge_class;

/// Vertical group for one field
#[component]
pub fn FormItem(#[props(default)] class: Option<String>, children: Element) -> Element {
    let class = merge_class("form-field", class.as_deref());
    rsx! {
        div { class: "{class}", {children} }
    }
}

/// Field label; switches to the error colour when `invalid`
#[component]
pub fn FormLabel(
    #[props(default)] html_for: Option<String>,
    #[props(default = false)] invalid: bool,
    #[props(default)] class: Option<String>,
    children: Element,
) -> Element {
    let base = if invalid {
        "input-label input-label--error"
    } else {
        "input-label"
    };
    let class = merge_class(base, class.as_deref());

    rsx! {
        label { class: "{class}", r#for: html_for, {children} }
    }
}

/// Wrapper around the field's widget
#[component]
pub fn FormControl(#[props(default)] class: Option<String>, children: Element) -> Element {
    let class = merge_class("form-control", class.as_deref());
    rsx! {
        div { class: "{class}", {children} }
    }
}

/// Muted helper text under a field
#[component]
pub fn FormDescription(#[props(default)] class: Option<String>, children: Element) -> Element {
    let class = merge_class("form-description", class.as_deref());
    rsx! {
        p { class: "{class}", {children} }
    }
}

/// Error text under a field
#[component]
pub fn FormMessage(#[props(default)] class: Option<String>, children: Element) -> Element {
    let class = merge_class("form-message", class.as_deref());
    rsx! {
        p { class: "{class}", role: "alert", {children} }
    }
}
