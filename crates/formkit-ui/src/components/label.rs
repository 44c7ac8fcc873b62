//! Label Component

use dioxus::prelude::*;

use crate::class::merge_class;

pub(crate) const LABEL_CLASS: &str = "field-label";

/// Text label bound to a control by id
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Label { html_for: "title".to_string(), "Title" }
/// }
/// ```
#[component]
pub fn Label(
    /// Id of the labelled control
    #[props(default)]
    html_for: Option<String>,
    #[props(default)] class: Option<String>,
    children: Element,
) -> Element {
    let class = merge_class(LABEL_CLASS, class.as_deref());

    rsx! {
        label { class: "{class}", r#for: html_for, {children} }
    }
}
