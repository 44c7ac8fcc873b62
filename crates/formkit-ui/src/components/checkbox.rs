//! Checkbox Component

use dioxus::prelude::*;

use crate::class::merge_class;

pub(crate) const CHECKBOX_CLASS: &str = "checkbox";

/// Native checkbox reporting its new checked state
///
/// # Example
///
/// ```rust,ignore
/// let mut agreed = use_signal(|| false);
///
/// rsx! {
///     Checkbox { checked: agreed(), onchange: move |c| agreed.set(c) }
/// }
/// ```
#[component]
pub fn Checkbox(
    checked: bool,
    onchange: EventHandler<bool>,
    #[props(default)] name: Option<String>,
    #[props(default = false)] disabled: bool,
    #[props(default = false)] invalid: bool,
    #[props(default)] id: Option<String>,
    #[props(default)] class: Option<String>,
    #[props(default)] onmounted: Option<EventHandler<MountedEvent>>,
) -> Element {
    let class = merge_class(CHECKBOX_CLASS, class.as_deref());

    rsx! {
        input {
            r#type: "checkbox",
            id,
            name,
            class: "{class}",
            checked,
            disabled,
            "aria-invalid": invalid,
            onchange: move |e| onchange.call(e.checked()),
            onmounted: move |e| {
                if let Some(handler) = onmounted {
                    handler.call(e);
                }
            },
        }
    }
}
