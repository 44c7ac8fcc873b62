//! Radio Components
//!
//! `Radio` is a single native radio button; `RadioGroup` lays a set of them
//! out in a row.

use dioxus::prelude::*;

use crate::class::merge_class;

pub(crate) const RADIO_CLASS: &str = "radio";
const RADIO_GROUP_CLASS: &str = "radio-group";

/// Properties for the Radio component
#[derive(Clone, PartialEq, Props)]
pub struct RadioProps {
    /// Value reported when this radio is picked
    pub value: String,
    pub checked: bool,
    /// Handler called with `value` when the radio becomes checked
    pub onchange: EventHandler<String>,
    /// Group name shared by radios of one choice
    #[props(default)]
    pub name: Option<String>,
    #[props(default = false)]
    pub disabled: bool,
    #[props(default)]
    pub id: Option<String>,
    #[props(default)]
    pub class: Option<String>,
    #[props(default)]
    pub onmounted: Option<EventHandler<MountedEvent>>,
}

/// Native radio button
#[component]
pub fn Radio(props: RadioProps) -> Element {
    let class = merge_class(RADIO_CLASS, props.class.as_deref());
    let value = props.value.clone();
    let onchange = props.onchange;
    let onmounted = props.onmounted;

    rsx! {
        input {
            r#type: "radio",
            id: props.id.clone(),
            name: props.name.clone(),
            class: "{class}",
            value: "{props.value}",
            checked: props.checked,
            disabled: props.disabled,
            onchange: move |_| onchange.call(value.clone()),
            onmounted: move |e| {
                if let Some(handler) = onmounted {
                    handler.call(e);
                }
            },
        }
    }
}

/// Row container for radios
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     RadioGroup { aria_label: "Condition".to_string(),
///         for choice in ["new", "used"] {
///             label {
///                 Radio {
///                     name: "condition".to_string(),
///                     value: choice.to_string(),
///                     checked: condition() == choice,
///                     onchange: move |v| condition.set(v),
///                 }
///                 "{choice}"
///             }
///         }
///     }
/// }
/// ```
#[component]
pub fn RadioGroup(
    #[props(default)] aria_label: Option<String>,
    #[props(default)] class: Option<String>,
    children: Element,
) -> Element {
    let class = merge_class(RADIO_GROUP_CLASS, class.as_deref());

    rsx! {
        div {
            class: "{class}",
            role: "radiogroup",
            "aria-label": aria_label,
            {children}
        }
    }
}
