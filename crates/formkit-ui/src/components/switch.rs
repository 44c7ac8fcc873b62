//! Toggle Switch Component
//!
//! A visually hidden checkbox followed by a track and thumb. The checkbox
//! keeps native keyboard and form behaviour; CSS draws the switch from its
//! checked state.

use dioxus::prelude::*;

use crate::class::merge_class;

pub(crate) const SWITCH_CLASS: &str = "switch";

/// Properties for the Switch component
#[derive(Clone, PartialEq, Props)]
pub struct SwitchProps {
    pub checked: bool,
    /// Handler called with the new state
    pub onchange: EventHandler<bool>,
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
    /// Optional text after the switch
    #[props(default)]
    pub children: Element,
}

/// On/off toggle
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Switch { checked: public(), onchange: move |on| public.set(on), "public" }
/// }
/// ```
#[component]
pub fn Switch(props: SwitchProps) -> Element {
    let class = merge_class(SWITCH_CLASS, props.class.as_deref());
    let onchange = props.onchange;
    let onmounted = props.onmounted;

    rsx! {
        label { class: "{class}",
            input {
                r#type: "checkbox",
                role: "switch",
                id: props.id.clone(),
                name: props.name.clone(),
                class: "switch-input",
                checked: props.checked,
                disabled: props.disabled,
                onchange: move |e| onchange.call(e.checked()),
                onmounted: move |e| {
                    if let Some(handler) = onmounted {
                        handler.call(e);
                    }
                },
            }
            span { class: "switch-track", "aria-hidden": "true",
                span { class: "switch-thumb", "aria-hidden": "true" }
            }
            {props.children}
        }
    }
}
