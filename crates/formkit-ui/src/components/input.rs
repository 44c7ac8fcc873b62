//! Input Field Components
//!
//! Text inputs and textareas. Both forward their events untouched and hand
//! the mounted element to `onmounted` for focus handling.

use dioxus::prelude::*;

use crate::class::merge_class;

pub(crate) const INPUT_CLASS: &str = "input-field";
pub(crate) const TEXTAREA_CLASS: &str = "input-field textarea";

/// Placeholder attribute value; empty text leaves the attribute out
pub(crate) fn placeholder_attr(placeholder: Option<&str>) -> Option<String> {
    placeholder.filter(|p| !p.is_empty()).map(str::to_string)
}

/// Properties for the Input component
#[derive(Clone, PartialEq, Props)]
pub struct InputProps {
    /// Current input value; leave unset for file inputs
    #[props(default)]
    pub value: Option<String>,
    /// Handler called with the new text on every keystroke
    #[props(default)]
    pub oninput: Option<EventHandler<String>>,
    /// Raw change event (file inputs read `files()` from it)
    #[props(default)]
    pub onchange: Option<EventHandler<FormEvent>>,
    #[props(default)]
    pub placeholder: Option<String>,
    /// Input type (text, email, file, etc.)
    #[props(default = "text".to_string())]
    pub input_type: String,
    /// Accepted mime types for file inputs
    #[props(default)]
    pub accept: Option<String>,
    #[props(default)]
    pub name: Option<String>,
    #[props(default = false)]
    pub required: bool,
    #[props(default = false)]
    pub disabled: bool,
    /// Renders with `aria-invalid`
    #[props(default = false)]
    pub invalid: bool,
    #[props(default)]
    pub id: Option<String>,
    /// Optional additional CSS classes
    #[props(default)]
    pub class: Option<String>,
    /// Receives the mounted element
    #[props(default)]
    pub onmounted: Option<EventHandler<MountedEvent>>,
}

/// Single line input
///
/// # Example
///
/// ```rust,ignore
/// let mut title = use_signal(String::new);
///
/// rsx! {
///     Input {
///         value: title(),
///         oninput: move |s| title.set(s),
///         placeholder: "Name the item".to_string()
///     }
/// }
/// ```
#[component]
pub fn Input(props: InputProps) -> Element {
    let class = merge_class(INPUT_CLASS, props.class.as_deref());
    let oninput = props.oninput;
    let onchange = props.onchange;
    let onmounted = props.onmounted;

    rsx! {
        input {
            id: props.id.clone(),
            name: props.name.clone(),
            class: "{class}",
            r#type: "{props.input_type}",
            value: props.value.clone(),
            placeholder: placeholder_attr(props.placeholder.as_deref()),
            accept: props.accept.clone(),
            required: props.required,
            disabled: props.disabled,
            "aria-invalid": props.invalid,
            oninput: move |e| {
                if let Some(handler) = oninput {
                    handler.call(e.value());
                }
            },
            onchange: move |e| {
                if let Some(handler) = onchange {
                    handler.call(e);
                }
            },
            onmounted: move |e| {
                if let Some(handler) = onmounted {
                    handler.call(e);
                }
            },
        }
    }
}

/// Properties for the TextArea component
#[derive(Clone, PartialEq, Props)]
pub struct TextAreaProps {
    pub value: String,
    pub oninput: EventHandler<String>,
    #[props(default)]
    pub placeholder: Option<String>,
    /// Number of visible rows
    #[props(default = 4)]
    pub rows: u32,
    #[props(default)]
    pub name: Option<String>,
    #[props(default = false)]
    pub required: bool,
    #[props(default = false)]
    pub disabled: bool,
    #[props(default = false)]
    pub invalid: bool,
    #[props(default)]
    pub id: Option<String>,
    #[props(default)]
    pub class: Option<String>,
    #[props(default)]
    pub onmounted: Option<EventHandler<MountedEvent>>,
}

/// Multi-line text input
///
/// # Example
///
/// ```rust,ignore
/// let mut notes = use_signal(String::new);
///
/// rsx! {
///     TextArea {
///         value: notes(),
///         oninput: move |s| notes.set(s),
///         rows: 5
///     }
/// }
/// ```
#[component]
pub fn TextArea(props: TextAreaProps) -> Element {
    let class = merge_class(TEXTAREA_CLASS, props.class.as_deref());
    let oninput = props.oninput;
    let onmounted = props.onmounted;

    rsx! {
        textarea {
            id: props.id.clone(),
            name: props.name.clone(),
            class: "{class}",
            rows: "{props.rows}",
            placeholder: placeholder_attr(props.placeholder.as_deref()),
            required: props.required,
            disabled: props.disabled,
            "aria-invalid": props.invalid,
            value: "{props.value}",
            oninput: move |e| oninput.call(e.value()),
            onmounted: move |e| {
                if let Some(handler) = onmounted {
                    handler.call(e);
                }
            },
        }
    }
}
