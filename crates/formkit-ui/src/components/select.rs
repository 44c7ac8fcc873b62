//! Select Components
//!
//! Two ways to pick a value:
//! - `Select` wraps the native `<select>` element; pass `option` children
//! - `SelectTrigger`, `SelectValue`, `SelectContent` and `SelectItem` compose
//!   a custom dropdown whose open state the caller owns

use dioxus::prelude::*;

use crate::class::merge_class;

pub(crate) const SELECT_CLASS: &str = "select-field";
const TRIGGER_CLASS: &str = "select-trigger";
const ITEM_CLASS: &str = "select-item";
const CONTENT_CLASS: &str = "select-content";
const ANCHORED_CLASS: &str = "select-content--anchored";

/// Where a `SelectContent` panel sits
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ContentPosition {
    /// In normal flow below the trigger
    #[default]
    Inline,
    /// Absolutely positioned above the trigger
    Top,
    /// Absolutely positioned below the trigger
    Bottom,
}

impl ContentPosition {
    pub fn is_anchored(&self) -> bool {
        !matches!(self, ContentPosition::Inline)
    }

    /// Vertical offset class for anchored panels
    pub fn offset_class(&self) -> Option<&'static str> {
        match self {
            ContentPosition::Inline => None,
            ContentPosition::Top => Some("select-content--above"),
            ContentPosition::Bottom => Some("select-content--below"),
        }
    }
}

/// Class list of a dropdown panel
pub fn content_class(position: ContentPosition, extra: Option<&str>) -> String {
    let base = match position.offset_class() {
        Some(offset) => format!("{} {} {}", CONTENT_CLASS, ANCHORED_CLASS, offset),
        None => CONTENT_CLASS.to_string(),
    };
    merge_class(&base, extra)
}

/// Text shown by `SelectValue`: the value, else the placeholder, else "Select"
pub fn select_value_text<'a>(value: Option<&'a str>, placeholder: Option<&'a str>) -> &'a str {
    value
        .filter(|v| !v.is_empty())
        .or(placeholder.filter(|p| !p.is_empty()))
        .unwrap_or("Select")
}

/// Properties for the native Select component
#[derive(Clone, PartialEq, Props)]
pub struct SelectProps {
    /// Currently selected option value
    pub value: String,
    /// Handler called with the newly selected value
    pub onchange: EventHandler<String>,
    /// `option` elements
    pub children: Element,
    #[props(default)]
    pub name: Option<String>,
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

/// Native select box
///
/// # Example
///
/// ```rust,ignore
/// let mut category = use_signal(|| "tool".to_string());
///
/// rsx! {
///     Select {
///         value: category(),
///         onchange: move |v| category.set(v),
///         option { value: "tool", "Tool" }
///         option { value: "seed", "Seed" }
///     }
/// }
/// ```
#[component]
pub fn Select(props: SelectProps) -> Element {
    let class = merge_class(SELECT_CLASS, props.class.as_deref());
    let onchange = props.onchange;
    let onmounted = props.onmounted;

    rsx! {
        select {
            id: props.id.clone(),
            name: props.name.clone(),
            class: "{class}",
            value: "{props.value}",
            disabled: props.disabled,
            "aria-invalid": props.invalid,
            onchange: move |e| onchange.call(e.value()),
            onmounted: move |e| {
                if let Some(handler) = onmounted {
                    handler.call(e);
                }
            },
            {props.children}
        }
    }
}

/// Button that opens a custom dropdown
#[component]
pub fn SelectTrigger(
    #[props(default)] onclick: Option<EventHandler<MouseEvent>>,
    /// Whether the dropdown is open, for `aria-expanded`
    #[props(default = false)]
    expanded: bool,
    #[props(default = false)] disabled: bool,
    #[props(default)] class: Option<String>,
    children: Element,
) -> Element {
    let class = merge_class(TRIGGER_CLASS, class.as_deref());

    rsx! {
        button {
            r#type: "button",
            class: "{class}",
            disabled,
            "aria-haspopup": "listbox",
            "aria-expanded": expanded,
            onclick: move |e| {
                if let Some(handler) = onclick {
                    handler.call(e);
                }
            },
            {children}
        }
    }
}

/// Displays the chosen value inside a trigger
#[component]
pub fn SelectValue(
    #[props(default)] value: Option<String>,
    #[props(default)] placeholder: Option<String>,
) -> Element {
    let text = select_value_text(value.as_deref(), placeholder.as_deref());
    let muted = value.as_deref().map_or(true, str::is_empty);

    rsx! {
        span {
            class: if muted { "select-value select-value--placeholder" } else { "select-value" },
            "{text}"
        }
    }
}

/// Dropdown panel holding `SelectItem`s
///
/// Anchored positions expect a positioned ancestor; no collision handling
/// is done, the caller picks the side.
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     div { class: "select-anchor",
///         SelectTrigger { onclick: move |_| open.toggle(), SelectValue { value: choice() } }
///         if open() {
///             SelectContent { position: ContentPosition::Top,
///                 SelectItem { value: "a".to_string(), onclick: move |v| choice.set(Some(v)), "A" }
///             }
///         }
///     }
/// }
/// ```
#[component]
pub fn SelectContent(
    #[props(default)] position: ContentPosition,
    #[props(default)] class: Option<String>,
    children: Element,
) -> Element {
    let class = content_class(position, class.as_deref());

    rsx! {
        div { class: "{class}", role: "listbox", {children} }
    }
}

/// One choice inside a `SelectContent`
#[component]
pub fn SelectItem(
    /// Value reported to `onclick`
    value: String,
    #[props(default)] onclick: Option<EventHandler<String>>,
    #[props(default = false)] selected: bool,
    #[props(default)] class: Option<String>,
    children: Element,
) -> Element {
    let class = merge_class(ITEM_CLASS, class.as_deref());

    rsx! {
        button {
            r#type: "button",
            class: "{class}",
            role: "option",
            "aria-selected": selected,
            onclick: move |_| {
                if let Some(handler) = onclick {
                    handler.call(value.clone());
                }
            },
            {children}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inline_content_has_no_offset() {
        let class = content_class(ContentPosition::Inline, None);
        assert_eq!(class, "select-content");
        assert!(!ContentPosition::Inline.is_anchored());
    }

    #[test]
    fn top_and_bottom_offsets_are_exclusive() {
        let top = content_class(ContentPosition::Top, None);
        let bottom = content_class(ContentPosition::Bottom, None);

        assert!(top.contains("select-content--above"));
        assert!(!top.contains("select-content--below"));
        assert!(bottom.contains("select-content--below"));
        assert!(!bottom.contains("select-content--above"));

        for class in [&top, &bottom] {
            assert!(class.contains(ANCHORED_CLASS));
        }
    }

    #[test]
    fn content_keeps_caller_override_last() {
        let class = content_class(ContentPosition::Bottom, Some("wide"));
        assert!(class.ends_with(" wide"));
    }

    #[test]
    fn position_default_is_inline() {
        assert_eq!(ContentPosition::default(), ContentPosition::Inline);
    }

    #[test]
    fn value_text_falls_back() {
        assert_eq!(select_value_text(Some("seed"), Some("pick")), "seed");
        assert_eq!(select_value_text(Some(""), Some("pick")), "pick");
        assert_eq!(select_value_text(None, None), "Select");
        assert_eq!(select_value_text(None, Some("")), "Select");
    }
}
