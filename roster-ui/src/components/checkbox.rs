//! Checkbox component

use dioxus::prelude::*;

/// A labelled checkbox
#[component]
pub fn Checkbox(
    checked: bool,
    onchange: EventHandler<bool>,
    label: &'static str,
    #[props(default)] value: Option<&'static str>,
) -> Element {
    rsx! {
        label { class: "choice",
            input {
                r#type: "checkbox",
                value,
                checked,
                onchange: move |e| onchange.call(e.checked()),
            }
            span { "{label}" }
        }
    }
}
