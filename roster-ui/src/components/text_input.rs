//! Reusable text input component

use dioxus::prelude::*;

/// Text input with the form's styling
#[component]
pub fn TextInput(
    value: String,
    on_input: EventHandler<String>,
    #[props(default)] placeholder: Option<&'static str>,
    #[props(default = "text")] input_type: &'static str,
    #[props(default)] name: Option<&'static str>,
    #[props(default)] invalid: bool,
) -> Element {
    let class = if invalid {
        "text-input text-input-invalid"
    } else {
        "text-input"
    };

    rsx! {
        input {
            r#type: input_type,
            class,
            name,
            value: "{value}",
            placeholder,
            oninput: move |e| on_input.call(e.value()),
        }
    }
}
