//! Registration form view - pure rendering
//!
//! Receives the draft and last validation errors as props and reports every
//! edit through callbacks; the page owns the session.

use crate::components::checkbox::Checkbox;
use crate::components::text_input::TextInput;
use dioxus::prelude::*;
use roster_common::{Field, Gender, Hobby, StudentDraft, ValidationErrors};

#[component]
pub fn RegistrationForm(
    draft: StudentDraft,
    errors: ValidationErrors,
    submit_label: &'static str,
    editing: bool,
    on_field_input: EventHandler<(Field, String)>,
    on_hobby_toggle: EventHandler<(Hobby, bool)>,
    on_submit: EventHandler<()>,
    on_cancel: EventHandler<()>,
) -> Element {
    let field_error = |field: Field| errors.get(field).map(str::to_string);

    rsx! {
        div { class: "card form-card",
            h2 { class: "card-title", "Student Registration" }
            form {
                class: "form",
                onsubmit: move |evt: FormEvent| {
                    evt.prevent_default();
                    on_submit.call(());
                },
                div { class: "form-row",
                    FormTextField {
                        field: Field::FirstName,
                        value: draft.first_name.clone(),
                        placeholder: "First Name",
                        error: field_error(Field::FirstName),
                        on_input: on_field_input,
                    }
                    FormTextField {
                        field: Field::LastName,
                        value: draft.last_name.clone(),
                        placeholder: "Last Name",
                        error: field_error(Field::LastName),
                        on_input: on_field_input,
                    }
                }
                FormTextField {
                    field: Field::Email,
                    value: draft.email.clone(),
                    placeholder: "example@domain.com",
                    input_type: "email",
                    error: field_error(Field::Email),
                    on_input: on_field_input,
                }
                FormTextField {
                    field: Field::Phone,
                    value: draft.phone.clone(),
                    placeholder: "784-755-8800",
                    input_type: "tel",
                    error: field_error(Field::Phone),
                    on_input: on_field_input,
                }
                FormTextField {
                    field: Field::City,
                    value: draft.city.clone(),
                    placeholder: "Your City",
                    error: field_error(Field::City),
                    on_input: on_field_input,
                }
                fieldset { class: "choice-group",
                    legend { "Gender" }
                    for gender in Gender::ALL {
                        label { key: "{gender}", class: "choice",
                            input {
                                r#type: "radio",
                                name: "gender",
                                value: gender.as_str(),
                                checked: draft.gender == Some(gender),
                                onchange: move |_| {
                                    on_field_input.call((Field::Gender, gender.as_str().to_string()))
                                },
                            }
                            span { "{gender.label()}" }
                        }
                    }
                    if let Some(message) = field_error(Field::Gender) {
                        p { class: "field-error", "{message}" }
                    }
                }
                fieldset { class: "choice-group",
                    legend { "Hobbies" }
                    for hobby in Hobby::ALL {
                        Checkbox {
                            key: "{hobby}",
                            checked: draft.has_hobby(hobby),
                            value: hobby.as_str(),
                            label: hobby.label(),
                            onchange: move |checked| on_hobby_toggle.call((hobby, checked)),
                        }
                    }
                }
                div { class: "form-actions",
                    button { r#type: "submit", class: "button button-primary", "{submit_label}" }
                    if editing {
                        button {
                            r#type: "button",
                            class: "button button-secondary",
                            onclick: move |_| on_cancel.call(()),
                            "Cancel"
                        }
                    }
                }
            }
        }
    }
}

/// Text input with its inline validation message
#[component]
fn FormTextField(
    field: Field,
    value: String,
    placeholder: &'static str,
    #[props(default = "text")] input_type: &'static str,
    error: Option<String>,
    on_input: EventHandler<(Field, String)>,
) -> Element {
    rsx! {
        div { class: "form-field",
            TextInput {
                value,
                name: field.name(),
                placeholder,
                input_type,
                invalid: error.is_some(),
                on_input: move |value| on_input.call((field, value)),
            }
            if let Some(message) = error {
                p { class: "field-error", "{message}" }
            }
        }
    }
}
