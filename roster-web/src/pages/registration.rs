use dioxus::prelude::*;
use roster_common::{FormMode, RegistrationSession, RosterConfig};
use roster_ui::{BrowserStorage, RegistrationForm, StudentRow, StudentTable};
use tracing::debug;

#[component]
pub fn Registration() -> Element {
    let config: RosterConfig = use_context();
    let mut session = use_signal(move || RegistrationSession::load(BrowserStorage, &config));

    let read = session.read();
    let form = read.form();
    let draft = form.draft().clone();
    let errors = form.errors().clone();
    let submit_label = form.submit_label();
    let editing = matches!(form.mode(), FormMode::Edit(_));
    let query = read.query().to_string();
    let sort = read.sort_spec();
    let has_students = !read.roster().is_empty();
    let rows: Vec<StudentRow> = read
        .visible_rows()
        .into_iter()
        .map(StudentRow::from)
        .collect();
    drop(read);

    rsx! {
        div { class: "page",
            RegistrationForm {
                draft,
                errors,
                submit_label,
                editing,
                on_field_input: move |(field, value): (_, String)| {
                    session.write().set_field(field, &value);
                },
                on_hobby_toggle: move |(hobby, included)| {
                    session.write().toggle_hobby(hobby, included);
                },
                on_submit: move |_| {
                    if let Err(errors) = session.write().submit() {
                        debug!("Registration blocked: {errors}");
                    }
                },
                on_cancel: move |_| session.write().cancel_edit(),
            }
            if has_students {
                StudentTable {
                    rows,
                    query,
                    sort,
                    on_query_change: move |query: String| session.write().set_query(query),
                    on_sort: move |key| session.write().toggle_sort(key),
                    on_edit: move |id| {
                        session.write().request_edit(id);
                    },
                    on_delete: move |id| {
                        session.write().delete(id);
                    },
                }
            }
        }
    }
}
