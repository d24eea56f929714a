//! Registered students table - pure rendering
//!
//! Rows arrive already filtered and sorted. Header clicks, search input and
//! row actions are reported by record id so the page can apply them to the
//! session regardless of display order.

use crate::components::text_input::TextInput;
use crate::display_types::StudentRow;
use dioxus::prelude::*;
use roster_common::{RecordId, SortDirection, SortKey, SortSpec};

#[component]
pub fn StudentTable(
    rows: Vec<StudentRow>,
    query: String,
    sort: SortSpec,
    on_query_change: EventHandler<String>,
    on_sort: EventHandler<SortKey>,
    on_edit: EventHandler<RecordId>,
    on_delete: EventHandler<RecordId>,
) -> Element {
    rsx! {
        div { class: "card table-card",
            h2 { class: "card-title", "Registered Students" }
            div { class: "search",
                TextInput {
                    value: query,
                    placeholder: "Search students...",
                    on_input: on_query_change,
                }
            }
            div { class: "table-scroll",
                table { class: "student-table",
                    thead {
                        tr {
                            for column in SortKey::ALL {
                                SortableHeader {
                                    key: "{column.label()}",
                                    column,
                                    direction: sort.direction_for(column),
                                    on_sort,
                                }
                            }
                            th { "Hobbies" }
                            th { "Actions" }
                        }
                    }
                    tbody {
                        if rows.is_empty() {
                            tr {
                                td { class: "empty-row", colspan: "7", "No students match your search." }
                            }
                        } else {
                            for row in rows.iter() {
                                StudentTableRow {
                                    key: "{row.id}",
                                    row: row.clone(),
                                    on_edit,
                                    on_delete,
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn SortableHeader(
    column: SortKey,
    direction: Option<SortDirection>,
    on_sort: EventHandler<SortKey>,
) -> Element {
    let indicator = match direction {
        Some(SortDirection::Ascending) => "▲",
        Some(SortDirection::Descending) => "▼",
        None => "↕",
    };

    rsx! {
        th { class: "sortable", onclick: move |_| on_sort.call(column),
            span { "{column.label()}" }
            span { class: "sort-indicator", "{indicator}" }
        }
    }
}

#[component]
fn StudentTableRow(
    row: StudentRow,
    on_edit: EventHandler<RecordId>,
    on_delete: EventHandler<RecordId>,
) -> Element {
    let id = row.id;

    rsx! {
        tr {
            td { "{row.name}" }
            td { "{row.email}" }
            td { "{row.phone}" }
            td { "{row.city}" }
            td { "{row.gender}" }
            td { "{row.hobbies}" }
            td { class: "row-actions",
                button {
                    class: "button button-small",
                    title: "Edit",
                    onclick: move |_| on_edit.call(id),
                    "Edit"
                }
                button {
                    class: "button button-small button-danger",
                    title: "Delete",
                    onclick: move |_| on_delete.call(id),
                    "Delete"
                }
            }
        }
    }
}
