use dioxus::prelude::*;
use roster::UserRecord;

use crate::{Button, ButtonVariant};

/// The user table with row-level edit and delete actions.
#[component]
pub fn UserTable(
    users: Vec<UserRecord>,
    /// Whether the rows come from the search filter rather than the full list.
    #[props(default)]
    search_results: bool,
    on_edit: EventHandler<String>,
    on_delete: EventHandler<String>,
) -> Element {
    rsx! {
        table {
            class: "user-table",
            if search_results {
                caption { "Search results" }
            }
            thead {
                tr {
                    th { "Name" }
                    th { "Email" }
                    th { "Role" }
                    th { class: "actions-col", "" }
                }
            }
            tbody {
                if users.is_empty() {
                    tr {
                        td {
                            class: "empty-row",
                            colspan: 4,
                            if search_results { "No matching users." } else { "No users to show." }
                        }
                    }
                }
                for user in &users {
                    tr {
                        key: "{user.id}",
                        td { "{user.name}" }
                        td { "{user.email}" }
                        td { "{user.role}" }
                        td {
                            class: "row-actions",
                            Button {
                                variant: ButtonVariant::Outline,
                                onclick: {
                                    let id = user.id.clone();
                                    move |_| on_edit.call(id.clone())
                                },
                                "Edit"
                            }
                            Button {
                                variant: ButtonVariant::Danger,
                                onclick: {
                                    let id = user.id.clone();
                                    move |_| on_delete.call(id.clone())
                                },
                                "Delete"
                            }
                        }
                    }
                }
            }
        }
    }
}
