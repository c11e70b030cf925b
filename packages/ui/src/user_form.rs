use dioxus::prelude::*;
use roster::FormState;

use crate::{Button, ButtonVariant};

/// Inline form for creating or editing a user.
///
/// The draft lives in the parent's `FormState` signal so the view controller
/// can clear it after submit or cancel; the inputs write straight into it.
#[component]
pub fn UserForm(
    mut form: Signal<FormState>,
    on_submit: EventHandler<()>,
    on_cancel: EventHandler<()>,
) -> Element {
    let editing = form().is_editing();

    rsx! {
        div {
            class: "user-form",
            h2 { if editing { "Edit User" } else { "New User" } }

            div {
                class: "form-field",
                label { r#for: "user-name", "Name" }
                input {
                    id: "user-name",
                    r#type: "text",
                    placeholder: "Ann Example",
                    value: form().draft.name,
                    oninput: move |evt: FormEvent| form.write().draft.name = evt.value(),
                }
            }

            div {
                class: "form-field",
                label { r#for: "user-email", "Email" }
                input {
                    id: "user-email",
                    r#type: "email",
                    placeholder: "ann@example.com",
                    value: form().draft.email,
                    oninput: move |evt: FormEvent| form.write().draft.email = evt.value(),
                }
            }

            div {
                class: "form-field",
                label { r#for: "user-role", "Role" }
                input {
                    id: "user-role",
                    r#type: "text",
                    placeholder: "admin",
                    value: form().draft.role,
                    oninput: move |evt: FormEvent| form.write().draft.role = evt.value(),
                }
            }

            div {
                class: "form-actions",
                Button {
                    variant: ButtonVariant::Primary,
                    onclick: move |_| on_submit.call(()),
                    if editing { "Update" } else { "Create" }
                }
                Button {
                    variant: ButtonVariant::Outline,
                    onclick: move |_| on_cancel.call(()),
                    "Cancel"
                }
            }
        }
    }
}
