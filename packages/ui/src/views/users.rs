use dioxus::prelude::*;
use roster::FormState;

use crate::{make_directory, Button, ButtonVariant, Header, UserForm, UserTable};

const USERS_CSS: Asset = asset!("/src/views/users.css");

/// The single-page user management view.
///
/// Owns the directory controller and the form state, fetches the list once
/// on mount, and wires the search input, the form, and the row actions to
/// the directory. Failures are logged and swallowed; the page never shows an
/// error state.
#[component]
pub fn UsersView() -> Element {
    let mut directory = use_signal(make_directory);
    let mut form = use_signal(FormState::default);
    let mut search_active = use_signal(|| false);

    // Fetch once on mount. Reads go through peek so the resource does not
    // re-run every time the directory signal is replaced.
    let _loader = use_resource(move || async move {
        let mut dir = directory.peek().clone();
        match dir.refresh().await {
            Ok(()) => directory.set(dir),
            Err(e) => tracing::error!("error fetching users: {e}"),
        }
    });

    let handle_search = move |query: String| {
        directory.write().search(&query);
    };

    let handle_submit = move |_| {
        spawn(async move {
            let mut dir = directory.peek().clone();
            let mut state = form.peek().clone();
            match state.submit(&mut dir).await {
                Ok(envelope) => tracing::debug!(status = envelope.status, "form submitted"),
                Err(e) => tracing::error!("error submitting form: {e}"),
            }
            directory.set(dir);
            form.set(state);
        });
    };

    let handle_edit = move |id: String| {
        spawn(async move {
            let dir = directory.peek().clone();
            let mut state = form.peek().clone();
            match state.begin_edit(&dir, &id).await {
                Ok(()) => form.set(state),
                Err(e) => tracing::error!("error fetching user {id}: {e}"),
            }
        });
    };

    let handle_delete = move |id: String| {
        spawn(async move {
            let mut dir = directory.peek().clone();
            match dir.remove(&id).await {
                Ok(envelope) => {
                    tracing::debug!(status = envelope.status, body = ?envelope.data, "delete response");
                }
                Err(e) => tracing::error!("error deleting user {id}: {e}"),
            }
            directory.set(dir);
        });
    };

    let dir = directory();
    let shown = if search_active() {
        dir.filtered().to_vec()
    } else {
        dir.users().to_vec()
    };

    rsx! {
        document::Stylesheet { href: USERS_CSS }

        div {
            class: "users-layout",

            Header {
                on_search: handle_search,
                on_search_focus: move |_| search_active.set(true),
            }

            div {
                class: "users-main",

                div {
                    class: "toolbar",
                    Button {
                        variant: ButtonVariant::Success,
                        onclick: move |_| form.write().toggle(),
                        if form().visible { "Hide Form" } else { "Add User" }
                    }
                }

                if form().visible {
                    UserForm {
                        form,
                        on_submit: handle_submit,
                        on_cancel: move |_| form.write().clear(),
                    }
                }

                UserTable {
                    users: shown,
                    search_results: search_active(),
                    on_edit: handle_edit,
                    on_delete: handle_delete,
                }
            }
        }
    }
}
