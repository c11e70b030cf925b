use dioxus::prelude::*;

/// Page header: app title plus the search input.
///
/// Typing re-runs the filter; focusing the input switches the table into
/// search mode.
#[component]
pub fn Header(on_search: EventHandler<String>, on_search_focus: EventHandler<()>) -> Element {
    rsx! {
        header {
            class: "app-header",
            h1 { class: "app-title", "Roster" }
            input {
                class: "search-input",
                r#type: "search",
                placeholder: "Search users...",
                oninput: move |evt| on_search.call(evt.value()),
                onfocus: move |_| on_search_focus.call(()),
            }
        }
    }
}
