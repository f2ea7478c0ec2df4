//! Free-text search input.

use dioxus::prelude::*;

#[component]
pub fn SearchBox(
    value: String,
    on_change: EventHandler<String>,
    #[props(default = "Search...".to_string())] placeholder: String,
) -> Element {
    rsx! {
        input {
            r#type: "search",
            style: "padding: 6px 10px; min-width: 220px; border: 1px solid #ccc; border-radius: 4px;",
            placeholder: "{placeholder}",
            value: "{value}",
            oninput: move |evt: Event<FormData>| on_change.call(evt.value()),
        }
    }
}
