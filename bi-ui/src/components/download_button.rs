//! CSV download button.

use dioxus::prelude::*;

#[component]
pub fn DownloadButton(
    on_click: EventHandler<()>,
    #[props(default = "Download CSV".to_string())] label: String,
    #[props(default = false)] disabled: bool,
) -> Element {
    rsx! {
        button {
            style: "padding: 6px 12px; background: #1565C0; color: white; border: none; border-radius: 4px; cursor: pointer;",
            disabled,
            onclick: move |_| on_click.call(()),
            "⬇ {label}"
        }
    }
}
