//! View header with title and optional subtitle.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ViewHeaderProps {
    /// View title
    pub title: String,
    /// One-line description under the title
    #[props(default = String::new())]
    pub subtitle: String,
    /// Controls rendered on the right (selectors, buttons)
    #[props(default)]
    pub children: Element,
}

#[component]
pub fn ViewHeader(props: ViewHeaderProps) -> Element {
    rsx! {
        div {
            style: "display: flex; justify-content: space-between; align-items: flex-end; margin-bottom: 12px; gap: 12px; flex-wrap: wrap;",
            div {
                h2 {
                    style: "margin: 0 0 4px 0; font-size: 20px;",
                    "{props.title}"
                }
                if !props.subtitle.is_empty() {
                    p {
                        style: "margin: 0; font-size: 12px; color: #666;",
                        "{props.subtitle}"
                    }
                }
            }
            div {
                style: "display: flex; gap: 8px; align-items: center;",
                {props.children}
            }
        }
    }
}
