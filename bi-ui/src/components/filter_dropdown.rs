//! Multi-select filter dropdown with chip summary.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct FilterDropdownProps {
    /// Button label, e.g. "Industry"
    pub label: String,
    /// Every value the user can pick
    pub options: Vec<String>,
    /// Currently selected values
    pub selected: Vec<String>,
    /// Flip one value
    pub on_toggle: EventHandler<String>,
    /// Clear this filter
    pub on_clear: EventHandler<()>,
}

/// Dropdown of checkboxes. The button shows how many values are selected.
#[component]
pub fn FilterDropdown(props: FilterDropdownProps) -> Element {
    let mut open = use_signal(|| false);
    let count = props.selected.len();
    let button_text = if count == 0 {
        props.label.clone()
    } else {
        format!("{} ({})", props.label, count)
    };
    let border = if count == 0 { "#ccc" } else { "#1565C0" };

    rsx! {
        div {
            style: "position: relative; display: inline-block;",
            button {
                style: "padding: 6px 10px; border: 1px solid {border}; border-radius: 4px; background: white; cursor: pointer;",
                onclick: move |_| open.toggle(),
                "{button_text} ▾"
            }
            if open() {
                div {
                    style: "position: absolute; z-index: 10; top: 36px; left: 0; min-width: 220px; max-height: 280px; overflow-y: auto; background: white; border: 1px solid #ddd; border-radius: 4px; box-shadow: 0 2px 8px rgba(0,0,0,0.15); padding: 6px;",
                    if props.options.is_empty() {
                        div { style: "color: #888; padding: 4px;", "No values" }
                    }
                    for option in props.options.iter().cloned() {
                        label {
                            key: "{option}",
                            style: "display: flex; gap: 6px; align-items: center; padding: 3px 4px; cursor: pointer;",
                            input {
                                r#type: "checkbox",
                                checked: props.selected.contains(&option),
                                onchange: {
                                    let option = option.clone();
                                    move |_| props.on_toggle.call(option.clone())
                                },
                            }
                            "{option}"
                        }
                    }
                    if count > 0 {
                        button {
                            style: "margin-top: 6px; width: 100%; padding: 4px; border: none; background: #EEE; cursor: pointer;",
                            onclick: move |_| {
                                props.on_clear.call(());
                                open.set(false);
                            },
                            "Clear"
                        }
                    }
                }
            }
        }
    }
}
