//! Interactive category → technology Sankey diagram.
//!
//! Ribbons are SVG paths underneath; nodes are absolutely positioned blocks
//! with a value bar. Hovering a node highlights its links, clicking a
//! category expands or collapses its technologies.

use bi_data::sankey::{layout, link_opacity, ribbon_path, toggle_expanded, LayoutConfig, NodeKind, SankeyGraph};
use dioxus::prelude::*;
use std::collections::HashSet;

#[derive(Props, Clone, PartialEq)]
pub struct SankeyDiagramProps {
    pub graph: SankeyGraph,
}

#[component]
pub fn SankeyDiagram(props: SankeyDiagramProps) -> Element {
    let mut expanded = use_signal(HashSet::<String>::new);
    let mut hovered = use_signal(|| None::<String>);
    let config = LayoutConfig::default();

    let laid_out = layout(&props.graph, &expanded.read(), &config);
    let hovered_id = hovered();
    let ribbons: Vec<(String, String, String, f64)> = laid_out
        .links
        .iter()
        .map(|link| {
            (
                format!("{}->{}", link.source, link.target),
                ribbon_path(link),
                link.color.clone(),
                link_opacity(link, hovered_id.as_deref()),
            )
        })
        .collect();

    let node_height = config.node_spacing - 6.0;
    let node_width = config.node_width;
    let blocks: Vec<(String, NodeKind, String, String, String, String)> = laid_out
        .nodes
        .iter()
        .map(|node| {
            let block_style = format!(
                "position: absolute; left: {}px; top: {}px; width: {}px; height: {}px; box-sizing: border-box; padding: 3px 6px; background: white; border: 1px solid {c}; border-left: 4px solid {c}; border-radius: 4px; font-size: 12px; overflow: hidden; cursor: pointer;",
                node.x,
                node.y - node_height / 2.0,
                node_width,
                node_height,
                c = node.color
            );
            let bar_style = format!(
                "height: 4px; width: {}px; background: {}; margin-top: 2px;",
                node.bar_width.min(node_width - 16.0),
                node.color
            );
            (
                node.id.clone(),
                node.kind,
                format!("{}: {}", node.label, node.value),
                node_caption(&node.label, node.value, node.kind, node.expanded),
                block_style,
                bar_style,
            )
        })
        .collect();
    let box_style = format!(
        "position: relative; width: {}px; height: {}px; overflow: visible;",
        laid_out.width, laid_out.height
    );
    let (svg_width, svg_height) = (laid_out.width, laid_out.height);
    let all_ids = props.graph.all_category_ids();
    let any_expanded = !expanded.read().is_empty();

    rsx! {
        div {
            div {
                style: "display: flex; gap: 8px; margin-bottom: 8px;",
                button {
                    style: "padding: 4px 10px; cursor: pointer;",
                    onclick: move |_| expanded.set(all_ids.clone()),
                    "Expand all"
                }
                button {
                    style: "padding: 4px 10px; cursor: pointer;",
                    disabled: !any_expanded,
                    onclick: move |_| expanded.write().clear(),
                    "Collapse all"
                }
            }
            div {
                style: "{box_style}",
                svg {
                    style: "position: absolute; top: 0; left: 0;",
                    width: "{svg_width}",
                    height: "{svg_height}",
                    for (key, d, color, opacity) in ribbons {
                        path {
                            key: "{key}",
                            d: "{d}",
                            fill: "{color}",
                            "fill-opacity": "{opacity}",
                        }
                    }
                }
                for (id, kind, title, caption, block_style, bar_style) in blocks {
                    div {
                        key: "{id}",
                        style: "{block_style}",
                        title: "{title}",
                        onmouseenter: {
                            let id = id.clone();
                            move |_| hovered.set(Some(id.clone()))
                        },
                        onmouseleave: move |_| hovered.set(None),
                        onclick: {
                            let id = id.clone();
                            move |_| {
                                if kind == NodeKind::Category {
                                    toggle_expanded(&mut expanded.write(), &id);
                                }
                            }
                        },
                        div {
                            style: "white-space: nowrap; overflow: hidden; text-overflow: ellipsis;",
                            "{caption}"
                        }
                        div { style: "{bar_style}" }
                    }
                }
            }
        }
    }
}

fn node_caption(label: &str, value: usize, kind: NodeKind, expanded: bool) -> String {
    match kind {
        NodeKind::Category if expanded => format!("▾ {} ({})", label, value),
        NodeKind::Category => format!("▸ {} ({})", label, value),
        _ => format!("{} ({})", label, value),
    }
}
