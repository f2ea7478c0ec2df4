//! `sankey`: the technographics category tree, as text and optionally SVG.

use anyhow::bail;
use bi_data::sankey::{layout, render_svg, LayoutConfig, SankeyGraph};
use bi_model::client::ApiClient;
use log::info;
use std::collections::HashSet;

/// Resolve category names (case-insensitive) to node ids.
pub fn resolve_categories(graph: &SankeyGraph, names: &[String]) -> anyhow::Result<HashSet<String>> {
    let mut ids = HashSet::new();
    for name in names {
        match graph
            .categories()
            .find(|c| c.label.eq_ignore_ascii_case(name.trim()))
        {
            Some(node) => {
                ids.insert(node.id.clone());
            }
            None => bail!("no category named {:?}", name),
        }
    }
    Ok(ids)
}

/// Root, categories and (for expanded categories) technologies, indented.
pub fn render_tree(graph: &SankeyGraph, expanded: &HashSet<String>) -> String {
    let root = graph.root();
    let mut out = format!("{} ({})\n", root.label, root.value);
    for category in graph.categories() {
        let marker = if expanded.contains(&category.id) { "-" } else { "+" };
        out.push_str(&format!("  {} {} ({})\n", marker, category.label, category.value));
        if expanded.contains(&category.id) {
            for technology in graph.technologies_of(&category.id) {
                out.push_str(&format!("      {} ({})\n", technology.label, technology.value));
            }
        }
    }
    out
}

pub async fn run_sankey(
    client: &ApiClient,
    expand: &[String],
    expand_all: bool,
    svg: Option<&str>,
) -> anyhow::Result<()> {
    let rows = client.technographics().await?;
    let graph = SankeyGraph::from_rows(&rows);
    let expanded = if expand_all {
        graph.all_category_ids()
    } else {
        resolve_categories(&graph, expand)?
    };
    info!(
        "[BI] sankey: {} rows, {} nodes, {} expanded",
        rows.len(),
        graph.nodes.len(),
        expanded.len()
    );

    print!("{}", render_tree(&graph, &expanded));

    if let Some(path) = svg {
        let config = LayoutConfig::default();
        let laid_out = layout(&graph, &expanded, &config);
        std::fs::write(path, render_svg(&laid_out, &config))?;
        println!("Wrote diagram to {}", path);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_graph() -> SankeyGraph {
        SankeyGraph::from_pairs(
            vec![
                ("CRM", "Salesforce"),
                ("CRM", "HubSpot"),
                ("CRM", "Salesforce"),
                ("Analytics", "Google Analytics"),
            ],
            "Technologies",
        )
    }

    #[test]
    fn test_collapsed_tree() {
        let tree = render_tree(&sample_graph(), &HashSet::new());
        assert_eq!(tree, "Technologies (4)\n  + CRM (3)\n  + Analytics (1)\n");
    }

    #[test]
    fn test_expanded_tree() {
        let graph = sample_graph();
        let expanded = resolve_categories(&graph, &["crm".to_string()]).unwrap();
        let tree = render_tree(&graph, &expanded);
        assert!(tree.contains("  - CRM (3)\n      Salesforce (2)\n      HubSpot (1)\n"));
        assert!(tree.contains("  + Analytics (1)"));
    }

    #[test]
    fn test_unknown_category() {
        assert!(resolve_categories(&sample_graph(), &["Security".to_string()]).is_err());
    }
}
