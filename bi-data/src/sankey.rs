//! Category → technology flow diagram (Sankey) for the MarTech summary.
//!
//! # Aggregation
//!
//! Rows are counted per category (root → category links) and per
//! (category, technology) pair (category → technology links). By
//! construction the technology values under a category sum to the category
//! value, and the category values sum to the root value.
//!
//! # Layout
//!
//! Nodes sit in three fixed columns (root, category, technology). Categories
//! are walked in order; an expanded category stacks its technologies at a
//! fixed spacing and is centred on their mean Y, a collapsed category takes a
//! single slot. The root is centred on the mean Y of all categories. Only the
//! technologies of expanded categories are laid out, and the diagram height
//! fits exactly what is laid out.
//!
//! ```rust
//! use bi_data::sankey::{SankeyGraph, layout, LayoutConfig, category_id};
//! use std::collections::HashSet;
//!
//! let graph = SankeyGraph::from_pairs(
//!     [("CRM", "Salesforce"), ("CRM", "HubSpot"), ("Analytics", "Tableau")],
//!     "Technologies",
//! );
//! assert_eq!(graph.root().value, 3);
//!
//! let expanded: HashSet<String> = [category_id("CRM")].into_iter().collect();
//! let laid_out = layout(&graph, &expanded, &LayoutConfig::default());
//! // root + 2 categories + the 2 CRM technologies
//! assert_eq!(laid_out.nodes.len(), 5);
//! ```

use bi_model::technographics::TechnographicsRow;
use serde::Serialize;
use std::collections::{BTreeMap, HashMap, HashSet};
use std::fmt::Write as _;

pub const ROOT_ID: &str = "root";

/// Bucket for rows with a blank category or technology.
pub const OTHER: &str = "Other";

pub const MIN_LINK_WIDTH: f64 = 3.0;
pub const MAX_LINK_WIDTH: f64 = 20.0;

/// Category colours, cycled in category order.
pub const PALETTE: [&str; 10] = [
    "#4E79A7", "#F28E2B", "#E15759", "#76B7B2", "#59A14F", "#EDC948", "#B07AA1", "#FF9DA7",
    "#9C755F", "#BAB0AC",
];

const ROOT_COLOR: &str = "#37474F";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum NodeKind {
    Root,
    Category,
    Technology,
}

impl NodeKind {
    /// Column index, 0 = root.
    pub fn column(&self) -> usize {
        match self {
            NodeKind::Root => 0,
            NodeKind::Category => 1,
            NodeKind::Technology => 2,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SankeyNode {
    pub id: String,
    pub label: String,
    pub kind: NodeKind,
    pub value: usize,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SankeyLink {
    pub source: String,
    pub target: String,
    pub value: usize,
}

/// Escape `:` (and `%`) so names cannot run into the id separators.
fn id_part(name: &str) -> String {
    name.replace('%', "%25").replace(':', "%3A")
}

pub fn category_id(category: &str) -> String {
    format!("cat:{}", id_part(category))
}

pub fn technology_id(category: &str, technology: &str) -> String {
    format!("tech:{}:{}", id_part(category), id_part(technology))
}

fn bucket(s: &str) -> &str {
    let s = s.trim();
    if s.is_empty() {
        OTHER
    } else {
        s
    }
}

/// Aggregated nodes and links.
///
/// Node order is: root, then each category followed by its technologies.
/// Categories are ordered by value descending then name; technologies
/// likewise within their category.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SankeyGraph {
    pub nodes: Vec<SankeyNode>,
    pub links: Vec<SankeyLink>,
}

impl SankeyGraph {
    /// Aggregate (category, technology) pairs, one pair per row.
    pub fn from_pairs<'a, I>(pairs: I, root_label: &str) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut categories: BTreeMap<String, (usize, BTreeMap<String, usize>)> = BTreeMap::new();
        let mut total = 0usize;
        for (category, technology) in pairs {
            let entry = categories.entry(bucket(category).to_string()).or_default();
            entry.0 += 1;
            *entry.1.entry(bucket(technology).to_string()).or_default() += 1;
            total += 1;
        }

        let mut ordered: Vec<(String, usize, Vec<(String, usize)>)> = categories
            .into_iter()
            .map(|(name, (count, techs))| {
                let mut techs: Vec<(String, usize)> = techs.into_iter().collect();
                techs.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
                (name, count, techs)
            })
            .collect();
        ordered.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));

        let mut nodes = vec![SankeyNode {
            id: ROOT_ID.to_string(),
            label: root_label.to_string(),
            kind: NodeKind::Root,
            value: total,
            color: ROOT_COLOR.to_string(),
        }];
        let mut links = Vec::new();

        for (i, (category, count, techs)) in ordered.iter().enumerate() {
            let color = PALETTE[i % PALETTE.len()].to_string();
            let cat_id = category_id(category);
            nodes.push(SankeyNode {
                id: cat_id.clone(),
                label: category.clone(),
                kind: NodeKind::Category,
                value: *count,
                color: color.clone(),
            });
            links.push(SankeyLink {
                source: ROOT_ID.to_string(),
                target: cat_id.clone(),
                value: *count,
            });
            for (technology, tech_count) in techs {
                let tech_id = technology_id(category, technology);
                nodes.push(SankeyNode {
                    id: tech_id.clone(),
                    label: technology.clone(),
                    kind: NodeKind::Technology,
                    value: *tech_count,
                    color: color.clone(),
                });
                links.push(SankeyLink {
                    source: cat_id.clone(),
                    target: tech_id,
                    value: *tech_count,
                });
            }
        }

        log::info!(
            "[BI] sankey: {} rows -> {} categories, {} nodes",
            total,
            ordered.len(),
            nodes.len()
        );
        Self { nodes, links }
    }

    pub fn from_rows(rows: &[TechnographicsRow]) -> Self {
        Self::from_pairs(
            rows.iter().map(|r| (r.category.as_str(), r.technology.as_str())),
            "Technologies",
        )
    }

    pub fn root(&self) -> &SankeyNode {
        &self.nodes[0]
    }

    pub fn node(&self, id: &str) -> Option<&SankeyNode> {
        self.nodes.iter().find(|n| n.id == id)
    }

    pub fn categories(&self) -> impl Iterator<Item = &SankeyNode> {
        self.nodes.iter().filter(|n| n.kind == NodeKind::Category)
    }

    /// Technology nodes under a category node id, in order.
    pub fn technologies_of<'a>(&'a self, category_id: &'a str) -> impl Iterator<Item = &'a SankeyNode> + 'a {
        self.links
            .iter()
            .filter(move |l| l.source == category_id)
            .filter_map(move |l| self.node(&l.target))
    }

    pub fn max_link_value(&self) -> usize {
        self.links.iter().map(|l| l.value).max().unwrap_or(0)
    }

    /// Every category id, for "expand all".
    pub fn all_category_ids(&self) -> HashSet<String> {
        self.categories().map(|c| c.id.clone()).collect()
    }
}

impl Default for SankeyGraph {
    fn default() -> Self {
        Self::from_pairs(std::iter::empty(), "Technologies")
    }
}

/// Flip a category between expanded and collapsed.
pub fn toggle_expanded(expanded: &mut HashSet<String>, category_id: &str) {
    if !expanded.remove(category_id) {
        expanded.insert(category_id.to_string());
    }
}

/// Geometry constants for the diagram.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutConfig {
    /// X of the root, category and technology columns.
    pub column_x: [f64; 3],
    /// Width of a node block.
    pub node_width: f64,
    /// Vertical distance between stacked node centres.
    pub node_spacing: f64,
    /// Extra space between category groups.
    pub group_gap: f64,
    /// Top and bottom padding.
    pub padding: f64,
    /// Width of the bar of the largest node in a column.
    pub max_bar_width: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            column_x: [20.0, 300.0, 580.0],
            node_width: 180.0,
            node_spacing: 34.0,
            group_gap: 18.0,
            padding: 24.0,
            max_bar_width: 120.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PositionedNode {
    pub id: String,
    pub label: String,
    pub kind: NodeKind,
    pub value: usize,
    pub color: String,
    /// Left edge.
    pub x: f64,
    /// Vertical centre.
    pub y: f64,
    pub bar_width: f64,
    /// Category nodes only: whether its technologies are shown.
    pub expanded: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PositionedLink {
    pub source: String,
    pub target: String,
    pub value: usize,
    pub x0: f64,
    pub y0: f64,
    pub x1: f64,
    pub y1: f64,
    pub width: f64,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct SankeyLayout {
    pub nodes: Vec<PositionedNode>,
    pub links: Vec<PositionedLink>,
    pub width: f64,
    pub height: f64,
}

impl SankeyLayout {
    pub fn node(&self, id: &str) -> Option<&PositionedNode> {
        self.nodes.iter().find(|n| n.id == id)
    }
}

/// Ribbon thickness: proportional to `value / max`, clamped to 3-20 px.
pub fn link_width(value: usize, max: usize) -> f64 {
    if max == 0 {
        return MIN_LINK_WIDTH;
    }
    (value as f64 / max as f64 * MAX_LINK_WIDTH).clamp(MIN_LINK_WIDTH, MAX_LINK_WIDTH)
}

/// Lay out `graph`, showing technologies only for categories in `expanded`.
pub fn layout(graph: &SankeyGraph, expanded: &HashSet<String>, config: &LayoutConfig) -> SankeyLayout {
    let mut y_of: HashMap<String, f64> = HashMap::new();
    let mut visible: Vec<&SankeyNode> = Vec::new();
    let mut category_ys: Vec<f64> = Vec::new();

    let mut next_y = config.padding + config.node_spacing / 2.0;
    let mut last_y: Option<f64> = None;

    for category in graph.categories() {
        let is_expanded = expanded.contains(&category.id);
        let techs: Vec<&SankeyNode> = if is_expanded {
            graph.technologies_of(&category.id).collect()
        } else {
            Vec::new()
        };

        let cat_y = if techs.is_empty() {
            let y = next_y;
            next_y += config.node_spacing;
            last_y = Some(y);
            y
        } else {
            let mut ys = Vec::with_capacity(techs.len());
            for tech in &techs {
                y_of.insert(tech.id.clone(), next_y);
                ys.push(next_y);
                last_y = Some(next_y);
                next_y += config.node_spacing;
            }
            visible.extend(techs.iter().copied());
            ys.iter().sum::<f64>() / ys.len() as f64
        };
        next_y += config.group_gap;

        y_of.insert(category.id.clone(), cat_y);
        category_ys.push(cat_y);
        visible.push(category);
    }

    let root = graph.root();
    let root_y = if category_ys.is_empty() {
        config.padding + config.node_spacing / 2.0
    } else {
        category_ys.iter().sum::<f64>() / category_ys.len() as f64
    };
    y_of.insert(root.id.clone(), root_y);
    visible.push(root);

    let height = match last_y {
        Some(y) => y + config.node_spacing / 2.0 + config.padding,
        None => config.padding * 2.0 + config.node_spacing,
    };

    // Bars are proportional within each column among visible nodes.
    let mut column_max = [0usize; 3];
    for node in &visible {
        let c = node.kind.column();
        column_max[c] = column_max[c].max(node.value);
    }

    let mut nodes: Vec<PositionedNode> = visible
        .iter()
        .map(|node| {
            let column = node.kind.column();
            let max = column_max[column];
            let bar_width = if max == 0 {
                0.0
            } else {
                (node.value as f64 / max as f64 * config.max_bar_width).max(2.0)
            };
            PositionedNode {
                id: node.id.clone(),
                label: node.label.clone(),
                kind: node.kind,
                value: node.value,
                color: node.color.clone(),
                x: config.column_x[column],
                y: y_of.get(&node.id).copied().unwrap_or(root_y),
                bar_width,
                expanded: node.kind == NodeKind::Category && expanded.contains(&node.id),
            }
        })
        .collect();
    nodes.sort_by(|a, b| {
        a.kind
            .column()
            .cmp(&b.kind.column())
            .then_with(|| a.y.partial_cmp(&b.y).unwrap_or(std::cmp::Ordering::Equal))
    });

    let max_link = graph.max_link_value();
    let links: Vec<PositionedLink> = graph
        .links
        .iter()
        .filter(|l| y_of.contains_key(&l.source) && y_of.contains_key(&l.target))
        .filter_map(|l| {
            let source = graph.node(&l.source)?;
            let target = graph.node(&l.target)?;
            Some(PositionedLink {
                source: l.source.clone(),
                target: l.target.clone(),
                value: l.value,
                x0: config.column_x[source.kind.column()] + config.node_width,
                y0: y_of[&l.source],
                x1: config.column_x[target.kind.column()],
                y1: y_of[&l.target],
                width: link_width(l.value, max_link),
                color: target.color.clone(),
            })
        })
        .collect();

    SankeyLayout {
        nodes,
        links,
        width: config.column_x[2] + config.node_width + config.padding,
        height,
    }
}

/// Closed cubic-Bezier ribbon for a link, `width` thick.
pub fn ribbon_path(link: &PositionedLink) -> String {
    let h = link.width / 2.0;
    let mx = (link.x0 + link.x1) / 2.0;
    format!(
        "M{:.1},{:.1} C{:.1},{:.1} {:.1},{:.1} {:.1},{:.1} L{:.1},{:.1} C{:.1},{:.1} {:.1},{:.1} {:.1},{:.1} Z",
        link.x0, link.y0 - h,
        mx, link.y0 - h,
        mx, link.y1 - h,
        link.x1, link.y1 - h,
        link.x1, link.y1 + h,
        mx, link.y1 + h,
        mx, link.y0 + h,
        link.x0, link.y0 + h,
    )
}

pub const LINK_OPACITY: f64 = 0.45;
pub const LINK_OPACITY_HIGHLIGHT: f64 = 0.85;
pub const LINK_OPACITY_DIMMED: f64 = 0.12;

/// Opacity of a link given the hovered node, if any.
pub fn link_opacity(link: &PositionedLink, hovered: Option<&str>) -> f64 {
    match hovered {
        None => LINK_OPACITY,
        Some(id) if link.source == id || link.target == id => LINK_OPACITY_HIGHLIGHT,
        Some(_) => LINK_OPACITY_DIMMED,
    }
}

fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            c => out.push(c),
        }
    }
    out
}

/// Standalone SVG document of a layout (used by the CLI).
pub fn render_svg(layout: &SankeyLayout, config: &LayoutConfig) -> String {
    let mut svg = String::new();
    let _ = writeln!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w:.0}" height="{h:.0}" viewBox="0 0 {w:.0} {h:.0}" font-family="sans-serif" font-size="12">"#,
        w = layout.width,
        h = layout.height
    );
    for link in &layout.links {
        let _ = writeln!(
            svg,
            r#"  <path d="{}" fill="{}" fill-opacity="{}"/>"#,
            ribbon_path(link),
            link.color,
            LINK_OPACITY
        );
    }
    for node in &layout.nodes {
        let top = node.y - config.node_spacing / 2.0 + 3.0;
        let block_height = config.node_spacing - 6.0;
        let _ = writeln!(
            svg,
            r##"  <rect x="{:.1}" y="{:.1}" width="{:.1}" height="{:.1}" rx="4" fill="#FFFFFF" stroke="{}"/>"##,
            node.x, top, config.node_width, block_height, node.color
        );
        let _ = writeln!(
            svg,
            r#"  <rect x="{:.1}" y="{:.1}" width="{:.1}" height="4" fill="{}"/>"#,
            node.x + 6.0,
            top + block_height - 7.0,
            node.bar_width.min(config.node_width - 12.0),
            node.color
        );
        let _ = writeln!(
            svg,
            r#"  <text x="{:.1}" y="{:.1}">{} ({})</text>"#,
            node.x + 6.0,
            node.y + 2.0,
            escape_xml(&node.label),
            node.value
        );
    }
    svg.push_str("</svg>\n");
    svg
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_graph() -> SankeyGraph {
        SankeyGraph::from_pairs(
            [
                ("CRM", "Salesforce"),
                ("CRM", "HubSpot"),
                ("CRM", "Salesforce"),
                ("Analytics", "Tableau"),
                ("Analytics", "Looker"),
                ("", "Mystery"),
                ("CMS", "WordPress"),
                ("CMS", "WordPress"),
            ],
            "Technologies",
        )
    }

    #[test]
    fn test_sums_are_conserved() {
        let graph = sample_graph();
        let root_total: usize = graph.categories().map(|c| c.value).sum();
        assert_eq!(graph.root().value, root_total);
        assert_eq!(graph.root().value, 8);
        for category in graph.categories() {
            let tech_total: usize = graph.technologies_of(&category.id).map(|t| t.value).sum();
            assert_eq!(tech_total, category.value, "category {}", category.label);
        }
    }

    #[test]
    fn test_ordering_and_ids() {
        let graph = sample_graph();
        let cats: Vec<_> = graph.categories().map(|c| c.label.as_str()).collect();
        assert_eq!(cats, vec!["CRM", "Analytics", "CMS", "Other"]);
        let crm_id = category_id("CRM");
        let crm: Vec<_> = graph
            .technologies_of(&crm_id)
            .map(|t| (t.label.as_str(), t.value))
            .collect();
        assert_eq!(crm, vec![("Salesforce", 2), ("HubSpot", 1)]);
        assert!(graph.node(&technology_id("Other", "Mystery")).is_some());
        // technology ids are unique even when names repeat across categories
        let g = SankeyGraph::from_pairs([("A", "X"), ("B", "X")], "r");
        let ids: HashSet<_> = g.nodes.iter().map(|n| n.id.clone()).collect();
        assert_eq!(ids.len(), g.nodes.len());
    }

    #[test]
    fn test_colon_names_keep_ids_unique() {
        let g = SankeyGraph::from_pairs([("A:B", "C"), ("A", "B:C")], "r");
        let ids: HashSet<_> = g.nodes.iter().map(|n| n.id.clone()).collect();
        assert_eq!(ids.len(), g.nodes.len());
        assert_ne!(technology_id("A:B", "C"), technology_id("A", "B:C"));
        assert_eq!(category_id("100%"), "cat:100%25");

        let config = LayoutConfig::default();
        let out = layout(&g, &g.all_category_ids(), &config);
        let tech_ys: Vec<f64> = out
            .nodes
            .iter()
            .filter(|n| n.kind == NodeKind::Technology)
            .map(|n| n.y)
            .collect();
        assert_eq!(tech_ys.len(), 2);
        assert_ne!(tech_ys[0], tech_ys[1]);
    }

    #[test]
    fn test_technologies_inherit_category_color() {
        let graph = sample_graph();
        let crm = graph.node(&category_id("CRM")).unwrap();
        assert_eq!(crm.color, PALETTE[0]);
        for tech in graph.technologies_of(&crm.id) {
            assert_eq!(tech.color, crm.color);
        }
    }

    #[test]
    fn test_collapsed_layout_has_only_categories() {
        let graph = sample_graph();
        let config = LayoutConfig::default();
        let out = layout(&graph, &HashSet::new(), &config);
        assert_eq!(out.nodes.len(), 5);
        assert_eq!(out.links.len(), 4);
        assert!(out.links.iter().all(|l| l.source == ROOT_ID));
        // four single slots separated by gaps
        let expected_last = config.padding + config.node_spacing / 2.0
            + 3.0 * (config.node_spacing + config.group_gap);
        assert_eq!(out.height, expected_last + config.node_spacing / 2.0 + config.padding);
    }

    #[test]
    fn test_expanded_category_is_centred_on_children() {
        let graph = sample_graph();
        let config = LayoutConfig::default();
        let mut expanded = HashSet::new();
        toggle_expanded(&mut expanded, &category_id("CRM"));
        let out = layout(&graph, &expanded, &config);

        let sf = out.node(&technology_id("CRM", "Salesforce")).unwrap();
        let hs = out.node(&technology_id("CRM", "HubSpot")).unwrap();
        let crm = out.node(&category_id("CRM")).unwrap();
        assert_eq!(hs.y - sf.y, config.node_spacing);
        assert_eq!(crm.y, (sf.y + hs.y) / 2.0);
        assert!(crm.expanded);
        assert_eq!(sf.x, config.column_x[2]);
        assert_eq!(crm.x, config.column_x[1]);

        let root = out.node(ROOT_ID).unwrap();
        let cat_mean = out
            .nodes
            .iter()
            .filter(|n| n.kind == NodeKind::Category)
            .map(|n| n.y)
            .sum::<f64>()
            / 4.0;
        assert_eq!(root.y, cat_mean);
        assert!(out.node(&technology_id("Analytics", "Tableau")).is_none());
    }

    #[test]
    fn test_height_grows_with_expansion() {
        let graph = sample_graph();
        let config = LayoutConfig::default();
        let collapsed = layout(&graph, &HashSet::new(), &config);
        let all = layout(&graph, &graph.all_category_ids(), &config);
        // 6 technology slots replace 4 category slots
        assert_eq!(all.height - collapsed.height, 2.0 * config.node_spacing);
        assert_eq!(all.links.len(), graph.links.len());
    }

    #[test]
    fn test_toggle_twice_collapses() {
        let mut expanded = HashSet::new();
        toggle_expanded(&mut expanded, "cat:CRM");
        assert!(expanded.contains("cat:CRM"));
        toggle_expanded(&mut expanded, "cat:CRM");
        assert!(expanded.is_empty());
    }

    #[test]
    fn test_link_width_is_clamped() {
        assert_eq!(link_width(8, 8), 20.0);
        assert_eq!(link_width(4, 8), 10.0);
        assert_eq!(link_width(1, 100), 3.0);
        assert_eq!(link_width(0, 0), 3.0);
    }

    #[test]
    fn test_hover_highlights_incident_links() {
        let graph = sample_graph();
        let out = layout(&graph, &graph.all_category_ids(), &LayoutConfig::default());
        let crm = category_id("CRM");
        for link in &out.links {
            let incident = link.source == crm || link.target == crm;
            let expected = if incident { LINK_OPACITY_HIGHLIGHT } else { LINK_OPACITY_DIMMED };
            assert_eq!(link_opacity(link, Some(crm.as_str())), expected);
            assert_eq!(link_opacity(link, None), LINK_OPACITY);
        }
    }

    #[test]
    fn test_ribbon_is_closed_path() {
        let link = PositionedLink {
            source: "a".into(),
            target: "b".into(),
            value: 1,
            x0: 0.0,
            y0: 10.0,
            x1: 100.0,
            y1: 50.0,
            width: 4.0,
            color: "#000".into(),
        };
        assert_eq!(
            ribbon_path(&link),
            "M0.0,8.0 C50.0,8.0 50.0,48.0 100.0,48.0 L100.0,52.0 C50.0,52.0 50.0,12.0 0.0,12.0 Z"
        );
    }

    #[test]
    fn test_svg_escapes_labels() {
        let graph = SankeyGraph::from_pairs([("R&D", "<Tool>")], "Root");
        let config = LayoutConfig::default();
        let svg = render_svg(&layout(&graph, &graph.all_category_ids(), &config), &config);
        assert!(svg.starts_with("<svg"));
        assert!(svg.contains("R&amp;D (1)"));
        assert!(svg.contains("&lt;Tool&gt;"));
        assert_eq!(svg.matches("<path").count(), 2);
    }

    #[test]
    fn test_empty_input() {
        let graph = SankeyGraph::from_pairs(std::iter::empty::<(&str, &str)>(), "Root");
        assert_eq!(graph.root().value, 0);
        let out = layout(&graph, &HashSet::new(), &LayoutConfig::default());
        assert_eq!(out.nodes.len(), 1);
        assert!(out.links.is_empty());
    }
}
