//! SVG pie chart with legend.

use bi_data::industry::PieSlice;
use bi_data::sankey::PALETTE;
use dioxus::prelude::*;
use std::f64::consts::PI;

fn point(cx: f64, cy: f64, r: f64, fraction: f64) -> (f64, f64) {
    // 0 is twelve o'clock, clockwise
    let angle = fraction * 2.0 * PI - PI / 2.0;
    (cx + r * angle.cos(), cy + r * angle.sin())
}

/// SVG path of the wedge between two fractions (0-1) of a full turn.
pub fn slice_path(cx: f64, cy: f64, r: f64, start: f64, end: f64) -> String {
    if end - start >= 0.999_999 {
        // a single arc cannot describe a full circle
        return format!(
            "M{:.2},{:.2} A{r:.2},{r:.2} 0 1 1 {:.2},{:.2} A{r:.2},{r:.2} 0 1 1 {:.2},{:.2} Z",
            cx,
            cy - r,
            cx,
            cy + r,
            cx,
            cy - r,
            r = r
        );
    }
    let (x0, y0) = point(cx, cy, r, start);
    let (x1, y1) = point(cx, cy, r, end);
    let large_arc = if end - start > 0.5 { 1 } else { 0 };
    format!(
        "M{:.2},{:.2} L{:.2},{:.2} A{r:.2},{r:.2} 0 {} 1 {:.2},{:.2} Z",
        cx,
        cy,
        x0,
        y0,
        large_arc,
        x1,
        y1,
        r = r
    )
}

#[derive(Props, Clone, PartialEq)]
pub struct PieChartProps {
    pub title: String,
    pub slices: Vec<PieSlice>,
    #[props(default = 220.0)]
    pub size: f64,
}

#[component]
pub fn PieChart(props: PieChartProps) -> Element {
    let mut hovered = use_signal(|| None::<usize>);
    let size = props.size;
    let r = size / 2.0 - 4.0;
    let c = size / 2.0;
    let total: usize = props.slices.iter().map(|s| s.value).sum();

    let hovered_now = hovered();
    let mut start = 0.0;
    let wedges: Vec<(usize, String, &'static str, &'static str, String)> = props
        .slices
        .iter()
        .enumerate()
        .map(|(i, slice)| {
            let fraction = if total == 0 { 0.0 } else { slice.value as f64 / total as f64 };
            let path = slice_path(c, c, r, start, start + fraction);
            start += fraction;
            let opacity = match hovered_now {
                Some(h) if h != i => "0.6",
                _ => "1",
            };
            let legend = format!("{}: {} ({:.1}%)", slice.label, slice.value, slice.percent);
            (i, path, PALETTE[i % PALETTE.len()], opacity, legend)
        })
        .collect();

    let caption = match hovered_now.and_then(|i| props.slices.get(i)) {
        Some(s) => format!("{}: {} ({:.1}%)", s.label, s.value, s.percent),
        None => format!("{} companies", total),
    };

    rsx! {
        div {
            style: "display: flex; gap: 16px; align-items: center;",
            div {
                h4 { style: "margin: 0 0 6px 0;", "{props.title}" }
                svg {
                    width: "{size}",
                    height: "{size}",
                    "viewBox": "0 0 {size} {size}",
                    for (i, d, color, opacity, _legend) in wedges.iter().cloned() {
                        path {
                            key: "{i}",
                            d: "{d}",
                            fill: "{color}",
                            stroke: "white",
                            "stroke-width": "1",
                            opacity: "{opacity}",
                            onmouseenter: move |_| hovered.set(Some(i)),
                            onmouseleave: move |_| hovered.set(None),
                        }
                    }
                }
                div { style: "font-size: 12px; color: #555; text-align: center;", "{caption}" }
            }
            ul {
                style: "list-style: none; padding: 0; margin: 0; font-size: 12px;",
                for (i, _d, color, _opacity, legend) in wedges.into_iter() {
                    li {
                        key: "{i}",
                        style: "display: flex; gap: 6px; align-items: center; margin: 2px 0;",
                        span { style: "display: inline-block; width: 10px; height: 10px; background: {color};" }
                        "{legend}"
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quarter_wedge() {
        assert_eq!(
            slice_path(100.0, 100.0, 50.0, 0.0, 0.25),
            "M100.00,100.00 L100.00,50.00 A50.00,50.00 0 0 1 150.00,100.00 Z"
        );
    }

    #[test]
    fn test_large_arc_flag_past_half() {
        assert!(slice_path(0.0, 0.0, 10.0, 0.0, 0.75).contains(" 0 1 1 "));
    }

    #[test]
    fn test_full_circle_uses_two_arcs() {
        let d = slice_path(50.0, 50.0, 40.0, 0.0, 1.0);
        assert_eq!(d.matches('A').count(), 2);
    }
}
