use crate::config::Config;
use crate::graph::{Edge, EdgeDirection};
use crate::layout::{FlowLayout, PlacedNode};
use crate::schema::kinds;
use crate::theme::Theme;
use anyhow::Result;
use std::path::Path;

const EDGE_STROKE_WIDTH: f32 = 1.4;
const ARROW_SIZE: f32 = 7.0;
const BOX_RADIUS: f32 = 6.0;

/// Drawing instructions one edge expands to. Kept as data so hosts that
/// draw on another surface (canvas, DOM) can consume the same expansion the
/// SVG writer does.
#[derive(Debug, Clone, PartialEq)]
pub enum SvgPrimitive {
    Line {
        x1: f32,
        y1: f32,
        x2: f32,
        y2: f32,
        color: String,
        dashed: bool,
    },
    Polygon {
        points: Vec<(f32, f32)>,
        fill: String,
    },
    Label {
        x: f32,
        y: f32,
        text: String,
    },
}

/// Expand one edge into drawing primitives: a line, an arrowhead when the
/// edge is directed and a label when it carries one. Edges with nothing to
/// draw expand to nothing.
pub fn draw_svg_edge(edge: &Edge, theme: &Theme) -> Vec<SvgPrimitive> {
    if edge.length <= 0.0 {
        return Vec::new();
    }
    let color = edge
        .options
        .color
        .clone()
        .unwrap_or_else(|| theme.edge_color.clone());
    let (x2, y2) = edge.end_point();
    let mut primitives = vec![SvgPrimitive::Line {
        x1: edge.x,
        y1: edge.y,
        x2,
        y2,
        color: color.clone(),
        dashed: edge.options.dashed,
    }];

    if edge.options.directed {
        let (dx, dy) = edge.direction.delta();
        let (bx, by) = (x2 - dx * ARROW_SIZE, y2 - dy * ARROW_SIZE);
        let (px, py) = (-dy, dx);
        let half = ARROW_SIZE / 2.0;
        primitives.push(SvgPrimitive::Polygon {
            points: vec![
                (x2, y2),
                (bx + px * half, by + py * half),
                (bx - px * half, by - py * half),
            ],
            fill: color,
        });
    }

    if let Some(label) = edge.options.label.as_deref() {
        let (dx, dy) = edge.direction.delta();
        let offset = edge.options.label_options.unwrap_or_default();
        primitives.push(SvgPrimitive::Label {
            x: edge.x + dx * edge.length / 2.0 + offset.dx,
            y: edge.y + dy * edge.length / 2.0 + offset.dy,
            text: label.to_string(),
        });
    }

    primitives
}

/// Render a flattened layout to an SVG document.
pub fn render_svg(flow: &FlowLayout, config: &Config) -> String {
    let theme = &config.theme;
    let pad = config.render.padding;
    let width = flow.width + pad * 2.0;
    let height = flow.height + pad * 2.0;

    let mut svg = String::new();
    svg.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{width:.0}\" height=\"{height:.0}\" viewBox=\"0 0 {width:.2} {height:.2}\">",
    ));
    svg.push_str(&format!(
        "<rect width=\"100%\" height=\"100%\" fill=\"{}\"/>",
        config.render.background
    ));
    svg.push_str(&format!("<g transform=\"translate({pad:.2} {pad:.2})\">"));

    for edge in &flow.edges {
        for primitive in draw_svg_edge(edge, theme) {
            svg.push_str(&primitive_svg(&primitive, theme));
        }
    }
    for node in &flow.nodes {
        svg.push_str(&node_svg(node, theme, config.layout.max_label_width_chars));
    }

    svg.push_str("</g></svg>");
    svg
}

fn primitive_svg(primitive: &SvgPrimitive, theme: &Theme) -> String {
    match primitive {
        SvgPrimitive::Line {
            x1,
            y1,
            x2,
            y2,
            color,
            dashed,
        } => {
            let dash = if *dashed {
                " stroke-dasharray=\"4 4\""
            } else {
                ""
            };
            format!(
                "<line x1=\"{x1:.2}\" y1=\"{y1:.2}\" x2=\"{x2:.2}\" y2=\"{y2:.2}\" stroke=\"{color}\" stroke-width=\"{EDGE_STROKE_WIDTH}\"{dash}/>",
            )
        }
        SvgPrimitive::Polygon { points, fill } => {
            let points = points
                .iter()
                .map(|(x, y)| format!("{x:.2},{y:.2}"))
                .collect::<Vec<_>>()
                .join(" ");
            format!("<polygon points=\"{points}\" fill=\"{fill}\"/>")
        }
        SvgPrimitive::Label { x, y, text } => format!(
            "<text x=\"{x:.2}\" y=\"{y:.2}\" text-anchor=\"middle\" dominant-baseline=\"middle\" font-family=\"{}\" font-size=\"{}\" fill=\"{}\" paint-order=\"stroke\" stroke=\"{}\" stroke-width=\"3\">{}</text>",
            theme.font_family,
            theme.font_size,
            theme.edge_label_color,
            theme.edge_label_background,
            escape_xml(text)
        ),
    }
}

fn node_svg(node: &PlacedNode, theme: &Theme, max_label_chars: usize) -> String {
    let cx = node.x + node.width / 2.0;
    let cy = node.y + node.height / 2.0;
    let mut svg = String::new();

    match node.kind.as_str() {
        kinds::CHOICE_DIAMOND => {
            let points = format!(
                "{cx:.2},{:.2} {:.2},{cy:.2} {cx:.2},{:.2} {:.2},{cy:.2}",
                node.y,
                node.x + node.width,
                node.y + node.height,
                node.x,
            );
            svg.push_str(&format!(
                "<polygon points=\"{points}\" fill=\"{}\" stroke=\"{}\" stroke-width=\"1.2\"/>",
                fill_for(node, &theme.diamond_fill, theme),
                border_for(node, &theme.diamond_border, theme),
            ));
        }
        kinds::LOOP_INDICATOR | kinds::LOOP_END => {
            svg.push_str(&format!(
                "<circle cx=\"{cx:.2}\" cy=\"{cy:.2}\" r=\"{:.2}\" fill=\"{}\" stroke=\"{}\" stroke-width=\"1.2\"/>",
                node.width / 2.0,
                fill_for(node, &theme.indicator_fill, theme),
                border_for(node, &theme.indicator_border, theme),
            ));
        }
        kinds::TERMINATOR => {
            let r = node.width / 2.0;
            svg.push_str(&format!(
                "<circle cx=\"{cx:.2}\" cy=\"{cy:.2}\" r=\"{r:.2}\" fill=\"none\" stroke=\"{}\" stroke-width=\"1.2\"/>",
                border_for(node, &theme.indicator_border, theme),
            ));
            svg.push_str(&format!(
                "<circle cx=\"{cx:.2}\" cy=\"{cy:.2}\" r=\"{:.2}\" fill=\"{}\"/>",
                r - 3.0,
                border_for(node, &theme.indicator_border, theme),
            ));
        }
        kinds::INVALID_PROMPT_INDICATOR => {
            svg.push_str(&format!(
                "<rect x=\"{:.2}\" y=\"{:.2}\" width=\"{:.2}\" height=\"{:.2}\" rx=\"3\" fill=\"{}\" stroke=\"{}\" stroke-width=\"1.2\"/>",
                node.x,
                node.y,
                node.width,
                node.height,
                fill_for(node, &theme.brick_fill, theme),
                border_for(node, &theme.brick_border, theme),
            ));
        }
        kind => {
            let (fill, border, text) = if kind == kinds::TRIGGER_SUMMARY {
                (&theme.trigger_fill, &theme.trigger_border, &theme.trigger_text)
            } else {
                (&theme.element_fill, &theme.element_border, &theme.element_text)
            };
            svg.push_str(&format!(
                "<rect x=\"{:.2}\" y=\"{:.2}\" width=\"{:.2}\" height=\"{:.2}\" rx=\"{BOX_RADIUS}\" fill=\"{}\" stroke=\"{}\" stroke-width=\"1.2\"/>",
                node.x,
                node.y,
                node.width,
                node.height,
                fill_for(node, fill, theme),
                border_for(node, border, theme),
            ));
            let color = if node.disabled { &theme.disabled_text } else { text };
            svg.push_str(&format!(
                "<text x=\"{cx:.2}\" y=\"{cy:.2}\" text-anchor=\"middle\" dominant-baseline=\"middle\" font-family=\"{}\" font-size=\"{}\" fill=\"{color}\">{}</text>",
                theme.font_family,
                theme.font_size,
                escape_xml(&truncate_label(&node.label, max_label_chars)),
            ));
        }
    }

    svg
}

fn fill_for<'a>(node: &PlacedNode, fill: &'a str, theme: &'a Theme) -> &'a str {
    if node.disabled { &theme.disabled_fill } else { fill }
}

fn border_for<'a>(node: &PlacedNode, border: &'a str, theme: &'a Theme) -> &'a str {
    if node.disabled { &theme.disabled_border } else { border }
}

/// Clip a label to the configured width, ending in an ellipsis. Counts
/// characters, not glyph advances; boundary widths are fixed so the text
/// has to fit the box, not the other way around.
fn truncate_label(label: &str, max_chars: usize) -> String {
    if max_chars == 0 || label.chars().count() <= max_chars {
        return label.to_string();
    }
    let mut clipped: String = label.chars().take(max_chars.saturating_sub(1)).collect();
    clipped.push('…');
    clipped
}

fn escape_xml(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

pub fn write_output_svg(svg: &str, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            std::fs::write(path, svg)?;
        }
        None => {
            print!("{svg}");
        }
    }
    Ok(())
}

#[cfg(feature = "png")]
pub fn write_output_png(svg: &str, output: &Path) -> Result<()> {
    let mut opt = usvg::Options::default();
    opt.font_family = "Segoe UI".to_string();

    let tree = usvg::Tree::from_str(svg, &opt)?;
    let size = tree.size().to_int_size();
    let mut pixmap = resvg::tiny_skia::Pixmap::new(size.width(), size.height())
        .ok_or_else(|| anyhow::anyhow!("failed to allocate a {}x{} pixmap", size.width(), size.height()))?;

    let mut pixmap_mut = pixmap.as_mut();
    resvg::render(&tree, resvg::tiny_skia::Transform::default(), &mut pixmap_mut);
    pixmap.save_png(output)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LayoutConfig;
    use crate::layout::layout_dialog;
    use crate::measure::{BoundaryCache, Measurer};
    use serde_json::json;

    fn arrow_count(primitives: &[SvgPrimitive]) -> usize {
        primitives
            .iter()
            .filter(|p| matches!(p, SvgPrimitive::Polygon { .. }))
            .count()
    }

    fn label_count(primitives: &[SvgPrimitive]) -> usize {
        primitives
            .iter()
            .filter(|p| matches!(p, SvgPrimitive::Label { .. }))
            .count()
    }

    #[test]
    fn zero_length_edges_draw_nothing() {
        let theme = Theme::light();
        let edge = Edge::directed("e", 10.0, 10.0, EdgeDirection::Down, 0.0);
        assert!(draw_svg_edge(&edge, &theme).is_empty());
        let negative = Edge::plain("e", 10.0, 10.0, EdgeDirection::Left, -5.0);
        assert!(draw_svg_edge(&negative, &theme).is_empty());
    }

    #[test]
    fn a_plain_edge_is_a_single_line() {
        let theme = Theme::light();
        let edge = Edge::plain("e", 5.0, 5.0, EdgeDirection::Right, 20.0);
        let primitives = draw_svg_edge(&edge, &theme);
        assert_eq!(primitives.len(), 1);
        assert_eq!(arrow_count(&primitives), 0);
        match &primitives[0] {
            SvgPrimitive::Line { x2, y2, dashed, .. } => {
                assert_eq!((*x2, *y2), (25.0, 5.0));
                assert!(!dashed);
            }
            other => panic!("expected a line, got {other:?}"),
        }
    }

    #[test]
    fn directed_edges_get_exactly_one_arrowhead_at_the_tip() {
        let theme = Theme::light();
        let edge = Edge::directed("e", 0.0, 0.0, EdgeDirection::Down, 30.0);
        let primitives = draw_svg_edge(&edge, &theme);
        assert_eq!(arrow_count(&primitives), 1);
        let tip = primitives
            .iter()
            .find_map(|p| match p {
                SvgPrimitive::Polygon { points, .. } => Some(points[0]),
                _ => None,
            })
            .unwrap();
        assert_eq!(tip, edge.end_point());
    }

    #[test]
    fn labeled_edges_get_exactly_one_label_at_the_offset_midpoint() {
        let theme = Theme::light();
        let edge = Edge::plain("e", 10.0, 0.0, EdgeDirection::Down, 40.0).with_label("True");
        let primitives = draw_svg_edge(&edge, &theme);
        assert_eq!(label_count(&primitives), 1);
        match primitives.last().unwrap() {
            SvgPrimitive::Label { x, y, text } => {
                assert_eq!((*x, *y), (10.0, 20.0));
                assert_eq!(text, "True");
            }
            other => panic!("expected a label, got {other:?}"),
        }
    }

    #[test]
    fn dashed_edges_carry_the_dash_flag_through() {
        let theme = Theme::light();
        let edge = Edge::plain("e", 0.0, 0.0, EdgeDirection::Up, 12.0).dashed();
        match &draw_svg_edge(&edge, &theme)[0] {
            SvgPrimitive::Line { dashed, .. } => assert!(dashed),
            other => panic!("expected a line, got {other:?}"),
        }
    }

    #[test]
    fn edge_color_override_wins_over_the_theme() {
        let theme = Theme::light();
        let mut edge = Edge::plain("e", 0.0, 0.0, EdgeDirection::Down, 10.0);
        edge.options.color = Some("#FF0000".to_string());
        match &draw_svg_edge(&edge, &theme)[0] {
            SvgPrimitive::Line { color, .. } => assert_eq!(color, "#FF0000"),
            other => panic!("expected a line, got {other:?}"),
        }
    }

    fn render_doc(doc: &serde_json::Value) -> String {
        let config = Config::default();
        let layout_config = LayoutConfig::default();
        let mut cache = BoundaryCache::new();
        let mut measurer = Measurer::new(&mut cache, &layout_config);
        let flow = layout_dialog(doc, &mut measurer);
        render_svg(&flow, &config)
    }

    #[test]
    fn rendered_documents_contain_their_shapes_and_labels() {
        let svg = render_doc(&json!({
            "$kind": "Dialog",
            "triggers": [
                {"$kind": "Trigger", "intent": "Greeting", "actions": [
                    {
                        "$kind": "IfCondition",
                        "condition": "user.vip",
                        "actions": [{"$kind": "SendMessage", "activity": "Welcome back"}],
                        "elseActions": [],
                    },
                ]},
            ],
        }));
        assert!(svg.starts_with("<svg"));
        assert!(svg.contains("Greeting"));
        assert!(svg.contains("Welcome back"));
        assert!(svg.contains("user.vip"));
        // diamond and terminator shapes
        assert!(svg.contains("<polygon"));
        assert!(svg.contains("<circle"));
        // branch labels
        assert!(svg.contains(">True</text>"));
        assert!(svg.contains(">False</text>"));
    }

    #[test]
    fn long_labels_are_clipped_with_an_ellipsis() {
        let long = "This activity text is far too long to fit inside one card";
        let svg = render_doc(&json!({
            "$kind": "Dialog",
            "triggers": [
                {"$kind": "Trigger", "actions": [
                    {"$kind": "SendMessage", "activity": long},
                ]},
            ],
        }));
        assert!(!svg.contains(long));
        assert!(svg.contains("…"));
    }

    #[test]
    fn disabled_nodes_use_the_disabled_palette() {
        let svg = render_doc(&json!({
            "$kind": "Dialog",
            "triggers": [
                {"$kind": "Trigger", "actions": [
                    {"$kind": "SendMessage", "activity": "off", "disabled": true},
                ]},
            ],
        }));
        let theme = Theme::light();
        assert!(svg.contains(&theme.disabled_fill));
        assert!(svg.contains(&theme.disabled_text));
    }

    #[test]
    fn labels_are_xml_escaped() {
        let svg = render_doc(&json!({
            "$kind": "Dialog",
            "triggers": [
                {"$kind": "Trigger", "actions": [
                    {"$kind": "SendMessage", "activity": "a < b & c"},
                ]},
            ],
        }));
        assert!(svg.contains("a &lt; b &amp; c"));
        assert!(!svg.contains("a < b & c"));
    }

    #[test]
    fn truncation_counts_characters_not_bytes() {
        assert_eq!(truncate_label("héllo wörld", 20), "héllo wörld");
        assert_eq!(truncate_label("abcdef", 4), "abc…");
        assert_eq!(truncate_label("abcd", 4), "abcd");
    }
}
