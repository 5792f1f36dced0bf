#![forbid(unsafe_code)]

//! Styled SVG renderer for laid-out mind-map graphs.
//!
//! Drawing happens in the pass order the mind-map expects: one marker pass
//! per node kind (central, subtopic, detail), then edges, then a label for
//! every node. The result is a self-contained SVG string; rasterization is a
//! separate collaborator.

pub mod color;
mod shapes;
mod svg;

use std::fmt::Write as _;

use ideamap_core::{MindmapGraph, Node, NodeKind, NodeShape, StyleConfig};
use ideamap_layout::{LayoutResult, Point};
use unicode_width::UnicodeWidthStr;

use crate::color::{Rgba, parse_color};
use crate::shapes::{circle_radius, marker_svg};
use crate::svg::{escape_text, fmt_number};

pub const VIEWPORT_WIDTH: f64 = 1200.0;
pub const VIEWPORT_HEIGHT: f64 = 800.0;

const MARGIN: f64 = 40.0;
const TITLE_BAND: f64 = 60.0;
const TITLE_FONT_SIZE: f64 = 20.0;
/// Deterministic display-width model: average glyph advance as a fraction of
/// the font size, over the unicode display width of the label.
const CHAR_WIDTH_FACTOR: f64 = 0.6;

pub type Result<T> = std::result::Result<T, RenderError>;

#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("invalid color value: {value:?}")]
    InvalidColor { value: String },

    #[error("layout does not cover the graph: {positions} positions for {nodes} nodes")]
    PositionCountMismatch { positions: usize, nodes: usize },

    #[error("layout produced a non-finite position for node {index}")]
    NonFinitePosition { index: usize },
}

/// Renders a laid-out graph into a 1200x800 SVG document.
pub fn render_svg(
    graph: &MindmapGraph,
    layout: &LayoutResult,
    style: &StyleConfig,
) -> Result<String> {
    if layout.len() != graph.node_count() {
        return Err(RenderError::PositionCountMismatch {
            positions: layout.len(),
            nodes: graph.node_count(),
        });
    }
    for (index, p) in layout.positions().iter().enumerate() {
        if !(p.x.is_finite() && p.y.is_finite()) {
            return Err(RenderError::NonFinitePosition { index });
        }
    }

    let style = style.clone().clamped();
    let central_color = resolve_color(&style.central_color)?;
    let subtopic_color = resolve_color(&style.subtopic_color)?;
    let detail_color = resolve_color(&style.detail_color)?;

    let viewport = Viewport::fit(graph, layout, &style);

    let mut out = String::with_capacity(1024 + graph.node_count() * 160);
    let _ = write!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
        w = fmt_number(VIEWPORT_WIDTH),
        h = fmt_number(VIEWPORT_HEIGHT),
    );
    let _ = write!(
        out,
        r#"<rect width="{w}" height="{h}" fill="white"/>"#,
        w = fmt_number(VIEWPORT_WIDTH),
        h = fmt_number(VIEWPORT_HEIGHT),
    );
    let _ = write!(
        out,
        r#"<text x="{x}" y="{y}" text-anchor="middle" font-family="sans-serif" font-size="{size}">{title}</text>"#,
        x = fmt_number(VIEWPORT_WIDTH / 2.0),
        y = fmt_number(TITLE_BAND / 2.0 + TITLE_FONT_SIZE / 2.0),
        size = fmt_number(TITLE_FONT_SIZE),
        title = escape_text(&format!("Mind Map: {}", graph.node(graph.root()).label)),
    );

    // One marker pass per kind. Detail nodes have a fixed circular shape;
    // the size multipliers scale marker area, matching the original
    // convention where `node_size` is an area.
    let passes: [(NodeKind, NodeShape, Rgba, f64); 3] = [
        (NodeKind::Central, style.central_shape, central_color, 1.0),
        (NodeKind::Subtopic, style.subtopic_shape, subtopic_color, 0.8),
        (NodeKind::Detail, NodeShape::Circle, detail_color, 0.6),
    ];
    for (kind, shape, fill_color, size_factor) in passes {
        out.push_str(&format!(r#"<g class="{}-nodes">"#, kind_class(kind)));
        let fill = fill_attr(fill_color);
        for node in graph.nodes_of_kind(kind) {
            let (cx, cy) = viewport.map(layout.get(node.id));
            out.push_str(&marker_svg(
                shape,
                cx,
                cy,
                style.node_size * size_factor,
                &fill,
            ));
        }
        out.push_str("</g>");
    }

    // Edge pass: straight black lines, configurable width.
    let _ = write!(
        out,
        r#"<g class="edges" stroke="black" stroke-width="{}">"#,
        fmt_number(style.edge_width),
    );
    for edge in graph.edges() {
        let (x1, y1) = viewport.map(layout.get(edge.parent));
        let (x2, y2) = viewport.map(layout.get(edge.child));
        let _ = write!(
            out,
            r#"<line x1="{}" y1="{}" x2="{}" y2="{}"/>"#,
            fmt_number(x1),
            fmt_number(y1),
            fmt_number(x2),
            fmt_number(y2),
        );
    }
    out.push_str("</g>");

    // Label pass: every node regardless of kind.
    let _ = write!(
        out,
        r#"<g class="labels" font-family="sans-serif" font-size="{}" text-anchor="middle">"#,
        fmt_number(style.font_size),
    );
    for node in graph.nodes() {
        let (x, y) = viewport.map(layout.get(node.id));
        let _ = write!(
            out,
            r#"<text x="{}" y="{}">{}</text>"#,
            fmt_number(x),
            // Shift the anchor so the text is vertically centered on the node.
            fmt_number(y + style.font_size * 0.35),
            escape_text(&node.label),
        );
    }
    out.push_str("</g>");

    out.push_str("</svg>");
    Ok(out)
}

fn resolve_color(value: &str) -> Result<Rgba> {
    parse_color(value).ok_or_else(|| RenderError::InvalidColor {
        value: value.to_string(),
    })
}

fn fill_attr(color: Rgba) -> String {
    if color.is_opaque() {
        format!(r#" fill="{}""#, color.hex_rgb())
    } else {
        format!(
            r#" fill="{}" fill-opacity="{}""#,
            color.hex_rgb(),
            fmt_number(color.opacity()),
        )
    }
}

fn kind_class(kind: NodeKind) -> &'static str {
    match kind {
        NodeKind::Central => "central",
        NodeKind::Subtopic => "subtopic",
        NodeKind::Detail => "detail",
    }
}

pub fn estimate_label_width(label: &str, font_size: f64) -> f64 {
    label.width() as f64 * font_size * CHAR_WIDTH_FACTOR
}

/// Uniform mapping from layout space into the viewport's content rectangle.
///
/// Layout coordinates are unit-scale and algorithm-dependent; the content is
/// centered and scaled to fit inside the viewport minus the title band, a
/// margin, and an inset large enough that markers and labels stay inside.
#[derive(Debug, Clone, Copy)]
struct Viewport {
    scale: f64,
    content_mid_x: f64,
    content_mid_y: f64,
    viewport_mid_x: f64,
    viewport_mid_y: f64,
}

impl Viewport {
    fn fit(graph: &MindmapGraph, layout: &LayoutResult, style: &StyleConfig) -> Self {
        let mut min_x = f64::INFINITY;
        let mut min_y = f64::INFINITY;
        let mut max_x = f64::NEG_INFINITY;
        let mut max_y = f64::NEG_INFINITY;
        for p in layout.positions() {
            min_x = min_x.min(p.x);
            min_y = min_y.min(p.y);
            max_x = max_x.max(p.x);
            max_y = max_y.max(p.y);
        }
        if !(min_x.is_finite() && min_y.is_finite()) {
            // Empty layout; mapping is unused but must stay well-defined.
            (min_x, min_y, max_x, max_y) = (0.0, 0.0, 0.0, 0.0);
        }

        let marker_radius = circle_radius(style.node_size);
        let max_half_label = graph
            .nodes()
            .iter()
            .map(|n: &Node| estimate_label_width(&n.label, style.font_size) / 2.0)
            .fold(0.0f64, f64::max);
        let inset_x = marker_radius.max(max_half_label) + 8.0;
        let inset_y = marker_radius.max(style.font_size) + 8.0;

        let avail_w = (VIEWPORT_WIDTH - 2.0 * (MARGIN + inset_x)).max(1.0);
        let avail_h = (VIEWPORT_HEIGHT - TITLE_BAND - 2.0 * (MARGIN + inset_y)).max(1.0);

        let span_x = max_x - min_x;
        let span_y = max_y - min_y;
        let scale_x = if span_x > 1e-9 { avail_w / span_x } else { f64::INFINITY };
        let scale_y = if span_y > 1e-9 { avail_h / span_y } else { f64::INFINITY };
        let scale = match scale_x.min(scale_y) {
            // Degenerate extent (single node or fully coincident content):
            // everything collapses onto the viewport center.
            s if !s.is_finite() => 0.0,
            s => s,
        };

        Self {
            scale,
            content_mid_x: (min_x + max_x) / 2.0,
            content_mid_y: (min_y + max_y) / 2.0,
            viewport_mid_x: VIEWPORT_WIDTH / 2.0,
            viewport_mid_y: TITLE_BAND + (VIEWPORT_HEIGHT - TITLE_BAND) / 2.0,
        }
    }

    fn map(&self, p: Point) -> (f64, f64) {
        (
            self.viewport_mid_x + (p.x - self.content_mid_x) * self.scale,
            self.viewport_mid_y + (p.y - self.content_mid_y) * self.scale,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ideamap_core::{LayoutStyle, MapRequest};
    use ideamap_layout::{LayoutOptions, layout};

    fn rendered(style: StyleConfig) -> String {
        let request = MapRequest::new("Project X")
            .with_subtopic("Design", ["UI", "API"])
            .with_subtopic("Testing", ["Unit", "Integration"])
            .with_style(style);
        let graph = MindmapGraph::build(&request).unwrap();
        let positions = layout(&graph, request.style.layout, &LayoutOptions::default());
        render_svg(&graph, &positions, &request.style).unwrap()
    }

    #[test]
    fn all_passes_are_present() {
        let svg = rendered(StyleConfig::default());
        assert!(svg.contains(r#"class="central-nodes""#));
        assert!(svg.contains(r#"class="subtopic-nodes""#));
        assert!(svg.contains(r#"class="detail-nodes""#));
        assert!(svg.contains(r#"class="edges""#));
        assert!(svg.contains(r#"class="labels""#));
        assert!(svg.contains("Mind Map: Project X"));
        assert_eq!(svg.matches("<line ").count(), 6);
        assert_eq!(svg.matches("<text ").count(), 8); // 7 labels + title
    }

    #[test]
    fn configured_shapes_and_colors_show_up() {
        let svg = rendered(StyleConfig {
            central_shape: ideamap_core::NodeShape::Diamond,
            subtopic_shape: ideamap_core::NodeShape::Square,
            ..StyleConfig::default()
        });
        assert!(svg.contains(r##"fill="#ff5733""##));
        assert!(svg.contains(r##"fill="#33c3ff""##));
        assert!(svg.contains(r##"fill="#66ff66""##));
        assert!(svg.contains("<polygon"));
        assert!(svg.contains("<rect x="));
    }

    #[test]
    fn invalid_color_is_reported() {
        let request = MapRequest::new("Root").with_style(StyleConfig {
            central_color: "not-a-color".to_string(),
            ..StyleConfig::default()
        });
        let graph = MindmapGraph::build(&request).unwrap();
        let positions = layout(&graph, LayoutStyle::Circular, &LayoutOptions::default());
        let err = render_svg(&graph, &positions, &request.style).unwrap_err();
        assert!(matches!(err, RenderError::InvalidColor { .. }));
    }

    #[test]
    fn position_count_mismatch_is_reported() {
        let small = MindmapGraph::build(&MapRequest::new("Solo")).unwrap();
        let big = MindmapGraph::build(
            &MapRequest::new("Root").with_subtopic("A", ["a", "b"]),
        )
        .unwrap();
        let positions = layout(&small, LayoutStyle::Circular, &LayoutOptions::default());
        let err = render_svg(&big, &positions, &StyleConfig::default()).unwrap_err();
        assert!(matches!(
            err,
            RenderError::PositionCountMismatch { positions: 1, nodes: 4 }
        ));
    }

    #[test]
    fn single_node_graph_renders_centered() {
        let graph = MindmapGraph::build(&MapRequest::new("Central Idea")).unwrap();
        let positions = layout(&graph, LayoutStyle::Spring, &LayoutOptions::default());
        let svg = render_svg(&graph, &positions, &StyleConfig::default()).unwrap();
        // Single node sits at the content-area center, horizontally centered.
        assert!(svg.contains(r#"<circle cx="600""#));
        assert!(svg.contains("Mind Map: Central Idea"));
    }

    #[test]
    fn coordinates_stay_inside_the_viewport() {
        for style in LayoutStyle::ALL {
            let svg = rendered(StyleConfig {
                layout: style,
                ..StyleConfig::default()
            });
            for piece in svg.split("cx=\"").skip(1) {
                let value: f64 = piece.split('"').next().unwrap().parse().unwrap();
                assert!((0.0..=VIEWPORT_WIDTH).contains(&value), "{}", style.name());
            }
            for piece in svg.split("cy=\"").skip(1) {
                let value: f64 = piece.split('"').next().unwrap().parse().unwrap();
                assert!((0.0..=VIEWPORT_HEIGHT).contains(&value), "{}", style.name());
            }
        }
    }
}
