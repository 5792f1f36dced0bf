//! Marker geometry.
//!
//! `node_size` is an area value (the original plotting library's marker
//! convention), so every shape is sized to cover the same area for the same
//! configured size, and the kind multiplier scales area, not radius.

use std::fmt::Write as _;

use ideamap_core::NodeShape;

use crate::svg::fmt_number;

/// Radius of an equal-area circle; also used to pad the viewport so markers
/// do not clip at the content bounds.
pub(crate) fn circle_radius(area: f64) -> f64 {
    (area.max(1.0) / std::f64::consts::PI).sqrt()
}

/// Emits one marker element centered at (`cx`, `cy`) covering `area` square
/// pixels. `fill` must be a ready-made SVG attribute fragment (fill plus
/// optional opacity).
pub(crate) fn marker_svg(shape: NodeShape, cx: f64, cy: f64, area: f64, fill: &str) -> String {
    let mut out = String::new();
    match shape {
        NodeShape::Circle => {
            let r = circle_radius(area);
            let _ = write!(
                out,
                r#"<circle cx="{}" cy="{}" r="{}"{fill}/>"#,
                fmt_number(cx),
                fmt_number(cy),
                fmt_number(r),
            );
        }
        NodeShape::Square => {
            let side = area.max(1.0).sqrt();
            let _ = write!(
                out,
                r#"<rect x="{}" y="{}" width="{}" height="{}"{fill}/>"#,
                fmt_number(cx - side / 2.0),
                fmt_number(cy - side / 2.0),
                fmt_number(side),
                fmt_number(side),
            );
        }
        NodeShape::Diamond => {
            // Rhombus with equal diagonals: area = 2 * h^2 for half-diagonal h.
            let h = (area.max(1.0) / 2.0).sqrt();
            let _ = write!(
                out,
                r#"<polygon points="{},{} {},{} {},{} {},{}"{fill}/>"#,
                fmt_number(cx),
                fmt_number(cy - h),
                fmt_number(cx + h),
                fmt_number(cy),
                fmt_number(cx),
                fmt_number(cy + h),
                fmt_number(cx - h),
                fmt_number(cy),
            );
        }
        NodeShape::Triangle => {
            // Equilateral, apex up: area = (3 * sqrt(3) / 4) * R^2 for
            // circumradius R.
            let r = (area.max(1.0) * 4.0 / (3.0 * 3f64.sqrt())).sqrt();
            let half_base = r * (3f64.sqrt() / 2.0);
            let _ = write!(
                out,
                r#"<polygon points="{},{} {},{} {},{}"{fill}/>"#,
                fmt_number(cx),
                fmt_number(cy - r),
                fmt_number(cx + half_base),
                fmt_number(cy + r / 2.0),
                fmt_number(cx - half_base),
                fmt_number(cy + r / 2.0),
            );
        }
    }
    out
}
