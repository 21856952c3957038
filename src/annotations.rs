// src/annotations.rs

use crate::project_models::Wire;
use crate::svg_models::{Anchor, Canvas, Element, FONT_HELVETICA, FONT_MONO, FONT_SANS, Group, Style, TextStyle};
use glam::Vec2;

pub const ARROW_COLOR: &str = "#444444";
pub const CALLOUT_STROKE: &str = "#666666";

const ARROW_HEAD_LENGTH: f32 = 10.0;
const ARROW_HEAD_ANGLE_DEG: f32 = 25.0;
const LEGEND_ROW_HEIGHT: f32 = 18.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArrowStyle {
    pub color: &'static str,
    pub width: f32,
    pub dashed: bool,
}

impl Default for ArrowStyle {
    fn default() -> Self {
        ArrowStyle {
            color: ARROW_COLOR,
            width: 2.0,
            dashed: false,
        }
    }
}

/// The two base corners of an arrowhead whose tip sits at `to`.
pub fn arrowhead(from: Vec2, to: Vec2) -> [Vec2; 2] {
    let dir = to - from;
    let angle = dir.y.atan2(dir.x);
    let spread = ARROW_HEAD_ANGLE_DEG.to_radians();
    [angle - spread, angle + spread].map(|a| to - Vec2::new(a.cos(), a.sin()) * ARROW_HEAD_LENGTH)
}

pub fn action_arrow(canvas: &mut dyn Canvas, from: Vec2, to: Vec2, style: ArrowStyle) {
    let mut line = Style::stroked(style.color, style.width);
    if style.dashed {
        line = line.dashed("6,3");
    }
    canvas.push(Element::line(from, to, line));
    let [left, right] = arrowhead(from, to);
    canvas.push(Element::polygon(vec![to, left, right], Style::filled(style.color)));
}

/// Leader line from `focus` to a circle at `center`.
///
/// Returns the circle's center so magnified content can be drawn inside it.
pub fn callout_circle(canvas: &mut dyn Canvas, focus: Vec2, center: Vec2, radius: f32) -> Vec2 {
    canvas.push(Element::line(
        focus,
        center,
        Style::stroked(CALLOUT_STROKE, 1.0).dashed("4,2"),
    ));
    canvas.push(Element::circle(focus, 5.0, Style::stroked(CALLOUT_STROKE, 1.0)));
    canvas.push(Element::circle(
        center,
        radius,
        Style::filled("white").with_stroke(CALLOUT_STROKE, 1.5),
    ));
    center
}

/// "×N" next to the part it applies to.
pub fn quantity_marker(canvas: &mut dyn Canvas, at: Vec2, quantity: u32) {
    canvas.push(Element::text(
        format!("\u{d7}{}", quantity),
        at,
        TextStyle::new(14.0, FONT_HELVETICA).fill("#333").bold(),
    ));
}

pub fn checkmark(canvas: &mut dyn Canvas, at: Vec2, size: f32) {
    canvas.push(Element::circle(at, size / 2.0, Style::filled("#2a9d8f")));
    canvas.push(Element::polyline(
        vec![
            at + Vec2::new(-0.25, 0.0) * size,
            at + Vec2::new(-0.05, 0.2) * size,
            at + Vec2::new(0.3, -0.25) * size,
        ],
        Style::stroked("white", 2.0).rounded(),
    ));
}

pub fn x_mark(canvas: &mut dyn Canvas, at: Vec2, size: f32) {
    canvas.push(Element::circle(at, size / 2.0, Style::filled("#e63946")));
    let r = size * 0.22;
    let stroke = Style::stroked("white", 2.0).rounded();
    canvas.push(Element::line(at - Vec2::splat(r), at + Vec2::splat(r), stroke));
    canvas.push(Element::line(at + Vec2::new(-r, r), at + Vec2::new(r, -r), stroke));
}

/// Check and cross badges side by side, each with an optional caption.
pub fn do_dont(canvas: &mut dyn Canvas, at: Vec2, do_text: &str, dont_text: &str) {
    let dont_at = at + Vec2::new(100.0, 0.0);
    checkmark(canvas, at + Vec2::splat(10.0), 16.0);
    x_mark(canvas, dont_at + Vec2::splat(10.0), 16.0);
    for (origin, text) in [(at, do_text), (dont_at, dont_text)] {
        if !text.is_empty() {
            canvas.push(Element::text(
                text,
                origin + Vec2::new(24.0, 14.0),
                TextStyle::new(9.0, FONT_SANS).fill("#444"),
            ));
        }
    }
}

/// Poly-line through `points` with dots on both ends and an optional label at
/// the middle waypoint. Fewer than two points draws nothing.
pub fn wire_path(canvas: &mut dyn Canvas, points: &[Vec2], color: &'static str, width: f32, label: Option<&str>) {
    let (Some(first), Some(last)) = (points.first(), points.last()) else {
        return;
    };
    if points.len() < 2 {
        return;
    }
    canvas.push(Element::polyline(
        points.to_vec(),
        Style::stroked(color, width).rounded(),
    ));
    for end in [*first, *last] {
        canvas.push(Element::circle(
            end,
            3.0,
            Style::filled(color).with_stroke("white", 1.0),
        ));
    }
    if let Some(text) = label.filter(|t| !t.is_empty()) {
        let mid = points[points.len() / 2];
        canvas.push(Element::text(
            text,
            mid + Vec2::new(5.0, -5.0),
            TextStyle::new(7.0, FONT_SANS).fill(color),
        ));
    }
}

pub fn wire_description(wire: &Wire) -> String {
    let route = format!(
        "{}:{} \u{2192} {}:{}",
        wire.from.part, wire.from.pin, wire.to.part, wire.to.pin
    );
    match wire.label.as_deref().filter(|l| !l.is_empty()) {
        Some(label) => format!("{} ({})", label, route),
        None => route,
    }
}

/// Legend with one swatch row per wire, grouped under id `wire-legend`.
///
/// Returns the y just below the last row.
pub fn wire_legend(canvas: &mut dyn Canvas, origin: Vec2, wires: &[Wire]) -> f32 {
    let mut legend = Group::new().with_id("wire-legend");
    legend.push(Element::text(
        "Wire Legend",
        origin,
        TextStyle::new(10.0, FONT_HELVETICA).fill("#333").bold(),
    ));

    let mut y = origin.y + LEGEND_ROW_HEIGHT;
    for wire in wires {
        let color = wire.color.hex();
        legend.push(Element::line(
            Vec2::new(origin.x, y),
            Vec2::new(origin.x + 20.0, y),
            Style::stroked(color, 3.0).rounded(),
        ));
        legend.push(Element::text(
            wire_description(wire),
            Vec2::new(origin.x + 28.0, y + 3.0),
            TextStyle::new(8.0, FONT_MONO).fill("#555").anchor(Anchor::Start),
        ));
        y += LEGEND_ROW_HEIGHT;
    }
    canvas.push(Element::Group(legend));
    y
}

/// Height a legend for `count` wires occupies.
pub fn legend_height(count: usize) -> f32 {
    (count + 1) as f32 * LEGEND_ROW_HEIGHT
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-4;

    #[test]
    fn arrowhead_is_ten_units_at_25_degrees() {
        let cases = [
            (Vec2::ZERO, Vec2::new(50.0, 0.0)),
            (Vec2::new(50.0, 0.0), Vec2::ZERO),
            (Vec2::new(10.0, 10.0), Vec2::new(10.0, 90.0)),
            (Vec2::new(10.0, 90.0), Vec2::new(10.0, 10.0)),
            (Vec2::new(-3.0, 4.0), Vec2::new(30.0, -25.0)),
        ];
        for (from, to) in cases {
            let dir = (to - from).normalize();
            let corners = arrowhead(from, to);
            for corner in corners {
                let back = to - corner;
                assert!((back.length() - 10.0).abs() < EPS, "{:?}->{:?} head length", from, to);
                let angle = back.normalize().dot(dir).clamp(-1.0, 1.0).acos().to_degrees();
                assert!((angle - 25.0).abs() < 1e-2, "{:?}->{:?} spread {}", from, to, angle);
            }
            // One corner on each side of the shaft.
            let sides: Vec<f32> = corners.iter().map(|c| dir.perp_dot(*c - from)).collect();
            assert!(sides[0] * sides[1] < 0.0, "{:?}->{:?} corners on one side", from, to);
        }
    }

    #[test]
    fn dashed_arrow_uses_dash_pattern() {
        let mut group = Group::new();
        action_arrow(
            &mut group,
            Vec2::ZERO,
            Vec2::new(0.0, 20.0),
            ArrowStyle {
                dashed: true,
                ..Default::default()
            },
        );
        match &group.children[0] {
            Element::Line { style, .. } => assert_eq!(style.dash, Some("6,3")),
            other => panic!("expected the shaft first, got {:?}", other),
        }
        assert!(matches!(group.children[1], Element::Polygon { .. }));
    }

    #[test]
    fn callout_returns_its_center() {
        let mut group = Group::new();
        let center = Vec2::new(475.0, 170.0);
        let inner = callout_circle(&mut group, Vec2::new(337.5, 386.0), center, 50.0);
        assert_eq!(inner, center);
        let big = group.children.iter().any(|e| {
            matches!(e, Element::Circle { center: c, radius, .. } if *c == center && *radius == 50.0)
        });
        assert!(big, "callout circle should be drawn at the returned center");
    }

    #[test]
    fn legend_height_counts_title_row() {
        assert_eq!(legend_height(0), 18.0);
        assert_eq!(legend_height(3), 72.0);
    }
}
