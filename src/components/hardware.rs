// src/components/hardware.rs

//! Fasteners and consumables. All of these honor `scale`.

use super::{Footprint, RenderOptions};
use crate::projection::{Outline, iso_point, iso_rect_top_outlined};
use crate::svg_models::{Canvas, Element, Style};
use glam::{Vec2, Vec3};

fn scale_of(opts: &RenderOptions) -> f32 {
    opts.scale.unwrap_or(1.0)
}

fn shaft(canvas: &mut dyn Canvas, center: Vec2, s: f32) {
    canvas.push(Element::line(
        iso_point(center.x, center.y, 0.0),
        iso_point(center.x, center.y, -8.0 * s),
        Style::stroked("#999", 2.0 * s),
    ));
}

/// Phillips pan-head screw.
pub fn screw_phillips(canvas: &mut dyn Canvas, center: Vec2, opts: &RenderOptions) -> Footprint {
    let s = scale_of(opts);
    let head = iso_point(center.x, center.y, 3.0 * s);
    canvas.push(Element::circle(
        head,
        4.0 * s,
        Style::filled("#ccc").with_stroke("#999", 1.0),
    ));
    let arm = 2.5 * s;
    let cross = Style::stroked("#888", 1.0);
    canvas.push(Element::line(head - Vec2::X * arm, head + Vec2::X * arm, cross));
    canvas.push(Element::line(head - Vec2::Y * arm, head + Vec2::Y * arm, cross));
    shaft(canvas, center, s);
    Footprint::new(8.0, 8.0, 11.0).scaled(s)
}

/// Hex socket cap screw.
pub fn screw_hex(canvas: &mut dyn Canvas, center: Vec2, opts: &RenderOptions) -> Footprint {
    let s = scale_of(opts);
    let head = iso_point(center.x, center.y, 3.0 * s);
    canvas.push(Element::circle(
        head,
        4.0 * s,
        Style::filled("#bbb").with_stroke("#888", 1.0),
    ));
    canvas.push(Element::regular_polygon(6, head, 2.0 * s, Style::stroked("#666", 1.0)));
    shaft(canvas, center, s);
    Footprint::new(8.0, 8.0, 11.0).scaled(s)
}

/// Hex nut.
pub fn nut(canvas: &mut dyn Canvas, center: Vec2, opts: &RenderOptions) -> Footprint {
    let s = scale_of(opts);
    let p = iso_point(center.x, center.y, 1.5 * s);
    canvas.push(Element::regular_polygon(
        6,
        p,
        4.0 * s,
        Style::filled("#ccc").with_stroke("#999", 1.0),
    ));
    canvas.push(Element::circle(
        p,
        1.5 * s,
        Style::filled("#aaa").with_stroke("#888", 0.5),
    ));
    Footprint::new(8.0, 8.0, 3.0).scaled(s)
}

/// Plastic wall plug.
pub fn wall_anchor(canvas: &mut dyn Canvas, center: Vec2, opts: &RenderOptions) -> Footprint {
    let s = scale_of(opts);
    let top = iso_point(center.x, center.y, 0.0);
    let bottom = iso_point(center.x, center.y, -15.0 * s);
    canvas.push(Element::line(top, bottom, Style::stroked("#ddd", 4.0 * s).rounded()));
    // Flange
    canvas.push(Element::circle(
        top,
        3.0 * s,
        Style::filled("#eee").with_stroke("#ccc", 1.0),
    ));
    Footprint::new(6.0, 6.0, 15.0).scaled(s)
}

/// Zip tie, drawn as a loop with its tail.
pub fn cable_tie(canvas: &mut dyn Canvas, center: Vec2, opts: &RenderOptions) -> Footprint {
    let s = scale_of(opts);
    let p = iso_point(center.x, center.y, 0.0);
    canvas.push(Element::circle(p, 6.0 * s, Style::stroked("#eee", 2.0 * s)));
    canvas.push(Element::line(
        p + Vec2::X * 6.0 * s,
        p + Vec2::X * 18.0 * s,
        Style::stroked("#eee", 2.0 * s).rounded(),
    ));
    Footprint::new(24.0, 12.0, 2.0).scaled(s)
}

/// Double-sided adhesive pad.
pub fn adhesive_strip(canvas: &mut dyn Canvas, center: Vec2, opts: &RenderOptions) -> Footprint {
    let s = scale_of(opts);
    iso_rect_top_outlined(
        canvas,
        Vec3::new(center.x - 15.0 * s, center.y - 3.0 * s, 0.0),
        30.0 * s,
        6.0 * s,
        "#ff6666",
        Outline {
            color: "#cc4444",
            width: 1.0 * s,
        },
    );
    Footprint::new(30.0, 6.0, 1.0).scaled(s)
}
