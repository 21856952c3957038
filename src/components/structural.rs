// src/components/structural.rs

//! Plates, brackets and enclosures. Sizes come from `dimensions` when given.

use super::{Footprint, RenderOptions, corner};
use crate::projection::{
    FaceColors, Outline, iso_box, iso_point, iso_rect_top, iso_rect_top_outlined,
};
use crate::svg_models::{Canvas, Element, Style};
use glam::{Vec2, Vec3};

const RECT_DEFAULT: Footprint = Footprint::new(80.0, 50.0, 3.0);
const L_BRACKET_DEFAULT: Footprint = Footprint::new(30.0, 30.0, 3.0);
const STANDOFF_DEFAULT: Footprint = Footprint::new(6.0, 6.0, 10.0);
const ENCLOSURE_DEFAULT: Footprint = Footprint::new(60.0, 40.0, 20.0);

const STEEL: FaceColors = FaceColors::new("#ccc", "#aaa", "#bbb");

fn size_of(opts: &RenderOptions, defaults: Footprint) -> Footprint {
    opts.dimensions
        .map(|dims| dims.resolve(defaults))
        .unwrap_or(defaults)
}

/// Flat rectangular plate.
pub fn rect(canvas: &mut dyn Canvas, center: Vec2, opts: &RenderOptions) -> Footprint {
    let size = size_of(opts, RECT_DEFAULT);
    let o = corner(center, size.w, size.h);
    iso_box(
        canvas,
        o.extend(0.0),
        Vec3::new(size.w, size.h, size.d),
        FaceColors::new("#d0d0d0", "#b0b0b0", "#c0c0c0"),
    );
    size
}

/// L-shaped bracket. `w` and `h` are the two arm lengths, `d` the stock thickness.
pub fn l_bracket(canvas: &mut dyn Canvas, center: Vec2, opts: &RenderOptions) -> Footprint {
    let size = size_of(opts, L_BRACKET_DEFAULT);
    let (arm1, arm2, t) = (size.w, size.h, size.d);
    let o = corner(center, arm1, arm2);
    iso_box(canvas, o.extend(0.0), Vec3::new(arm1, t, t), STEEL);
    iso_box(canvas, o.extend(0.0), Vec3::new(t, arm2, t), STEEL);
    for hole in [
        Vec2::new(o.x + arm1 / 2.0, o.y + t / 2.0),
        Vec2::new(o.x + t / 2.0, o.y + arm2 / 2.0),
    ] {
        canvas.push(Element::circle(
            iso_point(hole.x, hole.y, t + 0.5),
            2.0,
            Style::stroked("#888", 0.8),
        ));
    }
    size
}

/// Hex standoff. `d` is its height.
pub fn standoff(canvas: &mut dyn Canvas, center: Vec2, opts: &RenderOptions) -> Footprint {
    let size = size_of(opts, STANDOFF_DEFAULT);
    let top = iso_point(center.x, center.y, size.d);
    let bottom = iso_point(center.x, center.y, 0.0);
    canvas.push(Element::line(bottom, top, Style::stroked("#bbb", 4.0).rounded()));
    let cap = Style::filled("#ccc").with_stroke("#999", 1.0);
    canvas.push(Element::regular_polygon(6, top, 3.0, cap));
    canvas.push(Element::regular_polygon(6, bottom, 3.0, cap));
    size
}

/// Open-top project box.
pub fn enclosure_box(canvas: &mut dyn Canvas, center: Vec2, opts: &RenderOptions) -> Footprint {
    let size = size_of(opts, ENCLOSURE_DEFAULT);
    let (w, h, d) = (size.w, size.h, size.d);
    let o = corner(center, w, h);
    iso_box(
        canvas,
        o.extend(0.0),
        Vec3::new(w, h, d),
        FaceColors::new("none", "#d8d8d8", "#e0e0e0"),
    );
    // Floor, seen through the open top
    iso_rect_top(canvas, Vec3::new(o.x + 2.0, o.y + 2.0, -d + 2.0), w - 4.0, h - 4.0, "#eee");
    iso_rect_top_outlined(
        canvas,
        o.extend(0.0),
        w,
        h,
        "none",
        Outline {
            color: "#999",
            width: 2.0,
        },
    );
    size
}
