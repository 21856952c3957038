// src/components/power.rs

use super::{Footprint, PinSide, RenderOptions, corner, pin_label};
use crate::projection::{FaceColors, iso_box, iso_point, iso_rect_top};
use crate::svg_models::{Canvas, Element, Style};
use glam::{Vec2, Vec3};

/// Red/black flying leads ending in labelled dots.
fn polarity_leads(canvas: &mut dyn Canvas, first: Vec3, spacing: f32, radius: f32) {
    for (i, (pin, color)) in [("+", "red"), ("-", "black")].into_iter().enumerate() {
        let p = iso_point(first.x, first.y + i as f32 * spacing, first.z);
        canvas.push(Element::circle(p, radius, Style::filled(color).with_stroke("#333", 0.5)));
        pin_label(canvas, p, pin, PinSide::Right, 6.0);
    }
}

/// 4×AA battery holder.
pub fn battery_holder_4aa(canvas: &mut dyn Canvas, center: Vec2, opts: &RenderOptions) -> Footprint {
    let (w, h, d) = (62.0, 58.0, 15.0);
    let o = corner(center, w, h);
    iso_box(
        canvas,
        o.extend(0.0),
        Vec3::new(w, h, d),
        FaceColors::new("#222", "#111", "#1a1a1a"),
    );
    for i in 0..4 {
        let bx = o.x + 4.0 + i as f32 * 14.0;
        iso_rect_top(canvas, Vec3::new(bx, o.y + 5.0, d + 0.5), 12.0, h - 10.0, "#333");
    }

    if opts.show_pins.unwrap_or(true) {
        polarity_leads(canvas, Vec3::new(o.x + w + 3.0, center.y - 5.0, 0.0), 10.0, 2.5);
    }
    Footprint::new(w, h, d)
}

/// USB cable with its plug. Has no pins.
pub fn usb_cable(canvas: &mut dyn Canvas, center: Vec2, _opts: &RenderOptions) -> Footprint {
    iso_box(
        canvas,
        Vec3::new(center.x - 6.0, center.y - 4.0, 0.0),
        Vec3::new(12.0, 8.0, 5.0),
        FaceColors::new("#aaa", "#888", "#999"),
    );
    let start = iso_point(center.x + 6.0, center.y, 2.0);
    canvas.push(Element::line(
        start,
        start + Vec2::new(30.0, 5.0),
        Style::stroked("#333", 3.0).rounded(),
    ));
    Footprint::new(45.0, 8.0, 5.0)
}

/// Panel-mount DC barrel jack.
pub fn dc_barrel_jack(canvas: &mut dyn Canvas, center: Vec2, opts: &RenderOptions) -> Footprint {
    iso_box(
        canvas,
        Vec3::new(center.x - 7.0, center.y - 5.0, 0.0),
        Vec3::new(14.0, 9.0, 6.0),
        FaceColors::new("#222", "#111", "#181818"),
    );
    canvas.push(Element::circle(
        iso_point(center.x, center.y, 6.0),
        3.0,
        Style::filled("#444").with_stroke("#222", 1.0),
    ));

    if opts.show_pins.unwrap_or(true) {
        polarity_leads(canvas, Vec3::new(center.x + 10.0, center.y - 3.0, 0.0), 6.0, 2.0);
    }
    Footprint::new(14.0, 9.0, 6.0)
}
