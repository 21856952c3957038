// src/components/outputs.rs

use super::{Footprint, PinSide, RenderOptions, corner, pin_label};
use crate::projection::{FaceColors, iso_box, iso_point, iso_rect_top};
use crate::svg_models::{Canvas, Element, FONT_MONO, Style, TextStyle};
use glam::{Vec2, Vec3};

const BLUE_PCB: FaceColors = FaceColors::new("#2266bb", "#1a55aa", "#2060b0");
const LEG: Style = Style::stroked("#999", 1.0);

/// Straight lead from the body down to `z = -6`, returning its lower end.
fn leg(canvas: &mut dyn Canvas, x: f32, y: f32) -> Vec2 {
    let top = iso_point(x, y, 0.0);
    let bottom = iso_point(x, y, -6.0);
    canvas.push(Element::line(top, bottom, LEG));
    bottom
}

/// 5 mm single-colour LED.
pub fn led_single(canvas: &mut dyn Canvas, center: Vec2, opts: &RenderOptions) -> Footprint {
    let dome = iso_point(center.x, center.y, 5.0);
    canvas.push(Element::circle(
        dome,
        5.0,
        Style::filled("#ff3333")
            .with_stroke("#666", 1.0)
            .with_opacity(0.8),
    ));
    canvas.push(Element::circle(
        dome - Vec2::splat(1.5),
        1.5,
        Style::filled("white").with_opacity(0.4),
    ));

    let show_pins = opts.show_pins.unwrap_or(true);
    for (dx, pin) in [(-2.0, "+"), (2.0, "-")] {
        let foot = leg(canvas, center.x + dx, center.y);
        if show_pins {
            pin_label(canvas, foot, pin, PinSide::Right, 6.0);
        }
    }
    Footprint::new(5.0, 5.0, 11.0)
}

/// Common-cathode RGB LED.
pub fn led_rgb(canvas: &mut dyn Canvas, center: Vec2, opts: &RenderOptions) -> Footprint {
    canvas.push(Element::circle(
        iso_point(center.x, center.y, 5.0),
        5.0,
        Style::filled("white")
            .with_stroke("#666", 1.0)
            .with_opacity(0.9),
    ));
    for (dx, color) in [(-2.0, "red"), (0.0, "green"), (2.0, "blue")] {
        canvas.push(Element::circle(
            iso_point(center.x + dx, center.y, 6.0),
            1.2,
            Style::filled(color),
        ));
    }

    if opts.show_pins.unwrap_or(true) {
        for (i, pin) in ["R", "GND", "G", "B"].iter().enumerate() {
            let foot = leg(canvas, center.x - 3.0 + i as f32 * 2.0, center.y);
            pin_label(canvas, foot, pin, PinSide::Right, 5.0);
        }
    }
    Footprint::new(8.0, 5.0, 11.0)
}

/// SG90 micro servo.
pub fn servo_motor(canvas: &mut dyn Canvas, center: Vec2, opts: &RenderOptions) -> Footprint {
    let (w, h, d) = (23.0, 12.0, 22.0);
    let o = corner(center, w, h);
    iso_box(
        canvas,
        o.extend(0.0),
        Vec3::new(w, h, d),
        FaceColors::new("#3366bb", "#2255aa", "#2860b0"),
    );
    // Mounting tabs
    iso_rect_top(canvas, Vec3::new(o.x - 3.0, o.y + 2.0, 0.0), w + 6.0, 2.0, "#3366bb");
    canvas.push(Element::circle(
        iso_point(o.x + 6.0, center.y, d + 2.0),
        3.0,
        Style::filled("#fff").with_stroke("#999", 1.0),
    ));

    if opts.show_pins.unwrap_or(true) {
        let leads = [("orange", "Signal"), ("red", "VCC"), ("#8B4513", "GND")];
        for (i, (color, name)) in leads.into_iter().enumerate() {
            let p = iso_point(o.x + w + 3.0, o.y + 3.0 + i as f32 * 4.0, 0.0);
            canvas.push(Element::circle(p, 2.0, Style::filled(color).with_stroke("#333", 0.5)));
            pin_label(canvas, p, name, PinSide::Right, 5.0);
        }
    }
    Footprint::new(w, h, d)
}

/// Single-channel relay module.
pub fn relay_module(canvas: &mut dyn Canvas, center: Vec2, opts: &RenderOptions) -> Footprint {
    let (w, h, d) = (50.0, 26.0, 10.0);
    let o = corner(center, w, h);
    iso_box(canvas, o.extend(0.0), Vec3::new(w, h, d), BLUE_PCB);
    iso_box(
        canvas,
        Vec3::new(o.x + 5.0, o.y + 3.0, d),
        Vec3::new(20.0, 15.0, 8.0),
        FaceColors::new("#3333bb", "#2222aa", "#2828b0"),
    );
    // Screw terminal
    iso_box(
        canvas,
        Vec3::new(o.x + 30.0, o.y + 3.0, d),
        Vec3::new(15.0, 8.0, 6.0),
        FaceColors::new("#3388ff", "#2277ee", "#3080f0"),
    );

    if opts.show_pins.unwrap_or(true) {
        for (i, pin) in ["VCC", "GND", "IN"].iter().enumerate() {
            let p = iso_point(o.x - 1.0, o.y + 3.0 + i as f32 * 8.0, 0.0);
            pin_label(canvas, p, pin, PinSide::Left, 5.0);
        }
        for (i, pin) in ["COM", "NO", "NC"].iter().enumerate() {
            let p = iso_point(o.x + w + 1.0, o.y + 3.0 + i as f32 * 8.0, 0.0);
            pin_label(canvas, p, pin, PinSide::Right, 5.0);
        }
    }
    Footprint::new(w, h, d)
}

/// Piezo buzzer module.
pub fn buzzer(canvas: &mut dyn Canvas, center: Vec2, opts: &RenderOptions) -> Footprint {
    let (w, h, d) = (18.0, 18.0, 6.0);
    let o = corner(center, w, h);
    iso_box(
        canvas,
        o.extend(0.0),
        Vec3::new(w, h, d),
        FaceColors::new("#222", "#111", "#1a1a1a"),
    );
    canvas.push(Element::circle(
        iso_point(center.x, center.y, d),
        3.0,
        Style::stroked("#555", 1.0),
    ));

    if opts.show_pins.unwrap_or(true) {
        for (i, pin) in ["+", "-"].iter().enumerate() {
            let p = iso_point(o.x + 5.0 + i as f32 * 8.0, o.y + h + 2.0, -d);
            pin_label(canvas, p, pin, PinSide::Right, 6.0);
        }
    }
    Footprint::new(w, h, d)
}

/// 16×2 character LCD with an I2C backpack.
pub fn lcd_16x2(canvas: &mut dyn Canvas, center: Vec2, opts: &RenderOptions) -> Footprint {
    let (w, h, d) = (80.0, 36.0, 8.0);
    let o = corner(center, w, h);
    iso_box(canvas, o.extend(0.0), Vec3::new(w, h, d), BLUE_PCB);
    iso_rect_top(canvas, Vec3::new(o.x + 5.0, o.y + 4.0, d + 0.5), 70.0, 20.0, "#88bb44");
    canvas.push(Element::text(
        "\u{2588}".repeat(16),
        iso_point(o.x + 10.0, o.y + 8.0, d + 1.0),
        TextStyle::new(4.0, FONT_MONO).fill("#446622"),
    ));

    if opts.show_pins.unwrap_or(true) {
        for (i, pin) in ["VCC", "GND", "SDA", "SCL"].iter().enumerate() {
            let p = iso_point(o.x + w + 1.0, o.y + 3.0 + i as f32 * 8.0, 0.0);
            pin_label(canvas, p, pin, PinSide::Right, 5.0);
        }
    }
    Footprint::new(w, h, d)
}
