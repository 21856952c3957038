// src/components/sensors.rs

use super::{Footprint, PinSide, RenderOptions, corner, pin_label};
use crate::projection::{FaceColors, iso_box, iso_point};
use crate::svg_models::{Canvas, Element, Style};
use glam::{Vec2, Vec3};

const GREEN_PCB: FaceColors = FaceColors::new("#2a8a2a", "#1a7a1a", "#228a22");
const BLUE_PCB: FaceColors = FaceColors::new("#2266bb", "#1a55aa", "#2060b0");

/// Header pins along the near (+y) bottom edge, spaced `pitch` apart.
fn edge_pins(
    canvas: &mut dyn Canvas,
    start: Vec2,
    pitch: f32,
    z: f32,
    pins: &[&str],
    font_size: f32,
) {
    for (i, pin) in pins.iter().enumerate() {
        let p = iso_point(start.x + i as f32 * pitch, start.y, z);
        pin_label(canvas, p, pin, PinSide::Right, font_size);
    }
}

/// HC-SR501 PIR motion sensor with its Fresnel dome.
pub fn pir_sensor(canvas: &mut dyn Canvas, center: Vec2, opts: &RenderOptions) -> Footprint {
    let (w, h, d) = (32.0, 24.0, 8.0);
    let o = corner(center, w, h);
    iso_box(canvas, o.extend(0.0), Vec3::new(w, h, d), GREEN_PCB);

    let dome = iso_point(center.x, center.y, d);
    canvas.push(Element::circle(
        dome,
        10.0,
        Style::filled("#e8e8dd")
            .with_stroke("#999", 1.5)
            .with_opacity(0.8),
    ));
    canvas.push(Element::circle(dome, 7.0, Style::stroked("#ccc", 0.5)));

    if opts.show_pins.unwrap_or(true) {
        edge_pins(
            canvas,
            Vec2::new(o.x + 5.0, o.y + h + 2.0),
            (w - 10.0) / 2.0,
            -d,
            &["VCC", "OUT", "GND"],
            6.0,
        );
    }
    Footprint::new(w, h, d)
}

/// HC-SR04 ultrasonic rangefinder.
pub fn ultrasonic_sensor(canvas: &mut dyn Canvas, center: Vec2, opts: &RenderOptions) -> Footprint {
    let (w, h, d) = (45.0, 20.0, 6.0);
    let o = corner(center, w, h);
    iso_box(canvas, o.extend(0.0), Vec3::new(w, h, d), BLUE_PCB);

    for dx in [12.0, 33.0] {
        let t = iso_point(o.x + dx, center.y, d);
        canvas.push(Element::circle(t, 7.0, Style::filled("#ddd").with_stroke("#999", 1.5)));
        canvas.push(Element::circle(t, 5.0, Style::filled("#bbb").with_stroke("#999", 0.5)));
    }

    if opts.show_pins.unwrap_or(true) {
        edge_pins(
            canvas,
            Vec2::new(o.x + 8.0, o.y + h + 2.0),
            9.0,
            -d,
            &["VCC", "TRIG", "ECHO", "GND"],
            5.0,
        );
    }
    Footprint::new(w, h, d)
}

/// DHT11 temperature/humidity sensor on a breakout.
pub fn dht11_temp(canvas: &mut dyn Canvas, center: Vec2, opts: &RenderOptions) -> Footprint {
    let (w, h, d) = (32.0, 14.0, 8.0);
    let board_d = 3.0;
    let o = corner(center, w, h);
    iso_box(canvas, o.extend(0.0), Vec3::new(w, h, board_d), GREEN_PCB);
    iso_box(
        canvas,
        Vec3::new(o.x + 6.0, o.y + 1.0, board_d),
        Vec3::new(20.0, 12.0, d - board_d),
        FaceColors::new("#4488cc", "#3377bb", "#4080c0"),
    );

    if opts.show_pins.unwrap_or(true) {
        edge_pins(
            canvas,
            Vec2::new(o.x + 5.0, o.y + h + 2.0),
            11.0,
            -board_d,
            &["+", "DATA", "-"],
            6.0,
        );
    }
    Footprint::new(w, h, d)
}

/// Light-dependent resistor module.
pub fn photoresistor(canvas: &mut dyn Canvas, center: Vec2, opts: &RenderOptions) -> Footprint {
    let (w, h, d) = (32.0, 14.0, 4.0);
    let o = corner(center, w, h);
    iso_box(canvas, o.extend(0.0), Vec3::new(w, h, d), GREEN_PCB);
    canvas.push(Element::circle(
        iso_point(center.x, center.y, d),
        5.0,
        Style::filled("#cc8844").with_stroke("#996633", 1.0),
    ));

    if opts.show_pins.unwrap_or(true) {
        edge_pins(
            canvas,
            Vec2::new(o.x + 5.0, o.y + h + 2.0),
            11.0,
            -d,
            &["VCC", "OUT", "GND"],
            6.0,
        );
    }
    Footprint::new(w, h, d)
}

/// Tactile push button module.
pub fn button(canvas: &mut dyn Canvas, center: Vec2, opts: &RenderOptions) -> Footprint {
    let (w, h, d) = (32.0, 14.0, 4.0);
    let o = corner(center, w, h);
    iso_box(
        canvas,
        o.extend(0.0),
        Vec3::new(w, h, d),
        FaceColors::new("#2a2a8a", "#1a1a7a", "#22228a"),
    );
    canvas.push(Element::circle(
        iso_point(center.x, center.y, d + 2.0),
        5.0,
        Style::filled("#dd3333").with_stroke("#aa2222", 1.5),
    ));

    if opts.show_pins.unwrap_or(true) {
        edge_pins(
            canvas,
            Vec2::new(o.x + 5.0, o.y + h + 2.0),
            11.0,
            -d,
            &["VCC", "OUT", "GND"],
            6.0,
        );
    }
    Footprint::new(w, h, d)
}

/// Rotary potentiometer.
pub fn potentiometer(canvas: &mut dyn Canvas, center: Vec2, opts: &RenderOptions) -> Footprint {
    let (w, h, d) = (16.0, 16.0, 10.0);
    let o = corner(center, w, h);
    iso_box(
        canvas,
        o.extend(0.0),
        Vec3::new(w, h, d),
        FaceColors::new("#4444aa", "#333399", "#3838a0"),
    );
    canvas.push(Element::circle(
        iso_point(center.x, center.y, d + 3.0),
        3.0,
        Style::filled("#ccc").with_stroke("#999", 1.0),
    ));

    if opts.show_pins.unwrap_or(true) {
        edge_pins(
            canvas,
            Vec2::new(o.x + 2.0, o.y + h + 2.0),
            6.0,
            -d,
            &["VCC", "OUT", "GND"],
            5.0,
        );
    }
    Footprint::new(w, h, d)
}
