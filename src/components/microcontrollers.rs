// src/components/microcontrollers.rs

use super::{Footprint, PinSide, RenderOptions, board_label, corner, pin_label};
use crate::projection::{FaceColors, iso_box, iso_point, iso_rect_top};
use crate::svg_models::Canvas;
use glam::{Vec2, Vec3};

const ARDUINO_TEAL: FaceColors = FaceColors::new("#1a7a6d", "#146b5f", "#117a6d");
const METAL: FaceColors = FaceColors::new("#aaa", "#888", "#999");
const BLACK_PLASTIC: FaceColors = FaceColors::new("#222", "#111", "#181818");

/// Arduino Nano, 45×18 DIP board.
pub fn arduino_nano(canvas: &mut dyn Canvas, center: Vec2, opts: &RenderOptions) -> Footprint {
    let (w, h, d) = (45.0, 18.0, 4.0);
    let o = corner(center, w, h);
    iso_box(canvas, o.extend(0.0), Vec3::new(w, h, d), ARDUINO_TEAL);

    // Mini USB sticking out past the top edge.
    let (usb_w, usb_h, usb_d) = (8.0, 7.0, 3.0);
    iso_box(
        canvas,
        Vec3::new(o.x + w / 2.0 - usb_w / 2.0, o.y - 2.0, 1.0),
        Vec3::new(usb_w, usb_h, usb_d + 1.0),
        METAL,
    );

    let (chip_w, chip_h) = (12.0, 10.0);
    iso_rect_top(
        canvas,
        Vec3::new(
            o.x + w / 2.0 - chip_w / 2.0,
            o.y + h / 2.0 - chip_h / 2.0 + 2.0,
            0.5,
        ),
        chip_w,
        chip_h,
        "#222",
    );
    board_label(canvas, iso_point(center.x, center.y, 1.0), "NANO", 6.0, "#afd");

    if opts.show_pins.unwrap_or(true) {
        const LEFT: [&str; 8] = ["D13", "D12", "D11", "D10", "D9", "D8", "D7", "D6"];
        const RIGHT: [&str; 8] = ["3.3V", "AREF", "A0", "A1", "A2", "A3", "A4", "A5"];
        let pitch = (h - 4.0) / (LEFT.len() - 1) as f32;
        for (i, (left, right)) in LEFT.iter().zip(RIGHT).enumerate() {
            let py = o.y + 2.0 + i as f32 * pitch;
            pin_label(canvas, iso_point(o.x - 1.0, py, 0.0), left, PinSide::Left, 5.0);
            pin_label(canvas, iso_point(o.x + w + 1.0, py, 0.0), right, PinSide::Right, 5.0);
        }
    }
    Footprint::new(w, h, d)
}

/// Arduino Uno, 69×53 board with USB-B and barrel jack.
pub fn arduino_uno(canvas: &mut dyn Canvas, center: Vec2, opts: &RenderOptions) -> Footprint {
    let (w, h, d) = (69.0, 53.0, 5.0);
    let o = corner(center, w, h);
    iso_box(canvas, o.extend(0.0), Vec3::new(w, h, d), ARDUINO_TEAL);
    iso_box(
        canvas,
        Vec3::new(o.x + 2.0, o.y - 3.0, 1.0),
        Vec3::new(12.0, 12.0, 7.0),
        METAL,
    );
    iso_box(
        canvas,
        Vec3::new(o.x + 18.0, o.y - 2.0, 1.0),
        Vec3::new(9.0, 9.0, 6.0),
        BLACK_PLASTIC,
    );
    iso_rect_top(canvas, Vec3::new(o.x + 25.0, o.y + 15.0, 0.5), 18.0, 22.0, "#222");
    board_label(canvas, iso_point(center.x, center.y, 1.0), "UNO", 8.0, "#afd");

    if opts.show_pins.unwrap_or(true) {
        for (i, pin) in ["D0", "D1", "D2", "D3", "D4", "D5", "D6", "D7"].iter().enumerate() {
            let p = iso_point(o.x + w + 1.0, o.y + 2.0 + i as f32 * 5.0, 0.0);
            pin_label(canvas, p, pin, PinSide::Right, 5.0);
        }
        for (i, pin) in ["A0", "A1", "A2", "A3", "A4", "A5"].iter().enumerate() {
            let p = iso_point(o.x - 1.0, o.y + h - 30.0 + i as f32 * 5.0, 0.0);
            pin_label(canvas, p, pin, PinSide::Left, 5.0);
        }
        for (i, pin) in ["5V", "3.3V", "GND"].iter().enumerate() {
            let p = iso_point(o.x - 1.0, o.y + 2.0 + i as f32 * 5.0, 0.0);
            pin_label(canvas, p, pin, PinSide::Left, 5.0);
        }
    }
    Footprint::new(w, h, d)
}

/// ESP32 DevKit, 51×26.
pub fn esp32(canvas: &mut dyn Canvas, center: Vec2, opts: &RenderOptions) -> Footprint {
    let (w, h, d) = (51.0, 26.0, 4.0);
    let o = corner(center, w, h);
    iso_box(
        canvas,
        o.extend(0.0),
        Vec3::new(w, h, d),
        FaceColors::new("#1a1a2e", "#111128", "#16162b"),
    );
    // Antenna keep-out
    iso_rect_top(canvas, o.extend(0.3), 18.0, h, "#2a2a4a");
    iso_box(
        canvas,
        Vec3::new(o.x + w - 10.0, o.y + h / 2.0 - 4.0, 1.0),
        Vec3::new(8.0, 8.0, 3.0),
        METAL,
    );
    board_label(canvas, iso_point(center.x, center.y, 1.0), "ESP32", 6.0, "#88f");

    if opts.show_pins.unwrap_or(true) {
        for (i, pin) in ["3.3V", "GND", "GPIO2", "GPIO4"].iter().enumerate() {
            let p = iso_point(o.x - 1.0, o.y + 2.0 + i as f32 * 6.0, 0.0);
            pin_label(canvas, p, pin, PinSide::Left, 5.0);
        }
    }
    Footprint::new(w, h, d)
}

/// Raspberry Pi Pico, 51×21.
pub fn raspberry_pi_pico(canvas: &mut dyn Canvas, center: Vec2, opts: &RenderOptions) -> Footprint {
    let (w, h, d) = (51.0, 21.0, 3.0);
    let o = corner(center, w, h);
    iso_box(
        canvas,
        o.extend(0.0),
        Vec3::new(w, h, d),
        FaceColors::new("#4a9e4a", "#3a8a3a", "#45964a"),
    );
    iso_box(
        canvas,
        Vec3::new(o.x + w - 8.0, o.y + h / 2.0 - 3.0, 1.0),
        Vec3::new(7.0, 6.0, 2.0),
        METAL,
    );
    board_label(canvas, iso_point(center.x, center.y, 1.0), "PICO", 6.0, "#fff");

    if opts.show_pins.unwrap_or(true) {
        for (i, pin) in ["VBUS", "GND", "3V3", "GP0"].iter().enumerate() {
            let p = iso_point(o.x + w + 1.0, o.y + 2.0 + i as f32 * 5.0, 0.0);
            pin_label(canvas, p, pin, PinSide::Right, 5.0);
        }
    }
    Footprint::new(w, h, d)
}
