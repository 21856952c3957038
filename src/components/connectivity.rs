// src/components/connectivity.rs

use super::{Footprint, RenderOptions, corner};
use crate::projection::{FaceColors, iso_box, iso_point, iso_rect_top};
use crate::svg_models::{Canvas, Element, Style};
use glam::{Vec2, Vec3};

const BOARD: FaceColors = FaceColors::new("#f5f5f0", "#e0e0d8", "#eaeae2");

/// A 5-row block of tie points starting at `first` on the board surface.
fn hole_block(canvas: &mut dyn Canvas, first: Vec3, cols: usize, col_pitch: f32, radius: f32) {
    for row in 0..5 {
        for col in 0..cols {
            let p = iso_point(
                first.x + col as f32 * col_pitch,
                first.y + row as f32 * 3.0,
                first.z,
            );
            canvas.push(Element::circle(p, radius, Style::filled("#888")));
        }
    }
}

/// Half-size breadboard, 400 tie points. Only a representative hole grid is drawn.
pub fn breadboard_half(canvas: &mut dyn Canvas, center: Vec2, _opts: &RenderOptions) -> Footprint {
    let (w, h, d) = (83.0, 55.0, 3.0);
    let o = corner(center, w, h);
    iso_box(canvas, o.extend(0.0), Vec3::new(w, h, d), BOARD);

    // Power rails
    for (dy, fill) in [(2.0, "#ff4444"), (5.0, "#4444ff"), (h - 7.0, "#ff4444"), (h - 4.0, "#4444ff")] {
        iso_rect_top(canvas, Vec3::new(o.x + 3.0, o.y + dy, d + 0.2), w - 6.0, 2.0, fill);
    }
    hole_block(canvas, Vec3::new(o.x + 8.0, o.y + 12.0, d + 0.3), 10, 7.0, 0.8);
    iso_rect_top(
        canvas,
        Vec3::new(o.x + 3.0, center.y - 1.5, d + 0.2),
        w - 6.0,
        3.0,
        "#ddd",
    );
    hole_block(canvas, Vec3::new(o.x + 8.0, center.y + 5.0, d + 0.3), 10, 7.0, 0.8);
    Footprint::new(w, h, d)
}

/// Mini breadboard, 170 tie points.
pub fn breadboard_mini(canvas: &mut dyn Canvas, center: Vec2, _opts: &RenderOptions) -> Footprint {
    let (w, h, d) = (47.0, 35.0, 3.0);
    let o = corner(center, w, h);
    iso_box(canvas, o.extend(0.0), Vec3::new(w, h, d), BOARD);
    hole_block(canvas, Vec3::new(o.x + 5.0, o.y + 5.0, d + 0.3), 8, 5.0, 0.7);
    iso_rect_top(canvas, Vec3::new(o.x + 2.0, center.y - 1.0, d + 0.2), w - 4.0, 2.0, "#ddd");
    hole_block(canvas, Vec3::new(o.x + 5.0, center.y + 4.0, d + 0.3), 8, 5.0, 0.7);
    Footprint::new(w, h, d)
}
