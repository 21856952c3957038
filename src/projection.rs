// src/projection.rs

//! Isometric projection and the box primitives every component is built from.

use crate::svg_models::{Canvas, Element, Style};
use glam::{Vec2, Vec3};

pub const ISO_ANGLE_DEG: f32 = 30.0;

const DEFAULT_STROKE: &str = "#333";
const DEFAULT_STROKE_WIDTH: f32 = 1.5;

/// Maps a grid point to screen space.
///
/// `x` runs down-right, `y` runs down-left and `z` lifts the point straight up
/// the page. There is no inverse.
pub fn project(p: Vec3) -> Vec2 {
    let (sin, cos) = ISO_ANGLE_DEG.to_radians().sin_cos();
    Vec2::new((p.x - p.y) * cos, (p.x + p.y) * sin - p.z)
}

pub fn iso_point(x: f32, y: f32, z: f32) -> Vec2 {
    project(Vec3::new(x, y, z))
}

/// Flat fills for the three visible faces of a box. `top` is the lightest.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FaceColors {
    pub top: &'static str,
    pub right: &'static str,
    pub front: &'static str,
}

impl FaceColors {
    pub const fn new(top: &'static str, right: &'static str, front: &'static str) -> Self {
        FaceColors { top, right, front }
    }
}

/// Outline shared by every face of a box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Outline {
    pub color: &'static str,
    pub width: f32,
}

impl Default for Outline {
    fn default() -> Self {
        Outline {
            color: DEFAULT_STROKE,
            width: DEFAULT_STROKE_WIDTH,
        }
    }
}

fn face(canvas: &mut dyn Canvas, corners: [Vec3; 4], fill: &'static str, outline: Outline) {
    let points = corners.iter().map(|c| project(*c)).collect();
    canvas.push(Element::polygon(
        points,
        Style::filled(fill).with_stroke(outline.color, outline.width),
    ));
}

/// Top face of a box: a `w` × `h` rectangle lying flat at height `origin.z`.
pub fn iso_rect_top(canvas: &mut dyn Canvas, origin: Vec3, w: f32, h: f32, fill: &'static str) {
    iso_rect_top_outlined(canvas, origin, w, h, fill, Outline::default());
}

pub fn iso_rect_top_outlined(
    canvas: &mut dyn Canvas,
    origin: Vec3,
    w: f32,
    h: f32,
    fill: &'static str,
    outline: Outline,
) {
    let Vec3 { x, y, z } = origin;
    face(
        canvas,
        [
            Vec3::new(x, y, z),
            Vec3::new(x + w, y, z),
            Vec3::new(x + w, y + h, z),
            Vec3::new(x, y + h, z),
        ],
        fill,
        outline,
    );
}

/// Draws a box whose top face sits at `origin.z` and whose body hangs `size.z`
/// below it.
///
/// Faces are emitted back to front: the `+x` side, the `+y` side, then the top.
pub fn iso_box(canvas: &mut dyn Canvas, origin: Vec3, size: Vec3, colors: FaceColors) {
    let outline = Outline::default();
    let Vec3 { x, y, z } = origin;
    let Vec3 { x: w, y: h, z: d } = size;
    face(
        canvas,
        [
            Vec3::new(x + w, y, z),
            Vec3::new(x + w, y + h, z),
            Vec3::new(x + w, y + h, z - d),
            Vec3::new(x + w, y, z - d),
        ],
        colors.right,
        outline,
    );
    face(
        canvas,
        [
            Vec3::new(x, y + h, z),
            Vec3::new(x + w, y + h, z),
            Vec3::new(x + w, y + h, z - d),
            Vec3::new(x, y + h, z - d),
        ],
        colors.front,
        outline,
    );
    iso_rect_top_outlined(canvas, origin, w, h, colors.top, outline);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::svg_models::Group;

    #[test]
    fn box_emits_three_quadrilaterals() {
        let mut group = Group::new();
        iso_box(
            &mut group,
            Vec3::ZERO,
            Vec3::new(10.0, 5.0, 2.0),
            FaceColors::new("#eee", "#aaa", "#ccc"),
        );
        assert_eq!(group.children.len(), 3);
        for child in &group.children {
            match child {
                Element::Polygon { points, .. } => assert_eq!(points.len(), 4),
                other => panic!("expected a polygon face, got {:?}", other),
            }
        }
    }

    #[test]
    fn top_face_is_drawn_last_with_top_fill() {
        let mut group = Group::new();
        iso_box(
            &mut group,
            Vec3::ZERO,
            Vec3::ONE,
            FaceColors::new("#top", "#right", "#front"),
        );
        let fills: Vec<_> = group
            .children
            .iter()
            .map(|c| match c {
                Element::Polygon { style, .. } => style.fill,
                _ => None,
            })
            .collect();
        assert_eq!(fills, vec![Some("#right"), Some("#front"), Some("#top")]);
    }
}
