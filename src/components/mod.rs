// src/components/mod.rs

//! Parametric component renderers.
//!
//! Every renderer has the same shape: it draws around a grid-plane `center`
//! onto a [`Canvas`] and reports the [`Footprint`] it occupied. Renderers keep no
//! state and never call each other; shared drawing goes through
//! [`crate::projection`] and [`pin_label`].

pub mod connectivity;
pub mod hardware;
pub mod microcontrollers;
pub mod outputs;
pub mod power;
pub mod sensors;
pub mod structural;

use crate::svg_models::{Anchor, Canvas, Element, FONT_MONO, FONT_SANS, Style, TextStyle};
use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Uniform render contract shared by all components.
pub type RenderFn = fn(&mut dyn Canvas, Vec2, &RenderOptions) -> Footprint;

/// Bounding box of a component in grid units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Footprint {
    pub w: f32,
    pub h: f32,
    pub d: f32,
}

impl Footprint {
    pub const fn new(w: f32, h: f32, d: f32) -> Self {
        Footprint { w, h, d }
    }

    pub fn scaled(self, s: f32) -> Self {
        Footprint::new(self.w * s, self.h * s, self.d * s)
    }
}

/// Per-part size overrides for parametric components.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Dimensions {
    #[serde(default)]
    pub w: Option<f32>,
    #[serde(default)]
    pub h: Option<f32>,
    #[serde(default)]
    pub d: Option<f32>,
}

impl Dimensions {
    /// Fills every missing axis from `defaults`.
    pub fn resolve(&self, defaults: Footprint) -> Footprint {
        Footprint::new(
            self.w.unwrap_or(defaults.w),
            self.h.unwrap_or(defaults.h),
            self.d.unwrap_or(defaults.d),
        )
    }

    /// True when every given axis is finite and positive.
    pub fn is_valid(&self) -> bool {
        [self.w, self.h, self.d]
            .into_iter()
            .flatten()
            .all(|v| v.is_finite() && v > 0.0)
    }
}

/// Optional render parameters. `None` means "use the component's default".
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RenderOptions {
    pub show_pins: Option<bool>,
    pub scale: Option<f32>,
    pub dimensions: Option<Dimensions>,
}

impl RenderOptions {
    pub fn show_pins(mut self, show: bool) -> Self {
        self.show_pins = Some(show);
        self
    }

    pub fn scale(mut self, scale: f32) -> Self {
        self.scale = Some(scale);
        self
    }

    pub fn dimensions(mut self, dimensions: Dimensions) -> Self {
        self.dimensions = Some(dimensions);
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PinSide {
    Left,
    Right,
}

/// Anchor dot plus a label pushed away from the component on `side`.
pub fn pin_label(canvas: &mut dyn Canvas, at: Vec2, label: &str, side: PinSide, font_size: f32) {
    canvas.push(Element::circle(at, 2.0, Style::filled("#333")));
    let (dx, anchor) = match side {
        PinSide::Right => (8.0, Anchor::Start),
        PinSide::Left => (-8.0, Anchor::End),
    };
    canvas.push(Element::text(
        label,
        at + Vec2::new(dx, 2.5),
        TextStyle::new(font_size, FONT_MONO).fill("#333").anchor(anchor),
    ));
}

/// Silk-screen style name printed on a board's top face.
pub(crate) fn board_label(canvas: &mut dyn Canvas, at: Vec2, text: &str, size: f32, fill: &'static str) {
    canvas.push(Element::text(
        text,
        at,
        TextStyle::new(size, FONT_SANS)
            .fill(fill)
            .anchor(Anchor::Middle)
            .bold(),
    ));
}

/// Top-left grid corner of a `w` × `h` body centered on `center`.
pub(crate) fn corner(center: Vec2, w: f32, h: f32) -> Vec2 {
    center - Vec2::new(w, h) / 2.0
}
