// src/svg_models.rs

use crate::error::Result;
use bytes::Bytes;
use glam::Vec2;
use std::fmt::{self, Write};
use std::fs;
use std::path::Path;

pub const FONT_SANS: &str = "sans-serif";
pub const FONT_HELVETICA: &str = "Helvetica, Arial, sans-serif";
pub const FONT_MONO: &str = "monospace";

// --- Styles ---

/// Presentation attributes shared by every shape element.
///
/// `None` fields are left out of the output so SVG defaults apply.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Style {
    pub fill: Option<&'static str>,
    pub stroke: Option<&'static str>,
    pub stroke_width: Option<f32>,
    pub dash: Option<&'static str>,
    pub fill_opacity: Option<f32>,
    pub round_caps: bool,
    pub round_joins: bool,
}

impl Style {
    const BLANK: Style = Style {
        fill: None,
        stroke: None,
        stroke_width: None,
        dash: None,
        fill_opacity: None,
        round_caps: false,
        round_joins: false,
    };

    pub const fn filled(fill: &'static str) -> Self {
        Style {
            fill: Some(fill),
            ..Style::BLANK
        }
    }

    /// Outline only, no fill.
    pub const fn stroked(stroke: &'static str, width: f32) -> Self {
        Style {
            fill: Some("none"),
            stroke: Some(stroke),
            stroke_width: Some(width),
            ..Style::BLANK
        }
    }

    pub fn with_stroke(mut self, stroke: &'static str, width: f32) -> Self {
        self.stroke = Some(stroke);
        self.stroke_width = Some(width);
        self
    }

    pub fn dashed(mut self, pattern: &'static str) -> Self {
        self.dash = Some(pattern);
        self
    }

    pub fn rounded(mut self) -> Self {
        self.round_caps = true;
        self.round_joins = true;
        self
    }

    pub fn with_opacity(mut self, opacity: f32) -> Self {
        self.fill_opacity = Some(opacity);
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    Start,
    Middle,
    End,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    pub size: f32,
    pub family: &'static str,
    pub fill: Option<&'static str>,
    pub anchor: Anchor,
    pub bold: bool,
}

impl TextStyle {
    pub fn new(size: f32, family: &'static str) -> Self {
        TextStyle {
            size,
            family,
            fill: None,
            anchor: Anchor::Start,
            bold: false,
        }
    }

    pub fn fill(mut self, fill: &'static str) -> Self {
        self.fill = Some(fill);
        self
    }

    pub fn anchor(mut self, anchor: Anchor) -> Self {
        self.anchor = anchor;
        self
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }
}

// --- Elements ---

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub translate: Vec2,
    pub scale: f32,
}

impl Default for Transform {
    fn default() -> Self {
        Transform {
            translate: Vec2::ZERO,
            scale: 1.0,
        }
    }
}

impl Transform {
    pub fn is_identity(&self) -> bool {
        self.translate == Vec2::ZERO && self.scale == 1.0
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Element {
    Rect {
        origin: Vec2,
        size: Vec2,
        corner_radius: f32,
        style: Style,
    },
    Circle {
        center: Vec2,
        radius: f32,
        style: Style,
    },
    Line {
        from: Vec2,
        to: Vec2,
        style: Style,
    },
    /// Closed outline.
    Polygon { points: Vec<Vec2>, style: Style },
    /// Open outline.
    Polyline { points: Vec<Vec2>, style: Style },
    Text {
        content: String,
        at: Vec2,
        style: TextStyle,
    },
    Group(Group),
}

impl Element {
    pub fn rect(origin: Vec2, size: Vec2, corner_radius: f32, style: Style) -> Self {
        Element::Rect {
            origin,
            size,
            corner_radius,
            style,
        }
    }

    pub fn circle(center: Vec2, radius: f32, style: Style) -> Self {
        Element::Circle {
            center,
            radius,
            style,
        }
    }

    pub fn line(from: Vec2, to: Vec2, style: Style) -> Self {
        Element::Line { from, to, style }
    }

    pub fn polygon(points: Vec<Vec2>, style: Style) -> Self {
        Element::Polygon { points, style }
    }

    /// A regular polygon with its first vertex straight above `center`.
    pub fn regular_polygon(sides: usize, center: Vec2, radius: f32, style: Style) -> Self {
        let points = (0..sides)
            .map(|i| {
                let angle = -std::f32::consts::FRAC_PI_2
                    + i as f32 * std::f32::consts::TAU / sides as f32;
                center + Vec2::new(angle.cos(), angle.sin()) * radius
            })
            .collect();
        Element::Polygon { points, style }
    }

    pub fn polyline(points: Vec<Vec2>, style: Style) -> Self {
        Element::Polyline { points, style }
    }

    pub fn text(content: impl Into<String>, at: Vec2, style: TextStyle) -> Self {
        Element::Text {
            content: content.into(),
            at,
            style,
        }
    }

    pub fn as_group(&self) -> Option<&Group> {
        match self {
            Element::Group(group) => Some(group),
            _ => None,
        }
    }
}

/// Anything that vector elements can be appended to.
pub trait Canvas {
    fn push(&mut self, element: Element);
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Group {
    pub id: Option<String>,
    pub transform: Transform,
    pub children: Vec<Element>,
}

impl Group {
    pub fn new() -> Self {
        Group::default()
    }

    /// A group whose local origin sits at `at`.
    pub fn at(at: Vec2) -> Self {
        Group {
            transform: Transform {
                translate: at,
                scale: 1.0,
            },
            ..Default::default()
        }
    }

    pub fn scaled(mut self, scale: f32) -> Self {
        self.transform.scale = scale;
        self
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Depth-first search for a nested group carrying `id`.
    pub fn find_group(&self, id: &str) -> Option<&Group> {
        find_group_in(&self.children, id)
    }
}

impl Canvas for Group {
    fn push(&mut self, element: Element) {
        self.children.push(element);
    }
}

fn find_group_in<'a>(elements: &'a [Element], id: &str) -> Option<&'a Group> {
    for element in elements {
        if let Element::Group(group) = element {
            if group.id.as_deref() == Some(id) {
                return Some(group);
            }
            if let Some(found) = group.find_group(id) {
                return Some(found);
            }
        }
    }
    None
}

fn collect_texts<'a>(elements: &'a [Element], out: &mut Vec<&'a str>) {
    for element in elements {
        match element {
            Element::Text { content, .. } => out.push(content),
            Element::Group(group) => collect_texts(&group.children, out),
            _ => {}
        }
    }
}

// --- Pages ---

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageKind {
    Cover,
    Safety,
    HardwareInventory,
    PartsInventory,
    Step(u32),
    WiringDiagram,
    ComponentPreview,
}

/// One self-contained vector page. Content is append-only.
#[derive(Debug, Clone)]
pub struct Page {
    kind: PageKind,
    view_origin: Vec2,
    size: Vec2,
    elements: Vec<Element>,
}

impl Page {
    /// A page spanning `(0, 0)..size` on a white background.
    pub fn new(kind: PageKind, size: Vec2) -> Self {
        Self::with_view_origin(kind, Vec2::ZERO, size)
    }

    /// A page whose user-space origin sits at its center.
    pub fn centered(kind: PageKind, size: Vec2) -> Self {
        Self::with_view_origin(kind, -size / 2.0, size)
    }

    fn with_view_origin(kind: PageKind, view_origin: Vec2, size: Vec2) -> Self {
        let mut page = Page {
            kind,
            view_origin,
            size,
            elements: Vec::new(),
        };
        page.push(Element::rect(view_origin, size, 0.0, Style::filled("white")));
        page
    }

    pub fn kind(&self) -> PageKind {
        self.kind
    }

    pub fn size(&self) -> Vec2 {
        self.size
    }

    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    pub fn find_group(&self, id: &str) -> Option<&Group> {
        find_group_in(&self.elements, id)
    }

    /// Every text run on the page, in document order.
    pub fn texts(&self) -> Vec<&str> {
        let mut out = Vec::new();
        collect_texts(&self.elements, &mut out);
        out
    }

    pub fn to_svg(&self) -> String {
        self.to_string()
    }

    /// Finished page, ready to hand to a sink.
    pub fn to_bytes(&self) -> Bytes {
        Bytes::from(self.to_svg())
    }

    pub fn save_svg(&self, path: &Path) -> Result<()> {
        fs::write(path, self.to_bytes())?;
        Ok(())
    }
}

impl Canvas for Page {
    fn push(&mut self, element: Element) {
        self.elements.push(element);
    }
}

// --- SVG serialization ---

/// Coordinates rounded to two decimals, integers printed bare.
struct Num(f32);

impl fmt::Display for Num {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let v = (self.0 * 100.0).round() / 100.0;
        if v == v.trunc() {
            write!(f, "{}", v as i64)
        } else {
            write!(f, "{}", v)
        }
    }
}

fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

fn write_style(out: &mut impl Write, style: &Style) -> fmt::Result {
    if let Some(fill) = style.fill {
        write!(out, r#" fill="{}""#, fill)?;
    }
    if let Some(opacity) = style.fill_opacity {
        write!(out, r#" fill-opacity="{}""#, Num(opacity))?;
    }
    if let Some(stroke) = style.stroke {
        write!(out, r#" stroke="{}""#, stroke)?;
    }
    if let Some(width) = style.stroke_width {
        write!(out, r#" stroke-width="{}""#, Num(width))?;
    }
    if let Some(dash) = style.dash {
        write!(out, r#" stroke-dasharray="{}""#, dash)?;
    }
    if style.round_caps {
        out.write_str(r#" stroke-linecap="round""#)?;
    }
    if style.round_joins {
        out.write_str(r#" stroke-linejoin="round""#)?;
    }
    Ok(())
}

fn write_points(out: &mut impl Write, points: &[Vec2]) -> fmt::Result {
    for (i, p) in points.iter().enumerate() {
        if i > 0 {
            out.write_char(' ')?;
        }
        write!(out, "{},{}", Num(p.x), Num(p.y))?;
    }
    Ok(())
}

fn write_element(out: &mut impl Write, element: &Element, depth: usize) -> fmt::Result {
    let indent = "  ".repeat(depth);
    match element {
        Element::Rect {
            origin,
            size,
            corner_radius,
            style,
        } => {
            write!(
                out,
                r#"{}<rect x="{}" y="{}" width="{}" height="{}""#,
                indent,
                Num(origin.x),
                Num(origin.y),
                Num(size.x),
                Num(size.y)
            )?;
            if *corner_radius > 0.0 {
                write!(out, r#" rx="{}""#, Num(*corner_radius))?;
            }
            write_style(out, style)?;
            writeln!(out, "/>")
        }
        Element::Circle {
            center,
            radius,
            style,
        } => {
            write!(
                out,
                r#"{}<circle cx="{}" cy="{}" r="{}""#,
                indent,
                Num(center.x),
                Num(center.y),
                Num(*radius)
            )?;
            write_style(out, style)?;
            writeln!(out, "/>")
        }
        Element::Line { from, to, style } => {
            write!(
                out,
                r#"{}<line x1="{}" y1="{}" x2="{}" y2="{}""#,
                indent,
                Num(from.x),
                Num(from.y),
                Num(to.x),
                Num(to.y)
            )?;
            write_style(out, style)?;
            writeln!(out, "/>")
        }
        Element::Polygon { points, style } | Element::Polyline { points, style } => {
            let tag = if matches!(element, Element::Polygon { .. }) {
                "polygon"
            } else {
                "polyline"
            };
            write!(out, r#"{}<{} points=""#, indent, tag)?;
            write_points(out, points)?;
            out.write_char('"')?;
            write_style(out, style)?;
            writeln!(out, "/>")
        }
        Element::Text { content, at, style } => {
            write!(
                out,
                r#"{}<text x="{}" y="{}" font-size="{}" font-family="{}""#,
                indent,
                Num(at.x),
                Num(at.y),
                Num(style.size),
                style.family
            )?;
            if let Some(fill) = style.fill {
                write!(out, r#" fill="{}""#, fill)?;
            }
            match style.anchor {
                Anchor::Start => {}
                Anchor::Middle => out.write_str(r#" text-anchor="middle""#)?,
                Anchor::End => out.write_str(r#" text-anchor="end""#)?,
            }
            if style.bold {
                out.write_str(r#" font-weight="bold""#)?;
            }
            writeln!(out, ">{}</text>", escape_xml(content))
        }
        Element::Group(group) => {
            write!(out, "{}<g", indent)?;
            if let Some(id) = &group.id {
                write!(out, r#" id="{}""#, escape_xml(id))?;
            }
            if !group.transform.is_identity() {
                let t = group.transform;
                write!(
                    out,
                    r#" transform="translate({},{})"#,
                    Num(t.translate.x),
                    Num(t.translate.y)
                )?;
                if t.scale != 1.0 {
                    write!(out, " scale({})", Num(t.scale))?;
                }
                out.write_char('"')?;
            }
            writeln!(out, ">")?;
            for child in &group.children {
                write_element(out, child, depth + 1)?;
            }
            writeln!(out, "{}</g>", indent)
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="{} {} {} {}">"#,
            Num(self.size.x),
            Num(self.size.y),
            Num(self.view_origin.x),
            Num(self.view_origin.y),
            Num(self.size.x),
            Num(self.size.y)
        )?;
        for element in &self.elements {
            write_element(f, element, 1)?;
        }
        writeln!(f, "</svg>")
    }
}
